/// Clean up a VIN as typed or scanned by a human.
///
/// Trims, removes spaces and hyphens, and uppercases ASCII letters.
/// Banned letters are left alone: `O` is not rewritten to `0`, so a
/// mistyped VIN still fails validation instead of being guessed.
pub fn normalize(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .map(|c| c.to_ascii_uppercase())
        .collect()
}
