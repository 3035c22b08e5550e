use super::charset::{WEIGHTS, transliterate};
use super::error::VinError;
use super::validation::{check_characters, check_length};

/// Weighted sum of all 17 positions.
///
/// The input must already have passed the length and alphabet checks;
/// any stray character contributes 0.
pub(crate) fn weighted_sum(vin: &str) -> u32 {
    vin.chars()
        .zip(WEIGHTS)
        .map(|(c, weight)| transliterate(c).unwrap_or(0) * weight)
        .sum()
}

/// Check character for a modulo-11 remainder: `10` becomes `X`.
pub(crate) fn check_char_for(remainder: u32) -> char {
    match remainder {
        10 => 'X',
        r => char::from_digit(r, 10).unwrap_or('X'),
    }
}

/// Expected check character of an already structurally valid VIN.
pub(crate) fn expected_check_char(vin: &str) -> char {
    check_char_for(weighted_sum(vin) % 11)
}

/// Compute the check character for `raw`.
///
/// `raw` must be 17 characters from the VIN alphabet. The character
/// currently at position 9 is ignored, so a placeholder such as `0`
/// can be used to fill in a missing check digit.
pub fn compute_check_digit(raw: &str) -> Result<char, VinError> {
    check_length(raw)?;
    check_characters(raw)?;
    Ok(expected_check_char(raw))
}
