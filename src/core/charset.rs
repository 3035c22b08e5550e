//! VIN alphabet, transliteration and position weights.
//!
//! All tables are built at compile time. The legal alphabet is the digits
//! plus the uppercase letters without `I`, `O` and `Q`.

/// Number of characters in a VIN.
pub const VIN_LENGTH: usize = 17;

/// 1-indexed position of the check character.
pub const CHECK_DIGIT_POSITION: usize = 9;

/// Weight applied to each position (1..=17). Position 9 carries 0.
pub const WEIGHTS: [u32; VIN_LENGTH] = [8, 7, 6, 5, 4, 3, 2, 10, 0, 9, 8, 7, 6, 5, 4, 3, 2];

/// Marker for bytes outside the VIN alphabet.
const ILLEGAL: u8 = u8::MAX;

/// Letter transliteration values used by the check digit.
#[rustfmt::skip]
const LETTER_VALUES: [(u8, u8); 23] = [
    (b'A', 1), (b'B', 2), (b'C', 3), (b'D', 4), (b'E', 5), (b'F', 6), (b'G', 7), (b'H', 8),
    (b'J', 1), (b'K', 2), (b'L', 3), (b'M', 4), (b'N', 5), (b'P', 7), (b'R', 9),
    (b'S', 2), (b'T', 3), (b'U', 4), (b'V', 5), (b'W', 6), (b'X', 7), (b'Y', 8), (b'Z', 9),
];

/// ASCII byte -> transliterated value, or `ILLEGAL`.
static CHAR_VALUES: [u8; 128] = build_char_values();

const fn build_char_values() -> [u8; 128] {
    let mut table = [ILLEGAL; 128];
    let mut digit = 0;
    while digit < 10 {
        table[(b'0' + digit) as usize] = digit;
        digit += 1;
    }
    let mut i = 0;
    while i < LETTER_VALUES.len() {
        let (letter, value) = LETTER_VALUES[i];
        table[letter as usize] = value;
        i += 1;
    }
    table
}

/// Transliterated value of `c`, or `None` if `c` may not appear in a VIN.
pub fn transliterate(c: char) -> Option<u32> {
    if !c.is_ascii() {
        return None;
    }
    match CHAR_VALUES[c as usize] {
        ILLEGAL => None,
        value => Some(u32::from(value)),
    }
}

/// Check whether `c` belongs to the VIN alphabet.
pub fn is_legal_char(c: char) -> bool {
    transliterate(c).is_some()
}

/// Check whether `c` may occupy the check digit position (`0`-`9` or `X`).
pub fn is_legal_check_char(c: char) -> bool {
    c.is_ascii_digit() || c == 'X'
}
