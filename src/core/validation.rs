//! The four ordered VIN checks.
//!
//! 1. length is exactly 17 characters
//! 2. every character is in the VIN alphabet
//! 3. position 9 is `0`-`9` or `X`
//! 4. position 9 equals the computed check character
//!
//! The first failing check decides the error.

use super::charset::{CHECK_DIGIT_POSITION, VIN_LENGTH, is_legal_char, is_legal_check_char};
use super::checksum::expected_check_char;
use super::error::VinError;

/// Validate `raw` as a VIN.
///
/// Pure and deterministic: the same input always yields the same result.
///
/// ```
/// use vinlib::core::{VinError, validate};
///
/// assert!(validate("1HGCM82633A004352").is_ok());
/// assert_eq!(validate(""), Err(VinError::InvalidLength { length: 0 }));
/// ```
pub fn validate(raw: &str) -> Result<(), VinError> {
    check_length(raw)?;
    check_characters(raw)?;
    let found = check_char_at_position(raw)?;
    check_checksum(raw, found)
}

/// `true` if `raw` passes all four checks.
pub fn is_valid(raw: &str) -> bool {
    validate(raw).is_ok()
}

pub(crate) fn check_length(raw: &str) -> Result<(), VinError> {
    let length = raw.chars().count();
    if length != VIN_LENGTH {
        return Err(VinError::InvalidLength { length });
    }
    Ok(())
}

pub(crate) fn check_characters(raw: &str) -> Result<(), VinError> {
    match raw.chars().enumerate().find(|&(_, c)| !is_legal_char(c)) {
        Some((i, character)) => Err(VinError::IllegalCharacter {
            character,
            position: i + 1,
        }),
        None => Ok(()),
    }
}

fn check_char_at_position(raw: &str) -> Result<char, VinError> {
    // Length was checked, so position 9 exists.
    let character = raw
        .chars()
        .nth(CHECK_DIGIT_POSITION - 1)
        .ok_or_else(|| VinError::InvalidLength {
            length: raw.chars().count(),
        })?;
    if !is_legal_check_char(character) {
        return Err(VinError::IllegalChecksumCharacter { character });
    }
    Ok(character)
}

fn check_checksum(raw: &str, found: char) -> Result<(), VinError> {
    let expected = expected_check_char(raw);
    if expected != found {
        return Err(VinError::InvalidChecksum { expected, found });
    }
    Ok(())
}
