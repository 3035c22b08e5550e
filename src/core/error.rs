use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reason a candidate string was rejected as a VIN.
///
/// Checks run in the order of the variants below and stop at the first
/// failure, so an earlier structural problem always masks a later one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VinError {
    /// The input is not exactly 17 characters long.
    #[error("invalid length: expected 17 characters, got {length}")]
    InvalidLength {
        /// Number of characters in the input.
        length: usize,
    },

    /// The input contains a character outside the VIN alphabet.
    #[error("illegal character {character:?} at position {position}")]
    IllegalCharacter {
        /// The first offending character.
        character: char,
        /// 1-indexed position of the offending character.
        position: usize,
    },

    /// Position 9 holds something other than `0`-`9` or `X`.
    #[error("illegal check character {character:?}: expected 0-9 or X")]
    IllegalChecksumCharacter {
        /// The character found at position 9.
        character: char,
    },

    /// The check character does not match the computed checksum.
    #[error("invalid checksum: expected check character {expected:?}, found {found:?}")]
    InvalidChecksum {
        /// The check character computed from the other 16 positions.
        expected: char,
        /// The check character present in the input.
        found: char,
    },
}

impl VinError {
    /// The fieldless kind of this error, for branching and serialization.
    pub fn kind(&self) -> VinErrorKind {
        match self {
            VinError::InvalidLength { .. } => VinErrorKind::InvalidLength,
            VinError::IllegalCharacter { .. } => VinErrorKind::IllegalCharacter,
            VinError::IllegalChecksumCharacter { .. } => VinErrorKind::IllegalChecksumCharacter,
            VinError::InvalidChecksum { .. } => VinErrorKind::InvalidChecksum,
        }
    }
}

/// Kind of a [`VinError`], in check order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum VinErrorKind {
    InvalidLength,
    IllegalCharacter,
    IllegalChecksumCharacter,
    InvalidChecksum,
}

impl std::fmt::Display for VinErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            VinErrorKind::InvalidLength => "invalid length",
            VinErrorKind::IllegalCharacter => "illegal character",
            VinErrorKind::IllegalChecksumCharacter => "illegal check character",
            VinErrorKind::InvalidChecksum => "invalid checksum",
        };
        f.write_str(name)
    }
}
