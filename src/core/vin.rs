use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::VinError;
use super::normalize::normalize;
use super::validation::validate;

/// A validated 17-character Vehicle Identification Number.
///
/// The only way to obtain a `Vin` is through validation, so every
/// instance satisfies the length, alphabet and checksum rules. The
/// sections are fixed-offset slices of the original string:
///
/// ```text
/// 1HG CM8263 3A004352
/// WMI  VDS     VIS
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Vin {
    full: String,
}

impl Vin {
    /// Validate `raw` and wrap it. `raw` is kept exactly as given.
    pub fn parse(raw: &str) -> Result<Self, VinError> {
        Self::try_from(raw.to_owned())
    }

    /// Like [`Vin::parse`], but first [`normalize`]s the input
    /// (whitespace, hyphens, lowercase).
    pub fn parse_lenient(raw: &str) -> Result<Self, VinError> {
        Self::try_from(normalize(raw))
    }

    /// The full 17-character VIN.
    pub fn as_str(&self) -> &str {
        &self.full
    }

    /// The full 17-character VIN.
    pub fn full(&self) -> &str {
        &self.full
    }

    /// World Manufacturer Identifier, positions 1-3.
    pub fn wmi(&self) -> &str {
        &self.full[0..3]
    }

    /// Vehicle Descriptor Section, positions 4-9 (includes the check digit).
    pub fn vds(&self) -> &str {
        &self.full[3..9]
    }

    /// Vehicle Indicator Section, positions 10-17.
    pub fn vis(&self) -> &str {
        &self.full[9..17]
    }

    /// Check character, position 9.
    pub fn check_digit(&self) -> char {
        self.char_at(9)
    }

    /// Model year code, position 10.
    pub fn model_year_code(&self) -> char {
        self.char_at(10)
    }

    /// Assembly plant code, position 11.
    pub fn plant_code(&self) -> char {
        self.char_at(11)
    }

    /// Production sequence number, positions 12-17.
    pub fn serial_number(&self) -> &str {
        &self.full[11..17]
    }

    // Validation guarantees 17 ASCII bytes.
    pub(crate) fn char_at(&self, position: usize) -> char {
        char::from(self.full.as_bytes()[position - 1])
    }
}

impl TryFrom<String> for Vin {
    type Error = VinError;

    fn try_from(full: String) -> Result<Self, Self::Error> {
        match validate(&full) {
            Ok(()) => Ok(Self { full }),
            Err(err) => {
                tracing::debug!(kind = %err.kind(), error = %err, "rejected VIN candidate");
                Err(err)
            }
        }
    }
}

impl TryFrom<&str> for Vin {
    type Error = VinError;

    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        Self::parse(raw)
    }
}

impl FromStr for Vin {
    type Err = VinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Vin> for String {
    fn from(vin: Vin) -> Self {
        vin.full
    }
}

impl AsRef<str> for Vin {
    fn as_ref(&self) -> &str {
        &self.full
    }
}

impl fmt::Display for Vin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full)
    }
}
