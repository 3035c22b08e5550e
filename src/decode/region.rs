use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::Vin;

/// Geographic zone encoded by the first WMI character (ISO 3780).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    /// `A`-`H`
    Africa,
    /// `J`-`R`
    Asia,
    /// `S`-`Z`
    Europe,
    /// `1`-`5`
    NorthAmerica,
    /// `6`-`7`
    Oceania,
    /// `8`-`9`
    SouthAmerica,
}

impl Region {
    /// Region for a first WMI character, if assigned.
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'A'..='H' => Some(Region::Africa),
            'J'..='R' => Some(Region::Asia),
            'S'..='Z' => Some(Region::Europe),
            '1'..='5' => Some(Region::NorthAmerica),
            '6' | '7' => Some(Region::Oceania),
            '8' | '9' => Some(Region::SouthAmerica),
            _ => None,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Region::Africa => "Africa",
            Region::Asia => "Asia",
            Region::Europe => "Europe",
            Region::NorthAmerica => "North America",
            Region::Oceania => "Oceania",
            Region::SouthAmerica => "South America",
        };
        f.write_str(name)
    }
}

/// Region of manufacture of `vin`.
pub fn region(vin: &Vin) -> Option<Region> {
    Region::from_code(vin.char_at(1))
}
