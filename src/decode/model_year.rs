//! Model year from VIN position 10.
//!
//! The code cycles every 30 years starting 1980: `A`-`Y` without
//! `I, O, Q, U, Z`, then `1`-`9`. `0` is never used.

use chrono::{Datelike, NaiveDate};

use super::region::{Region, region};
use crate::core::Vin;

const YEAR_CODES: &str = "ABCDEFGHJKLMNPRSTVWXY123456789";

const FIRST_CYCLE_START: i32 = 1980;

const CYCLE_LENGTH: i32 = 30;

/// Every model year that `code` can stand for, oldest first.
pub fn model_year_candidates(code: char) -> Option<[i32; 2]> {
    let offset = YEAR_CODES.find(code)? as i32;
    let first = FIRST_CYCLE_START + offset;
    Some([first, first + CYCLE_LENGTH])
}

/// Resolve the model year of `vin`.
///
/// For North American vehicles position 7 disambiguates the cycle: a
/// digit means 1980-2009, a letter 2010-2039. This convention holds for
/// passenger cars, multipurpose vehicles and light trucks. Elsewhere the
/// most recent candidate not later than the year after `reference` is
/// chosen, since vehicles are sold as next year's model.
pub fn model_year(vin: &Vin, reference: NaiveDate) -> Option<i32> {
    let [older, newer] = model_year_candidates(vin.model_year_code())?;
    if region(vin) == Some(Region::NorthAmerica) {
        return if vin.char_at(7).is_ascii_digit() {
            Some(older)
        } else {
            Some(newer)
        };
    }
    let latest = reference.year() + 1;
    [older, newer].into_iter().filter(|&y| y <= latest).max()
}
