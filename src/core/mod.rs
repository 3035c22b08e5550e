//! Core VIN types, validation, and check digit arithmetic.
//!
//! This module implements the ISO 3779 structure checks and the
//! weighted modulo-11 check digit used for North American and most
//! European VINs.

pub mod charset;
mod checksum;
mod error;
mod normalize;
mod validation;
mod vin;

pub use charset::{CHECK_DIGIT_POSITION, VIN_LENGTH};
pub use checksum::compute_check_digit;
pub use error::*;
pub use normalize::normalize;
pub use validation::*;
pub use vin::*;
