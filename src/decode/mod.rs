//! Reference lookups on a validated [`Vin`](crate::core::Vin).
//!
//! Maps the WMI to a geographic region, country and manufacturer, and the
//! model year code to a calendar year. The tables cover the ISO 3780
//! region and country assignments and a selection of common WMIs; an
//! unknown entry is reported as `None`, never as an error.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use vinlib::core::Vin;
//! use vinlib::decode::*;
//!
//! let vin = Vin::parse("1HGCM82633A004352").unwrap();
//! assert_eq!(region(&vin), Some(Region::NorthAmerica));
//! assert_eq!(country(&vin), Some("United States"));
//! assert_eq!(manufacturer(&vin), Some("Honda"));
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
//! assert_eq!(model_year(&vin, today), Some(2003));
//! ```

mod country;
mod describe;
mod manufacturer;
mod model_year;
mod region;

pub use country::country;
pub use describe::{Description, describe};
pub use manufacturer::{is_small_manufacturer, manufacturer, manufacturer_code, serial_number};
pub use model_year::{model_year, model_year_candidates};
pub use region::{Region, region};
