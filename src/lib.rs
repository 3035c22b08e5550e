//! # vinlib
//!
//! Validation and decoding of 17-character Vehicle Identification Numbers
//! (ISO 3779 / NHTSA 49 CFR 565).
//!
//! A [`Vin`](crate::core::Vin) can only be obtained through the validator,
//! so holding one means the string passed the length, alphabet, check
//! character and weighted modulo-11 checksum tests.
//!
//! ## Quick Start
//!
//! ```rust
//! use vinlib::core::*;
//!
//! let vin = Vin::parse("1HGCM82633A004352").unwrap();
//! assert_eq!(vin.wmi(), "1HG");
//! assert_eq!(vin.vds(), "CM8263");
//! assert_eq!(vin.vis(), "3A004352");
//!
//! assert_eq!(
//!     validate("1HGCM82623A004352"),
//!     Err(VinError::InvalidChecksum { expected: '3', found: '2' })
//! );
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Validation, check digit computation, the `Vin` value object |
//! | `decode` (default) | Region, country, manufacturer and model year lookups |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "decode")]
pub mod decode;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
