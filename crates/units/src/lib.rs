//! Grain-size unit conversions.
//!
//! ASTM E112 defines the grain-size number `G` through the count of grains per
//! square inch at 100x magnification, `N = 2^(G-1)`. At 1x that is
//! `2^(G-1) * (100 / 25.4)^2` grains per mm², so the mean grain diameter is
//!
//! ```text
//! d [µm] = 254 / 2^((G - 1) / 2)
//! G      = 1 + 2 * log2(254 / d)
//! ```
//!
//! Both directions round to two decimal places, so a round trip is lossy
//! within that tolerance.

pub mod convert;
pub mod error;

pub use convert::{DECIMAL_PLACES, astm_to_diameter, diameter_to_astm, round_to};
pub use error::UnitError;
