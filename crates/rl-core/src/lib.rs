//! rl-core: stable foundation for roomload.
//!
//! Contains:
//! - units (uom SI types + constructors in building-physics units)
//! - numeric (Real + comparison tolerance)

pub mod numeric;
pub mod units;

pub use numeric::{Real, Tolerance};
pub use units::*;
