//! # Length Model
//!
//! Value types that every other module speaks: exact distances, units,
//! and lengths (a distance paired with a unit).
//!
//! Design rule: no locale, no formatting policy, no shared state here.
//! This module is pure data and integer arithmetic.

pub mod distance;
pub mod length;
pub mod rounding;
pub mod unit;

pub use distance::Distance;
pub use length::Length;
pub use rounding::RoundingMode;
pub use unit::{ImperialUnit, LengthUnit, SiUnit, UnitRange, UnitSystem};
