//! Length conversion.
//!
//! Converters are what the [`Registry`](crate::registry::Registry) hands
//! out for a `(from, to)` unit pair. The built-in [`ExactConverter`] only
//! relabels the distance; [`RoundingConverter`] also snaps it to a
//! display precision in the target unit.

use crate::model::{Length, LengthUnit, RoundingMode};
use crate::{Error, Result};

/// Converts a length into another unit.
pub trait LengthConverter: Send + Sync {
    fn convert(&self, length: &Length, target: LengthUnit) -> Result<Length>;
}

/// Lossless conversion: the distance is unchanged, only the unit moves.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactConverter;

impl LengthConverter for ExactConverter {
    fn convert(&self, length: &Length, target: LengthUnit) -> Result<Length> {
        Ok(length.to(target))
    }
}

/// Converts, then rounds to `fraction_digits` of the target unit.
#[derive(Debug, Clone, Copy)]
pub struct RoundingConverter {
    fraction_digits: u32,
    mode: RoundingMode,
}

impl RoundingConverter {
    pub const MAX_FRACTION_DIGITS: u32 = 9;

    pub fn new(fraction_digits: u32, mode: RoundingMode) -> Result<Self> {
        if fraction_digits > Self::MAX_FRACTION_DIGITS {
            return Err(Error::InvalidOptions(format!(
                "rounding converter supports at most {} fraction digits, got {fraction_digits}",
                Self::MAX_FRACTION_DIGITS
            )));
        }
        Ok(Self { fraction_digits, mode })
    }
}

impl LengthConverter for RoundingConverter {
    fn convert(&self, length: &Length, target: LengthUnit) -> Result<Length> {
        let rounded = length.distance().round_to(target, self.fraction_digits, self.mode)?;
        Ok(Length::from_distance(rounded, target))
    }
}
