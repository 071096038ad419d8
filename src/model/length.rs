//! Length — a [`Distance`] viewed in a particular [`LengthUnit`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::distance::decimal_string;
use super::{Distance, LengthUnit, RoundingMode, UnitSystem};
use crate::fit::UnitFitter;
use crate::{Error, Result};

/// A distance together with the unit it should be read in.
///
/// Changing the unit never changes the stored distance, so conversions
/// through [`Length::to`] are lossless in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Length {
    distance: Distance,
    unit: LengthUnit,
}

impl Length {
    pub fn new(value: f64, unit: LengthUnit) -> Result<Self> {
        Ok(Self { distance: Distance::from_f64(value, unit)?, unit })
    }

    pub fn of(amount: i64, unit: LengthUnit) -> Result<Self> {
        Ok(Self { distance: Distance::of_units(amount, unit)?, unit })
    }

    pub const fn from_distance(distance: Distance, unit: LengthUnit) -> Self {
        Self { distance, unit }
    }

    pub fn value(&self) -> f64 {
        self.distance.to_f64(self.unit)
    }

    pub const fn distance(&self) -> Distance {
        self.distance
    }

    pub const fn unit(&self) -> LengthUnit {
        self.unit
    }

    pub const fn to(&self, unit: LengthUnit) -> Length {
        Length { distance: self.distance, unit }
    }

    /// Re-express in whatever unit `fitter` picks from `system`.
    pub fn fit(&self, fitter: &dyn UnitFitter, system: UnitSystem) -> Length {
        self.to(fitter.fit(self.distance, system))
    }

    pub fn try_add(&self, other: &Length) -> Result<Length> {
        Ok(Length { distance: self.distance.try_add(other.distance)?, unit: self.unit })
    }

    pub fn try_sub(&self, other: &Length) -> Result<Length> {
        Ok(Length { distance: self.distance.try_sub(other.distance)?, unit: self.unit })
    }
}

impl From<Length> for Distance {
    fn from(length: Length) -> Self {
        length.distance
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = decimal_string(self.distance.total_nanometers(), self.unit.nanometers(), 9);
        write!(f, "{} {}", value, self.unit)
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Fraction digits beyond this are dropped; they sit far below a nanometer
/// for every unit.
const MAX_PARSED_FRACTION_DIGITS: usize = 18;

impl FromStr for Length {
    type Err = Error;

    /// Parse `"<decimal><ws?><unit>"`, e.g. `"1.5 km"`, `"-3ft"`, `"+0.25 mi"`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let split = s
            .char_indices()
            .find(|&(i, c)| !(c.is_ascii_digit() || c == '.' || (i == 0 && (c == '-' || c == '+'))))
            .map(|(i, _)| i)
            .ok_or_else(|| Error::Parse(format!("missing unit in {s:?}")))?;

        let (number, unit) = s.split_at(split);
        let unit: LengthUnit = unit.parse()?;
        let distance = parse_decimal(number, unit)
            .map_err(|e| match e {
                Error::Overflow(_) => e,
                _ => Error::Parse(format!("invalid number in {s:?}")),
            })?;
        Ok(Length { distance, unit })
    }
}

/// Exact decimal → distance, rounded half-up at the nanometer.
fn parse_decimal(number: &str, unit: LengthUnit) -> Result<Distance> {
    let (negative, digits) = match number.as_bytes().first() {
        Some(b'-') => (true, &number[1..]),
        Some(b'+') => (false, &number[1..]),
        _ => (false, number),
    };

    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, ""));
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(Error::Parse(number.to_owned()));
    }
    if frac_part.contains('.') {
        return Err(Error::Parse(number.to_owned()));
    }
    let frac_part = &frac_part[..frac_part.len().min(MAX_PARSED_FRACTION_DIGITS)];

    let too_large = || Error::Overflow(format!("{number} {unit} is outside the representable distance range"));
    let unit_nm = unit.nanometers();

    // Whole units and the fraction are scaled separately, so a long
    // fraction never pushes an in-range value past i128.
    let mut whole: i128 = 0;
    for b in int_part.bytes() {
        whole = whole
            .checked_mul(10)
            .and_then(|w| w.checked_add((b - b'0') as i128))
            .ok_or_else(too_large)?;
    }
    let whole_nm = whole.checked_mul(unit_nm).ok_or_else(too_large)?;

    // At most 18 digits: below 10^18 times any unit size fits in i128.
    let fraction = frac_part.bytes().fold(0i128, |acc, b| acc * 10 + (b - b'0') as i128);
    let scale = 10i128.pow(frac_part.len() as u32);
    let fraction_nm = RoundingMode::HalfUp.divide(fraction * unit_nm, scale);

    let magnitude = whole_nm.checked_add(fraction_nm).ok_or_else(too_large)?;
    Distance::from_total_nanometers(if negative { -magnitude } else { magnitude })
}
