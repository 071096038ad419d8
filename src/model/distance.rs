//! Exact-precision distance.
//!
//! A [`Distance`] is whole meters plus a nanometer remainder, the same split
//! a timestamp uses for seconds and nanoseconds. All arithmetic is done on
//! integers and every overflow is reported as [`Error::Overflow`].
//!
//! ```text
//! -0.25 m  →  meters = -1, nanometers = 750_000_000
//!  1.5  m  →  meters =  1, nanometers = 500_000_000
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Length, LengthUnit, RoundingMode};
use crate::{Error, Result};

/// A signed, exact length.
///
/// Invariant: `0 <= nanometers < 1_000_000_000`. Field order makes the
/// derived ordering the numeric ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "RawDistance")]
pub struct Distance {
    meters: i64,
    nanometers: i32,
}

#[derive(Deserialize)]
struct RawDistance {
    meters: i64,
    nanometers: i32,
}

impl TryFrom<RawDistance> for Distance {
    type Error = Error;

    fn try_from(raw: RawDistance) -> Result<Self> {
        if !(0..Distance::NANOMETERS_PER_METER as i32).contains(&raw.nanometers) {
            return Err(Error::Parse(format!(
                "nanometers must be in 0..1000000000, got {}",
                raw.nanometers
            )));
        }
        Ok(Distance { meters: raw.meters, nanometers: raw.nanometers })
    }
}

const NM: i128 = Distance::NANOMETERS_PER_METER as i128;
const MIN_TOTAL: i128 = i64::MIN as i128 * NM;
const MAX_TOTAL: i128 = i64::MAX as i128 * NM + (NM - 1);

// ============================================================================
// Construction
// ============================================================================

impl Distance {
    pub const NANOMETERS_PER_METER: i64 = 1_000_000_000;

    pub const ZERO: Distance = Distance { meters: 0, nanometers: 0 };
    pub const MIN: Distance = Distance { meters: i64::MIN, nanometers: 0 };
    pub const MAX: Distance = Distance {
        meters: i64::MAX,
        nanometers: (Distance::NANOMETERS_PER_METER - 1) as i32,
    };

    pub const fn of_meters(meters: i64) -> Self {
        Self { meters, nanometers: 0 }
    }

    pub const fn of_nanometers(nanometers: i64) -> Self {
        Self {
            meters: nanometers.div_euclid(Self::NANOMETERS_PER_METER),
            nanometers: nanometers.rem_euclid(Self::NANOMETERS_PER_METER) as i32,
        }
    }

    /// Meters plus an arbitrary nanometer adjustment, normalized.
    pub fn of(meters: i64, nanometer_adjustment: i64) -> Result<Self> {
        let total = meters as i128 * NM + nanometer_adjustment as i128;
        Self::from_total_nanometers(total)
    }

    /// `amount` whole units of `unit`.
    pub fn of_units(amount: i64, unit: LengthUnit) -> Result<Self> {
        let total = (amount as i128)
            .checked_mul(unit.nanometers())
            .ok_or_else(|| overflow(format!("{amount} {unit}")))?;
        Self::from_total_nanometers(total)
    }

    /// `value` of `unit`, rounded to the nearest nanometer.
    pub fn from_f64(value: f64, unit: LengthUnit) -> Result<Self> {
        if !value.is_finite() {
            return Err(Error::NotFinite(value));
        }
        let nanos = (value * unit.nanometers() as f64).round();
        if nanos < MIN_TOTAL as f64 || nanos > MAX_TOTAL as f64 {
            return Err(overflow(format!("{value} {unit}")));
        }
        Self::from_total_nanometers(nanos as i128)
    }

    pub fn from_total_nanometers(total: i128) -> Result<Self> {
        if !(MIN_TOTAL..=MAX_TOTAL).contains(&total) {
            return Err(overflow(format!("{total} nm")));
        }
        Ok(Self {
            meters: total.div_euclid(NM) as i64,
            nanometers: total.rem_euclid(NM) as i32,
        })
    }
}

fn overflow(what: String) -> Error {
    Error::Overflow(format!("{what} is outside the representable distance range"))
}

// ============================================================================
// Accessors
// ============================================================================

impl Distance {
    /// Whole meters, floored.
    pub const fn meters(&self) -> i64 {
        self.meters
    }

    /// Nanometer remainder in `0..1_000_000_000`.
    pub const fn nanometers(&self) -> i32 {
        self.nanometers
    }

    pub const fn total_nanometers(&self) -> i128 {
        self.meters as i128 * NM + self.nanometers as i128
    }

    pub const fn is_zero(&self) -> bool {
        self.meters == 0 && self.nanometers == 0
    }

    pub const fn is_negative(&self) -> bool {
        self.meters < 0
    }

    pub const fn signum(&self) -> i32 {
        if self.meters < 0 {
            -1
        } else if self.is_zero() {
            0
        } else {
            1
        }
    }

    /// Value in `unit` as a float.
    pub fn to_f64(&self, unit: LengthUnit) -> f64 {
        let unit_nm = unit.nanometers();
        let total = self.total_nanometers();
        // Split first so large distances keep their fractional part.
        let whole = total / unit_nm;
        let rest = total % unit_nm;
        whole as f64 + rest as f64 / unit_nm as f64
    }

    /// Whole units (truncated toward zero) and the remainder, which carries
    /// the sign of `self`.
    pub fn split(&self, unit: LengthUnit) -> (i128, Distance) {
        let unit_nm = unit.nanometers();
        let total = self.total_nanometers();
        let rest = total % unit_nm;
        // |rest| < |self|, so the remainder is always representable.
        let remainder = Self {
            meters: rest.div_euclid(NM) as i64,
            nanometers: rest.rem_euclid(NM) as i32,
        };
        (total / unit_nm, remainder)
    }

    /// Snap to a multiple of `unit / 10^fraction_digits`.
    ///
    /// When that step is not a whole number of nanometers the result is
    /// rounded again at the nanometer.
    pub fn round_to(&self, unit: LengthUnit, fraction_digits: u32, mode: RoundingMode) -> Result<Self> {
        let scale = 10i128
            .checked_pow(fraction_digits)
            .ok_or_else(|| Error::InvalidOptions(format!("{fraction_digits} fraction digits")))?;
        let steps_numerator = self
            .total_nanometers()
            .checked_mul(scale)
            .ok_or_else(|| overflow(format!("{self} at {fraction_digits} digits")))?;
        let steps = mode.divide(steps_numerator, unit.nanometers());
        let total = steps
            .checked_mul(unit.nanometers())
            .ok_or_else(|| overflow(format!("{self} rounded to {unit}")))?;
        Self::from_total_nanometers(RoundingMode::HalfUp.divide(total, scale))
    }
}

// ============================================================================
// Checked arithmetic
// ============================================================================

impl Distance {
    pub fn try_add(&self, other: Distance) -> Result<Self> {
        Self::from_total_nanometers(self.total_nanometers() + other.total_nanometers())
    }

    pub fn try_sub(&self, other: Distance) -> Result<Self> {
        Self::from_total_nanometers(self.total_nanometers() - other.total_nanometers())
    }

    pub fn try_mul(&self, factor: i64) -> Result<Self> {
        let total = self
            .total_nanometers()
            .checked_mul(factor as i128)
            .ok_or_else(|| overflow(format!("{self} * {factor}")))?;
        Self::from_total_nanometers(total)
    }

    /// Divide, truncating toward zero at the nanometer.
    pub fn try_div(&self, divisor: i64) -> Result<Self> {
        if divisor == 0 {
            return Err(Error::DivisionByZero);
        }
        Self::from_total_nanometers(self.total_nanometers() / divisor as i128)
    }

    /// Multiply by a float factor, rounding to the nearest nanometer.
    pub fn try_scale(&self, factor: f64) -> Result<Self> {
        if !factor.is_finite() {
            return Err(Error::NotFinite(factor));
        }
        let scaled = (self.total_nanometers() as f64 * factor).round();
        if scaled < MIN_TOTAL as f64 || scaled > MAX_TOTAL as f64 {
            return Err(overflow(format!("{self} * {factor}")));
        }
        Self::from_total_nanometers(scaled as i128)
    }

    pub fn try_neg(&self) -> Result<Self> {
        Self::from_total_nanometers(-self.total_nanometers())
    }

    pub fn try_abs(&self) -> Result<Self> {
        if self.is_negative() { self.try_neg() } else { Ok(*self) }
    }
}

// ============================================================================
// Display / FromStr
// ============================================================================

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} m", decimal_string(self.total_nanometers(), NM, 9))
    }
}

impl FromStr for Distance {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(s.parse::<Length>()?.distance())
    }
}

/// Exact `total / unit` with up to `max_digits` fraction digits, trailing
/// zeros trimmed. Locale-neutral; used by `Display` impls.
pub(crate) fn decimal_string(total: i128, unit: i128, max_digits: u32) -> String {
    let scale = 10i128.pow(max_digits);
    // |total| < 2^94 and scale <= 10^9 < 2^30, so this cannot overflow.
    let scaled = RoundingMode::HalfUp.divide(total * scale, unit);
    let magnitude = scaled.unsigned_abs();
    let int_part = magnitude / scale as u128;
    let frac_part = magnitude % scale as u128;

    let mut out = String::new();
    if scaled < 0 {
        out.push('-');
    }
    out.push_str(&int_part.to_string());
    if frac_part != 0 {
        let digits = format!("{:0width$}", frac_part, width = max_digits as usize);
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
    out
}
