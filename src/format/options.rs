//! Formatting options — the crate's configuration surface.
//!
//! Options deserialize from JSON with every field optional:
//!
//! ```json
//! { "max_fraction_digits": 1, "style": "long", "system": "imperial" }
//! ```

use serde::{Deserialize, Serialize};

use crate::model::{RoundingMode, UnitSystem};
use crate::{Error, Result};

/// How unit labels are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitStyle {
    /// Symbols: `km`, `ft`.
    #[default]
    Short,
    /// Localized names: `kilometers`, `Fuß`.
    Long,
}

/// Number and label policy for every formatter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatOptions {
    pub max_fraction_digits: u8,
    pub min_fraction_digits: u8,
    pub rounding: RoundingMode,
    pub grouping: bool,
    pub style: UnitStyle,
    /// `None` uses the locale's measurement system.
    pub system: Option<UnitSystem>,
}

impl FormatOptions {
    /// Fraction digits beyond this would overflow exact rendering of the
    /// largest distances.
    pub const MAX_FRACTION_DIGITS: u8 = 9;

    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_fraction_digits > Self::MAX_FRACTION_DIGITS {
            return Err(Error::InvalidOptions(format!(
                "max_fraction_digits {} exceeds {}",
                self.max_fraction_digits,
                Self::MAX_FRACTION_DIGITS
            )));
        }
        if self.min_fraction_digits > self.max_fraction_digits {
            return Err(Error::InvalidOptions(format!(
                "min_fraction_digits {} exceeds max_fraction_digits {}",
                self.min_fraction_digits, self.max_fraction_digits
            )));
        }
        Ok(())
    }

    pub fn with_fraction_digits(mut self, min: u8, max: u8) -> Self {
        self.min_fraction_digits = min;
        self.max_fraction_digits = max;
        self
    }

    pub fn with_style(mut self, style: UnitStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_system(mut self, system: UnitSystem) -> Self {
        self.system = Some(system);
        self
    }

    pub fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    pub fn with_grouping(mut self, grouping: bool) -> Self {
        self.grouping = grouping;
        self
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            max_fraction_digits: 2,
            min_fraction_digits: 0,
            rounding: RoundingMode::HalfUp,
            grouping: true,
            style: UnitStyle::Short,
            system: None,
        }
    }
}
