//! Distance formatters.
//!
//! A formatter is built for one locale and one set of options and then
//! reused; construction validates everything so `format` only fails on
//! arithmetic overflow.

use std::sync::Arc;

use smallvec::SmallVec;

use super::locale::{Locale, NumberSymbols};
use super::names::{unit_label, Plural};
use super::number::{format_decimal, group_digits, render_scaled, FormattedNumber};
use super::options::FormatOptions;
use crate::fit::UnitFitter;
use crate::model::{Distance, LengthUnit, UnitSystem};
use crate::{Error, Result};

/// Turns a distance into display text.
pub trait DistanceFormatter: Send + Sync {
    fn format(&self, distance: Distance) -> Result<String>;
}

impl<F> DistanceFormatter for F
where
    F: Fn(Distance) -> Result<String> + Send + Sync,
{
    fn format(&self, distance: Distance) -> Result<String> {
        self(distance)
    }
}

/// Locale, options and the symbols derived from them.
#[derive(Debug, Clone)]
struct Style {
    locale: Locale,
    options: FormatOptions,
    symbols: NumberSymbols,
}

impl Style {
    fn new(locale: Locale, options: FormatOptions) -> Result<Self> {
        options.validate()?;
        let symbols = locale.number_symbols();
        Ok(Self { locale, options, symbols })
    }

    fn system(&self) -> UnitSystem {
        self.options.system.unwrap_or_else(|| self.locale.measurement_system())
    }

    fn in_unit(&self, distance: Distance, unit: LengthUnit) -> Result<String> {
        let number = format_decimal(
            distance.total_nanometers(),
            unit.nanometers(),
            &self.options,
            &self.symbols,
        )?;
        Ok(self.labelled(&number, unit))
    }

    fn labelled(&self, number: &FormattedNumber, unit: LengthUnit) -> String {
        let plural = Plural::select(self.locale.language(), number.integer, number.has_fraction);
        let label = unit_label(unit, self.options.style, self.locale.language(), plural);
        format!("{} {}", number.text, label)
    }
}

// ============================================================================
// UnitFormatter
// ============================================================================

/// Always formats in one unit.
#[derive(Debug, Clone)]
pub struct UnitFormatter {
    unit: LengthUnit,
    style: Style,
}

impl UnitFormatter {
    pub fn new(unit: LengthUnit, locale: Locale, options: FormatOptions) -> Result<Self> {
        Ok(Self { unit, style: Style::new(locale, options)? })
    }

    pub fn unit(&self) -> LengthUnit {
        self.unit
    }
}

impl DistanceFormatter for UnitFormatter {
    fn format(&self, distance: Distance) -> Result<String> {
        self.style.in_unit(distance, self.unit)
    }
}

// ============================================================================
// FittingFormatter
// ============================================================================

/// Picks the unit per value with a [`UnitFitter`].
///
/// The system comes from the options, or the locale when the options leave
/// it unset.
pub struct FittingFormatter {
    fitter: Arc<dyn UnitFitter>,
    system: UnitSystem,
    style: Style,
}

impl FittingFormatter {
    pub fn new(fitter: Arc<dyn UnitFitter>, locale: Locale, options: FormatOptions) -> Result<Self> {
        let style = Style::new(locale, options)?;
        Ok(Self { fitter, system: style.system(), style })
    }

    pub fn system(&self) -> UnitSystem {
        self.system
    }
}

impl DistanceFormatter for FittingFormatter {
    fn format(&self, distance: Distance) -> Result<String> {
        let unit = self.fitter.fit(distance, self.system);
        // 999.996 m at two digits prints as 1000 m; refit the rounded value
        // so it reads 1 km instead.
        let digits = self.style.options.max_fraction_digits as u32;
        if let Ok(rounded) = distance.round_to(unit, digits, self.style.options.rounding) {
            let refit = self.fitter.fit(rounded, self.system);
            if refit != unit {
                return self.style.in_unit(rounded, refit);
            }
        }
        self.style.in_unit(distance, unit)
    }
}

// ============================================================================
// CompoundFormatter
// ============================================================================

/// Greedy decomposition across several units: `5 ft 3 in`, `1 km 200 m`.
///
/// The value is rounded once in the smallest unit and then split, so a
/// rounding carry lands in the larger units (`5 ft 11.999 in` → `6 ft`).
/// Zero parts are skipped; zero itself prints in the smallest unit.
#[derive(Debug, Clone)]
pub struct CompoundFormatter {
    /// Descending by size.
    units: SmallVec<[LengthUnit; 4]>,
    style: Style,
}

impl CompoundFormatter {
    /// Every unit must be a whole multiple of the smallest one.
    pub fn new(units: &[LengthUnit], locale: Locale, options: FormatOptions) -> Result<Self> {
        let mut sorted: SmallVec<[LengthUnit; 4]> = units.iter().copied().collect();
        sorted.sort_by_key(|u| std::cmp::Reverse(u.nanometers()));
        sorted.dedup();

        let smallest = *sorted
            .last()
            .ok_or_else(|| Error::InvalidOptions("compound format needs at least one unit".into()))?;
        if let Some(bad) = sorted.iter().find(|u| u.nanometers() % smallest.nanometers() != 0) {
            return Err(Error::InvalidOptions(format!(
                "{bad} is not a whole multiple of {smallest}"
            )));
        }

        Ok(Self { units: sorted, style: Style::new(locale, options)? })
    }

    pub fn feet_and_inches(locale: Locale, options: FormatOptions) -> Result<Self> {
        Self::new(&[LengthUnit::FOOT, LengthUnit::INCH], locale, options)
    }

    pub fn kilometers_and_meters(locale: Locale, options: FormatOptions) -> Result<Self> {
        Self::new(&[LengthUnit::KILOMETER, LengthUnit::METER], locale, options)
    }

    pub fn units(&self) -> &[LengthUnit] {
        &self.units
    }
}

impl DistanceFormatter for CompoundFormatter {
    fn format(&self, distance: Distance) -> Result<String> {
        let options = &self.style.options;
        let symbols = &self.style.symbols;
        let digits = options.max_fraction_digits as u32;
        let scale = 10u128.pow(digits);

        let (smallest, larger) = match self.units.split_last() {
            Some(split) => split,
            None => return Err(Error::InvalidOptions("compound format has no units".into())),
        };
        // Count of 10^-digits steps of the smallest unit.
        let steps = options
            .rounding
            .divide(distance.total_nanometers() * scale as i128, smallest.nanometers());
        let mut rest = steps.unsigned_abs();

        let mut parts: SmallVec<[String; 4]> = SmallVec::new();
        for unit in larger {
            let per_unit = (unit.nanometers() / smallest.nanometers()) as u128 * scale;
            let count = rest / per_unit;
            rest %= per_unit;
            if count > 0 {
                let number = FormattedNumber {
                    text: group_digits(count, options.grouping, symbols),
                    integer: count,
                    has_fraction: false,
                };
                parts.push(self.style.labelled(&number, *unit));
            }
        }
        if rest > 0 || parts.is_empty() {
            // `rest` never exceeds |steps|, so it fits back into i128.
            let number = render_scaled(
                rest as i128,
                digits,
                options.min_fraction_digits as u32,
                options.grouping,
                symbols,
            );
            parts.push(self.style.labelled(&number, *smallest));
        }

        let mut out = String::new();
        if steps < 0 {
            out.push(symbols.minus);
        }
        out.push_str(&parts.join(" "));
        Ok(out)
    }
}
