//! Unit fitting — choosing the unit a person would use to read a distance.
//!
//! Two strategies ship with the crate:
//!
//! | Fitter | Rule |
//! |--------|------|
//! | [`RangeFitter`] | ladder unit whose [`UnitRange`](crate::model::UnitRange) contains the magnitude |
//! | [`LogarithmicFitter`] | ladder unit whose value is closest to a pivot on a log scale |
//!
//! Both only consider the system's fitting ladder and return the system's
//! base unit for a zero distance.

use crate::model::{Distance, LengthUnit, UnitSystem};

/// Strategy for picking a display unit.
pub trait UnitFitter: Send + Sync {
    fn fit(&self, distance: Distance, system: UnitSystem) -> LengthUnit;
}

impl<F> UnitFitter for F
where
    F: Fn(Distance, UnitSystem) -> LengthUnit + Send + Sync,
{
    fn fit(&self, distance: Distance, system: UnitSystem) -> LengthUnit {
        self(distance, system)
    }
}

// ============================================================================
// RangeFitter
// ============================================================================

/// Picks the unit whose fitting range holds `|distance|`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RangeFitter;

impl UnitFitter for RangeFitter {
    fn fit(&self, distance: Distance, system: UnitSystem) -> LengthUnit {
        if distance.is_zero() {
            return system.base_unit();
        }
        let ladder = system.fitting_units();
        let unit = ladder
            .iter()
            .copied()
            .find(|u| u.range().is_some_and(|r| r.contains(distance)))
            // Ladders cover [0, ∞); only reachable if a ladder is misdeclared.
            .unwrap_or(ladder[ladder.len() - 1]);
        tracing::trace!(%distance, %unit, "range fit");
        unit
    }
}

// ============================================================================
// LogarithmicFitter
// ============================================================================

/// Picks the unit minimizing `|log10(value) - log10(pivot)|`.
///
/// With the default pivot of 10, 50 m stays in meters while 600 m becomes
/// 0.6 km. Ties go to the larger unit.
#[derive(Debug, Clone, Copy)]
pub struct LogarithmicFitter {
    pivot: f64,
}

impl LogarithmicFitter {
    pub const DEFAULT_PIVOT: f64 = 10.0;

    /// `pivot` must be positive and finite; anything else falls back to
    /// [`DEFAULT_PIVOT`](Self::DEFAULT_PIVOT).
    pub fn new(pivot: f64) -> Self {
        if pivot.is_finite() && pivot > 0.0 {
            Self { pivot }
        } else {
            tracing::warn!(pivot, "invalid logarithmic pivot, using default");
            Self::default()
        }
    }

    pub fn pivot(&self) -> f64 {
        self.pivot
    }
}

impl Default for LogarithmicFitter {
    fn default() -> Self {
        Self { pivot: Self::DEFAULT_PIVOT }
    }
}

impl UnitFitter for LogarithmicFitter {
    fn fit(&self, distance: Distance, system: UnitSystem) -> LengthUnit {
        if distance.is_zero() {
            return system.base_unit();
        }
        let target = self.pivot.log10();
        let mut best = system.base_unit();
        let mut best_score = f64::INFINITY;
        // Ascending ladder + `<=` lets the larger unit win ties.
        for &unit in system.fitting_units() {
            let score = (distance.to_f64(unit).abs().log10() - target).abs();
            if score <= best_score {
                best = unit;
                best_score = score;
            }
        }
        tracing::trace!(%distance, unit = %best, score = best_score, "logarithmic fit");
        best
    }
}
