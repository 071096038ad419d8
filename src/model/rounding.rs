//! Rounding modes for exact integer division.

use serde::{Deserialize, Serialize};

/// How to resolve the discarded part of an exact division.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Round to nearest, ties away from zero.
    #[default]
    HalfUp,
    /// Round to nearest, ties to the even neighbour.
    HalfEven,
    /// Truncate toward zero.
    Down,
    /// Round away from zero.
    Up,
    /// Round toward negative infinity.
    Floor,
    /// Round toward positive infinity.
    Ceiling,
}

impl RoundingMode {
    /// Divide `n` by `d`, rounding the quotient with this mode.
    ///
    /// `d` must be non-zero. Callers guarantee this; every divisor in the
    /// crate is a unit size or a power of ten.
    pub fn divide(self, n: i128, d: i128) -> i128 {
        debug_assert!(d != 0, "divide by zero");
        let q = n / d;
        let r = n % d;
        if r == 0 {
            return q;
        }

        // Sign of the exact quotient; the truncated `q` is one step toward zero.
        let negative = (n < 0) != (d < 0);
        let away = if negative { q - 1 } else { q + 1 };

        match self {
            RoundingMode::Down => q,
            RoundingMode::Up => away,
            RoundingMode::Floor => if negative { away } else { q },
            RoundingMode::Ceiling => if negative { q } else { away },
            RoundingMode::HalfUp | RoundingMode::HalfEven => {
                let twice = r.unsigned_abs() * 2;
                let div = d.unsigned_abs();
                if twice > div {
                    away
                } else if twice < div {
                    q
                } else if self == RoundingMode::HalfUp || q % 2 != 0 {
                    away
                } else {
                    q
                }
            }
        }
    }
}
