//! # Locale-aware Formatting
//!
//! ```text
//! Distance ──▶ UnitFitter ──▶ number (exact, rounded) ──▶ label (symbol | localized name)
//! ```
//!
//! | Formatter | Output |
//! |-----------|--------|
//! | `UnitFormatter` | `1.23 km` |
//! | `FittingFormatter` | `2 mi` in en-US, `3,2 km` in de-DE |
//! | `CompoundFormatter` | `5 ft 3 in` |

pub mod formatter;
pub mod locale;
pub mod names;
pub mod number;
pub mod options;

pub use formatter::{CompoundFormatter, DistanceFormatter, FittingFormatter, UnitFormatter};
pub use locale::{Locale, NumberSymbols};
pub use names::Plural;
pub use number::{format_decimal, FormattedNumber};
pub use options::{FormatOptions, UnitStyle};
