//! # distance-rs — Exact Linear Distances
//!
//! Arbitrary-precision lengths, SI/imperial conversion, and locale-aware
//! display formatting.
//!
//! ## Design Principles
//!
//! 1. **Integers all the way down**: `Distance` is whole meters + nanometers;
//!    every unit is an exact number of nanometers
//! 2. **Overflow is an error, never a wrap**: all arithmetic returns `Result`
//! 3. **Formatting is pluggable**: formatters and converters resolve through
//!    a chain of factories, newest first, with built-in defaults last
//!
//! ## Quick Start
//!
//! ```rust
//! use distance_rs::{Distance, Length, LengthUnit, Locale};
//!
//! # fn example() -> distance_rs::Result<()> {
//! let run: Length = "10 km".parse()?;
//! let miles = distance_rs::convert(&run, LengthUnit::MILE)?;
//! assert_eq!(miles.to_string(), "6.213711922 mi");
//!
//! let us: Locale = "en-US".parse()?;
//! assert_eq!(distance_rs::format(run.distance(), &us)?, "6.21 mi");
//!
//! let gap = Distance::of_units(63, LengthUnit::INCH)?;
//! assert_eq!(gap.to_string(), "1.6002 m");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Modules
//!
//! | Module | Contents |
//! |--------|----------|
//! | `model` | `Distance`, `LengthUnit`, `Length`, `RoundingMode` |
//! | `fit` | `UnitFitter`, `RangeFitter`, `LogarithmicFitter` |
//! | `format` | `Locale`, `FormatOptions`, `DistanceFormatter` implementations |
//! | `convert` | `LengthConverter`, `ExactConverter`, `RoundingConverter` |
//! | `registry` | factory chains and the process-wide `Registry` |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod fit;
pub mod format;
pub mod convert;
pub mod registry;

// ============================================================================
// Re-exports: Model
// ============================================================================

pub use model::{
    Distance, Length, LengthUnit, SiUnit, ImperialUnit,
    UnitSystem, UnitRange, RoundingMode,
};

// ============================================================================
// Re-exports: Fitting, Formatting, Conversion
// ============================================================================

pub use fit::{UnitFitter, RangeFitter, LogarithmicFitter};
pub use format::{
    Locale, FormatOptions, UnitStyle,
    DistanceFormatter, UnitFormatter, FittingFormatter, CompoundFormatter,
};
pub use convert::{LengthConverter, ExactConverter, RoundingConverter};
pub use registry::{Registry, FormatRequest, FormatterFactory, ConverterFactory};

// ============================================================================
// Convenience entry points (process-wide registry)
// ============================================================================

/// Format with default options, fitting the unit to the locale's system.
pub fn format(distance: Distance, locale: &Locale) -> Result<String> {
    format_with(distance, locale, FormatOptions::default())
}

/// Format with explicit options.
pub fn format_with(distance: Distance, locale: &Locale, options: FormatOptions) -> Result<String> {
    Registry::global().format(distance, &FormatRequest::new(locale.clone(), options))
}

/// Format a length in its own unit.
pub fn format_length(length: &Length, locale: &Locale, options: FormatOptions) -> Result<String> {
    let request = FormatRequest::new(locale.clone(), options).with_unit(length.unit());
    Registry::global().format(length.distance(), &request)
}

/// Convert through the process-wide converter chain.
pub fn convert(length: &Length, target: LengthUnit) -> Result<Length> {
    Registry::global().convert(length, target)
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Arithmetic overflow: {0}")]
    Overflow(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Value is not finite: {0}")]
    NotFinite(f64),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    #[error("Invalid locale: {0}")]
    InvalidLocale(String),

    #[error("Invalid format options: {0}")]
    InvalidOptions(String),

    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
