//! # Factory Registry
//!
//! Formatters and converters are resolved through a chain of factories.
//! Each factory may decline a request by returning `None`; the first one
//! that accepts wins.
//!
//! ```text
//! register(A); register(B)
//!
//! resolve ──▶ B ──None──▶ A ──None──▶ built-in default (always answers)
//! ```
//!
//! The built-in defaults terminate every chain and cannot be removed:
//!
//! | Request | Default |
//! |---------|---------|
//! | formatter with a unit | `UnitFormatter` |
//! | formatter without a unit | `FittingFormatter` + `RangeFitter` |
//! | converter | `ExactConverter` |
//!
//! ## Locking
//!
//! Factory lists sit behind `parking_lot::RwLock`. Resolution clones the
//! `Arc`s out and releases the lock before any factory runs, so a factory
//! may itself consult the registry.

use std::sync::{Arc, LazyLock};

use parking_lot::RwLock;

use crate::convert::{ExactConverter, LengthConverter};
use crate::fit::RangeFitter;
use crate::format::{DistanceFormatter, FittingFormatter, FormatOptions, Locale, UnitFormatter};
use crate::model::{Distance, Length, LengthUnit};
use crate::Result;

// ============================================================================
// Requests and factory traits
// ============================================================================

/// Everything a formatter factory gets to decide on.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatRequest {
    pub locale: Locale,
    pub options: FormatOptions,
    /// A fixed unit, or `None` to let the formatter fit one.
    pub unit: Option<LengthUnit>,
}

impl FormatRequest {
    pub fn new(locale: Locale, options: FormatOptions) -> Self {
        Self { locale, options, unit: None }
    }

    pub fn with_unit(mut self, unit: LengthUnit) -> Self {
        self.unit = Some(unit);
        self
    }
}

/// Builds formatters for the requests it understands.
pub trait FormatterFactory: Send + Sync {
    /// Identifier used by [`Registry::unregister_formatter`].
    fn name(&self) -> &str;

    /// `None` passes the request down the chain. `Some(Err(_))` stops
    /// resolution and reports the error.
    fn create(&self, request: &FormatRequest) -> Option<Result<Box<dyn DistanceFormatter>>>;
}

/// Builds converters for the unit pairs it understands.
pub trait ConverterFactory: Send + Sync {
    fn name(&self) -> &str;

    fn create(&self, from: LengthUnit, to: LengthUnit) -> Option<Box<dyn LengthConverter>>;
}

// ============================================================================
// Built-in defaults
// ============================================================================

fn default_formatter(request: &FormatRequest) -> Result<Box<dyn DistanceFormatter>> {
    let locale = request.locale.clone();
    let options = request.options.clone();
    match request.unit {
        Some(unit) => Ok(Box::new(UnitFormatter::new(unit, locale, options)?)),
        None => Ok(Box::new(FittingFormatter::new(Arc::new(RangeFitter), locale, options)?)),
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Ordered factory chains for formatting and conversion.
pub struct Registry {
    /// Oldest first; resolution walks from the back.
    formatters: RwLock<Vec<Arc<dyn FormatterFactory>>>,
    converters: RwLock<Vec<Arc<dyn ConverterFactory>>>,
}

static GLOBAL: LazyLock<Registry> = LazyLock::new(Registry::new);

impl Registry {
    /// An empty registry; only the built-in defaults answer.
    pub fn new() -> Self {
        Self {
            formatters: RwLock::new(Vec::new()),
            converters: RwLock::new(Vec::new()),
        }
    }

    /// The process-wide registry used by the crate-level convenience
    /// functions.
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    // ========================================================================
    // Registration
    // ========================================================================

    /// Add a formatter factory at the front of the chain.
    pub fn register_formatter(&self, factory: Arc<dyn FormatterFactory>) {
        tracing::debug!(factory = factory.name(), "registering formatter factory");
        self.formatters.write().push(factory);
    }

    /// Add a converter factory at the front of the chain.
    pub fn register_converter(&self, factory: Arc<dyn ConverterFactory>) {
        tracing::debug!(factory = factory.name(), "registering converter factory");
        self.converters.write().push(factory);
    }

    /// Remove every formatter factory called `name`. Returns whether any
    /// was removed.
    pub fn unregister_formatter(&self, name: &str) -> bool {
        let mut chain = self.formatters.write();
        let before = chain.len();
        chain.retain(|f| f.name() != name);
        let removed = chain.len() != before;
        if removed {
            tracing::debug!(factory = name, "unregistered formatter factory");
        }
        removed
    }

    /// Remove every converter factory called `name`. Returns whether any
    /// was removed.
    pub fn unregister_converter(&self, name: &str) -> bool {
        let mut chain = self.converters.write();
        let before = chain.len();
        chain.retain(|c| c.name() != name);
        let removed = chain.len() != before;
        if removed {
            tracing::debug!(factory = name, "unregistered converter factory");
        }
        removed
    }

    /// Drop all registered factories, leaving only the defaults.
    pub fn clear(&self) {
        self.formatters.write().clear();
        self.converters.write().clear();
        tracing::debug!("cleared factory registry");
    }

    pub fn formatter_names(&self) -> Vec<String> {
        self.formatters.read().iter().rev().map(|f| f.name().to_owned()).collect()
    }

    pub fn converter_names(&self) -> Vec<String> {
        self.converters.read().iter().rev().map(|c| c.name().to_owned()).collect()
    }

    // ========================================================================
    // Resolution
    // ========================================================================

    pub fn formatter(&self, request: &FormatRequest) -> Result<Box<dyn DistanceFormatter>> {
        let chain: Vec<_> = self.formatters.read().iter().rev().cloned().collect();
        for factory in &chain {
            if let Some(formatter) = factory.create(request) {
                tracing::debug!(factory = factory.name(), locale = %request.locale, "resolved formatter");
                return formatter;
            }
        }
        default_formatter(request)
    }

    pub fn converter(&self, from: LengthUnit, to: LengthUnit) -> Box<dyn LengthConverter> {
        let chain: Vec<_> = self.converters.read().iter().rev().cloned().collect();
        for factory in &chain {
            if let Some(converter) = factory.create(from, to) {
                tracing::debug!(factory = factory.name(), %from, %to, "resolved converter");
                return converter;
            }
        }
        Box::new(ExactConverter)
    }

    // ========================================================================
    // One-shot helpers
    // ========================================================================

    pub fn format(&self, distance: Distance, request: &FormatRequest) -> Result<String> {
        self.formatter(request)?.format(distance)
    }

    pub fn convert(&self, length: &Length, target: LengthUnit) -> Result<Length> {
        self.converter(length.unit(), target).convert(length, target)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::RoundingConverter;
    use crate::model::RoundingMode;

    struct Fixed(&'static str, &'static str);

    impl FormatterFactory for Fixed {
        fn name(&self) -> &str {
            self.0
        }

        fn create(&self, _request: &FormatRequest) -> Option<Result<Box<dyn DistanceFormatter>>> {
            let text = self.1;
            Some(Ok(Box::new(move |_: Distance| -> Result<String> { Ok(text.to_owned()) })))
        }
    }

    struct Declines;

    impl FormatterFactory for Declines {
        fn name(&self) -> &str {
            "declines"
        }

        fn create(&self, _request: &FormatRequest) -> Option<Result<Box<dyn DistanceFormatter>>> {
            None
        }
    }

    fn request() -> FormatRequest {
        FormatRequest::new("en-GB".parse().unwrap(), FormatOptions::default())
    }

    #[test]
    fn test_default_chain() {
        let registry = Registry::new();
        assert_eq!(registry.format(Distance::of_meters(1500), &request()).unwrap(), "1.5 km");
        let fixed = request().with_unit(LengthUnit::METER);
        assert_eq!(registry.format(Distance::of_meters(1500), &fixed).unwrap(), "1,500 m");
    }

    #[test]
    fn test_newest_factory_wins() {
        let registry = Registry::new();
        registry.register_formatter(Arc::new(Fixed("a", "from a")));
        registry.register_formatter(Arc::new(Fixed("b", "from b")));
        assert_eq!(registry.format(Distance::ZERO, &request()).unwrap(), "from b");
        assert_eq!(registry.formatter_names(), vec!["b", "a"]);

        assert!(registry.unregister_formatter("b"));
        assert!(!registry.unregister_formatter("b"));
        assert_eq!(registry.format(Distance::ZERO, &request()).unwrap(), "from a");
    }

    #[test]
    fn test_declining_factory_falls_through() {
        let registry = Registry::new();
        registry.register_formatter(Arc::new(Fixed("a", "from a")));
        registry.register_formatter(Arc::new(Declines));
        assert_eq!(registry.format(Distance::ZERO, &request()).unwrap(), "from a");

        registry.clear();
        assert_eq!(registry.format(Distance::ZERO, &request()).unwrap(), "0 m");
    }

    #[test]
    fn test_default_formatter_reports_invalid_options() {
        let registry = Registry::new();
        let mut bad = request();
        bad.options.max_fraction_digits = 42;
        assert!(registry.formatter(&bad).is_err());
    }

    struct RoundingToKm;

    impl ConverterFactory for RoundingToKm {
        fn name(&self) -> &str {
            "rounding-km"
        }

        fn create(&self, _from: LengthUnit, to: LengthUnit) -> Option<Box<dyn LengthConverter>> {
            if to != LengthUnit::KILOMETER {
                return None;
            }
            RoundingConverter::new(0, RoundingMode::HalfUp)
                .ok()
                .map(|c| Box::new(c) as Box<dyn LengthConverter>)
        }
    }

    #[test]
    fn test_converter_chain() {
        let registry = Registry::new();
        let length = Length::of(1, LengthUnit::MILE).unwrap();

        let exact = registry.convert(&length, LengthUnit::KILOMETER).unwrap();
        assert_eq!(exact.value(), 1.609344);

        registry.register_converter(Arc::new(RoundingToKm));
        assert_eq!(registry.convert(&length, LengthUnit::KILOMETER).unwrap().value(), 2.0);
        // Declined pairs still use the exact default.
        assert_eq!(registry.convert(&length, LengthUnit::FOOT).unwrap().value(), 5280.0);

        assert_eq!(registry.converter_names(), vec!["rounding-km"]);
        assert!(registry.unregister_converter("rounding-km"));
        assert_eq!(registry.convert(&length, LengthUnit::KILOMETER).unwrap().value(), 1.609344);
    }
}
