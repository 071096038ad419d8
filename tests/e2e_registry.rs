//! End-to-end test for the process-wide registry.
//!
//! Kept to a single test: the global registry is shared by every test in
//! this binary, and the steps below depend on registration order.

use std::sync::Arc;

use distance_rs::{
    CompoundFormatter, ConverterFactory, Distance, DistanceFormatter, FormatOptions,
    FormatRequest, FormatterFactory, Length, LengthConverter, LengthUnit, Locale, Registry,
    RoundingConverter, RoundingMode, Result,
};
use pretty_assertions::assert_eq;

/// Formats US heights as feet and inches, declines everything else.
struct UsHeights;

impl FormatterFactory for UsHeights {
    fn name(&self) -> &str {
        "us-heights"
    }

    fn create(&self, request: &FormatRequest) -> Option<Result<Box<dyn DistanceFormatter>>> {
        if request.locale.region() != Some("US") || request.unit.is_some() {
            return None;
        }
        let formatter = CompoundFormatter::feet_and_inches(request.locale.clone(), request.options.clone());
        Some(formatter.map(|f| Box::new(f) as Box<dyn DistanceFormatter>))
    }
}

/// Rounds anything converted into miles to a tenth.
struct TenthsOfMiles;

impl ConverterFactory for TenthsOfMiles {
    fn name(&self) -> &str {
        "tenths-of-miles"
    }

    fn create(&self, _from: LengthUnit, to: LengthUnit) -> Option<Box<dyn LengthConverter>> {
        (to == LengthUnit::MILE)
            .then(|| RoundingConverter::new(1, RoundingMode::HalfUp).ok())
            .flatten()
            .map(|c| Box::new(c) as Box<dyn LengthConverter>)
    }
}

#[test]
fn test_global_registry_lifecycle() {
    let us: Locale = "en-US".parse().unwrap();
    let uk: Locale = "en-GB".parse().unwrap();
    let height = Distance::of_nanometers(1_854_200_000); // 73 in

    // Defaults only.
    assert_eq!(distance_rs::format(height, &us).unwrap(), "6.08 ft");
    assert_eq!(distance_rs::format(height, &uk).unwrap(), "1.85 m");

    // A plugin factory takes over US requests only.
    Registry::global().register_formatter(Arc::new(UsHeights));
    assert_eq!(distance_rs::format(height, &us).unwrap(), "6 ft 1 in");
    assert_eq!(distance_rs::format(height, &uk).unwrap(), "1.85 m");

    // Fixed-unit requests fall through to the default.
    let length = Length::from_distance(height, LengthUnit::CENTIMETER);
    assert_eq!(
        distance_rs::format_length(&length, &us, FormatOptions::default()).unwrap(),
        "185.42 cm"
    );

    // Converter chain.
    let run: Length = "10 km".parse().unwrap();
    assert_eq!(distance_rs::convert(&run, LengthUnit::MILE).unwrap().to_string(), "6.213711922 mi");
    Registry::global().register_converter(Arc::new(TenthsOfMiles));
    assert_eq!(distance_rs::convert(&run, LengthUnit::MILE).unwrap().to_string(), "6.2 mi");
    assert_eq!(distance_rs::convert(&run, LengthUnit::METER).unwrap().to_string(), "10000 m");

    // Removal restores the defaults.
    assert!(Registry::global().unregister_formatter("us-heights"));
    assert_eq!(distance_rs::format(height, &us).unwrap(), "6.08 ft");
    Registry::global().clear();
    assert!(Registry::global().converter_names().is_empty());
    assert_eq!(distance_rs::convert(&run, LengthUnit::MILE).unwrap().to_string(), "6.213711922 mi");
}
