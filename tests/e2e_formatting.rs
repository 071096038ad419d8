//! End-to-end tests for locale-aware formatting.
//!
//! Expected strings are what a reader in each locale would write by hand.
//! Every test builds its own `Registry` so the process-wide one stays
//! untouched.

use std::sync::Arc;

use distance_rs::{
    CompoundFormatter, Distance, DistanceFormatter, FittingFormatter, FormatOptions,
    FormatRequest, Length, LengthUnit, Locale, LogarithmicFitter, Registry, RoundingMode,
    UnitStyle, UnitSystem,
};
use pretty_assertions::assert_eq;

fn locale(tag: &str) -> Locale {
    tag.parse().unwrap()
}

fn fmt(distance: Distance, tag: &str, options: FormatOptions) -> String {
    Registry::new()
        .format(distance, &FormatRequest::new(locale(tag), options))
        .unwrap()
}

// ============================================================================
// 1. The same distance across locales
// ============================================================================

#[test]
fn test_five_kilometers_everywhere() {
    let d = Distance::of_meters(5_250);
    let options = FormatOptions::default();

    assert_eq!(fmt(d, "en-GB", options.clone()), "5.25 km");
    assert_eq!(fmt(d, "de-DE", options.clone()), "5,25 km");
    assert_eq!(fmt(d, "fr-FR", options.clone()), "5,25 km");
    assert_eq!(fmt(d, "de-CH", options.clone()), "5.25 km");
    // The US reads miles.
    assert_eq!(fmt(d, "en-US", options), "3.26 mi");
}

#[test]
fn test_grouping_separators() {
    let d = Distance::of_meters(1_234_567_000);
    let options = FormatOptions::default();

    assert_eq!(fmt(d, "en-GB", options.clone()), "1,234,567 km");
    assert_eq!(fmt(d, "de-DE", options.clone()), "1.234.567 km");
    assert_eq!(fmt(d, "fr-FR", options.clone()), "1\u{202F}234\u{202F}567 km");
    assert_eq!(fmt(d, "ru-RU", options.clone()), "1\u{A0}234\u{A0}567 km");
    assert_eq!(fmt(d, "de-CH", options.clone()), "1’234’567 km");
    assert_eq!(fmt(d, "en-GB", options.with_grouping(false)), "1234567 km");
}

#[test]
fn test_spanish_minimum_grouping() {
    let options = FormatOptions::default();
    assert_eq!(fmt(Distance::of_meters(4_500_000), "es-ES", options.clone()), "4500 km");
    assert_eq!(fmt(Distance::of_meters(45_000_000), "es-ES", options), "45.000 km");
}

// ============================================================================
// 2. Long names and plurals
// ============================================================================

#[test]
fn test_long_names() {
    let long = FormatOptions::default().with_style(UnitStyle::Long);

    assert_eq!(fmt(Distance::of_meters(1), "en-GB", long.clone()), "1 meter");
    assert_eq!(fmt(Distance::of_meters(3), "en-GB", long.clone()), "3 meters");
    assert_eq!(fmt(Distance::of_meters(3), "de-DE", long.clone()), "3 Meter");
    assert_eq!(fmt(Distance::of_meters(3), "es-ES", long.clone()), "3 metros");
    assert_eq!(fmt(Distance::of_meters(3), "fr-FR", long.clone()), "3 mètres");

    let mile = Distance::of_units(1, LengthUnit::MILE).unwrap();
    assert_eq!(fmt(mile, "en-US", long.clone()), "1 mile");
    let feet = Distance::of_units(12, LengthUnit::FOOT).unwrap();
    assert_eq!(fmt(feet, "en-US", long.clone()), "12 feet");
    // No table for Japanese; English names, local digits.
    assert_eq!(fmt(Distance::of_meters(2_000), "ja-JP", long), "2 kilometers");
}

#[test]
fn test_plural_depends_on_displayed_digits() {
    let long = FormatOptions::default().with_style(UnitStyle::Long);
    let one_and_a_bit = Distance::of(1, 1_000_000).unwrap();

    // Rounds to "1" at two digits, so singular.
    assert_eq!(fmt(one_and_a_bit, "en-GB", long.clone()), "1 meter");
    // Visible fraction: plural in English, singular in French.
    let three_digits = long.with_fraction_digits(0, 3);
    assert_eq!(fmt(one_and_a_bit, "en-GB", three_digits.clone()), "1.001 meters");
    assert_eq!(fmt(one_and_a_bit, "fr-FR", three_digits), "1,001 mètre");
}

// ============================================================================
// 3. Options
// ============================================================================

#[test]
fn test_options_from_json() {
    let options = FormatOptions::from_json(
        r#"{"max_fraction_digits": 3, "min_fraction_digits": 1, "system": "imperial", "rounding": "down"}"#,
    )
    .unwrap();
    let d = Distance::of_meters(10);
    assert_eq!(fmt(d, "en-GB", options), "32.808 ft");

    let options = FormatOptions::default().with_rounding(RoundingMode::Ceiling);
    assert_eq!(fmt(Distance::of(1, 1).unwrap(), "en-GB", options), "1.01 m");
}

#[test]
fn test_fixed_unit_via_format_length() {
    let length: Length = "1500 m".parse().unwrap();
    let text = distance_rs::format_length(&length, &locale("de-DE"), FormatOptions::default()).unwrap();
    assert_eq!(text, "1.500 m");
}

#[test]
fn test_min_fraction_digits() {
    let options = FormatOptions::default().with_fraction_digits(2, 2);
    assert_eq!(fmt(Distance::of_meters(3), "en-GB", options), "3.00 m");
}

// ============================================================================
// 4. Fitting at ladder boundaries
// ============================================================================

#[test]
fn test_ladder_boundaries_si() {
    let options = FormatOptions::default();
    let nm = Distance::of_nanometers;

    assert_eq!(fmt(nm(999), "en-GB", options.clone()), "999 nm");
    assert_eq!(fmt(nm(1_000), "en-GB", options.clone()), "1 µm");
    assert_eq!(fmt(nm(2_500_000), "en-GB", options.clone()), "2.5 mm");
    assert_eq!(fmt(nm(12_000_000), "en-GB", options.clone()), "1.2 cm");
    assert_eq!(fmt(nm(999_000_000), "en-GB", options.clone()), "99.9 cm");
    assert_eq!(fmt(Distance::of_meters(999), "en-GB", options), "999 m");
}

#[test]
fn test_ladder_boundaries_imperial() {
    let options = FormatOptions::default();
    let inches = |n| Distance::of_units(n, LengthUnit::INCH).unwrap();

    assert_eq!(fmt(inches(11), "en-US", options.clone()), "11 in");
    assert_eq!(fmt(inches(18), "en-US", options.clone()), "1.5 ft");
    assert_eq!(fmt(Distance::of_meters(800), "en-US", options.clone()), "2,624.67 ft");
    assert_eq!(fmt(Distance::of_meters(-1_000), "en-US", options), "-3,280.84 ft");
}

#[test]
fn test_rounding_moves_to_next_unit() {
    let options = FormatOptions::default();
    let almost_foot = Distance::of_units(12, LengthUnit::INCH)
        .unwrap()
        .try_sub(Distance::of_nanometers(1))
        .unwrap();
    assert_eq!(fmt(almost_foot, "en-US", options), "1 ft");
}

#[test]
fn test_logarithmic_fitting() {
    let f = FittingFormatter::new(
        Arc::new(LogarithmicFitter::default()),
        locale("en-GB"),
        FormatOptions::default(),
    )
    .unwrap();
    assert_eq!(f.format(Distance::of_meters(50)).unwrap(), "50 m");
    assert_eq!(f.format(Distance::of_meters(600)).unwrap(), "0.6 km");
    assert_eq!(f.format(Distance::of_meters(20_000)).unwrap(), "20 km");
}

// ============================================================================
// 5. Compound formatting
// ============================================================================

#[test]
fn test_height_in_feet_and_inches() {
    let f = CompoundFormatter::feet_and_inches(locale("en-US"), FormatOptions::default()).unwrap();
    let height = Distance::of_nanometers(1_778_000_000); // 1.778 m
    assert_eq!(f.format(height).unwrap(), "5 ft 10 in");
}

#[test]
fn test_compound_three_units_long() {
    let options = FormatOptions::default().with_style(UnitStyle::Long).with_system(UnitSystem::Imperial);
    let f = CompoundFormatter::new(
        &[LengthUnit::MILE, LengthUnit::YARD, LengthUnit::FOOT],
        locale("en-US"),
        options,
    )
    .unwrap();
    let d = Distance::of_units(1, LengthUnit::MILE)
        .unwrap()
        .try_add(Distance::of_units(3 * 10 + 1, LengthUnit::FOOT).unwrap())
        .unwrap();
    assert_eq!(f.format(d).unwrap(), "1 mile 10 yards 1 foot");
}

#[test]
fn test_compound_localized_numbers() {
    let f = CompoundFormatter::kilometers_and_meters(locale("de-DE"), FormatOptions::default()).unwrap();
    let d = Distance::of_nanometers(12_345_500_000_000); // 12 345.5 m
    assert_eq!(f.format(d).unwrap(), "12 km 345,5 m");
}
