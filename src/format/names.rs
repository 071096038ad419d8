//! Localized unit names.
//!
//! Short labels are the unit symbols in every language. Long labels come
//! from a built-in table for English, German, French and Spanish; other
//! languages fall back to English.

use crate::model::{ImperialUnit, LengthUnit, SiUnit};

use super::options::UnitStyle;

/// CLDR plural category, reduced to the two length names need.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plural {
    One,
    Other,
}

impl Plural {
    /// Category for a number as displayed: its integer part and whether any
    /// fraction digits were printed.
    pub fn select(language: &str, integer: u128, has_fraction: bool) -> Plural {
        let one = match language {
            // French treats 0 and 1, with or without fraction, as singular.
            "fr" => integer <= 1,
            _ => integer == 1 && !has_fraction,
        };
        if one { Plural::One } else { Plural::Other }
    }
}

/// Label to print after the number.
pub fn unit_label(unit: LengthUnit, style: UnitStyle, language: &str, plural: Plural) -> &'static str {
    match style {
        UnitStyle::Short => unit.symbol(),
        UnitStyle::Long => {
            let (one, other) = long_names(unit, language);
            match plural {
                Plural::One => one,
                Plural::Other => other,
            }
        }
    }
}

fn long_names(unit: LengthUnit, language: &str) -> (&'static str, &'static str) {
    match language {
        "de" => german(unit),
        "fr" => french(unit),
        "es" => spanish(unit),
        _ => (unit.name(), unit.plural_name()),
    }
}

fn german(unit: LengthUnit) -> (&'static str, &'static str) {
    match unit {
        LengthUnit::Si(u) => match u {
            SiUnit::Nanometer => ("Nanometer", "Nanometer"),
            SiUnit::Micrometer => ("Mikrometer", "Mikrometer"),
            SiUnit::Millimeter => ("Millimeter", "Millimeter"),
            SiUnit::Centimeter => ("Zentimeter", "Zentimeter"),
            SiUnit::Decimeter => ("Dezimeter", "Dezimeter"),
            SiUnit::Meter => ("Meter", "Meter"),
            SiUnit::Kilometer => ("Kilometer", "Kilometer"),
        },
        LengthUnit::Imperial(u) => match u {
            ImperialUnit::Thou => ("Thou", "Thou"),
            ImperialUnit::Inch => ("Zoll", "Zoll"),
            ImperialUnit::Foot => ("Fuß", "Fuß"),
            ImperialUnit::Yard => ("Yard", "Yards"),
            ImperialUnit::Chain => ("Chain", "Chains"),
            ImperialUnit::Furlong => ("Furlong", "Furlongs"),
            ImperialUnit::Mile => ("Meile", "Meilen"),
            ImperialUnit::League => ("League", "Leagues"),
        },
    }
}

fn french(unit: LengthUnit) -> (&'static str, &'static str) {
    match unit {
        LengthUnit::Si(u) => match u {
            SiUnit::Nanometer => ("nanomètre", "nanomètres"),
            SiUnit::Micrometer => ("micromètre", "micromètres"),
            SiUnit::Millimeter => ("millimètre", "millimètres"),
            SiUnit::Centimeter => ("centimètre", "centimètres"),
            SiUnit::Decimeter => ("décimètre", "décimètres"),
            SiUnit::Meter => ("mètre", "mètres"),
            SiUnit::Kilometer => ("kilomètre", "kilomètres"),
        },
        LengthUnit::Imperial(u) => match u {
            ImperialUnit::Thou => ("mil", "mils"),
            ImperialUnit::Inch => ("pouce", "pouces"),
            ImperialUnit::Foot => ("pied", "pieds"),
            ImperialUnit::Yard => ("yard", "yards"),
            ImperialUnit::Chain => ("chaîne", "chaînes"),
            ImperialUnit::Furlong => ("furlong", "furlongs"),
            ImperialUnit::Mile => ("mile", "miles"),
            ImperialUnit::League => ("lieue", "lieues"),
        },
    }
}

fn spanish(unit: LengthUnit) -> (&'static str, &'static str) {
    match unit {
        LengthUnit::Si(u) => match u {
            SiUnit::Nanometer => ("nanómetro", "nanómetros"),
            SiUnit::Micrometer => ("micrómetro", "micrómetros"),
            SiUnit::Millimeter => ("milímetro", "milímetros"),
            SiUnit::Centimeter => ("centímetro", "centímetros"),
            SiUnit::Decimeter => ("decímetro", "decímetros"),
            SiUnit::Meter => ("metro", "metros"),
            SiUnit::Kilometer => ("kilómetro", "kilómetros"),
        },
        LengthUnit::Imperial(u) => match u {
            ImperialUnit::Thou => ("milésima", "milésimas"),
            ImperialUnit::Inch => ("pulgada", "pulgadas"),
            ImperialUnit::Foot => ("pie", "pies"),
            ImperialUnit::Yard => ("yarda", "yardas"),
            ImperialUnit::Chain => ("cadena", "cadenas"),
            ImperialUnit::Furlong => ("estadio", "estadios"),
            ImperialUnit::Mile => ("milla", "millas"),
            ImperialUnit::League => ("legua", "leguas"),
        },
    }
}
