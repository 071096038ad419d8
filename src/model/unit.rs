//! Length units — a closed hierarchy of SI and imperial units.
//!
//! Every unit carries its exact size in nanometers, so conversions between
//! units never go through floating point. Imperial units use the
//! international definitions (1 in = 0.0254 m exactly), which makes every
//! one of them an integer number of nanometers.
//!
//! Each system has a *fitting ladder*: the units a human would pick for
//! display, with contiguous, non-overlapping magnitude ranges.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use super::Distance;
use crate::Error;

// ============================================================================
// Unit systems
// ============================================================================

/// A family of units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitSystem {
    Si,
    Imperial,
}

const SI_LADDER: [LengthUnit; 6] = [
    LengthUnit::NANOMETER,
    LengthUnit::MICROMETER,
    LengthUnit::MILLIMETER,
    LengthUnit::CENTIMETER,
    LengthUnit::METER,
    LengthUnit::KILOMETER,
];

const IMPERIAL_LADDER: [LengthUnit; 3] = [
    LengthUnit::INCH,
    LengthUnit::FOOT,
    LengthUnit::MILE,
];

impl UnitSystem {
    /// The unit used for values that carry no magnitude (zero).
    pub fn base_unit(self) -> LengthUnit {
        match self {
            UnitSystem::Si => LengthUnit::METER,
            UnitSystem::Imperial => LengthUnit::FOOT,
        }
    }

    /// Fitting ladder in ascending order of size.
    pub fn fitting_units(self) -> &'static [LengthUnit] {
        match self {
            UnitSystem::Si => &SI_LADDER,
            UnitSystem::Imperial => &IMPERIAL_LADDER,
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitSystem::Si => write!(f, "SI"),
            UnitSystem::Imperial => write!(f, "imperial"),
        }
    }
}

// ============================================================================
// Concrete units
// ============================================================================

/// Metric units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SiUnit {
    Nanometer,
    Micrometer,
    Millimeter,
    Centimeter,
    Decimeter,
    Meter,
    Kilometer,
}

impl SiUnit {
    pub const fn nanometers(self) -> i128 {
        match self {
            SiUnit::Nanometer => 1,
            SiUnit::Micrometer => 1_000,
            SiUnit::Millimeter => 1_000_000,
            SiUnit::Centimeter => 10_000_000,
            SiUnit::Decimeter => 100_000_000,
            SiUnit::Meter => 1_000_000_000,
            SiUnit::Kilometer => 1_000_000_000_000,
        }
    }
}

/// Imperial units, international yard-and-pound definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImperialUnit {
    /// 1/1000 inch, also called a mil.
    Thou,
    Inch,
    Foot,
    Yard,
    /// 22 yards.
    Chain,
    /// 10 chains.
    Furlong,
    Mile,
    /// 3 miles.
    League,
}

impl ImperialUnit {
    pub const fn nanometers(self) -> i128 {
        match self {
            ImperialUnit::Thou => 25_400,
            ImperialUnit::Inch => 25_400_000,
            ImperialUnit::Foot => 304_800_000,
            ImperialUnit::Yard => 914_400_000,
            ImperialUnit::Chain => 20_116_800_000,
            ImperialUnit::Furlong => 201_168_000_000,
            ImperialUnit::Mile => 1_609_344_000_000,
            ImperialUnit::League => 4_828_032_000_000,
        }
    }
}

// ============================================================================
// LengthUnit
// ============================================================================

/// Any unit of length understood by the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LengthUnit {
    Si(SiUnit),
    Imperial(ImperialUnit),
}

/// Magnitude range in which a unit is the natural display choice.
///
/// `lower` is inclusive, `upper` exclusive; `None` means unbounded.
/// Ranges compare against the absolute value of a distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitRange {
    pub lower: Distance,
    pub upper: Option<Distance>,
}

impl UnitRange {
    const fn new(lower_nm: i64, upper_nm: Option<i64>) -> Self {
        let upper = match upper_nm {
            Some(nm) => Some(Distance::of_nanometers(nm)),
            None => None,
        };
        Self { lower: Distance::of_nanometers(lower_nm), upper }
    }

    /// Whether `|distance|` falls inside this range.
    pub fn contains(&self, distance: Distance) -> bool {
        let magnitude = distance.total_nanometers().abs();
        magnitude >= self.lower.total_nanometers()
            && self.upper.is_none_or(|upper| magnitude < upper.total_nanometers())
    }
}

impl LengthUnit {
    pub const NANOMETER: LengthUnit = LengthUnit::Si(SiUnit::Nanometer);
    pub const MICROMETER: LengthUnit = LengthUnit::Si(SiUnit::Micrometer);
    pub const MILLIMETER: LengthUnit = LengthUnit::Si(SiUnit::Millimeter);
    pub const CENTIMETER: LengthUnit = LengthUnit::Si(SiUnit::Centimeter);
    pub const DECIMETER: LengthUnit = LengthUnit::Si(SiUnit::Decimeter);
    pub const METER: LengthUnit = LengthUnit::Si(SiUnit::Meter);
    pub const KILOMETER: LengthUnit = LengthUnit::Si(SiUnit::Kilometer);

    pub const THOU: LengthUnit = LengthUnit::Imperial(ImperialUnit::Thou);
    pub const INCH: LengthUnit = LengthUnit::Imperial(ImperialUnit::Inch);
    pub const FOOT: LengthUnit = LengthUnit::Imperial(ImperialUnit::Foot);
    pub const YARD: LengthUnit = LengthUnit::Imperial(ImperialUnit::Yard);
    pub const CHAIN: LengthUnit = LengthUnit::Imperial(ImperialUnit::Chain);
    pub const FURLONG: LengthUnit = LengthUnit::Imperial(ImperialUnit::Furlong);
    pub const MILE: LengthUnit = LengthUnit::Imperial(ImperialUnit::Mile);
    pub const LEAGUE: LengthUnit = LengthUnit::Imperial(ImperialUnit::League);

    /// Every unit, SI first, each system in ascending size.
    pub fn all() -> &'static [LengthUnit] {
        const ALL: [LengthUnit; 15] = [
            LengthUnit::NANOMETER,
            LengthUnit::MICROMETER,
            LengthUnit::MILLIMETER,
            LengthUnit::CENTIMETER,
            LengthUnit::DECIMETER,
            LengthUnit::METER,
            LengthUnit::KILOMETER,
            LengthUnit::THOU,
            LengthUnit::INCH,
            LengthUnit::FOOT,
            LengthUnit::YARD,
            LengthUnit::CHAIN,
            LengthUnit::FURLONG,
            LengthUnit::MILE,
            LengthUnit::LEAGUE,
        ];
        &ALL
    }

    pub fn system(self) -> UnitSystem {
        match self {
            LengthUnit::Si(_) => UnitSystem::Si,
            LengthUnit::Imperial(_) => UnitSystem::Imperial,
        }
    }

    /// Exact size of one unit in nanometers.
    pub const fn nanometers(self) -> i128 {
        match self {
            LengthUnit::Si(u) => u.nanometers(),
            LengthUnit::Imperial(u) => u.nanometers(),
        }
    }

    /// Size of one unit in meters. Lossy for display only; use
    /// [`nanometers`](Self::nanometers) for arithmetic.
    pub fn ratio_to_meter(self) -> f64 {
        self.nanometers() as f64 / Distance::NANOMETERS_PER_METER as f64
    }

    pub fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Si(u) => match u {
                SiUnit::Nanometer => "nm",
                SiUnit::Micrometer => "µm",
                SiUnit::Millimeter => "mm",
                SiUnit::Centimeter => "cm",
                SiUnit::Decimeter => "dm",
                SiUnit::Meter => "m",
                SiUnit::Kilometer => "km",
            },
            LengthUnit::Imperial(u) => match u {
                ImperialUnit::Thou => "th",
                ImperialUnit::Inch => "in",
                ImperialUnit::Foot => "ft",
                ImperialUnit::Yard => "yd",
                ImperialUnit::Chain => "ch",
                ImperialUnit::Furlong => "fur",
                ImperialUnit::Mile => "mi",
                ImperialUnit::League => "lea",
            },
        }
    }

    /// English singular name.
    pub fn name(self) -> &'static str {
        self.english_names().0
    }

    /// English plural name.
    pub fn plural_name(self) -> &'static str {
        self.english_names().1
    }

    fn english_names(self) -> (&'static str, &'static str) {
        match self {
            LengthUnit::Si(u) => match u {
                SiUnit::Nanometer => ("nanometer", "nanometers"),
                SiUnit::Micrometer => ("micrometer", "micrometers"),
                SiUnit::Millimeter => ("millimeter", "millimeters"),
                SiUnit::Centimeter => ("centimeter", "centimeters"),
                SiUnit::Decimeter => ("decimeter", "decimeters"),
                SiUnit::Meter => ("meter", "meters"),
                SiUnit::Kilometer => ("kilometer", "kilometers"),
            },
            LengthUnit::Imperial(u) => match u {
                ImperialUnit::Thou => ("thou", "thou"),
                ImperialUnit::Inch => ("inch", "inches"),
                ImperialUnit::Foot => ("foot", "feet"),
                ImperialUnit::Yard => ("yard", "yards"),
                ImperialUnit::Chain => ("chain", "chains"),
                ImperialUnit::Furlong => ("furlong", "furlongs"),
                ImperialUnit::Mile => ("mile", "miles"),
                ImperialUnit::League => ("league", "leagues"),
            },
        }
    }

    /// Fitting range, present only for units on their system's ladder.
    pub fn range(self) -> Option<UnitRange> {
        let range = match self {
            LengthUnit::Si(u) => match u {
                SiUnit::Nanometer => UnitRange::new(0, Some(1_000)),
                SiUnit::Micrometer => UnitRange::new(1_000, Some(1_000_000)),
                SiUnit::Millimeter => UnitRange::new(1_000_000, Some(10_000_000)),
                SiUnit::Centimeter => UnitRange::new(10_000_000, Some(1_000_000_000)),
                SiUnit::Meter => UnitRange::new(1_000_000_000, Some(1_000_000_000_000)),
                SiUnit::Kilometer => UnitRange::new(1_000_000_000_000, None),
                SiUnit::Decimeter => return None,
            },
            LengthUnit::Imperial(u) => match u {
                ImperialUnit::Inch => UnitRange::new(0, Some(304_800_000)),
                ImperialUnit::Foot => UnitRange::new(304_800_000, Some(1_609_344_000_000)),
                ImperialUnit::Mile => UnitRange::new(1_609_344_000_000, None),
                ImperialUnit::Thou
                | ImperialUnit::Yard
                | ImperialUnit::Chain
                | ImperialUnit::Furlong
                | ImperialUnit::League => return None,
            },
        };
        Some(range)
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Symbols, matched exactly: `mm` and `Mm` are not the same unit.
static SYMBOLS: LazyLock<HashMap<&'static str, LengthUnit>> = LazyLock::new(|| {
    let mut map: HashMap<_, _> = LengthUnit::all().iter().map(|&u| (u.symbol(), u)).collect();
    // ASCII and Greek-mu spellings of the micro sign.
    map.insert("um", LengthUnit::MICROMETER);
    map.insert("μm", LengthUnit::MICROMETER);
    map
});

/// Lowercased English names, singular and plural.
static NAMES: LazyLock<HashMap<&'static str, LengthUnit>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    for &unit in LengthUnit::all() {
        map.insert(unit.name(), unit);
        map.insert(unit.plural_name(), unit);
    }
    map.insert("mil", LengthUnit::THOU);
    map.insert("mils", LengthUnit::THOU);
    map.insert("metre", LengthUnit::METER);
    map.insert("metres", LengthUnit::METER);
    map.insert("kilometre", LengthUnit::KILOMETER);
    map.insert("kilometres", LengthUnit::KILOMETER);
    map.insert("centimetre", LengthUnit::CENTIMETER);
    map.insert("centimetres", LengthUnit::CENTIMETER);
    map.insert("millimetre", LengthUnit::MILLIMETER);
    map.insert("millimetres", LengthUnit::MILLIMETER);
    map
});

impl FromStr for LengthUnit {
    type Err = Error;

    /// Symbols are case-sensitive; names are not.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        SYMBOLS
            .get(s)
            .or_else(|| NAMES.get(s.to_lowercase().as_str()))
            .copied()
            .ok_or_else(|| Error::UnknownUnit(s.to_owned()))
    }
}

impl TryFrom<String> for LengthUnit {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<LengthUnit> for String {
    fn from(unit: LengthUnit) -> Self {
        unit.symbol().to_owned()
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
