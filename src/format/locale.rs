//! Locale identifiers and the number conventions derived from them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::UnitSystem;
use crate::{Error, Result};

/// A BCP 47-style language tag reduced to language and region.
///
/// Language is stored lowercase, region uppercase. Script and variant
/// subtags are accepted and ignored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale {
    language: String,
    region: Option<String>,
}

impl Locale {
    pub fn new(language: &str, region: Option<&str>) -> Result<Self> {
        let invalid = || Error::InvalidLocale(format!("{language}-{}", region.unwrap_or("")));

        if !(2..=3).contains(&language.len()) || !language.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(invalid());
        }
        let region = match region {
            None => None,
            Some(r) if is_region(r) => Some(r.to_ascii_uppercase()),
            Some(_) => return Err(invalid()),
        };
        Ok(Self { language: language.to_ascii_lowercase(), region })
    }

    /// `en-US`.
    pub fn en_us() -> Self {
        Self { language: "en".into(), region: Some("US".into()) }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Imperial for the United States, Liberia and Myanmar; SI elsewhere.
    pub fn measurement_system(&self) -> UnitSystem {
        match self.region.as_deref() {
            Some("US" | "LR" | "MM") => UnitSystem::Imperial,
            _ => UnitSystem::Si,
        }
    }

    pub fn number_symbols(&self) -> NumberSymbols {
        const NBSP: char = '\u{00A0}';
        const NNBSP: char = '\u{202F}';

        let (decimal, grouping) = match (self.language.as_str(), self.region.as_deref()) {
            ("de" | "it", Some("CH" | "LI")) => ('.', '’'),
            ("fr", _) => (',', NNBSP),
            ("de" | "es" | "it" | "pt" | "nl" | "da" | "tr" | "id", _) => (',', '.'),
            ("ru" | "uk" | "pl" | "sv" | "fi" | "nb" | "cs" | "sk", _) => (',', NBSP),
            _ => ('.', ','),
        };
        // Spanish and Polish leave four-digit integers ungrouped.
        let min_grouping_digits = match self.language.as_str() {
            "es" | "pl" => 5,
            _ => 4,
        };
        NumberSymbols { decimal, grouping, minus: '-', min_grouping_digits }
    }
}

fn is_region(r: &str) -> bool {
    (r.len() == 2 && r.bytes().all(|b| b.is_ascii_alphabetic()))
        || (r.len() == 3 && r.bytes().all(|b| b.is_ascii_digit()))
}

fn is_script(s: &str) -> bool {
    let mut bytes = s.bytes();
    s.len() == 4
        && bytes.next().is_some_and(|b| b.is_ascii_uppercase())
        && bytes.all(|b| b.is_ascii_lowercase())
}

impl Default for Locale {
    fn default() -> Self {
        Self::en_us()
    }
}

impl FromStr for Locale {
    type Err = Error;

    /// Accepts `en`, `en-US`, `en_US`, `zh-Hant-TW`, `es-419`.
    ///
    /// A title-case script subtag after the language is skipped; any other
    /// subtag must be the region.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidLocale(s.to_owned());
        let mut parts = s.trim().split(['-', '_']).peekable();
        let language = parts.next().unwrap_or_default();
        parts.next_if(|p| is_script(p));
        let region = parts.next();
        if parts.next().is_some() || region.is_some_and(|r| !is_region(r)) {
            return Err(invalid());
        }
        Self::new(language, region).map_err(|_| invalid())
    }
}

impl TryFrom<String> for Locale {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.to_string()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.region {
            Some(region) => write!(f, "{}-{}", self.language, region),
            None => write!(f, "{}", self.language),
        }
    }
}

/// Characters used to render numbers in a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberSymbols {
    pub decimal: char,
    pub grouping: char,
    pub minus: char,
    /// Integers shorter than this are printed without separators.
    pub min_grouping_digits: usize,
}

impl Default for NumberSymbols {
    fn default() -> Self {
        Self { decimal: '.', grouping: ',', minus: '-', min_grouping_digits: 4 }
    }
}
