//! Exact decimal rendering.
//!
//! Values arrive as a nanometer total and a unit size, both integers, so
//! rounding happens once, in integer arithmetic, under the caller's
//! [`RoundingMode`](crate::model::RoundingMode). No float ever touches the
//! printed digits.

use super::locale::NumberSymbols;
use super::options::FormatOptions;
use crate::Result;

/// A rendered number plus what plural selection needs to know about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedNumber {
    pub text: String,
    /// Integer part of the displayed (rounded) magnitude.
    pub integer: u128,
    /// Whether fraction digits were printed.
    pub has_fraction: bool,
}

/// Render `total_nm / unit_nm` per `options`.
pub fn format_decimal(
    total_nm: i128,
    unit_nm: i128,
    options: &FormatOptions,
    symbols: &NumberSymbols,
) -> Result<FormattedNumber> {
    options.validate()?;
    let digits = options.max_fraction_digits as u32;
    let scale = 10i128.pow(digits);
    // |total_nm| < 2^94 and scale <= 10^9, so the product fits in i128.
    let scaled = options.rounding.divide(total_nm * scale, unit_nm);
    Ok(render_scaled(scaled, digits, options.min_fraction_digits as u32, options.grouping, symbols))
}

/// Render an integer count of `10^-digits` steps.
pub(crate) fn render_scaled(
    scaled: i128,
    digits: u32,
    min_digits: u32,
    grouping: bool,
    symbols: &NumberSymbols,
) -> FormattedNumber {
    let scale = 10u128.pow(digits);
    let magnitude = scaled.unsigned_abs();
    let integer = magnitude / scale;
    let fraction = magnitude % scale;

    let mut text = String::new();
    if scaled < 0 {
        text.push(symbols.minus);
    }
    text.push_str(&group_digits(integer, grouping, symbols));

    let mut frac_digits = if digits > 0 {
        format!("{:0width$}", fraction, width = digits as usize)
    } else {
        String::new()
    };
    while frac_digits.len() > min_digits as usize && frac_digits.ends_with('0') {
        frac_digits.pop();
    }
    let has_fraction = !frac_digits.is_empty();
    if has_fraction {
        text.push(symbols.decimal);
        text.push_str(&frac_digits);
    }

    FormattedNumber { text, integer, has_fraction }
}

/// Integer digits with the locale's grouping separator every three places.
pub(crate) fn group_digits(value: u128, grouping: bool, symbols: &NumberSymbols) -> String {
    let plain = value.to_string();
    if !grouping || plain.len() < symbols.min_grouping_digits {
        return plain;
    }
    let mut out = String::with_capacity(plain.len() + plain.len() / 3 * 3);
    for (i, c) in plain.chars().enumerate() {
        if i > 0 && (plain.len() - i) % 3 == 0 {
            out.push(symbols.grouping);
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RoundingMode;

    const M: i128 = 1_000_000_000;

    fn en() -> NumberSymbols {
        NumberSymbols::default()
    }

    #[test]
    fn test_rounds_and_trims() {
        let options = FormatOptions::default();
        let n = format_decimal(1_234_567_891, M, &options, &en()).unwrap();
        assert_eq!(n.text, "1.23");
        assert_eq!(n.integer, 1);
        assert!(n.has_fraction);

        let n = format_decimal(1_500_000_000, M, &options, &en()).unwrap();
        assert_eq!(n.text, "1.5");

        let n = format_decimal(2 * M, M, &options, &en()).unwrap();
        assert_eq!(n.text, "2");
        assert!(!n.has_fraction);
    }

    #[test]
    fn test_min_fraction_digits_pad() {
        let options = FormatOptions::default().with_fraction_digits(2, 3);
        let n = format_decimal(2 * M, M, &options, &en()).unwrap();
        assert_eq!(n.text, "2.00");
    }

    #[test]
    fn test_rounding_mode_is_honoured() {
        let half = 2_500_000_000;
        let up = FormatOptions::default().with_fraction_digits(0, 0);
        let even = up.clone().with_rounding(RoundingMode::HalfEven);
        assert_eq!(format_decimal(half, M, &up, &en()).unwrap().text, "3");
        assert_eq!(format_decimal(half, M, &even, &en()).unwrap().text, "2");
    }

    #[test]
    fn test_no_negative_zero() {
        let options = FormatOptions::default();
        let n = format_decimal(-1, M, &options, &en()).unwrap();
        assert_eq!(n.text, "0");
        let n = format_decimal(-1_500_000_000, M, &options, &en()).unwrap();
        assert_eq!(n.text, "-1.5");
    }

    #[test]
    fn test_grouping() {
        let symbols = en();
        assert_eq!(group_digits(999, true, &symbols), "999");
        assert_eq!(group_digits(1_000, true, &symbols), "1,000");
        assert_eq!(group_digits(1_234_567, true, &symbols), "1,234,567");
        assert_eq!(group_digits(1_234_567, false, &symbols), "1234567");

        let es = NumberSymbols { decimal: ',', grouping: '.', minus: '-', min_grouping_digits: 5 };
        assert_eq!(group_digits(1_000, true, &es), "1000");
        assert_eq!(group_digits(10_000, true, &es), "10.000");
    }

    #[test]
    fn test_locale_symbols() {
        let de = NumberSymbols { decimal: ',', grouping: '.', minus: '-', min_grouping_digits: 4 };
        let n = format_decimal(12_345_678 * M + 900_000_000, M, &FormatOptions::default(), &de).unwrap();
        assert_eq!(n.text, "12.345.678,9");
    }

    #[test]
    fn test_invalid_options() {
        let options = FormatOptions { max_fraction_digits: 10, ..FormatOptions::default() };
        assert!(format_decimal(M, M, &options, &en()).is_err());
    }
}
