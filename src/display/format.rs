// ============================================================================
// Display Formatting
// Pure number-to-text rendering for the answer field
// ============================================================================
//
// Rules:
// - Values are rounded to 12 decimal places (half-to-even)
// - Integral values render without a fractional part
// - Grouped rendering ("1,234,567.5") is used when it fits in 15 characters
// - Anything longer falls back to exponential notation ("1.234568e+20")
// - A display narrower than both renderings cannot show the value

use super::errors::{CalcError, CalcResult};
use rust_decimal::prelude::*;

/// Decimal places kept when rendering a result
pub const DISPLAY_DECIMALS: u32 = 12;

/// Longest grouped rendering before switching to exponential notation
pub const GROUPED_MAX_LEN: usize = 15;

/// Thousands separator used by the display
pub const SEPARATOR: char = ',';

/// Format a result for the display.
///
/// # Errors
/// Returns `Domain` for NaN and infinite values, which have no textual
/// rendering on the keypad display.
///
/// # Example
/// ```
/// use calculatory::display::format_number;
///
/// assert_eq!(format_number(1_000_000.0).unwrap(), "1,000,000");
/// assert_eq!(format_number(0.5).unwrap(), "0.5");
/// assert_eq!(format_number(1e20).unwrap(), "1.000000e+20");
/// ```
pub fn format_number(value: f64) -> CalcResult<String> {
    if !value.is_finite() {
        return Err(CalcError::Domain);
    }

    // Anything below half of the last kept digit rounds to zero
    if value.abs() < 0.5e-12 {
        return Ok("0".to_string());
    }

    let Some(decimal) = Decimal::from_f64(value) else {
        // Outside the decimal range, which is far beyond the grouped limit
        return Ok(format_exponential(value));
    };

    let rounded = decimal.round_dp(DISPLAY_DECIMALS).normalize();
    if rounded.is_zero() {
        return Ok("0".to_string());
    }

    let grouped = group_thousands(&rounded.to_string());
    if grouped.len() <= GROUPED_MAX_LEN {
        Ok(grouped)
    } else {
        Ok(format_exponential(rounded.to_f64().unwrap_or(value)))
    }
}

/// Format a result for a display holding at most `max_len` characters.
///
/// Falls back to exponential notation when the regular rendering is too
/// wide.
///
/// # Errors
/// Returns `Domain` for non-finite values and for values that do not fit
/// `max_len` in either form.
pub fn format_fitting(value: f64, max_len: usize) -> CalcResult<String> {
    let formatted = format_number(value)?;
    if formatted.len() <= max_len {
        return Ok(formatted);
    }

    let exponential = format_exponential(value);
    if exponential.len() <= max_len {
        Ok(exponential)
    } else {
        Err(CalcError::Domain)
    }
}

/// Parse display text back into a number, ignoring thousands separators.
pub fn parse_display(text: &str) -> CalcResult<f64> {
    let cleaned: String = text.chars().filter(|&c| c != SEPARATOR).collect();
    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CalcError::Parse),
    }
}

/// Insert thousands separators into the integer part of a plain decimal string.
pub fn group_thousands(plain: &str) -> String {
    let (sign, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain),
    };
    let (integer, fraction) = match unsigned.find('.') {
        Some(dot) => unsigned.split_at(dot),
        None => (unsigned, ""),
    };

    let mut grouped = String::with_capacity(plain.len() + integer.len() / 3);
    grouped.push_str(sign);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(SEPARATOR);
        }
        grouped.push(digit);
    }
    grouped.push_str(fraction);
    grouped
}

/// Exponential notation with six mantissa digits and a signed,
/// at-least-two-digit exponent.
fn format_exponential(value: f64) -> String {
    let raw = format!("{:.6e}", value);
    match raw.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exponent.abs())
        },
        None => raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_values_drop_fraction() {
        assert_eq!(format_number(8.0).unwrap(), "8");
        assert_eq!(format_number(-42.0).unwrap(), "-42");
        assert_eq!(format_number(0.0).unwrap(), "0");
        assert_eq!(format_number(-0.0).unwrap(), "0");
    }

    #[test]
    fn test_thousand_separators() {
        assert_eq!(format_number(1_000_000.0).unwrap(), "1,000,000");
        assert_eq!(format_number(1234.5).unwrap(), "1,234.5");
        assert_eq!(format_number(-98765.25).unwrap(), "-98,765.25");
        assert_eq!(format_number(999.0).unwrap(), "999");
    }

    #[test]
    fn test_rounds_to_twelve_decimals() {
        assert_eq!(format_number(1.0 / 3.0).unwrap(), "0.333333333333");
        assert_eq!(format_number(2.0 / 3.0).unwrap(), "0.666666666667");
        assert_eq!(format_number(0.1 + 0.2).unwrap(), "0.3");
        assert_eq!(format_number(1e-13).unwrap(), "0");
    }

    #[test]
    fn test_exponential_fallback() {
        // "100,000,000,000,000,000,000" is far over the limit
        assert_eq!(format_number(1e20).unwrap(), "1.000000e+20");
        // 15 grouped characters still fit
        assert_eq!(format_number(100_000_000_000.0).unwrap(), "100,000,000,000");
        // 17 do not
        assert_eq!(format_number(1_000_000_000_000.0).unwrap(), "1.000000e+12");
        assert_eq!(format_number(-2.5e30).unwrap(), "-2.500000e+30");
        assert_eq!(format_number(12345.678901234567).unwrap(), "1.234568e+04");
    }

    #[test]
    fn test_format_fitting_narrow_display() {
        assert_eq!(format_fitting(74040.0, 15).unwrap(), "74,040");
        assert_eq!(format_fitting(123_456_789_012.0, 12).unwrap(), "1.234568e+11");
        assert_eq!(format_fitting(74040.0, 4), Err(CalcError::Domain));
        assert_eq!(format_fitting(7.0, 1).unwrap(), "7");
    }

    #[test]
    fn test_non_finite_is_domain_error() {
        assert_eq!(format_number(f64::NAN), Err(CalcError::Domain));
        assert_eq!(format_number(f64::INFINITY), Err(CalcError::Domain));
    }

    #[test]
    fn test_parse_display() {
        assert_eq!(parse_display("1,234.5").unwrap(), 1234.5);
        assert_eq!(parse_display("-0").unwrap(), 0.0);
        assert_eq!(parse_display("1.000000e+20").unwrap(), 1e20);
        assert_eq!(parse_display("Error"), Err(CalcError::Parse));
        assert_eq!(parse_display("-"), Err(CalcError::Parse));
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1234567"), "1,234,567");
        assert_eq!(group_thousands("-123456.789"), "-123,456.789");
        assert_eq!(group_thousands("12"), "12");
    }
}
