//! Numeric parse and format primitives shared by the command drivers.

use crate::engine::error::ConversionError;

/// Parses a captured digit group in the given base.
pub fn parse_radix(digits: &str, radix: u32) -> Result<i128, ConversionError> {
    Ok(i128::from_str_radix(digits, radix)?)
}

/// Parses decimal text directly: whitespace is trimmed, locale-free.
pub fn parse_decimal(text: &str) -> Result<i128, ConversionError> {
    Ok(text.trim().parse()?)
}

/// Combines an exponential literal's captured components as
/// `mantissa * 10^exponent`, rounded to 18 fractional digits to suppress
/// floating-point noise, and renders it as a plain decimal string.
pub fn exp_to_decimal(mantissa: &str, exponent: &str) -> Result<String, ConversionError> {
    let mantissa: f64 = mantissa.trim().parse()?;
    let exponent: f64 = exponent.trim().parse()?;
    let value = mantissa * 10f64.powf(exponent);
    if !value.is_finite() {
        return Err(ConversionError::NonFinite);
    }
    let rounded = (value * 1e18).round() / 1e18;
    if !rounded.is_finite() {
        // The 1e18 scaling overflows for large exponents even when the
        // value itself is finite.
        return Err(ConversionError::NonFinite);
    }
    Ok(strip_float(rounded))
}

/// Renders a decimal value in exponential notation: the mantissa is
/// normalized by magnitude into [1, 10] and glued to the exponent with the
/// configured marker. Zero short-circuits to `0<marker>0`; the
/// normalization loop would never terminate on it.
pub fn decimal_to_exp(text: &str, marker: &str) -> Result<String, ConversionError> {
    let value: f64 = text.trim().parse()?;
    if !value.is_finite() {
        return Err(ConversionError::NonFinite);
    }
    if value == 0.0 {
        return Ok(format!("0{marker}0"));
    }
    let mut base = value;
    let mut exp = 0i32;
    while base.abs() > 10.0 {
        base /= 10.0;
        exp += 1;
    }
    while base.abs() < 1.0 {
        base *= 10.0;
        exp -= 1;
    }
    Ok(format!("{}{marker}{exp}", strip_float(base)))
}

/// Shortest decimal rendering: trailing zeros and a trailing decimal point
/// are stripped, integral values stay untouched.
fn strip_float(value: f64) -> String {
    let s = format!("{value}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radix_parse_handles_mixed_case_hex() {
        assert_eq!(parse_radix("1A", 16).unwrap(), 26);
        assert_eq!(parse_radix("ff", 16).unwrap(), 255);
        assert_eq!(parse_radix("101110", 2).unwrap(), 46);
        assert!(parse_radix("2", 2).is_err());
    }

    #[test]
    fn decimal_parse_trims_whitespace() {
        assert_eq!(parse_decimal(" 1420\n").unwrap(), 1420);
        assert!(parse_decimal("3.5").is_err());
    }

    #[test]
    fn exp_to_decimal_strips_noise() {
        assert_eq!(exp_to_decimal("1.42", "3").unwrap(), "1420");
        assert_eq!(exp_to_decimal("9.0", "-4").unwrap(), "0.0009");
        assert_eq!(exp_to_decimal("1.0", "0").unwrap(), "1");
    }

    #[test]
    fn decimal_to_exp_normalizes_by_magnitude() {
        assert_eq!(decimal_to_exp("1420", "e").unwrap(), "1.42e3");
        assert_eq!(decimal_to_exp("0.00142", "e").unwrap(), "1.42e-3");
        assert_eq!(decimal_to_exp("-1420", "e").unwrap(), "-1.42e3");
        assert_eq!(decimal_to_exp("10", "e").unwrap(), "10e0");
    }

    #[test]
    fn decimal_to_exp_special_cases_zero() {
        assert_eq!(decimal_to_exp("0", "e").unwrap(), "0e0");
        assert_eq!(decimal_to_exp("0.0", "EX").unwrap(), "0EX0");
    }

    #[test]
    fn non_finite_input_is_rejected() {
        assert!(decimal_to_exp("inf", "e").is_err());
        assert!(exp_to_decimal("9.9", "999").is_err());
    }

    #[test]
    fn large_exponent_fails_instead_of_rendering_inf() {
        // Finite value, but the rounding scale overflows.
        assert!(exp_to_decimal("1.0", "300").is_err());
        assert!(exp_to_decimal("9.0", "20").is_ok());
    }
}
