//! Numeric Text
//!
//! Ratings and prices travel as text. These helpers read them the way the
//! browser does: strictly when validating input, leniently when displaying
//! stored records.

/// Strict read of a whole string as a number, following `Number(text)`.
///
/// Surrounding whitespace is ignored. Accepts decimal and exponent forms,
/// `Infinity`, and `0x`/`0o`/`0b` integers. Returns `None` for anything else,
/// including `NaN`.
pub fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return Some(0.0);
    }

    if let Some(value) = parse_infinity(text) {
        return Some(value);
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = text.strip_prefix(prefix) {
            return parse_radix_digits(digits, radix);
        }
    }

    if !text
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
    {
        return None;
    }
    text.parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Lenient read of the leading numeric prefix, following `parseFloat(text)`.
///
/// `"12.5abc"` reads as 12.5; text without a numeric prefix is `None`.
pub fn parse_leading_number(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let (sign, rest) = match text.as_bytes().first() {
        Some(b'-') => (-1.0, &text[1..]),
        Some(b'+') => (1.0, &text[1..]),
        _ => (1.0, text),
    };
    if rest.starts_with("Infinity") {
        return Some(sign * f64::INFINITY);
    }

    let prefix_len = numeric_prefix_len(rest);
    if prefix_len == 0 {
        return None;
    }
    rest[..prefix_len].parse::<f64>().ok().map(|v| sign * v)
}

/// Renders stored numeric text with a fixed number of decimals.
///
/// Unreadable text renders as `N/A`.
pub fn format_fixed(text: &str, decimals: usize) -> String {
    match parse_leading_number(text) {
        Some(v) if v.is_infinite() => {
            if v > 0.0 { "Infinity".to_string() } else { "-Infinity".to_string() }
        }
        Some(v) => to_fixed(v, decimals),
        None => "N/A".to_string(),
    }
}

/// Fraction digits needed to print any finite `f64` exactly
const EXACT_FRACTION_DIGITS: usize = 1074;

/// `Number.prototype.toFixed`: rounds the exact binary value, ties away from
/// zero.
fn to_fixed(value: f64, decimals: usize) -> String {
    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(decimals))
        .collect();
    if frac_part.as_bytes().get(decimals).is_some_and(|d| *d >= b'5') {
        increment_digits(&mut digits);
    }

    let int_len = digits.len() - decimals;
    let mut out = String::with_capacity(digits.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.extend(digits[..int_len].iter().map(|&d| d as char));
    if decimals > 0 {
        out.push('.');
        out.extend(digits[int_len..].iter().map(|&d| d as char));
    }
    out
}

/// Adds one to an ASCII decimal digit string, growing it on carry-out.
fn increment_digits(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

/// Unsigned digits in `radix`; signs, separators and empty text are rejected.
fn parse_radix_digits(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * radix as f64 + d as f64)
    })
}

fn parse_infinity(text: &str) -> Option<f64> {
    match text {
        "Infinity" | "+Infinity" => Some(f64::INFINITY),
        "-Infinity" => Some(f64::NEG_INFINITY),
        _ => None,
    }
}

/// Length of the longest `digits[.digits][e[+-]digits]` prefix that holds at
/// least one mantissa digit.
fn numeric_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut i = 0;
    let mut mantissa_digits = 0;

    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
        mantissa_digits += 1;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        let mut j = i + 1;
        let mut fraction_digits = 0;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
            fraction_digits += 1;
        }
        if mantissa_digits + fraction_digits > 0 {
            i = j;
            mantissa_digits += fraction_digits;
        }
    }
    if mantissa_digits == 0 {
        return 0;
    }

    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exponent_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exponent_start {
            i = j;
        }
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_accepts_decimal_forms() {
        assert_eq!(parse_number("4.5"), Some(4.5));
        assert_eq!(parse_number("  12.50 "), Some(12.5));
        assert_eq!(parse_number(".5"), Some(0.5));
        assert_eq!(parse_number("1e3"), Some(1000.0));
        assert_eq!(parse_number("-5"), Some(-5.0));
        assert_eq!(parse_number("0x1F"), Some(31.0));
        assert_eq!(parse_number("Infinity"), Some(f64::INFINITY));
    }

    #[test]
    fn test_parse_number_rejects_garbage() {
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("4 stars"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("1,5"), None);
        assert_eq!(parse_number("0xZZ"), None);
        assert_eq!(parse_number("0x+1"), None);
        assert_eq!(parse_number("0b-1"), None);
        assert_eq!(parse_number("0x"), None);
        assert_eq!(parse_number("--1"), None);
    }

    #[test]
    fn test_parse_leading_number_reads_prefix() {
        assert_eq!(parse_leading_number("12.5abc"), Some(12.5));
        assert_eq!(parse_leading_number("  -3"), Some(-3.0));
        assert_eq!(parse_leading_number("7."), Some(7.0));
        assert_eq!(parse_leading_number("2e"), Some(2.0));
        assert_eq!(parse_leading_number("abc"), None);
        assert_eq!(parse_leading_number("."), None);
        assert_eq!(parse_leading_number(""), None);
    }

    #[test]
    fn test_format_fixed() {
        assert_eq!(format_fixed("10", 2), "10.00");
        assert_eq!(format_fixed("12.5", 2), "12.50");
        assert_eq!(format_fixed("4.26", 1), "4.3");
        assert_eq!(format_fixed("free", 2), "N/A");
        assert_eq!(format_fixed("", 1), "N/A");
    }

    #[test]
    fn test_format_fixed_rounds_ties_up() {
        assert_eq!(format_fixed("4.25", 1), "4.3");
        assert_eq!(format_fixed("0.125", 2), "0.13");
        assert_eq!(format_fixed("3.75", 1), "3.8");
        assert_eq!(format_fixed("2.5", 0), "3");
        assert_eq!(format_fixed("-2.5", 0), "-3");
        assert_eq!(format_fixed("9.995", 3), "9.995");
        assert_eq!(format_fixed("99.95", 1), "100.0");
    }

    #[test]
    fn test_format_fixed_uses_exact_binary_value() {
        // 1.005 is stored as 1.00499999999999989...
        assert_eq!(format_fixed("1.005", 2), "1.00");
        // 1.45 is stored as 1.4499999999999999556...
        assert_eq!(format_fixed("1.45", 1), "1.4");
        assert_eq!(format_fixed("-0.001", 2), "-0.00");
        assert_eq!(format_fixed("0", 2), "0.00");
    }

    #[test]
    fn test_radix_literals() {
        assert_eq!(parse_number("0b101"), Some(5.0));
        assert_eq!(parse_number("0o17"), Some(15.0));
        assert_eq!(parse_number("0x10000000000000000"), Some(18446744073709551616.0));
    }
}
