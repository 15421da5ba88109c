//! Argument coercion
//!
//! Locale-independent integer and floating-point conversion. Both accept
//! leading whitespace and reject any trailing unconverted characters.

/// C `isspace` in the "C" locale
fn is_c_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

/// Parse an integer with base detection
///
/// `0x`/`0X` selects hexadecimal, a leading `0` selects octal, anything
/// else is decimal; an optional sign precedes the prefix. Returns `None`
/// for empty input, trailing characters, or values outside `i64`.
pub fn parse_integer(input: &str) -> Option<i64> {
    let text = input.trim_start_matches(is_c_space);

    let (negative, text) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let (radix, digits) = if let Some(hex) = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
    {
        (16, hex)
    } else if text.len() > 1 && text.starts_with('0') {
        (8, &text[1..])
    } else {
        (10, text)
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }

    if negative {
        i64::from_str_radix(&format!("-{digits}"), radix).ok()
    } else {
        i64::from_str_radix(digits, radix).ok()
    }
}

/// Parse a floating-point number
///
/// Accepts decimal and exponent notation plus `inf`/`infinity`/`nan`.
pub fn parse_double(input: &str) -> Option<f64> {
    input.trim_start_matches(is_c_space).parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal() {
        assert_eq!(parse_integer("12"), Some(12));
        assert_eq!(parse_integer("-5"), Some(-5));
        assert_eq!(parse_integer("+7"), Some(7));
        assert_eq!(parse_integer("0"), Some(0));
        assert_eq!(parse_integer("  42"), Some(42));
    }

    #[test]
    fn test_base_detection() {
        assert_eq!(parse_integer("0x1f"), Some(31));
        assert_eq!(parse_integer("0X1F"), Some(31));
        assert_eq!(parse_integer("017"), Some(15));
        assert_eq!(parse_integer("-0x10"), Some(-16));
        assert_eq!(parse_integer("00"), Some(0));
    }

    #[test]
    fn test_integer_rejects_garbage() {
        assert_eq!(parse_integer("12x"), None);
        assert_eq!(parse_integer("08"), None);
        assert_eq!(parse_integer("0x"), None);
        assert_eq!(parse_integer(""), None);
        assert_eq!(parse_integer("-"), None);
        assert_eq!(parse_integer("1 "), None);
        assert_eq!(parse_integer("--5"), None);
    }

    #[test]
    fn test_integer_range() {
        assert_eq!(parse_integer("-9223372036854775808"), Some(i64::MIN));
        assert_eq!(parse_integer("9223372036854775808"), None);
    }

    #[test]
    fn test_double() {
        assert_eq!(parse_double("1.5"), Some(1.5));
        assert_eq!(parse_double("1.5e3"), Some(1500.0));
        assert_eq!(parse_double(" -.25"), Some(-0.25));
        assert_eq!(parse_double("inf"), Some(f64::INFINITY));
        assert!(parse_double("nan").unwrap().is_nan());
    }

    #[test]
    fn test_double_rejects_garbage() {
        assert_eq!(parse_double("1.5x"), None);
        assert_eq!(parse_double("1e"), None);
        assert_eq!(parse_double(""), None);
    }
}
