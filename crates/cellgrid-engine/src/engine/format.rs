//! Number coercion and display.

use regex::Regex;
use std::sync::OnceLock;

/// Read cell text as a number.
///
/// Takes the longest numeric prefix (optional sign, digits with optional
/// fraction and exponent, or `Infinity`), so `"12abc"` reads as `12`.
/// Absent, empty or non-numeric text reads as `0`. Every numeric read of a
/// cell goes through here.
pub fn coerce_number(text: Option<&str>) -> f64 {
    let Some(text) = text else {
        return 0.0;
    };
    let Some(caps) = numeric_prefix_re().captures(text) else {
        return 0.0;
    };
    match caps[1].parse::<f64>() {
        Ok(n) if n.is_nan() || n == 0.0 => 0.0,
        Ok(n) => n,
        Err(_) => 0.0,
    }
}

fn numeric_prefix_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*([+-]?(?:Infinity|(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?))")
            .expect("numeric prefix regex must compile")
    })
}

/// Format a formula result for display and for writing back into the grid.
///
/// Output always reads back through [`coerce_number`] to the same value,
/// except `NaN`, which reads back as `0`.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::{coerce_number, format_number};

    #[test]
    fn test_coerce_absent_and_text_to_zero() {
        assert_eq!(coerce_number(None), 0.0);
        assert_eq!(coerce_number(Some("")), 0.0);
        assert_eq!(coerce_number(Some("hello")), 0.0);
        assert_eq!(coerce_number(Some("=A1+1")), 0.0);
        assert_eq!(coerce_number(Some("NaN")), 0.0);
        assert_eq!(coerce_number(Some("-")), 0.0);
    }

    #[test]
    fn test_coerce_numeric_prefix() {
        assert_eq!(coerce_number(Some("42")), 42.0);
        assert_eq!(coerce_number(Some("  -3.5")), -3.5);
        assert_eq!(coerce_number(Some("12abc")), 12.0);
        assert_eq!(coerce_number(Some(".5")), 0.5);
        assert_eq!(coerce_number(Some("7.")), 7.0);
        assert_eq!(coerce_number(Some("1e3")), 1000.0);
        assert_eq!(coerce_number(Some("1e")), 1.0);
        assert_eq!(coerce_number(Some("+2")), 2.0);
    }

    #[test]
    fn test_coerce_infinity() {
        assert_eq!(coerce_number(Some("Infinity")), f64::INFINITY);
        assert_eq!(coerce_number(Some("-Infinity")), f64::NEG_INFINITY);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(7.0), "7");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(1.0 / 3.0), "0.3333333333333333");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    fn test_format_reads_back() {
        for n in [0.0, 1.0, -12.25, 1e-7, 123456789.125, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(coerce_number(Some(&format_number(n))), n);
        }
    }
}
