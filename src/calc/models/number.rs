//! Number parsing and rendering for the display buffer
//!
//! The display buffer is plain text, so every numeric operation goes through
//! these helpers. Failed or non-finite conversions collapse to zero instead of
//! surfacing an error.

/// Parse display text as a floating point number.
///
/// Empty text, a bare sign, or anything that is not a finite number yields `0.0`.
pub fn parse_number_or_zero(text: &str) -> f64 {
    text.trim()
        .parse::<f64>()
        .map(finite_or_zero)
        .unwrap_or(0.0)
}

/// Replace NaN and infinities with zero.
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Render a number for the display.
///
/// Integral values drop the fractional part (`2` not `2.0`), other values use
/// the shortest digits that round-trip. Very large and very small magnitudes
/// switch to exponent form with an explicit sign (`1e+21`, `1.5e-7`).
/// Negative zero renders as `0`.
pub fn format_number(value: f64) -> String {
    let value = finite_or_zero(value);
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let rendered = format!("{value:e}");
        return match rendered.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => rendered,
        };
    }

    format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_should_read_plain_and_partial_numbers() {
        assert_eq!(parse_number_or_zero("42"), 42.0);
        assert_eq!(parse_number_or_zero("-1.5"), -1.5);
        assert_eq!(parse_number_or_zero("1."), 1.0);
        assert_eq!(parse_number_or_zero("0."), 0.0);
        assert_eq!(parse_number_or_zero("1e+21"), 1e21);
    }

    #[test]
    fn parse_should_fall_back_to_zero() {
        assert_eq!(parse_number_or_zero(""), 0.0);
        assert_eq!(parse_number_or_zero("-"), 0.0);
        assert_eq!(parse_number_or_zero("abc"), 0.0);
        assert_eq!(parse_number_or_zero("inf"), 0.0);
        assert_eq!(parse_number_or_zero("NaN"), 0.0);
    }

    #[test]
    fn finite_or_zero_should_guard_non_finite_values() {
        assert_eq!(finite_or_zero(f64::NAN), 0.0);
        assert_eq!(finite_or_zero(f64::INFINITY), 0.0);
        assert_eq!(finite_or_zero(f64::NEG_INFINITY), 0.0);
        assert_eq!(finite_or_zero(3.5), 3.5);
    }

    #[test]
    fn format_should_drop_trailing_fraction_for_integers() {
        assert_eq!(format_number(2.0), "2");
        assert_eq!(format_number(-7.0), "-7");
        assert_eq!(format_number(0.5), "0.5");
    }

    #[test]
    fn format_should_use_shortest_round_trip_digits() {
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(2f64.sqrt()), "1.4142135623730951");
    }

    #[test]
    fn format_should_render_negative_zero_as_zero() {
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn format_should_render_non_finite_as_zero() {
        assert_eq!(format_number(f64::NAN), "0");
        assert_eq!(format_number(f64::INFINITY), "0");
    }

    #[test]
    fn format_should_switch_to_exponent_form_at_extremes() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-2.5e30), "-2.5e+30");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(1e20), "100000000000000000000");
    }
}
