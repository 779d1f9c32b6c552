//! Lenient amount parsing and separator-aware number rendering.

/// Parses a possibly pre-formatted amount.
///
/// Everything except ASCII digits and `.` is dropped first, so symbols,
/// grouping characters and signs vanish. The longest leading `digits[.digits]`
/// run of what remains is the value; anything unparsable counts as zero.
pub fn parse_amount(input: &str) -> f64 {
    let stripped: String = input
        .chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '.')
        .collect();
    leading_number(&stripped)
}

fn leading_number(stripped: &str) -> f64 {
    let end = match stripped.find('.') {
        Some(first_dot) => stripped[first_dot + 1..]
            .find('.')
            .map(|second| first_dot + 1 + second)
            .unwrap_or(stripped.len()),
        None => stripped.len(),
    };
    stripped[..end].parse::<f64>().unwrap_or(0.0)
}

/// Renders a number the way the degraded branches report it: shortest form,
/// no trailing `.0`. Digit runs too long for an `f64` come out as `INF`.
pub fn plain_number(value: f64) -> String {
    if value.is_nan() {
        "NAN".to_string()
    } else if value.is_infinite() {
        if value < 0.0 { "-INF" } else { "INF" }.to_string()
    } else {
        value.to_string()
    }
}

/// Renders `value` with exactly `decimals` fractional digits.
///
/// Rounds half away from zero. The integer part is grouped in threes from the
/// right with `thousand_separator`, which may be empty.
pub fn format_number(
    value: f64,
    decimals: u8,
    decimal_point: &str,
    thousand_separator: &str,
) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let rounded = round_half_away(value, decimals);
    let body = format!("{:.*}", decimals as usize, rounded.abs());
    let (int_part, frac_part) = match body.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (body.as_str(), None),
    };

    let mut out = String::with_capacity(body.len() + 8);
    let is_zero = body.bytes().all(|b| b == b'0' || b == b'.');
    if rounded < 0.0 && !is_zero {
        out.push('-');
    }
    out.push_str(&group_digits(int_part, thousand_separator));
    if let Some(frac) = frac_part {
        out.push_str(decimal_point);
        out.push_str(frac);
    }
    out
}

/// Rounds half away from zero.
///
/// While the requested places fit within 15 significant digits, the scaled
/// value is first cut to 15 significant digits so that values such as `1.005`
/// (stored as `1.00499...`) still round up. Larger magnitudes are rounded
/// as they are, keeping every representable cent.
fn round_half_away(value: f64, decimals: u8) -> f64 {
    if value == 0.0 {
        return value;
    }
    let factor = 10f64.powi(i32::from(decimals));
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    let magnitude = value.abs().log10().floor() as i32;
    let scaled = if 14 - magnitude > i32::from(decimals) {
        format!("{:.14e}", scaled)
            .parse::<f64>()
            .unwrap_or(scaled)
    } else {
        scaled
    };
    scaled.round() / factor
}

fn group_digits(digits: &str, separator: &str) -> String {
    if separator.is_empty() || digits.len() <= 3 {
        return digits.to_string();
    }
    let len = digits.len();
    let mut grouped = String::with_capacity(len + (len / 3) * separator.len());
    for (idx, ch) in digits.chars().enumerate() {
        if idx != 0 && (len - idx) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_symbols_and_separators() {
        assert_eq!(parse_amount("£15.95"), 15.95);
        assert_eq!(parse_amount("$1,234.50 USD"), 1234.5);
        assert_eq!(parse_amount("15.9500"), 15.95);
    }

    #[test]
    fn empty_or_symbol_only_input_is_zero() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("."), 0.0);
        assert_eq!(parse_amount("€"), 0.0);
    }

    #[test]
    fn second_dot_ends_the_number() {
        assert_eq!(parse_amount("1.2.3"), 1.2);
        assert_eq!(parse_amount(".5"), 0.5);
        assert_eq!(parse_amount("7."), 7.0);
    }

    #[test]
    fn sign_is_stripped() {
        assert_eq!(parse_amount("-42.10"), 42.1);
    }

    #[test]
    fn comma_decimal_input_collapses_into_integer_digits() {
        assert_eq!(parse_amount("1.234,56"), 1.23456);
        assert_eq!(parse_amount("12,50"), 1250.0);
    }

    #[test]
    fn groups_integer_digits() {
        assert_eq!(format_number(1234567.891, 2, ".", ","), "1,234,567.89");
        assert_eq!(format_number(999.0, 2, ".", ","), "999.00");
        assert_eq!(format_number(1000.0, 0, ".", ","), "1,000");
    }

    #[test]
    fn supports_custom_and_empty_separators() {
        assert_eq!(format_number(1234.5, 2, ",", "."), "1.234,50");
        assert_eq!(format_number(1234.5, 2, ",", " "), "1 234,50");
        assert_eq!(format_number(1234567.0, 0, ".", ""), "1234567");
        assert_eq!(format_number(1234567.0, 0, ".", "'\u{2009}"), "1'\u{2009}234'\u{2009}567");
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(format_number(1.005, 2, ".", ","), "1.01");
        assert_eq!(format_number(2.5, 0, ".", ","), "3");
        assert_eq!(format_number(-2.5, 0, ".", ","), "-3");
        assert_eq!(format_number(0.125, 2, ".", ","), "0.13");
    }

    #[test]
    fn large_amounts_keep_their_cents() {
        assert_eq!(
            format_number(12345678901234.56, 2, ".", ","),
            "12,345,678,901,234.56"
        );
        assert_eq!(format_number(1234567890123.456, 3, ".", ","), "1,234,567,890,123.456");
        assert_eq!(format_number(1.005, 2, ".", ","), "1.01");
    }

    #[test]
    fn overlong_digit_runs_render_as_inf() {
        let digits = "1".repeat(400);
        assert_eq!(plain_number(parse_amount(&digits)), "INF");
    }

    #[test]
    fn negative_values_keep_sign_outside_grouping() {
        assert_eq!(format_number(-1234.5, 2, ".", ","), "-1,234.50");
        assert_eq!(format_number(-0.001, 2, ".", ","), "0.00");
    }

    #[test]
    fn non_finite_values_render_without_digits_from_noise() {
        assert_eq!(format_number(f64::NAN, 2, ".", ","), "0.00");
        assert_eq!(plain_number(f64::INFINITY), "INF");
    }

    #[test]
    fn plain_number_drops_trailing_zero_fraction() {
        assert_eq!(plain_number(12.0), "12");
        assert_eq!(plain_number(15.95), "15.95");
    }
}
