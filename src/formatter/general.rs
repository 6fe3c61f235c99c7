//! The `General` number display.
//!
//! Numbers are shown in at most eleven characters (not counting the sign).
//! Very large and very small magnitudes switch to scientific notation with
//! five decimal places, trailing zeros trimmed.

const MAX_WIDTH: usize = 11;

/// Format a number the way the `General` format code displays it.
pub fn format_general(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };

    if !(1e-9..1e11).contains(&magnitude) {
        return format!("{}{}", sign, format_exponential(magnitude));
    }

    let integer_digits = if magnitude >= 1.0 {
        magnitude.log10().floor() as usize + 1
    } else {
        1
    };
    let decimals = MAX_WIDTH.saturating_sub(integer_digits + 1);
    let fixed = trim_fraction(&format!("{:.*}", decimals, magnitude));

    if fixed == "0" {
        return format!("{}{}", sign, format_exponential(magnitude));
    }
    format!("{}{}", sign, fixed)
}

/// `1.23457E+11` style with up to five decimals.
fn format_exponential(magnitude: f64) -> String {
    let text = format!("{:.5e}", magnitude);
    let (mantissa, exponent) = text.split_once('e').unwrap_or((text.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{}E{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
}

/// Drop trailing zeros after a decimal point, and the point itself if bare.
pub(crate) fn trim_fraction(text: &str) -> String {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text.to_string()
    }
}
