//! Number formatting (integers, decimals, percentages, scientific notation)

use crate::ast::{DigitPlaceholder, FormatPart, Section};
use crate::formatter::general::format_general;

/// The numeric structure of a format section.
#[derive(Debug, Clone, Default)]
pub struct NumberLayout {
    /// Placeholders before the decimal point
    pub integer: Vec<DigitPlaceholder>,
    /// Placeholders after the decimal point
    pub decimal: Vec<DigitPlaceholder>,
    /// Placeholders after the exponent marker
    pub exponent: Vec<DigitPlaceholder>,
    /// `(upper, show_plus)` when the section uses scientific notation
    pub scientific: Option<(bool, bool)>,
    pub has_decimal_point: bool,
    /// Thousands separator between integer placeholders
    pub grouping: bool,
    /// Number of trailing thousands separators (each divides by 1000)
    pub scale: i32,
    /// Number of percent signs (each multiplies by 100)
    pub percent_count: i32,
    /// Rendered text before the first placeholder
    pub prefix: String,
    /// Rendered text after the number
    pub suffix: String,
}

impl NumberLayout {
    /// Analyze a format section to extract its numeric structure.
    pub fn analyze(section: &Section) -> Self {
        let mut layout = NumberLayout::default();
        let mut seen_digit = false;
        let mut after_decimal = false;

        for (i, part) in section.parts.iter().enumerate() {
            let text = match part {
                FormatPart::Digit(placeholder) => {
                    seen_digit = true;
                    if layout.scientific.is_some() {
                        layout.exponent.push(*placeholder);
                    } else if after_decimal {
                        layout.decimal.push(*placeholder);
                    } else {
                        layout.integer.push(*placeholder);
                    }
                    continue;
                }
                FormatPart::DecimalPoint if layout.scientific.is_none() => {
                    layout.has_decimal_point = true;
                    after_decimal = true;
                    seen_digit = true;
                    continue;
                }
                FormatPart::ThousandsSeparator => {
                    let next = section.parts[i + 1..]
                        .iter()
                        .find(|p| !matches!(p, FormatPart::ThousandsSeparator));
                    if matches!(next, Some(FormatPart::Digit(_))) && !after_decimal {
                        layout.grouping = true;
                    } else if seen_digit {
                        layout.scale += 1;
                    }
                    continue;
                }
                FormatPart::Scientific { upper, show_plus } => {
                    layout.scientific = Some((*upper, *show_plus));
                    continue;
                }
                FormatPart::Percent => {
                    layout.percent_count += 1;
                    "%"
                }
                FormatPart::Literal(s) | FormatPart::Currency(s) => s.as_str(),
                FormatPart::Skip(_) => " ",
                _ => continue,
            };

            if seen_digit {
                layout.suffix.push_str(text);
            } else {
                layout.prefix.push_str(text);
            }
        }

        layout
    }
}

/// Format a number according to a section.
///
/// `signed` asks for a leading minus on negative values; sections picked for
/// negatives out of a multi-section code carry their own sign text instead.
pub fn format_number(value: f64, section: &Section, signed: bool) -> String {
    let has_numeric_parts = section
        .parts
        .iter()
        .any(|p| matches!(p, FormatPart::Digit(_) | FormatPart::DecimalPoint));

    if !has_numeric_parts {
        return format_literal_section(value, section, signed);
    }

    let layout = NumberLayout::analyze(section);
    let magnitude =
        value.abs() * 100f64.powi(layout.percent_count) / 1000f64.powi(layout.scale);

    let body = match layout.scientific {
        Some((upper, show_plus)) => format_scientific(magnitude, &layout, upper, show_plus),
        None => format_fixed(magnitude, &layout),
    };

    let negative = signed && value < 0.0 && body.chars().any(|c| matches!(c, '1'..='9'));
    format!(
        "{}{}{}{}",
        if negative { "-" } else { "" },
        layout.prefix,
        body,
        layout.suffix
    )
}

/// Render a section without digit placeholders: literals, plus `General` or
/// `@` standing in for the number.
fn format_literal_section(value: f64, section: &Section, signed: bool) -> String {
    let shown = if signed { value } else { value.abs() };
    let mut result = String::new();
    for part in &section.parts {
        match part {
            FormatPart::Literal(s) | FormatPart::Currency(s) => result.push_str(s),
            FormatPart::Skip(_) => result.push(' '),
            FormatPart::Percent => result.push('%'),
            FormatPart::General | FormatPart::TextPlaceholder => {
                result.push_str(&format_general(shown))
            }
            _ => {}
        }
    }
    result
}

/// Fixed-point rendering with grouping and placeholder padding.
fn format_fixed(magnitude: f64, layout: &NumberLayout) -> String {
    let places = layout.decimal.len();
    let factor = 10f64.powi(places as i32);
    let scaled = (magnitude * factor).round();
    let rounded = if scaled.is_finite() {
        scaled / factor
    } else {
        magnitude
    };

    let text = format!("{:.*}", places, rounded);
    let (integer_digits, fraction_digits) = text.split_once('.').unwrap_or((&text, ""));

    let mut result = format_integer(integer_digits, &layout.integer, layout.grouping);
    if layout.has_decimal_point {
        result.push('.');
        result.push_str(&format_decimal(fraction_digits, &layout.decimal));
    }
    result
}

/// Scientific rendering: one mantissa digit, exponent padded to the number
/// of `0` placeholders after the marker.
fn format_scientific(magnitude: f64, layout: &NumberLayout, upper: bool, show_plus: bool) -> String {
    let places = layout.decimal.len();
    let text = format!("{:.*e}", places, magnitude);
    let (mantissa, exponent) = text.split_once('e').unwrap_or((text.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    let mut result = match mantissa.split_once('.') {
        Some((lead, fraction)) => format!("{}.{}", lead, format_decimal(fraction, &layout.decimal)),
        None => mantissa.to_string(),
    };

    result.push(if upper { 'E' } else { 'e' });
    if exponent < 0 {
        result.push('-');
    } else if show_plus {
        result.push('+');
    }
    let width = layout.exponent.iter().filter(|p| p.is_required()).count().max(1);
    result.push_str(&format!("{:0width$}", exponent.abs(), width = width));
    result
}

/// Format the integer digits with placeholders and thousands separator.
fn format_integer(digits: &str, placeholders: &[DigitPlaceholder], grouping: bool) -> String {
    // A lone zero only shows when a `0` placeholder asks for it
    let digits = if digits == "0" && !placeholders.iter().any(|p| p.is_required()) {
        ""
    } else {
        digits
    };

    let value_digits: Vec<char> = digits.chars().collect();
    let output_len = value_digits.len().max(placeholders.len());

    let mut reversed = Vec::with_capacity(output_len + output_len / 3);
    let mut emitted = 0;
    for pos in 0..output_len {
        let ch = if pos < value_digits.len() {
            Some(value_digits[value_digits.len() - 1 - pos])
        } else {
            placeholders[placeholders.len() - 1 - pos].empty_char()
        };
        let Some(ch) = ch else { continue };

        if grouping && emitted > 0 && emitted % 3 == 0 && ch != ' ' {
            reversed.push(',');
        }
        reversed.push(ch);
        emitted += 1;
    }

    reversed.into_iter().rev().collect()
}

/// Format the fraction digits, dropping or blanking optional trailing zeros.
fn format_decimal(digits: &str, placeholders: &[DigitPlaceholder]) -> String {
    let digits: Vec<char> = digits.chars().collect();

    let mut keep = placeholders.len();
    while keep > 0 {
        let placeholder = placeholders[keep - 1];
        if placeholder.is_required() || digits.get(keep - 1).copied().unwrap_or('0') != '0' {
            break;
        }
        keep -= 1;
    }

    placeholders
        .iter()
        .enumerate()
        .filter_map(|(i, placeholder)| {
            if i < keep {
                Some(digits.get(i).copied().unwrap_or('0'))
            } else {
                placeholder.empty_char()
            }
        })
        .collect()
}
