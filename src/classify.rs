//! Classification of raw cell input into a typed value with a format code.
//!
//! Text runs through an ordered list of rules and the first one that matches
//! decides the result. The order matters: `12,000.00` has to be read as an
//! accounting amount before the decimal rule sees its `.`, and a leading `'`
//! has to win over everything that would parse the rest as a number.

use chrono::{NaiveDateTime, Timelike};
use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

use crate::cell::{CellKind, CellValue, ClassifiedValue, RawValue};
use crate::date_serial::to_day_serial;
use crate::fuzzy::{parse_fuzzy_date, parse_loose_number, TzFix};
use crate::options::FormatOptions;
use crate::predicates::{is_error_value, is_real_number, looks_like_date_time};
use crate::render_with;

/// Fraction digits beyond this are not reflected in generated patterns.
const MAX_FRACTION_DIGITS: usize = 9;

/// Mantissa digits kept by the scientific pattern.
const MAX_SCIENTIFIC_DIGITS: usize = 5;

type Rule = fn(&str, &FormatOptions) -> Option<ClassifiedValue>;

/// Text rules in evaluation order.
const RULES: [(&str, Rule); 11] = [
    ("accounting", accounting),
    ("literal text", literal_text),
    ("boolean", boolean),
    ("error", error_literal),
    ("national id", national_id),
    ("scientific", scientific),
    ("percent", percent),
    ("decimal", decimal),
    ("grouped integer", grouped_integer),
    ("plain number", plain_number),
    ("date", date_like),
];

fn accounting_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^-?[0-9]+,[0-9]{3}(\.[0-9]{1,2})?$").expect("accounting regex"))
}

fn national_id_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(concat!(
            r"^(\d{6}(18|19|20)\d{2}(0[1-9]|1[0-2])(0[1-9]|[12]\d|3[01])\d{3}[\dXx]",
            r"|\d{8}(0[1-9]|1[0-2])(0[1-9]|[12]\d|3[01])\d{3})$",
        ))
        .expect("national id regex")
    })
}

fn grouped_integer_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[+-]?\d+(,\d+)+$").expect("grouped integer regex"))
}

/// Classify a raw value using the default options.
///
/// ```
/// use cellfmt::{classify, CellKind, CellValue};
///
/// let cell = classify(&"12.5%".into()).unwrap();
/// assert_eq!(cell.kind(), CellKind::Number);
/// assert_eq!(cell.pattern(), "0.0%");
/// assert_eq!(cell.value, CellValue::Number(0.125));
/// assert_eq!(cell.display, "12.5%");
/// ```
pub fn classify(raw: &RawValue) -> Option<ClassifiedValue> {
    classify_with(raw, &FormatOptions::default())
}

/// Classify a raw value.
///
/// Returns `None` only for [`RawValue::Empty`]. Numbers and booleans are
/// classified through their text form; text that no rule claims keeps its
/// original value under the `General` pattern.
pub fn classify_with(raw: &RawValue, opts: &FormatOptions) -> Option<ClassifiedValue> {
    let (text, original) = match raw {
        RawValue::Empty => return None,
        RawValue::DateTime(dt) => return Some(classify_date_time(*dt, opts)),
        RawValue::Text(s) => (Cow::Borrowed(s.as_str()), CellValue::Text(s.clone())),
        RawValue::Number(n) => (Cow::Owned(n.to_string()), CellValue::Number(*n)),
        RawValue::Bool(b) => (Cow::Owned(b.to_string()), CellValue::Bool(*b)),
    };

    for (name, rule) in RULES {
        if let Some(classified) = rule(&text, opts) {
            tracing::trace!(rule = name, input = %text, pattern = classified.pattern(), "classified");
            return Some(classified);
        }
    }

    tracing::trace!(rule = "general", input = %text, "classified");
    Some(ClassifiedValue::new(
        text,
        "General",
        CellKind::General,
        original,
    ))
}

fn classify_date_time(dt: NaiveDateTime, opts: &FormatOptions) -> ClassifiedValue {
    let serial = to_day_serial(dt, opts.date_system);
    let pattern = if dt.time().num_seconds_from_midnight() == 0 {
        "yyyy-MM-dd"
    } else {
        "yyyy-MM-dd hh:mm:ss"
    };
    number_cell(pattern, CellKind::Date, serial, opts)
}

/// A numeric cell whose display is rendered from its pattern.
fn number_cell(pattern: &str, kind: CellKind, value: f64, opts: &FormatOptions) -> ClassifiedValue {
    let display = render_with(pattern, value, opts);
    ClassifiedValue::new(display, pattern, kind, CellValue::Number(value))
}

/// Plain text shown as typed.
fn text_cell(text: &str) -> ClassifiedValue {
    ClassifiedValue::new(text, "@", CellKind::Text, CellValue::Text(text.to_string()))
}

/// `"."` followed by one `0` per fraction digit, capped.
fn fraction_zeros(fraction: &str) -> String {
    format!(".{}", "0".repeat(fraction.len().min(MAX_FRACTION_DIGITS)))
}

/// Every comma group after the first is exactly three digits.
fn well_grouped(integer: &str) -> bool {
    integer
        .split(',')
        .skip(1)
        .all(|group| group.len() == 3 && group.bytes().all(|b| b.is_ascii_digit()))
}

fn is_signed_digits(text: &str, allow_empty: bool) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    (allow_empty || !digits.is_empty()) && digits.bytes().all(|b| b.is_ascii_digit())
}

/// `12,000` or `-12,000.50`: a single thousands group with up to two decimals.
fn accounting(text: &str, opts: &FormatOptions) -> Option<ClassifiedValue> {
    if !accounting_re().is_match(text) {
        return None;
    }
    let value = parse_loose_number(text)?;
    let pattern = match text.split_once('.') {
        Some((_, fraction)) => format!("#,##0{}", fraction_zeros(fraction)),
        None => "#,##0".to_string(),
    };
    Some(number_cell(&pattern, CellKind::Number, value, opts))
}

/// A leading apostrophe forces the rest to be text.
fn literal_text(text: &str, _opts: &FormatOptions) -> Option<ClassifiedValue> {
    text.strip_prefix('\'').map(text_cell)
}

fn boolean(text: &str, _opts: &FormatOptions) -> Option<ClassifiedValue> {
    let value = if text.eq_ignore_ascii_case("true") {
        true
    } else if text.eq_ignore_ascii_case("false") {
        false
    } else {
        return None;
    };
    let display = if value { "TRUE" } else { "FALSE" };
    Some(ClassifiedValue::new(
        display,
        "General",
        CellKind::Boolean,
        CellValue::Bool(value),
    ))
}

fn error_literal(text: &str, _opts: &FormatOptions) -> Option<ClassifiedValue> {
    is_error_value(text).then(|| {
        ClassifiedValue::new(
            text,
            "General",
            CellKind::Error,
            CellValue::Text(text.to_string()),
        )
    })
}

/// Identity numbers look numeric but must keep every digit.
fn national_id(text: &str, _opts: &FormatOptions) -> Option<ClassifiedValue> {
    national_id_re().is_match(text).then(|| text_cell(text))
}

/// Magnitudes of 1e11 and above, or below 1e-9, get an exponent pattern.
fn scientific(text: &str, opts: &FormatOptions) -> Option<ClassifiedValue> {
    if !is_real_number(text) {
        return None;
    }
    let value: f64 = text.trim().parse().ok()?;
    let magnitude = value.abs();
    if !value.is_finite() || magnitude == 0.0 || (1e-9..1e11).contains(&magnitude) {
        return None;
    }

    let shortest = format!("{:e}", value);
    let mantissa = shortest.split('e').next().unwrap_or_default();
    let digits = mantissa
        .split_once('.')
        .map_or(0, |(_, fraction)| fraction.len().min(MAX_SCIENTIFIC_DIGITS));
    let pattern = format!("#0.{}E+00", "0".repeat(digits));

    Some(number_cell(&pattern, CellKind::Number, value, opts))
}

/// `12.5%`, `1,250%`: a number with a single trailing percent sign.
fn percent(text: &str, opts: &FormatOptions) -> Option<ClassifiedValue> {
    let index = text.find('%')?;
    let prefix = &text[..index];
    if index != text.len() - 1 || !is_real_number(&prefix.replace(',', "")) {
        return Some(text_cell(text));
    }

    let (integer, fraction) = match prefix.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (prefix, None),
    };

    let mut pattern = if integer.contains(',') {
        if !well_grouped(integer) {
            return Some(text_cell(text));
        }
        "#,##0".to_string()
    } else {
        "0".to_string()
    };
    if let Some(fraction) = fraction {
        pattern.push_str(&fraction_zeros(fraction));
    }
    pattern.push('%');

    match parse_loose_number(text) {
        Some(value) => Some(number_cell(&pattern, CellKind::Number, value, opts)),
        None => Some(text_cell(text)),
    }
}

/// `3.14`, `-0.5`, `1,234.56`. Anything else holding a `.` stays text.
fn decimal(text: &str, opts: &FormatOptions) -> Option<ClassifiedValue> {
    let (integer, fraction) = text.split_once('.')?;
    if fraction.contains('.')
        || fraction.is_empty()
        || !fraction.bytes().all(|b| b.is_ascii_digit())
    {
        return Some(text_cell(text));
    }

    let pattern = if integer.contains(',') {
        let first = integer.split(',').next().unwrap_or_default();
        if !is_signed_digits(first, false) || !well_grouped(integer) {
            return Some(text_cell(text));
        }
        format!("#,##0{}", fraction_zeros(fraction))
    } else {
        if !is_signed_digits(integer, true) {
            return Some(text_cell(text));
        }
        format!("0{}", fraction_zeros(fraction))
    };

    match parse_loose_number(text) {
        Some(value) => Some(number_cell(&pattern, CellKind::Number, value, opts)),
        None => Some(text_cell(text)),
    }
}

/// `1,234,567`. Misplaced separators such as `1,23` make the input text.
fn grouped_integer(text: &str, opts: &FormatOptions) -> Option<ClassifiedValue> {
    if !grouped_integer_re().is_match(text) {
        return None;
    }
    if !well_grouped(text) {
        return Some(text_cell(text));
    }
    let value = parse_loose_number(text)?;
    Some(number_cell("#,##0", CellKind::Number, value, opts))
}

/// Any other plain number keeps the text it was typed as. Overflowing
/// input such as `1e400` is left to the General fallback.
fn plain_number(text: &str, _opts: &FormatOptions) -> Option<ClassifiedValue> {
    if !is_real_number(text) {
        return None;
    }
    let value: f64 = text.trim().parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(ClassifiedValue::new(
        text,
        "General",
        CellKind::Number,
        CellValue::Number(value),
    ))
}

/// `2023-05-01`, `2023/5/1 8:30`: dates become day serials.
fn date_like(text: &str, opts: &FormatOptions) -> Option<ClassifiedValue> {
    let short_or_timed = text.contains('.') || text.contains(':') || text.len() < 16;
    if !looks_like_date_time(text) || !short_or_timed {
        return None;
    }

    let dt = parse_fuzzy_date(&text.replace('-', "/"), TzFix::Keep, opts)?;
    let serial = to_day_serial(dt, opts.date_system);
    let pattern = if serial.fract() == 0.0 {
        "yyyy-MM-dd"
    } else if text.len() > 18 {
        "yyyy-MM-dd hh:mm:ss"
    } else if text.len() > 11 {
        "yyyy-MM-dd hh:mm"
    } else {
        "yyyy-MM-dd"
    };

    Some(number_cell(pattern, CellKind::Date, serial, opts))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str) -> ClassifiedValue {
        classify(&RawValue::from(text)).unwrap()
    }

    #[test]
    fn test_rule_names_are_unique() {
        for (i, (name, _)) in RULES.iter().enumerate() {
            assert!(RULES[i + 1..].iter().all(|(other, _)| other != name));
        }
    }

    #[test]
    fn test_accounting() {
        let cell = run("-12,000.5");
        assert_eq!(cell.pattern(), "#,##0.0");
        assert_eq!(cell.value, CellValue::Number(-12000.5));
        assert_eq!(cell.display, "-12,000.5");
    }

    #[test]
    fn test_accounting_display_is_rendered() {
        let cell = run("0,000");
        assert_eq!(cell.pattern(), "#,##0");
        assert_eq!(cell.value, CellValue::Number(0.0));
        assert_eq!(cell.display, "0");

        let cell = run("-0,000.5");
        assert_eq!(cell.pattern(), "#,##0.0");
        assert_eq!(cell.display, "-0.5");
    }

    #[test]
    fn test_overflowing_number_is_general() {
        let cell = run("1e400");
        assert_eq!(cell.kind(), CellKind::General);
        assert_eq!(cell.value, CellValue::Text("1e400".to_string()));
        assert_eq!(cell.display, "1e400");
    }

    #[test]
    fn test_fraction_zeros_cap() {
        assert_eq!(fraction_zeros("5"), ".0");
        assert_eq!(fraction_zeros("123456789012"), ".000000000");
    }

    #[test]
    fn test_well_grouped() {
        assert!(well_grouped("1,234,567"));
        assert!(well_grouped("12"));
        assert!(!well_grouped("1,23"));
        assert!(!well_grouped("1,2345"));
        assert!(!well_grouped("1,2a4"));
    }

    #[test]
    fn test_signed_digits() {
        assert!(is_signed_digits("-12", false));
        assert!(is_signed_digits("", true));
        assert!(is_signed_digits("+", true));
        assert!(!is_signed_digits("", false));
        assert!(!is_signed_digits("1a", true));
    }

    #[test]
    fn test_national_id() {
        assert_eq!(run("11010519491231002X").kind(), CellKind::Text);
        assert_eq!(run("110105491231002").kind(), CellKind::Text);
        assert_eq!(run("110105194910310021").kind(), CellKind::Text);
        assert_eq!(run("110105194913310021").kind(), CellKind::Number);
    }

    #[test]
    fn test_decimal_rejections() {
        for text in ["1.2.3", "1.", "a.5", "1.5e3", "1,2.5", ",123.5"] {
            let cell = run(text);
            assert_eq!(cell.kind(), CellKind::Text, "{}", text);
            assert_eq!(cell.pattern(), "@", "{}", text);
            assert_eq!(cell.display, text);
        }
    }

    #[test]
    fn test_percent_rejections() {
        for text in ["5%5", "abc%", "1,23%", "%"] {
            assert_eq!(run(text).pattern(), "@", "{}", text);
        }
    }

    #[test]
    fn test_date_with_time() {
        let cell = run("2023-05-01 12:30");
        assert_eq!(cell.kind(), CellKind::Date);
        assert_eq!(cell.pattern(), "yyyy-MM-dd hh:mm");
        assert_eq!(cell.display, "2023-05-01 12:30");

        let cell = run("2023-05-01 12:30:45");
        assert_eq!(cell.pattern(), "yyyy-MM-dd hh:mm:ss");
        assert_eq!(cell.display, "2023-05-01 12:30:45");
    }

    #[test]
    fn test_date_1904() {
        let cell = classify_with(&"2023-05-01".into(), &FormatOptions::date1904()).unwrap();
        assert_eq!(cell.value, CellValue::Number(43585.0));
        assert_eq!(cell.display, "2023-05-01");
    }
}
