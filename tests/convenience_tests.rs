use cellfmt::{
    classify, format, format_code_from_id, format_default, is_date_format, legacy_format_code,
    render, FormatOptions, ParseError, RawValue, Value,
};
use chrono::NaiveDate;

#[test]
fn test_format_convenience() {
    let opts = FormatOptions::default();
    let result = format(1234.5, "#,##0.00", &opts).unwrap();
    assert_eq!(result, "1,234.50");
}

#[test]
fn test_format_default_convenience() {
    let result = format_default(0.42, "0%").unwrap();
    assert_eq!(result, "42%");
}

#[test]
fn test_format_invalid_code() {
    let opts = FormatOptions::default();
    assert_eq!(format(42.0, "", &opts), Err(ParseError::EmptyFormat));
    assert!(matches!(
        format(42.0, "0\"open", &opts),
        Err(ParseError::UnterminatedString { position: 1 })
    ));
}

#[test]
fn test_render_falls_back_to_general() {
    assert_eq!(render("[Red", 1.5), "1.5");
    assert_eq!(render("", "text"), "text");
    assert_eq!(render("\"open", true), "TRUE");
}

#[test]
fn test_render_values() {
    assert_eq!(render("0.0%", 0.125), "12.5%");
    assert_eq!(render("@", "abc"), "abc");
    assert_eq!(render("General", Value::Empty), "");
    assert_eq!(render("General", ()), "");

    let date = NaiveDate::from_ymd_opt(2023, 5, 1).unwrap();
    assert_eq!(render("yyyy-MM-dd", date), "2023-05-01");
}

#[test]
fn test_render_legacy_currency() {
    let currency = legacy_format_code("Currency").unwrap();
    assert_eq!(render(currency, -5.0), "($5.00)");
    assert_eq!(render(currency, 5.0), "$5.00 ");
}

#[test]
fn test_render_legacy_yes_no() {
    let yes_no = legacy_format_code("Yes/No").unwrap();
    assert_eq!(render(yes_no, 0.0), "No");
    assert_eq!(render(yes_no, 3.0), "Yes");

    let true_false = legacy_format_code("True/False").unwrap();
    assert_eq!(render(true_false, 0.0), "False");
}

#[test]
fn test_legacy_names_resolve_to_builtins() {
    assert_eq!(legacy_format_code("Percent"), Some("0.00%"));
    assert_eq!(legacy_format_code("Short Date"), format_code_from_id(14));
    assert_eq!(legacy_format_code("Medium Time"), format_code_from_id(18));
    assert_eq!(legacy_format_code("Long Date"), Some("dddd, mmmm dd, yyyy"));
    assert_eq!(legacy_format_code("Nope"), None);
}

#[test]
fn test_render_legacy_dates() {
    let long_date = legacy_format_code("Long Date").unwrap();
    assert_eq!(render(long_date, 45047.0), "Monday, May 01, 2023");

    let general_date = legacy_format_code("General Date").unwrap();
    assert_eq!(render(general_date, 45047.75), "5/1/23 18:00");
}

#[test]
fn test_is_date_format() {
    assert!(is_date_format("yyyy-MM-dd"));
    assert!(is_date_format("h:mm AM/PM"));
    assert!(is_date_format(format_code_from_id(22).unwrap()));
    assert!(!is_date_format("0.00"));
    assert!(!is_date_format("General"));
    assert!(!is_date_format("\"yyyy\"0"));
    assert!(!is_date_format(""));
}

#[test]
fn test_value_helpers() {
    assert_eq!(Value::from(2.5).as_number(), Some(2.5));
    assert_eq!(Value::from(true).as_number(), Some(1.0));
    assert_eq!(Value::from("x").as_text(), Some("x"));
    assert!(Value::from(()).is_empty());
    assert_eq!(Value::from(3_i32).type_name(), "number");
}

#[test]
fn test_render_classified_cells() {
    for input in ["12,000.00", "12.5%", "2023-05-01", "'007", "true", "hello"] {
        let cell = classify(&RawValue::from(input)).unwrap();
        assert_eq!(render(cell.pattern(), &cell.value), cell.display, "{input}");
    }
}
