//! Table-driven classification cases from `tests/fixtures/classify_cases.json`.

use cellfmt::{classify, render, CellValue, RawValue};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Case {
    input: String,
    kind: String,
    pattern: String,
    display: String,
    value: serde_json::Value,
}

fn load_cases() -> Vec<Case> {
    let data = include_str!("fixtures/classify_cases.json");
    serde_json::from_str(data).expect("valid fixture JSON")
}

fn value_matches(actual: &CellValue, expected: &serde_json::Value) -> bool {
    match (actual, expected) {
        (CellValue::Number(n), serde_json::Value::Number(e)) => e.as_f64() == Some(*n),
        (CellValue::Bool(b), serde_json::Value::Bool(e)) => b == e,
        (CellValue::Text(s), serde_json::Value::String(e)) => s == e,
        _ => false,
    }
}

#[test]
fn test_classify_fixture_cases() {
    let cases = load_cases();
    assert!(!cases.is_empty());

    for case in cases {
        let cell = classify(&RawValue::from(case.input.as_str()))
            .unwrap_or_else(|| panic!("no classification for {:?}", case.input));

        assert_eq!(cell.kind().code().to_string(), case.kind, "kind of {:?}", case.input);
        assert_eq!(cell.pattern(), case.pattern, "pattern of {:?}", case.input);
        assert_eq!(cell.display, case.display, "display of {:?}", case.input);
        assert!(
            value_matches(&cell.value, &case.value),
            "value of {:?}: {:?} != {}",
            case.input,
            cell.value,
            case.value
        );
    }
}

#[test]
fn test_fixture_number_displays_render_back() {
    for case in load_cases() {
        if case.kind != "n" && case.kind != "d" {
            continue;
        }
        if case.pattern == "General" {
            continue;
        }
        let value = case.value.as_f64().expect("numeric fixture value");
        assert_eq!(render(&case.pattern, value), case.display, "{:?}", case.input);
    }
}
