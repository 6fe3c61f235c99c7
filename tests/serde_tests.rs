#![cfg(feature = "serde")]

use cellfmt::{classify, CellKind, CellValue, FormatDescriptor, RawValue};

#[test]
fn test_descriptor_wire_shape() {
    let cell = classify(&RawValue::from("12.5%")).unwrap();
    let json = serde_json::to_value(&cell.descriptor).unwrap();
    assert_eq!(json, serde_json::json!({ "fa": "0.0%", "t": "n" }));
}

#[test]
fn test_descriptor_deserializes() {
    let descriptor: FormatDescriptor =
        serde_json::from_str(r#"{"fa":"yyyy-MM-dd","t":"d"}"#).unwrap();
    assert_eq!(descriptor, FormatDescriptor::new("yyyy-MM-dd", CellKind::Date));
}

#[test]
fn test_cell_value_is_untagged() {
    assert_eq!(serde_json::to_string(&CellValue::Number(1.5)).unwrap(), "1.5");
    assert_eq!(serde_json::to_string(&CellValue::Bool(true)).unwrap(), "true");
    assert_eq!(
        serde_json::to_string(&CellValue::Text("x".to_string())).unwrap(),
        "\"x\""
    );
}
