//! Borrowed values handed to the rendering engine.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::cell::{CellValue, RawValue};

/// Anything a format code can be applied to.
///
/// Dates are rendered through their day serial; text only reaches the text
/// section of a format.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    Number(f64),
    Text(&'a str),
    Bool(bool),
    DateTime(NaiveDateTime),
    Empty,
}

macro_rules! numeric_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value<'_> {
                fn from(n: $ty) -> Self {
                    Value::Number(n as f64)
                }
            }
        )*
    };
}

numeric_value!(f64, f32, i64, i32, u32);

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::Text(s)
    }
}

impl From<bool> for Value<'_> {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<()> for Value<'_> {
    fn from(_: ()) -> Self {
        Value::Empty
    }
}

impl From<NaiveDateTime> for Value<'_> {
    fn from(dt: NaiveDateTime) -> Self {
        Value::DateTime(dt)
    }
}

impl From<NaiveDate> for Value<'_> {
    fn from(d: NaiveDate) -> Self {
        Value::DateTime(d.and_time(NaiveTime::MIN))
    }
}

impl<'a> From<&'a RawValue> for Value<'a> {
    fn from(raw: &'a RawValue) -> Self {
        match raw {
            RawValue::Empty => Value::Empty,
            RawValue::Text(s) => Value::Text(s),
            RawValue::Number(n) => Value::Number(*n),
            RawValue::Bool(b) => Value::Bool(*b),
            RawValue::DateTime(dt) => Value::DateTime(*dt),
        }
    }
}

impl<'a> From<&'a CellValue> for Value<'a> {
    fn from(cell: &'a CellValue) -> Self {
        match cell {
            CellValue::Number(n) => Value::Number(*n),
            CellValue::Bool(b) => Value::Bool(*b),
            CellValue::Text(s) => Value::Text(s),
        }
    }
}

impl<'a> Value<'a> {
    /// Numeric view; booleans count as 1 and 0.
    pub fn as_number(&self) -> Option<f64> {
        match *self {
            Value::Number(n) => Some(n),
            Value::Bool(b) => Some(if b { 1.0 } else { 0.0 }),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&'a str> {
        match *self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Empty)
    }

    /// Short name used in log fields.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Text(_) => "text",
            Value::Bool(_) => "boolean",
            Value::DateTime(_) => "datetime",
            Value::Empty => "empty",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_value() {
        let raw = RawValue::from("abc");
        assert_eq!(Value::from(&raw), Value::Text("abc"));
        assert_eq!(Value::from(&RawValue::Empty), Value::Empty);
        assert_eq!(Value::from(&RawValue::Number(2.0)), Value::Number(2.0));
    }

    #[test]
    fn test_from_cell_value() {
        let cell = CellValue::Text("x".to_string());
        assert_eq!(Value::from(&cell).as_text(), Some("x"));
        assert_eq!(Value::from(&CellValue::Bool(false)).as_number(), Some(0.0));
    }

    #[test]
    fn test_numeric_conversions() {
        assert_eq!(Value::from(7_u32), Value::Number(7.0));
        assert_eq!(Value::from(-3_i64), Value::Number(-3.0));
        assert_eq!(Value::from(0.5_f32), Value::Number(0.5));
    }
}
