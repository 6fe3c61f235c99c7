//! Raw cell input and the typed result of classifying it.

use chrono::{NaiveDate, NaiveDateTime};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A loosely-typed value as it arrives from user input or an import.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// No value
    Empty,
    /// Free-form text
    Text(String),
    /// A native number
    Number(f64),
    /// A native boolean
    Bool(bool),
    /// A native calendar date and time
    DateTime(NaiveDateTime),
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        RawValue::Number(n)
    }
}

impl From<i64> for RawValue {
    fn from(n: i64) -> Self {
        RawValue::Number(n as f64)
    }
}

impl From<bool> for RawValue {
    fn from(b: bool) -> Self {
        RawValue::Bool(b)
    }
}

impl From<NaiveDateTime> for RawValue {
    fn from(dt: NaiveDateTime) -> Self {
        RawValue::DateTime(dt)
    }
}

impl From<NaiveDate> for RawValue {
    fn from(d: NaiveDate) -> Self {
        RawValue::DateTime(d.and_time(chrono::NaiveTime::MIN))
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawValue::Empty, Into::into)
    }
}

/// The kind of value a cell holds, with its one-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CellKind {
    #[cfg_attr(feature = "serde", serde(rename = "n"))]
    Number,
    #[cfg_attr(feature = "serde", serde(rename = "s"))]
    Text,
    #[cfg_attr(feature = "serde", serde(rename = "b"))]
    Boolean,
    #[cfg_attr(feature = "serde", serde(rename = "e"))]
    Error,
    #[cfg_attr(feature = "serde", serde(rename = "d"))]
    Date,
    #[cfg_attr(feature = "serde", serde(rename = "g"))]
    General,
}

impl CellKind {
    /// The one-letter type code (`n`, `s`, `b`, `e`, `d`, `g`).
    pub fn code(&self) -> char {
        match self {
            CellKind::Number => 'n',
            CellKind::Text => 's',
            CellKind::Boolean => 'b',
            CellKind::Error => 'e',
            CellKind::Date => 'd',
            CellKind::General => 'g',
        }
    }
}

/// A format code together with the kind of value it was chosen for.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormatDescriptor {
    #[cfg_attr(feature = "serde", serde(rename = "fa"))]
    pub pattern: String,
    #[cfg_attr(feature = "serde", serde(rename = "t"))]
    pub kind: CellKind,
}

impl FormatDescriptor {
    pub fn new(pattern: impl Into<String>, kind: CellKind) -> Self {
        FormatDescriptor {
            pattern: pattern.into(),
            kind,
        }
    }
}

/// The normalized value stored for a cell. Dates are day serials.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum CellValue {
    Number(f64),
    Bool(bool),
    Text(String),
}

impl CellValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Outcome of classifying a raw value.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedValue {
    /// Text shown in the cell
    pub display: String,
    /// Format code and value kind
    pub descriptor: FormatDescriptor,
    /// Normalized value
    pub value: CellValue,
}

impl ClassifiedValue {
    pub(crate) fn new(
        display: impl Into<String>,
        pattern: impl Into<String>,
        kind: CellKind,
        value: CellValue,
    ) -> Self {
        ClassifiedValue {
            display: display.into(),
            descriptor: FormatDescriptor::new(pattern, kind),
            value,
        }
    }

    pub fn kind(&self) -> CellKind {
        self.descriptor.kind
    }

    pub fn pattern(&self) -> &str {
        &self.descriptor.pattern
    }
}
