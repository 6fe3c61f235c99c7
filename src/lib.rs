//! cellfmt - classify spreadsheet cell input and render number format codes
//!
//! Raw cell input (usually text typed by a user) is classified into a typed
//! value: a display string, a format code and a normalized number, boolean
//! or string. Format codes are parsed and rendered by an ECMA-376 style
//! engine, which also answers whether a code denotes a date.
//!
//! ```
//! use cellfmt::{classify, render, CellKind};
//!
//! let cell = classify(&"2023-05-01".into()).unwrap();
//! assert_eq!(cell.kind(), CellKind::Date);
//! assert_eq!(render(cell.pattern(), 45047.0), cell.display);
//! ```

pub mod ast;
pub mod error;
pub mod options;
pub mod value;

pub mod builtin_formats;
pub mod cell;
pub mod classify;
pub mod date_serial;
pub mod fuzzy;
pub mod predicates;
pub mod xml;

mod cache;
mod formatter;
pub mod parser;

pub use ast::{NumberFormat, Section};
pub use builtin_formats::{format_code_from_id, is_builtin_format_id, legacy_format_code};
pub use cell::{CellKind, CellValue, ClassifiedValue, FormatDescriptor, RawValue};
pub use classify::{classify, classify_with};
pub use date_serial::to_day_serial;
pub use error::{FormatError, ParseError};
pub use formatter::format_general;
pub use fuzzy::{fuzzy_date, parse_fuzzy_date, parse_fuzzy_number, parse_loose_number, TzFix};
pub use options::{DateSystem, FormatOptions};
pub use predicates::{is_error_value, is_real_number, looks_like_date_time};
pub use value::Value;
pub use xml::unescape_xml_text;

/// Format a value with a format code.
///
/// Parsed format codes are cached per thread.
///
/// ```
/// use cellfmt::{format, FormatOptions};
///
/// let opts = FormatOptions::default();
/// assert_eq!(format(1234.5, "#,##0.00", &opts).unwrap(), "1,234.50");
/// assert_eq!(format("abc", "\"[\"@\"]\"", &opts).unwrap(), "[abc]");
/// ```
pub fn format<'a>(
    value: impl Into<Value<'a>>,
    format_code: &str,
    opts: &FormatOptions,
) -> Result<String, ParseError> {
    let fmt = cache::get_or_parse(format_code)?;
    Ok(fmt.format_value(&value.into(), opts))
}

/// Format a value with a format code using the default options.
pub fn format_default<'a>(
    value: impl Into<Value<'a>>,
    format_code: &str,
) -> Result<String, ParseError> {
    format(value, format_code, &FormatOptions::default())
}

/// Render a value with a format code, never failing.
///
/// A format code that cannot be parsed renders the value as `General`.
pub fn render<'a>(pattern: &str, value: impl Into<Value<'a>>) -> String {
    render_with(pattern, value, &FormatOptions::default())
}

/// [`render`] with explicit options.
pub fn render_with<'a>(pattern: &str, value: impl Into<Value<'a>>, opts: &FormatOptions) -> String {
    let value = value.into();
    match cache::get_or_parse(pattern) {
        Ok(fmt) => fmt.format_value(&value, opts),
        Err(err) => {
            tracing::debug!(pattern, %err, value = value.type_name(), "rendering as General");
            NumberFormat::general().format_value(&value, opts)
        }
    }
}

/// Whether a format code denotes a date or time.
///
/// Codes that cannot be parsed are not date formats.
///
/// ```
/// use cellfmt::is_date_format;
///
/// assert!(is_date_format("yyyy-MM-dd"));
/// assert!(is_date_format("[h]:mm:ss"));
/// assert!(!is_date_format("0.00"));
/// assert!(!is_date_format("\"unterminated"));
/// ```
pub fn is_date_format(pattern: &str) -> bool {
    cache::get_or_parse(pattern).is_ok_and(|fmt| fmt.is_date_format())
}
