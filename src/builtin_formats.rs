//! Built-in number format IDs and the legacy named formats.
//!
//! Spreadsheet files store numeric format IDs (0-49) for built-in formats and
//! leave the format code implied. Older XML spreadsheet files instead name a
//! handful of formats ("Currency", "Short Date", ...). Both map onto the same
//! master table of format codes.

/// Get the format code string for a built-in format ID.
///
/// # Examples
/// ```
/// use cellfmt::format_code_from_id;
///
/// assert_eq!(format_code_from_id(0), Some("General"));
/// assert_eq!(format_code_from_id(14), Some("m/d/yy"));
/// assert_eq!(format_code_from_id(164), None); // Custom format
/// ```
pub fn format_code_from_id(id: u32) -> Option<&'static str> {
    match id {
        0 => Some("General"),
        1 => Some("0"),
        2 => Some("0.00"),
        3 => Some("#,##0"),
        4 => Some("#,##0.00"),
        9 => Some("0%"),
        10 => Some("0.00%"),
        11 => Some("0.00E+00"),
        12 => Some("# ?/?"),
        13 => Some("# ??/??"),
        14 => Some("m/d/yy"),
        15 => Some("d-mmm-yy"),
        16 => Some("d-mmm"),
        17 => Some("mmm-yy"),
        18 => Some("h:mm AM/PM"),
        19 => Some("h:mm:ss AM/PM"),
        20 => Some("h:mm"),
        21 => Some("h:mm:ss"),
        22 => Some("m/d/yy h:mm"),
        37 => Some("#,##0 ;(#,##0)"),
        38 => Some("#,##0 ;[Red](#,##0)"),
        39 => Some("#,##0.00;(#,##0.00)"),
        40 => Some("#,##0.00;[Red](#,##0.00)"),
        45 => Some("mm:ss"),
        46 => Some("[h]:mm:ss"),
        47 => Some("mmss.0"),
        48 => Some("##0.0E+0"),
        49 => Some("@"),
        _ => None,
    }
}

/// Check if a format ID is a built-in format.
pub fn is_builtin_format_id(id: u32) -> bool {
    format_code_from_id(id).is_some()
}

/// Named formats and the built-in ID or literal code each one stands for.
const LEGACY_FORMATS: [(&str, LegacyCode); 16] = [
    ("General Number", LegacyCode::Literal("General")),
    ("General Date", LegacyCode::Builtin(22)),
    ("Long Date", LegacyCode::Literal("dddd, mmmm dd, yyyy")),
    ("Medium Date", LegacyCode::Builtin(15)),
    ("Short Date", LegacyCode::Builtin(14)),
    ("Long Time", LegacyCode::Builtin(19)),
    ("Medium Time", LegacyCode::Builtin(18)),
    ("Short Time", LegacyCode::Builtin(20)),
    (
        "Currency",
        LegacyCode::Literal("\"$\"#,##0.00_);[Red]\\(\"$\"#,##0.00\\)"),
    ),
    ("Fixed", LegacyCode::Builtin(2)),
    ("Standard", LegacyCode::Builtin(4)),
    ("Percent", LegacyCode::Builtin(10)),
    ("Scientific", LegacyCode::Builtin(11)),
    ("Yes/No", LegacyCode::Literal("\"Yes\";\"Yes\";\"No\";@")),
    ("True/False", LegacyCode::Literal("\"True\";\"True\";\"False\";@")),
    ("On/Off", LegacyCode::Literal("\"Yes\";\"Yes\";\"No\";@")),
];

#[derive(Clone, Copy)]
enum LegacyCode {
    Builtin(u32),
    Literal(&'static str),
}

/// Look up the format code behind a legacy format name.
///
/// Names are matched exactly.
///
/// # Examples
/// ```
/// use cellfmt::legacy_format_code;
///
/// assert_eq!(legacy_format_code("Percent"), Some("0.00%"));
/// assert_eq!(legacy_format_code("Short Date"), Some("m/d/yy"));
/// assert_eq!(legacy_format_code("percent"), None);
/// ```
pub fn legacy_format_code(name: &str) -> Option<&'static str> {
    let (_, code) = LEGACY_FORMATS.iter().find(|(n, _)| *n == name)?;
    match *code {
        LegacyCode::Builtin(id) => format_code_from_id(id),
        LegacyCode::Literal(code) => Some(code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_number_formats() {
        assert_eq!(format_code_from_id(1), Some("0"));
        assert_eq!(format_code_from_id(2), Some("0.00"));
        assert_eq!(format_code_from_id(3), Some("#,##0"));
        assert_eq!(format_code_from_id(4), Some("#,##0.00"));
    }

    #[test]
    fn test_date_and_time_formats() {
        assert_eq!(format_code_from_id(15), Some("d-mmm-yy"));
        assert_eq!(format_code_from_id(18), Some("h:mm AM/PM"));
        assert_eq!(format_code_from_id(22), Some("m/d/yy h:mm"));
        assert_eq!(format_code_from_id(46), Some("[h]:mm:ss"));
    }

    #[test]
    fn test_undefined_ids() {
        for id in [5, 8, 23, 36, 41, 44, 50, 164] {
            assert_eq!(format_code_from_id(id), None, "id {}", id);
            assert!(!is_builtin_format_id(id));
        }
    }

    #[test]
    fn test_every_legacy_name_resolves() {
        for (name, _) in LEGACY_FORMATS {
            assert!(legacy_format_code(name).is_some(), "{}", name);
        }
    }

    #[test]
    fn test_legacy_lookup() {
        assert_eq!(legacy_format_code("General Number"), Some("General"));
        assert_eq!(legacy_format_code("General Date"), Some("m/d/yy h:mm"));
        assert_eq!(legacy_format_code("Long Time"), Some("h:mm:ss AM/PM"));
        assert_eq!(legacy_format_code("Fixed"), Some("0.00"));
        assert_eq!(legacy_format_code("Scientific"), Some("0.00E+00"));
        assert_eq!(
            legacy_format_code("On/Off"),
            legacy_format_code("Yes/No")
        );
        assert_eq!(legacy_format_code("Accounting"), None);
    }
}
