//! Text predicates used to route raw input through the classifier.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

/// Error literals a cell can hold.
pub const ERROR_VALUES: [&str; 10] = [
    "#N/A",
    "#NUM!",
    "#REF!",
    "#NAME?",
    "#DIV/0!",
    "#NULL!",
    "#VALUE!",
    "#SPILL!",
    "#CALC!",
    "#GETTING_DATA",
];

fn real_number_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?$").expect("real number regex")
    })
}

fn date_time_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(\d{4})[-/](\d{1,2})[-/](\d{1,2})( \d{1,2}:\d{1,2}(:\d{1,2})?)?$")
            .expect("date time regex")
    })
}

/// Whether the text, trimmed, is a plain decimal or exponential number.
///
/// ```
/// use cellfmt::is_real_number;
///
/// assert!(is_real_number(" -1.5e3 "));
/// assert!(is_real_number(".5"));
/// assert!(!is_real_number("1,000"));
/// assert!(!is_real_number(""));
/// ```
pub fn is_real_number(text: &str) -> bool {
    real_number_re().is_match(text.trim())
}

/// Whether the text is one of the spreadsheet error literals.
pub fn is_error_value(text: &str) -> bool {
    ERROR_VALUES.contains(&text)
}

/// Whether the text is a `YYYY-M-D` or `YYYY/M/D` date with an optional
/// `H:M[:S]` time, naming a real calendar day no earlier than 1900.
pub fn looks_like_date_time(text: &str) -> bool {
    let Some(caps) = date_time_re().captures(text) else {
        return false;
    };

    let field = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());
    let (Some(year), Some(month), Some(day)) = (field(1), field(2), field(3)) else {
        return false;
    };

    year >= 1900
        && i32::try_from(year)
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, month, day))
            .is_some()
}
