//! Deterministic parsing of dates typed as free text.
//!
//! Accepted shapes, tried in order:
//! - ISO: `2023-05-01`, `2023/5/1 08:30`, `2023-05-01T08:30:15.250Z`
//! - US: `5/1/23`, `5/1/2023 8:30:15`
//! - Month names: `1-May-23`, `1 May 2023`, `May 1, 2023`
//! - Digit groups: any run of numbers split by `- : / \` or spaces, read as
//!   year, month, day, hour, minute, second

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use regex::{Captures, Regex};
use std::sync::OnceLock;

use crate::options::FormatOptions;

/// Timezone correction applied after parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TzFix {
    /// Leave the wall-clock value alone
    #[default]
    Keep,
    /// Shift a local wall-clock time to UTC
    ToUtc,
    /// Shift a UTC wall-clock time to local
    FromUtc,
}

impl From<i32> for TzFix {
    fn from(value: i32) -> Self {
        match value.signum() {
            1 => TzFix::ToUtc,
            -1 => TzFix::FromUtc,
            _ => TzFix::Keep,
        }
    }
}

const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Defaults for missing digit groups: year, month, day, hour, minute, second.
const REFERENCE_FIELDS: [u32; 6] = [2017, 2, 19, 0, 0, 0];

fn patterns() -> &'static DatePatterns {
    static PATTERNS: OnceLock<DatePatterns> = OnceLock::new();
    PATTERNS.get_or_init(DatePatterns::new)
}

struct DatePatterns {
    iso: Regex,
    us: Regex,
    day_month_year: Regex,
    month_day_year: Regex,
    digits_only: Regex,
    digit_group: Regex,
}

impl DatePatterns {
    fn new() -> Self {
        Self {
            // 2023-05-01, 2023/05/01 08:30:15.250Z
            iso: Regex::new(
                r"^(\d{4})[-/](\d{1,2})[-/](\d{1,2})(?:[T ](\d{1,2}):(\d{1,2})(?::(\d{1,2})(?:\.(\d{1,9}))?)?)?(Z)?$",
            )
            .expect("iso date regex"),
            // 5/1/23, 05/01/2023 8:30
            us: Regex::new(
                r"^(\d{1,2})/(\d{1,2})/(\d{4}|\d{2})(?: (\d{1,2}):(\d{1,2})(?::(\d{1,2}))?)?$",
            )
            .expect("us date regex"),
            // 1-May-23, 1 May 2023
            day_month_year: Regex::new(r"^(\d{1,2})[- ]([A-Za-z]{3,})\.?[- ](\d{4}|\d{2})$")
                .expect("day month year regex"),
            // May 1, 2023
            month_day_year: Regex::new(r"^([A-Za-z]{3,})\.? (\d{1,2}),? (\d{4})$")
                .expect("month day year regex"),
            digits_only: Regex::new(r"^[\d\s\-:/\\]+$").expect("digit date regex"),
            digit_group: Regex::new(r"\d+").expect("digit group regex"),
        }
    }
}

/// Parse a date typed as free text.
///
/// Returns `None` when the text matches no accepted shape, names a day that
/// doesn't exist, or lands outside years 0 through 9999. A trailing `Z` marks
/// the time as UTC and shifts it to the local offset in `opts`; `fix` then
/// applies a further timezone correction.
///
/// ```
/// use cellfmt::{parse_fuzzy_date, FormatOptions, TzFix};
///
/// let opts = FormatOptions::default();
/// let dt = parse_fuzzy_date("May 1, 2023", TzFix::Keep, &opts).unwrap();
/// assert_eq!(dt.to_string(), "2023-05-01 00:00:00");
/// assert!(parse_fuzzy_date("2023-02-30", TzFix::Keep, &opts).is_none());
/// ```
pub fn parse_fuzzy_date(text: &str, fix: TzFix, opts: &FormatOptions) -> Option<NaiveDateTime> {
    let text = text.trim();
    let parsed = parse_iso(text)
        .or_else(|| parse_us(text).map(|dt| (dt, false)))
        .or_else(|| parse_month_name(text).map(|dt| (dt, false)))
        .or_else(|| parse_digit_groups(text).map(|dt| (dt, false)));

    let Some((mut dt, utc)) = parsed else {
        tracing::debug!(text, "unrecognized date text");
        return None;
    };

    let offset = Duration::minutes(i64::from(opts.utc_offset_minutes));
    if utc {
        dt = dt.checked_add_signed(offset)?;
    }
    dt = match fix {
        TzFix::Keep => dt,
        TzFix::ToUtc => dt.checked_sub_signed(offset)?,
        TzFix::FromUtc => dt.checked_add_signed(offset)?,
    };

    if !(0..=9999).contains(&dt.year()) {
        tracing::debug!(text, year = dt.year(), "date year out of range");
        return None;
    }
    Some(dt)
}

/// Parse a date and reject implausible results.
///
/// On top of [`parse_fuzzy_date`], the year must fall in 1900 through 9999,
/// and text that only produced the 1 January default (or a 2001 date) must
/// either name a month or consist of digits and date separators alone.
pub fn fuzzy_date(text: &str) -> Option<NaiveDateTime> {
    let dt = parse_fuzzy_date(text, TzFix::Keep, &FormatOptions::default())?;

    if !(0..=8099).contains(&(dt.year() - 1900)) {
        return None;
    }
    if (dt.month() > 1 || dt.day() > 1) && dt.year() != 2001 {
        return Some(dt);
    }

    let lower = text.to_ascii_lowercase();
    if MONTH_NAMES.iter().any(|name| lower.contains(&name[..3])) {
        return Some(dt);
    }
    let only_date_chars = text
        .chars()
        .all(|c| c.is_ascii_digit() || c.is_whitespace() || matches!(c, '-' | ':' | ',' | '/' | '\\'));
    only_date_chars.then_some(dt)
}

fn parse_iso(text: &str) -> Option<(NaiveDateTime, bool)> {
    let caps = patterns().iso.captures(text)?;
    let date = NaiveDate::from_ymd_opt(int(&caps, 1)?, uint(&caps, 2)?, uint(&caps, 3)?)?;
    let nanos = caps
        .get(7)
        .map(|m| format!("{:0<9}", m.as_str()).parse::<u32>())
        .transpose()
        .ok()?
        .unwrap_or(0);
    let time = time_of(&caps, 4, nanos)?;
    Some((date.and_time(time), caps.get(8).is_some()))
}

fn parse_us(text: &str) -> Option<NaiveDateTime> {
    let caps = patterns().us.captures(text)?;
    let year = match caps.get(3)?.as_str() {
        short if short.len() == 2 => expand_two_digit_year(short.parse().ok()?),
        full => full.parse().ok()?,
    };
    let date = NaiveDate::from_ymd_opt(year, uint(&caps, 1)?, uint(&caps, 2)?)?;
    Some(date.and_time(time_of(&caps, 4, 0)?))
}

fn parse_month_name(text: &str) -> Option<NaiveDateTime> {
    let patterns = patterns();
    let (day, month, year) = if let Some(caps) = patterns.day_month_year.captures(text) {
        let year_text = caps.get(3)?.as_str();
        let year = if year_text.len() == 2 {
            expand_two_digit_year(year_text.parse().ok()?)
        } else {
            year_text.parse().ok()?
        };
        (uint(&caps, 1)?, month_from_name(caps.get(2)?.as_str())?, year)
    } else {
        let caps = patterns.month_day_year.captures(text)?;
        (uint(&caps, 2)?, month_from_name(caps.get(1)?.as_str())?, int(&caps, 3)?)
    };

    NaiveDate::from_ymd_opt(year, month, day).map(|d| d.and_time(NaiveTime::MIN))
}

fn parse_digit_groups(text: &str) -> Option<NaiveDateTime> {
    let patterns = patterns();
    if !patterns.digits_only.is_match(text) {
        return None;
    }

    let groups: Vec<u32> = patterns
        .digit_group
        .find_iter(text)
        .take(6)
        .map(|m| m.as_str().parse::<u32>())
        .collect::<Result<_, _>>()
        .ok()?;
    if groups.is_empty() {
        return None;
    }

    let mut fields = REFERENCE_FIELDS;
    fields[..groups.len()].copy_from_slice(&groups);
    let [year, month, day, hour, minute, second] = fields;

    NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, day)?.and_hms_opt(hour, minute, second)
}

/// Years `00`-`49` are 2000s, `50`-`99` are 1900s.
fn expand_two_digit_year(year: i32) -> i32 {
    if year < 50 {
        2000 + year
    } else {
        1900 + year
    }
}

/// Month number from an English name or its abbreviation (at least three letters).
fn month_from_name(name: &str) -> Option<u32> {
    let lower = name.to_ascii_lowercase();
    MONTH_NAMES
        .iter()
        .position(|full| full.starts_with(&lower))
        .map(|index| index as u32 + 1)
}

/// Optional `hour:minute[:second]` starting at capture group `first`.
fn time_of(caps: &Captures<'_>, first: usize, nanos: u32) -> Option<NaiveTime> {
    if caps.get(first).is_none() {
        return Some(NaiveTime::MIN);
    }
    let second = caps.get(first + 2).map_or(Some(0), |m| m.as_str().parse().ok())?;
    NaiveTime::from_hms_nano_opt(uint(caps, first)?, uint(caps, first + 1)?, second, nanos)
}

fn uint(caps: &Captures<'_>, index: usize) -> Option<u32> {
    caps.get(index)?.as_str().parse().ok()
}

fn int(caps: &Captures<'_>, index: usize) -> Option<i32> {
    caps.get(index)?.as_str().parse().ok()
}
