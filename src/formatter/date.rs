//! Date and time formatting

use crate::ast::{AmPmStyle, DatePart, ElapsedPart, FormatPart, Section};
use crate::date_serial::{serial_to_date, serial_to_weekday, split_serial};
use crate::error::FormatError;
use crate::options::FormatOptions;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Broken-down date and time of a serial.
struct Moment {
    year: i32,
    month: u32,
    day: u32,
    weekday: u32,
    hour: u32,
    minute: u32,
    second: u32,
    /// Sub-second digits, already scaled to the section's precision
    subsecond: u32,
    /// Whole seconds since serial zero, for elapsed parts
    total_seconds: i64,
}

impl Moment {
    fn from_serial(value: f64, subsecond_places: u8, opts: &FormatOptions) -> Result<Self, FormatError> {
        let out_of_range = FormatError::DateOutOfRange { serial: value };
        if !value.is_finite() || value < 0.0 {
            return Err(out_of_range);
        }

        let (days, seconds, subsecond) = if subsecond_places == 0 {
            let (days, seconds, _) = split_serial(value, true);
            (days, seconds, 0)
        } else {
            let scale = 10u32.pow(u32::from(subsecond_places));
            let (mut days, mut seconds, fraction) = split_serial(value, false);
            let mut units = (fraction * f64::from(scale)).round() as u32;
            if units >= scale {
                units -= scale;
                seconds += 1;
                if seconds >= 86_400 {
                    seconds -= 86_400;
                    days += 1;
                }
            }
            (days, seconds, units)
        };

        let (year, month, day) = serial_to_date(days as f64, opts.date_system).ok_or(out_of_range)?;

        Ok(Moment {
            year,
            month,
            day,
            weekday: serial_to_weekday(days as f64, opts.date_system),
            hour: seconds / 3600,
            minute: (seconds % 3600) / 60,
            second: seconds % 60,
            subsecond,
            total_seconds: days * 86_400 + i64::from(seconds),
        })
    }

    fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.month.clamp(1, 12) - 1) as usize]
    }

    fn day_name(&self) -> &'static str {
        DAY_NAMES[(self.weekday.clamp(1, 7) - 1) as usize]
    }
}

/// Format a value as a date/time using the given section.
pub fn format_date(
    value: f64,
    section: &Section,
    opts: &FormatOptions,
) -> Result<String, FormatError> {
    let has_ampm = section.parts.iter().any(|p| matches!(p, FormatPart::AmPm(_)));
    let subsecond_places = section
        .parts
        .iter()
        .find_map(|p| match p {
            FormatPart::DatePart(DatePart::SubSecond(places)) => Some(*places),
            _ => None,
        })
        .unwrap_or(0);

    let moment = Moment::from_serial(value, subsecond_places, opts)?;

    let mut result = String::new();
    for part in &section.parts {
        match part {
            FormatPart::DatePart(date_part) => {
                result.push_str(&format_date_part(*date_part, &moment, has_ampm));
            }
            FormatPart::AmPm(style) => result.push_str(format_ampm(*style, moment.hour)),
            FormatPart::Elapsed(elapsed) => {
                let amount = match elapsed {
                    ElapsedPart::Hours => moment.total_seconds / 3600,
                    ElapsedPart::Minutes => moment.total_seconds / 60,
                    ElapsedPart::Seconds => moment.total_seconds,
                };
                result.push_str(&amount.to_string());
            }
            FormatPart::Literal(s) | FormatPart::Currency(s) => result.push_str(s),
            FormatPart::Skip(_) => result.push(' '),
            FormatPart::ThousandsSeparator => result.push(','),
            FormatPart::DecimalPoint => result.push('.'),
            FormatPart::Percent => result.push('%'),
            _ => {}
        }
    }

    Ok(result)
}

/// Format a single date/time part.
fn format_date_part(part: DatePart, moment: &Moment, has_ampm: bool) -> String {
    match part {
        DatePart::Year2 => format!("{:02}", moment.year % 100),
        DatePart::Year4 => format!("{:04}", moment.year),

        DatePart::Month => moment.month.to_string(),
        DatePart::Month2 => format!("{:02}", moment.month),
        DatePart::MonthAbbr => moment.month_name()[..3].to_string(),
        DatePart::MonthFull => moment.month_name().to_string(),
        DatePart::MonthLetter => moment.month_name()[..1].to_string(),

        DatePart::Day => moment.day.to_string(),
        DatePart::Day2 => format!("{:02}", moment.day),
        DatePart::DayAbbr => moment.day_name()[..3].to_string(),
        DatePart::DayFull => moment.day_name().to_string(),

        DatePart::Hour | DatePart::Hour2 => {
            let hour = if has_ampm {
                to_12_hour(moment.hour)
            } else {
                moment.hour
            };
            if part == DatePart::Hour2 {
                format!("{:02}", hour)
            } else {
                hour.to_string()
            }
        }

        DatePart::Minute => moment.minute.to_string(),
        DatePart::Minute2 => format!("{:02}", moment.minute),

        DatePart::Second => moment.second.to_string(),
        DatePart::Second2 => format!("{:02}", moment.second),

        DatePart::SubSecond(places) => {
            format!(".{:0width$}", moment.subsecond, width = places as usize)
        }
    }
}

/// Convert 24-hour time to 12-hour format.
/// 0 -> 12, 1-12 -> 1-12, 13-23 -> 1-11
fn to_12_hour(hour: u32) -> u32 {
    match hour {
        0 => 12,
        1..=12 => hour,
        _ => hour - 12,
    }
}

fn format_ampm(style: AmPmStyle, hour: u32) -> &'static str {
    let pm = hour >= 12;
    match (style, pm) {
        (AmPmStyle::Upper, false) => "AM",
        (AmPmStyle::Upper, true) => "PM",
        (AmPmStyle::Lower, false) => "am",
        (AmPmStyle::Lower, true) => "pm",
        (AmPmStyle::ShortUpper, false) => "A",
        (AmPmStyle::ShortUpper, true) => "P",
        (AmPmStyle::ShortLower, false) => "a",
        (AmPmStyle::ShortLower, true) => "p",
    }
}
