//! Date serial number conversion utilities
//!
//! Spreadsheets store dates as serial numbers counting days since a base date:
//! - 1900 system: Day 1 = January 1, 1900 (Windows default)
//! - 1904 system: Day 0 = January 1, 1904 (Mac legacy)
//!
//! The 1900 system carries the leap year bug: 1900 is treated as a leap year,
//! so day 60 is February 29, 1900 (which didn't exist) and every later day is
//! shifted by one.
//!
//! Time is stored as the fractional part of the serial number:
//! - 0.5 = 12:00:00 (noon)
//! - 0.75 = 18:00:00 (6 PM)

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::options::DateSystem;

/// `num_days_from_ce` of 1899-12-31, the day-zero of the 1900 system.
const EPOCH_DAYS_FROM_CE: i64 = 693_595;

/// Days between 1899-12-31 and 1904-01-01.
const DAYS_1904_OFFSET: i64 = 1461;

/// Day offset of 1900-03-01 from the epoch; from here on the leap bug shifts serials.
const LEAP_BUG_DAY: i64 = 60;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Convert a calendar date/time to a day serial.
///
/// The wall-clock fields are taken as they are, with no timezone applied.
/// Sub-second precision is dropped. In the 1900 system dates from 1900-03-01
/// onward gain one day to line up with the leap bug; the 1904 system subtracts
/// one four-year cycle instead.
pub fn to_day_serial(dt: NaiveDateTime, system: DateSystem) -> f64 {
    let days = i64::from(dt.date().num_days_from_ce()) - EPOCH_DAYS_FROM_CE;
    let seconds = f64::from(dt.time().num_seconds_from_midnight());

    let days = match system {
        DateSystem::Date1904 => days - DAYS_1904_OFFSET,
        DateSystem::Date1900 if days >= LEAP_BUG_DAY => days + 1,
        DateSystem::Date1900 => days,
    };

    days as f64 + seconds / SECONDS_PER_DAY
}

/// Convert a serial number to a date (year, month, day).
///
/// Returns `None` for negative serials or dates past year 9999.
///
/// In the 1900 system serial 0 is the placeholder date 1900-01-00 and serial
/// 60 is the phantom 1900-02-29.
pub fn serial_to_date(serial: f64, system: DateSystem) -> Option<(i32, u32, u32)> {
    if !serial.is_finite() {
        return None;
    }
    days_to_date(serial.floor() as i64, system)
}

fn days_to_date(days: i64, system: DateSystem) -> Option<(i32, u32, u32)> {
    if days < 0 {
        return None;
    }

    let offset = match system {
        DateSystem::Date1900 => match days {
            0 => return Some((1900, 1, 0)),
            LEAP_BUG_DAY => return Some((1900, 2, 29)),
            d if d > LEAP_BUG_DAY => d - 1,
            d => d,
        },
        DateSystem::Date1904 => days + DAYS_1904_OFFSET,
    };

    let ce = i32::try_from(EPOCH_DAYS_FROM_CE + offset).ok()?;
    let date = NaiveDate::from_num_days_from_ce_opt(ce)?;
    if date.year() > 9999 {
        return None;
    }
    Some((date.year(), date.month(), date.day()))
}

/// Split a serial into whole days and seconds into the day.
///
/// With `round_seconds`, the time is rounded to the nearest second and a value
/// that rounds up to midnight carries into the next day. Without it, seconds
/// are truncated and the remainder is returned as the third element.
pub fn split_serial(serial: f64, round_seconds: bool) -> (i64, u32, f64) {
    let days = serial.floor();
    let day_seconds = (serial - days) * SECONDS_PER_DAY;

    let (mut days, mut seconds, fraction) = if round_seconds {
        (days as i64, day_seconds.round() as u32, 0.0)
    } else {
        let whole = day_seconds.floor();
        (days as i64, whole as u32, day_seconds - whole)
    };

    if seconds >= 86_400 {
        days += 1;
        seconds -= 86_400;
    }

    (days, seconds, fraction)
}

/// Extract the time components (hours, minutes, seconds) from a serial number.
///
/// The time is the fractional part of the serial number, rounded to the
/// nearest second:
/// - 0.0 = 00:00:00
/// - 0.5 = 12:00:00
/// - 0.75 = 18:00:00
pub fn serial_to_time(serial: f64) -> (u32, u32, u32) {
    let (_, seconds, _) = split_serial(serial, true);
    (seconds / 3600, (seconds % 3600) / 60, seconds % 60)
}

/// Convert a date (year, month, day) to a serial number.
///
/// `(1900, 2, 29)` maps to the phantom day 60 in the 1900 system. Returns
/// `None` for dates that do not exist or precede the epoch.
pub fn date_to_serial(year: i32, month: u32, day: u32, system: DateSystem) -> Option<f64> {
    if system == DateSystem::Date1900 && (year, month, day) == (1900, 2, 29) {
        return Some(LEAP_BUG_DAY as f64);
    }

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let serial = to_day_serial(date.and_time(chrono::NaiveTime::MIN), system);
    (serial >= 0.0).then_some(serial)
}

/// Get the day of the week from a serial number.
///
/// Returns 1 = Sunday, 2 = Monday, ..., 7 = Saturday (WEEKDAY with
/// return_type=1). The 1900 system counts the phantom leap day, which keeps
/// weekdays correct from March 1900 on.
pub fn serial_to_weekday(serial: f64, system: DateSystem) -> u32 {
    let days = serial.floor() as i64;
    let index = match system {
        // Day 1 (Jan 1, 1900) is reported as a Sunday
        DateSystem::Date1900 => (days + 6).rem_euclid(7),
        // Day 0 (Jan 1, 1904) was a Friday
        DateSystem::Date1904 => (days + 5).rem_euclid(7),
    };
    index as u32 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_to_day_serial_before_leap_bug() {
        assert_eq!(to_day_serial(dt(1900, 1, 1, 0, 0, 0), DateSystem::Date1900), 1.0);
        assert_eq!(to_day_serial(dt(1900, 2, 28, 0, 0, 0), DateSystem::Date1900), 59.0);
    }

    #[test]
    fn test_to_day_serial_after_leap_bug() {
        assert_eq!(to_day_serial(dt(1900, 3, 1, 0, 0, 0), DateSystem::Date1900), 61.0);
        assert_eq!(to_day_serial(dt(2023, 5, 1, 0, 0, 0), DateSystem::Date1900), 45047.0);
    }

    #[test]
    fn test_to_day_serial_time_fraction() {
        let serial = to_day_serial(dt(2023, 5, 1, 12, 0, 0), DateSystem::Date1900);
        assert_eq!(serial, 45047.5);
        let serial = to_day_serial(dt(2023, 5, 1, 18, 0, 0), DateSystem::Date1900);
        assert_eq!(serial, 45047.75);
    }

    #[test]
    fn test_to_day_serial_1904() {
        assert_eq!(to_day_serial(dt(1904, 1, 1, 0, 0, 0), DateSystem::Date1904), 0.0);
        assert_eq!(to_day_serial(dt(2023, 5, 1, 0, 0, 0), DateSystem::Date1904), 43585.0);
    }

    #[test]
    fn test_serial_to_date_leap_year_bug() {
        assert_eq!(serial_to_date(59.0, DateSystem::Date1900), Some((1900, 2, 28)));
        assert_eq!(serial_to_date(60.0, DateSystem::Date1900), Some((1900, 2, 29)));
        assert_eq!(serial_to_date(61.0, DateSystem::Date1900), Some((1900, 3, 1)));
    }

    #[test]
    fn test_serial_to_date_zero_and_negative() {
        assert_eq!(serial_to_date(0.5, DateSystem::Date1900), Some((1900, 1, 0)));
        assert_eq!(serial_to_date(-1.0, DateSystem::Date1900), None);
        assert_eq!(serial_to_date(0.0, DateSystem::Date1904), Some((1904, 1, 1)));
    }

    #[test]
    fn test_split_serial_carries_midnight() {
        // 23:59:59.9 rounds up into the next day
        let serial = 45047.0 + 86_399.9 / 86_400.0;
        assert_eq!(split_serial(serial, true).0, 45048);
        assert_eq!(split_serial(serial, true).1, 0);
        assert_eq!(split_serial(serial, false).1, 86_399);
    }

    #[test]
    fn test_roundtrip_1900() {
        for &(y, m, d) in &[(1900, 1, 1), (1900, 3, 1), (2000, 2, 29), (2024, 12, 31)] {
            let serial = date_to_serial(y, m, d, DateSystem::Date1900).unwrap();
            assert_eq!(serial_to_date(serial, DateSystem::Date1900), Some((y, m, d)));
        }
    }

    #[test]
    fn test_weekday() {
        // 2023-05-01 was a Monday
        assert_eq!(serial_to_weekday(45047.0, DateSystem::Date1900), 2);
        assert_eq!(serial_to_weekday(43585.0, DateSystem::Date1904), 2);
    }
}
