use cellfmt::date_serial::{date_to_serial, serial_to_date, serial_to_time, serial_to_weekday};
use cellfmt::{to_day_serial, DateSystem};
use chrono::NaiveDate;

fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, s)
        .unwrap()
}

#[test]
fn test_serial_to_date_1900_basic() {
    // Day 1 = January 1, 1900
    let (y, m, d) = serial_to_date(1.0, DateSystem::Date1900).unwrap();
    assert_eq!((y, m, d), (1900, 1, 1));
}

#[test]
fn test_serial_to_date_1900_day_60() {
    // Day 60 = February 29, 1900, a date that never existed
    let (y, m, d) = serial_to_date(60.0, DateSystem::Date1900).unwrap();
    assert_eq!((y, m, d), (1900, 2, 29));
}

#[test]
fn test_serial_to_date_known_date() {
    // January 9, 2026 should be serial 46031 in 1900 system
    let (y, m, d) = serial_to_date(46031.0, DateSystem::Date1900).unwrap();
    assert_eq!((y, m, d), (2026, 1, 9));
}

#[test]
fn test_serial_to_time() {
    assert_eq!(serial_to_time(0.5), (12, 0, 0));
    assert_eq!(serial_to_time(0.75), (18, 0, 0));
    assert_eq!(serial_to_time(45047.0 + 3661.0 / 86_400.0), (1, 1, 1));
}

#[test]
fn test_to_day_serial_examples() {
    assert_eq!(to_day_serial(at(2023, 5, 1, 0, 0, 0), DateSystem::Date1900), 45047.0);
    assert_eq!(to_day_serial(at(2017, 2, 19, 0, 0, 0), DateSystem::Date1900), 42785.0);
    assert_eq!(to_day_serial(at(2023, 5, 1, 0, 0, 0), DateSystem::Date1904), 43585.0);
}

#[test]
fn test_to_day_serial_leap_bug_boundary() {
    assert_eq!(to_day_serial(at(1900, 2, 28, 23, 59, 59), DateSystem::Date1900).floor(), 59.0);
    assert_eq!(to_day_serial(at(1900, 3, 1, 0, 0, 0), DateSystem::Date1900), 61.0);
}

#[test]
fn test_to_day_serial_drops_subseconds() {
    let dt = NaiveDate::from_ymd_opt(2023, 5, 1)
        .unwrap()
        .and_hms_milli_opt(12, 0, 0, 999)
        .unwrap();
    assert_eq!(to_day_serial(dt, DateSystem::Date1900), 45047.5);
}

#[test]
fn test_date_to_serial() {
    assert_eq!(date_to_serial(2026, 1, 9, DateSystem::Date1900), Some(46031.0));
    assert_eq!(date_to_serial(1900, 2, 29, DateSystem::Date1900), Some(60.0));
    assert_eq!(date_to_serial(2023, 2, 29, DateSystem::Date1900), None);
    assert_eq!(date_to_serial(1903, 12, 31, DateSystem::Date1904), None);
}

#[test]
fn test_weekday() {
    // January 9, 2026 is a Friday
    assert_eq!(serial_to_weekday(46031.0, DateSystem::Date1900), 6);
}
