use cellfmt::{
    fuzzy_date, parse_fuzzy_date, parse_fuzzy_number, parse_loose_number, to_day_serial,
    DateSystem, FormatOptions, TzFix,
};
use chrono::{NaiveDate, NaiveDateTime};

fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, s)
        .unwrap()
}

#[test]
fn test_fuzzy_number_examples() {
    assert_eq!(parse_fuzzy_number("(1,234.50)"), Some(-1234.5));
    assert_eq!(parse_fuzzy_number("45%"), Some(0.45));
}

#[test]
fn test_fuzzy_number_misses() {
    assert_eq!(parse_fuzzy_number(""), None);
    assert_eq!(parse_fuzzy_number("12 apples"), None);
    assert_eq!(parse_fuzzy_number("1.2.3"), None);
}

#[test]
fn test_loose_number_matches_fuzzy_after_trim() {
    for text in ["1,234.5", "12.5%", "-0.25", "$3"] {
        assert_eq!(
            parse_loose_number(&format!("  {}  ", text)),
            parse_fuzzy_number(text),
            "{}",
            text
        );
    }
}

#[test]
fn test_parse_fuzzy_date_grammars() {
    let opts = FormatOptions::default();
    let cases = [
        ("2017-02-19", at(2017, 2, 19, 0, 0, 0)),
        ("2017/02/19 19:06:09", at(2017, 2, 19, 19, 6, 9)),
        ("2017-02-19T19:06:09.000Z", at(2017, 2, 19, 19, 6, 9)),
        ("2/19/17", at(2017, 2, 19, 0, 0, 0)),
        ("2/19/2017 7:06", at(2017, 2, 19, 7, 6, 0)),
        ("19-Feb-17", at(2017, 2, 19, 0, 0, 0)),
        ("19 February 2017", at(2017, 2, 19, 0, 0, 0)),
        ("Feb 19, 2017", at(2017, 2, 19, 0, 0, 0)),
        ("  2017 2 19  ", at(2017, 2, 19, 0, 0, 0)),
    ];
    for (text, expected) in cases {
        assert_eq!(parse_fuzzy_date(text, TzFix::Keep, &opts), Some(expected), "{}", text);
    }
}

#[test]
fn test_parse_fuzzy_date_misses() {
    let opts = FormatOptions::default();
    for text in ["", "tomorrow", "2017-13-01", "2017-02-29", "31/12/2017", "Feb 30, 2017"] {
        assert_eq!(parse_fuzzy_date(text, TzFix::Keep, &opts), None, "{}", text);
    }
}

#[test]
fn test_utc_marker_uses_local_offset() {
    let tokyo = FormatOptions::default().with_utc_offset(540);
    assert_eq!(
        parse_fuzzy_date("2017-02-19T19:06:09Z", TzFix::Keep, &tokyo),
        Some(at(2017, 2, 20, 4, 6, 9))
    );

    let new_york = FormatOptions::default().with_utc_offset(-300);
    assert_eq!(
        parse_fuzzy_date("2017-02-19T01:00:00Z", TzFix::Keep, &new_york),
        Some(at(2017, 2, 18, 20, 0, 0))
    );
}

#[test]
fn test_tz_fix_round_trip() {
    let opts = FormatOptions::default().with_utc_offset(120);
    let utc = parse_fuzzy_date("2023-05-01 10:00", TzFix::from(1), &opts).unwrap();
    let local = parse_fuzzy_date(&utc.to_string(), TzFix::from(-1), &opts).unwrap();
    assert_eq!(local, at(2023, 5, 1, 10, 0, 0));
}

#[test]
fn test_parsed_date_serial() {
    let opts = FormatOptions::default();
    let dt = parse_fuzzy_date("2023/05/01", TzFix::Keep, &opts).unwrap();
    assert_eq!(to_day_serial(dt, DateSystem::Date1900), 45047.0);
}

#[test]
fn test_fuzzy_date_rejections() {
    assert_eq!(fuzzy_date("1899-12-31"), None);
    assert_eq!(fuzzy_date("Jan 1, 1850"), None);
    assert_eq!(fuzzy_date("1/1/01 noon"), None);
}

#[test]
fn test_fuzzy_date_accepts() {
    assert_eq!(fuzzy_date("2017-02-19"), Some(at(2017, 2, 19, 0, 0, 0)));
    assert_eq!(fuzzy_date("1-Jan-2017"), Some(at(2017, 1, 1, 0, 0, 0)));
    assert_eq!(fuzzy_date("2017/1/1"), Some(at(2017, 1, 1, 0, 0, 0)));
    assert_eq!(fuzzy_date("2001-06-01"), Some(at(2001, 6, 1, 0, 0, 0)));
}
