use jiff::civil::date;

use intake_core::dates::{age_on, parse_display_date, to_timestamp};

#[test]
fn parses_display_format() {
    let d = parse_display_date("05/17/1990").unwrap();
    assert_eq!(d, date(1990, 5, 17));
}

#[test]
fn rejects_loose_or_impossible_dates() {
    for bad in ["5/17/1990", "1990-05-17", "02/30/1990", "13/01/1990", "05/17/19xx", ""] {
        assert!(parse_display_date(bad).is_err(), "{bad} should not parse");
    }
}

#[test]
fn age_counts_whole_years_by_month_and_day() {
    let today = date(2026, 10, 18);
    assert_eq!(age_on(date(2008, 10, 18), today), 18);
    assert_eq!(age_on(date(2008, 10, 19), today), 17);
    assert_eq!(age_on(date(2008, 11, 1), today), 17);
    assert_eq!(age_on(date(2008, 1, 1), today), 18);
}

#[test]
fn leap_day_birthday_ages_on_march_first() {
    let birth = date(2008, 2, 29);
    assert_eq!(age_on(birth, date(2026, 2, 28)), 17);
    assert_eq!(age_on(birth, date(2026, 3, 1)), 18);
}

#[test]
fn timestamp_is_midnight_utc() {
    let ts = to_timestamp(date(1990, 5, 17)).unwrap();
    assert_eq!(ts.to_string(), "1990-05-17T00:00:00Z");
}
