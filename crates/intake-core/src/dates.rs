//! Date handling for the `MM/DD/YYYY` display format the questionnaires use.

use jiff::civil::Date;
use jiff::tz::TimeZone;
use jiff::Timestamp;

use crate::error::CoreError;

/// Parse a `MM/DD/YYYY` string into a calendar date.
///
/// The shape is checked strictly (two-digit month and day, four-digit year)
/// before the calendar check, so `2/3/1990` and `02/30/1990` both fail.
pub fn parse_display_date(value: &str) -> Result<Date, CoreError> {
    let invalid = || CoreError::InvalidDate {
        value: value.to_string(),
    };

    let bytes = value.as_bytes();
    if bytes.len() != 10 || bytes[2] != b'/' || bytes[5] != b'/' {
        return Err(invalid());
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 2 || i == 5 || b.is_ascii_digit());
    if !digits_ok {
        return Err(invalid());
    }

    let month: i8 = value[0..2].parse().map_err(|_| invalid())?;
    let day: i8 = value[3..5].parse().map_err(|_| invalid())?;
    let year: i16 = value[6..10].parse().map_err(|_| invalid())?;

    Date::new(year, month, day).map_err(|_| invalid())
}

/// Age in whole years on `today`.
///
/// One year is subtracted when today's month/day falls before the birthday,
/// so someone born on Feb 29 turns a year older on Mar 1 in common years.
pub fn age_on(birth: Date, today: Date) -> i16 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

/// Midnight UTC of the given date, the canonical stored form of a birth date.
pub fn to_timestamp(date: Date) -> Result<Timestamp, CoreError> {
    Ok(date.to_zoned(TimeZone::UTC)?.timestamp())
}

/// Today's date in the system time zone.
pub fn today() -> Date {
    jiff::Zoned::now().date()
}
