//! Date reformatting shared by the clipboard rules, the payload normalizer
//! and the receipt filename
//!
//! The form works with German dates (`dd.mm.yyyy`, or `mm.yyyy` for anonymous
//! records); the gateway expects ISO dates.

use chrono::NaiveDate;

const GERMAN_DATE: &str = "%d.%m.%Y";
const ISO_DATE: &str = "%Y-%m-%d";

/// Splits `dd.mm.yyyy` into its day, month and year segments by shape only
fn day_segment_shape(value: &str) -> Option<(&str, &str, &str)> {
    let mut parts = value.split('.');
    let (day, month, year) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    let digits = |s: &str, len: std::ops::RangeInclusive<usize>| {
        len.contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
    };
    (digits(day, 1..=2) && digits(month, 1..=2) && digits(year, 4..=4))
        .then_some((day, month, year))
}

/// Reduces `dd.mm.yyyy` to `mm.yyyy`
///
/// Anything without a day segment, including an existing `mm.yyyy`, is
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use pathogen_portal::core::dates::to_month_year;
///
/// assert_eq!(to_month_year("05.11.1998"), "11.1998");
/// assert_eq!(to_month_year("11.1998"), "11.1998");
/// ```
pub fn to_month_year(value: &str) -> String {
    match day_segment_shape(value.trim()) {
        Some((_, month, year)) => format!("{month}.{year}"),
        None => value.to_string(),
    }
}

/// Converts a form date to the ISO form the gateway expects
///
/// `dd.mm.yyyy` becomes `yyyy-mm-dd` and `mm.yyyy` becomes `yyyy-mm`. Values
/// that are not valid calendar dates in either form are passed through.
pub fn to_iso_date(value: &str) -> String {
    let trimmed = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, GERMAN_DATE) {
        return date.format(ISO_DATE).to_string();
    }

    if let Ok(date) = NaiveDate::parse_from_str(&format!("01.{trimmed}"), GERMAN_DATE) {
        return date.format("%Y-%m").to_string();
    }

    value.to_string()
}

/// Parses a full birth date given either as `dd.mm.yyyy` or `yyyy-mm-dd`
pub fn parse_full_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    NaiveDate::parse_from_str(trimmed, GERMAN_DATE)
        .or_else(|_| NaiveDate::parse_from_str(trimmed, ISO_DATE))
        .ok()
}
