//! Receipt filename derivation

use crate::core::dates::parse_full_date;
use crate::domain::{NotificationType, PersonInfo};
use chrono::NaiveDateTime;
use deunicode::deunicode;

const TIMESTAMP_FORMAT: &str = "%y%m%d%H%M%S";
const BIRTH_DATE_FORMAT: &str = "%y%m%d";

/// Builds the receipt PDF filename
///
/// Person-bearing notifications are named after the person so that
/// receipts sort by time and are recognizable in a download folder.
/// Names are transliterated to ASCII and joined as `<last>, <first>`; an
/// empty name is left out together with its separator. The birth date suffix
/// is left out when the birth date is missing or unparseable.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use pathogen_portal::core::submission::receipt_file_name;
/// use pathogen_portal::domain::{NotificationType, PersonInfo};
///
/// let at = NaiveDate::from_ymd_opt(2024, 3, 1)
///     .unwrap()
///     .and_hms_opt(9, 5, 7)
///     .unwrap();
/// let person = PersonInfo {
///     first_name: Some("Jörg".to_string()),
///     last_name: Some("Meier".to_string()),
///     birth_date: Some("05.11.1998".to_string()),
///     ..Default::default()
/// };
///
/// assert_eq!(
///     receipt_file_name(Some(&person), NotificationType::Nominal, at),
///     "240301090507 Meier, Jorg 981105.pdf"
/// );
/// assert_eq!(
///     receipt_file_name(Some(&person), NotificationType::NonNominal, at),
///     "240301090507.pdf"
/// );
/// ```
pub fn receipt_file_name(
    person: Option<&PersonInfo>,
    notification_type: NotificationType,
    at: NaiveDateTime,
) -> String {
    let timestamp = at.format(TIMESTAMP_FORMAT).to_string();

    let person = match person {
        Some(person) if notification_type.is_person_bearing() => person,
        _ => return format!("{timestamp}.pdf"),
    };

    let names: Vec<String> = [&person.last_name, &person.first_name]
        .into_iter()
        .map(|name| file_safe(name.as_deref()))
        .filter(|name| !name.is_empty())
        .collect();
    if names.is_empty() {
        return format!("{timestamp}.pdf");
    }

    let birth_suffix = person
        .birth_date
        .as_deref()
        .and_then(parse_full_date)
        .map(|date| format!(" {}", date.format(BIRTH_DATE_FORMAT)))
        .unwrap_or_default();

    format!("{timestamp} {}{birth_suffix}.pdf", names.join(", "))
}

/// ASCII form of a name without characters that are illegal in filenames
fn file_safe(name: Option<&str>) -> String {
    deunicode(name.unwrap_or_default().trim())
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
            c if c.is_control() => '-',
            c => c,
        })
        .collect()
}
