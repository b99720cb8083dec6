//! Payload normalization
//!
//! The form model carries German dates and a few UI-only fields. Before a
//! notification leaves the portal the dates are converted to ISO form, the
//! UI-only fields are stripped and empty contacts are dropped.

use crate::core::dates::to_iso_date;
use crate::domain::{ContactPoint, PathogenNotification};

/// Returns the wire form of a notification
///
/// # Examples
///
/// ```
/// use pathogen_portal::core::submission::normalize_payload;
/// use pathogen_portal::domain::PathogenNotification;
///
/// let mut model = PathogenNotification::default();
/// model.person_info_mut().birth_date = Some("05.11.1998".to_string());
/// model.pathogen_display = Some("Influenza".to_string());
///
/// let payload = normalize_payload(model);
/// assert_eq!(payload.person_info().unwrap().birth_date.as_deref(), Some("1998-11-05"));
/// assert!(payload.pathogen_display.is_none());
/// ```
pub fn normalize_payload(mut notification: PathogenNotification) -> PathogenNotification {
    notification.federal_state_code_display = None;
    notification.pathogen_display = None;

    if let Some(person) = notification.notified_person.as_mut() {
        person.copy_address_check_box = None;
        if let Some(info) = person.info.as_mut() {
            reformat_date(&mut info.birth_date);
        }
        drop_blank_contacts(&mut person.contacts);
    }

    if let Some(facility) = notification.notifier_facility.as_mut() {
        drop_blank_contacts(&mut facility.contacts);
    }

    if let Some(specimen) = notification
        .pathogen_diagnostic
        .as_mut()
        .and_then(|diagnostic| diagnostic.specimen.as_mut())
    {
        reformat_date(&mut specimen.extraction_date);
        reformat_date(&mut specimen.received_date);
    }

    notification
}

fn reformat_date(date: &mut Option<String>) {
    *date = date
        .take()
        .filter(|value| !value.trim().is_empty())
        .map(|value| to_iso_date(&value));
}

fn drop_blank_contacts(contacts: &mut Vec<ContactPoint>) {
    contacts.retain(|contact| !contact.value.trim().is_empty());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ContactType;

    #[test]
    fn test_dates_are_converted() {
        let mut model = PathogenNotification::default();
        model.person_info_mut().birth_date = Some("11.1998".to_string());
        model.specimen_mut().extraction_date = Some("01.03.2024".to_string());
        model.specimen_mut().received_date = Some("2024-03-02".to_string());

        let payload = normalize_payload(model);
        assert_eq!(
            payload.person_info().unwrap().birth_date.as_deref(),
            Some("1998-11")
        );
        let specimen = payload
            .pathogen_diagnostic
            .unwrap()
            .specimen
            .unwrap();
        assert_eq!(specimen.extraction_date.as_deref(), Some("2024-03-01"));
        assert_eq!(specimen.received_date.as_deref(), Some("2024-03-02"));
    }

    #[test]
    fn test_blank_birth_date_is_removed() {
        let mut model = PathogenNotification::default();
        model.person_info_mut().birth_date = Some("  ".to_string());

        let payload = normalize_payload(model);
        assert!(payload.person_info().unwrap().birth_date.is_none());
    }

    #[test]
    fn test_ui_fields_are_not_serialized() {
        let mut model = PathogenNotification::default();
        model.federal_state_code_display = Some("Berlin".to_string());
        model.pathogen_display = Some("Influenza".to_string());
        model.person_mut().copy_address_check_box = Some(true);

        let json = serde_json::to_string(&normalize_payload(model)).unwrap();
        assert!(!json.contains("federalStateCodeDisplay"));
        assert!(!json.contains("pathogenDisplay"));
        assert!(!json.contains("copyAddressCheckBox"));
    }

    #[test]
    fn test_empty_contacts_are_dropped() {
        let mut model = PathogenNotification::default();
        model.person_mut().contacts = vec![
            ContactPoint::new(ContactType::Phone, ""),
            ContactPoint::new(ContactType::Email, "max@example.org"),
        ];
        model.facility_mut().contacts = vec![ContactPoint::new(ContactType::Phone, " ")];

        let payload = normalize_payload(model);
        assert_eq!(
            payload.person_contacts(),
            &[ContactPoint::new(ContactType::Email, "max@example.org")]
        );
        assert!(payload.facility_contacts().is_empty());
    }
}
