//! Integration tests for clipboard import

mod common;

use common::{DialogEvent, RecordingDialog};
use pathogen_portal::core::clipboard::{ClipboardImporter, FillContext, ValueSetCategory};
use pathogen_portal::domain::{
    ClipboardError, CodeDisplay, ContactPoint, ContactType, Gender, NotificationType,
    PathogenNotification, Salutation,
};
use std::sync::Arc;

const PRIMARY_SYSTEM_CLIPBOARD: &str = "URL https://portal.example.org/import?\
P.gender=FEMALE&P.firstname=Erika&P.lastname=Mustermann&P.birthDate=12.08.1964\
&P.r.street=Heidestra%C3%9Fe&P.r.houseNumber=17&P.r.zip=51147&P.r.city=K%C3%B6ln&P.r.country=DE\
&P.phone=0221%20123456&P.email=erika%40example.org\
&F.name=Labor%20Nord&F.bsnr=123456789&F.zip=20095&F.city=Hamburg&F.phone=040%2055555\
&N.salutation=Mrs&N.prefix=Dr.&N.firstname=Anna&N.lastname=Schmidt\
&S.material=119361006&S.extractionDate=01.03.2024";

fn context() -> FillContext {
    FillContext::new("invp").with_value_set(
        ValueSetCategory::Materials,
        vec![CodeDisplay {
            code: "119361006".to_string(),
            display: Some("Plasma specimen".to_string()),
            system: Some("http://snomed.info/sct".to_string()),
        }],
    )
}

fn importer(notification_type: NotificationType) -> (Arc<RecordingDialog>, ClipboardImporter) {
    let dialog = Arc::new(RecordingDialog::default());
    let importer = ClipboardImporter::new(dialog.clone(), notification_type);
    (dialog, importer)
}

#[tokio::test]
async fn test_nominal_import_fills_all_sections() {
    let (dialog, importer) = importer(NotificationType::Nominal);

    let mut model = PathogenNotification::default();
    let result = importer
        .import(PRIMARY_SYSTEM_CLIPBOARD, &mut model, &context())
        .await
        .unwrap();

    assert!(result.errors.is_empty(), "{:?}", result.errors);
    assert!(result.ignored.is_empty());
    assert!(dialog.events().is_empty());

    let info = model.person_info().unwrap();
    assert_eq!(info.gender, Some(Gender::Female));
    assert_eq!(info.last_name.as_deref(), Some("Mustermann"));
    assert_eq!(info.birth_date.as_deref(), Some("12.08.1964"));

    let person = model.notified_person.as_ref().unwrap();
    let residence = person.residence_address.as_ref().unwrap();
    assert_eq!(residence.street.as_deref(), Some("Heidestraße"));
    assert_eq!(residence.zip.as_deref(), Some("51147"));
    assert_eq!(residence.city.as_deref(), Some("Köln"));
    assert_eq!(
        person.contacts,
        vec![
            ContactPoint::new(ContactType::Phone, "0221 123456"),
            ContactPoint::new(ContactType::Email, "erika@example.org"),
        ]
    );

    let facility = model.notifier_facility.as_ref().unwrap();
    assert_eq!(
        facility.facility_info.as_ref().unwrap().bsnr.as_deref(),
        Some("123456789")
    );
    assert_eq!(
        facility.address.as_ref().unwrap().zip.as_deref(),
        Some("20095")
    );
    let contact = facility.contact.as_ref().unwrap();
    assert_eq!(contact.salutation, Some(Salutation::Mrs));
    assert_eq!(contact.prefix.as_deref(), Some("Dr."));

    let specimen = model
        .pathogen_diagnostic
        .as_ref()
        .unwrap()
        .specimen
        .as_ref()
        .unwrap();
    assert_eq!(
        specimen.material.as_ref().unwrap().display.as_deref(),
        Some("Plasma specimen")
    );
    assert_eq!(specimen.extraction_date.as_deref(), Some("01.03.2024"));
}

#[tokio::test]
async fn test_non_nominal_import_anonymizes_person() {
    let (_dialog, importer) = importer(NotificationType::NonNominal);

    let mut model = PathogenNotification::default();
    let result = importer
        .import(PRIMARY_SYSTEM_CLIPBOARD, &mut model, &context())
        .await
        .unwrap();

    assert!(result.errors.is_empty());
    for key in ["P.firstname", "P.lastname", "P.r.street", "P.r.houseNumber", "P.phone", "P.email"] {
        assert!(result.ignored.iter().any(|k| k == key), "{key} should be ignored");
    }

    let info = model.person_info().unwrap();
    assert_eq!(info.gender, Some(Gender::Female));
    assert!(info.first_name.is_none());
    assert!(info.last_name.is_none());
    assert_eq!(info.birth_date.as_deref(), Some("08.1964"));

    let person = model.notified_person.as_ref().unwrap();
    let residence = person.residence_address.as_ref().unwrap();
    assert_eq!(residence.zip.as_deref(), Some("511"));
    assert!(residence.street.is_none());
    assert_eq!(residence.city.as_deref(), Some("Köln"));
    assert!(person.contacts.is_empty());

    // Facility data is not about the notified person and stays verbatim
    let facility = model.notifier_facility.as_ref().unwrap();
    assert_eq!(
        facility.address.as_ref().unwrap().zip.as_deref(),
        Some("20095")
    );
}

#[tokio::test]
async fn test_follow_up_uses_anonymous_profile() {
    let (_dialog, importer) = importer(NotificationType::FollowUp);

    let mut model = PathogenNotification::default();
    let result = importer
        .import(
            "URL ?P.lastname=Meier&P.birthDate=05.11.1998",
            &mut model,
            &FillContext::default(),
        )
        .await
        .unwrap();

    assert_eq!(result.ignored, vec!["P.lastname"]);
    assert_eq!(
        model.person_info().unwrap().birth_date.as_deref(),
        Some("11.1998")
    );
}

#[tokio::test]
async fn test_invalid_clipboard_shows_dialog_and_keeps_model() {
    let (dialog, importer) = importer(NotificationType::Nominal);

    let mut model = PathogenNotification::default();
    model.person_info_mut().last_name = Some("Meier".to_string());
    let before = model.clone();

    let err = importer
        .import("P.lastname=Schulz", &mut model, &FillContext::default())
        .await
        .unwrap_err();

    assert_eq!(err, ClipboardError::MissingPrefix);
    assert_eq!(
        err.to_string(),
        "invalid clipboard: it does not start with \"URL \""
    );
    assert_eq!(dialog.events(), vec![DialogEvent::ClipboardError]);
    assert_eq!(model, before);
}

#[tokio::test]
async fn test_import_fills_the_callers_model() {
    let (_dialog, importer) = importer(NotificationType::Nominal);

    let mut model = PathogenNotification::default();
    model.person_info_mut().last_name = Some("Meier".to_string());

    let result = importer
        .import("URL ?P.firstname=Max", &mut model, &FillContext::default())
        .await
        .unwrap();

    assert_eq!(result.applied, 1);
    let info = model.person_info().unwrap();
    assert_eq!(info.last_name.as_deref(), Some("Meier"));
    assert_eq!(info.first_name.as_deref(), Some("Max"));
}

#[tokio::test]
async fn test_rule_errors_are_collected_in_order() {
    let (dialog, importer) = importer(NotificationType::Nominal);

    let mut model = PathogenNotification::default();
    let result = importer
        .import(
            "URL ?P.gender=X&P.firstname=Max&N.salutation=Sir&S.method=123&S.material=999",
            &mut model,
            &context(),
        )
        .await
        .unwrap();

    assert_eq!(
        result.errors,
        vec![
            "Error processing rule for key P.gender: Error: Unknown value 'X'",
            "Error processing rule for key N.salutation: Error: Unknown value 'Sir'",
            "Error processing rule for key S.method: Error: invp_no-valueset: methods",
            "Error processing rule for key S.material: Error: Unknown value '999'",
        ]
    );
    assert_eq!(
        model.person_info().unwrap().first_name.as_deref(),
        Some("Max")
    );
    assert!(model.pathogen_diagnostic.is_none());
    assert!(dialog.events().is_empty());
}

#[tokio::test]
async fn test_empty_query_yields_empty_result() {
    let (_dialog, importer) = importer(NotificationType::Nominal);

    let mut model = PathogenNotification::default();
    let result = importer
        .import(
            "URL https://portal.example.org/import",
            &mut model,
            &FillContext::default(),
        )
        .await
        .unwrap();

    assert_eq!(model, PathogenNotification::default());
    assert!(result.errors.is_empty());
    assert_eq!(result.applied, 0);
}
