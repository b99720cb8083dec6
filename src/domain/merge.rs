//! Recursive merge of sparse notification patches
//!
//! Merge rules per field category:
//! - scalars are overwritten when the patch carries a value
//! - nested structs merge recursively, absent targets start from default
//! - contact lists append entries not yet present by (type, value) and then
//!   drop every entry whose value is empty

use super::notification::{
    Address, CodeDisplay, ContactPerson, ContactPoint, FacilityInfo, NotifiedPerson,
    NotifierFacility, PathogenDiagnostic, PathogenNotification, PersonInfo, Specimen,
};

/// Merge a patch of the same type into `self`
pub trait Merge {
    fn merge(&mut self, patch: Self);
}

impl<T: Merge + Default> Merge for Option<T> {
    fn merge(&mut self, patch: Self) {
        if let Some(patch) = patch {
            self.get_or_insert_with(Default::default).merge(patch);
        }
    }
}

/// Last write wins for a leaf field
fn set<T>(target: &mut Option<T>, patch: Option<T>) {
    if patch.is_some() {
        *target = patch;
    }
}

/// Append-with-dedup for contact lists
pub fn merge_contacts(target: &mut Vec<ContactPoint>, patch: Vec<ContactPoint>) {
    for contact in patch {
        if !target.iter().any(|existing| existing.same_as(&contact)) {
            target.push(contact);
        }
    }
    target.retain(|c| !c.value.trim().is_empty());
}

impl Merge for PathogenNotification {
    fn merge(&mut self, patch: Self) {
        self.notifier_facility.merge(patch.notifier_facility);
        self.notified_person.merge(patch.notified_person);
        self.pathogen_diagnostic.merge(patch.pathogen_diagnostic);
        set(
            &mut self.federal_state_code_display,
            patch.federal_state_code_display,
        );
        set(&mut self.pathogen_display, patch.pathogen_display);
    }
}

impl Merge for NotifiedPerson {
    fn merge(&mut self, patch: Self) {
        self.info.merge(patch.info);
        self.residence_address.merge(patch.residence_address);
        self.current_address.merge(patch.current_address);
        set(&mut self.copy_address_check_box, patch.copy_address_check_box);
        merge_contacts(&mut self.contacts, patch.contacts);
    }
}

impl Merge for PersonInfo {
    fn merge(&mut self, patch: Self) {
        set(&mut self.gender, patch.gender);
        set(&mut self.first_name, patch.first_name);
        set(&mut self.last_name, patch.last_name);
        set(&mut self.birth_date, patch.birth_date);
    }
}

impl Merge for Address {
    fn merge(&mut self, patch: Self) {
        set(&mut self.street, patch.street);
        set(&mut self.house_number, patch.house_number);
        set(&mut self.zip, patch.zip);
        set(&mut self.city, patch.city);
        set(&mut self.country, patch.country);
    }
}

impl Merge for NotifierFacility {
    fn merge(&mut self, patch: Self) {
        self.facility_info.merge(patch.facility_info);
        self.address.merge(patch.address);
        self.contact.merge(patch.contact);
        merge_contacts(&mut self.contacts, patch.contacts);
    }
}

impl Merge for FacilityInfo {
    fn merge(&mut self, patch: Self) {
        set(&mut self.institution_name, patch.institution_name);
        set(&mut self.bsnr, patch.bsnr);
    }
}

impl Merge for ContactPerson {
    fn merge(&mut self, patch: Self) {
        set(&mut self.salutation, patch.salutation);
        set(&mut self.prefix, patch.prefix);
        set(&mut self.first_name, patch.first_name);
        set(&mut self.last_name, patch.last_name);
    }
}

impl Merge for PathogenDiagnostic {
    fn merge(&mut self, patch: Self) {
        self.pathogen.merge(patch.pathogen);
        self.specimen.merge(patch.specimen);
    }
}

impl Merge for Specimen {
    fn merge(&mut self, patch: Self) {
        self.material.merge(patch.material);
        self.method.merge(patch.method);
        set(&mut self.extraction_date, patch.extraction_date);
        set(&mut self.received_date, patch.received_date);
    }
}

// A coded value is a leaf: a new code replaces the old one as a whole.
impl Merge for CodeDisplay {
    fn merge(&mut self, patch: Self) {
        *self = patch;
    }
}
