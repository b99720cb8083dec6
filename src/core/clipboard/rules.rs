//! Clipboard rule table
//!
//! Each known [`FieldPath`] maps a raw clipboard value to a sparse patch of
//! the notification model. Rules are pure: they read the value, the model
//! built so far and the [`FillContext`], and return a new patch or a
//! [`RuleError`].

use super::field_path::FieldPath;
use crate::core::dates;
use crate::domain::{
    Address, CodeDisplay, ContactPoint, ContactType, Gender, NotificationType,
    PathogenNotification, RuleError, Salutation,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Length anonymous postal codes are cut to
const ANONYMOUS_ZIP_LENGTH: usize = 3;

/// Category of a pathogen-specific value set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSetCategory {
    Materials,
    Methods,
}

impl ValueSetCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueSetCategory::Materials => "materials",
            ValueSetCategory::Methods => "methods",
        }
    }
}

impl fmt::Display for ValueSetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller-supplied data the rules may consult
///
/// # Examples
///
/// ```
/// use pathogen_portal::core::clipboard::{FillContext, ValueSetCategory};
/// use pathogen_portal::domain::CodeDisplay;
///
/// let ctx = FillContext::new("invp").with_value_set(
///     ValueSetCategory::Materials,
///     vec![CodeDisplay { code: "119361006".to_string(), ..Default::default() }],
/// );
/// assert!(ctx.value_set(ValueSetCategory::Materials).is_some());
/// assert!(ctx.value_set(ValueSetCategory::Methods).is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct FillContext {
    pathogen_code: String,
    value_sets: HashMap<ValueSetCategory, Vec<CodeDisplay>>,
}

impl FillContext {
    /// Creates a context for the pathogen the form is currently set to
    pub fn new(pathogen_code: impl Into<String>) -> Self {
        Self {
            pathogen_code: pathogen_code.into(),
            value_sets: HashMap::new(),
        }
    }

    pub fn with_value_set(mut self, category: ValueSetCategory, codes: Vec<CodeDisplay>) -> Self {
        self.value_sets.insert(category, codes);
        self
    }

    pub fn pathogen_code(&self) -> &str {
        &self.pathogen_code
    }

    pub fn value_set(&self, category: ValueSetCategory) -> Option<&[CodeDisplay]> {
        self.value_sets.get(&category).map(Vec::as_slice)
    }
}

/// Which field paths are active and how person data is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleProfile {
    /// All paths; person data is copied verbatim
    Nominal,
    /// Identifying person paths are inactive; birth date and postal codes
    /// are coarsened
    Anonymous,
}

/// Rule table for one notification type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleTable {
    profile: RuleProfile,
}

impl RuleTable {
    pub fn new(profile: RuleProfile) -> Self {
        Self { profile }
    }

    /// Selects the profile a notification type imports with
    pub fn for_notification_type(notification_type: NotificationType) -> Self {
        if notification_type.is_person_bearing() {
            Self::new(RuleProfile::Nominal)
        } else {
            Self::new(RuleProfile::Anonymous)
        }
    }

    pub fn profile(&self) -> RuleProfile {
        self.profile
    }

    /// Finds the rule for a clipboard key
    ///
    /// Unknown keys and paths inactive in this profile yield `None`.
    pub fn lookup(&self, key: &str) -> Option<FieldPath> {
        let path = FieldPath::parse(key)?;
        match self.profile {
            RuleProfile::Nominal => Some(path),
            RuleProfile::Anonymous => (!path.is_identifying()).then_some(path),
        }
    }

    /// Applies the rule for `path` to a raw value
    ///
    /// `model` is the model built so far; it is only read.
    pub fn apply(
        &self,
        path: FieldPath,
        value: &str,
        model: &PathogenNotification,
        ctx: &FillContext,
    ) -> Result<PathogenNotification, RuleError> {
        let mut patch = PathogenNotification::default();
        let text = || Some(value.to_string());

        match path {
            FieldPath::PersonGender => patch.person_info_mut().gender = Some(parse_gender(value)?),
            FieldPath::PersonFirstName => patch.person_info_mut().first_name = text(),
            FieldPath::PersonLastName => patch.person_info_mut().last_name = text(),
            FieldPath::PersonBirthDate => {
                patch.person_info_mut().birth_date = Some(self.birth_date(value))
            }

            FieldPath::PersonResidenceStreet => residence(&mut patch).street = text(),
            FieldPath::PersonResidenceHouseNumber => residence(&mut patch).house_number = text(),
            FieldPath::PersonResidenceZip => residence(&mut patch).zip = Some(self.zip(value)),
            FieldPath::PersonResidenceCity => residence(&mut patch).city = text(),
            FieldPath::PersonResidenceCountry => residence(&mut patch).country = text(),

            FieldPath::PersonCurrentStreet => current(&mut patch).street = text(),
            FieldPath::PersonCurrentHouseNumber => current(&mut patch).house_number = text(),
            FieldPath::PersonCurrentZip => current(&mut patch).zip = Some(self.zip(value)),
            FieldPath::PersonCurrentCity => current(&mut patch).city = text(),
            FieldPath::PersonCurrentCountry => current(&mut patch).country = text(),

            FieldPath::PersonPhone | FieldPath::PersonPhone2 => {
                patch.person_mut().contacts =
                    add_contact(model.person_contacts(), ContactType::Phone, value)
            }
            FieldPath::PersonEmail | FieldPath::PersonEmail2 => {
                patch.person_mut().contacts =
                    add_contact(model.person_contacts(), ContactType::Email, value)
            }

            FieldPath::FacilityName => patch.facility_info_mut().institution_name = text(),
            FieldPath::FacilityBsnr => patch.facility_info_mut().bsnr = text(),
            FieldPath::FacilityStreet => facility_address(&mut patch).street = text(),
            FieldPath::FacilityHouseNumber => facility_address(&mut patch).house_number = text(),
            FieldPath::FacilityZip => facility_address(&mut patch).zip = text(),
            FieldPath::FacilityCity => facility_address(&mut patch).city = text(),
            FieldPath::FacilityCountry => facility_address(&mut patch).country = text(),
            FieldPath::FacilityPhone | FieldPath::FacilityPhone2 => {
                patch.facility_mut().contacts =
                    add_contact(model.facility_contacts(), ContactType::Phone, value)
            }
            FieldPath::FacilityEmail | FieldPath::FacilityEmail2 => {
                patch.facility_mut().contacts =
                    add_contact(model.facility_contacts(), ContactType::Email, value)
            }

            FieldPath::ContactSalutation => {
                patch.contact_person_mut().salutation = Some(parse_salutation(value)?)
            }
            FieldPath::ContactPrefix => patch.contact_person_mut().prefix = text(),
            FieldPath::ContactFirstName => patch.contact_person_mut().first_name = text(),
            FieldPath::ContactLastName => patch.contact_person_mut().last_name = text(),

            FieldPath::SpecimenMaterial => {
                patch.specimen_mut().material =
                    Some(augment_code(ctx, ValueSetCategory::Materials, value)?)
            }
            FieldPath::SpecimenMethod => {
                patch.specimen_mut().method =
                    Some(augment_code(ctx, ValueSetCategory::Methods, value)?)
            }
            FieldPath::SpecimenExtractionDate => patch.specimen_mut().extraction_date = text(),
            FieldPath::SpecimenReceivedDate => patch.specimen_mut().received_date = text(),
        }

        Ok(patch)
    }

    fn birth_date(&self, value: &str) -> String {
        match self.profile {
            RuleProfile::Nominal => value.to_string(),
            RuleProfile::Anonymous => dates::to_month_year(value),
        }
    }

    fn zip(&self, value: &str) -> String {
        match self.profile {
            RuleProfile::Nominal => value.to_string(),
            RuleProfile::Anonymous => truncate_zip(value),
        }
    }
}

fn residence(patch: &mut PathogenNotification) -> &mut Address {
    patch
        .person_mut()
        .residence_address
        .get_or_insert_with(Default::default)
}

fn current(patch: &mut PathogenNotification) -> &mut Address {
    patch
        .person_mut()
        .current_address
        .get_or_insert_with(Default::default)
}

fn facility_address(patch: &mut PathogenNotification) -> &mut Address {
    patch.facility_mut().address.get_or_insert_with(Default::default)
}

pub fn parse_gender(value: &str) -> Result<Gender, RuleError> {
    Gender::from_code(value).ok_or_else(|| RuleError::UnknownValue(value.to_string()))
}

pub fn parse_salutation(value: &str) -> Result<Salutation, RuleError> {
    Salutation::from_code(value).ok_or_else(|| RuleError::UnknownValue(value.to_string()))
}

/// Keeps the first three characters of a postal code
///
/// # Examples
///
/// ```
/// use pathogen_portal::core::clipboard::rules::truncate_zip;
///
/// assert_eq!(truncate_zip("10115"), "101");
/// assert_eq!(truncate_zip("101"), "101");
/// assert_eq!(truncate_zip("1"), "1");
/// ```
pub fn truncate_zip(value: &str) -> String {
    value.chars().take(ANONYMOUS_ZIP_LENGTH).collect()
}

/// Contact entries a phone/email rule contributes
///
/// Empty when the value is blank or already present with the same type.
fn add_contact(existing: &[ContactPoint], contact_type: ContactType, value: &str) -> Vec<ContactPoint> {
    let candidate = ContactPoint::new(contact_type, value.trim());
    if candidate.value.is_empty() || existing.iter().any(|c| c.same_as(&candidate)) {
        Vec::new()
    } else {
        vec![candidate]
    }
}

/// Resolves a raw code against the caller's value set for `category`
fn augment_code(
    ctx: &FillContext,
    category: ValueSetCategory,
    code: &str,
) -> Result<CodeDisplay, RuleError> {
    let value_set = ctx.value_set(category).ok_or_else(|| RuleError::NoValueSet {
        pathogen_code: ctx.pathogen_code().to_string(),
        category: category.to_string(),
    })?;

    value_set
        .iter()
        .find(|entry| entry.code == code)
        .cloned()
        .ok_or_else(|| RuleError::UnknownValue(code.to_string()))
}
