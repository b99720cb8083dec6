//! Pathogen notification model
//!
//! The same type serves as the form model, as the sparse patch produced by a
//! clipboard rule, and as the wire payload once normalized. Every field is
//! optional so a patch only carries the slots it sets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Notification type selected in the portal
///
/// Determines the gateway endpoint, the clipboard rule profile and whether a
/// receipt filename carries the person's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NotificationType {
    /// Nominal notification (§ 7.1 IfSG), carries the notified person
    #[serde(rename = "NominalNotification7_1")]
    Nominal,

    /// Non-nominal notification (§ 7.3 IfSG), anonymous person
    #[serde(rename = "NonNominalNotification7_3")]
    NonNominal,

    /// Follow-up to an earlier nominal notification, anonymous
    #[serde(rename = "FollowUpNotification7_1")]
    FollowUp,
}

impl NotificationType {
    /// Canonical name used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationType::Nominal => "NominalNotification7_1",
            NotificationType::NonNominal => "NonNominalNotification7_3",
            NotificationType::FollowUp => "FollowUpNotification7_1",
        }
    }

    /// Whether the notification identifies the notified person by name
    pub fn is_person_bearing(&self) -> bool {
        matches!(self, NotificationType::Nominal)
    }
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NotificationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nominal" | "nominalnotification7_1" | "7.1" => Ok(Self::Nominal),
            "non-nominal" | "nonnominal" | "nonnominalnotification7_3" | "7.3" => {
                Ok(Self::NonNominal)
            }
            "follow-up" | "followup" | "followupnotification7_1" => Ok(Self::FollowUp),
            _ => Err(format!(
                "Invalid notification type: {s}. Expected 'nominal', 'non-nominal' or 'follow-up'"
            )),
        }
    }
}

/// Administrative gender of the notified person
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    Male,
    Female,
    Diverse,
    Otherx,
    Unknown,
}

impl Gender {
    /// All accepted values, in the order the portal lists them
    pub const ALL: [Gender; 5] = [
        Gender::Male,
        Gender::Female,
        Gender::Diverse,
        Gender::Otherx,
        Gender::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
            Gender::Diverse => "DIVERSE",
            Gender::Otherx => "OTHERX",
            Gender::Unknown => "UNKNOWN",
        }
    }

    /// Looks up a gender by its exact wire value
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.as_str() == code)
    }
}

/// Salutation of the facility contact person
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Salutation {
    Mr,
    Mrs,
    Diverse,
}

impl Salutation {
    pub const ALL: [Salutation; 3] = [Salutation::Mr, Salutation::Mrs, Salutation::Diverse];

    pub fn as_str(&self) -> &'static str {
        match self {
            Salutation::Mr => "Mr",
            Salutation::Mrs => "Mrs",
            Salutation::Diverse => "Diverse",
        }
    }

    /// Looks up a salutation by its exact wire value
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == code)
    }
}

/// Kind of a contact entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactType {
    Phone,
    Email,
}

/// A phone number or email address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPoint {
    pub contact_type: ContactType,
    pub value: String,
}

impl ContactPoint {
    pub fn new(contact_type: ContactType, value: impl Into<String>) -> Self {
        Self {
            contact_type,
            value: value.into(),
        }
    }

    /// Two entries are duplicates when type and value match
    pub fn same_as(&self, other: &ContactPoint) -> bool {
        self.contact_type == other.contact_type && self.value == other.value
    }
}

/// Coded value from a pathogen-specific value set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CodeDisplay {
    pub code: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
}

/// Postal address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub house_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Identity of the notified person
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PersonInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// `dd.mm.yyyy` in the form, `mm.yyyy` for anonymous records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
}

/// The person the notification is about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NotifiedPerson {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<PersonInfo>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub residence_address: Option<Address>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_address: Option<Address>,

    /// UI-only: "current address equals residence address" toggle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copy_address_check_box: Option<bool>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contacts: Vec<ContactPoint>,
}

/// Institution data of the notifying facility
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FacilityInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution_name: Option<String>,

    /// Site number (Betriebsstättennummer)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bsnr: Option<String>,
}

/// Contact person at the notifying facility
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ContactPerson {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salutation: Option<Salutation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// The notifying facility (lab or practice)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NotifierFacility {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facility_info: Option<FacilityInfo>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<ContactPerson>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contacts: Vec<ContactPoint>,
}

/// Specimen the diagnosis was made on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Specimen {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<CodeDisplay>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<CodeDisplay>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extraction_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received_date: Option<String>,
}

/// Pathogen and specimen data of the notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PathogenDiagnostic {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pathogen: Option<CodeDisplay>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specimen: Option<Specimen>,
}

/// A pathogen notification
///
/// # Examples
///
/// ```
/// use pathogen_portal::domain::notification::PathogenNotification;
///
/// let mut notification = PathogenNotification::default();
/// notification.person_info_mut().last_name = Some("Meier".to_string());
/// assert_eq!(
///     notification.person_info().and_then(|p| p.last_name.as_deref()),
///     Some("Meier")
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PathogenNotification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notifier_facility: Option<NotifierFacility>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notified_person: Option<NotifiedPerson>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pathogen_diagnostic: Option<PathogenDiagnostic>,

    /// UI-only: display label of the selected federal state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub federal_state_code_display: Option<String>,

    /// UI-only: display label of the selected pathogen
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pathogen_display: Option<String>,
}

impl PathogenNotification {
    pub fn person_info(&self) -> Option<&PersonInfo> {
        self.notified_person.as_ref()?.info.as_ref()
    }

    pub fn person_contacts(&self) -> &[ContactPoint] {
        self.notified_person
            .as_ref()
            .map(|p| p.contacts.as_slice())
            .unwrap_or(&[])
    }

    pub fn facility_contacts(&self) -> &[ContactPoint] {
        self.notifier_facility
            .as_ref()
            .map(|f| f.contacts.as_slice())
            .unwrap_or(&[])
    }

    pub fn person_mut(&mut self) -> &mut NotifiedPerson {
        self.notified_person.get_or_insert_with(Default::default)
    }

    pub fn person_info_mut(&mut self) -> &mut PersonInfo {
        self.person_mut().info.get_or_insert_with(Default::default)
    }

    pub fn facility_mut(&mut self) -> &mut NotifierFacility {
        self.notifier_facility.get_or_insert_with(Default::default)
    }

    pub fn facility_info_mut(&mut self) -> &mut FacilityInfo {
        self.facility_mut()
            .facility_info
            .get_or_insert_with(Default::default)
    }

    pub fn contact_person_mut(&mut self) -> &mut ContactPerson {
        self.facility_mut().contact.get_or_insert_with(Default::default)
    }

    pub fn specimen_mut(&mut self) -> &mut Specimen {
        self.pathogen_diagnostic
            .get_or_insert_with(Default::default)
            .specimen
            .get_or_insert_with(Default::default)
    }
}
