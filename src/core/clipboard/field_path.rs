//! Field paths addressed by clipboard keys
//!
//! A field path is a dotted key such as `P.gender` or `F.zip`. The leading
//! segment names the owner (`P` notified person, `F` notifier facility, `N`
//! facility contact person, `S` specimen); `r`/`c` select the residence or
//! current address of the person.

use std::fmt;

/// A known clipboard key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldPath {
    PersonGender,
    PersonFirstName,
    PersonLastName,
    PersonBirthDate,
    PersonResidenceStreet,
    PersonResidenceHouseNumber,
    PersonResidenceZip,
    PersonResidenceCity,
    PersonResidenceCountry,
    PersonCurrentStreet,
    PersonCurrentHouseNumber,
    PersonCurrentZip,
    PersonCurrentCity,
    PersonCurrentCountry,
    PersonPhone,
    PersonPhone2,
    PersonEmail,
    PersonEmail2,
    FacilityName,
    FacilityBsnr,
    FacilityStreet,
    FacilityHouseNumber,
    FacilityZip,
    FacilityCity,
    FacilityCountry,
    FacilityPhone,
    FacilityPhone2,
    FacilityEmail,
    FacilityEmail2,
    ContactSalutation,
    ContactPrefix,
    ContactFirstName,
    ContactLastName,
    SpecimenMaterial,
    SpecimenMethod,
    SpecimenExtractionDate,
    SpecimenReceivedDate,
}

const KEYS: [(FieldPath, &str); 37] = [
    (FieldPath::PersonGender, "P.gender"),
    (FieldPath::PersonFirstName, "P.firstname"),
    (FieldPath::PersonLastName, "P.lastname"),
    (FieldPath::PersonBirthDate, "P.birthDate"),
    (FieldPath::PersonResidenceStreet, "P.r.street"),
    (FieldPath::PersonResidenceHouseNumber, "P.r.houseNumber"),
    (FieldPath::PersonResidenceZip, "P.r.zip"),
    (FieldPath::PersonResidenceCity, "P.r.city"),
    (FieldPath::PersonResidenceCountry, "P.r.country"),
    (FieldPath::PersonCurrentStreet, "P.c.street"),
    (FieldPath::PersonCurrentHouseNumber, "P.c.houseNumber"),
    (FieldPath::PersonCurrentZip, "P.c.zip"),
    (FieldPath::PersonCurrentCity, "P.c.city"),
    (FieldPath::PersonCurrentCountry, "P.c.country"),
    (FieldPath::PersonPhone, "P.phone"),
    (FieldPath::PersonPhone2, "P.phone2"),
    (FieldPath::PersonEmail, "P.email"),
    (FieldPath::PersonEmail2, "P.email2"),
    (FieldPath::FacilityName, "F.name"),
    (FieldPath::FacilityBsnr, "F.bsnr"),
    (FieldPath::FacilityStreet, "F.street"),
    (FieldPath::FacilityHouseNumber, "F.houseNumber"),
    (FieldPath::FacilityZip, "F.zip"),
    (FieldPath::FacilityCity, "F.city"),
    (FieldPath::FacilityCountry, "F.country"),
    (FieldPath::FacilityPhone, "F.phone"),
    (FieldPath::FacilityPhone2, "F.phone2"),
    (FieldPath::FacilityEmail, "F.email"),
    (FieldPath::FacilityEmail2, "F.email2"),
    (FieldPath::ContactSalutation, "N.salutation"),
    (FieldPath::ContactPrefix, "N.prefix"),
    (FieldPath::ContactFirstName, "N.firstname"),
    (FieldPath::ContactLastName, "N.lastname"),
    (FieldPath::SpecimenMaterial, "S.material"),
    (FieldPath::SpecimenMethod, "S.method"),
    (FieldPath::SpecimenExtractionDate, "S.extractionDate"),
    (FieldPath::SpecimenReceivedDate, "S.receivedDate"),
];

impl FieldPath {
    /// Resolves a clipboard key by exact match
    ///
    /// Returns `None` for keys the portal does not know; callers skip those.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathogen_portal::core::clipboard::FieldPath;
    ///
    /// assert_eq!(FieldPath::parse("P.gender"), Some(FieldPath::PersonGender));
    /// assert_eq!(FieldPath::parse("p.gender"), None);
    /// assert_eq!(FieldPath::parse("X.unknown"), None);
    /// ```
    pub fn parse(key: &str) -> Option<Self> {
        KEYS.iter().find(|(_, k)| *k == key).map(|(path, _)| *path)
    }

    pub fn as_str(&self) -> &'static str {
        KEYS.iter()
            .find(|(path, _)| path == self)
            .map(|(_, key)| *key)
            .unwrap_or_default()
    }

    /// Every known field path in catalogue order
    pub fn all() -> impl Iterator<Item = FieldPath> {
        KEYS.iter().map(|(path, _)| *path)
    }

    /// Paths that identify the notified person and are not carried by
    /// anonymous notifications
    pub fn is_identifying(&self) -> bool {
        matches!(
            self,
            FieldPath::PersonFirstName
                | FieldPath::PersonLastName
                | FieldPath::PersonResidenceStreet
                | FieldPath::PersonResidenceHouseNumber
                | FieldPath::PersonCurrentStreet
                | FieldPath::PersonCurrentHouseNumber
                | FieldPath::PersonPhone
                | FieldPath::PersonPhone2
                | FieldPath::PersonEmail
                | FieldPath::PersonEmail2
        )
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_path_has_a_unique_key() {
        let keys: HashSet<_> = FieldPath::all().map(|p| p.as_str()).collect();
        assert_eq!(keys.len(), KEYS.len());
        assert!(!keys.contains(""));
    }

    #[test]
    fn test_parse_round_trips_catalogue() {
        for path in FieldPath::all() {
            assert_eq!(FieldPath::parse(path.as_str()), Some(path));
        }
    }

    #[test]
    fn test_identifying_paths() {
        assert!(FieldPath::PersonLastName.is_identifying());
        assert!(FieldPath::PersonPhone2.is_identifying());
        assert!(!FieldPath::PersonGender.is_identifying());
        assert!(!FieldPath::PersonResidenceZip.is_identifying());
        assert!(!FieldPath::FacilityPhone.is_identifying());
    }
}
