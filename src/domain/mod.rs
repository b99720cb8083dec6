//! Domain models and types for the portal core.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **The notification model** ([`PathogenNotification`]), used as form
//!   model, sparse patch and wire payload
//! - **Patch merging** ([`Merge`]) with per-field-category semantics
//! - **Error types** ([`PortalError`], [`RuleError`], [`ClipboardError`],
//!   [`TransportError`])
//! - **Result type alias** ([`Result`])
//!
//! # Patches
//!
//! Every field of the model is optional, so a patch is simply a sparse
//! notification:
//!
//! ```rust
//! use pathogen_portal::domain::{Gender, Merge, PathogenNotification};
//!
//! let mut model = PathogenNotification::default();
//! model.person_info_mut().last_name = Some("Meier".to_string());
//!
//! let mut patch = PathogenNotification::default();
//! patch.person_info_mut().gender = Some(Gender::Female);
//!
//! model.merge(patch);
//! let info = model.person_info().unwrap();
//! assert_eq!(info.last_name.as_deref(), Some("Meier"));
//! assert_eq!(info.gender, Some(Gender::Female));
//! ```

pub mod errors;
pub mod merge;
pub mod notification;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::{
    ClipboardError, ErrorBody, PortalError, RuleError, TransportError, ValidationMessage,
};
pub use merge::Merge;
pub use notification::{
    Address, CodeDisplay, ContactPerson, ContactPoint, ContactType, FacilityInfo, Gender,
    NotificationType, NotifiedPerson, NotifierFacility, PathogenDiagnostic, PathogenNotification,
    PersonInfo, Salutation, Specimen,
};
pub use result::Result;
