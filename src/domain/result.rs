//! Result type alias for the portal core

use super::errors::PortalError;

/// Result type alias for portal operations
///
/// # Examples
///
/// ```
/// use pathogen_portal::domain::result::Result;
/// use pathogen_portal::domain::errors::PortalError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(PortalError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, PortalError>;
