//! Clipboard text tokenizer
//!
//! Primary clinical systems put notification data on the clipboard as
//! `URL <url>`, where the query string of `<url>` carries the field paths:
//!
//! ```text
//! URL https://portal.example.org/import?P.lastname=Meier&P.firstname=Max&P.gender=MALE
//! ```
//!
//! Values are form-encoded (`%20` or `+` for a space). A remainder that is not
//! an absolute URL is read as a bare query string.

use crate::domain::ClipboardError;
use url::{form_urlencoded, Url};

/// Marker every clipboard payload starts with
pub const CLIPBOARD_PREFIX: &str = "URL ";

/// Splits clipboard text into ordered `(key, value)` pairs
///
/// # Errors
///
/// Returns [`ClipboardError::MissingPrefix`] when the text does not start
/// with `URL `.
///
/// # Examples
///
/// ```
/// use pathogen_portal::core::clipboard::parse_clipboard;
///
/// let pairs = parse_clipboard("URL https://x.org/?P.lastname=M%C3%BCller&F.zip=10115").unwrap();
/// assert_eq!(pairs[0], ("P.lastname".to_string(), "Müller".to_string()));
/// assert_eq!(pairs[1], ("F.zip".to_string(), "10115".to_string()));
///
/// assert!(parse_clipboard("P.lastname=Meier").is_err());
/// ```
pub fn parse_clipboard(text: &str) -> Result<Vec<(String, String)>, ClipboardError> {
    let rest = text
        .strip_prefix(CLIPBOARD_PREFIX)
        .ok_or(ClipboardError::MissingPrefix)?
        .trim();

    let query = match Url::parse(rest) {
        Ok(url) => url.query().unwrap_or_default().to_string(),
        Err(_) => rest.trim_start_matches('?').to_string(),
    };

    Ok(form_urlencoded::parse(query.as_bytes())
        .filter(|(key, _)| !key.is_empty())
        .map(|(key, value)| (key.into_owned(), value.trim().to_string()))
        .collect())
}
