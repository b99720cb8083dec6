//! Gateway credential handling
//!
//! The gateway bearer token is held in a `secrecy::Secret` so it is zeroized
//! on drop and redacted from `Debug` output. Code that needs the raw value has
//! to call `expose_secret()` explicitly.
//!
//! # Example
//!
//! ```rust
//! use pathogen_portal::config::secret_string;
//! use secrecy::ExposeSecret;
//!
//! let token = secret_string("gateway-token".to_string());
//! assert_eq!(token.expose_secret().as_ref(), "gateway-token");
//! assert!(!format!("{token:?}").contains("gateway-token"));
//! ```

use secrecy::{CloneableSecret, DebugSecret, Secret, SerializableSecret};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::Zeroize;

/// String payload of a secret, zeroized on drop
#[derive(Clone, Debug, Zeroize)]
#[zeroize(drop)]
pub struct SecretValue(String);

impl CloneableSecret for SecretValue {}
impl DebugSecret for SecretValue {}
impl SerializableSecret for SecretValue {}

impl From<String> for SecretValue {
    fn from(s: String) -> Self {
        SecretValue(s)
    }
}

impl AsRef<str> for SecretValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl SecretValue {
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl Serialize for SecretValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SecretValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(SecretValue)
    }
}

/// Secret string type used for credentials in the configuration
pub type SecretString = Secret<SecretValue>;

/// Wraps a plain string into a [`SecretString`]
#[inline]
pub fn secret_string(value: String) -> SecretString {
    Secret::new(SecretValue::from(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_secret_string_exposes_value() {
        let secret = secret_string("token-123".to_string());
        assert_eq!(secret.expose_secret().as_ref(), "token-123");
        assert!(!secret.expose_secret().is_empty());
    }

    #[test]
    fn test_blank_secret_is_empty() {
        assert!(secret_string("   ".to_string()).expose_secret().is_empty());
    }

    #[test]
    fn test_secret_debug_redacted() {
        let secret = secret_string("sensitive-token".to_string());
        let debug_output = format!("{secret:?}");
        assert!(!debug_output.contains("sensitive-token"));
    }

    #[test]
    fn test_secret_from_toml() {
        #[derive(Deserialize)]
        struct Gateway {
            auth_token: SecretString,
        }

        let gateway: Gateway = toml::from_str(r#"auth_token = "abc""#).unwrap();
        assert_eq!(gateway.auth_token.expose_secret().as_ref(), "abc");
    }
}
