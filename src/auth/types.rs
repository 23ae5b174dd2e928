//! # Auth API Types
//!
//! Request bodies for the auth endpoints.

use crate::error::ValidationError;
use serde::Deserialize;

/// Body of `POST /api/auth/register` and `POST /api/auth/login`
///
/// Both fields are optional on the wire so that a missing password is reported
/// by the password check with its own message, rather than as a generic JSON
/// rejection.
///
/// ## Example JSON
/// ```json
/// {
///   "username": "sue",
///   "password": "1234"
/// }
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct CredentialsBody {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl CredentialsBody {
    /// Username used for store lookups; a missing name looks up the empty string
    pub fn username(&self) -> &str {
        self.username.as_deref().unwrap_or_default()
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// The username a new account would be created with
    ///
    /// Missing or empty names are refused; anything else, whitespace included,
    /// is taken verbatim.
    pub fn username_for_registration(&self) -> Result<&str, ValidationError> {
        match self.username.as_deref() {
            Some(name) if !name.is_empty() => Ok(name),
            _ => Err(ValidationError::username_required()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn missing_fields_deserialize_as_none() {
        let body: CredentialsBody = serde_json::from_str("{}").unwrap();

        assert_eq!(body.username(), "");
        assert_eq!(body.password(), None);
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    fn missing_or_empty_names_cannot_register(#[case] username: Option<&str>) {
        let body = CredentialsBody {
            username: username.map(str::to_owned),
            password: Some("1234".into()),
        };

        assert_eq!(
            body.username_for_registration(),
            Err(ValidationError::username_required())
        );
    }

    #[rstest]
    #[case(" sue")]
    #[case("   ")]
    fn names_are_kept_verbatim(#[case] username: &str) {
        let body = CredentialsBody {
            username: Some(username.into()),
            password: None,
        };

        assert_eq!(body.username_for_registration(), Ok(username));
    }
}
