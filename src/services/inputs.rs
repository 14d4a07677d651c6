use std::fmt;

use crate::services::registration_service::RegistrationError;

/// Activity name taken from the request path. Matched exactly against stored names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityName(String);

impl ActivityName {
    pub fn parse(raw: impl Into<String>) -> Result<Self, RegistrationError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(RegistrationError::InvalidInput(
                "activity name must not be empty".to_string(),
            ));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActivityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Student identifier (an email address) taken from the `email` query parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentEmail(String);

impl StudentEmail {
    pub fn parse(raw: impl Into<String>) -> Result<Self, RegistrationError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(RegistrationError::InvalidInput(
                "email must not be empty".to_string(),
            ));
        }
        if raw.trim() != raw {
            return Err(RegistrationError::InvalidInput(
                "email must not have leading or trailing whitespace".to_string(),
            ));
        }
        if raw.chars().any(char::is_control) {
            return Err(RegistrationError::InvalidInput(
                "email must not contain control characters".to_string(),
            ));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StudentEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
