//! Contact message payload and validation shared by the form and the
//! relay endpoint.
//!
//! Validation runs twice on purpose: in the browser before any network
//! call, and again on the server because the endpoint is a trust boundary.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::{Deserialize, Serialize};

/// Subject used when the optional field is left blank.
pub const DEFAULT_SUBJECT: &str = "Contact Form Submission";

/// Wire payload for `POST /api/contact`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: String,
    pub message: String,
}

/// Why a submission was rejected before reaching the relay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("Please fill in all required fields")]
    MissingField,
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

impl ContactMessage {
    /// Subject with the blank-field fallback applied.
    #[must_use]
    pub fn effective_subject(&self) -> &str {
        let trimmed = self.subject.trim();
        if trimmed.is_empty() { DEFAULT_SUBJECT } else { trimmed }
    }

    /// Check required fields and email shape. Subject stays optional.
    ///
    /// # Errors
    ///
    /// [`ContactError::MissingField`] when name, email, or message is empty
    /// after trimming; [`ContactError::InvalidEmail`] when the address fails
    /// [`is_valid_email`].
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() || self.email.trim().is_empty() || self.message.trim().is_empty() {
            return Err(ContactError::MissingField);
        }
        if !is_valid_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }
}

/// Minimal address shape check: one `@`, a non-empty local part, and a
/// domain that contains a dot, with no whitespace anywhere. Deliverability
/// is the relay's problem.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    let mut labels = domain.split('.');
    labels.next().is_some_and(|first| !first.is_empty())
        && domain.contains('.')
        && !domain.ends_with('.')
}
