//! Contact domain model and field validation.
//!
//! # Responsibility
//! - Define the canonical contact record and its validated input shape.
//! - Enforce the field rules every persisted contact satisfies.
//!
//! # Invariants
//! - `id` is assigned by the store and never reused for another contact.
//! - A `ContactDraft` only exists for input that passed [`validate_fields`].
//! - Validation checks run in a fixed order: presence, name length, email shape.

use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned contact identifier.
pub type ContactId = i64;

/// Minimum number of characters in a trimmed name.
pub const MIN_NAME_CHARS: usize = 2;

/// Persisted contact record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub email: String,
    pub message: String,
}

impl Contact {
    /// Re-checks stored fields against the write-path rules.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_fields(&self.name, &self.email, &self.message).map(|_| ())
    }
}

/// Trimmed, validated contact fields ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDraft {
    name: String,
    email: String,
    message: String,
}

impl ContactDraft {
    /// Validates raw input; shorthand for [`validate_fields`].
    pub fn parse(name: &str, email: &str, message: &str) -> Result<Self, ValidationError> {
        validate_fields(name, email, message)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Attaches a store-assigned id.
    pub fn into_contact(self, id: ContactId) -> Contact {
        Contact {
            id,
            name: self.name,
            email: self.email,
            message: self.message,
        }
    }
}

/// Business-rule failure for contact input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// At least one field is empty after trimming.
    MissingFields,
    /// Trimmed name is shorter than [`MIN_NAME_CHARS`].
    NameTooShort,
    /// Email lacks `@` or `.`.
    InvalidEmail,
}

impl ValidationError {
    /// Stable machine-readable reason code.
    pub fn reason(self) -> &'static str {
        match self {
            Self::MissingFields => "missing-fields",
            Self::NameTooShort => "name-too-short",
            Self::InvalidEmail => "invalid-email",
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "validation failed: {}", self.reason())
    }
}

impl Error for ValidationError {}

/// Trims raw contact input and checks it against the field rules.
///
/// # Contract
/// - All three fields must be non-empty after trimming.
/// - Name must have at least [`MIN_NAME_CHARS`] characters.
/// - Email must contain both `@` and `.`; no further syntax checks.
/// - The first failing rule wins.
pub fn validate_fields(
    name: &str,
    email: &str,
    message: &str,
) -> Result<ContactDraft, ValidationError> {
    let name = name.trim();
    let email = email.trim();
    let message = message.trim();

    if name.is_empty() || email.is_empty() || message.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    if name.chars().count() < MIN_NAME_CHARS {
        return Err(ValidationError::NameTooShort);
    }
    if !email.contains('@') || !email.contains('.') {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(ContactDraft {
        name: name.to_string(),
        email: email.to_string(),
        message: message.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::{validate_fields, Contact, ContactDraft, ValidationError};

    #[test]
    fn trims_all_fields_on_success() {
        let draft = validate_fields("  Ann Lee ", "\tann@x.com\n", " Hi ").unwrap();
        assert_eq!(draft.name(), "Ann Lee");
        assert_eq!(draft.email(), "ann@x.com");
        assert_eq!(draft.message(), "Hi");
    }

    #[test]
    fn any_blank_field_is_missing_fields() {
        for (name, email, message) in [
            ("", "a@b.c", "msg"),
            ("Ann", "   ", "msg"),
            ("Ann", "a@b.c", "\n\t"),
            ("", "", ""),
        ] {
            assert_eq!(
                validate_fields(name, email, message),
                Err(ValidationError::MissingFields),
                "input ({name:?}, {email:?}, {message:?})"
            );
        }
    }

    #[test]
    fn missing_fields_wins_over_later_rules() {
        assert_eq!(
            validate_fields("A", "bad", ""),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn single_character_name_is_too_short() {
        assert_eq!(
            validate_fields(" A ", "a@b.c", "msg"),
            Err(ValidationError::NameTooShort)
        );
        assert_eq!(
            validate_fields("É", "a@b.c", "msg"),
            Err(ValidationError::NameTooShort)
        );
        assert!(validate_fields("Al", "a@b.c", "msg").is_ok());
    }

    #[test]
    fn name_length_is_checked_before_email() {
        assert_eq!(
            validate_fields("A", "bad-email", "msg"),
            Err(ValidationError::NameTooShort)
        );
    }

    #[test]
    fn email_needs_at_sign_and_dot() {
        for email in ["bad-email", "ann.x.com", "ann@xcom"] {
            assert_eq!(
                validate_fields("Ann", email, "msg"),
                Err(ValidationError::InvalidEmail),
                "email {email:?}"
            );
        }
        // Sanity check only: position of `.` relative to `@` is not enforced.
        assert!(validate_fields("Ann", "first.last@host", "msg").is_ok());
    }

    #[test]
    fn reason_codes_are_stable() {
        assert_eq!(ValidationError::MissingFields.reason(), "missing-fields");
        assert_eq!(ValidationError::NameTooShort.reason(), "name-too-short");
        assert_eq!(ValidationError::InvalidEmail.reason(), "invalid-email");
        assert_eq!(
            ValidationError::InvalidEmail.to_string(),
            "validation failed: invalid-email"
        );
    }

    #[test]
    fn draft_into_contact_keeps_fields() {
        let contact = ContactDraft::parse("Ann", "a@b.c", "hi")
            .unwrap()
            .into_contact(7);
        assert_eq!(
            contact,
            Contact {
                id: 7,
                name: "Ann".to_string(),
                email: "a@b.c".to_string(),
                message: "hi".to_string(),
            }
        );
        assert!(contact.validate().is_ok());
    }

    #[test]
    fn contact_serializes_as_flat_record() {
        let contact = ContactDraft::parse("Ann", "a@b.c", "hi")
            .unwrap()
            .into_contact(3);
        assert_eq!(
            serde_json::to_value(&contact).unwrap(),
            serde_json::json!({"id": 3, "name": "Ann", "email": "a@b.c", "message": "hi"})
        );
    }
}
