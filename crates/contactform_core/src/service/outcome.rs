//! User-facing outcomes of lifecycle requests.
//!
//! # Responsibility
//! - Map success and `ContactError` kinds to a status level and message.
//! - Name the view a front end should show next.
//!
//! # Invariants
//! - Store and connection failures never echo raw store error text.

use crate::error::ContactError;
use crate::model::contact::{ContactId, ValidationError};
use serde::Serialize;

pub const MSG_MISSING_FIELDS: &str = "All fields are required!";
pub const MSG_NAME_TOO_SHORT: &str = "Name must be at least 2 characters long!";
pub const MSG_INVALID_EMAIL: &str = "Please enter a valid email address!";
pub const MSG_NOT_FOUND: &str = "Contact not found!";
pub const MSG_CONNECTION_FAILED: &str = "Database connection failed!";
pub const MSG_CREATED: &str = "Contact added successfully!";
pub const MSG_SAMPLE_LOADED: &str =
    "Sample data added successfully! You can now test all operations.";

/// Request kind an outcome belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    List,
    Create,
    Edit,
    Update,
    Delete,
    PopulateSample,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Create => "create",
            Self::Edit => "edit",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::PopulateSample => "populate_sample",
        }
    }

    fn store_failure_message(self) -> &'static str {
        match self {
            Self::List | Self::Edit => "Error loading contacts. Please try again.",
            Self::Create => "Error adding contact. Please try again.",
            Self::Update => "Error updating contact. Please try again.",
            Self::Delete => "Error deleting contact. Please try again.",
            Self::PopulateSample => "Error adding sample data. Please try again.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeLevel {
    Success,
    Error,
}

/// View a front end should render after the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "view", content = "id", rename_all = "snake_case")]
pub enum NextView {
    Index,
    Edit(ContactId),
}

/// Terminal state of one lifecycle request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub action: Action,
    pub level: OutcomeLevel,
    pub message: String,
    /// Contact the request acted on, when known.
    pub contact_id: Option<ContactId>,
    pub next: NextView,
    /// Machine-readable failure kind; `None` on success.
    pub error_kind: Option<&'static str>,
}

impl Outcome {
    pub fn success(action: Action, message: impl Into<String>, contact_id: ContactId) -> Self {
        Self {
            action,
            level: OutcomeLevel::Success,
            message: message.into(),
            contact_id: Some(contact_id),
            next: NextView::Index,
            error_kind: None,
        }
    }

    /// Success without a single target contact.
    pub fn done(action: Action, message: impl Into<String>) -> Self {
        Self {
            action,
            level: OutcomeLevel::Success,
            message: message.into(),
            contact_id: None,
            next: NextView::Index,
            error_kind: None,
        }
    }

    /// Builds the error outcome for `err`.
    ///
    /// Validation failures on update send the user back to the edit view.
    pub fn failure(action: Action, target: Option<ContactId>, err: &ContactError) -> Self {
        let message = match err {
            ContactError::Validation(reason) => validation_message(*reason),
            ContactError::NotFound(_) => MSG_NOT_FOUND,
            ContactError::Connection(_) => MSG_CONNECTION_FAILED,
            ContactError::Store(_) => action.store_failure_message(),
        };
        let next = match (action, err, target) {
            (Action::Update, ContactError::Validation(_), Some(id)) => NextView::Edit(id),
            _ => NextView::Index,
        };

        Self {
            action,
            level: OutcomeLevel::Error,
            message: message.to_string(),
            contact_id: target,
            next,
            error_kind: Some(match err {
                ContactError::Validation(reason) => reason.reason(),
                other => other.kind(),
            }),
        }
    }

    pub fn is_success(&self) -> bool {
        self.level == OutcomeLevel::Success
    }
}

pub fn validation_message(reason: ValidationError) -> &'static str {
    match reason {
        ValidationError::MissingFields => MSG_MISSING_FIELDS,
        ValidationError::NameTooShort => MSG_NAME_TOO_SHORT,
        ValidationError::InvalidEmail => MSG_INVALID_EMAIL,
    }
}

#[cfg(test)]
mod tests {
    use super::{Action, NextView, Outcome, OutcomeLevel, MSG_INVALID_EMAIL};
    use crate::db::DbError;
    use crate::error::ContactError;
    use crate::model::contact::ValidationError;
    use crate::repo::contact_repo::RepoError;

    #[test]
    fn update_validation_failure_returns_to_edit_view() {
        let err = ContactError::Validation(ValidationError::InvalidEmail);
        let outcome = Outcome::failure(Action::Update, Some(3), &err);

        assert_eq!(outcome.level, OutcomeLevel::Error);
        assert_eq!(outcome.message, MSG_INVALID_EMAIL);
        assert_eq!(outcome.next, NextView::Edit(3));
        assert_eq!(outcome.error_kind, Some("invalid-email"));
    }

    #[test]
    fn store_failure_message_hides_store_detail() {
        let err = ContactError::Store(RepoError::Db(DbError::Sqlite(
            rusqlite::Error::InvalidQuery,
        )));
        let outcome = Outcome::failure(Action::Create, None, &err);

        assert_eq!(outcome.message, "Error adding contact. Please try again.");
        assert_eq!(outcome.next, NextView::Index);
        assert_eq!(outcome.error_kind, Some("store"));
    }

    #[test]
    fn done_has_no_target_contact() {
        let outcome = Outcome::done(Action::PopulateSample, "ok");
        assert!(outcome.is_success());
        assert_eq!(outcome.contact_id, None);
        assert_eq!(outcome.next, NextView::Index);
        assert_eq!(outcome.error_kind, None);
        assert_eq!(outcome.message, "ok");
    }
}
