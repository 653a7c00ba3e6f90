//! Core domain logic for the contact form.
//! This crate is the single source of truth for contact validation and
//! persistence invariants.

pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod model;
pub mod repo;
pub mod sample;
pub mod service;
pub mod store;

pub use config::StoreConfig;
pub use db::{ConnectionProvider, SharedConnectionProvider, SqliteConnectionProvider};
pub use error::{ContactError, ContactResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::contact::{validate_fields, Contact, ContactDraft, ContactId, ValidationError};
pub use repo::contact_repo::{ContactRepository, RepoError, RepoResult, SqliteContactRepository};
pub use service::contact_service::{ContactForm, ContactListView, ContactService};
pub use service::outcome::{Action, NextView, Outcome, OutcomeLevel};
pub use store::ContactStore;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
