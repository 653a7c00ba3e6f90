//! Persistence gateway over a connection provider.
//!
//! # Responsibility
//! - Run each contact operation inside one scoped connection.
//! - Translate repository failures into request-level `ContactError` kinds.
//!
//! # Invariants
//! - Every operation acquires at most one connection and releases it on return.
//! - Mutations commit exactly once or leave the table unchanged.

use crate::db::ConnectionProvider;
use crate::error::{ContactError, ContactResult};
use crate::model::contact::{Contact, ContactDraft, ContactId};
use crate::repo::contact_repo::{ContactRepository, RepoResult, SqliteContactRepository};
use log::debug;
use std::time::Instant;

/// Contact store bound to one connection provider.
pub struct ContactStore<P: ConnectionProvider> {
    provider: P,
}

impl<P: ConnectionProvider> ContactStore<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Lists all contacts ordered by ascending id.
    pub fn list_all(&self) -> ContactResult<Vec<Contact>> {
        self.run("list", |repo| repo.list_contacts())
    }

    /// Gets one contact; `Ok(None)` when the id does not exist.
    pub fn get(&self, id: ContactId) -> ContactResult<Option<Contact>> {
        self.run("get", |repo| repo.get_contact(id))
    }

    /// Persists a new contact and returns its store-assigned id.
    pub fn create(&self, draft: &ContactDraft) -> ContactResult<ContactId> {
        self.run("create", |repo| repo.create_contact(draft))
    }

    /// Replaces all content fields of an existing contact.
    ///
    /// Returns `ContactError::NotFound` when `id` is absent.
    pub fn update(&self, id: ContactId, draft: &ContactDraft) -> ContactResult<()> {
        self.run("update", |repo| repo.update_contact(id, draft))
    }

    /// Deletes a contact and returns its prior name.
    ///
    /// Returns `ContactError::NotFound` when `id` is absent, including when it
    /// was already deleted.
    pub fn delete(&self, id: ContactId) -> ContactResult<String> {
        self.run("delete", |repo| repo.delete_contact(id))
    }

    /// Swaps the whole table for `drafts` in one transaction.
    pub fn replace_all(&self, drafts: &[ContactDraft]) -> ContactResult<Vec<ContactId>> {
        self.run("replace_all", |repo| repo.replace_all(drafts))
    }

    fn run<T>(
        &self,
        op: &'static str,
        f: impl FnOnce(&SqliteContactRepository<'_>) -> RepoResult<T>,
    ) -> ContactResult<T> {
        let started_at = Instant::now();
        let result = self.provider.with_connection(|conn| {
            let repo = SqliteContactRepository::new(conn);
            f(&repo).map_err(ContactError::from)
        });
        debug!(
            "event=store_op module=store op={} status={} duration_ms={}",
            op,
            match &result {
                Ok(_) => "ok",
                Err(err) => err.kind(),
            },
            started_at.elapsed().as_millis()
        );
        result
    }
}
