//! Contact lifecycle service.
//!
//! # Responsibility
//! - Validate raw form input before any mutating store call.
//! - Drive create/read/update/delete through the persistence gateway.
//! - Turn results into `Outcome`s and log failure detail server-side.
//!
//! # Invariants
//! - Invalid input never acquires a connection.
//! - Requests are attempted once; failures are surfaced, not retried.
//! - Logs carry ids and error kinds, never user-entered field values.

use crate::db::ConnectionProvider;
use crate::error::{ContactError, ContactResult};
use crate::model::contact::{validate_fields, Contact, ContactId};
use crate::sample::{demo_contacts, sample_drafts};
use crate::service::outcome::{Action, Outcome, MSG_CREATED, MSG_SAMPLE_LOADED};
use crate::store::ContactStore;
use log::{error, info, warn};
use serde::Serialize;

/// Raw contact input as submitted by a form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }
}

/// Contacts to render on the index view, plus an optional error notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactListView {
    pub contacts: Vec<Contact>,
    pub notice: Option<Outcome>,
}

/// Lifecycle handler over a contact store.
pub struct ContactService<P: ConnectionProvider> {
    store: ContactStore<P>,
}

impl<P: ConnectionProvider> ContactService<P> {
    /// Creates a service using the provided connection provider.
    pub fn new(provider: P) -> Self {
        Self {
            store: ContactStore::new(provider),
        }
    }

    pub fn store(&self) -> &ContactStore<P> {
        &self.store
    }

    /// Lists contacts ordered by ascending id.
    pub fn list_contacts(&self) -> ContactResult<Vec<Contact>> {
        self.store
            .list_all()
            .inspect_err(|err| log_failure(Action::List, None, err))
    }

    /// Validates and persists a new contact.
    pub fn create_contact(&self, form: &ContactForm) -> ContactResult<ContactId> {
        let result = validate_fields(&form.name, &form.email, &form.message)
            .map_err(ContactError::from)
            .and_then(|draft| self.store.create(&draft));
        match &result {
            Ok(id) => info!("event=contact_create module=service status=ok contact_id={id}"),
            Err(err) => log_failure(Action::Create, None, err),
        }
        result
    }

    /// Loads a contact for editing; `NotFound` when absent.
    pub fn contact_for_edit(&self, id: ContactId) -> ContactResult<Contact> {
        self.store
            .get(id)
            .and_then(|found| found.ok_or(ContactError::NotFound(id)))
            .inspect_err(|err| log_failure(Action::Edit, Some(id), err))
    }

    /// Validates and replaces all content fields; returns the stored contact.
    pub fn update_contact(&self, id: ContactId, form: &ContactForm) -> ContactResult<Contact> {
        let result = validate_fields(&form.name, &form.email, &form.message)
            .map_err(ContactError::from)
            .and_then(|draft| {
                self.store.update(id, &draft)?;
                Ok(draft.into_contact(id))
            });
        match &result {
            Ok(_) => info!("event=contact_update module=service status=ok contact_id={id}"),
            Err(err) => log_failure(Action::Update, Some(id), err),
        }
        result
    }

    /// Hard-deletes a contact and returns the name it had.
    pub fn delete_contact(&self, id: ContactId) -> ContactResult<String> {
        let result = self.store.delete(id);
        match &result {
            Ok(_) => info!("event=contact_delete module=service status=ok contact_id={id}"),
            Err(err) => log_failure(Action::Delete, Some(id), err),
        }
        result
    }

    /// Replaces the table contents with the sample fixtures.
    pub fn populate_sample(&self) -> ContactResult<Vec<ContactId>> {
        let result = sample_drafts()
            .map_err(ContactError::from)
            .and_then(|drafts| self.store.replace_all(&drafts));
        match &result {
            Ok(ids) => info!(
                "event=sample_populate module=service status=ok count={}",
                ids.len()
            ),
            Err(err) => log_failure(Action::PopulateSample, None, err),
        }
        result
    }

    /// Static demo listing; no store access.
    pub fn demo(&self) -> Vec<Contact> {
        demo_contacts()
    }

    /// Index view: on failure the list is empty and a notice explains why.
    pub fn handle_list(&self) -> ContactListView {
        match self.list_contacts() {
            Ok(contacts) => ContactListView {
                contacts,
                notice: None,
            },
            Err(err) => ContactListView {
                contacts: Vec::new(),
                notice: Some(Outcome::failure(Action::List, None, &err)),
            },
        }
    }

    pub fn handle_create(&self, form: &ContactForm) -> Outcome {
        match self.create_contact(form) {
            Ok(id) => Outcome::success(Action::Create, MSG_CREATED, id),
            Err(err) => Outcome::failure(Action::Create, None, &err),
        }
    }

    /// Edit view: the contact, or the outcome to show instead.
    pub fn handle_edit(&self, id: ContactId) -> Result<Contact, Outcome> {
        self.contact_for_edit(id)
            .map_err(|err| Outcome::failure(Action::Edit, Some(id), &err))
    }

    pub fn handle_update(&self, id: ContactId, form: &ContactForm) -> Outcome {
        match self.update_contact(id, form) {
            Ok(contact) => Outcome::success(
                Action::Update,
                format!("Contact '{}' updated successfully!", contact.name),
                id,
            ),
            Err(err) => Outcome::failure(Action::Update, Some(id), &err),
        }
    }

    pub fn handle_delete(&self, id: ContactId) -> Outcome {
        match self.delete_contact(id) {
            Ok(name) => Outcome::success(
                Action::Delete,
                format!("Contact '{name}' deleted successfully!"),
                id,
            ),
            Err(err) => Outcome::failure(Action::Delete, Some(id), &err),
        }
    }

    pub fn handle_populate_sample(&self) -> Outcome {
        match self.populate_sample() {
            Ok(_) => Outcome::done(Action::PopulateSample, MSG_SAMPLE_LOADED),
            Err(err) => Outcome::failure(Action::PopulateSample, None, &err),
        }
    }
}

fn log_failure(action: Action, id: Option<ContactId>, err: &ContactError) {
    let contact_id = id.map_or_else(|| "none".to_string(), |id| id.to_string());
    match err {
        ContactError::Validation(reason) => info!(
            "event=contact_{} module=service status=rejected contact_id={} reason={}",
            action.as_str(),
            contact_id,
            reason.reason()
        ),
        ContactError::NotFound(_) => warn!(
            "event=contact_{} module=service status=not_found contact_id={}",
            action.as_str(),
            contact_id
        ),
        ContactError::Connection(_) | ContactError::Store(_) => error!(
            "event=contact_{} module=service status=error contact_id={} error_kind={} error={}",
            action.as_str(),
            contact_id,
            err.kind(),
            err
        ),
    }
}
