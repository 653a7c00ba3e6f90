//! Contact repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD APIs over the `contacts` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths only accept `ContactDraft`, so unvalidated input never reaches SQL.
//! - Update and delete check existence inside the same transaction as the write.
//! - Read paths skip rows that fail the field rules, logging each one, so one
//!   bad row never hides the rest of the table.

use crate::db::DbError;
use crate::model::contact::{Contact, ContactDraft, ContactId};
use log::warn;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const CONTACT_SELECT_SQL: &str = "SELECT id, name, email, message FROM contacts";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for contact persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(ContactId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "contact not found: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for contact CRUD operations.
pub trait ContactRepository {
    /// Lists every valid contact ordered by ascending id.
    fn list_contacts(&self) -> RepoResult<Vec<Contact>>;
    /// Gets one contact; rows failing the field rules read as absent.
    fn get_contact(&self, id: ContactId) -> RepoResult<Option<Contact>>;
    fn create_contact(&self, draft: &ContactDraft) -> RepoResult<ContactId>;
    /// Replaces name, email and message of an existing contact.
    fn update_contact(&self, id: ContactId, draft: &ContactDraft) -> RepoResult<()>;
    /// Hard-deletes a contact and returns the name it had.
    fn delete_contact(&self, id: ContactId) -> RepoResult<String>;
    /// Deletes every contact, then inserts `drafts` in order.
    fn replace_all(&self, drafts: &[ContactDraft]) -> RepoResult<Vec<ContactId>>;
}

/// SQLite-backed contact repository.
pub struct SqliteContactRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteContactRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ContactRepository for SqliteContactRepository<'_> {
    fn list_contacts(&self) -> RepoResult<Vec<Contact>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CONTACT_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut contacts = Vec::new();

        while let Some(row) = rows.next()? {
            contacts.extend(keep_valid(parse_contact_row(row)?));
        }

        Ok(contacts)
    }

    fn get_contact(&self, id: ContactId) -> RepoResult<Option<Contact>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CONTACT_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(keep_valid(parse_contact_row(row)?));
        }

        Ok(None)
    }

    fn create_contact(&self, draft: &ContactDraft) -> RepoResult<ContactId> {
        let tx = self.conn.unchecked_transaction()?;
        let id = insert_contact(&tx, draft)?;
        tx.commit()?;
        Ok(id)
    }

    fn update_contact(&self, id: ContactId, draft: &ContactDraft) -> RepoResult<()> {
        let tx = self.conn.unchecked_transaction()?;
        if find_contact_name(&tx, id)?.is_none() {
            return Err(RepoError::NotFound(id));
        }

        tx.execute(
            "UPDATE contacts
             SET
                name = ?1,
                email = ?2,
                message = ?3
             WHERE id = ?4;",
            params![draft.name(), draft.email(), draft.message(), id],
        )?;
        tx.commit()?;

        Ok(())
    }

    fn delete_contact(&self, id: ContactId) -> RepoResult<String> {
        let tx = self.conn.unchecked_transaction()?;
        let Some(name) = find_contact_name(&tx, id)? else {
            return Err(RepoError::NotFound(id));
        };

        tx.execute("DELETE FROM contacts WHERE id = ?1;", [id])?;
        tx.commit()?;

        Ok(name)
    }

    fn replace_all(&self, drafts: &[ContactDraft]) -> RepoResult<Vec<ContactId>> {
        let tx = self.conn.unchecked_transaction()?;
        tx.execute("DELETE FROM contacts;", [])?;

        let mut ids = Vec::with_capacity(drafts.len());
        for draft in drafts {
            ids.push(insert_contact(&tx, draft)?);
        }
        tx.commit()?;

        Ok(ids)
    }
}

fn insert_contact(conn: &Connection, draft: &ContactDraft) -> RepoResult<ContactId> {
    conn.execute(
        "INSERT INTO contacts (name, email, message) VALUES (?1, ?2, ?3);",
        params![draft.name(), draft.email(), draft.message()],
    )?;
    Ok(conn.last_insert_rowid())
}

fn find_contact_name(conn: &Connection, id: ContactId) -> RepoResult<Option<String>> {
    let name = conn
        .query_row("SELECT name FROM contacts WHERE id = ?1;", [id], |row| {
            row.get::<_, String>(0)
        })
        .optional()?;
    Ok(name)
}

fn parse_contact_row(row: &Row<'_>) -> RepoResult<Contact> {
    Ok(Contact {
        id: row.get("id")?,
        name: row.get("name")?,
        email: row.get("email")?,
        message: row.get("message")?,
    })
}

fn keep_valid(contact: Contact) -> Option<Contact> {
    match contact.validate() {
        Ok(()) => Some(contact),
        Err(err) => {
            warn!(
                "event=contact_row_skipped module=repo status=invalid contact_id={} reason={}",
                contact.id,
                err.reason()
            );
            None
        }
    }
}
