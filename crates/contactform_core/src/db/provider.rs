//! Scoped connection acquisition.
//!
//! # Responsibility
//! - Give callers a migrated connection for the duration of one closure.
//! - Release the connection on every exit path of that closure.
//!
//! # Invariants
//! - Connection failures are reported before the closure runs.
//! - Providers never retry a failed connection attempt.

use super::{open_db, DbError};
use crate::config::StoreConfig;
use log::{debug, warn};
use rusqlite::Connection;
use std::sync::Mutex;

/// Source of scoped SQLite connections.
///
/// Implementations decide whether a connection is opened per call, shared, or
/// pooled; call sites only see `with_connection`.
pub trait ConnectionProvider {
    /// Runs `f` with a connection and releases it afterwards.
    ///
    /// # Errors
    /// - Returns `E::from(DbError)` when no connection can be obtained; `f` is
    ///   not called in that case.
    /// - Returns whatever `f` returns otherwise.
    fn with_connection<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut Connection) -> Result<T, E>,
        E: From<DbError>;
}

/// Opens the configured database file for every call.
///
/// The connection is owned by the call frame, so it is closed on drop whether
/// the closure succeeds, fails, or unwinds.
pub struct SqliteConnectionProvider<'cfg> {
    config: &'cfg StoreConfig,
}

impl<'cfg> SqliteConnectionProvider<'cfg> {
    pub fn new(config: &'cfg StoreConfig) -> Self {
        Self { config }
    }
}

impl ConnectionProvider for SqliteConnectionProvider<'_> {
    fn with_connection<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut Connection) -> Result<T, E>,
        E: From<DbError>,
    {
        let Some(path) = self.config.database.as_deref() else {
            warn!("event=db_acquire module=db status=error error_code=missing_setting setting=database");
            return Err(DbError::MissingSetting("database").into());
        };

        let mut conn = open_db(path)?;
        let result = f(&mut conn);
        drop(conn);
        debug!(
            "event=db_release module=db status={} mode=file",
            if result.is_ok() { "ok" } else { "error" }
        );
        result
    }
}

/// Hands out one long-lived connection guarded by a mutex.
///
/// Used for in-memory databases, where a fresh connection would see an empty
/// store, and as the seam where a pooled provider plugs in.
pub struct SharedConnectionProvider {
    conn: Mutex<Connection>,
}

impl SharedConnectionProvider {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }
}

impl ConnectionProvider for SharedConnectionProvider {
    fn with_connection<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut Connection) -> Result<T, E>,
        E: From<DbError>,
    {
        let mut guard = self.conn.lock().map_err(|_| {
            warn!("event=db_acquire module=db status=error error_code=connection_poisoned");
            DbError::ConnectionPoisoned
        })?;
        let result = f(&mut *guard);
        drop(guard);
        debug!(
            "event=db_release module=db status={} mode=shared",
            if result.is_ok() { "ok" } else { "error" }
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::{ConnectionProvider, SharedConnectionProvider, SqliteConnectionProvider};
    use crate::config::StoreConfig;
    use crate::db::{open_db_in_memory, DbError};
    use rusqlite::Connection;
    use std::time::Duration;

    #[test]
    fn missing_database_setting_fails_before_closure_runs() {
        let config = StoreConfig::default();
        let provider = SqliteConnectionProvider::new(&config);

        let mut called = false;
        let result: Result<(), DbError> = provider.with_connection(|_| {
            called = true;
            Ok(())
        });

        assert!(matches!(result, Err(DbError::MissingSetting("database"))));
        assert!(!called);
    }

    #[test]
    fn file_provider_opens_migrated_connection() {
        let dir = tempfile::tempdir().unwrap();
        let config = StoreConfig::with_database(dir.path().join("contacts.db"));
        let provider = SqliteConnectionProvider::new(&config);

        let count: i64 = provider
            .with_connection(|conn| {
                conn.query_row("SELECT COUNT(*) FROM contacts;", [], |row| row.get(0))
                    .map_err(DbError::from)
            })
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn file_provider_releases_lock_when_closure_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.db");
        let config = StoreConfig::with_database(&path);
        let provider = SqliteConnectionProvider::new(&config);

        let result: Result<(), DbError> = provider.with_connection(|conn| {
            conn.execute_batch("BEGIN IMMEDIATE;")?;
            Err(DbError::ConnectionPoisoned)
        });
        assert!(matches!(result, Err(DbError::ConnectionPoisoned)));

        let conn = Connection::open(&path).unwrap();
        conn.busy_timeout(Duration::ZERO).unwrap();
        conn.execute_batch(
            "PRAGMA locking_mode = EXCLUSIVE;
             BEGIN EXCLUSIVE;
             INSERT INTO contacts (name, email, message) VALUES ('Ann', 'a@x.io', 'hi');
             COMMIT;",
        )
        .unwrap();
    }

    #[test]
    fn shared_provider_reuses_the_same_connection() {
        let provider = SharedConnectionProvider::new(open_db_in_memory().unwrap());

        provider
            .with_connection(|conn| {
                conn.execute(
                    "INSERT INTO contacts (name, email, message) VALUES ('Ann', 'a@x.io', 'hi');",
                    [],
                )
                .map_err(DbError::from)
            })
            .unwrap();

        let count: i64 = provider
            .with_connection(|conn| {
                conn.query_row("SELECT COUNT(*) FROM contacts;", [], |row| row.get(0))
                    .map_err(DbError::from)
            })
            .unwrap();
        assert_eq!(count, 1);
    }
}
