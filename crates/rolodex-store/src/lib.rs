pub mod error;
pub mod paths;
pub mod repo;
pub mod schema;

use crate::error::Result;
use rusqlite::Connection;
use std::path::Path;

const BUSY_TIMEOUT_MS: i64 = 2000;

pub struct Store {
    conn: Connection,
}

impl Store {
    /// Opens (or creates) a durable database file readable only by its owner.
    pub fn open(path: &Path) -> Result<Self> {
        let store = Self::with_connection(Connection::open(path)?)?;
        store.conn.pragma_update(None, "journal_mode", "WAL")?;
        paths::restrict_file_permissions(path)?;
        Ok(store)
    }

    /// Opens a database that disappears with the process.
    pub fn open_in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.pragma_update(None, "foreign_keys", "ON")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        conn.pragma_update(None, "busy_timeout", BUSY_TIMEOUT_MS)?;
        Ok(Self { conn })
    }

    /// Creates the `Contacts` table when it is missing.
    pub fn ensure_schema(&self) -> Result<()> {
        schema::ensure_schema(&self.conn)
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn contacts(&self) -> repo::ContactsRepo<'_> {
        repo::ContactsRepo::new(&self.conn)
    }
}
