use crate::error::Result;
use rusqlite::Connection;

const CONTACTS_TABLE: &str = include_str!("../schema/contacts.sql");

pub fn ensure_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(CONTACTS_TABLE)?;
    Ok(())
}
