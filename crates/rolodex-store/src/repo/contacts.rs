use crate::error::{Result, StoreError};
use rolodex_core::domain::{
    normalize_email, normalize_name, normalize_text, Contact, Field, Violation,
};
use rolodex_core::ContactRecord;
use rusqlite::{params, Connection, OptionalExtension};

/// Replacement values for an existing contact. `None`, or a blank string,
/// keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct ContactUpdate {
    pub name: Option<String>,
    pub number: Option<String>,
    pub address: Option<String>,
    pub email: Option<String>,
}

impl ContactUpdate {
    pub fn is_empty(&self) -> bool {
        [&self.name, &self.number, &self.address, &self.email]
            .iter()
            .all(|value| value.as_deref().map_or(true, |v| v.trim().is_empty()))
    }
}

pub struct ContactsRepo<'a> {
    conn: &'a Connection,
}

impl<'a> ContactsRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub fn create(&self, record: ContactRecord) -> Result<Contact> {
        if self.conn.is_autocommit() {
            let tx = self.conn.unchecked_transaction()?;
            let contact = create_inner(&tx, record)?;
            tx.commit()?;
            Ok(contact)
        } else {
            create_inner(self.conn, record)
        }
    }

    /// Looks a contact up by name, ignoring case.
    pub fn get(&self, name: &str) -> Result<Option<Contact>> {
        let Some(name) = normalize_name(name) else {
            return Ok(None);
        };
        get_inner(self.conn, &name)
    }

    /// All contacts in insertion order.
    pub fn list_all(&self) -> Result<Vec<Contact>> {
        let mut stmt = self.conn.prepare(
            "SELECT name, number, address, email FROM Contacts ORDER BY rowid ASC;",
        )?;
        let mut rows = stmt.query([])?;
        let mut contacts = Vec::new();
        while let Some(row) = rows.next()? {
            contacts.push(contact_from_row(row)?);
        }
        Ok(contacts)
    }

    pub fn count(&self) -> Result<i64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(1) FROM Contacts;", [], |row| row.get(0))?;
        Ok(count)
    }

    pub fn update(&self, name: &str, update: ContactUpdate) -> Result<Contact> {
        if self.conn.is_autocommit() {
            let tx = self.conn.unchecked_transaction()?;
            let contact = update_inner(&tx, name, update)?;
            tx.commit()?;
            Ok(contact)
        } else {
            update_inner(self.conn, name, update)
        }
    }

    /// Returns `false` when no contact has that name.
    pub fn delete(&self, name: &str) -> Result<bool> {
        let Some(name) = normalize_name(name) else {
            return Ok(false);
        };
        let deleted = self
            .conn
            .execute("DELETE FROM Contacts WHERE name = ?1;", [name])?;
        Ok(deleted > 0)
    }
}

fn create_inner(conn: &Connection, record: ContactRecord) -> Result<Contact> {
    let contact = record.into_contact()?;

    ensure_unique(conn, Field::Name, &contact.name, None)?;
    ensure_unique(conn, Field::Number, &contact.number, None)?;

    conn.execute(
        "INSERT INTO Contacts (name, number, address, email) VALUES (?1, ?2, ?3, ?4);",
        params![
            contact.name,
            contact.number,
            contact.address,
            contact.email,
        ],
    )?;

    Ok(contact)
}

fn update_inner(conn: &Connection, name: &str, update: ContactUpdate) -> Result<Contact> {
    let current = normalize_name(name)
        .map(|key| get_inner(conn, &key))
        .transpose()?
        .flatten()
        .ok_or_else(|| StoreError::NotFound(name.trim().to_string()))?;

    let mut contact = current.clone();
    if let Some(value) = update.name.as_deref().and_then(normalize_name) {
        contact.name = value;
    }
    if let Some(value) = update.number.as_deref().and_then(normalize_text) {
        contact.number = value;
    }
    if let Some(value) = update.address.as_deref().and_then(normalize_text) {
        contact.address = Some(value);
    }
    if let Some(value) = update.email.as_deref().and_then(normalize_email) {
        contact.email = Some(value);
    }

    if contact == current {
        return Ok(current);
    }

    contact.validate()?;
    ensure_unique(conn, Field::Name, &contact.name, Some(&current.name))?;
    ensure_unique(conn, Field::Number, &contact.number, Some(&current.name))?;

    let updated = conn.execute(
        "UPDATE Contacts
         SET name = ?1, number = ?2, address = ?3, email = ?4
         WHERE name = ?5;",
        params![
            contact.name,
            contact.number,
            contact.address,
            contact.email,
            current.name,
        ],
    )?;
    if updated != 1 {
        return Err(StoreError::NotFound(current.name));
    }

    Ok(contact)
}

fn get_inner(conn: &Connection, name: &str) -> Result<Option<Contact>> {
    let mut stmt =
        conn.prepare("SELECT name, number, address, email FROM Contacts WHERE name = ?1;")?;
    let mut rows = stmt.query([name])?;
    if let Some(row) = rows.next()? {
        Ok(Some(contact_from_row(row)?))
    } else {
        Ok(None)
    }
}

/// Fails when `value` is already held by a contact other than `owner`.
fn ensure_unique(conn: &Connection, field: Field, value: &str, owner: Option<&str>) -> Result<()> {
    let sql = format!(
        "SELECT name FROM Contacts WHERE {} = ?1 LIMIT 1;",
        field.as_str()
    );
    let holder: Option<String> = conn
        .query_row(&sql, [value], |row| row.get(0))
        .optional()?;
    match holder {
        Some(holder) if owner != Some(holder.as_str()) => Err(Violation::duplicate(field).into()),
        _ => Ok(()),
    }
}

fn contact_from_row(row: &rusqlite::Row<'_>) -> Result<Contact> {
    Ok(Contact {
        name: row.get(0)?,
        number: row.get(1)?,
        address: row.get(2)?,
        email: row.get(3)?,
    })
}
