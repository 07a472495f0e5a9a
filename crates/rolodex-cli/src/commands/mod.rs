use crate::console::Console;
use anyhow::Result;
use rolodex_core::domain::{Contact, Field};
use rolodex_store::error::StoreError;
use rolodex_store::Store;
use tracing::debug;

pub mod add;
pub mod delete;
pub mod edit;
pub mod search;
pub mod view;

pub const EMPTY_BOOK: &str = "Contact book is empty";

/// Printed in place of an absent field.
pub const ABSENT: &str = "None";

pub struct Context<'a> {
    pub store: &'a Store,
    pub console: &'a mut dyn Console,
}

impl Context<'_> {
    pub fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        Ok(self.console.prompt(message)?)
    }

    pub fn say(&mut self, message: impl AsRef<str>) -> Result<()> {
        self.console.say(message.as_ref())?;
        Ok(())
    }

    /// Reports a rejected write to the user; any other store failure is returned.
    pub fn report_rejection(&mut self, err: StoreError) -> Result<()> {
        match err.violation() {
            Some(violation) => {
                debug!(field = %violation.field, kind = ?violation.kind, "write rejected");
                self.say(violation.to_string())
            }
            None => Err(err.into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    Edit,
    Search,
    View,
    Delete,
    Exit,
}

impl Command {
    pub fn from_input(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "add" => Some(Command::Add),
            "edit" => Some(Command::Edit),
            "search" => Some(Command::Search),
            "view" => Some(Command::View),
            "delete" => Some(Command::Delete),
            "exit" => Some(Command::Exit),
            _ => None,
        }
    }
}

pub fn display_value(value: Option<&str>) -> &str {
    value.unwrap_or(ABSENT)
}

/// `NAME: .., NUMBER: .., ADDRESS: .., EMAIL: ..` on one line.
pub fn format_contact_line(contact: &Contact) -> String {
    Field::ALL
        .iter()
        .map(|field| format!("{}: {}", field.label(), display_value(contact.get(*field))))
        .collect::<Vec<_>>()
        .join(", ")
}
