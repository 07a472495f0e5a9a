pub mod contacts;

pub use contacts::{ContactUpdate, ContactsRepo};
