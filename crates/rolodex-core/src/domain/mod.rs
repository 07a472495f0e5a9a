pub mod contact;
pub mod email;
pub mod field;
pub mod name;
pub mod violation;

pub use contact::Contact;
pub use email::normalize_email;
pub use field::Field;
pub use name::{normalize_name, normalize_text};
pub use violation::{Violation, ViolationKind};
