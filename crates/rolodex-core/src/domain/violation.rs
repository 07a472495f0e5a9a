use crate::domain::Field;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    Presence,
    Uniqueness,
}

/// A rejected write, identified by the column and the constraint it broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Violation {
    pub field: Field,
    pub kind: ViolationKind,
}

impl Violation {
    pub fn missing(field: Field) -> Self {
        Self {
            field,
            kind: ViolationKind::Presence,
        }
    }

    pub fn duplicate(field: Field) -> Self {
        Self {
            field,
            kind: ViolationKind::Uniqueness,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let subject = match self.field {
            Field::Name => "Name",
            Field::Number => "Number",
            Field::Address => "Address",
            Field::Email => "Email",
        };
        match self.kind {
            ViolationKind::Presence => write!(f, "{subject} cannot be empty"),
            ViolationKind::Uniqueness => write!(f, "{subject} already exists"),
        }
    }
}
