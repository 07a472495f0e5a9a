use crate::domain::{Field, Violation};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub number: String,
    pub address: Option<String>,
    pub email: Option<String>,
}

impl Contact {
    pub fn validate(&self) -> Result<(), Violation> {
        if self.name.trim().is_empty() {
            return Err(Violation::missing(Field::Name));
        }
        if self.number.trim().is_empty() {
            return Err(Violation::missing(Field::Number));
        }
        Ok(())
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => Some(self.name.as_str()),
            Field::Number => Some(self.number.as_str()),
            Field::Address => self.address.as_deref(),
            Field::Email => self.email.as_deref(),
        }
    }
}
