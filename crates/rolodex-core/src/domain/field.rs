use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Number,
    Address,
    Email,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Number, Field::Address, Field::Email];

    /// Column name in the `Contacts` table.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Number => "number",
            Field::Address => "address",
            Field::Email => "email",
        }
    }

    /// Upper-case label used when printing a contact.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "NAME",
            Field::Number => "NUMBER",
            Field::Address => "ADDRESS",
            Field::Email => "EMAIL",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
