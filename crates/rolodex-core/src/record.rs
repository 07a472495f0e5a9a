use crate::domain::{normalize_email, normalize_name, normalize_text, Contact, Field, Violation};
use crate::error::CoreError;

/// One `name,number,address,email` line after normalization. Blank fields are
/// absent, so required fields are only checked when the record becomes a
/// [`Contact`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactRecord {
    pub name: Option<String>,
    pub number: Option<String>,
    pub address: Option<String>,
    pub email: Option<String>,
}

impl ContactRecord {
    pub fn into_contact(self) -> Result<Contact, Violation> {
        let name = self.name.ok_or(Violation::missing(Field::Name))?;
        let number = self.number.ok_or(Violation::missing(Field::Number))?;
        let contact = Contact {
            name,
            number,
            address: self.address,
            email: self.email,
        };
        contact.validate()?;
        Ok(contact)
    }
}

pub fn parse_record(line: &str) -> Result<ContactRecord, CoreError> {
    let parts: Vec<&str> = line.split(',').collect();
    let [name, number, address, email] = parts.as_slice() else {
        return Err(CoreError::FieldCount(parts.len()));
    };
    Ok(ContactRecord {
        name: normalize_name(name),
        number: normalize_text(number),
        address: normalize_text(address),
        email: normalize_email(email),
    })
}

#[cfg(test)]
mod tests {
    use super::{parse_record, ContactRecord};
    use crate::domain::{Field, Violation};
    use crate::error::CoreError;

    #[test]
    fn parse_record_maps_blank_fields_to_absent() {
        let record = parse_record("Jon Carl,032566778,,joncarl@email.com").expect("parse");
        assert_eq!(
            record,
            ContactRecord {
                name: Some("jon carl".to_string()),
                number: Some("032566778".to_string()),
                address: None,
                email: Some("joncarl@email.com".to_string()),
            }
        );
    }

    #[test]
    fn parse_record_rejects_wrong_field_count() {
        assert_eq!(
            parse_record("Jon Carl,032566778"),
            Err(CoreError::FieldCount(2))
        );
        assert_eq!(parse_record("a,b,c,d,e"), Err(CoreError::FieldCount(5)));
        assert_eq!(parse_record(""), Err(CoreError::FieldCount(1)));
    }

    #[test]
    fn parse_record_accepts_all_blank_fields() {
        let record = parse_record(",,,").expect("parse");
        assert_eq!(record, ContactRecord::default());
    }

    #[test]
    fn into_contact_reports_missing_required_fields() {
        let record = parse_record(",,,").expect("parse");
        assert_eq!(record.into_contact(), Err(Violation::missing(Field::Name)));

        let record = parse_record("Ada,,London,").expect("parse");
        assert_eq!(
            record.into_contact(),
            Err(Violation::missing(Field::Number))
        );
    }

    #[test]
    fn into_contact_keeps_optional_fields() {
        let contact = parse_record("Ada, 555-0100 , 12 Main St ,")
            .expect("parse")
            .into_contact()
            .expect("contact");
        assert_eq!(contact.name, "ada");
        assert_eq!(contact.number, "555-0100");
        assert_eq!(contact.address.as_deref(), Some("12 Main St"));
        assert!(contact.email.is_none());
    }
}
