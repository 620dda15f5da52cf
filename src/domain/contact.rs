use std::cmp::Ordering;
use std::fmt;

use super::*;
use serde::Serialize;

/// Number of fields in a persisted record: surname, name, phone.
pub const FIELDS_PER_RECORD: usize = 3;

/// One (surname, name, phone) record. Fields are fixed at construction;
/// editing a contact means removing it and adding a replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    surname: String,
    name: String,
    phone: String,
}

impl Contact {
    pub fn new(surname: String, name: String, phone: String) -> Result<Self, AppError> {
        match surname.chars().next() {
            None => {
                return Err(AppError::InvalidSurname("surname is empty".to_string()));
            }
            Some(first) if !first.is_ascii_alphabetic() => {
                return Err(AppError::InvalidSurname(format!(
                    "surname must start with a letter, got '{first}'"
                )));
            }
            Some(_) => {}
        }

        if name.is_empty() {
            return Err(AppError::MalformedRecord("name is empty".to_string()));
        }
        if phone.is_empty() {
            return Err(AppError::MalformedRecord("phone is empty".to_string()));
        }

        Ok(Contact {
            surname,
            name,
            phone,
        })
    }

    /// Builds a contact from a split record line. A record with the wrong
    /// field count is rejected whole, never truncated to fit.
    pub fn from_fields(fields: &[String]) -> Result<Self, AppError> {
        if fields.len() != FIELDS_PER_RECORD {
            return Err(AppError::MalformedRecord(format!(
                "expected {FIELDS_PER_RECORD} fields, got {}",
                fields.len()
            )));
        }

        Contact::new(fields[0].clone(), fields[1].clone(), fields[2].clone())
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.surname, self.name, self.phone)
    }
}

// Contacts order by surname alone, case-sensitive. Ties between equal
// surnames are left to the stable sort in the directory.
impl Ord for Contact {
    fn cmp(&self, other: &Self) -> Ordering {
        self.surname.cmp(&other.surname)
    }
}

impl PartialOrd for Contact {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
