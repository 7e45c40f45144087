use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, ValidationKind};

/// One seat's cell pair for one round, kept as entered. An empty string is
/// "not entered yet", which is distinct from `"0"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Entry {
    pub bet: String,
    pub result: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryField {
    Bet,
    Result,
}

impl Entry {
    pub fn get(&self, field: EntryField) -> &str {
        match field {
            EntryField::Bet => &self.bet,
            EntryField::Result => &self.result,
        }
    }

    pub fn set(&mut self, field: EntryField, value: String) {
        match field {
            EntryField::Bet => self.bet = value,
            EntryField::Result => self.result = value,
        }
    }
}

/// Normalise a value typed into a cell: empty, or exactly one digit 0-9.
pub fn validate_cell(value: &str) -> Result<String, DomainError> {
    let trimmed = value.trim();
    let mut chars = trimmed.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Ok(String::new()),
        (Some(c), None) if c.is_ascii_digit() => Ok(trimmed.to_string()),
        _ => Err(DomainError::validation(
            ValidationKind::InvalidCell,
            format!("cell value must be empty or a single digit 0-9, got {value:?}"),
        )),
    }
}
