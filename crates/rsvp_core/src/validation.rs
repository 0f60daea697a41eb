//! Field predicates and the per-field error set surfaced by the form.

use std::{collections::BTreeMap, fmt};

use shared::protocol::GuestEntry;

/// Digits in a mobile number with area code: 2 + 9.
pub const PHONE_DIGITS: usize = 11;
pub const NAME_MAX_LEN: usize = 255;

pub const PHONE_INVALID_MESSAGE: &str = "Informe um número de celular válido, com DDD.";
pub const NAME_REQUIRED_MESSAGE: &str = "Informe o nome do convidado.";
pub const NAME_TOO_LONG_MESSAGE: &str = "O nome deve ter no máximo 255 caracteres.";

pub fn is_valid_phone(raw: &str) -> bool {
    raw.chars().filter(char::is_ascii_digit).count() == PHONE_DIGITS
}

pub fn is_valid_name(raw: &str) -> bool {
    name_error(raw).is_none()
}

fn name_error(raw: &str) -> Option<&'static str> {
    match raw.trim().chars().count() {
        0 => Some(NAME_REQUIRED_MESSAGE),
        len if len > NAME_MAX_LEN => Some(NAME_TOO_LONG_MESSAGE),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Phone,
    Person(usize),
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormField::Phone => f.write_str("phone"),
            FormField::Person(position) => write!(f, "people[{position}]"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    messages: BTreeMap<FormField, &'static str>,
}

impl FieldErrors {
    pub fn get(&self, field: FormField) -> Option<&'static str> {
        self.messages.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &'static str)> + '_ {
        self.messages
            .iter()
            .map(|(field, message)| (*field, *message))
    }

    pub(crate) fn insert(&mut self, field: FormField, message: &'static str) {
        self.messages.insert(field, message);
    }

    pub(crate) fn remove(&mut self, field: FormField) {
        self.messages.remove(&field);
    }

    pub(crate) fn clear_people(&mut self) {
        self.messages
            .retain(|field, _| !matches!(field, FormField::Person(_)));
    }

    pub(crate) fn clear(&mut self) {
        self.messages.clear();
    }
}

/// Checks the phone and every guest entry, collecting one message per bad field.
pub fn validate_fields(phone: &str, people: &[GuestEntry]) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();

    if !is_valid_phone(phone) {
        errors.insert(FormField::Phone, PHONE_INVALID_MESSAGE);
    }
    for (position, entry) in people.iter().enumerate() {
        if let Some(message) = name_error(&entry.value) {
            errors.insert(FormField::Person(position), message);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
