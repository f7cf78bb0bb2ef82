use std::collections::{btree_map, BTreeMap};

use serde::{Deserialize, Serialize};

use crate::types::FieldName;

pub type ApplicationResult<T> = error_stack::Result<T, ApplicationError>;

#[derive(Debug, thiserror::Error)]
pub enum ApplicationError {
    #[error("Application configuration error")]
    ConfigurationError,

    #[error("Invalid configuration value provided: {0}")]
    InvalidConfigurationValueError(String),
}

/// Why a field failed validation.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FieldErrorKind {
    /// The field is empty.
    MissingField,
    /// The field has a value of the wrong shape.
    InvalidFormat,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct FieldError {
    pub kind: FieldErrorKind,
    pub message: &'static str,
}

impl FieldError {
    pub fn missing(message: &'static str) -> Self {
        Self {
            kind: FieldErrorKind::MissingField,
            message,
        }
    }

    pub fn invalid(message: &'static str) -> Self {
        Self {
            kind: FieldErrorKind::InvalidFormat,
            message,
        }
    }
}

/// Messages of the fields that failed the last validation, keyed by field name.
///
/// A field without an entry has no error. Entries are dropped as soon as their field is edited,
/// so the map only ever shrinks between two submissions.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ErrorMap(BTreeMap<FieldName, FieldError>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error for `field`, replacing any earlier one.
    pub fn insert(&mut self, field: FieldName, error: FieldError) {
        self.0.insert(field, error);
    }

    /// Clears the error of `field`, returning it if there was one.
    pub fn remove(&mut self, field: FieldName) -> Option<FieldError> {
        self.0.remove(&field)
    }

    pub fn get(&self, field: FieldName) -> Option<&FieldError> {
        self.0.get(&field)
    }

    /// Message to render under `field`, if any.
    pub fn message(&self, field: FieldName) -> Option<&'static str> {
        self.0.get(&field).map(|error| error.message)
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, FieldName, FieldError> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a ErrorMap {
    type Item = (&'a FieldName, &'a FieldError);
    type IntoIter = btree_map::Iter<'a, FieldName, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn removing_a_missing_entry_is_a_no_op() {
        let mut errors = ErrorMap::new();
        errors.insert(FieldName::Cvv, FieldError::missing("CVV is required"));

        assert_eq!(errors.remove(FieldName::UpiId), None);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.remove(FieldName::Cvv).map(|error| error.kind),
            Some(FieldErrorKind::MissingField)
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn serializes_as_field_keyed_object() {
        let mut errors = ErrorMap::new();
        errors.insert(FieldName::Cvv, FieldError::invalid("Invalid CVV"));
        errors.insert(
            FieldName::CardNumber,
            FieldError::missing("Card number is required"),
        );

        assert_eq!(
            serde_json::to_value(&errors).unwrap(),
            serde_json::json!({
                "cardNumber": {"kind": "missing_field", "message": "Card number is required"},
                "cvv": {"kind": "invalid_format", "message": "Invalid CVV"},
            })
        );
    }

    #[test]
    fn iterates_in_field_order() {
        let mut errors = ErrorMap::new();
        errors.insert(FieldName::Cvv, FieldError::invalid("Invalid CVV"));
        errors.insert(
            FieldName::CardholderName,
            FieldError::missing("Cardholder name is required"),
        );

        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec![FieldName::CardholderName, FieldName::Cvv]
        );
    }
}
