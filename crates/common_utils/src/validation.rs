//! Custom validations for some shared types.

#![deny(clippy::invalid_regex)]

use std::sync::LazyLock;

use error_stack::report;
#[cfg(feature = "logs")]
use form_env::logger;
use regex::Regex;

use crate::{
    consts,
    errors::{CustomResult, ValidationError},
};

/// Performs a shape check of a UPI virtual payment address (`username@bank`).
///
/// Exactly one `@` is accepted, with one or more ASCII word characters, dots or hyphens on
/// both sides of it. No handle allow-list is consulted.
pub fn validate_upi_vpa(upi_id: &str) -> CustomResult<(), ValidationError> {
    static UPI_VPA_REGEX: LazyLock<Option<Regex>> = LazyLock::new(|| {
        #[allow(unknown_lints)]
        #[allow(clippy::manual_ok_err)]
        match Regex::new(consts::UPI_VPA_PATTERN) {
            Ok(regex) => Some(regex),
            Err(_error) => {
                #[cfg(feature = "logs")]
                logger::error!(?_error);
                None
            }
        }
    });
    let upi_vpa_regex = match UPI_VPA_REGEX.as_ref() {
        Some(regex) => Ok(regex),
        None => Err(report!(ValidationError::InvalidValue {
            message: "Invalid regex expression".into()
        })),
    }?;

    if upi_id.is_empty() {
        return Err(report!(ValidationError::MissingRequiredField {
            field_name: "upi_id".into()
        }));
    }

    if !upi_vpa_regex.is_match(upi_id) {
        return Err(report!(ValidationError::InvalidValue {
            message: "Invalid UPI id format".into()
        }));
    }

    Ok(())
}
