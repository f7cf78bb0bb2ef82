mod brand;
pub mod format;
mod validate;

use std::{str::FromStr, sync::LazyLock};

pub use brand::{max_security_code_length, CardBrand};
use common_utils::errors;
use error_stack::report;
#[cfg(not(target_arch = "wasm32"))]
use form_env::logger;
use masking::{PeekInterface, Secret, StrongSecret};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
pub use validate::*;

/// Fewest digits a security code may carry.
pub const MIN_CARD_SECURITY_CODE_LENGTH: usize = 3;

/// Card security code (CVV / CVC) as typed by the cardholder.
///
/// Only a lower bound is checked here. The brand specific upper bound is enforced while the
/// code is being typed, see [`format::format_cvv`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CardSecurityCode(StrongSecret<String>);

impl CardSecurityCode {
    pub fn new(secret: StrongSecret<String>) -> errors::CustomResult<Self, errors::ValidationError> {
        let csc = secret.peek();

        if csc.is_empty() {
            Err(report!(errors::ValidationError::MissingRequiredField {
                field_name: "cvv".to_string()
            }))
        } else if csc.chars().count() >= MIN_CARD_SECURITY_CODE_LENGTH {
            Ok(Self(secret))
        } else {
            Err(report!(errors::ValidationError::InvalidValue {
                message: "invalid card security code".to_string()
            }))
        }
    }
}

impl TryFrom<String> for CardSecurityCode {
    type Error = error_stack::Report<errors::ValidationError>;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(StrongSecret::new(value))
    }
}

impl<'de> Deserialize<'de> for CardSecurityCode {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let csc = String::deserialize(d)?;
        Self::try_from(csc).map_err(|err| serde::de::Error::custom(err.current_context()))
    }
}

/// Card expiry in the `MM/YY` shape produced by [`format::format_expiry_date`].
///
/// The month is not range checked and the date is not compared with today.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CardExpiration(Secret<String>);

static EXPIRY_DATE_REGEX: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{2}/[0-9]{2}$")
        .map_err(|_error| {
            #[cfg(not(target_arch = "wasm32"))]
            logger::error!(?_error, "expiry date regex failed to compile");
        })
        .ok()
});

impl CardExpiration {
    pub fn new(secret: Secret<String>) -> errors::CustomResult<Self, errors::ValidationError> {
        let expiry = secret.peek();

        if expiry.is_empty() {
            return Err(report!(errors::ValidationError::MissingRequiredField {
                field_name: "expiry_date".to_string()
            }));
        }

        let well_formed = EXPIRY_DATE_REGEX
            .as_ref()
            .is_some_and(|regex| regex.is_match(expiry));

        if well_formed {
            Ok(Self(secret))
        } else {
            Err(report!(errors::ValidationError::InvalidValue {
                message: "invalid card expiration date".to_string()
            }))
        }
    }

    /// Two digit month, as typed.
    pub fn get_month(&self) -> &str {
        self.0.peek().get(..2).unwrap_or_default()
    }

    /// Two digit year, as typed.
    pub fn get_year(&self) -> &str {
        self.0.peek().get(3..).unwrap_or_default()
    }
}

impl FromStr for CardExpiration {
    type Err = error_stack::Report<errors::ValidationError>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(Secret::new(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for CardExpiration {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let expiry = String::deserialize(d)?;
        Self::from_str(&expiry).map_err(|err| serde::de::Error::custom(err.current_context()))
    }
}

impl PeekInterface<StrongSecret<String>> for CardSecurityCode {
    fn peek(&self) -> &StrongSecret<String> {
        &self.0
    }
}

impl PeekInterface<Secret<String>> for CardExpiration {
    fn peek(&self) -> &Secret<String> {
        &self.0
    }
}
