use std::{fmt, ops::RangeInclusive, str::FromStr};

#[cfg(not(target_arch = "wasm32"))]
use form_env::logger;
use masking::{PeekInterface, Strategy, StrongSecret, WithType};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::{format::clean_card_number, CardBrand};

/// Accepted number of characters in a card number once whitespace is removed.
pub const CARD_NUMBER_LENGTH_RANGE: RangeInclusive<usize> = 13..=19;

#[derive(Debug, Deserialize, Serialize, Error)]
#[error("not a valid credit card number")]
pub struct CCValError;

/// Card number, stored without whitespace.
///
/// Only the length is checked. The digits themselves are not verified, a number typed with
/// letters in it is still accepted when it has the right length.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct CardNumber(StrongSecret<String, CardNumberStrategy>);

impl CardNumber {
    /// Retrieves the card number as a String.
    pub fn get_card_no(&self) -> String {
        self.0.peek().clone()
    }

    /// Brand derived from the number's prefix.
    pub fn get_card_brand(&self) -> Option<CardBrand> {
        CardBrand::detect(self.0.peek())
    }
}

impl FromStr for CardNumber {
    type Err = CCValError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cc_no_whitespace = clean_card_number(s);

        if CARD_NUMBER_LENGTH_RANGE.contains(&cc_no_whitespace.chars().count()) {
            Ok(Self(StrongSecret::new(cc_no_whitespace)))
        } else {
            Err(CCValError)
        }
    }
}

impl TryFrom<String> for CardNumber {
    type Error = CCValError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(&value)
    }
}

impl<'de> Deserialize<'de> for CardNumber {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

pub enum CardNumberStrategy {}

impl<T> Strategy<T> for CardNumberStrategy
where
    T: AsRef<str>,
{
    fn fmt(val: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let val_str: &str = val.as_ref();

        if !CARD_NUMBER_LENGTH_RANGE.contains(&val_str.len()) {
            return WithType::fmt(val, f);
        }

        if let Some(value) = val_str.get(..6) {
            write!(f, "{}{}", value, "*".repeat(val_str.len() - 6))
        } else {
            #[cfg(not(target_arch = "wasm32"))]
            logger::error!("Invalid card number {}", "*".repeat(val_str.len()));
            WithType::fmt(val, f)
        }
    }
}
