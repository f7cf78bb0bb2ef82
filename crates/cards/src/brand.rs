use std::sync::LazyLock;

#[cfg(not(target_arch = "wasm32"))]
use form_env::logger;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::format::clean_card_number;

/// Card network identified from the leading digits of a card number.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    Deserialize,
    Serialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum CardBrand {
    Visa,
    Mastercard,
    Amex,
    Discover,
    #[serde(rename = "JCB")]
    #[strum(serialize = "JCB")]
    Jcb,
}

// Order matters, the first matching prefix wins.
static CARD_BRAND_PREFIXES: LazyLock<Vec<(CardBrand, Result<Regex, regex::Error>)>> =
    LazyLock::new(|| {
        vec![
            (CardBrand::Visa, Regex::new(r"^4")),
            (CardBrand::Mastercard, Regex::new(r"^5[1-5]")),
            (CardBrand::Amex, Regex::new(r"^3[47]")),
            (CardBrand::Discover, Regex::new(r"^6(?:011|5)")),
            (CardBrand::Jcb, Regex::new(r"^35")),
        ]
    });

impl CardBrand {
    /// Detect the brand of a (possibly space separated) card number from its prefix.
    ///
    /// Returns `None` when no known prefix matches, including for an empty number.
    pub fn detect(card_number: &str) -> Option<Self> {
        let cleaned = clean_card_number(card_number);

        CARD_BRAND_PREFIXES
            .iter()
            .find_map(|(brand, regex)| match regex {
                Ok(regex) => regex.is_match(&cleaned).then_some(*brand),
                Err(_error) => {
                    #[cfg(not(target_arch = "wasm32"))]
                    logger::error!(?_error, %brand, "card brand regex failed to compile");
                    None
                }
            })
    }

    /// Number of digits the security code of this brand carries.
    pub fn security_code_length(self) -> usize {
        match self {
            Self::Amex => 4,
            Self::Visa | Self::Mastercard | Self::Discover | Self::Jcb => 3,
        }
    }
}

/// Maximum security code length for an optional brand, 3 when no brand is detected.
pub fn max_security_code_length(brand: Option<CardBrand>) -> usize {
    brand.map_or(crate::MIN_CARD_SECURITY_CODE_LENGTH, CardBrand::security_code_length)
}
