//! Values held by a payment form session and the record it submits.

use cards::{CardBrand, CardExpiration, CardNumber, CardNumberStrategy, CardSecurityCode};
use common_utils::pii::UpiVpaMaskingStrategy;
use masking::{PeekInterface, Secret, StrongSecret};
use serde::{Deserialize, Serialize};

use crate::consts;

/// Payment method offered as a tab of the form.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
    Deserialize,
    Serialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Card,
    Upi,
    NetBanking,
}

impl PaymentMethod {
    /// Position of the method's tab, card first.
    pub fn tab_index(self) -> usize {
        match self {
            Self::Card => 0,
            Self::Upi => 1,
            Self::NetBanking => 2,
        }
    }

    pub fn from_tab_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Card),
            1 => Some(Self::Upi),
            2 => Some(Self::NetBanking),
            _ => None,
        }
    }

    /// Fields belonging to this method, in display order.
    pub fn fields(self) -> &'static [FieldName] {
        match self {
            Self::Card => &[
                FieldName::CardNumber,
                FieldName::CardholderName,
                FieldName::ExpiryDate,
                FieldName::Cvv,
            ],
            Self::Upi => &[FieldName::UpiId],
            Self::NetBanking => &[FieldName::SelectedBank],
        }
    }

    /// Label of the submit action, which reads "Processing..." while loading.
    pub fn submit_label(self, loading: bool) -> &'static str {
        if loading {
            return consts::SUBMIT_LABEL_LOADING;
        }

        match self {
            Self::Card => consts::SUBMIT_LABEL_CARD,
            Self::Upi => consts::SUBMIT_LABEL_UPI,
            Self::NetBanking => consts::SUBMIT_LABEL_NETBANKING,
        }
    }
}

/// Name of a form field, used as key of the error map.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Deserialize,
    Serialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum FieldName {
    CardNumber,
    CardholderName,
    ExpiryDate,
    Cvv,
    UpiId,
    SelectedBank,
}

impl FieldName {
    pub fn method(self) -> PaymentMethod {
        match self {
            Self::CardNumber | Self::CardholderName | Self::ExpiryDate | Self::Cvv => {
                PaymentMethod::Card
            }
            Self::UpiId => PaymentMethod::Upi,
            Self::SelectedBank => PaymentMethod::NetBanking,
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::CardNumber => consts::CARD_NUMBER_PLACEHOLDER,
            Self::CardholderName => consts::CARDHOLDER_NAME_PLACEHOLDER,
            Self::ExpiryDate => consts::EXPIRY_DATE_PLACEHOLDER,
            Self::Cvv => consts::CVV_PLACEHOLDER,
            Self::UpiId => consts::UPI_ID_PLACEHOLDER,
            Self::SelectedBank => consts::BANK_PLACEHOLDER,
        }
    }
}

/// Card tab as currently displayed.
///
/// The brand is not stored, it is always derived from the card number.
#[derive(Clone, Debug, Default)]
pub struct CardFields {
    pub(crate) card_number: Secret<String, CardNumberStrategy>,
    pub(crate) cardholder_name: Secret<String>,
    pub(crate) expiry_date: String,
    pub(crate) cvv: StrongSecret<String>,
}

impl CardFields {
    /// Card number with its grouping spaces.
    pub fn card_number(&self) -> &str {
        self.card_number.peek()
    }

    pub fn cardholder_name(&self) -> &str {
        self.cardholder_name.peek()
    }

    /// Expiry date in its `MM/YY` mask.
    pub fn expiry_date(&self) -> &str {
        &self.expiry_date
    }

    pub fn cvv(&self) -> &str {
        self.cvv.peek()
    }

    pub fn detected_brand(&self) -> Option<CardBrand> {
        CardBrand::detect(self.card_number.peek())
    }
}

/// UPI tab as currently displayed.
#[derive(Clone, Debug, Default)]
pub struct UpiFields {
    pub(crate) upi_id: Secret<String, UpiVpaMaskingStrategy>,
}

impl UpiFields {
    pub fn upi_id(&self) -> &str {
        self.upi_id.peek()
    }
}

/// Net banking tab as currently displayed.
#[derive(Clone, Debug, Default)]
pub struct NetBankingFields {
    pub(crate) selected_bank: String,
}

impl NetBankingFields {
    pub fn selected_bank(&self) -> &str {
        &self.selected_bank
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardPaymentData {
    /// Digits only, the grouping spaces are removed.
    pub card_number: CardNumber,
    pub cardholder_name: Secret<String>,
    pub expiry_date: CardExpiration,
    pub cvv: CardSecurityCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_type: Option<CardBrand>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpiPaymentData {
    pub upi_id: Secret<String, UpiVpaMaskingStrategy>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetbankingPaymentData {
    pub bank_name: String,
}

/// Record handed to the submit collaborator, carrying the active method's data only.
///
/// Serializes as `{"method": "card", "cardData": {..}}`, `{"method": "upi", "upiData": {..}}`
/// or `{"method": "netbanking", "netbankingData": {..}}`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "method", rename_all = "lowercase")]
pub enum PaymentData {
    Card {
        #[serde(rename = "cardData")]
        card_data: CardPaymentData,
    },
    Upi {
        #[serde(rename = "upiData")]
        upi_data: UpiPaymentData,
    },
    NetBanking {
        #[serde(rename = "netbankingData")]
        netbanking_data: NetbankingPaymentData,
    },
}

impl PaymentData {
    pub fn method(&self) -> PaymentMethod {
        match self {
            Self::Card { .. } => PaymentMethod::Card,
            Self::Upi { .. } => PaymentMethod::Upi,
            Self::NetBanking { .. } => PaymentMethod::NetBanking,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn tab_index_round_trips() {
        for method in PaymentMethod::iter() {
            assert_eq!(PaymentMethod::from_tab_index(method.tab_index()), Some(method));
        }
        assert_eq!(PaymentMethod::from_tab_index(3), None);
    }

    #[test]
    fn method_names() {
        assert_eq!(PaymentMethod::NetBanking.to_string(), "netbanking");
        assert_eq!(PaymentMethod::from_str("upi").unwrap(), PaymentMethod::Upi);
        assert_eq!(
            serde_json::to_string(&PaymentMethod::NetBanking).unwrap(),
            r#""netbanking""#
        );
    }

    #[test]
    fn field_names_are_camel_case() {
        assert_eq!(FieldName::CardholderName.to_string(), "cardholderName");
        assert_eq!(FieldName::SelectedBank.to_string(), "selectedBank");
        assert_eq!(serde_json::to_string(&FieldName::UpiId).unwrap(), r#""upiId""#);
    }

    #[test]
    fn every_field_belongs_to_the_method_listing_it() {
        for method in PaymentMethod::iter() {
            for field in method.fields() {
                assert_eq!(field.method(), method);
            }
        }
    }

    #[test]
    fn submit_labels() {
        assert_eq!(PaymentMethod::Card.submit_label(false), "Pay Now");
        assert_eq!(PaymentMethod::Upi.submit_label(false), "Pay with UPI");
        assert_eq!(PaymentMethod::NetBanking.submit_label(false), "Proceed to Bank");
        assert_eq!(PaymentMethod::Upi.submit_label(true), "Processing...");
    }

    #[test]
    fn card_payment_data_shape() {
        let payment_data = PaymentData::Card {
            card_data: CardPaymentData {
                card_number: CardNumber::from_str("4111 1111 1111 1111").unwrap(),
                cardholder_name: Secret::new("John Doe".to_string()),
                expiry_date: CardExpiration::from_str("12/25").unwrap(),
                cvv: CardSecurityCode::try_from("123".to_string()).unwrap(),
                card_type: Some(CardBrand::Visa),
            },
        };

        let json = serde_json::to_value(&payment_data).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "method": "card",
                "cardData": {
                    "cardNumber": "4111111111111111",
                    "cardholderName": "John Doe",
                    "expiryDate": "12/25",
                    "cvv": "123",
                    "cardType": "Visa",
                }
            })
        );

        let parsed: PaymentData = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, payment_data);
    }

    #[test]
    fn upi_and_netbanking_payment_data_shape() {
        let upi = PaymentData::Upi {
            upi_data: UpiPaymentData {
                upi_id: Secret::new("john.doe@okaxis".to_string()),
            },
        };
        assert_eq!(
            serde_json::to_value(&upi).unwrap(),
            serde_json::json!({"method": "upi", "upiData": {"upiId": "john.doe@okaxis"}})
        );

        let netbanking = PaymentData::NetBanking {
            netbanking_data: NetbankingPaymentData {
                bank_name: "HDFC Bank".to_string(),
            },
        };
        assert_eq!(
            serde_json::to_value(&netbanking).unwrap(),
            serde_json::json!({"method": "netbanking", "netbankingData": {"bankName": "HDFC Bank"}})
        );
        assert_eq!(netbanking.method(), PaymentMethod::NetBanking);
    }

    #[test]
    fn debug_output_masks_card_details() {
        let card_data = CardPaymentData {
            card_number: CardNumber::from_str("4111111111111111").unwrap(),
            cardholder_name: Secret::new("John Doe".to_string()),
            expiry_date: CardExpiration::from_str("12/25").unwrap(),
            cvv: CardSecurityCode::try_from("987".to_string()).unwrap(),
            card_type: Some(CardBrand::Visa),
        };

        let debug = format!("{card_data:?}");
        assert!(debug.contains("411111**********"));
        assert!(!debug.contains("4111111111111111"));
        assert!(!debug.contains("987"));
        assert!(!debug.contains("John Doe"));
    }
}
