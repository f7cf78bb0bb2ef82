//! Submit-time validation of the active payment method.
//!
//! Validation never short-circuits: every failing field of the method gets an entry in the
//! returned [`ErrorMap`], and the [`PaymentData`] record is only built once the map is empty.

use std::str::FromStr;

use cards::{CardExpiration, CardNumber, CardSecurityCode};
use common_utils::{errors::ValidationError, validation::validate_upi_vpa};
use error_stack::Report;
use masking::{PeekInterface, Secret};

use crate::{
    consts,
    core::errors::{ErrorMap, FieldError},
    types::{
        CardFields, CardPaymentData, FieldName, NetBankingFields, NetbankingPaymentData,
        PaymentData, UpiFields, UpiPaymentData,
    },
};

/// Validation contract shared by the fields of every payment method.
pub trait PaymentMethodValidator {
    /// Builds the record to submit, or the errors of every invalid field.
    fn validate(&self) -> Result<PaymentData, ErrorMap>;

    /// Errors of the fields, empty when they are valid.
    fn error_map(&self) -> ErrorMap {
        self.validate().err().unwrap_or_default()
    }
}

/// Maps a field level validation failure onto the message shown for that field.
fn to_field_error(
    report: &Report<ValidationError>,
    missing: &'static str,
    invalid: &'static str,
) -> FieldError {
    match report.current_context() {
        ValidationError::MissingRequiredField { .. } => FieldError::missing(missing),
        ValidationError::InvalidValue { .. } => FieldError::invalid(invalid),
    }
}

impl PaymentMethodValidator for CardFields {
    fn validate(&self) -> Result<PaymentData, ErrorMap> {
        let mut errors = ErrorMap::new();

        let card_number = if self.card_number.peek().is_empty() {
            errors.insert(
                FieldName::CardNumber,
                FieldError::missing(consts::CARD_NUMBER_REQUIRED),
            );
            None
        } else {
            CardNumber::from_str(self.card_number.peek())
                .map_err(|_| {
                    errors.insert(
                        FieldName::CardNumber,
                        FieldError::invalid(consts::CARD_NUMBER_INVALID),
                    )
                })
                .ok()
        };

        // Presence is all that is checked, a name of blanks is accepted.
        if self.cardholder_name.peek().is_empty() {
            errors.insert(
                FieldName::CardholderName,
                FieldError::missing(consts::CARDHOLDER_NAME_REQUIRED),
            );
        }

        let expiry_date = CardExpiration::new(Secret::new(self.expiry_date.clone()))
            .map_err(|report| {
                errors.insert(
                    FieldName::ExpiryDate,
                    to_field_error(
                        &report,
                        consts::EXPIRY_DATE_REQUIRED,
                        consts::EXPIRY_DATE_INVALID,
                    ),
                )
            })
            .ok();

        let cvv = CardSecurityCode::new(self.cvv.clone())
            .map_err(|report| {
                errors.insert(
                    FieldName::Cvv,
                    to_field_error(&report, consts::CVV_REQUIRED, consts::CVV_INVALID),
                )
            })
            .ok();

        match (card_number, expiry_date, cvv) {
            (Some(card_number), Some(expiry_date), Some(cvv)) if errors.is_empty() => {
                let card_type = card_number.get_card_brand();
                Ok(PaymentData::Card {
                    card_data: CardPaymentData {
                        card_number,
                        cardholder_name: self.cardholder_name.clone(),
                        expiry_date,
                        cvv,
                        card_type,
                    },
                })
            }
            _ => Err(errors),
        }
    }
}

impl PaymentMethodValidator for UpiFields {
    fn validate(&self) -> Result<PaymentData, ErrorMap> {
        validate_upi_vpa(self.upi_id.peek())
            .map(|()| PaymentData::Upi {
                upi_data: UpiPaymentData {
                    upi_id: self.upi_id.clone(),
                },
            })
            .map_err(|report| {
                let mut errors = ErrorMap::new();
                errors.insert(
                    FieldName::UpiId,
                    to_field_error(&report, consts::UPI_ID_REQUIRED, consts::UPI_ID_INVALID),
                );
                errors
            })
    }
}

impl PaymentMethodValidator for NetBankingFields {
    fn validate(&self) -> Result<PaymentData, ErrorMap> {
        if self.selected_bank.is_empty() {
            let mut errors = ErrorMap::new();
            errors.insert(
                FieldName::SelectedBank,
                FieldError::missing(consts::BANK_REQUIRED),
            );
            return Err(errors);
        }

        Ok(PaymentData::NetBanking {
            netbanking_data: NetbankingPaymentData {
                bank_name: self.selected_bank.clone(),
            },
        })
    }
}
