//! Per-form session: field values, error map and submission progress.

use cards::{
    format::{format_card_number, format_cvv, format_expiry_date},
    CardBrand,
};
use form_env::logger::{self, Flow, Tag};
use masking::{Secret, StrongSecret};

use crate::{
    configs::settings::{PaymentFormConfig, UpiApp},
    consts,
    core::{
        errors::ErrorMap,
        submit::{PaymentSubmitter, SubmissionState, SubmitOutcome},
        validation::PaymentMethodValidator,
    },
    types::{CardFields, FieldName, NetBankingFields, PaymentData, PaymentMethod, UpiFields},
};

/// State of one payment form.
///
/// A session starts empty on the configured default method and changes only through the
/// `on_*_change` handlers, method selection and submission. Every handler clears the error of
/// the field it touches; nothing is re-validated before the next submission.
///
/// Values typed for a method stay around when another method is selected, but only the active
/// method is ever validated or submitted.
#[derive(Debug)]
pub struct PaymentSession {
    config: PaymentFormConfig,
    method: PaymentMethod,
    card: CardFields,
    upi: UpiFields,
    netbanking: NetBankingFields,
    errors: ErrorMap,
    loading: bool,
    submission: SubmissionState,
}

impl Default for PaymentSession {
    fn default() -> Self {
        Self::new(&PaymentFormConfig::default())
    }
}

impl PaymentSession {
    pub fn new(config: &PaymentFormConfig) -> Self {
        Self {
            config: config.clone(),
            method: config.default_method,
            card: CardFields::default(),
            upi: UpiFields::default(),
            netbanking: NetBankingFields::default(),
            errors: ErrorMap::new(),
            loading: false,
            submission: SubmissionState::Idle,
        }
    }

    pub fn method(&self) -> PaymentMethod {
        self.method
    }

    /// Switches the active method, dropping every error shown so far.
    pub fn select_method(&mut self, method: PaymentMethod) {
        logger::debug!(
            flow = %Flow::PaymentMethodSelect,
            tag = %Tag::General,
            from = %self.method,
            to = %method,
            "payment method selected"
        );
        self.method = method;
        self.errors.clear();
    }

    /// Selects the method shown on tab `index`. Unknown tabs are ignored.
    pub fn select_tab(&mut self, index: usize) {
        match PaymentMethod::from_tab_index(index) {
            Some(method) => self.select_method(method),
            None => logger::warn!(
                flow = %Flow::PaymentMethodSelect,
                index,
                "ignoring selection of unknown payment method tab"
            ),
        }
    }

    pub fn active_tab(&self) -> usize {
        self.method.tab_index()
    }

    fn field_changed(&mut self, field: FieldName) {
        if self.errors.remove(field).is_some() {
            logger::debug!(
                flow = %Flow::PaymentFieldUpdate,
                tag = %Tag::FieldChange,
                %field,
                "field error cleared"
            );
        }
    }

    /// Stores the card number grouped in fours, at most 19 characters.
    pub fn on_card_number_change(&mut self, raw: &str) {
        self.card.card_number = Secret::new(format_card_number(raw));
        self.field_changed(FieldName::CardNumber);
    }

    pub fn on_cardholder_name_change(&mut self, raw: &str) {
        self.card.cardholder_name = Secret::new(raw.to_string());
        self.field_changed(FieldName::CardholderName);
    }

    /// Stores the digits of the expiry date with a slash after the month.
    pub fn on_expiry_date_change(&mut self, raw: &str) {
        self.card.expiry_date = format_expiry_date(raw);
        self.field_changed(FieldName::ExpiryDate);
    }

    /// Stores the digits of the CVV, capped by the currently detected brand.
    ///
    /// A CVV stored earlier is not shortened when the brand later changes.
    pub fn on_cvv_change(&mut self, raw: &str) {
        self.card.cvv = StrongSecret::new(format_cvv(raw, self.card.detected_brand()));
        self.field_changed(FieldName::Cvv);
    }

    pub fn on_upi_id_change(&mut self, raw: &str) {
        self.upi.upi_id = Secret::new(raw.to_string());
        self.field_changed(FieldName::UpiId);
    }

    pub fn on_bank_change(&mut self, bank_name: &str) {
        self.netbanking.selected_bank = bank_name.to_string();
        self.field_changed(FieldName::SelectedBank);
    }

    pub fn card(&self) -> &CardFields {
        &self.card
    }

    pub fn card_brand(&self) -> Option<CardBrand> {
        self.card.detected_brand()
    }

    pub fn upi(&self) -> &UpiFields {
        &self.upi
    }

    pub fn netbanking(&self) -> &NetBankingFields {
        &self.netbanking
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn error_message(&self, field: FieldName) -> Option<&'static str> {
        self.errors.message(field)
    }

    /// Text under `field`: its error if it has one, otherwise its hint.
    pub fn helper_text(&self, field: FieldName) -> Option<&'static str> {
        self.errors.message(field).or(match field {
            FieldName::UpiId => Some(consts::UPI_ID_HELPER_TEXT),
            _ => None,
        })
    }

    /// Notice shown below the active method's fields.
    pub fn notice(&self) -> Option<&'static str> {
        match self.method {
            PaymentMethod::NetBanking => Some(consts::NETBANKING_REDIRECT_NOTICE),
            PaymentMethod::Card | PaymentMethod::Upi => None,
        }
    }

    pub fn banks(&self) -> &[String] {
        &self.config.banks
    }

    pub fn upi_apps(&self) -> &[UpiApp] {
        &self.config.upi_apps
    }

    /// Mirrors the caller's own in-flight flag. It only affects the submit action's label and
    /// whether it is enabled, submission itself does not look at it.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_submit_enabled(&self) -> bool {
        !self.loading
    }

    pub fn submit_label(&self) -> &'static str {
        self.method.submit_label(self.loading)
    }

    pub fn submission_state(&self) -> SubmissionState {
        self.submission
    }

    /// Validates the active method.
    ///
    /// On success the attempt is left in [`SubmissionState::Submitted`] until
    /// [`Self::complete_submission`] is called, and the record to hand over is returned. On
    /// failure the error map is replaced by the validation errors and the attempt goes back to
    /// [`SubmissionState::Idle`].
    pub fn begin_submission(&mut self) -> Result<PaymentData, ErrorMap> {
        if self.loading {
            logger::warn!(
                flow = %Flow::PaymentSubmit,
                "submitting while the caller reports a submission in flight"
            );
        }

        self.submission = SubmissionState::Validating;

        let validated = match self.method {
            PaymentMethod::Card => self.card.validate(),
            PaymentMethod::Upi => self.upi.validate(),
            PaymentMethod::NetBanking => {
                let bank_name = self.netbanking.selected_bank();
                if !bank_name.is_empty() && !self.config.is_known_bank(bank_name) {
                    logger::warn!(
                        flow = %Flow::PaymentSubmit,
                        tag = %Tag::Validation,
                        bank_name,
                        "bank is not in the configured bank list"
                    );
                }
                self.netbanking.validate()
            }
        };

        match validated {
            Ok(payment_data) => {
                self.errors.clear();
                self.submission = SubmissionState::Submitted;
                logger::info!(
                    flow = %Flow::PaymentSubmit,
                    tag = %Tag::Submission,
                    method = %self.method,
                    ?payment_data,
                    "payment data ready for submission"
                );
                Ok(payment_data)
            }
            Err(errors) => {
                let failed_fields = errors.fields().collect::<Vec<_>>();
                logger::info!(
                    flow = %Flow::PaymentSubmit,
                    tag = %Tag::Validation,
                    method = %self.method,
                    ?failed_fields,
                    "payment form validation failed"
                );
                self.errors = errors.clone();
                self.submission = SubmissionState::Idle;
                Err(errors)
            }
        }
    }

    /// Ends an accepted submission: every field is emptied and the default method selected.
    ///
    /// Does nothing unless a submission is pending, so values typed after a rejected attempt
    /// are kept.
    pub fn complete_submission(&mut self) {
        if !self.submission.is_pending() {
            logger::warn!(
                flow = %Flow::PaymentFormReset,
                state = %self.submission,
                "no pending submission to complete, keeping the form as is"
            );
            return;
        }

        logger::debug!(
            flow = %Flow::PaymentFormReset,
            tag = %Tag::General,
            "resetting payment form"
        );
        self.method = self.config.default_method;
        self.card = CardFields::default();
        self.upi = UpiFields::default();
        self.netbanking = NetBankingFields::default();
        self.errors.clear();
        self.submission = SubmissionState::Idle;
    }

    /// Validates the active method and, when it is valid, hands its record to `submitter` exactly
    /// once and resets the form.
    ///
    /// The session is borrowed for the whole call, a caller that needs to observe the pending
    /// state uses [`Self::begin_submission`] and [`Self::complete_submission`] directly.
    /// Concurrent submissions are the caller's concern.
    pub async fn submit<S>(&mut self, submitter: &S) -> SubmitOutcome<S::Output>
    where
        S: PaymentSubmitter + ?Sized,
    {
        match self.begin_submission() {
            Ok(payment_data) => {
                let output = submitter.submit(payment_data).await;
                self.complete_submission();
                SubmitOutcome::Submitted(output)
            }
            Err(errors) => SubmitOutcome::Rejected(errors),
        }
    }
}
