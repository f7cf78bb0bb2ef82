#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::{Arc, Mutex};

use payment_form::{
    FieldName, FnSubmitter, PaymentData, PaymentMethod, PaymentSession, PaymentSubmitter,
    SubmissionState, SubmitOutcome,
};
use tokio::sync::mpsc;

/// Records every payment data it receives.
#[derive(Default)]
struct RecordingSubmitter {
    received: Mutex<Vec<PaymentData>>,
}

#[async_trait::async_trait]
impl PaymentSubmitter for RecordingSubmitter {
    type Output = usize;

    async fn submit(&self, payment_data: PaymentData) -> Self::Output {
        let mut received = self.received.lock().unwrap();
        received.push(payment_data);
        received.len()
    }
}

fn fill_card(session: &mut PaymentSession) {
    session.on_card_number_change("4111111111111111");
    session.on_cardholder_name_change("John Doe");
    session.on_expiry_date_change("1225");
    session.on_cvv_change("123");
}

#[tokio::test]
async fn valid_card_is_submitted_once_with_card_data_only() {
    let mut session = PaymentSession::default();
    let submitter = RecordingSubmitter::default();

    session.select_method(PaymentMethod::Upi);
    session.on_upi_id_change("john.doe@okaxis");
    session.select_method(PaymentMethod::Card);
    fill_card(&mut session);

    let outcome = session.submit(&submitter).await;
    assert_eq!(outcome.into_output(), Some(1));

    let received = submitter.received.lock().unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(
        serde_json::to_value(&received[0]).unwrap(),
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
}

#[tokio::test]
async fn invalid_form_is_not_submitted() {
    let mut session = PaymentSession::default();
    let submitter = RecordingSubmitter::default();

    session.on_card_number_change("4111 1111 1111");
    session.on_cardholder_name_change("John Doe");
    session.on_expiry_date_change("12");
    session.on_cvv_change("12");

    let outcome = session.submit(&submitter).await;

    let errors = outcome.errors().expect("submission should be rejected");
    assert_eq!(
        errors.message(FieldName::CardNumber),
        Some("Invalid card number")
    );
    assert_eq!(
        errors.message(FieldName::ExpiryDate),
        Some("Invalid format (MM/YY)")
    );
    assert_eq!(errors.message(FieldName::Cvv), Some("Invalid CVV"));
    assert_eq!(errors.message(FieldName::CardholderName), None);
    assert!(submitter.received.lock().unwrap().is_empty());

    // Values are kept so they can be corrected.
    assert_eq!(session.card().card_number(), "4111 1111 1111");
}

#[tokio::test]
async fn editing_a_field_clears_only_its_error() {
    let mut session = PaymentSession::default();
    let submitter = RecordingSubmitter::default();

    let outcome = session.submit(&submitter).await;
    assert!(!outcome.is_submitted());
    assert_eq!(session.errors().len(), 4);

    // Still invalid, the error is cleared anyway and not recomputed.
    session.on_card_number_change("4");
    assert_eq!(session.error_message(FieldName::CardNumber), None);
    assert_eq!(
        session.error_message(FieldName::Cvv),
        Some("CVV is required")
    );
    assert_eq!(session.errors().len(), 3);
}

#[tokio::test]
async fn every_card_field_clears_its_own_error() {
    let mut session = PaymentSession::default();
    let submitter = RecordingSubmitter::default();
    session.submit(&submitter).await;

    let edits: [(FieldName, fn(&mut PaymentSession)); 4] = [
        (FieldName::CardNumber, |session| session.on_card_number_change("4")),
        (FieldName::CardholderName, |session| {
            session.on_cardholder_name_change("J")
        }),
        (FieldName::ExpiryDate, |session| session.on_expiry_date_change("1")),
        (FieldName::Cvv, |session| session.on_cvv_change("1")),
    ];

    for (remaining, (field, edit)) in (0..edits.len()).rev().zip(edits) {
        assert!(session.error_message(field).is_some(), "{field}");
        edit(&mut session);
        assert_eq!(session.error_message(field), None, "{field}");
        assert_eq!(session.errors().len(), remaining);
    }
}

#[tokio::test]
async fn upi_id_and_bank_edits_clear_their_errors() {
    let submitter = RecordingSubmitter::default();

    let mut session = PaymentSession::default();
    session.select_method(PaymentMethod::Upi);
    session.submit(&submitter).await;
    assert_eq!(
        session.error_message(FieldName::UpiId),
        Some("UPI ID is required")
    );
    session.on_upi_id_change("john");
    assert!(session.errors().is_empty());

    session.select_method(PaymentMethod::NetBanking);
    session.submit(&submitter).await;
    assert_eq!(
        session.error_message(FieldName::SelectedBank),
        Some("Please select a bank")
    );
    session.on_bank_change("Canara Bank");
    assert!(session.errors().is_empty());
    assert!(submitter.received.lock().unwrap().is_empty());
}

#[tokio::test]
async fn switching_method_clears_errors_and_keeps_values() {
    let mut session = PaymentSession::default();
    let submitter = RecordingSubmitter::default();

    session.on_card_number_change("4111");
    session.submit(&submitter).await;
    assert!(!session.errors().is_empty());

    session.select_tab(1);
    assert!(session.errors().is_empty());

    session.select_method(PaymentMethod::Card);
    assert_eq!(session.card().card_number(), "4111");
}

#[tokio::test]
async fn only_the_active_method_is_validated() {
    let mut session = PaymentSession::default();
    let submitter = RecordingSubmitter::default();

    session.on_card_number_change("12");
    session.select_method(PaymentMethod::Upi);
    session.on_upi_id_change("user_1@ybl");

    let outcome = session.submit(&submitter).await;
    assert!(outcome.is_submitted());

    let received = submitter.received.lock().unwrap();
    assert_eq!(
        serde_json::to_value(&received[0]).unwrap(),
        serde_json::json!({"method": "upi", "upiData": {"upiId": "user_1@ybl"}})
    );
}

#[tokio::test]
async fn form_is_reset_after_submission() {
    let mut session = PaymentSession::default();
    let submitter = RecordingSubmitter::default();

    session.select_method(PaymentMethod::NetBanking);
    session.on_bank_change("HDFC Bank");
    session.on_upi_id_change("john@okaxis");
    fill_card(&mut session);

    assert!(session.submit(&submitter).await.is_submitted());

    assert_eq!(session.method(), PaymentMethod::Card);
    assert_eq!(session.card().card_number(), "");
    assert_eq!(session.card().cardholder_name(), "");
    assert_eq!(session.card().expiry_date(), "");
    assert_eq!(session.card().cvv(), "");
    assert_eq!(session.upi().upi_id(), "");
    assert_eq!(session.netbanking().selected_bank(), "");
    assert_eq!(session.submission_state(), SubmissionState::Idle);
}

#[tokio::test]
async fn loading_flag_does_not_block_submission() {
    let mut session = PaymentSession::default();
    let submitter = RecordingSubmitter::default();

    session.set_loading(true);
    fill_card(&mut session);

    assert!(!session.is_submit_enabled());
    assert!(session.submit(&submitter).await.is_submitted());
    assert_eq!(submitter.received.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn collaborator_output_is_returned_as_is() {
    let mut session = PaymentSession::default();
    let submitter = FnSubmitter(|payment_data: PaymentData| -> Result<String, String> {
        match payment_data {
            PaymentData::NetBanking { netbanking_data } => Err(netbanking_data.bank_name),
            other => Ok(other.method().to_string()),
        }
    });

    session.select_method(PaymentMethod::NetBanking);
    session.on_bank_change("Yes Bank");

    let outcome = session.submit(&submitter).await;
    assert!(matches!(
        outcome,
        SubmitOutcome::Submitted(Err(ref bank)) if bank == "Yes Bank"
    ));
}

#[tokio::test]
async fn pending_state_is_visible_while_the_collaborator_runs() {
    let mut session = PaymentSession::default();
    fill_card(&mut session);

    let (sender, mut receiver) = mpsc::unbounded_channel();
    let submitter = Arc::new(FnSubmitter(move |payment_data: PaymentData| {
        sender.send(payment_data).is_ok()
    }));

    let payment_data = session.begin_submission().unwrap();
    assert_eq!(session.submission_state(), SubmissionState::Submitted);
    assert!(session.submission_state().is_pending());

    let handle = tokio::spawn({
        let submitter = Arc::clone(&submitter);
        async move { submitter.submit(payment_data).await }
    });
    assert!(handle.await.unwrap());
    session.complete_submission();

    let received = receiver.recv().await.unwrap();
    assert_eq!(received.method(), PaymentMethod::Card);
    assert_eq!(session.submission_state(), SubmissionState::Idle);
    assert_eq!(session.card().card_number(), "");
}
