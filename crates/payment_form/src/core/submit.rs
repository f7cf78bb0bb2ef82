//! Hand-off of validated payment data to the caller's submit collaborator.

use crate::{core::errors::ErrorMap, types::PaymentData};

/// Receives the payment data of every successful submission.
///
/// The engine awaits the call without a timeout and does not retry it. Whatever the
/// collaborator returns is passed back to the caller as is.
#[async_trait::async_trait]
pub trait PaymentSubmitter: Send + Sync {
    type Output: Send;

    async fn submit(&self, payment_data: PaymentData) -> Self::Output;
}

/// Adapts a synchronous closure into a [`PaymentSubmitter`].
#[derive(Clone, Debug)]
pub struct FnSubmitter<F>(pub F);

#[async_trait::async_trait]
impl<F, T> PaymentSubmitter for FnSubmitter<F>
where
    F: Fn(PaymentData) -> T + Send + Sync,
    T: Send,
{
    type Output = T;

    async fn submit(&self, payment_data: PaymentData) -> Self::Output {
        (self.0)(payment_data)
    }
}

/// Progress of the current submission attempt.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, strum::Display)]
pub enum SubmissionState {
    /// No attempt in progress.
    #[default]
    Idle,
    /// The active method is being validated.
    Validating,
    /// Payment data was built and is with the collaborator.
    Submitted,
}

impl SubmissionState {
    /// Whether the collaborator call has not returned yet.
    pub fn is_pending(self) -> bool {
        self == Self::Submitted
    }
}

/// Result of a submission attempt.
#[derive(Debug)]
pub enum SubmitOutcome<T> {
    /// Validation failed, nothing was handed to the collaborator.
    Rejected(ErrorMap),
    /// The collaborator was called once and returned this.
    Submitted(T),
}

impl<T> SubmitOutcome<T> {
    pub fn is_submitted(&self) -> bool {
        matches!(self, Self::Submitted(_))
    }

    pub fn errors(&self) -> Option<&ErrorMap> {
        match self {
            Self::Rejected(errors) => Some(errors),
            Self::Submitted(_) => None,
        }
    }

    pub fn into_output(self) -> Option<T> {
        match self {
            Self::Submitted(output) => Some(output),
            Self::Rejected(_) => None,
        }
    }
}
