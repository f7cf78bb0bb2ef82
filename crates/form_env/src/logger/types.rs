//! Types.

use serde::Deserialize;
use strum::{Display, EnumString};

/// Category and tag of log event.
///
/// Don't hesitate to add your variant if it is missing here.
#[derive(Debug, Default, Deserialize, Clone, Copy, Display, EnumString, PartialEq, Eq)]
pub enum Tag {
    /// General.
    #[default]
    General,
    /// Keystroke level change of a form field.
    FieldChange,
    /// Validation of the active payment method.
    Validation,
    /// Payment data handed to the submit collaborator.
    Submission,
}

/// Payment form flow
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// A payment method tab was selected.
    PaymentMethodSelect,
    /// A form field was edited.
    PaymentFieldUpdate,
    /// The form was submitted.
    PaymentSubmit,
    /// The form was reset.
    PaymentFormReset,
}
