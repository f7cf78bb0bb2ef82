#![forbid(unsafe_code)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR" ), "/", "README.md"))]

pub mod configs;
pub mod consts;
pub mod core;
pub mod types;

pub use crate::core::{
    errors::{ApplicationError, ErrorMap, FieldError, FieldErrorKind},
    session::PaymentSession,
    submit::{FnSubmitter, PaymentSubmitter, SubmissionState, SubmitOutcome},
    validation::PaymentMethodValidator,
};
pub use crate::types::{FieldName, PaymentData, PaymentMethod};
