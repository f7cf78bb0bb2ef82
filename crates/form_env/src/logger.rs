//!
//! Logger of the payment form engine.
//!

pub use tracing::{debug, error, event as log, info, info_span, warn, Level};
pub use tracing_attributes::instrument;

pub mod config;
mod defaults;
pub use self::config::Config;

pub mod setup;
pub use setup::{setup, TelemetryGuard};

pub mod types;
pub use types::{Flow, Tag};
