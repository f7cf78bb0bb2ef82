use std::path::PathBuf;

use config::{Environment, File};
use error_stack::ResultExt;
use form_env::{config::Log, env, logger};
use serde::Deserialize;

use crate::{
    core::errors::{ApplicationError, ApplicationResult},
    types::PaymentMethod,
};

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Settings {
    pub log: Log,
    pub payment_form: PaymentFormConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PaymentFormConfig {
    /// Method selected when a session starts and after every successful submission.
    pub default_method: PaymentMethod,
    /// Banks offered for net banking, in display order.
    pub banks: Vec<String>,
    pub upi_apps: Vec<UpiApp>,
}

/// UPI app suggested next to the UPI id field.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct UpiApp {
    pub name: String,
    /// CSS colour of the app's badge.
    pub color: String,
}

impl PaymentFormConfig {
    pub fn is_known_bank(&self, bank_name: &str) -> bool {
        self.banks.iter().any(|bank| bank == bank_name)
    }
}

impl Settings {
    pub fn new() -> ApplicationResult<Self> {
        Self::with_config_path(None)
    }

    pub fn with_config_path(config_path: Option<PathBuf>) -> ApplicationResult<Self> {
        // Configuration values are picked up in the following priority order (1 being least
        // priority):
        // 1. Defaults from the implementation of the `Default` trait.
        // 2. Values from `config/default.toml`.
        // 3. Values from the environment's config file, `config/development.toml` unless
        //    `RUN_ENV` says otherwise, or from the explicitly given path.
        // 4. Environment variables prefixed with `PAYMENT_FORM` and each level separated by
        //    double underscores.

        let environment = env::which();
        let default_config_path = env::workspace_path().join("config").join("default.toml");
        let config_path = form_env::Config::config_path(&environment.to_string(), config_path);

        let config = form_env::Config::builder(&environment.to_string())
            .change_context(ApplicationError::ConfigurationError)?
            .add_source(File::from(default_config_path).required(false))
            .add_source(File::from(config_path).required(false))
            .add_source(
                Environment::with_prefix("PAYMENT_FORM")
                    .try_parsing(true)
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("payment_form.banks"),
            )
            .build()
            .change_context(ApplicationError::ConfigurationError)?;

        serde_path_to_error::deserialize(config)
            .map_err(|error| {
                logger::error!(%error, "Unable to deserialize application configuration");
                error.into_inner()
            })
            .change_context(ApplicationError::ConfigurationError)
    }

    pub fn validate(&self) -> ApplicationResult<()> {
        self.payment_form
            .validate()
            .map_err(error_stack::Report::from)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn default_settings_are_valid() {
        let settings = Settings::default();

        assert_eq!(settings.payment_form.default_method, PaymentMethod::Card);
        assert_eq!(settings.payment_form.banks.len(), 12);
        assert!(settings.payment_form.is_known_bank("HDFC Bank"));
        assert!(!settings.payment_form.is_known_bank("hdfc bank"));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn missing_environment_file_keeps_base_config() {
        let settings =
            Settings::with_config_path(Some(PathBuf::from("config/does_not_exist.toml"))).unwrap();

        assert_eq!(settings.payment_form.upi_apps.len(), 4);
        assert_eq!(settings.payment_form.upi_apps[0].name, "Google Pay");
    }

    #[test]
    fn development_config_file_is_read() {
        let path = env::workspace_path().join("config").join("development.toml");
        let settings = Settings::with_config_path(Some(path)).unwrap();

        assert!(settings.log.console.enabled);
        assert_eq!(settings.payment_form.default_method, PaymentMethod::Card);
        assert!(settings.payment_form.is_known_bank("State Bank of India"));
    }
}
