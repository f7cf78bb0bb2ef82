use common_utils::ext_traits::ConfigExt;

use crate::core::errors::ApplicationError;

impl super::settings::PaymentFormConfig {
    pub fn validate(&self) -> Result<(), ApplicationError> {
        use common_utils::fp_utils::when;

        when(self.banks.is_empty(), || {
            Err(ApplicationError::InvalidConfigurationValueError(
                "net banking bank list must not be empty".into(),
            ))
        })?;

        when(self.banks.iter().any(|bank| bank.is_empty_after_trim()), || {
            Err(ApplicationError::InvalidConfigurationValueError(
                "net banking bank names must not be empty".into(),
            ))
        })?;

        when(
            self.upi_apps.iter().any(|app| app.name.is_default_or_empty()),
            || {
                Err(ApplicationError::InvalidConfigurationValueError(
                    "UPI app names must not be empty".into(),
                ))
            },
        )
    }
}
