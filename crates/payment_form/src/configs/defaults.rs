use crate::consts;

impl Default for super::settings::PaymentFormConfig {
    fn default() -> Self {
        Self {
            default_method: crate::types::PaymentMethod::Card,
            banks: consts::DEFAULT_BANKS.into_iter().map(String::from).collect(),
            upi_apps: consts::DEFAULT_UPI_APPS
                .iter()
                .map(|&(name, color)| super::settings::UpiApp {
                    name: name.into(),
                    color: color.into(),
                })
                .collect(),
        }
    }
}
