mod defaults;
pub mod settings;
mod validations;
