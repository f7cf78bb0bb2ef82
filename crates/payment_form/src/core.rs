pub mod errors;
pub mod session;
pub mod submit;
pub mod validation;
