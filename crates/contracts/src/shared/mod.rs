pub mod error;
pub mod money;
pub mod validation;

pub use error::RuleError;
