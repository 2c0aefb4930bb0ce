pub mod aggregate;
pub mod denomination;
pub mod reconciliation;

pub use aggregate::*;
pub use denomination::{DenominationCount, DENOMINATIONS};
pub use reconciliation::{CashSummary, Reconciliation};
