//! Wire types shared with the POS backend plus the business rules the
//! client re-validates before submitting.

pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod system;
