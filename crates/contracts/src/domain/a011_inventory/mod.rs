pub mod adjustment;
pub mod kardex;

pub use adjustment::*;
pub use kardex::{build_kardex, KardexMovement, KardexRow, KardexTotals};
