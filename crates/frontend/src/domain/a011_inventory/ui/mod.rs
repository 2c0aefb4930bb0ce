pub mod adjustments;
pub mod kardex;
