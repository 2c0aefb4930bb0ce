pub mod history;
pub mod register;
