pub mod auth;
pub mod pages;
pub mod roles;
pub mod users;
