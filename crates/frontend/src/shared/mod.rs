pub mod api_error;
pub mod components;
pub mod config;
pub mod crud;
pub mod crud_page;
pub mod date_utils;
pub mod export;
pub mod http;
pub mod icons;
pub mod list_utils;
pub mod modal_frame;
pub mod number_format;
pub mod page_frame;
pub mod toast;
