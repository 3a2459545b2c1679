pub mod api_error;
pub mod api_utils;
pub mod auth_failures;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod endpoint_resolver;
pub mod fetch_generation;
pub mod icons;
pub mod list_resource;
pub mod list_utils;
pub mod number_format;
pub mod page_frame;
pub mod page_standard;
pub mod polling;
