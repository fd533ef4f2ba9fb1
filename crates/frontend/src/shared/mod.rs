pub mod api_utils;
pub mod components;
pub mod export;
pub mod filter_fields;
pub mod http;
pub mod icons;
pub mod list_utils;
pub mod state;
