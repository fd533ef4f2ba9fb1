//! Request-state store shared by the analytics pages

pub mod promo_session;
pub mod reducer;
pub mod request_gate;
pub mod request_tracker;
pub mod resource;
pub mod resource_store;
pub mod store;

pub use store::AnalyticsStore;
