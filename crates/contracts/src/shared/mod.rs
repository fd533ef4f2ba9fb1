pub mod endpoints;
pub mod filters;
pub mod table;
