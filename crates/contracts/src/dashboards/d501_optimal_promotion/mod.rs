pub mod dto;
pub mod tabs;

pub use dto::*;
pub use tabs::*;
