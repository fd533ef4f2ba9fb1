pub mod contribution;
pub mod page;
pub mod simulation;
pub mod summary;
pub mod trend;

pub use page::SmartPricingPage;
