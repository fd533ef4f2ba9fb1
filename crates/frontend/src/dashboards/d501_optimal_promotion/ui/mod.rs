pub mod page;
pub mod past_promotion;
pub mod performance;
pub mod simulation;

pub use page::OptimalPromotionPage;
