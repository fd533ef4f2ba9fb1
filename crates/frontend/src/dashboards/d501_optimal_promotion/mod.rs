pub mod fields;
pub mod ui;
pub mod validation;

pub use ui::OptimalPromotionPage;
