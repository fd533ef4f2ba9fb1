pub mod d500_smart_pricing;
pub mod d501_optimal_promotion;

pub use d500_smart_pricing::SmartPricingPage;
pub use d501_optimal_promotion::OptimalPromotionPage;
