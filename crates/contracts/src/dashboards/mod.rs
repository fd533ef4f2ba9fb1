pub mod d500_smart_pricing;
pub mod d501_optimal_promotion;
