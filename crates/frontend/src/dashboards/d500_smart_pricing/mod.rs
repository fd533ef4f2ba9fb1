pub mod fields;
pub mod simulation_inputs;
pub mod ui;

pub use ui::SmartPricingPage;
