use serde::{Deserialize, Serialize};

/// Tabs of the Optimal Promotion page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromotionTab {
    #[default]
    PastPromotion,
    Performance,
    Simulation,
}

impl PromotionTab {
    pub const ALL: [PromotionTab; 3] = [
        PromotionTab::PastPromotion,
        PromotionTab::Performance,
        PromotionTab::Simulation,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PromotionTab::PastPromotion => "past_promotion",
            PromotionTab::Performance => "performance",
            PromotionTab::Simulation => "simulation",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            PromotionTab::PastPromotion => "Past Promotions",
            PromotionTab::Performance => "Performance",
            PromotionTab::Simulation => "Simulation",
        }
    }
}

/// Tables of the performance tab; each one can be exported as CSV
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PerformanceTable {
    #[default]
    Mechanics,
    Ppg,
    Retailer,
    Subsegment,
}

impl PerformanceTable {
    pub const ALL: [PerformanceTable; 4] = [
        PerformanceTable::Mechanics,
        PerformanceTable::Ppg,
        PerformanceTable::Retailer,
        PerformanceTable::Subsegment,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PerformanceTable::Mechanics => "mechanics",
            PerformanceTable::Ppg => "ppg",
            PerformanceTable::Retailer => "retailer",
            PerformanceTable::Subsegment => "subsegment",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            PerformanceTable::Mechanics => "Mechanics",
            PerformanceTable::Ppg => "PPG",
            PerformanceTable::Retailer => "Retailer",
            PerformanceTable::Subsegment => "Subsegment",
        }
    }

    /// Table name the export route expects
    pub fn export_name(self) -> &'static str {
        match self {
            PerformanceTable::Mechanics => "offer_mechanics",
            PerformanceTable::Ppg => "ppgs",
            PerformanceTable::Retailer => "retailer",
            PerformanceTable::Subsegment => "subsegment",
        }
    }

    /// File name offered to the browser for the exported table
    pub fn file_name(self) -> String {
        format!("{}.csv", self.export_name())
    }
}
