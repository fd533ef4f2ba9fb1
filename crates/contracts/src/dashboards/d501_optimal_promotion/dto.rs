use super::tabs::PerformanceTable;
use crate::shared::table::{DfTable, Kpi};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// Past promotion
// ============================================================================

/// Response of `promotion/past-promotion`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PastPromotionResponse {
    pub metrics: Vec<Kpi>,
    pub volume_vs_baseline: Vec<DualLine>,
    pub uplift_vs_discount: Vec<ComboChart>,
    pub uplift_vs_offer: Vec<ComboChart>,
    pub uplift_vs_promo: Vec<ComboChart>,
}

/// Average baseline vs total volume at one x position (period or depth)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DualLine {
    pub x: Value,
    pub avg_baseline: f64,
    pub avg_total_volume: f64,
}

/// Uplift and ROI grouped by one promo attribute; exactly one of the
/// attribute fields is set per chart
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ComboChart {
    pub uplift: f64,
    pub avg_roi: f64,
    pub promo_depth: Option<String>,
    pub offer_mechanic: Option<String>,
    pub promo_tactic: Option<String>,
}

impl ComboChart {
    pub fn group_label(&self) -> &str {
        self.promo_depth
            .as_deref()
            .or(self.offer_mechanic.as_deref())
            .or(self.promo_tactic.as_deref())
            .unwrap_or("-")
    }
}

// ============================================================================
// Performance
// ============================================================================

/// Response of `promotion/performance`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceResponse {
    pub metrics: Vec<Kpi>,
    pub mechanics: DfTable,
    pub ppg: DfTable,
    pub subsegment: DfTable,
    pub retailer: DfTable,
}

impl PerformanceResponse {
    pub fn table(&self, table: PerformanceTable) -> &DfTable {
        match table {
            PerformanceTable::Mechanics => &self.mechanics,
            PerformanceTable::Ppg => &self.ppg,
            PerformanceTable::Retailer => &self.retailer,
            PerformanceTable::Subsegment => &self.subsegment,
        }
    }
}

// ============================================================================
// Simulation
// ============================================================================

/// One validated promotional event as the simulator expects it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventFilterPayload {
    pub promo_tactic: Option<Vec<String>>,
    pub offer_type: Option<Vec<String>>,
    pub offer_mechanic: Option<Vec<String>>,
    pub start_date: NaiveDate,
    /// Promo duration in weeks
    pub duration: u32,
    /// Discount in percent, 0..=50
    pub discount: Option<f64>,
    /// Redemption rate in percent, 0..=100
    pub redemption_rate: Option<f64>,
}

/// Request of `promotion/simulation`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromoSimulationRequest {
    pub filters: Map<String, Value>,
    pub event_filters: Vec<EventFilterPayload>,
}

/// Response of `promotion/simulation`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PromoSimulationResponse {
    pub baseline_vs_promo: Vec<SalesLinePoint>,
    pub pie_chart: PieChart,
    pub df_table: DfTable,
    pub events: Vec<EventRoi>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SalesLinePoint {
    pub label: String,
    pub baseline_sales: f64,
    pub promo_sales: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PieChart {
    pub label: String,
    pub total_sales: f64,
    /// "Baseline" and "Incremental" shares of total sales
    pub segments: Vec<PieSegment>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PieSegment {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EventRoi {
    pub promo_index: u32,
    pub roi: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_payload_wire_format() {
        let event = EventFilterPayload {
            promo_tactic: None,
            offer_type: Some(vec!["TPR".to_string()]),
            offer_mechanic: None,
            start_date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            duration: 2,
            discount: Some(15.0),
            redemption_rate: None,
        };

        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({
                "promo_tactic": null,
                "offer_type": ["TPR"],
                "offer_mechanic": null,
                "start_date": "2024-03-04",
                "duration": 2,
                "discount": 15.0,
                "redemption_rate": null
            })
        );
    }

    #[test]
    fn test_performance_table_lookup() {
        let response: PerformanceResponse = serde_json::from_value(json!({
            "ppg": { "columns": ["ppg", "roi"], "rows": [{ "ppg": "A", "roi": "1.2" }] }
        }))
        .unwrap();

        assert_eq!(response.table(PerformanceTable::Ppg).rows.len(), 1);
        assert!(response.table(PerformanceTable::Mechanics).is_empty());
    }

    #[test]
    fn test_combo_chart_group_label() {
        let chart = ComboChart {
            offer_mechanic: Some("BOGO".to_string()),
            ..ComboChart::default()
        };
        assert_eq!(chart.group_label(), "BOGO");
        assert_eq!(ComboChart::default().group_label(), "-");
    }
}
