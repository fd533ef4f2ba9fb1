use super::tabs::DateFreq;
use crate::shared::table::{DfTable, Kpi};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

// ============================================================================
// Summary
// ============================================================================

/// Response of `pricing/summary`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryResponse {
    /// Period covered by the KPIs, e.g. "Jan 2022 - Dec 2023"
    pub assessment_period: String,
    pub kpis: Vec<Kpi>,
    pub fair_share_vs_revenue: Vec<RevenueShareEntry>,
    pub revenue_by_manufacturer: Vec<RevenueSeries>,
    pub revenue_table: RevenueTable,
    pub revenue_by_retailer: RetailerRevenue,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RevenueShareEntry {
    pub manufacturer: String,
    pub fair_share: f64,
    pub revenue_share: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RevenueSeries {
    pub manufacturer: String,
    pub points: Vec<SeriesPoint>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesPoint {
    pub period: String,
    pub value: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RevenueTable {
    pub columns: Vec<String>,
    pub rows: Vec<Map<String, Value>>,
    /// Unit suffix of the revenue cells ("M" = millions)
    pub value_unit: String,
}

impl RevenueTable {
    pub fn as_table(&self) -> DfTable {
        DfTable {
            columns: self.columns.clone(),
            rows: self.rows.clone(),
        }
    }
}

/// Revenue per retailer; each item is `{retailer_id, "<year>": revenue, ...}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RetailerRevenue {
    pub items: Vec<Map<String, Value>>,
    pub value_unit: String,
}

// ============================================================================
// Trend
// ============================================================================

/// Request of `pricing/trend`: the page filters plus trend parameters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendRequest {
    #[serde(flatten)]
    pub filters: Map<String, Value>,
    pub months: Option<Vec<String>>,
    pub date_freq: DateFreq,
    pub include_competitor: bool,
    pub top_n: u32,
}

impl TrendRequest {
    pub const DEFAULT_TOP_N: u32 = 10;

    /// Competitor series are requested only when a competitor filter is set
    pub fn new(filters: Map<String, Value>, date_freq: DateFreq) -> Self {
        let include_competitor = filters
            .iter()
            .any(|(name, value)| name.starts_with("competitor_") && !value.is_null());
        Self {
            filters,
            months: None,
            date_freq,
            include_competitor,
            top_n: Self::DEFAULT_TOP_N,
        }
    }
}

/// Response of `pricing/trend`. Series points are flat records keyed by
/// `date` plus the plotted metrics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendResponse {
    pub volume_vs_price: Vec<Map<String, Value>>,
    pub volume_vs_distribution: Vec<Map<String, Value>>,
    pub volume_vs_revenue: Vec<Map<String, Value>>,
    pub competitor_price: Vec<Map<String, Value>>,
    pub competitor_distribution: Vec<Map<String, Value>>,
    pub top_table: DfTable,
}

// ============================================================================
// Contribution
// ============================================================================

/// Response of `pricing/contribution`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContributionResponse {
    pub price_elasticity: Option<ElasticityBars>,
    pub cross_price_elasticity: Option<ElasticityBars>,
    pub distribution_elasticity: Option<ElasticityBars>,
    pub contribution_by_driver: Option<DriverContribution>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ElasticityBars {
    pub title: Option<String>,
    pub bars: Vec<ElasticityBar>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ElasticityBar {
    pub driver: String,
    pub elasticity: f64,
}

/// Waterfall of volume change per driver; `categories[i]` pairs with `values[i]`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverContribution {
    pub categories: Vec<String>,
    pub values: Vec<f64>,
}

impl DriverContribution {
    pub fn pairs(&self) -> Vec<(String, f64)> {
        self.categories
            .iter()
            .cloned()
            .zip(self.values.iter().copied())
            .collect()
    }
}

// ============================================================================
// Simulation
// ============================================================================

/// Request of `pricing/simulation`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    pub filters: Map<String, Value>,
    pub price_change_pct: f64,
    pub new_price: Option<f64>,
    pub competitor_price_change_pct: f64,
    pub new_competitor_price: Option<f64>,
    pub new_distribution: Option<f64>,
}

impl SimulationRequest {
    /// Baseline run: no price, competitor or distribution override
    pub fn baseline(filters: Map<String, Value>) -> Self {
        Self {
            filters,
            ..Self::default()
        }
    }
}

/// Response of `pricing/simulation`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationResponse {
    pub summary_cards: Vec<Kpi>,
    pub volume_bars: ComparisonBars,
    pub revenue_bars: ComparisonBars,
    pub table: DfTable,
    /// Baseline values: `base_price`, `base_comp_price`, `base_distribution`
    pub context: HashMap<String, f64>,
}

impl SimulationResponse {
    pub fn base_price(&self) -> f64 {
        self.context.get("base_price").copied().unwrap_or(0.0)
    }

    pub fn base_comp_price(&self) -> f64 {
        self.context.get("base_comp_price").copied().unwrap_or(0.0)
    }

    pub fn base_distribution(&self) -> f64 {
        self.context.get("base_distribution").copied().unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonBars {
    pub title: String,
    pub unit: String,
    pub bars: Vec<BarDatum>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BarDatum {
    pub label: String,
    pub value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_trend_request_flattens_filters() {
        let filters = json!({ "categories": ["SurfaceCare"], "competitor_brands": null });
        let request = TrendRequest::new(filters.as_object().unwrap().clone(), DateFreq::Monthly);

        assert!(!request.include_competitor);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "categories": ["SurfaceCare"],
                "competitor_brands": null,
                "months": null,
                "date_freq": "M",
                "include_competitor": false,
                "top_n": 10
            })
        );
    }

    #[test]
    fn test_trend_request_includes_competitor_when_filtered() {
        let filters = json!({ "competitor_ppgs": ["PPG-9"] });
        let request = TrendRequest::new(filters.as_object().unwrap().clone(), DateFreq::Weekly);
        assert!(request.include_competitor);
    }

    #[test]
    fn test_simulation_baseline_request() {
        let request = SimulationRequest::baseline(Map::new());
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "filters": {},
                "price_change_pct": 0.0,
                "new_price": null,
                "competitor_price_change_pct": 0.0,
                "new_competitor_price": null,
                "new_distribution": null
            })
        );
    }

    #[test]
    fn test_summary_response_decodes_with_missing_sections() {
        let response: SummaryResponse = serde_json::from_value(json!({
            "kpis": [{ "label": "Revenue", "value": "$1.2M" }]
        }))
        .unwrap();

        assert_eq!(response.kpis.len(), 1);
        assert_eq!(response.kpis[0].label, "Revenue");
        assert!(response.fair_share_vs_revenue.is_empty());
        assert!(response.revenue_table.columns.is_empty());
    }

    #[test]
    fn test_simulation_context_defaults_to_zero() {
        let response: SimulationResponse = serde_json::from_value(json!({
            "context": { "base_price": 4.5 }
        }))
        .unwrap();
        assert_eq!(response.base_price(), 4.5);
        assert_eq!(response.base_distribution(), 0.0);
    }

    #[test]
    fn test_driver_contribution_pairs() {
        let driver = DriverContribution {
            categories: vec!["Price".to_string(), "Distribution".to_string()],
            values: vec![-120.0, 45.0],
        };
        assert_eq!(
            driver.pairs(),
            vec![("Price".to_string(), -120.0), ("Distribution".to_string(), 45.0)]
        );
    }
}
