//! Resource keys of the client request store and the analytics API routes
//! that feed them.

use crate::dashboards::d500_smart_pricing::OptionsTab;
use crate::dashboards::d501_optimal_promotion::{PerformanceTable, PromotionTab};
use serde::{Deserialize, Serialize};

/// Logical resource tracked by the request store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResourceKey {
    Options,
    Summary,
    Simulation,
    Trend,
    TrendOptions,
    Contribution,
    Performance,
    PromoOptions,
    PastPromotion,
    PromoSimulation,
}

impl ResourceKey {
    pub const ALL: [ResourceKey; 10] = [
        ResourceKey::Options,
        ResourceKey::Summary,
        ResourceKey::Simulation,
        ResourceKey::Trend,
        ResourceKey::TrendOptions,
        ResourceKey::Contribution,
        ResourceKey::Performance,
        ResourceKey::PromoOptions,
        ResourceKey::PastPromotion,
        ResourceKey::PromoSimulation,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKey::Options => "options",
            ResourceKey::Summary => "summary",
            ResourceKey::Simulation => "simulation",
            ResourceKey::Trend => "trend",
            ResourceKey::TrendOptions => "trendOptions",
            ResourceKey::Contribution => "contribution",
            ResourceKey::Performance => "performance",
            ResourceKey::PromoOptions => "promoOptions",
            ResourceKey::PastPromotion => "pastPromotion",
            ResourceKey::PromoSimulation => "promoSimulation",
        }
    }

    /// Human readable name used in error messages
    pub fn label(self) -> &'static str {
        match self {
            ResourceKey::Options => "Options",
            ResourceKey::Summary => "Summary",
            ResourceKey::Simulation => "Simulation",
            ResourceKey::Trend => "Trend",
            ResourceKey::TrendOptions => "Trend options",
            ResourceKey::Contribution => "Contribution",
            ResourceKey::Performance => "Performance",
            ResourceKey::PromoOptions => "Promotion options",
            ResourceKey::PastPromotion => "Past promotion",
            ResourceKey::PromoSimulation => "Promotion simulation",
        }
    }
}

/// One JSON endpoint of the analytics API.
///
/// Tab-dependent option routes carry their tab, so an unsupported tab can't
/// be expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    PricingOptions(OptionsTab),
    Summary,
    PricingSimulation,
    Trend,
    TrendOptions,
    Contribution,
    PromoOptions(PromotionTab),
    Performance,
    PastPromotion,
    PromoSimulation,
}

impl Endpoint {
    /// Store slice the response of this endpoint lands in
    pub fn resource(self) -> ResourceKey {
        match self {
            Endpoint::PricingOptions(_) => ResourceKey::Options,
            Endpoint::Summary => ResourceKey::Summary,
            Endpoint::PricingSimulation => ResourceKey::Simulation,
            Endpoint::Trend => ResourceKey::Trend,
            Endpoint::TrendOptions => ResourceKey::TrendOptions,
            Endpoint::Contribution => ResourceKey::Contribution,
            Endpoint::PromoOptions(_) => ResourceKey::PromoOptions,
            Endpoint::Performance => ResourceKey::Performance,
            Endpoint::PastPromotion => ResourceKey::PastPromotion,
            Endpoint::PromoSimulation => ResourceKey::PromoSimulation,
        }
    }

    /// Path relative to the API base, without a leading slash
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::PricingOptions(OptionsTab::Summary) => "pricing/options",
            Endpoint::PricingOptions(OptionsTab::Simulation) => "pricing/simulation/options",
            Endpoint::PricingOptions(OptionsTab::Contribution) => "pricing/contribution/options",
            Endpoint::Summary => "pricing/summary",
            Endpoint::PricingSimulation => "pricing/simulation",
            Endpoint::Trend => "pricing/trend",
            Endpoint::TrendOptions => "pricing/trend/options",
            Endpoint::Contribution => "pricing/contribution",
            Endpoint::PromoOptions(PromotionTab::PastPromotion) => {
                "promotion/past-promotion/options"
            }
            Endpoint::PromoOptions(PromotionTab::Simulation) => "promotion/simulation/options",
            Endpoint::PromoOptions(PromotionTab::Performance) => "promotion/performance/options",
            Endpoint::Performance => "promotion/performance",
            Endpoint::PastPromotion => "promotion/past-promotion",
            Endpoint::PromoSimulation => "promotion/simulation",
        }
    }
}

/// CSV export route of a performance table
pub fn export_path(table: PerformanceTable) -> String {
    format!("promotion/export/{}", table.export_name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_routes_follow_tab() {
        assert_eq!(
            Endpoint::PricingOptions(OptionsTab::Summary).path(),
            "pricing/options"
        );
        assert_eq!(
            Endpoint::PricingOptions(OptionsTab::Simulation).path(),
            "pricing/simulation/options"
        );
        assert_eq!(
            Endpoint::PricingOptions(OptionsTab::Contribution).path(),
            "pricing/contribution/options"
        );
        assert_eq!(
            Endpoint::PromoOptions(PromotionTab::PastPromotion).path(),
            "promotion/past-promotion/options"
        );
        assert_eq!(
            Endpoint::PromoOptions(PromotionTab::Simulation).path(),
            "promotion/simulation/options"
        );
        assert_eq!(
            Endpoint::PromoOptions(PromotionTab::Performance).path(),
            "promotion/performance/options"
        );
    }

    #[test]
    fn test_option_routes_share_one_slice() {
        assert_eq!(
            Endpoint::PricingOptions(OptionsTab::Contribution).resource(),
            ResourceKey::Options
        );
        assert_eq!(
            Endpoint::PromoOptions(PromotionTab::Performance).resource(),
            ResourceKey::PromoOptions
        );
        assert_eq!(Endpoint::TrendOptions.resource(), ResourceKey::TrendOptions);
    }

    #[test]
    fn test_resource_key_names() {
        assert_eq!(ResourceKey::TrendOptions.as_str(), "trendOptions");
        assert_eq!(
            serde_json::to_string(&ResourceKey::PromoSimulation).unwrap(),
            "\"promoSimulation\""
        );
        assert_eq!(ResourceKey::ALL.len(), 10);
    }

    #[test]
    fn test_export_path() {
        assert_eq!(
            export_path(PerformanceTable::Mechanics),
            "promotion/export/offer_mechanics"
        );
        assert_eq!(
            export_path(PerformanceTable::Subsegment),
            "promotion/export/subsegment"
        );
    }
}
