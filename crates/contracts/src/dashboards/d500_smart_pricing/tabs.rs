use serde::{Deserialize, Serialize};

/// Tabs of the Smart Pricing page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingTab {
    #[default]
    Summary,
    Trend,
    Contribution,
    Simulation,
}

impl PricingTab {
    pub const ALL: [PricingTab; 4] = [
        PricingTab::Summary,
        PricingTab::Trend,
        PricingTab::Contribution,
        PricingTab::Simulation,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PricingTab::Summary => "summary",
            PricingTab::Trend => "trend",
            PricingTab::Contribution => "contribution",
            PricingTab::Simulation => "simulation",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            PricingTab::Summary => "Summary",
            PricingTab::Trend => "Trend",
            PricingTab::Contribution => "Contribution",
            PricingTab::Simulation => "Simulation",
        }
    }

    /// Options route backing this tab; the trend tab has its own resource
    pub fn options_tab(self) -> Option<OptionsTab> {
        match self {
            PricingTab::Summary => Some(OptionsTab::Summary),
            PricingTab::Contribution => Some(OptionsTab::Contribution),
            PricingTab::Simulation => Some(OptionsTab::Simulation),
            PricingTab::Trend => None,
        }
    }
}

/// Which pricing options route fills the shared `options` slice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OptionsTab {
    #[default]
    Summary,
    Simulation,
    Contribution,
}

/// Aggregation frequency of the trend series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DateFreq {
    #[default]
    #[serde(rename = "M")]
    Monthly,
    #[serde(rename = "W")]
    Weekly,
    #[serde(rename = "Q")]
    Quarterly,
}

impl DateFreq {
    pub const ALL: [DateFreq; 3] = [DateFreq::Weekly, DateFreq::Monthly, DateFreq::Quarterly];

    pub fn code(self) -> &'static str {
        match self {
            DateFreq::Monthly => "M",
            DateFreq::Weekly => "W",
            DateFreq::Quarterly => "Q",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "M" => Some(DateFreq::Monthly),
            "W" => Some(DateFreq::Weekly),
            "Q" => Some(DateFreq::Quarterly),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DateFreq::Monthly => "Monthly",
            DateFreq::Weekly => "Weekly",
            DateFreq::Quarterly => "Quarterly",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_has_no_shared_options_route() {
        assert_eq!(PricingTab::Trend.options_tab(), None);
        assert_eq!(
            PricingTab::Simulation.options_tab(),
            Some(OptionsTab::Simulation)
        );
    }

    #[test]
    fn test_date_freq_codes() {
        for freq in DateFreq::ALL {
            assert_eq!(DateFreq::from_code(freq.code()), Some(freq));
        }
        assert_eq!(serde_json::to_string(&DateFreq::Weekly).unwrap(), "\"W\"");
        assert_eq!(DateFreq::from_code("Y"), None);
    }
}
