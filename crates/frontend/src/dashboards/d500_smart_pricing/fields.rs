use crate::shared::filter_fields::FieldDef;
use contracts::dashboards::d500_smart_pricing::PricingTab;

const CATEGORY: FieldDef = FieldDef::new("Category", "categories", "list");
const MANUFACTURER: FieldDef = FieldDef::new("Manufacturer", "manufacturers", "factory");
const BRAND: FieldDef = FieldDef::new("Brand", "brands", "tag");
const PPG: FieldDef = FieldDef::new("PPG", "ppgs", "box");
const RETAILER: FieldDef = FieldDef::new("Retailer", "retailers", "store");

pub const SUMMARY_FIELDS: [FieldDef; 4] = [
    CATEGORY,
    MANUFACTURER,
    RETAILER,
    FieldDef::new("Year/Time Period", "time_periods", "clock"),
];

pub const TREND_FIELDS: [FieldDef; 10] = [
    CATEGORY,
    MANUFACTURER,
    BRAND,
    PPG,
    RETAILER,
    FieldDef::new("Year/Time Period", "years", "clock"),
    FieldDef::new("Competitor Manufacturer", "competitor_manufacturers", "factory"),
    FieldDef::new("Competitor Brand", "competitor_brands", "tag"),
    FieldDef::new("Competitor PPG", "competitor_ppgs", "box"),
    FieldDef::new("Competitor Retailer", "competitor_retailers", "store"),
];

pub const SIMULATION_FIELDS: [FieldDef; 5] = [CATEGORY, MANUFACTURER, BRAND, PPG, RETAILER];

pub const CONTRIBUTION_FIELDS: [FieldDef; 5] = [CATEGORY, MANUFACTURER, BRAND, PPG, RETAILER];

/// Every filter the pricing page keeps, whichever tab is active
pub const ALL_FILTERS: [&str; 11] = [
    "categories",
    "manufacturers",
    "brands",
    "ppgs",
    "retailers",
    "time_periods",
    "years",
    "competitor_manufacturers",
    "competitor_brands",
    "competitor_ppgs",
    "competitor_retailers",
];

/// Sidebar fields of a tab
pub fn fields_for(tab: PricingTab) -> &'static [FieldDef] {
    match tab {
        PricingTab::Summary => &SUMMARY_FIELDS,
        PricingTab::Trend => &TREND_FIELDS,
        PricingTab::Contribution => &CONTRIBUTION_FIELDS,
        PricingTab::Simulation => &SIMULATION_FIELDS,
    }
}

/// Filters a tab sends to the backend
pub fn payload_fields(tab: PricingTab) -> Vec<&'static str> {
    fields_for(tab).iter().map(|def| def.name).collect()
}

pub fn sidebar_title(tab: PricingTab) -> &'static str {
    match tab {
        PricingTab::Summary => "Summary Filters",
        PricingTab::Trend => "Trend Filters",
        PricingTab::Contribution => "Contribution Filters",
        PricingTab::Simulation => "Simulation Filters",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_field_is_kept_by_the_page() {
        for tab in PricingTab::ALL {
            for name in payload_fields(tab) {
                assert!(ALL_FILTERS.contains(&name), "{} missing", name);
            }
        }
    }

    #[test]
    fn test_payload_fields_per_tab() {
        assert_eq!(
            payload_fields(PricingTab::Summary),
            vec!["categories", "manufacturers", "retailers", "time_periods"]
        );
        assert_eq!(
            payload_fields(PricingTab::Simulation),
            vec!["categories", "manufacturers", "brands", "ppgs", "retailers"]
        );
        assert!(payload_fields(PricingTab::Trend).contains(&"competitor_ppgs"));
        assert!(payload_fields(PricingTab::Trend).contains(&"years"));
    }
}
