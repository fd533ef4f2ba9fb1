use crate::shared::filter_fields::FieldDef;
use contracts::dashboards::d501_optimal_promotion::PromotionTab;

const CATEGORY: FieldDef = FieldDef::new("Category", "categories", "list");
const BRAND: FieldDef = FieldDef::new("Brand", "brands", "tag");
const SEGMENT: FieldDef = FieldDef::new("Segment", "segment", "factory");
const PPG: FieldDef = FieldDef::new("PPG", "ppgs", "box");
const RETAILER: FieldDef = FieldDef::new("Retailer", "retailers", "store");

/// Past promotion and performance tabs share one filter set
pub const PERFORMANCE_FIELDS: [FieldDef; 9] = [
    CATEGORY,
    BRAND,
    SEGMENT,
    PPG,
    RETAILER,
    FieldDef::new("Offer Type", "offer_type", "factory"),
    FieldDef::new("Promo Tactics", "promo_tactics", "factory"),
    FieldDef::new("Year", "year", "clock"),
    FieldDef::new("Month", "month", "calendar"),
];

pub const SIMULATION_FIELDS: [FieldDef; 5] = [CATEGORY, BRAND, SEGMENT, PPG, RETAILER];

/// Multi-select fields of one simulated event, filled from the simulation
/// options payload
pub const EVENT_SELECTION_FIELDS: [FieldDef; 3] = [
    FieldDef::new("Offer Type", "offer_type", "factory"),
    FieldDef::new("Promo Tactics", "promo_tactics", "factory"),
    FieldDef::new("Offer Mechanic", "offer_mechanic", "gift"),
];

pub const ALL_FILTERS: [&str; 9] = [
    "categories",
    "brands",
    "segment",
    "retailers",
    "ppgs",
    "offer_type",
    "promo_tactics",
    "year",
    "month",
];

pub fn fields_for(tab: PromotionTab) -> &'static [FieldDef] {
    match tab {
        PromotionTab::PastPromotion | PromotionTab::Performance => &PERFORMANCE_FIELDS,
        PromotionTab::Simulation => &SIMULATION_FIELDS,
    }
}

pub fn payload_fields(tab: PromotionTab) -> Vec<&'static str> {
    fields_for(tab).iter().map(|def| def.name).collect()
}

pub fn sidebar_title(tab: PromotionTab) -> &'static str {
    match tab {
        PromotionTab::PastPromotion => "Past Promotions Filters",
        PromotionTab::Performance => "Performance Filters",
        PromotionTab::Simulation => "Simulation Filters",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::state::promo_session::EVENT_SELECTIONS;

    #[test]
    fn test_simulation_payload_is_scoping_only() {
        assert_eq!(
            payload_fields(PromotionTab::Simulation),
            vec!["categories", "brands", "segment", "ppgs", "retailers"]
        );
    }

    #[test]
    fn test_event_fields_match_event_draft() {
        for def in EVENT_SELECTION_FIELDS {
            assert!(EVENT_SELECTIONS.contains(&def.name));
        }
    }

    #[test]
    fn test_every_field_is_kept_by_the_page() {
        for tab in PromotionTab::ALL {
            for name in payload_fields(tab) {
                assert!(ALL_FILTERS.contains(&name));
            }
        }
    }
}
