use crate::shared::components::{PageHeader, TabItem};
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlossaryKind {
    Pricing,
    Promotion,
}

impl GlossaryKind {
    pub fn title(self) -> &'static str {
        match self {
            GlossaryKind::Pricing => "Smart Pricing",
            GlossaryKind::Promotion => "Optimal Promotion",
        }
    }

    pub fn terms(self) -> &'static [GlossaryTerm] {
        match self {
            GlossaryKind::Pricing => &PRICING_TERMS,
            GlossaryKind::Promotion => &PROMOTION_TERMS,
        }
    }
}

pub struct GlossaryTerm {
    pub title: &'static str,
    pub description: &'static str,
}

const fn term(title: &'static str, description: &'static str) -> GlossaryTerm {
    GlossaryTerm { title, description }
}

pub static PRICING_TERMS: [GlossaryTerm; 8] = [
    term(
        "Fair Share",
        "Equal split of category revenue across the manufacturers or retailers in it, computed without filters.",
    ),
    term(
        "Price Elasticity",
        "Responsiveness of volume to the product's own price. At -2.0 a 5% price increase loses roughly 10% volume.",
    ),
    term(
        "Cross Price Elasticity",
        "Change in own volume for a 1% change in a competitor's price. At 1.0 a 5% competitor price increase gains about 5% own volume.",
    ),
    term(
        "Distribution Elasticity",
        "Change in volume for every point of weighted distribution (%ACV or TDP). At 0.6 one more point adds 0.6% volume.",
    ),
    term("Current Price", "Average price over the last year."),
    term("Current Distribution", "Average distribution over the last year."),
    term("Current Competitor Price", "Average competitor price over the last year."),
    term("PPG", "Promoted Product Group: products priced and promoted together."),
];

pub static PROMOTION_TERMS: [GlossaryTerm; 7] = [
    term(
        "TPR (Temporary Price Reduction)",
        "A temporary discount on the regular shelf price, used to lift short-term sales or clear inventory.",
    ),
    term(
        "Feature",
        "Promotion where the product is highlighted in flyers, catalogs or online banners.",
    ),
    term(
        "Display",
        "Promotion where the product is showcased in store, on end caps or special displays.",
    ),
    term(
        "Redemption Rate",
        "Share of exposed customers who actually use the offer, in percent.",
    ),
    term(
        "ROI (Return on Investment)",
        "Incremental gain of a promotion relative to what was spent on it.",
    ),
    term(
        "Uplift",
        "Increase in sales attributed to a promotion, measured against the baseline without it.",
    ),
    term(
        "Baseline",
        "Volume expected in the same period without any promotion.",
    ),
];

#[component]
pub fn GlossaryPage() -> impl IntoView {
    let kind = RwSignal::new(GlossaryKind::Pricing);

    view! {
        <div class="glossary-page">
            <PageHeader title="Glossary" subtitle="Key definitions used across the tools">
                <div class="tab-bar">
                    {[GlossaryKind::Pricing, GlossaryKind::Promotion]
                        .into_iter()
                        .map(|k| view! {
                            <TabItem
                                label=k.title()
                                active=Signal::derive(move || kind.get() == k)
                                on_select=Callback::new(move |_| kind.set(k))
                            />
                        })
                        .collect_view()}
                </div>
            </PageHeader>
            <div class="glossary-page__grid">
                {move || {
                    kind.get()
                        .terms()
                        .iter()
                        .map(|t| view! {
                            <div class="glossary-term">
                                <h4 class="glossary-term__title">{t.title}</h4>
                                <p class="glossary-term__text">{t.description}</p>
                            </div>
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glossaries_cover_core_terms() {
        let titles = |kind: GlossaryKind| kind.terms().iter().map(|t| t.title).collect::<Vec<_>>();
        assert!(titles(GlossaryKind::Pricing).contains(&"Fair Share"));
        assert!(titles(GlossaryKind::Pricing).contains(&"PPG"));
        assert!(titles(GlossaryKind::Promotion).contains(&"Uplift"));
        assert!(titles(GlossaryKind::Promotion)
            .iter()
            .any(|t| t.starts_with("ROI")));
    }
}
