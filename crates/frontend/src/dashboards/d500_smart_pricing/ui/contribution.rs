use crate::shared::components::table::{format_compact, format_number_with_decimals};
use crate::shared::components::{BarItem, BarList, CardAnimated, SliceStatus};
use crate::shared::state::AnalyticsStore;
use contracts::dashboards::d500_smart_pricing::{ContributionResponse, ElasticityBars};
use contracts::shared::endpoints::ResourceKey;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::{Map, Value};

pub fn elasticity_items(bars: Option<&ElasticityBars>) -> Vec<BarItem> {
    bars.map(|b| {
        b.bars
            .iter()
            .map(|bar| BarItem::new(bar.driver.clone(), bar.elasticity))
            .collect()
    })
    .unwrap_or_default()
}

fn elasticity_text(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

#[component]
pub fn ContributionTab(
    store: AnalyticsStore,
    #[prop(into)]
    filters: Signal<Map<String, Value>>,
) -> impl IntoView {
    let slice = store.slice(ResourceKey::Contribution);

    Effect::new(move |_| {
        let payload = filters.get();
        spawn_local(async move {
            store.get_contribution(payload).await;
        });
    });

    let contribution = Signal::derive(move || {
        slice.with(|s| s.decode::<ContributionResponse>()).unwrap_or_default()
    });

    let panel = move |default_title: &'static str,
                      delay_ms: u32,
                      pick: fn(&ContributionResponse) -> Option<&ElasticityBars>| {
        view! {
            <CardAnimated
                title=Signal::derive(move || {
                    contribution.with(|c| {
                        pick(c)
                            .and_then(|b| b.title.clone())
                            .unwrap_or_else(|| default_title.to_string())
                    })
                })
                delay_ms=delay_ms
            >
                <BarList
                    items=Signal::derive(move || contribution.with(|c| elasticity_items(pick(c))))
                    format=elasticity_text
                />
            </CardAnimated>
        }
    };

    view! {
        <div class="tab-content">
            <div class="tab-content__header">
                <h4>"Contribution"</h4>
                <SliceStatus slice=slice />
            </div>
            <div class="panel-grid">
                {panel("Price Elasticity", 0, |c| c.price_elasticity.as_ref())}
                {panel("Cross Price Elasticity", 60, |c| c.cross_price_elasticity.as_ref())}
                {panel("Distribution Elasticity", 120, |c| c.distribution_elasticity.as_ref())}
                <CardAnimated title="Contribution by Driver" delay_ms=180>
                    <BarList
                        items=Signal::derive(move || {
                            contribution.with(|c| {
                                c.contribution_by_driver
                                    .as_ref()
                                    .map(|d| {
                                        d.pairs()
                                            .into_iter()
                                            .map(|(label, value)| BarItem::new(label, value))
                                            .collect()
                                    })
                                    .unwrap_or_default()
                            })
                        })
                        format=format_compact
                    />
                </CardAnimated>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_elasticity_items() {
        let response: ContributionResponse = serde_json::from_value(json!({
            "price_elasticity": { "bars": [{ "driver": "PPG-1", "elasticity": -1.8 }] }
        }))
        .unwrap();

        assert_eq!(
            elasticity_items(response.price_elasticity.as_ref()),
            vec![BarItem::new("PPG-1", -1.8)]
        );
        assert!(elasticity_items(response.cross_price_elasticity.as_ref()).is_empty());
    }
}
