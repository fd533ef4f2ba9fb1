use crate::shared::components::table::DataTable;
use crate::shared::components::{CardAnimated, KpiCards, SliceStatus};
use crate::shared::state::AnalyticsStore;
use contracts::dashboards::d501_optimal_promotion::{ComboChart, DualLine, PastPromotionResponse};
use contracts::shared::endpoints::ResourceKey;
use contracts::shared::table::{value_text, DfTable};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::{json, Map, Value};

pub fn volume_table(points: &[DualLine]) -> DfTable {
    let columns = ["Period", "Avg Baseline", "Avg Total Volume"];
    DfTable {
        columns: columns.iter().map(|c| c.to_string()).collect(),
        rows: points
            .iter()
            .map(|p| {
                let mut row = Map::new();
                row.insert(columns[0].to_string(), json!(value_text(&p.x)));
                row.insert(columns[1].to_string(), json!(p.avg_baseline));
                row.insert(columns[2].to_string(), json!(p.avg_total_volume));
                row
            })
            .collect(),
    }
}

/// Uplift and ROI per group, the group column named after the attribute
pub fn uplift_table(group: &str, charts: &[ComboChart]) -> DfTable {
    DfTable {
        columns: vec![group.to_string(), "Uplift".to_string(), "Avg ROI".to_string()],
        rows: charts
            .iter()
            .map(|c| {
                let mut row = Map::new();
                row.insert(group.to_string(), json!(c.group_label()));
                row.insert("Uplift".to_string(), json!(c.uplift));
                row.insert("Avg ROI".to_string(), json!(c.avg_roi));
                row
            })
            .collect(),
    }
}

#[component]
pub fn PastPromotionTab(
    store: AnalyticsStore,
    #[prop(into)]
    filters: Signal<Map<String, Value>>,
) -> impl IntoView {
    let slice = store.slice(ResourceKey::PastPromotion);

    Effect::new(move |_| {
        let payload = filters.get();
        spawn_local(async move {
            store.fetch_past_promotion(payload).await;
        });
    });

    let past = Signal::derive(move || {
        slice.with(|s| s.decode::<PastPromotionResponse>()).unwrap_or_default()
    });

    view! {
        <div class="tab-content">
            <div class="tab-content__header">
                <h4>"Past Promotions"</h4>
                <SliceStatus slice=slice />
            </div>

            <KpiCards kpis=Signal::derive(move || past.with(|p| p.metrics.clone())) />

            <div class="panel-grid">
                <CardAnimated title="Volume vs Baseline" delay_ms=0>
                    <DataTable table=Signal::derive(move || past.with(|p| volume_table(&p.volume_vs_baseline))) />
                </CardAnimated>
                <CardAnimated title="Uplift vs Discount" delay_ms=60>
                    <DataTable table=Signal::derive(move || {
                        past.with(|p| uplift_table("Promo Depth", &p.uplift_vs_discount))
                    }) />
                </CardAnimated>
                <CardAnimated title="Uplift vs Offer" delay_ms=120>
                    <DataTable table=Signal::derive(move || {
                        past.with(|p| uplift_table("Offer Mechanic", &p.uplift_vs_offer))
                    }) />
                </CardAnimated>
                <CardAnimated title="Uplift vs Promo" delay_ms=180>
                    <DataTable table=Signal::derive(move || {
                        past.with(|p| uplift_table("Promo Tactic", &p.uplift_vs_promo))
                    }) />
                </CardAnimated>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uplift_table_uses_group_label() {
        let charts = vec![ComboChart {
            uplift: 12.5,
            avg_roi: 1.1,
            offer_mechanic: Some("BOGO".to_string()),
            ..ComboChart::default()
        }];

        let table = uplift_table("Offer Mechanic", &charts);

        assert_eq!(table.columns, vec!["Offer Mechanic", "Uplift", "Avg ROI"]);
        assert_eq!(DfTable::cell_text(&table.rows[0], "Offer Mechanic"), "BOGO");
        assert_eq!(table.rows[0]["Uplift"], json!(12.5));
    }

    #[test]
    fn test_volume_table_renders_x_as_text() {
        let points = vec![
            DualLine {
                x: json!("2024-W01"),
                avg_baseline: 100.0,
                avg_total_volume: 130.0,
            },
            DualLine {
                x: json!(20),
                ..DualLine::default()
            },
        ];

        let table = volume_table(&points);

        assert_eq!(DfTable::cell_text(&table.rows[0], "Period"), "2024-W01");
        assert_eq!(DfTable::cell_text(&table.rows[1], "Period"), "20");
    }
}
