use crate::shared::components::table::DataTable;
use crate::shared::components::{CardAnimated, KpiCards, SliceStatus};
use crate::shared::state::AnalyticsStore;
use contracts::dashboards::d500_smart_pricing::{RevenueSeries, RevenueShareEntry, SummaryResponse};
use contracts::shared::endpoints::ResourceKey;
use contracts::shared::table::DfTable;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::{json, Map, Value};

/// Fair share against revenue share per manufacturer
pub fn fair_share_table(entries: &[RevenueShareEntry]) -> DfTable {
    DfTable {
        columns: vec![
            "Manufacturer".to_string(),
            "Fair Share".to_string(),
            "Revenue Share".to_string(),
        ],
        rows: entries
            .iter()
            .map(|e| {
                row([
                    ("Manufacturer", json!(e.manufacturer)),
                    ("Fair Share", json!(e.fair_share)),
                    ("Revenue Share", json!(e.revenue_share)),
                ])
            })
            .collect(),
    }
}

/// Manufacturers as rows, periods as columns in first-seen order
pub fn series_table(series: &[RevenueSeries]) -> DfTable {
    let mut columns = vec!["Manufacturer".to_string()];
    for point in series.iter().flat_map(|s| s.points.iter()) {
        if !columns.contains(&point.period) {
            columns.push(point.period.clone());
        }
    }
    let rows = series
        .iter()
        .map(|s| {
            let mut cells = Map::new();
            cells.insert("Manufacturer".to_string(), json!(s.manufacturer));
            for point in &s.points {
                cells.insert(point.period.clone(), json!(point.value));
            }
            cells
        })
        .collect();
    DfTable { columns, rows }
}

fn row<const N: usize>(cells: [(&str, Value); N]) -> Map<String, Value> {
    cells
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}

#[component]
pub fn SummaryTab(
    store: AnalyticsStore,
    #[prop(into)]
    filters: Signal<Map<String, Value>>,
) -> impl IntoView {
    let slice = store.slice(ResourceKey::Summary);

    Effect::new(move |_| {
        let payload = filters.get();
        spawn_local(async move {
            store.fetch_summary(payload).await;
        });
    });

    let summary = Signal::derive(move || {
        slice.with(|s| s.decode::<SummaryResponse>()).unwrap_or_default()
    });

    view! {
        <div class="tab-content">
            <div class="tab-content__header">
                <h4>"Summary"</h4>
                <span class="tab-content__period">
                    {move || summary.with(|s| s.assessment_period.clone())}
                </span>
                <SliceStatus slice=slice />
            </div>

            <KpiCards kpis=Signal::derive(move || summary.with(|s| s.kpis.clone())) />

            <div class="panel-grid">
                <CardAnimated title="Fair Share vs Revenue Share" delay_ms=0>
                    <DataTable table=Signal::derive(move || {
                        summary.with(|s| fair_share_table(&s.fair_share_vs_revenue))
                    }) />
                </CardAnimated>
                <CardAnimated title="Revenue by Manufacturer" delay_ms=60>
                    <DataTable table=Signal::derive(move || {
                        summary.with(|s| series_table(&s.revenue_by_manufacturer))
                    }) />
                </CardAnimated>
                <CardAnimated
                    title=Signal::derive(move || {
                        summary.with(|s| unit_title("Revenue Table", &s.revenue_table.value_unit))
                    })
                    delay_ms=120
                >
                    <DataTable table=Signal::derive(move || summary.with(|s| s.revenue_table.as_table())) />
                </CardAnimated>
                <CardAnimated
                    title=Signal::derive(move || {
                        summary.with(|s| unit_title("Revenue by Retailer", &s.revenue_by_retailer.value_unit))
                    })
                    delay_ms=180
                >
                    <DataTable table=Signal::derive(move || {
                        summary.with(|s| DfTable::from_records(&s.revenue_by_retailer.items))
                    }) />
                </CardAnimated>
            </div>
        </div>
    }
}

fn unit_title(title: &str, unit: &str) -> String {
    if unit.is_empty() {
        title.to_string()
    } else {
        format!("{} ({})", title, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d500_smart_pricing::SeriesPoint;

    fn point(period: &str, value: f64) -> SeriesPoint {
        SeriesPoint {
            period: period.to_string(),
            value,
        }
    }

    #[test]
    fn test_series_table_pivots_periods() {
        let series = vec![
            RevenueSeries {
                manufacturer: "Acme".to_string(),
                points: vec![point("2022", 1.0), point("2023", 2.0)],
            },
            RevenueSeries {
                manufacturer: "Zeta".to_string(),
                points: vec![point("2023", 3.0), point("2024", 4.0)],
            },
        ];

        let table = series_table(&series);

        assert_eq!(table.columns, vec!["Manufacturer", "2022", "2023", "2024"]);
        assert_eq!(table.rows[1]["2024"], json!(4.0));
        assert!(table.rows[1].get("2022").is_none());
    }

    #[test]
    fn test_fair_share_table() {
        let table = fair_share_table(&[RevenueShareEntry {
            manufacturer: "Acme".to_string(),
            fair_share: 0.3,
            revenue_share: 0.25,
        }]);
        assert_eq!(table.rows.len(), 1);
        assert_eq!(DfTable::cell_text(&table.rows[0], "Manufacturer"), "Acme");
    }

    #[test]
    fn test_unit_title() {
        assert_eq!(unit_title("Revenue Table", "M"), "Revenue Table (M)");
        assert_eq!(unit_title("Revenue Table", ""), "Revenue Table");
    }
}
