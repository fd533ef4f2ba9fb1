use crate::shared::components::table::DataTable;
use crate::shared::components::ui::Select;
use crate::shared::components::{CardAnimated, SliceStatus, TabItem};
use crate::shared::state::AnalyticsStore;
use contracts::dashboards::d500_smart_pricing::{DateFreq, TrendRequest, TrendResponse};
use contracts::shared::endpoints::ResourceKey;
use contracts::shared::table::DfTable;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::{Map, Value};

/// Series shown in the trend panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendView {
    VolumeVsRevenue,
    VolumeVsPrice,
    VolumeVsDistribution,
    OwnVsCompetitorPrice,
    OwnVsCompetitorDistribution,
}

impl TrendView {
    pub const KPI: [TrendView; 3] = [
        TrendView::VolumeVsRevenue,
        TrendView::VolumeVsPrice,
        TrendView::VolumeVsDistribution,
    ];

    pub const COMPETITION: [TrendView; 2] = [
        TrendView::OwnVsCompetitorPrice,
        TrendView::OwnVsCompetitorDistribution,
    ];

    pub fn title(self) -> &'static str {
        match self {
            TrendView::VolumeVsRevenue => "Volume Vs Revenue",
            TrendView::VolumeVsPrice => "Volume Vs Price",
            TrendView::VolumeVsDistribution => "Volume Vs Distribution",
            TrendView::OwnVsCompetitorPrice => "Own Price Vs Competitor Price",
            TrendView::OwnVsCompetitorDistribution => {
                "Own Distribution Vs Competitor Distribution"
            }
        }
    }

    pub fn is_competition(self) -> bool {
        Self::COMPETITION.contains(&self)
    }

    pub fn series(self, response: &TrendResponse) -> &[Map<String, Value>] {
        match self {
            TrendView::VolumeVsRevenue => &response.volume_vs_revenue,
            TrendView::VolumeVsPrice => &response.volume_vs_price,
            TrendView::VolumeVsDistribution => &response.volume_vs_distribution,
            TrendView::OwnVsCompetitorPrice => &response.competitor_price,
            TrendView::OwnVsCompetitorDistribution => &response.competitor_distribution,
        }
    }
}

#[component]
pub fn TrendTab(
    store: AnalyticsStore,
    #[prop(into)]
    filters: Signal<Map<String, Value>>,
) -> impl IntoView {
    let slice = store.slice(ResourceKey::Trend);
    let date_freq = RwSignal::new(DateFreq::Monthly);
    let view_kind = RwSignal::new(TrendView::VolumeVsRevenue);

    let request = Memo::new(move |_| TrendRequest::new(filters.get(), date_freq.get()));
    let include_competitor = Signal::derive(move || request.with(|r| r.include_competitor));

    Effect::new(move |_| {
        let body = request.get();
        spawn_local(async move {
            store.fetch_trend(body).await;
        });
    });

    // Competitor filters were cleared while a competition view was open
    Effect::new(move |_| {
        if !include_competitor.get() && view_kind.get_untracked().is_competition() {
            view_kind.set(TrendView::VolumeVsRevenue);
        }
    });

    let trend = Signal::derive(move || {
        slice.with(|s| s.decode::<TrendResponse>()).unwrap_or_default()
    });

    let freq_options = Signal::derive(|| {
        DateFreq::ALL
            .iter()
            .map(|f| (f.code().to_string(), f.label().to_string()))
            .collect::<Vec<_>>()
    });

    let view_tabs = move |views: &'static [TrendView]| {
        views
            .iter()
            .map(|&view| view! {
                <TabItem
                    label=view.title()
                    active=Signal::derive(move || view_kind.get() == view)
                    on_select=Callback::new(move |_| view_kind.set(view))
                />
            })
            .collect_view()
    };

    view! {
        <div class="tab-content">
            <div class="tab-content__header">
                <h4>"Trend"</h4>
                <SliceStatus slice=slice />
            </div>

            <div class="tab-content__toolbar">
                <Select
                    label="Frequency"
                    value=Signal::derive(move || date_freq.get().code().to_string())
                    on_change=Callback::new(move |code: String| {
                        if let Some(freq) = DateFreq::from_code(&code) {
                            date_freq.set(freq);
                        }
                    })
                    options=freq_options
                />
                <div class="tab-bar tab-bar--small">
                    <TabItem
                        label="KPI"
                        active=Signal::derive(move || !view_kind.get().is_competition())
                        on_select=Callback::new(move |_| view_kind.set(TrendView::VolumeVsRevenue))
                    />
                    <Show when=move || include_competitor.get()>
                        <TabItem
                            label="Competition"
                            active=Signal::derive(move || view_kind.get().is_competition())
                            on_select=Callback::new(move |_| {
                                view_kind.set(TrendView::OwnVsCompetitorPrice)
                            })
                        />
                    </Show>
                </div>
            </div>

            <div class="tab-bar tab-bar--small">
                {move || {
                    if view_kind.get().is_competition() {
                        view_tabs(&TrendView::COMPETITION)
                    } else {
                        view_tabs(&TrendView::KPI)
                    }
                }}
            </div>

            <div class="panel-grid">
                <CardAnimated
                    title=Signal::derive(move || view_kind.get().title().to_string())
                    delay_ms=0
                >
                    <DataTable table=Signal::derive(move || {
                        let view = view_kind.get();
                        trend.with(|t| DfTable::from_records(view.series(t)))
                    }) />
                </CardAnimated>
                <CardAnimated title="Top Table" delay_ms=60>
                    <DataTable table=Signal::derive(move || trend.with(|t| t.top_table.clone())) />
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
    fn test_view_groups() {
        assert!(TrendView::KPI.iter().all(|v| !v.is_competition()));
        assert!(TrendView::COMPETITION.iter().all(|v| v.is_competition()));
    }

    #[test]
    fn test_series_selection() {
        let response: TrendResponse = serde_json::from_value(json!({
            "volume_vs_price": [{ "date": "2024-01", "volume": 10, "price": 4.5 }],
            "competitor_price": []
        }))
        .unwrap();

        assert_eq!(TrendView::VolumeVsPrice.series(&response).len(), 1);
        assert!(TrendView::OwnVsCompetitorPrice.series(&response).is_empty());
        assert!(TrendView::VolumeVsRevenue.series(&response).is_empty());
    }
}
