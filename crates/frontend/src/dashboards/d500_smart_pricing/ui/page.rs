use super::contribution::ContributionTab;
use super::simulation::SimulationTab;
use super::summary::SummaryTab;
use super::trend::TrendTab;
use crate::dashboards::d500_smart_pricing::fields::{
    fields_for, payload_fields, sidebar_title, ALL_FILTERS,
};
use crate::shared::components::{FilterSidebar, PageHeader, TabItem};
use crate::shared::filter_fields::{build_fields, initial_filters, preferred_category, DEFAULT_CATEGORY};
use crate::shared::state::request_gate::FetchGate;
use crate::shared::state::AnalyticsStore;
use contracts::dashboards::d500_smart_pricing::{OptionsTab, PricingTab};
use contracts::shared::endpoints::ResourceKey;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::{Map, Value};

/// Smart Pricing page: filter sidebar plus the four analysis tabs
#[component]
pub fn SmartPricingPage(store: AnalyticsStore) -> impl IntoView {
    let active_tab = RwSignal::new(PricingTab::Summary);
    let filters = RwSignal::new(initial_filters(&ALL_FILTERS, DEFAULT_CATEGORY.to_string()));
    let first_visit = store.slice_untracked(ResourceKey::Options).needs_initial_fetch();
    let mount_key = filters.with_untracked(|f| FetchGate::gate_key(PricingTab::Summary.as_str(), f));
    let gate = StoredValue::new(FetchGate::seeded(first_visit.then_some(mount_key)));

    let options = store.slice(ResourceKey::Options);
    let trend_options = store.slice(ResourceKey::TrendOptions);

    // First visit: nothing loaded yet
    Effect::new(move |_| {
        if !first_visit {
            return;
        }
        let payload = filters.with_untracked(|f| f.project(&payload_fields(PricingTab::Summary)));
        spawn_local(async move {
            store.fetch_options(payload, OptionsTab::Summary).await;
        });
        spawn_local(async move {
            store.fetch_trend_options(Map::new()).await;
        });
    });

    // Default category once options are known
    Effect::new(move |_| {
        let no_category = filters.with(|f| !f.is_restricted("categories"));
        if !no_category {
            return;
        }
        let offered = options.with(|s| {
            s.data
                .as_ref()
                .and_then(|d| d.get("categories"))
                .and_then(Value::as_array)
                .map_or(false, |c| !c.is_empty())
        });
        if offered {
            let category = options.with_untracked(|s| preferred_category(s.data.as_ref()));
            filters.update(|f| f.set("categories", vec![category]));
        }
    });

    // Options follow the active tab and filters
    Effect::new(move |_| {
        let tab = active_tab.get();
        let key = filters.with(|f| FetchGate::gate_key(tab.as_str(), f));
        if !gate.try_update_value(|g| g.should_fetch(key)).unwrap_or(false) {
            return;
        }
        let payload = filters.with_untracked(|f| f.project(&payload_fields(tab)));
        spawn_local(async move {
            match tab.options_tab() {
                Some(options_tab) => {
                    store.fetch_options(payload, options_tab).await;
                }
                None => {
                    store.fetch_trend_options(payload).await;
                }
            }
        });
    });

    let clear_all = move || {
        let category = options.with_untracked(|s| preferred_category(s.data.as_ref()));
        filters.set(initial_filters(&ALL_FILTERS, category));
    };

    let select_tab = move |tab: PricingTab| {
        active_tab.set(tab);
        clear_all();
    };

    let fields = Signal::derive(move || {
        let tab = active_tab.get();
        let source = if tab == PricingTab::Trend { trend_options } else { options };
        source.with(|s| build_fields(fields_for(tab), s.data.as_ref()))
    });

    let payload: Signal<Map<String, Value>> = Memo::new(move |_| {
        let tab = active_tab.get();
        filters.with(|f| f.project(&payload_fields(tab)))
    })
    .into();

    view! {
        <div class="analytics-page">
            <FilterSidebar
                title=Signal::derive(move || sidebar_title(active_tab.get()).to_string())
                fields=fields
                filters=filters
                on_change=Callback::new(move |(name, values): (String, Vec<String>)| {
                    filters.update(|f| f.set(&name, values));
                })
                on_clear=Callback::new(move |_| clear_all())
            />
            <div class="analytics-page__content">
                <PageHeader title="Smart Pricing">
                    <div class="tab-bar">
                        {PricingTab::ALL
                            .into_iter()
                            .map(|tab| view! {
                                <TabItem
                                    label=tab.title()
                                    active=Signal::derive(move || active_tab.get() == tab)
                                    on_select=Callback::new(move |_| select_tab(tab))
                                />
                            })
                            .collect_view()}
                    </div>
                </PageHeader>
                {move || match active_tab.get() {
                    PricingTab::Summary => view! { <SummaryTab store=store filters=payload /> }.into_any(),
                    PricingTab::Trend => view! { <TrendTab store=store filters=payload /> }.into_any(),
                    PricingTab::Contribution => {
                        view! { <ContributionTab store=store filters=payload /> }.into_any()
                    }
                    PricingTab::Simulation => {
                        view! { <SimulationTab store=store filters=payload /> }.into_any()
                    }
                }}
            </div>
        </div>
    }
}
