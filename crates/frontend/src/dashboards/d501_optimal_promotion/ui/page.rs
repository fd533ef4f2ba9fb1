use super::past_promotion::PastPromotionTab;
use super::performance::PerformanceTab;
use super::simulation::SimulationTab;
use crate::dashboards::d501_optimal_promotion::fields::{
    fields_for, payload_fields, sidebar_title, ALL_FILTERS,
};
use crate::shared::components::{FilterSidebar, PageHeader, TabItem};
use crate::shared::filter_fields::{build_fields, initial_filters, preferred_category, DEFAULT_CATEGORY};
use crate::shared::state::request_gate::FetchGate;
use crate::shared::state::AnalyticsStore;
use contracts::dashboards::d501_optimal_promotion::PromotionTab;
use contracts::shared::endpoints::ResourceKey;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::{Map, Value};

/// Optimal Promotion page: filter sidebar plus past promotion, performance
/// and simulation tabs
#[component]
pub fn OptimalPromotionPage(store: AnalyticsStore) -> impl IntoView {
    let active_tab = RwSignal::new(PromotionTab::PastPromotion);
    let filters = RwSignal::new(initial_filters(&ALL_FILTERS, DEFAULT_CATEGORY.to_string()));
    let first_visit = store.slice_untracked(ResourceKey::PromoOptions).needs_initial_fetch();
    let mount_key =
        filters.with_untracked(|f| FetchGate::gate_key(PromotionTab::PastPromotion.as_str(), f));
    let gate = StoredValue::new(FetchGate::seeded(first_visit.then_some(mount_key)));

    let options = store.slice(ResourceKey::PromoOptions);

    Effect::new(move |_| {
        if !first_visit {
            return;
        }
        let tab = PromotionTab::PastPromotion;
        let payload = filters.with_untracked(|f| f.project(&payload_fields(tab)));
        spawn_local(async move {
            store.fetch_promo_options(payload, tab).await;
        });
    });

    Effect::new(move |_| {
        if filters.with(|f| f.is_restricted("categories")) {
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

    Effect::new(move |_| {
        let tab = active_tab.get();
        let key = filters.with(|f| FetchGate::gate_key(tab.as_str(), f));
        if !gate.try_update_value(|g| g.should_fetch(key)).unwrap_or(false) {
            return;
        }
        let payload = filters.with_untracked(|f| f.project(&payload_fields(tab)));
        spawn_local(async move {
            store.fetch_promo_options(payload, tab).await;
        });
    });

    let clear_all = move || {
        let category = options.with_untracked(|s| preferred_category(s.data.as_ref()));
        filters.set(initial_filters(&ALL_FILTERS, category));
    };

    let select_tab = move |tab: PromotionTab| {
        active_tab.set(tab);
        clear_all();
    };

    let fields = Signal::derive(move || {
        let tab = active_tab.get();
        options.with(|s| build_fields(fields_for(tab), s.data.as_ref()))
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
                <PageHeader title="Optimal Promotion">
                    <div class="tab-bar">
                        {PromotionTab::ALL
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
                    PromotionTab::PastPromotion => {
                        view! { <PastPromotionTab store=store filters=payload /> }.into_any()
                    }
                    PromotionTab::Performance => {
                        view! { <PerformanceTab store=store filters=payload /> }.into_any()
                    }
                    PromotionTab::Simulation => {
                        view! { <SimulationTab store=store scope=filters /> }.into_any()
                    }
                }}
            </div>
        </div>
    }
}
