use crate::layout::global_context::{AlertKind, AppGlobalContext};
use crate::shared::components::table::DataTable;
use crate::shared::components::ui::{Button, ButtonVariant};
use crate::shared::components::{CardAnimated, KpiCards, SliceStatus, TabItem};
use crate::shared::export::export_performance_table;
use crate::shared::icons::icon;
use crate::shared::state::AnalyticsStore;
use contracts::dashboards::d501_optimal_promotion::{PerformanceResponse, PerformanceTable};
use contracts::shared::endpoints::ResourceKey;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::{Map, Value};

#[component]
pub fn PerformanceTab(
    store: AnalyticsStore,
    #[prop(into)]
    filters: Signal<Map<String, Value>>,
) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let slice = store.slice(ResourceKey::Performance);
    let active_table = RwSignal::new(PerformanceTable::Mechanics);
    let exporting = RwSignal::new(false);

    Effect::new(move |_| {
        let payload = filters.get();
        spawn_local(async move {
            store.fetch_performance(payload).await;
        });
    });

    let performance = Signal::derive(move || {
        slice.with(|s| s.decode::<PerformanceResponse>()).unwrap_or_default()
    });

    let export = move |_: leptos::ev::MouseEvent| {
        let table = active_table.get_untracked();
        let payload = filters.get_untracked();
        exporting.set(true);
        spawn_local(async move {
            match export_performance_table(table, payload).await {
                Ok(()) => ctx.show_alert(
                    format!("{} exported", table.file_name()),
                    AlertKind::Success,
                ),
                Err(e) => {
                    log::warn!("Export of {} failed: {}", table.as_str(), e);
                    ctx.show_alert(format!("Export failed: {}", e), AlertKind::Danger);
                }
            }
            let _ = exporting.try_set(false);
        });
    };

    view! {
        <div class="tab-content">
            <div class="tab-content__header">
                <h4>"Performance"</h4>
                <SliceStatus slice=slice />
            </div>

            <KpiCards kpis=Signal::derive(move || performance.with(|p| p.metrics.clone())) />

            <div class="tab-content__toolbar">
                <div class="tab-bar tab-bar--small">
                    {PerformanceTable::ALL
                        .into_iter()
                        .map(|table| view! {
                            <TabItem
                                label=table.title()
                                active=Signal::derive(move || active_table.get() == table)
                                on_select=Callback::new(move |_| active_table.set(table))
                            />
                        })
                        .collect_view()}
                </div>
                <Button
                    variant=ButtonVariant::Secondary
                    small=true
                    disabled=Signal::derive(move || exporting.get())
                    on_click=Callback::new(export)
                >
                    {icon("download")}
                    " Export CSV"
                </Button>
            </div>

            <CardAnimated
                title=Signal::derive(move || active_table.get().title().to_string())
                delay_ms=0
            >
                <DataTable table=Signal::derive(move || {
                    let table = active_table.get();
                    performance.with(|p| p.table(table).clone())
                }) />
            </CardAnimated>
        </div>
    }
}
