use crate::dashboards::d501_optimal_promotion::fields::{payload_fields, EVENT_SELECTION_FIELDS};
use crate::dashboards::d501_optimal_promotion::validation::validate_events;
use crate::layout::global_context::{AlertKind, AppGlobalContext};
use crate::shared::components::table::{format_compact, format_number_with_decimals, DataTable};
use crate::shared::components::ui::{Button, ButtonVariant, Input, MultiSelect};
use crate::shared::components::{BarItem, BarList, CardAnimated, EventPager, KpiCard, SliceStatus};
use crate::shared::filter_fields::build_fields;
use crate::shared::icons::icon;
use crate::shared::state::promo_session::{EventInput, SessionPatch, MAX_EVENTS};
use crate::shared::state::AnalyticsStore;
use contracts::dashboards::d501_optimal_promotion::{
    PromoSimulationRequest, PromoSimulationResponse, PromotionTab, SalesLinePoint,
};
use contracts::shared::endpoints::ResourceKey;
use contracts::shared::filters::FilterSet;
use contracts::shared::table::DfTable;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::{json, Map};

/// Event count typed on the start screen, between one and [`MAX_EVENTS`]
pub fn parse_event_count(text: &str) -> Option<usize> {
    text.trim()
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=MAX_EVENTS).contains(n))
}

pub fn baseline_vs_promo_table(points: &[SalesLinePoint]) -> DfTable {
    DfTable {
        columns: vec![
            "Label".to_string(),
            "Baseline Sales".to_string(),
            "Promo Sales".to_string(),
        ],
        rows: points
            .iter()
            .map(|p| {
                let mut row = Map::new();
                row.insert("Label".to_string(), json!(p.label));
                row.insert("Baseline Sales".to_string(), json!(p.baseline_sales));
                row.insert("Promo Sales".to_string(), json!(p.promo_sales));
                row
            })
            .collect(),
    }
}

/// Multi-event promotion simulation. The draft lives in the store session,
/// so it survives switching tabs.
#[component]
pub fn SimulationTab(
    store: AnalyticsStore,
    /// Page filters; their simulation fields scope the run
    #[prop(into)]
    scope: Signal<FilterSet>,
) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let session = store.promo_session();
    let slice = store.slice(ResourceKey::PromoSimulation);
    let options = store.slice(ResourceKey::PromoOptions);

    let event_val = RwSignal::new(session.with_untracked(|s| {
        if s.is_started() {
            s.num_events.to_string()
        } else {
            String::new()
        }
    }));
    let active_event = RwSignal::new(Some(0usize));

    Effect::new(move |_| {
        let current = scope.get();
        if session.with_untracked(|s| s.global_filters != current) {
            store.set_promo_simulation_state(SessionPatch::global_filters(current));
        }
    });

    let start = move |_: leptos::ev::MouseEvent| {
        if let Some(count) = event_val.with_untracked(|v| parse_event_count(v)) {
            store.set_promo_simulation_state(SessionPatch::num_events(count));
            active_event.set(Some(0));
        }
    };

    let new_simulation = move |_: leptos::ev::MouseEvent| {
        event_val.set(String::new());
        active_event.set(Some(0));
        store.reset_promotion_simulation();
    };

    let run = move |_: leptos::ev::MouseEvent| {
        let events = session.with_untracked(|s| s.event_filters.clone());
        let event_filters = match validate_events(&events) {
            Ok(payload) => payload,
            Err(e) => {
                active_event.set(Some(e.event()));
                ctx.show_alert(e.to_string(), AlertKind::Danger);
                return;
            }
        };
        let global = scope.get_untracked();
        let request = PromoSimulationRequest {
            filters: global.project(&payload_fields(PromotionTab::Simulation)),
            event_filters,
        };
        store.set_promo_simulation_state(SessionPatch::global_filters(global));
        spawn_local(async move {
            store.run_promotion_simulation(request).await;
        });
    };

    let event_fields = Signal::derive(move || {
        options.with(|s| build_fields(&EVENT_SELECTION_FIELDS, s.data.as_ref()))
    });

    let result = Signal::derive(move || {
        slice.with(|s| s.decode::<PromoSimulationResponse>())
    });
    let has_result = move || session.with(|s| s.is_started()) && result.with(|r| r.is_some());
    let result_or_default = move || result.get().unwrap_or_default();

    let event_editor = move |idx: usize| {
        let selections = move || {
            event_fields
                .get()
                .into_iter()
                .map(|field| {
                    let name = field.def.name;
                    let options = field.options.clone();
                    view! {
                        <MultiSelect
                            label=field.def.label
                            icon_name=field.def.icon
                            options=Signal::derive(move || options.clone())
                            selected=Signal::derive(move || {
                                session.with(|s| {
                                    s.event(idx).map(|e| e.selection(name).to_vec()).unwrap_or_default()
                                })
                            })
                            on_change=Callback::new(move |values: Vec<String>| {
                                store.update_promo_event(idx, |e| e.set_selection(name, values));
                            })
                        />
                    }
                })
                .collect_view()
        };
        let inputs = EventInput::ALL
            .into_iter()
            .map(|input| view! {
                <Input
                    label=input.label()
                    input_type=input.input_type()
                    min=(input.input_type() == "number").then(|| "0".to_string())
                    value=Signal::derive(move || {
                        session.with(|s| {
                            s.event(idx).and_then(|e| e.input(input)).unwrap_or_default().to_string()
                        })
                    })
                    on_input=Callback::new(move |text: String| {
                        store.update_promo_event(idx, |e| e.set_input(input, text));
                    })
                />
            })
            .collect_view();

        view! {
            <CardAnimated title=format!("Event {}", idx + 1) delay_ms=0>
                <div class="event-editor__selections">{selections}</div>
                <div class="event-editor__inputs">{inputs}</div>
            </CardAnimated>
        }
    };

    view! {
        <div class="tab-content">
            <div class="tab-content__header">
                <h4>"Simulation"</h4>
                <SliceStatus slice=slice />
            </div>

            <Show
                when=move || session.with(|s| s.is_started())
                fallback=move || view! {
                    <div class="simulation-start">
                        <h5>{format!("Number of events required to start simulation, from 1 to {}", MAX_EVENTS)}</h5>
                        <Input
                            input_type="number"
                            min="1"
                            placeholder="Enter number of events..."
                            value=event_val
                            on_input=Callback::new(move |text: String| event_val.set(text))
                        />
                        <Button
                            variant=ButtonVariant::Secondary
                            disabled=Signal::derive(move || event_val.with(|v| parse_event_count(v).is_none()))
                            on_click=Callback::new(start)
                        >
                            {move || match event_val.with(|v| parse_event_count(v)) {
                                Some(n) => format!("Proceed with {}", n),
                                None => "Enter Events".to_string(),
                            }}
                        </Button>
                    </div>
                }
            >
                <div class="tab-content__toolbar">
                    <EventPager
                        count=Signal::derive(move || session.with(|s| s.num_events))
                        active=active_event
                        on_select=Callback::new(move |idx: usize| active_event.set(Some(idx)))
                    />
                    <div class="tab-content__actions">
                        <Button
                            variant=ButtonVariant::Ghost
                            small=true
                            on_click=Callback::new(move |_| active_event.set(None))
                        >
                            "Collapse All"
                        </Button>
                        <Button
                            variant=ButtonVariant::Success
                            small=true
                            on_click=Callback::new(new_simulation)
                        >
                            "New Simulation"
                        </Button>
                    </div>
                </div>

                {move || active_event.get().map(event_editor)}

                <div class="tab-content__toolbar">
                    <Button
                        disabled=Signal::derive(move || slice.with(|s| s.loading))
                        on_click=Callback::new(run)
                    >
                        {icon("play")}
                        " Run Simulation"
                    </Button>
                </div>
            </Show>

            <Show when=has_result>
                <div class="kpi-row">
                    {move || {
                        result_or_default()
                            .events
                            .into_iter()
                            .map(|event| view! {
                                <KpiCard
                                    label=format!("Event {} ROI", event.promo_index)
                                    value=format_number_with_decimals(event.roi, 2)
                                    index=event.promo_index as usize
                                />
                            })
                            .collect_view()
                    }}
                </div>
                <div class="panel-grid">
                    <CardAnimated title="Baseline vs Promo Sales" delay_ms=0>
                        <DataTable table=Signal::derive(move || {
                            baseline_vs_promo_table(&result_or_default().baseline_vs_promo)
                        }) />
                    </CardAnimated>
                    <CardAnimated
                        title=Signal::derive(move || {
                            let pie = result_or_default().pie_chart;
                            format!("Sales Split (total {})", format_compact(pie.total_sales))
                        })
                        delay_ms=60
                    >
                        <BarList
                            items=Signal::derive(move || {
                                result_or_default()
                                    .pie_chart
                                    .segments
                                    .into_iter()
                                    .map(|s| BarItem::new(s.name, s.value))
                                    .collect::<Vec<_>>()
                            })
                            format=format_compact
                        />
                    </CardAnimated>
                    <CardAnimated title="Simulation Results" delay_ms=120>
                        <DataTable table=Signal::derive(move || result_or_default().df_table) />
                    </CardAnimated>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_event_count() {
        assert_eq!(parse_event_count("3"), Some(3));
        assert_eq!(parse_event_count(" 12 "), Some(12));
        assert_eq!(parse_event_count("0"), None);
        assert_eq!(parse_event_count(""), None);
        assert_eq!(parse_event_count("-2"), None);
        assert_eq!(parse_event_count("2.5"), None);
    }

    #[test]
    fn test_parse_event_count_upper_bound() {
        assert_eq!(parse_event_count(&MAX_EVENTS.to_string()), Some(MAX_EVENTS));
        assert_eq!(parse_event_count(&(MAX_EVENTS + 1).to_string()), None);
        assert_eq!(parse_event_count("18446744073709551615"), None);
        assert_eq!(parse_event_count("100000000"), None);
    }

    #[test]
    fn test_baseline_vs_promo_table() {
        let table = baseline_vs_promo_table(&[SalesLinePoint {
            label: "Event 1".to_string(),
            baseline_sales: 1000.0,
            promo_sales: 1400.0,
        }]);
        assert_eq!(table.columns.len(), 3);
        assert_eq!(DfTable::cell_text(&table.rows[0], "Label"), "Event 1");
        assert_eq!(table.rows[0]["Promo Sales"], json!(1400.0));
    }
}
