use crate::dashboards::d500_smart_pricing::simulation_inputs::{Baseline, SimulationInputs};
use crate::shared::components::table::{format_compact, DataTable};
use crate::shared::components::ui::{Button, ButtonVariant, Input};
use crate::shared::components::{BarItem, BarList, CardAnimated, KpiCards, SliceStatus};
use crate::shared::state::AnalyticsStore;
use contracts::dashboards::d500_smart_pricing::{ComparisonBars, SimulationRequest, SimulationResponse};
use contracts::shared::endpoints::ResourceKey;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::{Map, Value};

fn bar_items(bars: &ComparisonBars) -> Vec<BarItem> {
    bars.bars
        .iter()
        .map(|b| BarItem::new(b.label.clone(), b.value))
        .collect()
}

fn bars_title(bars: &ComparisonBars, fallback: &str) -> String {
    match (bars.title.is_empty(), bars.unit.is_empty()) {
        (true, _) => fallback.to_string(),
        (false, true) => bars.title.clone(),
        (false, false) => format!("{} ({})", bars.title, bars.unit),
    }
}

/// What-if price simulation. Every filter change runs the baseline and resets
/// the form to the returned base values.
#[component]
pub fn SimulationTab(
    store: AnalyticsStore,
    #[prop(into)]
    filters: Signal<Map<String, Value>>,
) -> impl IntoView {
    let slice = store.slice(ResourceKey::Simulation);
    let inputs = RwSignal::new(SimulationInputs::default());
    let baseline = RwSignal::new(Baseline::default());

    let run_baseline = move |payload: Map<String, Value>| {
        spawn_local(async move {
            let Some(data) = store.run_simulation(SimulationRequest::baseline(payload)).await else {
                return;
            };
            if let Ok(response) = serde_json::from_value::<SimulationResponse>(data) {
                let base = Baseline::from_response(&response);
                baseline.set(base);
                inputs.set(SimulationInputs::at_baseline(base));
            }
        });
    };

    Effect::new(move |_| run_baseline(filters.get()));

    let run = move |_: leptos::ev::MouseEvent| {
        let request = inputs.with_untracked(|i| i.to_request(filters.get_untracked()));
        spawn_local(async move {
            store.run_simulation(request).await;
        });
    };

    let reset = move |_: leptos::ev::MouseEvent| {
        inputs.set(SimulationInputs::at_baseline(baseline.get_untracked()));
        run_baseline(filters.get_untracked());
    };

    let simulation = Signal::derive(move || {
        slice.with(|s| s.decode::<SimulationResponse>()).unwrap_or_default()
    });
    let field = move |read: fn(&SimulationInputs) -> String| {
        Signal::derive(move || inputs.with(read))
    };

    view! {
        <div class="tab-content">
            <div class="tab-content__header">
                <h4>"Simulation"</h4>
                <SliceStatus slice=slice />
            </div>

            <div class="panel-grid panel-grid--form">
                <CardAnimated title="Own Price" delay_ms=0>
                    <Input
                        label="Price Change (%)"
                        input_type="number"
                        step="0.1"
                        value=field(|i| i.price_change_pct.clone())
                        on_input=Callback::new(move |text: String| {
                            let base = baseline.get_untracked().price;
                            inputs.update(|i| i.set_price_change(text, base));
                        })
                    />
                    <Input
                        label="New Price"
                        input_type="number"
                        step="0.01"
                        value=field(|i| i.new_price.clone())
                        on_input=Callback::new(move |text: String| {
                            let base = baseline.get_untracked().price;
                            inputs.update(|i| i.set_new_price(text, base));
                        })
                    />
                </CardAnimated>
                <CardAnimated title="Competitor Price" delay_ms=60>
                    <Input
                        label="Competitor Price Change (%)"
                        input_type="number"
                        step="0.1"
                        value=field(|i| i.comp_change_pct.clone())
                        on_input=Callback::new(move |text: String| {
                            let base = baseline.get_untracked().comp_price;
                            inputs.update(|i| i.set_comp_change(text, base));
                        })
                    />
                    <Input
                        label="New Competitor Price"
                        input_type="number"
                        step="0.01"
                        value=field(|i| i.new_comp_price.clone())
                        on_input=Callback::new(move |text: String| {
                            let base = baseline.get_untracked().comp_price;
                            inputs.update(|i| i.set_new_comp_price(text, base));
                        })
                    />
                </CardAnimated>
                <CardAnimated title="Distribution" delay_ms=120>
                    <Input
                        label="New Distribution"
                        input_type="number"
                        min="0"
                        value=field(|i| i.new_distribution.clone())
                        on_input=Callback::new(move |text: String| {
                            inputs.update(|i| i.new_distribution = text);
                        })
                    />
                </CardAnimated>
            </div>

            <div class="tab-content__toolbar">
                <Button
                    disabled=Signal::derive(move || slice.with(|s| s.loading))
                    on_click=Callback::new(run)
                >
                    "Run Simulation"
                </Button>
                <Button variant=ButtonVariant::Secondary on_click=Callback::new(reset)>
                    "Reset"
                </Button>
            </div>

            <KpiCards kpis=Signal::derive(move || simulation.with(|s| s.summary_cards.clone())) />

            <div class="panel-grid">
                <CardAnimated
                    title=Signal::derive(move || simulation.with(|s| bars_title(&s.volume_bars, "Volume")))
                    delay_ms=0
                >
                    <BarList
                        items=Signal::derive(move || simulation.with(|s| bar_items(&s.volume_bars)))
                        format=format_compact
                    />
                </CardAnimated>
                <CardAnimated
                    title=Signal::derive(move || simulation.with(|s| bars_title(&s.revenue_bars, "Revenue")))
                    delay_ms=60
                >
                    <BarList
                        items=Signal::derive(move || simulation.with(|s| bar_items(&s.revenue_bars)))
                        format=format_compact
                    />
                </CardAnimated>
                <CardAnimated title="Simulation Table" delay_ms=120>
                    <DataTable table=Signal::derive(move || simulation.with(|s| s.table.clone())) />
                </CardAnimated>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bars_title() {
        let mut bars = ComparisonBars::default();
        assert_eq!(bars_title(&bars, "Volume"), "Volume");
        bars.title = "Volume Impact".to_string();
        assert_eq!(bars_title(&bars, "Volume"), "Volume Impact");
        bars.unit = "units".to_string();
        assert_eq!(bars_title(&bars, "Volume"), "Volume Impact (units)");
    }
}
