use contracts::shared::table::{value_text, Kpi};
use leptos::prelude::*;

/// Six gradient styles cycled across a card row
const GRADIENTS: usize = 6;

pub fn gradient_class(index: usize) -> String {
    format!("kpi-card kpi-card--grad-{}", index % GRADIENTS + 1)
}

/// Single KPI tile
#[component]
pub fn KpiCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Already formatted value
    #[prop(into)]
    value: String,
    /// Position in the row, selects the gradient
    #[prop(optional)]
    index: usize,
) -> impl IntoView {
    view! {
        <div class=gradient_class(index)>
            <div class="kpi-card__label">{label}</div>
            <div class="kpi-card__value">{value}</div>
        </div>
    }
}

/// Row of KPI tiles as sent by the backend (`[{label, value}]`)
#[component]
pub fn KpiCards(#[prop(into)] kpis: Signal<Vec<Kpi>>) -> impl IntoView {
    view! {
        <div class="kpi-row">
            {move || {
                kpis.get()
                    .into_iter()
                    .enumerate()
                    .map(|(index, kpi)| {
                        view! { <KpiCard label=kpi.label value=value_text(&kpi.value) index=index /> }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_class_cycles() {
        assert_eq!(gradient_class(0), "kpi-card kpi-card--grad-1");
        assert_eq!(gradient_class(5), "kpi-card kpi-card--grad-6");
        assert_eq!(gradient_class(6), "kpi-card kpi-card--grad-1");
    }
}
