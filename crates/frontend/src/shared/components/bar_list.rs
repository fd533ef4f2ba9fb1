use leptos::prelude::*;

/// One labelled bar
#[derive(Debug, Clone, PartialEq)]
pub struct BarItem {
    pub label: String,
    pub value: f64,
}

impl BarItem {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Bar width in percent of the largest absolute value
pub fn bar_width(value: f64, max_abs: f64) -> f64 {
    if max_abs <= 0.0 || !value.is_finite() {
        0.0
    } else {
        (value.abs() / max_abs * 100.0).min(100.0)
    }
}

pub fn max_abs(items: &[BarItem]) -> f64 {
    items
        .iter()
        .map(|item| item.value.abs())
        .filter(|v| v.is_finite())
        .fold(0.0, f64::max)
}

/// Horizontal bars scaled to the largest value; negative values are drawn
/// in the negative colour
#[component]
pub fn BarList(
    #[prop(into)]
    items: Signal<Vec<BarItem>>,
    /// Formats the value printed next to each bar
    format: fn(f64) -> String,
) -> impl IntoView {
    view! {
        <div class="bar-list">
            {move || {
                let items = items.get();
                if items.is_empty() {
                    return view! { <div class="bar-list__empty">"No data"</div> }.into_any();
                }
                let max = max_abs(&items);
                items
                    .into_iter()
                    .map(|item| {
                        let width = format!("width: {:.1}%;", bar_width(item.value, max));
                        let class = if item.value < 0.0 {
                            "bar-list__bar bar-list__bar--negative"
                        } else {
                            "bar-list__bar"
                        };
                        view! {
                            <div class="bar-list__row">
                                <span class="bar-list__label">{item.label}</span>
                                <span class="bar-list__track">
                                    <span class=class style=width></span>
                                </span>
                                <span class="bar-list__value">{format(item.value)}</span>
                            </div>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_width() {
        assert_eq!(bar_width(50.0, 200.0), 25.0);
        assert_eq!(bar_width(-200.0, 200.0), 100.0);
        assert_eq!(bar_width(10.0, 0.0), 0.0);
        assert_eq!(bar_width(f64::NAN, 10.0), 0.0);
    }

    #[test]
    fn test_max_abs() {
        let items = vec![BarItem::new("a", -3.0), BarItem::new("b", 2.0)];
        assert_eq!(max_abs(&items), 3.0);
        assert_eq!(max_abs(&[]), 0.0);
    }
}
