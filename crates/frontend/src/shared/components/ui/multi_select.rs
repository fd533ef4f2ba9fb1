use super::checkbox::Checkbox;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Adds or removes `value`, keeping the order in which values were picked
pub fn toggle_value(selected: &[String], value: &str, checked: bool) -> Vec<String> {
    let mut next: Vec<String> = selected.iter().filter(|v| *v != value).cloned().collect();
    if checked {
        next.push(value.to_string());
    }
    next
}

fn summary_text(selected: &[String]) -> String {
    match selected {
        [] => "All".to_string(),
        [only] => only.clone(),
        [first, rest @ ..] => format!("{} +{}", first, rest.len()),
    }
}

/// Collapsible multi-select with a search box; nothing selected means "All"
#[component]
pub fn MultiSelect(
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    #[prop(into)]
    options: Signal<Vec<String>>,
    #[prop(into)]
    selected: Signal<Vec<String>>,
    on_change: Callback<Vec<String>>,
) -> impl IntoView {
    let open = RwSignal::new(false);
    let search = RwSignal::new(String::new());

    let visible_options = move || {
        let needle = search.get().to_lowercase();
        options
            .get()
            .into_iter()
            .filter(|option| needle.is_empty() || option.to_lowercase().contains(&needle))
            .collect::<Vec<_>>()
    };

    view! {
        <div class="multi-select">
            <div class="multi-select__header" on:click=move |_| open.update(|o| *o = !*o)>
                {icon(&icon_name)}
                <span class="multi-select__label">{label}</span>
                <span class="multi-select__summary">{move || summary_text(&selected.get())}</span>
                {move || if open.get() { icon("chevron-down") } else { icon("chevron-right") }}
            </div>
            <Show when=move || open.get()>
                <div class="multi-select__body">
                    <input
                        class="form__input multi-select__search"
                        type="text"
                        placeholder="Search..."
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                    <div class="multi-select__actions">
                        <button
                            class="link-button"
                            on:click=move |_| on_change.run(options.get_untracked())
                        >
                            "Select all"
                        </button>
                        <button class="link-button" on:click=move |_| on_change.run(Vec::new())>
                            "Clear"
                        </button>
                    </div>
                    <div class="multi-select__options">
                        <For
                            each=visible_options
                            key=|option| option.clone()
                            children=move |option| {
                                let value = option.clone();
                                let checked = Signal::derive({
                                    let value = value.clone();
                                    move || selected.with(|s| s.contains(&value))
                                });
                                view! {
                                    <Checkbox
                                        label=option
                                        checked=checked
                                        on_change=Callback::new(move |is_checked: bool| {
                                            let next = selected
                                                .with_untracked(|s| toggle_value(s, &value, is_checked));
                                            on_change.run(next);
                                        })
                                    />
                                }
                            }
                        />
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_toggle_value() {
        let selected = values(&["Acme"]);
        assert_eq!(toggle_value(&selected, "Zeta", true), values(&["Acme", "Zeta"]));
        assert_eq!(toggle_value(&selected, "Acme", false), values(&[]));
        assert_eq!(toggle_value(&selected, "Acme", true), values(&["Acme"]));
    }

    #[test]
    fn test_summary_text() {
        assert_eq!(summary_text(&[]), "All");
        assert_eq!(summary_text(&values(&["Acme"])), "Acme");
        assert_eq!(summary_text(&values(&["Acme", "B", "C"])), "Acme +2");
    }
}
