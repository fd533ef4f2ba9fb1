use crate::shared::components::ui::MultiSelect;
use crate::shared::filter_fields::FilterField;
use crate::shared::icons::icon;
use contracts::shared::filters::FilterSet;
use leptos::prelude::*;

/// FilterSidebar - collapsible column of multi-select filters
///
/// Each field edits `filters[field.def.name]`; an empty selection means "All".
#[component]
pub fn FilterSidebar(
    #[prop(into)]
    title: Signal<String>,
    /// Fields of the active tab with their option lists
    #[prop(into)]
    fields: Signal<Vec<FilterField>>,
    #[prop(into)]
    filters: Signal<FilterSet>,
    /// `(field name, new selection)`
    on_change: Callback<(String, Vec<String>)>,
    on_clear: Callback<()>,
) -> impl IntoView {
    let is_expanded = RwSignal::new(true);
    let active_filters_count = Memo::new(move |_| filters.with(|f| f.active_count()));

    view! {
        <aside class=move || {
            if is_expanded.get() {
                "filter-sidebar filter-sidebar--expanded"
            } else {
                "filter-sidebar filter-sidebar--collapsed"
            }
        }>
            <div class="filter-sidebar__header">
                <div
                    class="filter-sidebar__header-left"
                    on:click=move |_| is_expanded.update(|e| *e = !*e)
                >
                    {icon("filter")}
                    <span class="filter-sidebar__title">{move || title.get()}</span>
                    {move || {
                        let count = active_filters_count.get();
                        if count > 0 {
                            view! { <span class="badge badge--primary">{count}</span> }.into_any()
                        } else {
                            view! { <></> }.into_any()
                        }
                    }}
                </div>
                <button
                    class="link-button"
                    disabled=move || active_filters_count.get() == 0
                    on:click=move |_| on_clear.run(())
                >
                    "Clear all"
                </button>
            </div>

            <Show when=move || is_expanded.get()>
                <div class="filter-sidebar__content">
                    <For
                        each=move || fields.get()
                        key=|field| (field.def.name, field.options.len())
                        children=move |field: FilterField| {
                            let name = field.def.name;
                            let options = field.options.clone();
                            view! {
                                <MultiSelect
                                    label=field.def.label
                                    icon_name=field.def.icon
                                    options=Signal::derive(move || options.clone())
                                    selected=Signal::derive(move || {
                                        filters.with(|f| f.get(name).to_vec())
                                    })
                                    on_change=Callback::new(move |values: Vec<String>| {
                                        on_change.run((name.to_string(), values));
                                    })
                                />
                            }
                        }
                    />
                </div>
            </Show>
        </aside>
    }
}
