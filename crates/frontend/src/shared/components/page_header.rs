use leptos::prelude::*;

/// Page title with the tab bar of an analytics tool
#[component]
pub fn PageHeader(
    /// Page title (required)
    #[prop(into)]
    title: String,

    /// Optional subtitle
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Tab bar or actions on the right
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__text">
                <h1 class="page-header__title">{title}</h1>
                {move || subtitle.get().map(|s| view! {
                    <div class="page-header__subtitle">{s}</div>
                })}
            </div>
            <div class="page-header__actions">
                {children()}
            </div>
        </div>
    }
}

/// One entry of a page tab bar
#[component]
pub fn TabItem(
    #[prop(into)]
    label: String,
    #[prop(into)]
    active: Signal<bool>,
    on_select: Callback<()>,
) -> impl IntoView {
    view! {
        <div
            class=move || if active.get() { "tab-item tab-item--active" } else { "tab-item" }
            on:click=move |_| on_select.run(())
        >
            {label}
        </div>
    }
}
