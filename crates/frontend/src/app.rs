use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::state::AnalyticsStore;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Layout state (active page, sidebar, alerts) is shared via context
    provide_context(AppGlobalContext::new());

    // Request state of both analytics tools, handed down explicitly
    let store = AnalyticsStore::new();

    view! {
        <AppRoutes store=store />
    }
}
