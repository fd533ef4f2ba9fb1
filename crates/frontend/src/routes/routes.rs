use crate::dashboards::{OptimalPromotionPage, SmartPricingPage};
use crate::layout::global_context::{AppGlobalContext, AppPage};
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::shared::state::AnalyticsStore;
use crate::system::pages::{GlossaryPage, HomePage};
use leptos::prelude::*;

/// Page selected in the navigation; both analytics pages get the store
/// explicitly
#[component]
fn ActivePage(store: AnalyticsStore) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    move || match ctx.active.get() {
        AppPage::Home => view! { <HomePage /> }.into_any(),
        AppPage::Pricing => view! { <SmartPricingPage store=store /> }.into_any(),
        AppPage::Promotion => view! { <OptimalPromotionPage store=store /> }.into_any(),
        AppPage::Glossary => view! { <GlossaryPage /> }.into_any(),
    }
}

#[component]
pub fn AppRoutes(store: AnalyticsStore) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Restore the page from the URL once, then keep the URL in sync
    ctx.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || view! { <ActivePage store=store /> }.into_any()
        />
    }
}
