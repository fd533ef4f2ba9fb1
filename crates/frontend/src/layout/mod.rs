pub mod alerts;
pub mod global_context;
pub mod left;
pub mod top_header;

use alerts::AlertStack;
use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------+
/// |          TopHeader           |
/// +------------------------------+
/// |  Sidebar  |      Content     |
/// |   (Left)  |     (Center)     |
/// +------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <TopHeader />
            <AlertStack />
            <div class="app-body">
                <left::Left>
                    {left()}
                </left::Left>
                <div data-zone="center" class="app-main">
                    {center()}
                </div>
            </div>
        </div>
    }
}
