//! Navigation between the home page, both analytics tools and the glossary

use crate::layout::global_context::{AppGlobalContext, AppPage};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <nav class="sidebar">
            <ul class="sidebar__menu">
                {AppPage::ALL
                    .into_iter()
                    .map(|page| view! {
                        <li
                            class=move || {
                                if ctx.active.get() == page {
                                    "sidebar__item sidebar__item--active"
                                } else {
                                    "sidebar__item"
                                }
                            }
                            on:click=move |_| ctx.navigate(page)
                        >
                            {icon(page.icon())}
                            <span class="sidebar__label">{page.title()}</span>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
