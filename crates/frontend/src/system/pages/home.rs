use crate::layout::global_context::{AppGlobalContext, AppPage};
use crate::shared::components::CardAnimated;
use crate::shared::icons::icon;
use leptos::prelude::*;

struct ToolCard {
    page: AppPage,
    summary: &'static str,
    highlights: [&'static str; 3],
}

static TOOLS: [ToolCard; 2] = [
    ToolCard {
        page: AppPage::Pricing,
        summary: "Simulate price changes, forecast revenue impact and find the price points that work across products and channels.",
        highlights: [
            "Elasticity-driven simulations on historical data",
            "Scenario planning with competitor and distribution inputs",
            "Revenue, volume and share views by manufacturer and retailer",
        ],
    },
    ToolCard {
        page: AppPage::Promotion,
        summary: "Review past promotions and plan new events with uplift and ROI estimated per event.",
        highlights: [
            "Uplift by discount depth, offer mechanic and tactic",
            "Performance tables by PPG, retailer and subsegment with CSV export",
            "Multi-event simulation with per-event ROI",
        ],
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="home-page">
            <div class="home-page__hero">
                <h1>"Pricing & Promotion Optimization"</h1>
                <p>"Analytics for pricing decisions and promotion planning"</p>
            </div>
            <div class="panel-grid">
                {TOOLS
                    .iter()
                    .enumerate()
                    .map(|(index, tool)| {
                        let page = tool.page;
                        view! {
                            <CardAnimated title=page.title() delay_ms={index as u32 * 80}>
                                <p class="home-page__summary">{tool.summary}</p>
                                <ul class="home-page__highlights">
                                    {tool.highlights.iter().map(|h| view! { <li>{*h}</li> }).collect_view()}
                                </ul>
                                <button
                                    class="button button--primary"
                                    on:click=move |_| ctx.navigate(page)
                                >
                                    {icon(page.icon())}
                                    " Open"
                                </button>
                            </CardAnimated>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="home-page__footer">
                <button class="link-button" on:click=move |_| ctx.navigate(AppPage::Glossary)>
                    {icon("book")}
                    " Glossary of terms"
                </button>
            </div>
        </div>
    }
}
