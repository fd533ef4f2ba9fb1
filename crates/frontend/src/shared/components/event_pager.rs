use crate::shared::icons::icon;
use leptos::prelude::*;

/// Up to this many events get one button each; more switch to a pager
pub const MAX_EVENT_BUTTONS: usize = 4;

/// Event switcher of the promotion simulation.
///
/// `active` is `None` when every event editor is collapsed.
#[component]
pub fn EventPager(
    #[prop(into)]
    count: Signal<usize>,
    #[prop(into)]
    active: Signal<Option<usize>>,
    on_select: Callback<usize>,
) -> impl IntoView {
    let is_active = move |idx: usize| active.get() == Some(idx);

    view! {
        <div class="event-pager">
            {move || {
                let total = count.get();
                if total <= MAX_EVENT_BUTTONS {
                    (0..total)
                        .map(|idx| view! {
                            <button
                                class=move || if is_active(idx) {
                                    "button button--primary button--small"
                                } else {
                                    "button button--secondary button--small"
                                }
                                on:click=move |_| on_select.run(idx)
                            >
                                {format!("Event Filter {}", idx + 1)}
                            </button>
                        })
                        .collect_view()
                        .into_any()
                } else {
                    view! {
                        <div class="pagination-controls">
                            <button
                                class="pagination-btn"
                                disabled=move || active.get().unwrap_or(0) == 0
                                on:click=move |_| {
                                    if let Some(current) = active.get_untracked() {
                                        if current > 0 {
                                            on_select.run(current - 1);
                                        }
                                    }
                                }
                                title="Previous"
                            >
                                {icon("chevron-left")}
                            </button>
                            {(0..total)
                                .map(|idx| view! {
                                    <button
                                        class=move || if is_active(idx) {
                                            "pagination-btn pagination-btn--active"
                                        } else {
                                            "pagination-btn"
                                        }
                                        on:click=move |_| on_select.run(idx)
                                    >
                                        {idx + 1}
                                    </button>
                                })
                                .collect_view()}
                            <button
                                class="pagination-btn"
                                disabled=move || active.get().map_or(false, |i| i + 1 >= total)
                                on:click=move |_| {
                                    let next = active.get_untracked().map_or(0, |i| i + 1);
                                    if next < total {
                                        on_select.run(next);
                                    }
                                }
                                title="Next"
                            >
                                {icon("chevron-right")}
                            </button>
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
