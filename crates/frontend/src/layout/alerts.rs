use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Stack of transient alerts in the top corner
#[component]
pub fn AlertStack() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="alert-stack" role="status">
            <For
                each=move || ctx.alerts.get()
                key=|alert| alert.id
                children=move |alert| {
                    let id = alert.id;
                    view! {
                        <div class=alert.kind.class()>
                            {icon("alert")}
                            <span class="alert__message">{alert.message}</span>
                            <button
                                class="alert__close"
                                title="Dismiss"
                                on:click=move |_| ctx.dismiss_alert(id)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
