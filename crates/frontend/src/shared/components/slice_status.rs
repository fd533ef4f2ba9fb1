use super::ui::{Badge, BadgeVariant};
use crate::shared::state::resource::ResourceSlice;
use leptos::prelude::*;

/// "Loading..." while the slice is in flight, the stored error otherwise
#[component]
pub fn SliceStatus(#[prop(into)] slice: Signal<ResourceSlice>) -> impl IntoView {
    view! {
        <span class="slice-status">
            {move || slice.with(|s| s.loading).then(|| view! {
                <Badge variant=BadgeVariant::Info>"Loading..."</Badge>
            })}
            {move || slice.with(|s| s.error.clone()).map(|error| view! {
                <Badge variant=BadgeVariant::Error>{error}</Badge>
            })}
        </span>
    }
}
