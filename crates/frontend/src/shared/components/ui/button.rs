use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Success,
    Ghost,
}

/// Button component with variants and sizes (sm, md)
#[component]
pub fn Button(
    #[prop(optional, into)]
    variant: MaybeProp<ButtonVariant>,
    /// Smaller padding for toolbars
    #[prop(optional)]
    small: bool,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Tooltip
    #[prop(optional, into)]
    title: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().unwrap_or_default() {
        ButtonVariant::Primary => "button--primary",
        ButtonVariant::Secondary => "button--secondary",
        ButtonVariant::Success => "button--success",
        ButtonVariant::Ghost => "button--ghost",
    };
    let size_class = if small { "button--small" } else { "" };
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <button
            type="button"
            class=move || format!("button {} {} {}", variant_class(), size_class, additional_class())
            title=move || title.get()
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
