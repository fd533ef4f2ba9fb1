use leptos::prelude::*;

/// Labelled input; the value is kept by the caller
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    on_input: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "number", "date"
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// `min` attribute for number inputs
    #[prop(optional, into)]
    min: MaybeProp<String>,
    /// `step` attribute for number inputs
    #[prop(optional, into)]
    step: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! { <label class="form__label">{l}</label> })}
            <input
                class=move || format!("form__input {}", additional_class())
                type=input_t
                min=move || min.get()
                step=move || step.get()
                prop:value=move || value.get()
                placeholder=move || placeholder.get().unwrap_or_default()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
