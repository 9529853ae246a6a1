use leptos::prelude::*;

/// Text input bound to a form field
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// Maximum length enforced by native validation
    #[prop(optional)]
    max_length: Option<usize>,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Form field name
    #[prop(optional, into)]
    name: MaybeProp<String>,
    /// Message shown once the form is marked as validated
    #[prop(optional, into)]
    invalid_feedback: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_name = move || name.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();

    view! {
        <div class="mb-3">
            {move || label.get().map(|l| view! {
                <label class="form-label" for=input_id>
                    {l}
                </label>
            })}
            <input
                id=input_id
                name=input_name
                class="form-control"
                type="text"
                prop:value=move || value.get()
                placeholder=input_placeholder
                required=required
                maxlength=max_length.map(|n| n.to_string())
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
            {move || invalid_feedback.get().map(|msg| view! {
                <div class="invalid-feedback">{msg}</div>
            })}
        </div>
    }
}
