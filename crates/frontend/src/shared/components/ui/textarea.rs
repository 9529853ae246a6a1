use leptos::prelude::*;

/// Multi-line text field bound to a form field
#[component]
pub fn Textarea(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Textarea value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// Rows attribute
    #[prop(optional)]
    rows: Option<u32>,
    /// ID for the textarea element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Form field name
    #[prop(optional, into)]
    name: MaybeProp<String>,
) -> impl IntoView {
    let textarea_id = move || id.get().unwrap_or_default();
    let textarea_name = move || name.get().unwrap_or_default();
    let textarea_rows = rows.unwrap_or(5);

    view! {
        <div class="mb-3">
            {move || label.get().map(|l| view! {
                <label class="form-label" for=textarea_id>
                    {l}
                </label>
            })}
            <textarea
                id=textarea_id
                name=textarea_name
                class="form-control"
                required=required
                rows=textarea_rows
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            ></textarea>
            <div class="invalid-feedback">"This field is required."</div>
        </div>
    }
}
