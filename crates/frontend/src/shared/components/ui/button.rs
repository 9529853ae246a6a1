use leptos::prelude::*;

/// Bootstrap button with variants (primary, secondary, outline)
#[component]
pub fn Button(
    /// Button variant: "primary" (default), "secondary", or "outline"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Button type attribute: "button" (default) or "submit"
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    /// ID for the button element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("primary") {
        "secondary" => "btn btn-secondary",
        "outline" => "btn btn-outline-primary",
        _ => "btn btn-primary",
    };

    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());
    let btn_id = move || id.get().unwrap_or_default();

    view! {
        <button
            id=btn_id
            type=btn_type
            class=variant_class
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
