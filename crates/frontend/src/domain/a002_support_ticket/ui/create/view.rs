use super::view_model::TicketFormViewModel;
use crate::domain::a001_category::subcategory_loader::PLACEHOLDER_LABEL;
use crate::shared::components::ui::{Button, Input, Select, Textarea};
use crate::shared::config::UiConfig;
use crate::shared::form_validator::{SubmitDecision, SUBMIT_BUTTON_ID};
use contracts::domain::a002_support_ticket::{TicketFormData, TicketPriority, TITLE_MAX_LEN};
use leptos::prelude::*;

/// Create-ticket form with a category-driven subcategory select
#[component]
pub fn TicketForm(config: UiConfig, props: TicketFormData) -> impl IntoView {
    let vm = TicketFormViewModel::new(config);
    let form_ref = NodeRef::<leptos::html::Form>::new();

    let category_options: Vec<(String, String)> = props
        .categories
        .iter()
        .map(|c| (c.id.to_string(), c.name.clone()))
        .collect();
    let centre_options: Vec<(String, String)> = props
        .centres
        .iter()
        .map(|c| (c.id.to_string(), c.name.clone()))
        .collect();
    let priority_options: Vec<(String, String)> = TicketPriority::ALL
        .iter()
        .map(|p| (p.code().to_string(), p.label().to_string()))
        .collect();

    // Populate subcategories for whatever the server pre-selected
    vm.select_category_command(
        props
            .selected_category
            .map(|c| c.to_string())
            .unwrap_or_default(),
    );

    // Re-check validity once mounted and whenever the subcategory list is replaced
    Effect::new({
        let vm = vm.clone();
        move |_| {
            vm.subcategories.track();
            if let Some(form) = form_ref.get() {
                vm.set_validity(form.check_validity());
            }
        }
    });

    let on_input = {
        let vm = vm.clone();
        move |_| {
            if let Some(form) = form_ref.get_untracked() {
                vm.set_validity(form.check_validity());
            }
        }
    };

    let on_submit = {
        let vm = vm.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let valid = form_ref
                .get_untracked()
                .map(|form| form.check_validity())
                .unwrap_or(false);
            if vm.submit_command(valid) == SubmitDecision::Block {
                ev.stop_propagation();
            }
        }
    };

    let form = vm.form;
    let subcategories = vm.subcategories;
    let was_validated = vm.was_validated;
    let is_submitting = vm.is_submitting;

    let category_value = Signal::derive(move || {
        form.with(|f| f.category.as_ref().map(|c| c.to_string()).unwrap_or_default())
    });
    let subcategory_value = Signal::derive(move || {
        form.with(|f| f.subcategory.as_ref().map(|c| c.to_string()).unwrap_or_default())
    });
    let centre_value = Signal::derive(move || {
        form.with(|f| f.centre.as_ref().map(|c| c.to_string()).unwrap_or_default())
    });
    let priority_value = Signal::derive(move || form.with(|f| f.priority.code().to_string()));
    let title_value = Signal::derive(move || form.with(|f| f.title.clone()));
    let description_value = Signal::derive(move || form.with(|f| f.description.clone()));

    let submit_disabled = Signal::derive({
        let vm = vm.clone();
        move || vm.submit_disabled()
    });

    view! {
        <form
            node_ref=form_ref
            class="needs-validation"
            class:was-validated=move || was_validated.get()
            novalidate=true
            on:input=on_input
            on:submit=on_submit
        >
            <Select
                label="Category"
                id="id_category"
                name="category"
                required=true
                placeholder="Category"
                value=category_value
                options=Signal::derive(move || category_options.clone())
                on_change=Callback::new({
                    let vm = vm.clone();
                    move |v: String| vm.select_category_command(v)
                })
            />
            <Select
                label="Subcategory"
                id="id_subcategory"
                name="subcategory"
                required=true
                placeholder=PLACEHOLDER_LABEL
                value=subcategory_value
                options=Signal::derive(move || subcategories.with(|s| s.select_options()))
                disabled=Signal::derive(move || !subcategories.with(|s| s.enabled))
                on_change=Callback::new({
                    let vm = vm.clone();
                    move |v: String| vm.set_subcategory(v)
                })
            />
            <Input
                label="Title"
                id="id_title"
                name="title"
                required=true
                max_length=TITLE_MAX_LEN
                value=title_value
                invalid_feedback="Please enter a title."
                on_input=Callback::new(move |v: String| form.update(|f| f.title = v))
            />
            <Textarea
                label="Description"
                id="id_description"
                name="description"
                required=true
                value=description_value
                on_input=Callback::new(move |v: String| form.update(|f| f.description = v))
            />
            <Select
                label="Priority"
                id="id_priority"
                name="priority"
                required=true
                value=priority_value
                options=Signal::derive(move || priority_options.clone())
                on_change=Callback::new({
                    let vm = vm.clone();
                    move |v: String| vm.set_priority(v)
                })
            />
            <Select
                label="Centre"
                id="id_centre"
                name="centre"
                required=true
                placeholder="Centre"
                value=centre_value
                options=Signal::derive(move || centre_options.clone())
                on_change=Callback::new({
                    let vm = vm.clone();
                    move |v: String| vm.set_centre(v)
                })
            />
            <Button button_type="submit" id=SUBMIT_BUTTON_ID disabled=submit_disabled>
                {move || if is_submitting.get() { "Submitting..." } else { "Submit ticket" }}
            </Button>
        </form>
    }
}
