use super::model;
use crate::domain::a001_category::{SubcategoryLoader, SubcategoryOptions};
use crate::shared::config::UiConfig;
use crate::shared::dom;
use crate::shared::form_validator::{decide_submit, submit_disabled, SubmitDecision};
use contracts::domain::a002_support_ticket::{TicketDraft, TicketPriority};
use contracts::shared::ids::ObjectId;
use leptos::prelude::*;

pub const TICKET_CREATED_MESSAGE: &str = "Ticket created successfully.";
pub const TICKET_FAILED_MESSAGE: &str = "Failed to create ticket. Please try again.";

fn optional_id(value: &str) -> Option<ObjectId> {
    let id = ObjectId::new(value.trim());
    (!id.is_empty()).then_some(id)
}

/// ViewModel of the create-ticket form
///
/// - `form` holds the field values as they will be posted
/// - `subcategories` is driven by [`SubcategoryLoader`]; stale responses are dropped
/// - `is_valid` mirrors native form validity and gates the submit button
#[derive(Clone)]
pub struct TicketFormViewModel {
    pub form: RwSignal<TicketDraft>,
    pub subcategories: RwSignal<SubcategoryOptions>,
    pub is_valid: RwSignal<bool>,
    pub was_validated: RwSignal<bool>,
    pub is_submitting: RwSignal<bool>,
    loader: SubcategoryLoader,
    config: UiConfig,
}

impl TicketFormViewModel {
    pub fn new(config: UiConfig) -> Self {
        Self {
            form: RwSignal::new(TicketDraft::default()),
            subcategories: RwSignal::new(SubcategoryOptions::placeholder()),
            is_valid: RwSignal::new(false),
            was_validated: RwSignal::new(false),
            is_submitting: RwSignal::new(false),
            loader: SubcategoryLoader::new(),
            config,
        }
    }

    pub fn submit_disabled(&self) -> bool {
        submit_disabled(self.is_valid.get()) || self.is_submitting.get()
    }

    pub fn set_validity(&self, valid: bool) {
        self.is_valid.set(valid);
    }

    /// Category changed: reset the subcategory list and reload it
    pub fn select_category_command(&self, category_id: String) {
        self.form.update(|f| {
            f.category = optional_id(&category_id);
            f.subcategory = None;
        });

        let (state, request) = self.loader.select(&category_id);
        self.subcategories.set(state);

        let Some(request) = request else {
            return;
        };
        let loader = self.loader.clone();
        let subcategories = self.subcategories;
        let endpoint = self.config.subcategories_url.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = model::fetch_subcategories(&endpoint, &request.category_id).await;
            if let Some(state) = loader.complete(&request, result) {
                subcategories.set(state);
            }
        });
    }

    pub fn set_subcategory(&self, value: String) {
        self.form.update(|f| f.subcategory = optional_id(&value));
    }

    pub fn set_centre(&self, value: String) {
        self.form.update(|f| f.centre = optional_id(&value));
    }

    pub fn set_priority(&self, code: String) {
        if let Some(priority) = TicketPriority::from_code(&code) {
            self.form.update(|f| f.priority = priority);
        }
    }

    /// Submit attempt with the form's current native validity.
    ///
    /// Invalid forms are marked as validated and nothing is sent; a valid
    /// draft is posted and, on success, the page moves to the dashboard.
    pub fn submit_command(&self, natively_valid: bool) -> SubmitDecision {
        if decide_submit(natively_valid) == SubmitDecision::Block {
            self.was_validated.set(true);
            return SubmitDecision::Block;
        }

        let draft = self.form.get_untracked();
        if let Err(err) = draft.validate() {
            self.was_validated.set(true);
            dom::alert(&err.to_string());
            return SubmitDecision::Block;
        }
        if self.is_submitting.get_untracked() {
            return SubmitDecision::Block;
        }

        self.is_submitting.set(true);
        let is_submitting = self.is_submitting;
        let config = self.config.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match model::create_ticket(
                &config.create_ticket_url,
                &draft,
                config.csrf_token.as_deref(),
            )
            .await
            {
                Ok(()) => {
                    dom::alert(TICKET_CREATED_MESSAGE);
                    dom::navigate(&config.dashboard_url);
                }
                Err(e) => {
                    log::error!("Failed to create ticket: {}", e);
                    dom::alert(TICKET_FAILED_MESSAGE);
                }
            }
            is_submitting.set(false);
        });
        SubmitDecision::Proceed
    }
}
