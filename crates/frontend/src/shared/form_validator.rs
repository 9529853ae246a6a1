//! Native-validity gating for plain server-rendered forms.
//!
//! Forms rendered by islands apply the same rule through their own
//! `NodeRef`; this module covers every other `<form>` on the page.

use crate::shared::dom::log_failure;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlButtonElement, HtmlFormElement};

/// Class that makes Bootstrap reveal field-level errors
pub const VALIDATED_CLASS: &str = "was-validated";
pub const SUBMIT_BUTTON_ID: &str = "submit-btn";

/// The submit control is disabled exactly while the form is invalid
pub fn submit_disabled(valid: bool) -> bool {
    !valid
}

/// What a submit attempt should do given the form's validity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitDecision {
    Proceed,
    /// Cancel the submission and show field errors
    Block,
}

pub fn decide_submit(valid: bool) -> SubmitDecision {
    if valid {
        SubmitDecision::Proceed
    } else {
        SubmitDecision::Block
    }
}

/// The parts of a form the validity listeners touch
pub trait ValidatedForm {
    fn check_validity(&self) -> bool;
    fn set_submit_disabled(&self, disabled: bool);
    fn mark_validated(&self);
}

/// Input listener body: refresh the submit control
pub fn handle_input(form: &impl ValidatedForm) {
    form.set_submit_disabled(submit_disabled(form.check_validity()));
}

/// Submit listener body. The caller cancels the event on `Block`.
pub fn handle_submit(form: &impl ValidatedForm) -> SubmitDecision {
    let decision = decide_submit(form.check_validity());
    if decision == SubmitDecision::Block {
        form.mark_validated();
    }
    decision
}

#[derive(Clone)]
struct DomForm {
    form: HtmlFormElement,
    button: Option<HtmlButtonElement>,
}

impl DomForm {
    fn new(form: HtmlFormElement) -> Self {
        let selector = format!("#{}, button[type=submit]", SUBMIT_BUTTON_ID);
        let button = form
            .query_selector(&selector)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
        Self { form, button }
    }
}

impl ValidatedForm for DomForm {
    fn check_validity(&self) -> bool {
        self.form.check_validity()
    }

    fn set_submit_disabled(&self, disabled: bool) {
        if let Some(btn) = &self.button {
            btn.set_disabled(disabled);
        }
    }

    fn mark_validated(&self) {
        log_failure(
            "Failed to mark form as validated",
            self.form.class_list().add_1(VALIDATED_CLASS),
        );
    }
}

/// Bind input/submit listeners to one form
pub fn attach(form: HtmlFormElement) {
    let target = DomForm::new(form.clone());
    handle_input(&target);

    let input_target = target.clone();
    let on_input = Closure::wrap(Box::new(move |_event: Event| {
        handle_input(&input_target);
    }) as Box<dyn FnMut(_)>);

    let on_submit = Closure::wrap(Box::new(move |event: Event| {
        if handle_submit(&target) == SubmitDecision::Block {
            event.prevent_default();
            event.stop_propagation();
        }
    }) as Box<dyn FnMut(_)>);

    log_failure(
        "Failed to bind input listener",
        form.add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref()),
    );
    log_failure(
        "Failed to bind submit listener",
        form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref()),
    );
    on_input.forget();
    on_submit.forget();
}

/// Attach to every form currently in the document. Returns how many were bound.
pub fn attach_to_document() -> u32 {
    let Some(doc) = crate::shared::dom::document() else {
        return 0;
    };
    let Some(forms) = log_failure("Failed to list forms", doc.query_selector_all("form")) else {
        return 0;
    };

    let mut bound = 0;
    for i in 0..forms.length() {
        if let Some(form) = forms
            .item(i)
            .and_then(|node| node.dyn_into::<HtmlFormElement>().ok())
        {
            attach(form);
            bound += 1;
        }
    }
    bound
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct FakeForm {
        valid: Cell<bool>,
        submit_disabled: Cell<Option<bool>>,
        validated: Cell<bool>,
    }

    impl ValidatedForm for FakeForm {
        fn check_validity(&self) -> bool {
            self.valid.get()
        }

        fn set_submit_disabled(&self, disabled: bool) {
            self.submit_disabled.set(Some(disabled));
        }

        fn mark_validated(&self) {
            self.validated.set(true);
        }
    }

    #[test]
    fn test_input_tracks_validity() {
        let form = FakeForm::default();
        handle_input(&form);
        assert_eq!(form.submit_disabled.get(), Some(true));

        form.valid.set(true);
        handle_input(&form);
        assert_eq!(form.submit_disabled.get(), Some(false));

        form.valid.set(false);
        handle_input(&form);
        assert_eq!(form.submit_disabled.get(), Some(true));
    }

    #[test]
    fn test_invalid_submit_is_blocked_and_marked() {
        let form = FakeForm::default();
        assert_eq!(handle_submit(&form), SubmitDecision::Block);
        assert!(form.validated.get());
    }

    #[test]
    fn test_valid_submit_proceeds_unmarked() {
        let form = FakeForm::default();
        form.valid.set(true);
        assert_eq!(handle_submit(&form), SubmitDecision::Proceed);
        assert!(!form.validated.get());
    }
}
