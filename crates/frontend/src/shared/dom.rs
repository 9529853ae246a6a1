//! Thin wrappers over `web_sys` for the few places that touch markup the
//! islands do not own (server-rendered body/header, alerts, navigation).

use std::fmt::Debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlDocument};

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

pub fn element_by_id(id: &str) -> Option<Element> {
    document().and_then(|d| d.get_element_by_id(id))
}

/// Raw `document.cookie`, empty when unavailable
pub fn cookies() -> String {
    document()
        .and_then(|d| d.dyn_into::<HtmlDocument>().ok())
        .and_then(|d| d.cookie().ok())
        .unwrap_or_default()
}

/// Add or remove a single class
pub fn set_class(el: &Element, class: &str, on: bool) {
    let list = el.class_list();
    let result = if on {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };
    log_failure(&format!("Failed to update class '{}'", class), result);
}

/// Log the error of a DOM call and keep going
pub fn log_failure<T, E: Debug>(context: &str, result: Result<T, E>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            log::error!("{}: {:?}", context, err);
            None
        }
    }
}

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        log_failure("Failed to show alert", window.alert_with_message(message));
    }
}

pub fn navigate(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    log_failure(
        &format!("Failed to navigate to {}", url),
        window.location().set_href(url),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_failure_passes_values_through() {
        assert_eq!(log_failure::<_, String>("ctx", Ok(3)), Some(3));
        assert_eq!(log_failure::<u8, _>("ctx", Err("boom".to_string())), None);
    }
}
