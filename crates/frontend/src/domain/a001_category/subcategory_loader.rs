//! State transitions of the dependent subcategory select.
//!
//! The loader owns a request generation: choosing a category (including the
//! empty one) supersedes whatever request is still in flight, so a late
//! response can never overwrite the list of a newer selection.

use crate::shared::request_generation::{RequestGeneration, RequestTicket};
use contracts::domain::a001_category::{SubcategoriesResponse, Subcategory};
use contracts::shared::ids::ObjectId;

/// Label of the empty, non-selectable first option
pub const PLACEHOLDER_LABEL: &str = "Subcategory";

/// Contents of the subcategory select, placeholder excluded
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubcategoryOptions {
    pub items: Vec<Subcategory>,
    pub enabled: bool,
}

impl SubcategoryOptions {
    /// Placeholder only, control disabled
    pub fn placeholder() -> Self {
        Self::default()
    }

    pub fn loaded(items: Vec<Subcategory>) -> Self {
        Self {
            items,
            enabled: true,
        }
    }

    /// (value, label) pairs in response order
    pub fn select_options(&self) -> Vec<(String, String)> {
        self.items
            .iter()
            .map(|s| (s.id.to_string(), s.name.clone()))
            .collect()
    }
}

/// A fetch the caller has to perform for the current selection
#[derive(Debug, Clone, PartialEq)]
pub struct SubcategoryRequest {
    pub ticket: RequestTicket,
    pub category_id: ObjectId,
}

#[derive(Debug, Clone, Default)]
pub struct SubcategoryLoader {
    generation: RequestGeneration,
}

impl SubcategoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a category change.
    ///
    /// Returns the state to show right away (always placeholder-only) and the
    /// request to issue, if any. An empty category issues no request.
    pub fn select(&self, category_id: &str) -> (SubcategoryOptions, Option<SubcategoryRequest>) {
        let ticket = self.generation.begin();
        let category_id = ObjectId::new(category_id.trim());
        if category_id.is_empty() {
            return (SubcategoryOptions::placeholder(), None);
        }
        (
            SubcategoryOptions::placeholder(),
            Some(SubcategoryRequest {
                ticket,
                category_id,
            }),
        )
    }

    /// Apply a finished request. `None` means the response is stale and
    /// must be ignored.
    pub fn complete(
        &self,
        request: &SubcategoryRequest,
        result: Result<SubcategoriesResponse, String>,
    ) -> Option<SubcategoryOptions> {
        if !self.generation.is_current(request.ticket) {
            log::debug!(
                "Dropping stale subcategories for category {}",
                request.category_id
            );
            return None;
        }
        match result {
            Ok(response) => Some(SubcategoryOptions::loaded(response.subcategories)),
            Err(err) => {
                log::error!("Error occurred while fetching subcategories: {}", err);
                Some(SubcategoryOptions::placeholder())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_category::api::subcategories_url;

    fn response(json: &str) -> SubcategoriesResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_empty_category_issues_no_request() {
        let loader = SubcategoryLoader::new();
        let (state, request) = loader.select("");
        assert_eq!(state, SubcategoryOptions::placeholder());
        assert!(!state.enabled);
        assert!(request.is_none());

        let (_, request) = loader.select("   ");
        assert!(request.is_none());
    }

    #[test]
    fn test_select_category_then_response() {
        let loader = SubcategoryLoader::new();
        let (state, request) = loader.select("3");
        assert!(!state.enabled);
        let request = request.expect("a request for category 3");
        assert_eq!(
            subcategories_url("/get_subcategories/", &request.category_id),
            "/get_subcategories/?category_id=3"
        );

        let applied = loader
            .complete(
                &request,
                Ok(response(r#"{"subcategories":[{"id":7,"name":"Billing"}]}"#)),
            )
            .expect("current response is applied");
        assert!(applied.enabled);
        assert_eq!(
            applied.select_options(),
            vec![("7".to_string(), "Billing".to_string())]
        );
        assert_eq!(PLACEHOLDER_LABEL, "Subcategory");
    }

    #[test]
    fn test_response_order_is_preserved() {
        let loader = SubcategoryLoader::new();
        let (_, request) = loader.select("5");
        let applied = loader
            .complete(
                &request.unwrap(),
                Ok(response(
                    r#"{"subcategories":[{"id":3,"name":"Zeta"},{"id":1,"name":"Alpha"}]}"#,
                )),
            )
            .unwrap();
        let labels: Vec<_> = applied.select_options().into_iter().map(|(_, l)| l).collect();
        assert_eq!(labels, vec!["Zeta", "Alpha"]);
    }

    #[test]
    fn test_failure_leaves_placeholder_disabled() {
        let loader = SubcategoryLoader::new();
        let (_, request) = loader.select("3");
        let applied = loader
            .complete(&request.unwrap(), Err("HTTP error: 500".to_string()))
            .unwrap();
        assert_eq!(applied, SubcategoryOptions::placeholder());
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let loader = SubcategoryLoader::new();
        let (_, first) = loader.select("1");
        let (_, second) = loader.select("2");

        let stale = loader.complete(
            &first.unwrap(),
            Ok(response(r#"{"subcategories":[{"id":10,"name":"Old"}]}"#)),
        );
        assert!(stale.is_none());

        let fresh = loader.complete(
            &second.unwrap(),
            Ok(response(r#"{"subcategories":[{"id":20,"name":"New"}]}"#)),
        );
        assert_eq!(fresh.unwrap().items[0].name, "New");
    }

    #[test]
    fn test_clearing_category_supersedes_in_flight_request() {
        let loader = SubcategoryLoader::new();
        let (_, pending) = loader.select("4");
        let (_, none) = loader.select("");
        assert!(none.is_none());
        assert!(loader
            .complete(&pending.unwrap(), Ok(SubcategoriesResponse::default()))
            .is_none());
    }
}
