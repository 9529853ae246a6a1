use crate::shared::api_utils::form_body;
use contracts::domain::a002_support_ticket::TicketDraft;
use gloo_net::http::Request;
use serde::Serialize;

pub use crate::domain::a001_category::api::fetch_subcategories;

/// URL-encoded body of `POST /create_ticket/`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateTicketForm {
    pub category: String,
    pub subcategory: String,
    pub title: String,
    pub description: String,
    pub priority: String,
    pub centre: String,
    pub csrfmiddlewaretoken: String,
}

impl CreateTicketForm {
    pub fn new(draft: &TicketDraft, csrf_token: &str) -> Self {
        let id = |v: &Option<contracts::shared::ids::ObjectId>| {
            v.as_ref().map(|id| id.to_string()).unwrap_or_default()
        };
        Self {
            category: id(&draft.category),
            subcategory: id(&draft.subcategory),
            title: draft.title.trim().to_string(),
            description: draft.description.clone(),
            priority: draft.priority.code().to_string(),
            centre: id(&draft.centre),
            csrfmiddlewaretoken: csrf_token.to_string(),
        }
    }
}

/// Post a new ticket. Only the status of the response is inspected.
pub async fn create_ticket(
    endpoint: &str,
    draft: &TicketDraft,
    csrf_token: Option<&str>,
) -> Result<(), String> {
    let token = csrf_token.ok_or_else(|| "Missing CSRF token".to_string())?;
    let body = form_body(&CreateTicketForm::new(draft, token))?;

    let response = Request::post(endpoint)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(body)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_support_ticket::TicketPriority;
    use contracts::shared::ids::ObjectId;

    fn draft() -> TicketDraft {
        TicketDraft {
            category: Some(ObjectId::new("3")),
            subcategory: Some(ObjectId::new("7")),
            title: "  Printer  ".to_string(),
            description: "Jammed".to_string(),
            priority: TicketPriority::High,
            centre: None,
        }
    }

    #[test]
    fn test_form_fields_from_draft() {
        let form = CreateTicketForm::new(&draft(), "tok");
        assert_eq!(form.category, "3");
        assert_eq!(form.subcategory, "7");
        assert_eq!(form.title, "Printer");
        assert_eq!(form.priority, "high");
        assert_eq!(form.centre, "");
        assert_eq!(form.csrfmiddlewaretoken, "tok");
    }

    #[test]
    fn test_body_is_urlencoded_with_token() {
        let body = form_body(&CreateTicketForm::new(&draft(), "abc123")).unwrap();
        assert!(body.starts_with("category=3&subcategory=7&title=Printer&"));
        assert!(body.contains("priority=high"));
        assert!(body.ends_with("csrfmiddlewaretoken=abc123"));
    }

    #[test]
    fn test_body_escapes_reserved_characters() {
        let mut d = draft();
        d.title = "a&b".to_string();
        let body = form_body(&CreateTicketForm::new(&d, "t")).unwrap();
        assert!(body.contains("title=a%26b"));
    }
}
