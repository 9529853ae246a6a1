use crate::domain::a001_category::Category;
use crate::shared::ids::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Open,
    InProgress,
    Resolved,
}

impl TicketStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TicketStatus::Open => "Open",
            TicketStatus::InProgress => "In Progress",
            TicketStatus::Resolved => "Resolved",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl TicketPriority {
    pub const ALL: [TicketPriority; 3] =
        [TicketPriority::Low, TicketPriority::Medium, TicketPriority::High];

    /// Value posted back to the server
    pub fn code(&self) -> &'static str {
        match self {
            TicketPriority::Low => "low",
            TicketPriority::Medium => "medium",
            TicketPriority::High => "high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TicketPriority::Low => "Low",
            TicketPriority::Medium => "Medium",
            TicketPriority::High => "High",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.code() == code)
    }
}

/// Support centre the ticket is raised for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CentreOption {
    pub id: ObjectId,
    pub name: String,
    #[serde(default)]
    pub acronym: Option<String>,
}

/// Row of a ticket list as rendered by the trends island
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketSummary {
    pub id: ObjectId,
    pub title: String,
    /// Category name; matched against trend labels
    pub category: String,
    pub status: TicketStatus,
    #[serde(default)]
    pub priority: TicketPriority,
    #[serde(default)]
    pub submitted_at: Option<DateTime<Utc>>,
    /// Link to the ticket details page
    #[serde(default)]
    pub href: Option<String>,
}

/// `data-props` payload of the ticket form island
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TicketFormData {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub centres: Vec<CentreOption>,
    /// Category pre-selected by the server (e.g. after a failed POST)
    #[serde(default)]
    pub selected_category: Option<ObjectId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_summary_from_server_json() {
        let body = r#"{
            "id": "1b4e28ba-2fa1-11d2-883f-0016d3cca427",
            "title": "Printer jam",
            "category": "Hardware",
            "status": "in_progress",
            "priority": "high",
            "submitted_at": "2023-08-29T14:21:00Z"
        }"#;
        let t: TicketSummary = serde_json::from_str(body).unwrap();
        assert_eq!(t.status, TicketStatus::InProgress);
        assert_eq!(t.priority, TicketPriority::High);
        assert!(t.submitted_at.is_some());
        assert!(t.href.is_none());
    }

    #[test]
    fn test_ticket_summary_with_numeric_id() {
        let t: TicketSummary = serde_json::from_str(
            r#"{"id":5,"title":"Printer","category":"Hardware","status":"open"}"#,
        )
        .unwrap();
        assert_eq!(t.id.as_str(), "5");
        assert_eq!(t.priority, TicketPriority::Medium);
    }

    #[test]
    fn test_priority_codes() {
        assert_eq!(TicketPriority::from_code("low"), Some(TicketPriority::Low));
        assert_eq!(TicketPriority::from_code("urgent"), None);
        assert_eq!(TicketPriority::default().code(), "medium");
    }

    #[test]
    fn test_form_props_defaults() {
        let props: TicketFormData = serde_json::from_str("{}").unwrap();
        assert!(props.categories.is_empty());
        assert!(props.selected_category.is_none());
    }
}
