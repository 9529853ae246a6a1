use serde::{Deserialize, Serialize};

/// Element id of the ticket table region swapped by the dashboard cards
pub const TICKET_TABLE_ID: &str = "ticket-table";

/// Summary card on the user dashboard (e.g. "Open tickets: 12")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryCard {
    pub key: String,
    pub title: String,
    pub count: u64,
    /// Page whose ticket table the card loads
    pub href: String,
    /// Bootstrap icon class
    #[serde(default)]
    pub icon: Option<String>,
}

/// `data-props` payload of the dashboard widgets island
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardWidgetsData {
    #[serde(default)]
    pub cards: Vec<SummaryCard>,
}
