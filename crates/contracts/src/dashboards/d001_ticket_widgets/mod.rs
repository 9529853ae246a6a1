pub mod dto;

pub use dto::{DashboardWidgetsData, SummaryCard, TICKET_TABLE_ID};
