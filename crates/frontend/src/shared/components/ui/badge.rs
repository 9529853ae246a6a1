use contracts::domain::a002_support_ticket::{TicketPriority, TicketStatus};
use leptos::prelude::*;

/// Pill badge showing a ticket status
#[component]
pub fn StatusBadge(status: TicketStatus) -> impl IntoView {
    let class = match status {
        TicketStatus::Open => "badge rounded-pill text-bg-primary",
        TicketStatus::InProgress => "badge rounded-pill text-bg-warning",
        TicketStatus::Resolved => "badge rounded-pill text-bg-success",
    };

    view! { <span class=class>{status.label()}</span> }
}

/// Badge showing a ticket priority
#[component]
pub fn PriorityBadge(priority: TicketPriority) -> impl IntoView {
    let class = match priority {
        TicketPriority::Low => "badge text-bg-secondary",
        TicketPriority::Medium => "badge text-bg-info",
        TicketPriority::High => "badge text-bg-danger",
    };

    view! { <span class=class>{priority.label()}</span> }
}
