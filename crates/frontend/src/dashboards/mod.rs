pub mod d001_ticket_widgets;
pub mod d002_ticket_trends;

pub use d001_ticket_widgets::ui::DashboardWidgets;
pub use d002_ticket_trends::ui::TicketTrends;
