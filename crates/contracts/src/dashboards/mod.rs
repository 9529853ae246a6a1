pub mod d001_ticket_widgets;
pub mod d002_ticket_trends;
