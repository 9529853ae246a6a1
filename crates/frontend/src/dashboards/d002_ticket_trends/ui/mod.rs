mod trends;

pub use trends::TicketTrends;
