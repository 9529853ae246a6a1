pub mod dto;

pub use dto::{TicketTrendsData, TrendBucket};
