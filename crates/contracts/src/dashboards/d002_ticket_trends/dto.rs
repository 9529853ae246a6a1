use crate::domain::a002_support_ticket::TicketSummary;
use serde::{Deserialize, Serialize};

/// Clickable trend label: a category and how many tickets fall into it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendBucket {
    pub category: String,
    pub count: u64,
}

/// `data-props` payload of the ticket trends island
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TicketTrendsData {
    #[serde(default)]
    pub trends: Vec<TrendBucket>,
    #[serde(default)]
    pub tickets: Vec<TicketSummary>,
}

impl TicketTrendsData {
    /// Trend buckets derived from the ticket list, in first-seen order.
    ///
    /// Used when the server only sends tickets.
    pub fn buckets_from_tickets(tickets: &[TicketSummary]) -> Vec<TrendBucket> {
        let mut buckets: Vec<TrendBucket> = Vec::new();
        for t in tickets {
            match buckets.iter_mut().find(|b| b.category == t.category) {
                Some(b) => b.count += 1,
                None => buckets.push(TrendBucket {
                    category: t.category.clone(),
                    count: 1,
                }),
            }
        }
        buckets
    }
}
