//! Completion rules of the ticket table swap.
//!
//! Every card click starts a new request generation. A finished fetch is
//! applied only while it is still the latest one; errors keep the current
//! table.

use crate::shared::request_generation::{RequestGeneration, RequestTicket};

/// What to do with the table once a current request finished
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableUpdate {
    Replace(String),
    /// Fetch failed; leave the region as it is
    Keep,
}

#[derive(Debug, Clone, Default)]
pub struct TicketTableLoader {
    generation: RequestGeneration,
}

impl TicketTableLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> RequestTicket {
        self.generation.begin()
    }

    /// `None` when the request was superseded and nothing may change,
    /// including the loading flag.
    pub fn complete(
        &self,
        ticket: RequestTicket,
        href: &str,
        result: Result<String, String>,
    ) -> Option<TableUpdate> {
        if !self.generation.is_current(ticket) {
            log::debug!("Dropping stale ticket table from {}", href);
            return None;
        }
        match result {
            Ok(html) => Some(TableUpdate::Replace(html)),
            Err(e) => {
                log::error!("Error: failed to update ticket table from {}: {}", href, e);
                Some(TableUpdate::Keep)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_replaces_table() {
        let loader = TicketTableLoader::new();
        let ticket = loader.begin();
        assert_eq!(
            loader.complete(ticket, "/open_tickets/", Ok("<tr><td>1</td></tr>".into())),
            Some(TableUpdate::Replace("<tr><td>1</td></tr>".into()))
        );
    }

    #[test]
    fn test_error_keeps_table() {
        let loader = TicketTableLoader::new();
        let ticket = loader.begin();
        assert_eq!(
            loader.complete(ticket, "/open_tickets/", Err("HTTP error: 500".into())),
            Some(TableUpdate::Keep)
        );
    }

    #[test]
    fn test_superseded_click_changes_nothing() {
        let loader = TicketTableLoader::new();
        let first = loader.begin();
        let second = loader.begin();

        assert_eq!(loader.complete(first, "/open_tickets/", Ok("old".into())), None);
        assert_eq!(loader.complete(first, "/open_tickets/", Err("late".into())), None);
        assert_eq!(
            loader.complete(second, "/resolved_tickets/", Ok("new".into())),
            Some(TableUpdate::Replace("new".into()))
        );
    }
}
