use super::dto::TicketPriority;
use crate::shared::ids::ObjectId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum title length accepted by the ticket form on the server
pub const TITLE_MAX_LEN: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TicketDraftError {
    #[error("Please enter a title for the ticket.")]
    TitleRequired,
    #[error("Title must be at most {max} characters (got {actual}).")]
    TitleTooLong { max: usize, actual: usize },
}

/// Field values of the create-ticket form, named as the server expects them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TicketDraft {
    pub category: Option<ObjectId>,
    pub subcategory: Option<ObjectId>,
    pub title: String,
    pub description: String,
    pub priority: TicketPriority,
    pub centre: Option<ObjectId>,
}

impl TicketDraft {
    /// Client-side checks run before the draft is posted.
    ///
    /// Only the title is checked here; every other constraint is left to
    /// native form validity and the server.
    pub fn validate(&self) -> Result<(), TicketDraftError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(TicketDraftError::TitleRequired);
        }
        let len = title.chars().count();
        if len > TITLE_MAX_LEN {
            return Err(TicketDraftError::TitleTooLong {
                max: TITLE_MAX_LEN,
                actual: len,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str) -> TicketDraft {
        TicketDraft {
            title: title.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_blank_title_is_rejected() {
        assert_eq!(draft("").validate(), Err(TicketDraftError::TitleRequired));
        assert_eq!(draft("   \t").validate(), Err(TicketDraftError::TitleRequired));
    }

    #[test]
    fn test_title_length_limit() {
        assert!(draft(&"x".repeat(TITLE_MAX_LEN)).validate().is_ok());
        assert_eq!(
            draft(&"x".repeat(TITLE_MAX_LEN + 1)).validate(),
            Err(TicketDraftError::TitleTooLong {
                max: TITLE_MAX_LEN,
                actual: TITLE_MAX_LEN + 1
            })
        );
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            TicketDraftError::TitleRequired.to_string(),
            "Please enter a title for the ticket."
        );
    }
}
