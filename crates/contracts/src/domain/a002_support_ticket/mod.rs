pub mod dto;
pub mod validation;

pub use dto::{
    CentreOption, TicketFormData, TicketPriority, TicketStatus, TicketSummary,
};
pub use validation::{TicketDraft, TicketDraftError, TITLE_MAX_LEN};
