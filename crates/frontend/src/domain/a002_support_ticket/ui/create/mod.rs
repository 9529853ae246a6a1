//! Create-ticket form island
//!
//! - model.rs: API functions (subcategories, ticket POST)
//! - view_model.rs: form state and commands
//! - view.rs: Leptos component (pure UI)

mod model;
mod view;
mod view_model;

pub use view::TicketForm;
pub use view_model::TicketFormViewModel;
