pub mod summary_card;
pub mod ui;
