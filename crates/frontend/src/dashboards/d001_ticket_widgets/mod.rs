pub mod api;
pub mod table_state;
pub mod ui;
