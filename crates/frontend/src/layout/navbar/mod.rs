pub mod navbar;
pub mod state;

pub use navbar::Navbar;
pub use state::NavState;
