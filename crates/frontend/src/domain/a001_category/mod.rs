pub mod api;
pub mod subcategory_loader;

pub use subcategory_loader::{SubcategoryLoader, SubcategoryOptions, SubcategoryRequest};
