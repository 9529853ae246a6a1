pub mod dto;

pub use dto::{Category, SubcategoriesResponse, Subcategory};
