use crate::shared::ids::ObjectId;
use serde::{Deserialize, Serialize};

/// Top-level ticket category (e.g. "Hardware", "Accounts")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: ObjectId,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
}

/// Subcategory belonging to a single category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subcategory {
    pub id: ObjectId,
    pub name: String,
}

/// Response of `GET /get_subcategories/?category_id=<id>`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubcategoriesResponse {
    pub subcategories: Vec<Subcategory>,
}
