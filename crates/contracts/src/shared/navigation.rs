use serde::{Deserialize, Serialize};

/// One entry of the side navigation panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub key: String,
    pub title: String,
    pub href: String,
    /// Bootstrap icon class, e.g. "bi-grid"
    #[serde(default)]
    pub icon: Option<String>,
}

/// `data-props` payload of the navbar island.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NavbarData {
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub links: Vec<NavLink>,
    /// Key of the link rendered as active on page load
    #[serde(default)]
    pub active: Option<String>,
    /// Start with the panel expanded
    #[serde(default)]
    pub expanded: bool,
}
