/// Element ids shared with the server-rendered base template
pub const TOGGLE_ID: &str = "header-toggle";
pub const NAV_ID: &str = "nav-bar";
pub const BODY_ID: &str = "body-pd";
pub const HEADER_ID: &str = "header";

/// Extra left padding on body and header while the panel is open
pub const PADDING_CLASS: &str = "body-pd";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavState {
    pub expanded: bool,
    pub active: Option<String>,
}

impl NavState {
    pub fn new(expanded: bool, active: Option<String>) -> Self {
        Self { expanded, active }
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Make `key` the only active link
    pub fn activate(&mut self, key: &str) {
        self.active = Some(key.to_string());
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.active.as_deref() == Some(key)
    }

    /// `(element id, class, present)` for the elements outside the island
    pub fn page_classes(&self) -> [(&'static str, &'static str, bool); 2] {
        [
            (BODY_ID, PADDING_CLASS, self.expanded),
            (HEADER_ID, PADDING_CLASS, self.expanded),
        ]
    }
}
