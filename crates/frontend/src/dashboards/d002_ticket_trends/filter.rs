/// Category filter applied by clicking a trend label.
///
/// `None` until the first click; every item is shown then.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrendFilter(Option<String>);

impl TrendFilter {
    pub fn category(category: impl Into<String>) -> Self {
        Self(Some(category.into()))
    }

    pub fn selected(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn shows(&self, item_category: &str) -> bool {
        match &self.0 {
            None => true,
            Some(category) => category == item_category,
        }
    }
}
