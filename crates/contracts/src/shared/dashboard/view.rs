use serde::{Deserialize, Serialize};

use super::presentation::Section;

/// Filter widget state echoed back to the UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    /// Widget label (e.g., "Select Stores")
    pub label: String,
    /// Choices from the lookup query
    pub options: Vec<String>,
    /// Effective selection after resolving against `options`
    pub selected: Vec<String>,
}

/// Fully rendered dashboard tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabView {
    /// Tab header
    pub title: String,
    pub filter: Option<FilterState>,
    pub sections: Vec<Section>,
    /// Query error banners raised while building this view
    pub errors: Vec<String>,
}

impl TabView {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            filter: None,
            sections: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn section(&self, heading: &str) -> Option<&Section> {
        self.sections
            .iter()
            .find(|s| s.heading.as_deref() == Some(heading))
    }
}
