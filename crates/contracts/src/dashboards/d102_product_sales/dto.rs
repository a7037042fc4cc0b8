use serde::{Deserialize, Serialize};

use crate::shared::dashboard::{collect_selection, TabView};

/// Request for the product sales tab
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductSalesRequest {
    /// Selected categories, one `categories=` pair each; `None` means all of them
    #[serde(default)]
    pub categories: Option<Vec<String>>,
}

impl ProductSalesRequest {
    /// Build from decoded query pairs, e.g. `?categories=A&categories=B`
    pub fn from_query(pairs: &[(String, String)]) -> Self {
        Self {
            categories: collect_selection(pairs, "categories"),
        }
    }
}

pub type ProductSalesResponse = TabView;
