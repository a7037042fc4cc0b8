use serde::{Deserialize, Serialize};

use crate::shared::dashboard::TabView;

/// Request for the search tab
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Product name fragment or order id
    #[serde(default)]
    pub q: String,
}

pub type SearchResponse = TabView;
