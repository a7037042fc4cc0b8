use serde::{Deserialize, Serialize};

use crate::shared::dashboard::{collect_selection, TabView};

/// Request for the store performance tab
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorePerformanceRequest {
    /// Selected store names, one `stores=` pair each; `None` means all of them
    #[serde(default)]
    pub stores: Option<Vec<String>>,
}

impl StorePerformanceRequest {
    /// Build from decoded query pairs, e.g. `?stores=A&stores=B`
    pub fn from_query(pairs: &[(String, String)]) -> Self {
        Self {
            stores: collect_selection(pairs, "stores"),
        }
    }
}

pub type StorePerformanceResponse = TabView;
