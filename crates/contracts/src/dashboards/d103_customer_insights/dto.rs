use serde::{Deserialize, Serialize};

use crate::shared::dashboard::{collect_selection, TabView};

/// Request for the customer insights tab
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerInsightsRequest {
    /// Selected loyalty tiers, one `tiers=` pair each; `None` means all of them
    #[serde(default)]
    pub tiers: Option<Vec<String>>,
}

impl CustomerInsightsRequest {
    /// Build from decoded query pairs, e.g. `?tiers=A&tiers=B`
    pub fn from_query(pairs: &[(String, String)]) -> Self {
        Self {
            tiers: collect_selection(pairs, "tiers"),
        }
    }
}

pub type CustomerInsightsResponse = TabView;
