use serde::{Deserialize, Serialize};

use crate::shared::dashboard::TabView;

/// Request for the inventory tab
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryRequest {
    /// Store name; absent means the first store
    #[serde(default)]
    pub store: Option<String>,
}

pub type InventoryResponse = TabView;
