use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    #[serde(default)]
    pub id: i64,
    pub sku: String,
    pub name: String,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub reorder_level: i64,
    #[serde(default)]
    pub location: String,
}

impl InventoryItem {
    pub fn needs_reorder(&self) -> bool {
        self.quantity <= self.reorder_level
    }
}
