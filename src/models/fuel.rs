use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelRecord {
    #[serde(default)]
    pub id: i64,
    pub vehicle_id: i64,
    pub liters: f64,
    pub cost: f64,
    #[serde(default)]
    pub station: String,
    /// RFC 3339 timestamp.
    pub filled_at: String,
}
