use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteStatus {
    Planned,
    Active,
    Completed,
}

impl RouteStatus {
    pub fn label(self) -> &'static str {
        match self {
            RouteStatus::Planned => "Planificada",
            RouteStatus::Active => "En curso",
            RouteStatus::Completed => "Completada",
        }
    }
}

/// A planned or running delivery route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryRoute {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub origin: String,
    pub destination: String,
    #[serde(default)]
    pub distance_km: f64,
    pub status: RouteStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_id: Option<i64>,
}
