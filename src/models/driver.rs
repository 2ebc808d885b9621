use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriverStatus {
    Available,
    OnRoute,
    OffDuty,
}

impl DriverStatus {
    pub fn label(self) -> &'static str {
        match self {
            DriverStatus::Available => "Disponible",
            DriverStatus::OnRoute => "En ruta",
            DriverStatus::OffDuty => "Fuera de turno",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub license: String,
    #[serde(default)]
    pub phone: String,
    pub status: DriverStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_id: Option<i64>,
}
