use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceStatus {
    Scheduled,
    InProgress,
    Done,
    Overdue,
}

impl MaintenanceStatus {
    pub fn label(self) -> &'static str {
        match self {
            MaintenanceStatus::Scheduled => "Programado",
            MaintenanceStatus::InProgress => "En curso",
            MaintenanceStatus::Done => "Completado",
            MaintenanceStatus::Overdue => "Vencido",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRecord {
    #[serde(default)]
    pub id: i64,
    pub vehicle_id: i64,
    pub description: String,
    /// YYYY-MM-DD
    pub scheduled_for: String,
    pub status: MaintenanceStatus,
    #[serde(default)]
    pub cost: f64,
}
