use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Ready,
    Pending,
}

impl ReportStatus {
    pub fn label(self) -> &'static str {
        match self {
            ReportStatus::Ready => "Listo",
            ReportStatus::Pending => "En preparación",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    #[serde(default)]
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub generated_at: String,
    pub status: ReportStatus,
}
