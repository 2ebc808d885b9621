use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Income,
    Expense,
}

impl EntryKind {
    pub fn label(self) -> &'static str {
        match self {
            EntryKind::Income => "Ingreso",
            EntryKind::Expense => "Gasto",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceEntry {
    #[serde(default)]
    pub id: i64,
    pub kind: EntryKind,
    #[serde(default)]
    pub category: String,
    pub amount: f64,
    /// YYYY-MM-DD
    pub date: String,
    #[serde(default)]
    pub description: String,
}
