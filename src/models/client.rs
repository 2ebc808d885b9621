use serde::{Deserialize, Serialize};

use crate::validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientType {
    #[default]
    Customer,
    Distributor,
    Supplier,
}

impl ClientType {
    pub fn label(self) -> &'static str {
        match self {
            ClientType::Customer => "Cliente",
            ClientType::Distributor => "Distribuidor",
            ClientType::Supplier => "Proveedor",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Normal,
    High,
    Urgent,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Baja",
            Priority::Normal => "Normal",
            Priority::High => "Alta",
            Priority::Urgent => "Urgente",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub client_type: ClientType,
    #[serde(default)]
    pub priority: Priority,
}

/// Body of `POST /api/clients`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewClient {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub client_type: ClientType,
    #[serde(default)]
    pub priority: Priority,
}

impl NewClient {
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        errors.extend(validate::validate_required(&self.name, "Name", 120));
        errors.extend(validate::validate_email(&self.email));
        errors.extend(validate::validate_phone(&self.phone));
        errors.extend(validate::validate_optional(&self.address, "Address", 200));
        errors
    }
}

/// Body of `PATCH /api/clients/{id}`: only the present fields change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_type: Option<ClientType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

impl ClientPatch {
    pub fn is_empty(&self) -> bool {
        *self == ClientPatch::default()
    }

    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if let Some(name) = &self.name {
            errors.extend(validate::validate_required(name, "Name", 120));
        }
        if let Some(email) = &self.email {
            errors.extend(validate::validate_email(email));
        }
        if let Some(phone) = &self.phone {
            errors.extend(validate::validate_phone(phone));
        }
        if let Some(address) = &self.address {
            errors.extend(validate::validate_optional(address, "Address", 200));
        }
        errors
    }
}
