use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;

use crate::models::*;

/// Identifies a REST collection: its request path, which is also its cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceKey(String);

impl ResourceKey {
    /// Returns `None` for an empty or blank key.
    pub fn new(key: impl Into<String>) -> Option<Self> {
        let key = key.into();
        if key.trim().is_empty() { None } else { Some(Self(key)) }
    }

    pub fn for_kind(kind: ResourceKind) -> Self {
        Self(kind.path())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The schema this key's response is decoded into, if the key names a known collection.
    pub fn kind(&self) -> Option<ResourceKind> {
        ResourceKind::from_path(&self.0)
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// The request never produced a response.
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("HTTP {status}{}", suffix(.status_text))]
    Http { status: u16, status_text: Option<String> },

    /// The body was not valid JSON or did not match the resource schema.
    #[error("could not decode response: {0}")]
    Decode(String),
}

fn suffix(status_text: &Option<String>) -> String {
    status_text.as_deref().map(|t| format!(" {t}")).unwrap_or_default()
}

impl FetchError {
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Decode(e.to_string())
    }
}

/// A decoded response, tagged by resource schema.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Metrics(DashboardMetrics),
    Vehicles(Vec<Vehicle>),
    Routes(Vec<DeliveryRoute>),
    Orders(Vec<Order>),
    Clients(Vec<Client>),
    Inventory(Vec<InventoryItem>),
    Drivers(Vec<Driver>),
    Maintenance(Vec<MaintenanceRecord>),
    Fuel(Vec<FuelRecord>),
    Suppliers(Vec<Supplier>),
    Finances(Vec<FinanceEntry>),
    Reports(Vec<Report>),
    Alerts(Vec<Alert>),
}

impl Payload {
    pub fn decode(kind: ResourceKind, body: Value) -> Result<Self, FetchError> {
        Ok(match kind {
            ResourceKind::Metrics => Payload::Metrics(serde_json::from_value(body)?),
            ResourceKind::Vehicles => Payload::Vehicles(serde_json::from_value(body)?),
            ResourceKind::Routes => Payload::Routes(serde_json::from_value(body)?),
            ResourceKind::Orders => Payload::Orders(serde_json::from_value(body)?),
            ResourceKind::Clients => Payload::Clients(serde_json::from_value(body)?),
            ResourceKind::Inventory => Payload::Inventory(serde_json::from_value(body)?),
            ResourceKind::Drivers => Payload::Drivers(serde_json::from_value(body)?),
            ResourceKind::Maintenance => Payload::Maintenance(serde_json::from_value(body)?),
            ResourceKind::Fuel => Payload::Fuel(serde_json::from_value(body)?),
            ResourceKind::Suppliers => Payload::Suppliers(serde_json::from_value(body)?),
            ResourceKind::Finances => Payload::Finances(serde_json::from_value(body)?),
            ResourceKind::Reports => Payload::Reports(serde_json::from_value(body)?),
            ResourceKind::Alerts => Payload::Alerts(serde_json::from_value(body)?),
        })
    }

    pub fn kind(&self) -> ResourceKind {
        match self {
            Payload::Metrics(_) => ResourceKind::Metrics,
            Payload::Vehicles(_) => ResourceKind::Vehicles,
            Payload::Routes(_) => ResourceKind::Routes,
            Payload::Orders(_) => ResourceKind::Orders,
            Payload::Clients(_) => ResourceKind::Clients,
            Payload::Inventory(_) => ResourceKind::Inventory,
            Payload::Drivers(_) => ResourceKind::Drivers,
            Payload::Maintenance(_) => ResourceKind::Maintenance,
            Payload::Fuel(_) => ResourceKind::Fuel,
            Payload::Suppliers(_) => ResourceKind::Suppliers,
            Payload::Finances(_) => ResourceKind::Finances,
            Payload::Reports(_) => ResourceKind::Reports,
            Payload::Alerts(_) => ResourceKind::Alerts,
        }
    }

    /// Decode a response fetched under `key`.
    pub fn decode_for(key: &ResourceKey, body: Value) -> Result<Self, FetchError> {
        let kind = key
            .kind()
            .ok_or_else(|| FetchError::Decode(format!("no schema for resource {key}")))?;
        Self::decode(kind, body)
    }
}

/// State of one request as seen by one mount.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    Loading,
    Error(FetchError),
    Ready(Arc<Payload>),
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    /// Ready or Error: no further transition for this mount.
    pub fn is_settled(&self) -> bool {
        !self.is_loading()
    }

    pub fn data(&self) -> Option<&Payload> {
        match self {
            FetchState::Ready(payload) => Some(payload),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            FetchState::Error(e) => Some(e),
            _ => None,
        }
    }
}
