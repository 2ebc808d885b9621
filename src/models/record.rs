use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Every REST resource the dashboard knows about.
///
/// `Metrics` is computed on request; every other kind is a stored collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Metrics,
    Vehicles,
    Routes,
    Orders,
    Clients,
    Inventory,
    Drivers,
    Maintenance,
    Fuel,
    Suppliers,
    Finances,
    Reports,
    Alerts,
}

impl ResourceKind {
    /// Stored collections, in navigation order.
    pub const COLLECTIONS: [ResourceKind; 12] = [
        ResourceKind::Vehicles,
        ResourceKind::Routes,
        ResourceKind::Orders,
        ResourceKind::Clients,
        ResourceKind::Inventory,
        ResourceKind::Drivers,
        ResourceKind::Maintenance,
        ResourceKind::Fuel,
        ResourceKind::Suppliers,
        ResourceKind::Finances,
        ResourceKind::Reports,
        ResourceKind::Alerts,
    ];

    /// Short name; doubles as the `entity_type` in storage.
    pub fn name(self) -> &'static str {
        match self {
            ResourceKind::Metrics => "metrics",
            ResourceKind::Vehicles => "vehicles",
            ResourceKind::Routes => "routes",
            ResourceKind::Orders => "orders",
            ResourceKind::Clients => "clients",
            ResourceKind::Inventory => "inventory",
            ResourceKind::Drivers => "drivers",
            ResourceKind::Maintenance => "maintenance",
            ResourceKind::Fuel => "fuel",
            ResourceKind::Suppliers => "suppliers",
            ResourceKind::Finances => "finances",
            ResourceKind::Reports => "reports",
            ResourceKind::Alerts => "alerts",
        }
    }

    /// REST path of the collection (or of the computed metrics record).
    pub fn path(self) -> String {
        match self {
            ResourceKind::Metrics => "/api/dashboard/metrics".to_string(),
            other => format!("/api/{}", other.name()),
        }
    }

    pub fn from_collection(name: &str) -> Option<Self> {
        Self::COLLECTIONS.into_iter().find(|k| k.name() == name)
    }

    pub fn from_path(path: &str) -> Option<Self> {
        if path == "/api/dashboard/metrics" {
            return Some(ResourceKind::Metrics);
        }
        path.strip_prefix("/api/").and_then(Self::from_collection)
    }
}

/// A stored record: server-assigned id plus its field map.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: i64,
    pub fields: Map<String, Value>,
}

impl Document {
    /// The wire shape: fields with `id` merged in.
    pub fn to_json(&self) -> Value {
        let mut map = self.fields.clone();
        map.insert("id".to_string(), Value::from(self.id));
        Value::Object(map)
    }

    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.to_json())
    }
}

/// Serialize a record into a storable field map. Any `id` is dropped; ids are
/// assigned by the repository.
pub fn to_fields<T: Serialize>(record: &T) -> Result<Map<String, Value>, serde_json::Error> {
    match serde_json::to_value(record)? {
        Value::Object(mut map) => {
            map.remove("id");
            Ok(map)
        }
        _ => Err(<serde_json::Error as serde::ser::Error>::custom(
            "record must serialize to a JSON object",
        )),
    }
}
