//! Record storage behind the REST API.
//!
//! Every collection is a list of [`Document`]s keyed by a server-assigned id.
//! [`PgRepository`] keeps them in the `entities`/`entity_properties` tables;
//! [`MemoryRepository`] keeps them in process for development and tests.

pub mod memory;
pub mod postgres;
pub mod seed;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::models::{Document, ResourceKind};

pub use self::memory::MemoryRepository;
pub use self::postgres::PgRepository;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),

    /// A stored value could not be encoded or decoded.
    #[error("record encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

#[async_trait]
pub trait Repository: Send + Sync {
    /// All records of a collection, in insertion order.
    async fn list(&self, kind: ResourceKind) -> Result<Vec<Document>, StoreError>;

    async fn get(&self, kind: ResourceKind, id: i64) -> Result<Option<Document>, StoreError>;

    /// Store a new record and return it with its assigned id.
    async fn insert(
        &self,
        kind: ResourceKind,
        fields: Map<String, Value>,
    ) -> Result<Document, StoreError>;

    /// Merge `patch` into an existing record. A `null` value removes the field.
    /// Returns `None` when no such record exists.
    async fn update(
        &self,
        kind: ResourceKind,
        id: i64,
        patch: Map<String, Value>,
    ) -> Result<Option<Document>, StoreError>;

    /// Returns whether a record was removed.
    async fn delete(&self, kind: ResourceKind, id: i64) -> Result<bool, StoreError>;

    async fn count(&self, kind: ResourceKind) -> Result<i64, StoreError>;
}

/// Load a whole collection decoded into its typed schema.
pub async fn list_as<T: DeserializeOwned>(
    repo: &dyn Repository,
    kind: ResourceKind,
) -> Result<Vec<T>, StoreError> {
    let docs = repo.list(kind).await?;
    let mut out = Vec::with_capacity(docs.len());
    for doc in &docs {
        out.push(doc.decode()?);
    }
    Ok(out)
}

/// Apply a patch to a field map in place.
pub(crate) fn merge_fields(target: &mut Map<String, Value>, patch: Map<String, Value>) {
    for (key, value) in patch {
        if key == "id" {
            continue;
        }
        if value.is_null() {
            target.remove(&key);
        } else {
            target.insert(key, value);
        }
    }
}
