use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::{Map, Value};
use sqlx::PgPool;

use super::{Repository, StoreError};
use crate::models::entity::{self, PropertyRow};
use crate::models::{Document, ResourceKind};

/// Repository over the `entities` / `entity_properties` tables.
///
/// Each record is one entity whose `entity_type` is the collection name; each
/// field is one property holding the JSON-encoded value.
#[derive(Clone)]
pub struct PgRepository {
    pool: PgPool,
}

impl PgRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn decode_properties(rows: Vec<PropertyRow>) -> Result<Map<String, Value>, StoreError> {
    let mut fields = Map::new();
    for row in rows {
        fields.insert(row.key, serde_json::from_str(&row.value)?);
    }
    Ok(fields)
}

#[async_trait]
impl Repository for PgRepository {
    async fn list(&self, kind: ResourceKind) -> Result<Vec<Document>, StoreError> {
        let ids = entity::find_ids_by_type(&self.pool, kind.name()).await?;
        let rows = entity::get_properties_by_type(&self.pool, kind.name()).await?;

        let mut by_id: BTreeMap<i64, Map<String, Value>> =
            ids.into_iter().map(|id| (id, Map::new())).collect();
        for row in rows {
            if let Some(fields) = by_id.get_mut(&row.entity_id) {
                fields.insert(row.key, serde_json::from_str(&row.value)?);
            }
        }

        Ok(by_id
            .into_iter()
            .map(|(id, fields)| Document { id, fields })
            .collect())
    }

    async fn get(&self, kind: ResourceKind, id: i64) -> Result<Option<Document>, StoreError> {
        if !entity::exists(&self.pool, kind.name(), id).await? {
            return Ok(None);
        }
        let rows = entity::get_properties(&self.pool, id).await?;
        Ok(Some(Document { id, fields: decode_properties(rows)? }))
    }

    async fn insert(
        &self,
        kind: ResourceKind,
        mut fields: Map<String, Value>,
    ) -> Result<Document, StoreError> {
        fields.remove("id");
        let mut tx = self.pool.begin().await?;
        let id = entity::create(&mut *tx, kind.name()).await?;
        for (key, value) in &fields {
            let encoded = serde_json::to_string(value)?;
            entity::set_property(&mut *tx, id, key, &encoded).await?;
        }
        tx.commit().await?;
        Ok(Document { id, fields })
    }

    async fn update(
        &self,
        kind: ResourceKind,
        id: i64,
        patch: Map<String, Value>,
    ) -> Result<Option<Document>, StoreError> {
        let mut tx = self.pool.begin().await?;
        if !entity::exists(&mut *tx, kind.name(), id).await? {
            return Ok(None);
        }
        for (key, value) in &patch {
            if key == "id" {
                continue;
            }
            if value.is_null() {
                entity::delete_property(&mut *tx, id, key).await?;
            } else {
                let encoded = serde_json::to_string(value)?;
                entity::set_property(&mut *tx, id, key, &encoded).await?;
            }
        }
        entity::touch(&mut *tx, id).await?;
        let rows = entity::get_properties(&mut *tx, id).await?;
        tx.commit().await?;
        Ok(Some(Document { id, fields: decode_properties(rows)? }))
    }

    async fn delete(&self, kind: ResourceKind, id: i64) -> Result<bool, StoreError> {
        Ok(entity::delete(&self.pool, kind.name(), id).await?)
    }

    async fn count(&self, kind: ResourceKind) -> Result<i64, StoreError> {
        Ok(entity::count_by_type(&self.pool, kind.name()).await?)
    }
}
