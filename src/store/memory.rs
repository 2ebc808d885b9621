use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use serde_json::{Map, Value};

use super::{Repository, StoreError, merge_fields};
use crate::models::{Document, ResourceKind};

/// In-memory repository. Not durable; used when no database is configured and in tests.
#[derive(Default)]
pub struct MemoryRepository {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    next_id: i64,
    collections: HashMap<ResourceKind, BTreeMap<i64, Map<String, Value>>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl Repository for MemoryRepository {
    async fn list(&self, kind: ResourceKind) -> Result<Vec<Document>, StoreError> {
        let inner = self.lock();
        Ok(inner
            .collections
            .get(&kind)
            .map(|records| {
                records
                    .iter()
                    .map(|(id, fields)| Document { id: *id, fields: fields.clone() })
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn get(&self, kind: ResourceKind, id: i64) -> Result<Option<Document>, StoreError> {
        let inner = self.lock();
        Ok(inner
            .collections
            .get(&kind)
            .and_then(|records| records.get(&id))
            .map(|fields| Document { id, fields: fields.clone() }))
    }

    async fn insert(
        &self,
        kind: ResourceKind,
        mut fields: Map<String, Value>,
    ) -> Result<Document, StoreError> {
        fields.remove("id");
        let mut inner = self.lock();
        inner.next_id += 1;
        let id = inner.next_id;
        inner
            .collections
            .entry(kind)
            .or_default()
            .insert(id, fields.clone());
        Ok(Document { id, fields })
    }

    async fn update(
        &self,
        kind: ResourceKind,
        id: i64,
        patch: Map<String, Value>,
    ) -> Result<Option<Document>, StoreError> {
        let mut inner = self.lock();
        let Some(fields) = inner.collections.get_mut(&kind).and_then(|r| r.get_mut(&id)) else {
            return Ok(None);
        };
        merge_fields(fields, patch);
        Ok(Some(Document { id, fields: fields.clone() }))
    }

    async fn delete(&self, kind: ResourceKind, id: i64) -> Result<bool, StoreError> {
        let mut inner = self.lock();
        Ok(inner
            .collections
            .get_mut(&kind)
            .is_some_and(|records| records.remove(&id).is_some()))
    }

    async fn count(&self, kind: ResourceKind) -> Result<i64, StoreError> {
        let inner = self.lock();
        Ok(inner.collections.get(&kind).map_or(0, |r| r.len() as i64))
    }
}
