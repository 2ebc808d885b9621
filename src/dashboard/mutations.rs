//! Client mutations that keep the query cache honest.
//!
//! Every successful write invalidates the clients collection key, so mounted
//! tables refetch and later mounts never see the pre-write snapshot.

use std::sync::Arc;

use super::api_client::ClientsApi;
use super::cache::QueryCache;
use super::resource::{FetchError, ResourceKey};
use crate::models::{Client, ClientPatch, NewClient, ResourceKind};

#[derive(Clone)]
pub struct ClientMutations {
    api: ClientsApi,
    cache: Arc<QueryCache>,
}

impl ClientMutations {
    pub fn new(api: ClientsApi, cache: Arc<QueryCache>) -> Self {
        Self { api, cache }
    }

    pub fn api(&self) -> &ClientsApi {
        &self.api
    }

    fn invalidate(&self) {
        self.cache.invalidate(&ResourceKey::for_kind(ResourceKind::Clients));
    }

    pub async fn create(&self, client: &NewClient) -> Result<Client, FetchError> {
        let created = self.api.create(client).await?;
        self.invalidate();
        log::info!("Created client {} ({})", created.id, created.name);
        Ok(created)
    }

    pub async fn update(&self, id: i64, patch: &ClientPatch) -> Result<Client, FetchError> {
        let updated = self.api.update(id, patch).await?;
        self.invalidate();
        log::info!("Updated client {id}");
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> Result<(), FetchError> {
        self.api.delete(id).await?;
        self.invalidate();
        log::info!("Deleted client {id}");
        Ok(())
    }
}
