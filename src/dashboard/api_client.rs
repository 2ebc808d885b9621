//! Typed client for the `/api/clients` endpoints.

use std::sync::Arc;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::fetcher::Fetcher;
use super::resource::FetchError;
use crate::models::{Client, ClientPatch, NewClient, ResourceKind};

#[derive(Clone)]
pub struct ClientsApi {
    fetcher: Arc<dyn Fetcher>,
}

fn decode<T: DeserializeOwned>(body: Value) -> Result<T, FetchError> {
    Ok(serde_json::from_value(body)?)
}

fn encode<T: serde::Serialize>(body: &T) -> Result<Value, FetchError> {
    serde_json::to_value(body).map_err(|e| FetchError::Decode(e.to_string()))
}

impl ClientsApi {
    pub fn new(fetcher: Arc<dyn Fetcher>) -> Self {
        Self { fetcher }
    }

    fn item_path(id: i64) -> String {
        format!("{}/{id}", ResourceKind::Clients.path())
    }

    pub async fn get(&self, id: i64) -> Result<Client, FetchError> {
        decode(self.fetcher.get_json(&Self::item_path(id)).await?)
    }

    /// `POST /api/clients`; the server assigns the id.
    pub async fn create(&self, client: &NewClient) -> Result<Client, FetchError> {
        let body = self
            .fetcher
            .send_json(Method::POST, &ResourceKind::Clients.path(), Some(encode(client)?))
            .await?;
        decode(body)
    }

    /// `PATCH /api/clients/{id}` with only the fields to change.
    pub async fn update(&self, id: i64, patch: &ClientPatch) -> Result<Client, FetchError> {
        let body = self
            .fetcher
            .send_json(Method::PATCH, &Self::item_path(id), Some(encode(patch)?))
            .await?;
        decode(body)
    }

    pub async fn delete(&self, id: i64) -> Result<(), FetchError> {
        self.fetcher
            .send_json(Method::DELETE, &Self::item_path(id), None)
            .await?;
        Ok(())
    }
}
