//! Transport to the REST API.

use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde_json::Value;

use super::resource::FetchError;

/// Issues JSON requests against the REST API.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// `GET path`, returning the parsed JSON body.
    async fn get_json(&self, path: &str) -> Result<Value, FetchError>;

    /// Send `body` with a mutating method. Returns the parsed body, or `Null`
    /// for an empty (e.g. 204) response.
    async fn send_json(&self, method: Method, path: &str, body: Option<Value>)
    -> Result<Value, FetchError>;
}

/// [`Fetcher`] over HTTP.
#[derive(Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl HttpFetcher {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client: reqwest::Client::new(), base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn read(response: reqwest::Response) -> Result<Value, FetchError> {
        let status = response.status();
        if !status.is_success() {
            return Err(http_error(status));
        }
        let text = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }
}

fn http_error(status: StatusCode) -> FetchError {
    FetchError::Http {
        status: status.as_u16(),
        status_text: status.canonical_reason().map(str::to_string),
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn get_json(&self, path: &str) -> Result<Value, FetchError> {
        let response = self
            .client
            .get(self.url(path))
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        Self::read(response).await
    }

    async fn send_json(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, FetchError> {
        let mut request = self
            .client
            .request(method, self.url(path))
            .header("accept", "application/json")
            // the API rejects mutations without it, even body-less ones
            .header("content-type", "application/json");
        if let Some(body) = body {
            request = request.json(&body);
        }
        let response = request
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        Self::read(response).await
    }
}
