//! reqwest-based implementation of [`RemoteDataSource`]
//!
//! Talks to a mockapi.io style backend: one base URL, one collection per
//! entity type, JSON bodies both ways.

use crate::client::{ApiResult, RemoteDataSource};
use crate::error::ApiError;
use crate::types::{Credentials, Entity, EntityDraft, Registration, User};
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Direct API client
#[derive(Debug, Clone)]
pub struct MockApiClient {
    http: Client,
    base_url: String,
}

impl MockApiClient {
    /// Create a client for `base_url` (trailing slashes are ignored)
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> ApiResult<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(http, base_url))
    }

    /// Create a client reusing an existing reqwest client
    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url<E: Entity>(&self) -> String {
        format!("{}/{}", self.base_url, E::RESOURCE)
    }

    fn record_url<E: Entity>(&self, id: &str) -> String {
        format!("{}/{}/{}", self.base_url, E::RESOURCE, id)
    }

    fn auth_url(&self, action: &str) -> String {
        format!("{}/auth/{}", self.base_url, action)
    }
}

/// Turn a non-2xx response into [`ApiError::Status`], keeping the body as-is
async fn check_status(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        body,
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let response = check_status(response).await?;
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait]
impl RemoteDataSource for MockApiClient {
    async fn list<E: Entity>(&self) -> ApiResult<Vec<E>> {
        let url = self.collection_url::<E>();
        debug!("GET {}", url);
        let items: Vec<E> = decode(self.http.get(&url).send().await?).await?;
        debug!("Fetched {} {} records", items.len(), E::LABEL);
        Ok(items)
    }

    async fn create<E: Entity>(&self, draft: &EntityDraft) -> ApiResult<E> {
        let url = self.collection_url::<E>();
        debug!("POST {}", url);
        decode(self.http.post(&url).json(draft).send().await?).await
    }

    async fn update<E: Entity>(&self, id: &str, patch: &EntityDraft) -> ApiResult<E> {
        let url = self.record_url::<E>(id);
        debug!("PUT {}", url);
        decode(self.http.put(&url).json(patch).send().await?).await
    }

    async fn delete<E: Entity>(&self, id: &str) -> ApiResult<()> {
        let url = self.record_url::<E>(id);
        debug!("DELETE {}", url);
        check_status(self.http.delete(&url).send().await?).await?;
        Ok(())
    }

    async fn login(&self, credentials: &Credentials) -> ApiResult<User> {
        let url = self.auth_url("login");
        debug!("POST {} ({})", url, credentials.email);
        decode(self.http.post(&url).json(credentials).send().await?).await
    }

    async fn register(&self, registration: &Registration) -> ApiResult<User> {
        let url = self.auth_url("register");
        debug!("POST {} ({})", url, registration.email);
        decode(self.http.post(&url).json(registration).send().await?).await
    }
}
