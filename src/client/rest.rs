//! `RestClient<T>`: CRUD against one REST collection with uniform retry and error handling.

use super::transport::{ApiRequest, ApiResponse, HttpTransport, Transport};
use crate::config::{parse_base_path, validate_client, ClientConfig};
use crate::error::{ClientError, ConfigError};
use crate::model::Notification;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Display;
use std::marker::PhantomData;
use std::sync::Arc;

/// Why an attempt failed. Never leaves this module; callers only see
/// [`ClientError::RequestFailed`].
#[derive(Debug)]
enum Failure {
    Transport { message: String },
    Server { status: StatusCode, body: String },
}

/// Typed client for the collection at `{server_base_path}{resource_endpoint}`.
///
/// Collection URL, headers and retry budget are fixed at construction, so a
/// single instance can be shared (e.g. behind `Arc` in app state) and called
/// concurrently.
pub struct RestClient<T> {
    transport: Arc<dyn Transport>,
    collection_url: String,
    headers: HeaderMap,
    max_retries: u32,
    _resource: PhantomData<fn() -> T>,
}

impl<T> Clone for RestClient<T> {
    fn clone(&self) -> Self {
        RestClient {
            transport: Arc::clone(&self.transport),
            collection_url: self.collection_url.clone(),
            headers: self.headers.clone(),
            max_retries: self.max_retries,
            _resource: PhantomData,
        }
    }
}

impl<T> std::fmt::Debug for RestClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestClient")
            .field("collection_url", &self.collection_url)
            .field("max_retries", &self.max_retries)
            .finish()
    }
}

impl<T: DeserializeOwned> RestClient<T> {
    /// Client with its own reqwest transport.
    pub fn new(config: &ClientConfig, resource_endpoint: &str) -> Result<Self, ConfigError> {
        let transport = HttpTransport::from_config(config)?;
        Self::with_transport(config, resource_endpoint, Arc::new(transport))
    }

    /// Client sharing an existing transport (one connection pool for all resources).
    pub fn with_transport(
        config: &ClientConfig,
        resource_endpoint: &str,
        transport: Arc<dyn Transport>,
    ) -> Result<Self, ConfigError> {
        validate_client(config)?;
        let base = parse_base_path(&config.server_base_path)?;
        let endpoint = resource_endpoint.trim_matches('/');
        if endpoint.is_empty() {
            return Err(ConfigError::Validation("resource endpoint must not be empty".into()));
        }
        let collection_url = format!("{}/{}", base.as_str().trim_end_matches('/'), endpoint);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Ok(RestClient {
            transport,
            collection_url,
            headers,
            max_retries: config.max_retries,
            _resource: PhantomData,
        })
    }

    /// Collection URL: list and create target it, item operations append `/{id}`.
    pub fn resource_path(&self) -> &str {
        &self.collection_url
    }

    pub async fn create<B>(&self, item: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
    {
        let body = encode(item)?;
        let request = self.request(Method::POST, self.collection_url.clone(), Vec::new(), Some(body));
        self.fetch("create", request).await
    }

    pub async fn delete(&self, id: impl Display) -> Result<(), ClientError> {
        let request = self.request(Method::DELETE, self.item_url(id), Vec::new(), None);
        self.send("delete", &request).await.map(|_| ())
    }

    pub async fn update<B>(&self, id: impl Display, item: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
    {
        let body = encode(item)?;
        let request = self.request(Method::PUT, self.item_url(id), Vec::new(), Some(body));
        self.fetch("update", request).await
    }

    pub async fn get_all(&self) -> Result<Vec<T>, ClientError> {
        let request = self.request(Method::GET, self.collection_url.clone(), Vec::new(), None);
        self.fetch("get_all", request).await
    }

    pub async fn get_by_id(&self, id: impl Display) -> Result<T, ClientError> {
        let request = self.request(Method::GET, self.item_url(id), Vec::new(), None);
        self.fetch("get_by_id", request).await
    }

    /// Records filtered by `type`. Always decoded as notifications, whatever `T` is.
    pub async fn get_by_type(&self, kind: impl Display) -> Result<Vec<Notification>, ClientError> {
        let query = vec![("type".to_string(), kind.to_string())];
        let request = self.request(Method::GET, self.collection_url.clone(), query, None);
        self.fetch("get_by_type", request).await
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Vec<T>, ClientError> {
        let query = vec![("name".to_string(), name.to_string())];
        let request = self.request(Method::GET, self.collection_url.clone(), query, None);
        self.fetch("get_by_name", request).await
    }

    fn item_url(&self, id: impl Display) -> String {
        format!("{}/{}", self.collection_url, id)
    }

    fn request(
        &self,
        method: Method,
        url: String,
        query: Vec<(String, String)>,
        body: Option<String>,
    ) -> ApiRequest {
        ApiRequest {
            method,
            url,
            query,
            headers: self.headers.clone(),
            body,
        }
    }

    async fn fetch<R: DeserializeOwned>(
        &self,
        op: &'static str,
        request: ApiRequest,
    ) -> Result<R, ClientError> {
        let response = self.send(op, &request).await?;
        // Empty success body (e.g. 204) decodes as JSON null.
        let body = if response.body.trim().is_empty() {
            "null"
        } else {
            response.body.as_str()
        };
        serde_json::from_str(body).map_err(|e| {
            tracing::error!(op, url = %request.url, error = %e, "response body does not match expected shape");
            ClientError::Decode(e.to_string())
        })
    }

    /// Issue the request, retrying any failure up to `max_retries` times back to back.
    async fn send(&self, op: &'static str, request: &ApiRequest) -> Result<ApiResponse, ClientError> {
        let mut attempt: u32 = 0;
        loop {
            attempt += 1;
            tracing::debug!(op, method = %request.method, url = %request.url, attempt, "request");
            let failure = match self.transport.execute(request).await {
                Ok(response) if response.status.is_success() => return Ok(response),
                Ok(response) => Failure::Server {
                    status: response.status,
                    body: response.body,
                },
                Err(e) => Failure::Transport { message: e.message },
            };
            if attempt > self.max_retries {
                return Err(handle_error(op, failure));
            }
            tracing::warn!(op, url = %request.url, attempt, failure = ?failure, "request failed, retrying");
        }
    }
}

/// Log the terminal failure with its detail, then collapse it into the generic error.
fn handle_error(op: &'static str, failure: Failure) -> ClientError {
    match failure {
        Failure::Transport { message } => {
            tracing::error!(op, "An error occurred {}", message);
        }
        Failure::Server { status, body } => {
            tracing::error!(op, "Backend returned code {}, body was {}", status.as_u16(), body);
        }
    }
    ClientError::RequestFailed
}

fn encode<B: Serialize + ?Sized>(item: &B) -> Result<String, ClientError> {
    serde_json::to_string(item).map_err(|e| ClientError::Encode(e.to_string()))
}
