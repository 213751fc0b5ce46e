//! Backend API Client
//!
//! Authenticated REST calls to the recommendation backend, organized by
//! domain. Every request carries the stored bearer token when one exists;
//! a 401 from any endpoint clears the token and fires the unauthorized
//! handler before the error reaches the caller.

mod auth;
mod feedback;
mod recipes;
mod survey;
mod transport;

use std::sync::Arc;

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::TOKEN_KEY;
use crate::error::ApiError;
use crate::models::HealthStatus;
use crate::storage::KeyValueStorage;

pub use transport::ReqwestTransport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

/// Transport-level request
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    pub bearer: Option<String>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            bearer: None,
        }
    }

    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Transport-level response; any HTTP status is a successful transport
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn json(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends requests over the wire.
///
/// Returns `Err` only when no HTTP response was produced.
#[cfg_attr(test, mockall::automock)]
#[async_trait(?Send)]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// Called after a 401 has cleared the stored token
pub type UnauthorizedHandler = Arc<dyn Fn() + Send + Sync>;

#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn HttpTransport>,
    storage: Arc<dyn KeyValueStorage>,
    on_unauthorized: Option<UnauthorizedHandler>,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn HttpTransport>, storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            transport,
            storage,
            on_unauthorized: None,
        }
    }

    pub fn with_unauthorized_handler(mut self, handler: UnauthorizedHandler) -> Self {
        self.on_unauthorized = Some(handler);
        self
    }

    /// Send a request and decode a successful body into `T`
    pub async fn request<T: DeserializeOwned>(&self, mut request: ApiRequest) -> Result<T, ApiError> {
        request.bearer = self.storage.get(TOKEN_KEY).filter(|token| !token.is_empty());
        let method = request.method;
        let path = request.path.clone();

        let response = self.transport.send(request).await.map_err(|e| {
            log::error!("[API] {:?} {} failed: {}", method, path, e);
            e
        })?;

        if response.is_success() {
            return serde_json::from_value(response.body).map_err(|e| {
                log::error!("[API] {:?} {} returned an unexpected body: {}", method, path, e);
                ApiError::Decode(e.to_string())
            });
        }

        let error = ApiError::from_status(response.status, &response.body);
        if error == ApiError::Unauthorized {
            log::warn!("[API] {:?} {} rejected the session, signing out", method, path);
            self.storage.remove(TOKEN_KEY);
            if let Some(handler) = &self.on_unauthorized {
                handler();
            }
        }
        Err(error)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: Vec<(String, String)>) -> Result<T, ApiError> {
        self.request(ApiRequest::new(Method::Get, path).with_query(query)).await
    }

    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let body = encode(body)?;
        self.request(ApiRequest::new(Method::Post, path).with_body(body)).await
    }

    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let body = encode(body)?;
        self.request(ApiRequest::new(Method::Put, path).with_body(body)).await
    }

    // ========================
    // Health
    // ========================

    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        self.get("/health", Vec::new()).await
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Characters escaped in path segments (RFC 3986 unreserved are kept)
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Percent-encode an id for use as a path segment
pub(crate) fn segment(id: &str) -> String {
    utf8_percent_encode(id, PATH_SEGMENT).to_string()
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::storage::MemoryStorage;

    /// Client over a mock transport and fresh in-memory storage
    pub fn client(transport: MockHttpTransport) -> (ApiClient, Arc<MemoryStorage>) {
        let storage = Arc::new(MemoryStorage::new());
        let client = ApiClient::new(Arc::new(transport), storage.clone());
        (client, storage)
    }

    /// Transport answering every request with the same response
    pub fn always(status: u16, body: Value) -> MockHttpTransport {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_send()
            .returning(move |_| Ok(ApiResponse::json(status, body.clone())));
        transport
    }
}
