//! HTTP Transport
//!
//! `reqwest` implementation of [`HttpTransport`]. In the browser reqwest
//! issues `fetch` calls; natively it is only used by tooling.

use async_trait::async_trait;
use serde_json::Value;

use super::{ApiRequest, ApiResponse, HttpTransport, Method};
use crate::config::ApiConfig;
use crate::error::ApiError;

pub struct ReqwestTransport {
    client: reqwest::Client,
    config: ApiConfig,
}

impl ReqwestTransport {
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(config.timeout);
        let client = builder
            .build()
            .map_err(|e| ApiError::Network(format!("client init: {}", e)))?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
        }
    }
}

#[async_trait(?Send)]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let url = self.config.url(&request.path);
        let mut builder = self.client.request(request.method.into(), url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(token) = &request.bearer {
            builder = builder.header(reqwest::header::AUTHORIZATION, format!("Bearer {}", token));
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(ApiResponse {
            status,
            body: parse_body(&text),
        })
    }
}

/// Empty bodies become `null`; non-JSON bodies are kept as a string
fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}
