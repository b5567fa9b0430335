//! Backend API Bindings
//!
//! Typed wrappers around the coach backend's REST endpoints, organized by domain.
//! Every call goes through a [`Transport`] so the browser client and tests
//! share the same request building and decoding.

mod http;
mod info;
mod ideas;
mod reading;
mod reminders;
mod scores;
mod writing;

#[cfg(test)]
mod tests;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::BackendConfig;
use crate::error::ApiError;

pub use http::HttpTransport;

/// Client used by the browser build
pub type BrowserClient = BackendClient<HttpTransport>;

// ========================
// Transport
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// A fully built request: absolute URL plus optional JSON body
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode a 2xx body into `T`; any other status is an error.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        if !self.is_success() {
            return Err(ApiError::Status { status: self.status, body: self.body });
        }
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Sends one request and hands back the raw response
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

// ========================
// Client
// ========================

#[derive(Debug, Clone)]
pub struct BackendClient<T> {
    config: BackendConfig,
    transport: T,
}

impl<T: Transport> BackendClient<T> {
    pub fn new(config: BackendConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    #[cfg(test)]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn get<R: DeserializeOwned>(&self, url: String) -> Result<R, ApiError> {
        self.execute(ApiRequest { method: Method::Get, url, body: None }).await
    }

    async fn post<B: Serialize, R: DeserializeOwned>(&self, path: &str, body: &B) -> Result<R, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        let url = self.config.endpoint(path);
        self.execute(ApiRequest { method: Method::Post, url, body: Some(body) }).await
    }

    async fn execute<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ApiError> {
        log::debug!("[API] {} {}", request.method.as_str(), request.url);
        let response = self.transport.send(request).await?;
        log::debug!("[API] -> {}", response.status);
        response.decode()
    }
}
