//! HTTP client for the CirquloFit backend.
//!
//! Thin JSON request wrapper: one shared `ureq` agent with a per-request
//! timeout, bearer auth when a session token is known, and backend error
//! details (`{"detail": ...}`) turned into readable messages.

mod auth;
mod types;
mod workouts;

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::auth::SessionToken;
use crate::config::ApiSettings;

pub use types::*;

/// Errors from backend requests
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Request timeout - server took too long to respond")]
    Timeout,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("{message}")]
    Status { code: u16, message: String },

    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("Not logged in")]
    MissingToken,
}

impl ApiError {
    fn from_ureq(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(code, resp) => {
                let body = resp.into_string().unwrap_or_default();
                let message = format_http_error(code, &body);
                if code == 401 {
                    Self::Unauthorized(message)
                } else {
                    Self::Status { code, message }
                }
            }
            ureq::Error::Transport(transport) => {
                if is_timeout(&transport) {
                    Self::Timeout
                } else {
                    Self::Network(transport.to_string())
                }
            }
        }
    }
}

fn is_timeout(transport: &ureq::Transport) -> bool {
    let mut source = std::error::Error::source(transport);
    while let Some(err) = source {
        if let Some(io) = err.downcast_ref::<std::io::Error>() {
            if matches!(
                io.kind(),
                std::io::ErrorKind::TimedOut | std::io::ErrorKind::WouldBlock
            ) {
                return true;
            }
        }
        source = err.source();
    }
    transport.to_string().contains("timed out")
}

/// Message for a non-2xx response.
///
/// Uses the backend's `detail` field (a string, or a list of validation
/// entries with `msg`), falling back to the bare status.
pub(crate) fn format_http_error(code: u16, body: &str) -> String {
    let fallback = format!("HTTP error! status: {code}");

    let Ok(value) = serde_json::from_str::<serde_json::Value>(body.trim()) else {
        return fallback;
    };

    match value.get("detail") {
        Some(serde_json::Value::String(detail)) => detail.clone(),
        Some(serde_json::Value::Array(items)) if !items.is_empty() => items
            .iter()
            .map(|item| {
                item.get("msg")
                    .or_else(|| item.get("message"))
                    .and_then(|v| v.as_str())
                    .map(str::to_string)
                    .unwrap_or_else(|| match item {
                        serde_json::Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
            })
            .collect::<Vec<_>>()
            .join(", "),
        Some(serde_json::Value::Null) | Some(serde_json::Value::Array(_)) | None => fallback,
        Some(other) => other.to_string(),
    }
}

/// Backend API client
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    agent: ureq::Agent,
    token: Option<SessionToken>,
}

impl ApiClient {
    pub fn new(settings: &ApiSettings) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build();

        Self {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            agent,
            token: None,
        }
    }

    /// Client that authenticates with `token`
    pub fn with_token(mut self, token: Option<SessionToken>) -> Self {
        self.token = token;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> Option<&SessionToken> {
        self.token.as_ref()
    }

    pub(crate) fn require_token(&self) -> Result<&SessionToken, ApiError> {
        self.token.as_ref().ok_or(ApiError::MissingToken)
    }

    fn request(&self, method: &str, path: &str, token: Option<&SessionToken>) -> ureq::Request {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self
            .agent
            .request(method, &url)
            .set("Content-Type", "application/json");
        if let Some(token) = token {
            req = req.set("Authorization", &format!("Bearer {}", token.as_str()));
        }
        req
    }

    fn execute<T: DeserializeOwned>(
        &self,
        req: ureq::Request,
        body: Option<String>,
    ) -> Result<T, ApiError> {
        tracing::debug!("{} {}", req.method(), req.url());

        let result = match body {
            Some(body) => req.send_string(&body),
            None => req.call(),
        };
        let response = result.map_err(ApiError::from_ureq)?;

        let text = response
            .into_string()
            .map_err(|e| ApiError::Decode(format!("Failed to read response body: {e}")))?;
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub(crate) fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.get_as(path, self.token.as_ref())
    }

    pub(crate) fn get_as<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&SessionToken>,
    ) -> Result<T, ApiError> {
        self.execute(self.request("GET", path, token), None)
    }

    pub(crate) fn send<B: Serialize, T: DeserializeOwned>(
        &self,
        method: &str,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_string(body)
            .map_err(|e| ApiError::Decode(format!("Failed to serialize request: {e}")))?;
        self.execute(self.request(method, path, self.token.as_ref()), Some(body))
    }

    pub(crate) fn send_empty<T: DeserializeOwned>(
        &self,
        method: &str,
        path: &str,
    ) -> Result<T, ApiError> {
        self.execute(self.request(method, path, self.token.as_ref()), None)
    }
}
