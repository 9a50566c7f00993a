//! HTTP client for the cuehall API.

pub mod bookings;
pub mod health;
pub mod resources;
pub mod settings;
pub mod slots;

use reqwest::StatusCode;

use crate::error::{ClientError, Result};

/// Base URL used when `CUEHALL_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// HTTP client for the cuehall API.
#[derive(Debug, Clone)]
pub struct CuehallClient {
    client: reqwest::Client,
    base_url: String,
}

impl CuehallClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// URL of a path under `/api`.
    fn api_url(&self, path: &str) -> String {
        self.url(&format!("/api/{}", path.trim_start_matches('/')))
    }

    /// Decode a JSON body, or turn an error status into a [`ClientError`].
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
        resource: &str,
    ) -> Result<T> {
        if response.status().is_success() {
            response.json().await.map_err(ClientError::from)
        } else {
            Err(Self::error_from(response, resource).await)
        }
    }

    /// Handle responses without a body (204 on upsert and delete).
    async fn handle_empty_response(&self, response: reqwest::Response, resource: &str) -> Result<()> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from(response, resource).await)
        }
    }

    async fn error_from(response: reqwest::Response, resource: &str) -> ClientError {
        let status = response.status();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        match status {
            StatusCode::NOT_FOUND => ClientError::NotFound {
                resource: resource.to_string(),
            },
            StatusCode::CONFLICT => ClientError::Conflict(message),
            _ => ClientError::ServerError {
                status: status.as_u16(),
                message,
            },
        }
    }
}
