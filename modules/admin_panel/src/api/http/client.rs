//! HTTP client for the settings REST API
//!
//! Performs the two API calls and normalizes transport and server failures
//! into `SettingsError`. No retries: a failed call surfaces immediately.

use crate::api::rest::mapper::{settings_from_json, settings_to_json};
use crate::contract::{Settings, SettingsApi, SettingsError};
use async_trait::async_trait;
use reqwest::{RequestBuilder, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use url::Url;

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Which call a response belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Call {
    Load,
    Save,
}

/// Error body as sent by the API; only `message` is required
#[derive(Debug, Deserialize)]
struct ServerError {
    message: String,
    #[serde(default)]
    code: Option<String>,
}

/// Settings client speaking to a remote admin panel server
#[derive(Debug, Clone)]
pub struct HttpSettingsClient {
    http: reqwest::Client,
    endpoint: Url,
    bearer_token: Option<String>,
}

impl HttpSettingsClient {
    /// Client for the API rooted at `base_url` (e.g. `http://127.0.0.1:8087/`)
    pub fn new(base_url: Url) -> Result<Self, SettingsError> {
        Self::with_options(base_url, None, DEFAULT_TIMEOUT)
    }

    pub fn with_options(
        mut base_url: Url,
        bearer_token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, SettingsError> {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let endpoint = base_url
            .join("settings")
            .map_err(|e| SettingsError::transport(format!("invalid base URL: {}", e)))?;

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SettingsError::transport(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            endpoint,
            bearer_token,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn send(&self, call: Call, request: RequestBuilder) -> Result<Settings, SettingsError> {
        let request = match &self.bearer_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request
            .send()
            .await
            .map_err(|e| SettingsError::transport(format!("request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            let body: Value = response
                .json()
                .await
                .map_err(|e| SettingsError::transport(format!("invalid response body: {}", e)))?;
            return settings_from_json(body).map_err(|e| {
                SettingsError::transport(format!("response is not a settings document: {}", e))
            });
        }

        let server_error = response.json::<ServerError>().await.ok();
        tracing::debug!(%status, ?call, endpoint = %self.endpoint, "settings request rejected");
        Err(error_from_status(call, status, server_error))
    }
}

fn error_from_status(call: Call, status: StatusCode, body: Option<ServerError>) -> SettingsError {
    let code = body.as_ref().and_then(|b| b.code.clone());
    let message = match body {
        Some(body) => body.message,
        None => format!(
            "{} {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("request failed")
        ),
    };

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => SettingsError::Forbidden { message },
        StatusCode::BAD_REQUEST
        | StatusCode::UNPROCESSABLE_ENTITY
        | StatusCode::PAYLOAD_TOO_LARGE => SettingsError::Validation { message },
        // Only a rejected save can be a store write failure
        s if s.is_server_error()
            && call == Call::Save
            && code.as_deref() != Some("transport_error") =>
        {
            SettingsError::StoreWrite { message }
        }
        _ => SettingsError::Transport { message },
    }
}

#[async_trait]
impl SettingsApi for HttpSettingsClient {
    async fn load(&self) -> Result<Settings, SettingsError> {
        self.send(Call::Load, self.http.get(self.endpoint.clone()))
            .await
    }

    async fn save(&self, settings: &Settings) -> Result<Settings, SettingsError> {
        let body = settings_to_json(settings).map_err(|_| SettingsError::Internal)?;
        self.send(Call::Save, self.http.post(self.endpoint.clone()).json(&body))
            .await
    }
}
