//! Remote translation backend client
//!
//! Talks to the hosted translator backend over HTTP. Translation goes
//! through `POST <base>/api/translate`; the companion auth endpoints
//! (`/api/login`, `/api/register`, `/api/getUser`) back the session store's
//! remote login flow.
//!
//! The gateway is optional everywhere it is used: any transport failure or
//! non-2xx status makes the caller fall back to the local resolver. The one
//! exception is HTTP 401, which is surfaced as
//! [`GatewayError::Unauthorized`] so the session can be invalidated.

use crate::gateway::error::{GatewayError, GatewayResult};
use crate::gateway::provider::TranslationProvider;
use crate::session::User;
use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::RwLock;

/// Environment variable holding the backend base URL
pub const BACKEND_URL_ENV: &str = "IGBO_BACKEND_URL";

/// Response fields the backend has been observed to put translations under,
/// probed in order.
const TRANSLATION_FIELDS: [&str; 3] = ["igboText", "result", "translation"];

/// HTTP client for the remote translator backend
///
/// Holds a cached authorization token for the auth endpoints. The token is
/// set after a successful remote login and cleared on logout.
pub struct RemoteGateway {
    base_url: String,
    client: reqwest::Client,
    token: RwLock<Option<String>>,
}

impl RemoteGateway {
    /// Create a gateway for an explicit base URL
    ///
    /// # Errors
    ///
    /// * `GatewayError::ConfigError` if the URL is empty or the HTTP client
    ///   cannot be built
    pub fn new(base_url: &str) -> GatewayResult<Self> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(GatewayError::ConfigError(
                "Backend base URL cannot be empty".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| {
                GatewayError::NetworkError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            base_url,
            client,
            token: RwLock::new(None),
        })
    }

    /// Create a gateway from the `IGBO_BACKEND_URL` environment variable
    pub fn from_env() -> GatewayResult<Self> {
        let base_url = std::env::var(BACKEND_URL_ENV).map_err(|_| {
            GatewayError::ConfigError(format!("{} environment variable not set", BACKEND_URL_ENV))
        })?;

        Self::new(&base_url)
    }

    /// Cache an authorization token for subsequent auth calls
    pub fn set_token(&self, token: &str) {
        if let Ok(mut guard) = self.token.write() {
            *guard = Some(token.to_string());
        }
    }

    /// Drop the cached authorization token (logout side effect)
    pub fn clear_token(&self) {
        if let Ok(mut guard) = self.token.write() {
            *guard = None;
        }
    }

    fn cached_token(&self) -> Option<String> {
        self.token.read().ok().and_then(|guard| guard.clone())
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Map a non-2xx response to the right error, consuming the body for
    /// the message.
    async fn status_error(response: reqwest::Response) -> GatewayError {
        let status = response.status();
        if status.as_u16() == 401 {
            return GatewayError::Unauthorized;
        }
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        GatewayError::ProviderError(format!("Backend error ({}): {}", status, body))
    }

    async fn post_json(&self, path: &str, body: &Value) -> GatewayResult<Value> {
        let mut request = self.client.post(self.endpoint(path)).json(body);
        if let Some(token) = self.cached_token() {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }

        response.json().await.map_err(|e| {
            GatewayError::InvalidResponse(format!("Failed to parse backend response: {}", e))
        })
    }

    /// Log in against the backend. A successful response yields the user
    /// record; if the payload carries a token it is cached for later calls.
    pub async fn login(&self, username: &str, password: &str) -> GatewayResult<User> {
        let body = json!({ "username": username, "password": password });
        let json = self.post_json("/api/login", &body).await?;
        self.extract_user(&json)
    }

    /// Register a new account and return the created user record
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        email: &str,
        role: &str,
    ) -> GatewayResult<User> {
        let body = json!({
            "username": username,
            "password": password,
            "email": email,
            "role": role
        });
        let json = self.post_json("/api/register", &body).await?;
        self.extract_user(&json)
    }

    /// Fetch the user record for the cached token
    pub async fn get_user(&self) -> GatewayResult<User> {
        let json = self.post_json("/api/getUser", &json!({})).await?;
        self.extract_user(&json)
    }

    /// Pull a user record out of an auth payload. The backend has returned
    /// both flat user objects and `{ "user": {...}, "token": "..." }`
    /// envelopes; accept either.
    fn extract_user(&self, json: &Value) -> GatewayResult<User> {
        if let Some(token) = json.get("token").and_then(Value::as_str) {
            self.set_token(token);
        }

        let record = json.get("user").unwrap_or(json);
        serde_json::from_value(record.clone()).map_err(|e| {
            GatewayError::InvalidResponse(format!("Auth payload missing user record: {}", e))
        })
    }
}

impl std::fmt::Debug for RemoteGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteGateway")
            .field("base_url", &self.base_url)
            .field("token", &"***")
            .finish()
    }
}

#[async_trait]
impl TranslationProvider for RemoteGateway {
    async fn translate(&self, text: &str) -> GatewayResult<String> {
        let body = json!({ "text": text });
        let json = self.post_json("/api/translate", &body).await?;

        for field in TRANSLATION_FIELDS {
            if let Some(translation) = json.get(field).and_then(Value::as_str) {
                return Ok(translation.to_string());
            }
        }

        Err(GatewayError::InvalidResponse(format!(
            "No translation field in response (tried {:?})",
            TRANSLATION_FIELDS
        )))
    }

    fn provider_name(&self) -> &str {
        "Remote Backend"
    }
}
