//! REST API client for the CV360 backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning a network error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<T, ApiError>`; transport failures, auth
//! rejections, and undecodable bodies are separate variants so screens can
//! degrade without crashing hydration. Requests are one-shot: no retry, no
//! timeout, no cancellation once issued.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
#[cfg(feature = "hydrate")]
use super::error::{classify_login_response, classify_response};
use super::types::{Ack, AdminStats, Job, NewJob, Profile, RegisterRequest, Session};
use crate::state::session::SessionState;

/// Same-origin default; override with [`ApiClient::with_base_url`] when the
/// backend is served from another host.
pub const DEFAULT_BASE_URL: &str = "/api";

/// Thin wrapper owning the base URL and the bearer token for one caller.
///
/// Cheap to build per call site from the current session; holds no
/// connection state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    /// Unauthenticated client against [`DEFAULT_BASE_URL`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Unauthenticated client against a custom base URL; a trailing slash is
    /// tolerated.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url, token: None }
    }

    /// Attach a bearer token.
    #[must_use]
    pub fn bearer(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Client carrying the session's token, if one is established.
    #[must_use]
    pub fn for_session(state: &SessionState) -> Self {
        match state.token() {
            Some(token) => Self::new().bearer(token),
            None => Self::new(),
        }
    }

    #[cfg(any(test, feature = "hydrate"))]
    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Exchange credentials for a session via `POST /api/auth/login`.
    ///
    /// # Errors
    ///
    /// [`ApiError::InvalidCredentials`] on a 401, [`ApiError::Server`] with
    /// the backend's message on other failures.
    pub async fn login(&self, username_or_email: &str, password: &str) -> Result<Session, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = serde_json::json!({
                "username": username_or_email,
                "password": password,
            });
            let resp = gloo_net::http::Request::post(&self.endpoint("/auth/login"))
                .json(&payload)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                let status = resp.status();
                log::warn!("login rejected with status {status}");
                return Err(classify_login_response(status, read_message(resp).await));
            }
            resp.json::<Session>().await.map_err(|e| ApiError::Malformed(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (username_or_email, password);
            Err(not_available())
        }
    }

    /// Create an account via `POST /api/auth/register`.
    ///
    /// The confirmation field was already stripped during validation; only
    /// the wire fields leave the client.
    ///
    /// # Errors
    ///
    /// [`ApiError::Server`] with the backend's message (e.g. a duplicate
    /// username) or a transport/decode variant.
    pub async fn register(&self, request: &RegisterRequest) -> Result<Session, ApiError> {
        self.post_json("/auth/register", request).await
    }

    /// Fetch the job listing via `GET /api/jobs`. Employers receive their own
    /// postings; workers and admins receive approved jobs.
    ///
    /// # Errors
    ///
    /// [`ApiError::Rejected`] on 401/403, other variants per the taxonomy.
    pub async fn jobs(&self) -> Result<Vec<Job>, ApiError> {
        self.get_json("/jobs").await
    }

    /// Post a new job via `POST /api/jobs` (employer only by convention).
    ///
    /// # Errors
    ///
    /// [`ApiError::Rejected`] when the backend refuses the role,
    /// [`ApiError::Server`] for validation messages.
    pub async fn create_job(&self, job: &NewJob) -> Result<Ack, ApiError> {
        self.post_json("/jobs", job).await
    }

    /// Apply to a job via `POST /api/applications` (worker only by
    /// convention).
    ///
    /// # Errors
    ///
    /// [`ApiError::Server`] carries messages like an already-applied notice.
    pub async fn apply_to_job(&self, job_id: i64) -> Result<Ack, ApiError> {
        let payload = serde_json::json!({ "job_id": job_id });
        self.post_json("/applications", &payload).await
    }

    /// Re-fetch the signed-in user's full profile via `GET /api/profile`.
    ///
    /// # Errors
    ///
    /// Standard taxonomy; the session itself is not touched here.
    pub async fn profile(&self) -> Result<Profile, ApiError> {
        self.get_json("/profile").await
    }

    /// Fetch platform counters via `GET /api/admin/stats` (admin only).
    ///
    /// # Errors
    ///
    /// Standard taxonomy.
    pub async fn admin_stats(&self) -> Result<AdminStats, ApiError> {
        self.get_json("/admin/stats").await
    }

    /// Fetch all accounts via `GET /api/admin/users` (admin only).
    ///
    /// # Errors
    ///
    /// Standard taxonomy.
    pub async fn admin_users(&self) -> Result<Vec<Profile>, ApiError> {
        self.get_json("/admin/users").await
    }

    #[cfg(feature = "hydrate")]
    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let mut req = gloo_net::http::Request::get(&self.endpoint(path))
            .header("Content-Type", "application/json");
        if let Some(token) = &self.token {
            req = req.header("Authorization", &bearer_header(token));
        }
        let resp = req.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        decode_response(resp).await
    }

    #[cfg(not(feature = "hydrate"))]
    async fn get_json<T>(&self, path: &str) -> Result<T, ApiError> {
        let _ = path;
        Err(not_available())
    }

    #[cfg(feature = "hydrate")]
    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: serde::Serialize,
        T: serde::de::DeserializeOwned,
    {
        let mut req = gloo_net::http::Request::post(&self.endpoint(path));
        if let Some(token) = &self.token {
            req = req.header("Authorization", &bearer_header(token));
        }
        let resp = req
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode_response(resp).await
    }

    #[cfg(not(feature = "hydrate"))]
    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let _ = (path, body);
        Err(not_available())
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(not(feature = "hydrate"))]
fn not_available() -> ApiError {
    ApiError::Network("not available on server".to_owned())
}

#[cfg(feature = "hydrate")]
async fn decode_response<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
) -> Result<T, ApiError> {
    if !resp.ok() {
        let status = resp.status();
        log::warn!("request to {} failed with status {status}", resp.url());
        return Err(classify_response(status, read_message(resp).await));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Malformed(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn read_message(resp: gloo_net::http::Response) -> Option<String> {
    resp.json::<Ack>().await.ok().and_then(|ack| ack.message)
}
