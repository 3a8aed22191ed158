//! # REST client core
//!
//! [`ApiClient`] owns the HTTP client, the backend base URL and the
//! [`SessionVault`] holding the bearer token. Endpoint wrappers live in the
//! sibling modules as further `impl` blocks; they all funnel through
//! [`ApiClient::dispatch`], which is the single place where:
//!
//! - the `Authorization: Bearer <token>` header is attached (the token is read
//!   from storage per request, so login and logout apply immediately);
//! - a `401 Unauthorized` evicts the session and fires the unauthorized hook
//!   (the web build navigates to `/login`);
//! - non-success bodies are mined for the server's `error` message.

use std::fmt;
use std::sync::Arc;

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use store::{KeyValueStore, SessionVault};

use crate::error::{message_from_body, ApiError};

type UnauthorizedHook = Arc<dyn Fn() + Send + Sync>;

/// What a `401` on a given request means.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum OnUnauthorized {
    /// Session request: clear the session and run the unauthorized hook.
    EvictAndRedirect,
    /// Startup probe: clear the session, stay on the current page.
    Evict,
    /// Credential endpoint: a `401` is a rejected login, report it as a server error.
    Report,
}

/// Typed client for the village REST backend.
#[derive(Clone)]
pub struct ApiClient<S> {
    http: reqwest::Client,
    base_url: Arc<str>,
    vault: SessionVault<S>,
    on_unauthorized: Option<UnauthorizedHook>,
}

impl<S> fmt::Debug for ApiClient<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("on_unauthorized", &self.on_unauthorized.is_some())
            .finish()
    }
}

/// `{"message": "..."}` acknowledgement bodies.
#[derive(Deserialize)]
struct MessageBody {
    message: Option<String>,
}

impl<S: KeyValueStore> ApiClient<S> {
    pub fn new(base_url: impl Into<String>, store: S) -> Self {
        let base_url = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: Arc::from(base_url.trim_end_matches('/')),
            vault: SessionVault::new(store),
            on_unauthorized: None,
        }
    }

    /// Register the side effect run after a `401` evicted the session.
    pub fn with_unauthorized_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_unauthorized = Some(Arc::new(hook));
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn vault(&self) -> &SessionVault<S> {
        &self.vault
    }

    /// Absolute URL of a server-relative image path.
    pub fn asset_url(&self, path: &str) -> String {
        self.url(path)
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Start a request, attaching the bearer token when one is persisted.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let request = self.http.request(method, self.url(path));
        match self.vault.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Clear the session and run the unauthorized hook.
    pub fn evict(&self) {
        tracing::warn!("session rejected by the server, logging out");
        self.vault.clear();
        if let Some(hook) = &self.on_unauthorized {
            hook();
        }
    }

    pub(crate) async fn dispatch(
        &self,
        request: RequestBuilder,
        on_unauthorized: OnUnauthorized,
    ) -> Result<Response, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!(status = status.as_u16(), url = %response.url(), "api response");

        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::UNAUTHORIZED {
            match on_unauthorized {
                OnUnauthorized::EvictAndRedirect => {
                    self.evict();
                    return Err(ApiError::Unauthorized);
                }
                OnUnauthorized::Evict => {
                    self.vault.clear();
                    return Err(ApiError::Unauthorized);
                }
                OnUnauthorized::Report => {}
            }
        }

        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Server {
            status: status.as_u16(),
            message: message_from_body(&body),
        })
    }

    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        on_unauthorized: OnUnauthorized,
    ) -> Result<T, ApiError> {
        let response = self.dispatch(request, on_unauthorized).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Send a request whose body, if any, is an optional `{"message"}`.
    pub(crate) async fn send_message(
        &self,
        request: RequestBuilder,
        on_unauthorized: OnUnauthorized,
    ) -> Result<Option<String>, ApiError> {
        let response = self.dispatch(request, on_unauthorized).await?;
        let body = response.text().await.unwrap_or_default();
        Ok(serde_json::from_str::<MessageBody>(&body)
            .ok()
            .and_then(|b| b.message))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use axum::http::{HeaderMap, StatusCode as AxumStatus};
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;
    use store::{MemoryStore, Session};

    use super::*;
    use crate::mock::{sample_user, serve};

    async fn echo_auth(headers: HeaderMap) -> Json<serde_json::Value> {
        let auth = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        Json(json!({ "authorization": auth }))
    }

    #[derive(Deserialize)]
    struct Echo {
        authorization: Option<String>,
    }

    #[test]
    fn test_url_joining() {
        let client = ApiClient::new("http://example.test/", MemoryStore::new());
        assert_eq!(client.base_url(), "http://example.test");
        assert_eq!(client.url("/auth/login"), "http://example.test/auth/login");
        assert_eq!(
            client.asset_url("uploads/paddy.jpg"),
            "http://example.test/uploads/paddy.jpg"
        );
    }

    #[tokio::test]
    async fn test_bearer_header_only_when_token_persisted() {
        let base = serve(Router::new().route("/echo", get(echo_auth))).await;
        let client = ApiClient::new(base, MemoryStore::new());

        let echo: Echo = client
            .send_json(client.request(Method::GET, "/echo"), OnUnauthorized::EvictAndRedirect)
            .await
            .unwrap();
        assert!(echo.authorization.is_none());

        client.vault().save(&Session {
            token: "tok-123".to_string(),
            user: sample_user(false),
        });
        let echo: Echo = client
            .send_json(client.request(Method::GET, "/echo"), OnUnauthorized::EvictAndRedirect)
            .await
            .unwrap();
        assert_eq!(echo.authorization.as_deref(), Some("Bearer tok-123"));
    }

    #[tokio::test]
    async fn test_unauthorized_evicts_and_runs_hook() {
        let router = Router::new().route(
            "/user/profile",
            get(|| async { (AxumStatus::UNAUTHORIZED, Json(json!({ "error": "Invalid token" }))) }),
        );
        let base = serve(router).await;

        let redirects = Arc::new(AtomicUsize::new(0));
        let counter = redirects.clone();
        let client = ApiClient::new(base, MemoryStore::new()).with_unauthorized_hook(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        client.vault().save(&Session {
            token: "stale".to_string(),
            user: sample_user(false),
        });

        let err = client
            .send_json::<serde_json::Value>(
                client.request(Method::GET, "/user/profile"),
                OnUnauthorized::EvictAndRedirect,
            )
            .await
            .unwrap_err();

        assert_eq!(err, ApiError::Unauthorized);
        assert!(client.vault().load().is_none());
        assert_eq!(redirects.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_server_error_message_surfaces() {
        let router = Router::new()
            .route(
                "/bad",
                get(|| async { (AxumStatus::BAD_REQUEST, Json(json!({ "error": "Title is required" }))) }),
            )
            .route(
                "/boom",
                get(|| async { (AxumStatus::INTERNAL_SERVER_ERROR, "upstream exploded") }),
            );
        let base = serve(router).await;
        let client = ApiClient::new(base, MemoryStore::new());

        let err = client
            .send_message(client.request(Method::GET, "/bad"), OnUnauthorized::EvictAndRedirect)
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Server {
                status: 400,
                message: Some("Title is required".to_string())
            }
        );
        assert_eq!(err.user_message("Failed to save"), "Title is required");

        let err = client
            .send_message(client.request(Method::GET, "/boom"), OnUnauthorized::EvictAndRedirect)
            .await
            .unwrap_err();
        assert_eq!(err.user_message("Failed to save"), "Failed to save");
    }

    #[tokio::test]
    async fn test_network_failure_is_reported() {
        // Nothing listens on the discard port
        let client = ApiClient::new("http://127.0.0.1:9", MemoryStore::new());
        let err = client
            .send_message(client.request(Method::GET, "/x"), OnUnauthorized::EvictAndRedirect)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }
}
