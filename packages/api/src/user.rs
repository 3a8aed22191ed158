//! Profile endpoints for the logged-in user.

use reqwest::Method;
use serde::Deserialize;
use store::{KeyValueStore, User};

use crate::client::{ApiClient, OnUnauthorized};
use crate::error::ApiError;
use crate::forms::{PasswordChange, ProfileUpdate};

#[derive(Deserialize)]
struct UserEnvelope {
    user: User,
}

impl<S: KeyValueStore> ApiClient<S> {
    pub async fn profile(&self) -> Result<User, ApiError> {
        let envelope: UserEnvelope = self
            .send_json(
                self.request(Method::GET, "/user/profile"),
                OnUnauthorized::EvictAndRedirect,
            )
            .await?;
        Ok(envelope.user)
    }

    /// Rename the user. The cached session user follows so the navbar updates.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<Option<String>, ApiError> {
        update.validate()?;
        let update = ProfileUpdate {
            name: update.name.trim().to_string(),
        };

        let message = self
            .send_message(
                self.request(Method::PUT, "/user/profile").json(&update),
                OnUnauthorized::EvictAndRedirect,
            )
            .await?;

        if let Some(mut session) = self.vault().load() {
            session.user.name = update.name;
            self.vault().update_user(&session.user);
        }
        Ok(message)
    }

    pub async fn change_password(&self, change: &PasswordChange) -> Result<Option<String>, ApiError> {
        change.validate()?;
        self.send_message(
            self.request(Method::PUT, "/user/change-password").json(change),
            OnUnauthorized::EvictAndRedirect,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::{get, put};
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use store::{MemoryStore, Session};

    use super::*;
    use crate::mock::{sample_user, serve};

    fn authorized(headers: &HeaderMap) -> bool {
        headers.get("authorization").and_then(|v| v.to_str().ok()) == Some("Bearer user-token")
    }

    fn logged_in(base: String) -> ApiClient<MemoryStore> {
        let client = ApiClient::new(base, MemoryStore::new());
        client.vault().save(&Session {
            token: "user-token".to_string(),
            user: sample_user(false),
        });
        client
    }

    #[tokio::test]
    async fn test_profile_and_rename() {
        let received = Arc::new(Mutex::new(Value::Null));
        let sink = received.clone();
        let router = Router::new().route(
            "/user/profile",
            get(|headers: HeaderMap| async move {
                if authorized(&headers) {
                    (StatusCode::OK, Json(json!({ "user": sample_user(false) })))
                } else {
                    (StatusCode::UNAUTHORIZED, Json(json!({ "error": "No token" })))
                }
            })
            .put(move |Json(body): Json<Value>| {
                let sink = sink.clone();
                async move {
                    *sink.lock().unwrap() = body;
                    Json(json!({ "message": "Profile updated" }))
                }
            }),
        );
        let client = logged_in(serve(router).await);

        let user = client.profile().await.unwrap();
        assert_eq!(user.email, "ramesh@village.test");

        let message = client
            .update_profile(&ProfileUpdate {
                name: "  Ramesh Babu ".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(message.as_deref(), Some("Profile updated"));
        assert_eq!(received.lock().unwrap()["name"], "Ramesh Babu");
        assert_eq!(client.vault().load().unwrap().user.name, "Ramesh Babu");
    }

    #[tokio::test]
    async fn test_expired_token_on_profile_forces_login() {
        let router = Router::new().route(
            "/user/profile",
            get(|| async { (StatusCode::UNAUTHORIZED, Json(json!({ "error": "Token expired" }))) }),
        );
        let redirects = Arc::new(AtomicUsize::new(0));
        let counter = redirects.clone();
        let client = logged_in(serve(router).await).with_unauthorized_hook(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(client.profile().await.unwrap_err(), ApiError::Unauthorized);
        assert!(client.vault().load().is_none());
        assert_eq!(redirects.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_change_password_surfaces_server_error() {
        let router = Router::new().route(
            "/user/change-password",
            put(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Current password is incorrect" })),
                )
            }),
        );
        let client = logged_in(serve(router).await);

        let err = client
            .change_password(&PasswordChange {
                current_password: "nope".to_string(),
                new_password: "NewPass1".to_string(),
                confirm_password: "NewPass1".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(
            err.user_message("Failed to change password"),
            "Current password is incorrect"
        );
        // A rejected password change is not a session failure
        assert!(client.vault().load().is_some());
    }
}
