//! # Session state machine
//!
//! ```text
//!            restore()
//! Loading ─────────────┬──────────────► Anonymous ◄──── logout() / 401
//!                      │                   │
//!                      │                   │ login()
//!                      ▼                   ▼
//!             Authenticated(user) ◄────────┘
//!               ├─ role = user
//!               └─ role = admin
//! ```
//!
//! Signup never authenticates; the visitor is sent to the login page.

use reqwest::Method;
use serde::Deserialize;
use store::{KeyValueStore, Session, User};

use crate::client::{ApiClient, OnUnauthorized};
use crate::error::ApiError;
use crate::forms::{LoginForm, SignupForm};

/// Authentication state shared by the whole UI.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum AuthState {
    /// Startup: the persisted token is being verified.
    #[default]
    Loading,
    Anonymous,
    Authenticated(User),
}

impl AuthState {
    pub fn user(&self) -> Option<&User> {
        match self {
            AuthState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, AuthState::Loading)
    }

    pub fn is_logged_in(&self) -> bool {
        self.user().is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user().is_some_and(User::is_admin)
    }
}

/// Where a freshly logged-in user lands.
pub fn landing_path(user: &User) -> &'static str {
    if user.is_admin() {
        "/admin"
    } else {
        "/"
    }
}

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
    user: User,
}

#[derive(Deserialize)]
struct VerifyResponse {
    #[serde(default)]
    user: Option<User>,
}

impl<S: KeyValueStore> ApiClient<S> {
    /// Resolve the startup state from the persisted session.
    pub async fn restore_session(&self) -> AuthState {
        let Some(session) = self.vault().load() else {
            return AuthState::Anonymous;
        };

        match self.verify_token().await {
            Ok(Some(user)) => {
                self.vault().update_user(&user);
                AuthState::Authenticated(user)
            }
            Ok(None) => AuthState::Authenticated(session.user),
            Err(ApiError::Unauthorized) => {
                tracing::info!("persisted session expired");
                AuthState::Anonymous
            }
            Err(e) => {
                tracing::warn!("could not verify session, using cached user: {e}");
                AuthState::Authenticated(session.user)
            }
        }
    }

    /// Check the persisted token with the backend. A `401` clears the session.
    pub async fn verify_token(&self) -> Result<Option<User>, ApiError> {
        let response: VerifyResponse = self
            .send_json(
                self.request(Method::GET, "/auth/verify-token"),
                OnUnauthorized::Evict,
            )
            .await?;
        Ok(response.user)
    }

    /// Exchange credentials for a token and persist the session.
    pub async fn login(&self, form: &LoginForm) -> Result<User, ApiError> {
        form.validate()?;

        let response: LoginResponse = self
            .send_json(
                self.request(Method::POST, "/auth/login").json(form),
                OnUnauthorized::Report,
            )
            .await?;

        self.vault().save(&Session {
            token: response.token,
            user: response.user.clone(),
        });
        tracing::info!(user_id = response.user.id, role = %response.user.role, "logged in");

        Ok(response.user)
    }

    /// Create an account. Validation runs before any request is made.
    pub async fn signup(&self, form: &SignupForm) -> Result<Option<String>, ApiError> {
        let form = form.normalized();
        form.validate()?;

        self.send_message(
            self.request(Method::POST, "/auth/signup").json(&form),
            OnUnauthorized::Report,
        )
        .await
    }

    /// Forget the session locally. The backend keeps no session state.
    pub fn logout(&self) {
        self.vault().clear();
        tracing::info!("logged out");
    }
}
