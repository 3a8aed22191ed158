//! In-process backend for client tests.

use axum::Router;
use store::{Role, User};

/// Serve `router` on an ephemeral localhost port and return its base URL.
pub(crate) async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

pub(crate) fn sample_user(admin: bool) -> User {
    User {
        id: if admin { 1 } else { 2 },
        name: if admin { "Admin" } else { "Ramesh" }.to_string(),
        email: if admin {
            "admin@village.test"
        } else {
            "ramesh@village.test"
        }
        .to_string(),
        role: if admin { Role::Admin } else { Role::User },
        created_at: Some("2024-01-05T10:00:00.000Z".to_string()),
    }
}
