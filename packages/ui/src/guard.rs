//! Route guard for pages that need a session or the admin role.

use api::AuthState;
use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::feedback::Spinner;

/// Capability a page requires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Authenticated,
    Admin,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still being verified.
    Wait,
    Allow,
    Redirect(&'static str),
}

pub fn decide(state: &AuthState, access: Access) -> GuardDecision {
    match (state, access) {
        (AuthState::Loading, _) => GuardDecision::Wait,
        (AuthState::Anonymous, _) => GuardDecision::Redirect("/login"),
        (AuthState::Authenticated(_), Access::Authenticated) => GuardDecision::Allow,
        (AuthState::Authenticated(user), Access::Admin) if user.is_admin() => GuardDecision::Allow,
        (AuthState::Authenticated(_), Access::Admin) => GuardDecision::Redirect("/"),
    }
}

/// Render `children` only when the session satisfies `access`.
#[component]
pub fn Protected(access: Access, children: Element) -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    use_effect(move || {
        if let GuardDecision::Redirect(to) = decide(&auth.read(), access) {
            tracing::debug!(to, "route guard redirect");
            nav.replace(to);
        }
    });

    let decision = decide(&auth.read(), access);
    match decision {
        GuardDecision::Allow => rsx! { {children} },
        _ => rsx! { Spinner {} },
    }
}

#[cfg(test)]
mod tests {
    use store::{Role, User};

    use super::*;

    fn user(role: Role) -> AuthState {
        AuthState::Authenticated(User {
            id: 5,
            name: "Lakshmi".to_string(),
            email: "lakshmi@village.test".to_string(),
            role,
            created_at: None,
        })
    }

    #[test]
    fn test_loading_waits() {
        assert_eq!(decide(&AuthState::Loading, Access::Admin), GuardDecision::Wait);
        assert_eq!(
            decide(&AuthState::Loading, Access::Authenticated),
            GuardDecision::Wait
        );
    }

    #[test]
    fn test_anonymous_goes_to_login() {
        assert_eq!(
            decide(&AuthState::Anonymous, Access::Authenticated),
            GuardDecision::Redirect("/login")
        );
        assert_eq!(
            decide(&AuthState::Anonymous, Access::Admin),
            GuardDecision::Redirect("/login")
        );
    }

    #[test]
    fn test_role_split() {
        assert_eq!(
            decide(&user(Role::User), Access::Authenticated),
            GuardDecision::Allow
        );
        assert_eq!(
            decide(&user(Role::User), Access::Admin),
            GuardDecision::Redirect("/")
        );
        assert_eq!(decide(&user(Role::Admin), Access::Admin), GuardDecision::Allow);
    }
}
