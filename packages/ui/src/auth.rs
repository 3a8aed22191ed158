//! Authentication context and hooks for the UI.

use api::{ApiClient, AuthState};
use dioxus::prelude::*;
use dioxus::router::Navigator;
use store::SiteConfig;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStorage;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = store::MemoryStore;

/// The API client used by every page.
pub type SiteClient = ApiClient<PlatformStore>;

/// Build the client for `config`. A `401` on any session request sends the
/// browser to `/login`; the full page load resets every signal.
pub fn make_client(config: &SiteConfig) -> SiteClient {
    ApiClient::new(config.api.base_url.clone(), PlatformStore::new()).with_unauthorized_hook(|| {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        tracing::warn!("session expired, login required");
    })
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

pub fn use_client() -> SiteClient {
    use_context::<SiteClient>()
}

pub fn use_site() -> SiteConfig {
    use_context::<SiteConfig>()
}

/// Provider component that owns the API client and the session state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(config: SiteConfig, children: Element) -> Element {
    let client = use_hook(|| make_client(&config));
    let mut auth_state = use_signal(AuthState::default);

    // Verify the persisted session once on mount
    let restore = client.clone();
    let _ = use_resource(move || {
        let client = restore.clone();
        async move {
            let state = client.restore_session().await;
            tracing::debug!(logged_in = state.is_logged_in(), "session restored");
            auth_state.set(state);
        }
    });

    use_context_provider(|| client);
    use_context_provider(|| config.clone());
    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Forget the session and return to the home page.
pub fn logout(client: &SiteClient, mut auth: Signal<AuthState>, nav: Navigator) {
    client.logout();
    auth.set(AuthState::Anonymous);
    nav.push("/");
}
