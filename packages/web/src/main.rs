use dioxus::prelude::*;

use store::SiteConfig;
use ui::AuthProvider;
use views::{
    About, AddContent, AddImage, AdminDashboard, Agriculture, EditContent, EditImage, Events,
    Gallery, Home, Login, ManageContent, ManageImages, Profile, Shell, Signup,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/gallery")]
        Gallery {},
        #[route("/agriculture")]
        Agriculture {},
        #[route("/events")]
        Events {},
        #[route("/about")]
        About {},
        #[route("/login")]
        Login {},
        #[route("/signup")]
        Signup {},
        #[route("/profile")]
        Profile {},
        #[route("/admin")]
        AdminDashboard {},
        #[route("/admin/images")]
        ManageImages {},
        #[route("/admin/add-image")]
        AddImage {},
        #[route("/admin/edit-image/:id")]
        EditImage { id: i64 },
        #[route("/admin/content")]
        ManageContent {},
        #[route("/admin/add-content")]
        AddContent {},
        #[route("/admin/edit-content/:id")]
        EditContent { id: i64 },
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

const VILLAGE_TOML: &str = include_str!("../village.toml");

fn main() {
    dioxus::launch(App);
}

/// Embedded `village.toml` plus environment overrides.
fn load_config() -> SiteConfig {
    let config = match SiteConfig::from_toml(VILLAGE_TOML) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid {}: {e}", SiteConfig::filename());
            SiteConfig::default()
        }
    };
    let config = config.with_env_overrides();
    tracing::info!(api = %config.api.base_url, "site configured");
    config
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        // Global app resources
        document::Title { "{config.site.name}" }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            config: config.clone(),
            Router::<Route> {}
        }
    }
}

/// Unknown paths go home.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    use_effect(move || {
        nav.replace(Route::Home {});
    });
    tracing::debug!(path = %segments.join("/"), "unknown route");
    rsx! {}
}
