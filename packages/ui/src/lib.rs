//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod auth;
pub use auth::{
    logout, make_client, use_auth, use_client, use_site, AuthProvider, PlatformStore, SiteClient,
};

mod guard;
pub use guard::{decide, Access, GuardDecision, Protected};

mod navbar;
pub use navbar::Navbar;

mod footer;
pub use footer::Footer;

mod feedback;
pub use feedback::{Alert, AlertKind, ErrorAlert, Spinner};

mod confirm_dialog;
pub use confirm_dialog::ConfirmDialog;

mod cards;
pub use cards::{ContentCard, ImageCard, StatTile};

pub mod timer;

mod form;
pub use form::{TextArea, TextField};
