//! # API crate: typed REST client for the village backend
//!
//! Every frontend call to the backend goes through [`ApiClient`]. The client is
//! generic over the [`store::KeyValueStore`] that persists the session, so the
//! same code runs in the browser (`localStorage`) and in native tests
//! ([`store::MemoryStore`]).
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Session state machine, login, signup, token verification, logout |
//! | [`error`] | [`ApiError`] and the user-facing message rules |
//! | [`forms`] | Request payloads and their client-side validation |
//! | `client` | Base URL, bearer header, `401` eviction |
//! | `user` | Profile and password endpoints |
//! | `admin` | Image upload and content management (admin role) |
//! | `content` | Public gallery, content lists, village info, stats |
//!
//! ## Endpoints
//!
//! - **Auth**: `login`, `signup`, `verify_token`, `restore_session`, `logout`
//! - **User**: `profile`, `update_profile`, `change_password`
//! - **Admin**: `list_images`, `add_image`, `edit_image`, `delete_image`,
//!   `list_content`, `add_content`, `edit_content`, `delete_content`
//! - **Public**: `public_images`, `content_by_type`, `village_info`, `stats`

pub mod auth;
pub mod error;
pub mod forms;

mod admin;
mod client;
mod content;
mod user;

#[cfg(test)]
mod mock;

pub use auth::{landing_path, AuthState};
pub use client::ApiClient;
pub use error::ApiError;
pub use forms::{
    ContentDraft, ImageDetails, ImageUpload, LoginForm, PasswordChange, ProfileUpdate, SignupForm,
};

pub use store::{
    Category, ContentItem, ContentType, DashboardStats, Image, Role, SiteConfig, User, VillageInfo,
};
