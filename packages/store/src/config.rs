//! # Site configuration: `village.toml`
//!
//! Defines the TOML configuration embedded into the web build. It tells the
//! frontend where the REST backend lives and carries the village identity shown
//! in the page chrome (navbar, footer, about page fallbacks).
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "https://village-backend-q6jx.onrender.com"
//!
//! [site]
//! name = "Ramachandrunipeta"
//! tagline = "A Thriving Agricultural Village in NTR District, Andhra Pradesh"
//! mandal = "Jaggaiahpeta"
//! district = "NTR"
//! state = "Andhra Pradesh"
//! contact_email = "info@ramachandrunipeta.com"
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`SiteConfig`] | Top-level config. TOML (de)serialisation, builder helpers and environment overrides. |
//! | [`ApiConfig`] | Backend location: `base_url` of the REST API. |
//! | [`SiteInfo`] | Village identity strings. |
//!
//! Every section derives `Default`, so a missing or partial file is equivalent
//! to the production defaults.
//!
//! ## Overrides
//!
//! [`SiteConfig::with_env_overrides`] applies `VILLAGE_API_URL`: first the value
//! baked in at compile time (the only option inside the browser), then on native
//! builds the runtime environment, after loading a `.env` file if present.

use serde::{Deserialize, Serialize};

/// Environment variable naming the REST backend base URL.
pub const API_URL_ENV: &str = "VILLAGE_API_URL";

const DEFAULT_API_URL: &str = "https://village-backend-q6jx.onrender.com";

/// Top-level configuration stored in `village.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub site: SiteInfo,
}

/// REST backend configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every endpoint path and image path is joined onto.
    #[serde(default = "default_api_url")]
    pub base_url: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_url(),
        }
    }
}

/// Identity of the village shown across the site.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfo {
    pub name: String,
    pub tagline: String,
    pub mandal: String,
    pub district: String,
    pub state: String,
    pub contact_email: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            name: "Ramachandrunipeta".to_string(),
            tagline: "A Thriving Agricultural Village in NTR District, Andhra Pradesh".to_string(),
            mandal: "Jaggaiahpeta".to_string(),
            district: "NTR".to_string(),
            state: "Andhra Pradesh".to_string(),
            contact_email: "info@ramachandrunipeta.com".to_string(),
        }
    }
}

impl SiteConfig {
    /// Builder method to point the client at another backend.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        let trimmed = url.trim().trim_end_matches('/');
        if !trimmed.is_empty() {
            self.api.base_url = trimmed.to_string();
        }
        self
    }

    /// Apply `VILLAGE_API_URL` from the build and (natively) the runtime environment.
    pub fn with_env_overrides(self) -> Self {
        #[allow(unused_mut)]
        let mut config = match option_env!("VILLAGE_API_URL") {
            Some(url) => self.with_api_url(url),
            None => self,
        };

        #[cfg(not(target_arch = "wasm32"))]
        {
            dotenvy::dotenv().ok();
            if let Ok(url) = std::env::var(API_URL_ENV) {
                config = config.with_api_url(url);
            }
        }

        config.api.base_url = config.api.base_url.trim_end_matches('/').to_string();
        config
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "village.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
