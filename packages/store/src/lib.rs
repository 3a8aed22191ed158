pub mod config;
pub mod filter;
pub mod models;
pub mod session;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorage;

pub use config::SiteConfig;
pub use filter::{Classified, Filter, Identified};
pub use models::{
    Category, ContentItem, ContentType, CountRow, DashboardStats, Image, Role, User, VillageInfo,
};
pub use session::{KeyValueStore, Session, SessionVault};
