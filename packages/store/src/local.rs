//! # `localStorage` key/value store: browser-side persistence
//!
//! [`LocalStorage`] is the [`KeyValueStore`] used on the **web platform**. It
//! is a zero-size handle that looks up `window.localStorage` on every call,
//! so it is `Clone` and `'static` and can live inside the API client.
//!
//! ## Error handling
//!
//! All methods swallow errors (storage disabled, quota exceeded, private
//! browsing). Reads return `None` and writes are dropped; the visitor then
//! behaves as anonymous instead of the page failing.

use crate::session::KeyValueStore;

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
