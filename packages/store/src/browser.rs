//! # localStorage-backed session store — browser-side persistence
//!
//! [`BrowserStore`] is the [`SessionStore`] implementation used on the **web
//! platform**. It persists entries into the browser's `localStorage` via
//! `web-sys`, so the admin session flag survives reloads and new tabs.
//!
//! All methods silently swallow errors (returning `None` for reads, doing
//! nothing for writes). A browser with storage disabled degrades to "no
//! session" rather than crashing, which simply sends the admin back to the
//! login form.
//!
//! There is no locking: concurrent tabs race on the same keys with
//! last-write-wins semantics.

use crate::SessionStore;

/// localStorage-backed SessionStore for the web platform.
///
/// Zero-size and `Clone`-friendly; the `Storage` handle is re-acquired from
/// the window on every operation.
#[derive(Clone, Debug, Default)]
pub struct BrowserStore;

impl BrowserStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(key);
        }
    }
}
