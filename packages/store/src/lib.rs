pub mod session;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod browser;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use browser::BrowserStore;

pub use session::{AdminSession, LoginError, SessionStatus, SESSION_KEY};

/// A synchronous string key-value store.
///
/// The browser's `localStorage` is the real backing on the web platform;
/// [`MemoryStore`] stands in everywhere else. Implementations never surface
/// errors: reads degrade to `None` and writes become no-ops when the backing
/// store is unavailable.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}
