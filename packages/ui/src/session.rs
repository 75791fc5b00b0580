//! Admin session context and hooks for the UI.
//!
//! The stored flag is the source of truth; the context signal mirrors it so
//! views re-render on login and logout. Platform selection follows the same
//! shape as the rest of the workspace: `localStorage` on the web build, an
//! in-memory store elsewhere.

use dioxus::prelude::*;
use store::{AdminSession, LoginError, SessionStatus, SessionStore};

fn make_session() -> AdminSession<impl SessionStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        AdminSession::new(store::BrowserStore::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        AdminSession::new(store::MemoryStore::new())
    }
}

/// Current admin session status. Updates when the admin logs in or out.
pub fn use_admin_session() -> Signal<SessionStatus> {
    use_context::<Signal<SessionStatus>>()
}

/// Provider component that seeds the session signal from the platform store.
/// Wrap the app with this component to enable the admin gate.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let status = use_signal(|| make_session().status());
    use_context_provider(|| status);

    rsx! {
        {children}
    }
}

/// Run the credential check; on success persist the flag and flip the
/// signal. The mismatch error carries the user-visible message.
pub fn submit_admin_login(
    mut status: Signal<SessionStatus>,
    email: &str,
    password: &str,
) -> Result<(), LoginError> {
    make_session().login(email, password)?;
    status.set(SessionStatus::Authenticated);
    tracing::info!("admin session opened");
    Ok(())
}

/// Clear the flag and flip the signal back to unauthenticated.
pub fn submit_admin_logout(mut status: Signal<SessionStatus>) {
    make_session().logout();
    status.set(SessionStatus::Unauthenticated);
    tracing::info!("admin session closed");
}
