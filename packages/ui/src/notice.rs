//! Auto-dismissing success banner.

use dioxus::prelude::*;

const DISMISS_AFTER_SECS: u64 = 4;

/// Success banner that dismisses itself after a fixed delay.
///
/// The delay task is spawned on the component's own scope, so it is dropped
/// together with the component when the parent unmounts early; the timer
/// never outlives the banner.
#[component]
pub fn Notice(message: String, on_dismiss: EventHandler<()>) -> Element {
    use_effect(move || {
        spawn(async move {
            #[cfg(target_arch = "wasm32")]
            gloo_timers::future::sleep(std::time::Duration::from_secs(DISMISS_AFTER_SECS)).await;
            #[cfg(not(target_arch = "wasm32"))]
            tokio::time::sleep(std::time::Duration::from_secs(DISMISS_AFTER_SECS)).await;

            on_dismiss.call(());
        });
    });

    rsx! {
        div {
            class: "notice notice-success",
            "{message}"
        }
    }
}
