//! Blocking browser dialogs and deferred UI callbacks.
//!
//! Server rendering never reaches these (they are only called from event
//! handlers), but the non-browser path still answers "no" so destructive
//! actions stay opt-in, and deferred callbacks are simply dropped.

use std::time::Duration;

/// Ask the user to confirm `message`. `false` when no window is available.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}

/// Run `f` once after `delay` in the browser. Off-browser nothing is
/// scheduled.
pub fn after(delay: Duration, f: impl FnOnce() + 'static) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(delay).await;
        f();
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (delay, f);
    }
}
