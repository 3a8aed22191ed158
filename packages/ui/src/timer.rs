use std::time::Duration;

use dioxus::prelude::*;
use dioxus::router::Navigator;

/// Delay before a form page moves on after a successful save.
pub const REDIRECT_DELAY: Duration = Duration::from_secs(2);

/// How long a profile success message stays visible.
pub const MESSAGE_TTL: Duration = Duration::from_secs(3);

pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Wait `delay`, then navigate to `to`.
pub fn redirect_after(nav: Navigator, to: &'static str, delay: Duration) {
    spawn(async move {
        sleep(delay).await;
        nav.push(to);
    });
}
