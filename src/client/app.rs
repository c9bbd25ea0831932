use dioxus::document::Stylesheet;
use dioxus::prelude::*;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::api::auth::me;
use crate::client::router::Route;
#[cfg(feature = "web")]
use crate::client::store::theme;
use crate::client::store::theme::ThemeState;
use crate::client::store::user::UserState;
#[cfg(feature = "web")]
use crate::client::util::browser;

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

/// Application root. Provides the session and theme stores, rehydrates both
/// once on startup, and mounts the router.
#[component]
pub fn App() -> Element {
    let user_store = use_store(UserState::default);
    let theme_store = use_store(ThemeState::default);
    use_context_provider(move || user_store);
    use_context_provider(move || theme_store);

    #[cfg(feature = "web")]
    let _session = use_resource(move || async move {
        let mut store = user_store;
        match me().await {
            Ok(user) => store.write().establish(user),
            Err(err) => {
                tracing::debug!("No active session: {err}");
                store.write().end();
            }
        }
    });

    #[cfg(feature = "web")]
    let _theme = use_resource(move || async move {
        let mut store = theme_store;
        if let Some(saved) = browser::local_storage_get(theme::STORAGE_KEY).await {
            store.write().dark = saved == "dark";
        }
    });

    let theme_name = theme_store.read().name();

    rsx!(
        Stylesheet { href: TAILWIND_CSS }
        div { "data-theme": "{theme_name}", class: "min-h-screen bg-base-100",
            Router::<Route> {}
        }
    )
}
