use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::components::Page;
use crate::client::router::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        Title { "Page Not Found | Makjuz Academy" }
        Page {
            div { class: "flex flex-col items-center justify-center text-center py-24 gap-4",
                h1 { class: "text-7xl font-bold text-primary", "404" }
                p { class: "text-xl font-semibold", "Page not found" }
                p { class: "text-sm opacity-60", "Nothing lives at /{path}" }
                Link { class: "btn btn-primary mt-4", to: Route::Home {}, "Back to Home" }
            }
        }
    )
}
