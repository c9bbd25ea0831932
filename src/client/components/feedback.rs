//! Loading, error, and empty state fragments shared across screens.

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCircleCheck, FaXmark};
use dioxus_free_icons::Icon;

#[component]
pub fn Spinner() -> Element {
    rsx!(
        div { class: "w-full flex justify-center py-16",
            span { class: "loading loading-spinner loading-lg text-primary" }
        }
    )
}

#[component]
pub fn ErrorAlert(message: String) -> Element {
    rsx!(
        div { role: "alert", class: "alert alert-error",
            Icon { width: 20, height: 20, icon: FaXmark }
            span { "{message}" }
        }
    )
}

#[component]
pub fn SuccessAlert(message: String) -> Element {
    rsx!(
        div { role: "alert", class: "alert alert-success",
            Icon { width: 20, height: 20, icon: FaCircleCheck }
            span { "{message}" }
        }
    )
}

#[component]
pub fn EmptyNotice(title: String, hint: String) -> Element {
    rsx!(
        div { class: "w-full flex flex-col items-center gap-2 py-16 text-center",
            h3 { class: "text-lg font-semibold", "{title}" }
            p { class: "text-sm opacity-70", "{hint}" }
        }
    )
}
