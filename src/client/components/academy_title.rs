use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaGraduationCap;
use dioxus_free_icons::Icon;

use crate::client::router::Route;

#[component]
pub fn AcademyTitleButton() -> Element {
    rsx!(
        Link {
            to: Route::Home {},
            div { class: "flex items-center gap-2",
                span { class: "text-primary",
                    Icon { width: 28, height: 28, icon: FaGraduationCap }
                }
                p { class: "text-xl font-bold", "Makjuz Academy" }
            }
        }
    )
}
