use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_brands_icons::{FaInstagram, FaLinkedin, FaYoutube};
use dioxus_free_icons::icons::fa_solid_icons::{FaEnvelope, FaGraduationCap, FaPhone};
use dioxus_free_icons::Icon;

use crate::client::router::Route;

#[component]
pub fn Footer() -> Element {
    rsx!(
        footer { class: "footer md:footer-horizontal bg-base-200 text-base-content p-10",
            aside { class: "max-w-xs",
                div { class: "flex items-center gap-2",
                    span { class: "text-primary",
                        Icon { width: 28, height: 28, icon: FaGraduationCap }
                    }
                    p { class: "text-xl font-bold", "Makjuz Academy" }
                }
                p { class: "text-sm opacity-70",
                    "Industry-relevant training in data, cloud, and AI with placement support from enrollment to offer letter."
                }
                div { class: "flex gap-4 mt-2",
                    a { href: "https://www.linkedin.com/company/makjuz-academy", target: "_blank",
                        Icon { width: 20, height: 20, icon: FaLinkedin }
                    }
                    a { href: "https://www.instagram.com/makjuzacademy", target: "_blank",
                        Icon { width: 20, height: 20, icon: FaInstagram }
                    }
                    a { href: "https://www.youtube.com/@makjuzacademy", target: "_blank",
                        Icon { width: 20, height: 20, icon: FaYoutube }
                    }
                }
            }
            nav {
                h6 { class: "footer-title", "Explore" }
                Link { class: "link link-hover", to: Route::Courses {}, "Courses" }
                Link { class: "link link-hover", to: Route::Internships {}, "Internships" }
                Link { class: "link link-hover", to: Route::Projects {}, "Project Hub" }
                Link { class: "link link-hover", to: Route::Placement {}, "Placement" }
            }
            nav {
                h6 { class: "footer-title", "Company" }
                Link { class: "link link-hover", to: Route::About {}, "About" }
                Link { class: "link link-hover", to: Route::Contact {}, "Contact" }
                Link { class: "link link-hover", to: Route::Mock {}, "Interview Prep" }
            }
            nav {
                h6 { class: "footer-title", "Reach Us" }
                span { class: "flex items-center gap-2",
                    Icon { width: 14, height: 14, icon: FaEnvelope }
                    "hello@makjuzacademy.com"
                }
                span { class: "flex items-center gap-2",
                    Icon { width: 14, height: 14, icon: FaPhone }
                    "+91 98765 43210"
                }
            }
        }
        div { class: "bg-base-300 text-center text-sm py-3",
            "© 2025 Makjuz Academy. All rights reserved."
        }
    )
}
