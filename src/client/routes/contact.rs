use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaEnvelope, FaLocationDot, FaPhone};
use dioxus_free_icons::Icon;

use crate::client::components::{Footer, Page};

#[component]
pub fn Contact() -> Element {
    rsx!(
        Title { "Contact | Makjuz Academy" }
        Page {
            section { class: "max-w-6xl mx-auto px-6 py-16",
                div { class: "text-center mb-12",
                    h1 { class: "text-4xl md:text-5xl font-bold text-primary", "Contact Us" }
                    p { class: "mt-3 opacity-70 max-w-2xl mx-auto",
                        "Questions about a course, a cohort, or placements? Reach out and our counsellors will get back within a working day."
                    }
                }

                div { class: "grid grid-cols-1 lg:grid-cols-2 gap-10",
                    div { class: "flex flex-col gap-4",
                        ContactCard {
                            icon: rsx!(Icon { width: 20, height: 20, icon: FaEnvelope }),
                            label: "Email",
                            value: "hello@makjuzacademy.com",
                        }
                        ContactCard {
                            icon: rsx!(Icon { width: 20, height: 20, icon: FaPhone }),
                            label: "Phone",
                            value: "+91 98765 43210",
                        }
                        ContactCard {
                            icon: rsx!(Icon { width: 20, height: 20, icon: FaLocationDot }),
                            label: "Office",
                            value: "4th Floor, Tech Park One, Andheri East, Mumbai",
                        }
                    }

                    div { class: "card bg-base-100 border border-base-300 shadow-md",
                        div { class: "card-body",
                            h2 { class: "card-title", "Send us a message" }
                            input { class: "input input-bordered w-full", placeholder: "Your Name" }
                            input {
                                class: "input input-bordered w-full",
                                r#type: "email",
                                placeholder: "Your Email",
                            }
                            textarea {
                                class: "textarea textarea-bordered w-full h-32",
                                placeholder: "How can we help?",
                            }
                            div { class: "card-actions justify-end",
                                button { class: "btn btn-primary", "Send Message" }
                            }
                        }
                    }
                }
            }
            Footer {}
        }
    )
}

#[component]
fn ContactCard(icon: Element, label: &'static str, value: &'static str) -> Element {
    rsx!(
        div { class: "flex items-center gap-4 p-5 rounded-box bg-base-200",
            div { class: "text-primary", {icon} }
            div {
                p { class: "text-xs uppercase tracking-wider opacity-60", "{label}" }
                p { class: "font-semibold", "{value}" }
            }
        }
    )
}
