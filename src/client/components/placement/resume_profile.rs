use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_brands_icons::{FaGithub, FaLinkedin};
use dioxus_free_icons::icons::fa_solid_icons::{FaDownload, FaEnvelope, FaLocationDot};
use dioxus_free_icons::Icon;

use crate::client::components::navbar::avatar_url;
use crate::client::store::user::UserState;

const DEFAULT_SKILLS: [&str; 4] = ["React", "Node.js", "MongoDB", "TypeScript"];

/// Resume builder seeded with a sample profile. Name, email and photo come
/// from the session when somebody is signed in.
#[component]
pub fn ResumeProfile() -> Element {
    let user_store = use_context::<Store<UserState>>();
    let store = user_store.read();

    let (name, email, avatar) = match store.user.as_ref() {
        Some(user) => (
            user.name.clone(),
            user.email.clone(),
            user.image.clone().unwrap_or_else(|| avatar_url(&user.name)),
        ),
        None => (
            "Student Name".to_string(),
            "student@example.com".to_string(),
            avatar_url("Student Name"),
        ),
    };

    rsx!(
        div { class: "flex flex-col gap-6",
            div { class: "flex justify-end",
                button { class: "btn btn-primary btn-sm",
                    Icon { width: 14, height: 14, icon: FaDownload }
                    "Download Resume"
                }
            }

            div { class: "grid lg:grid-cols-3 gap-6",
                div { class: "flex flex-col gap-6",
                    div { class: "card bg-base-100 border border-base-300",
                        div { class: "card-body items-center text-center",
                            div { class: "avatar",
                                div { class: "w-24 rounded-full",
                                    img { src: "{avatar}", alt: "{name}" }
                                }
                            }
                            h2 { class: "text-xl font-bold mt-2", "{name}" }
                            p { class: "text-primary font-semibold text-sm", "Full Stack Developer" }
                            p { class: "text-sm opacity-70",
                                "Passionate developer with experience in MERN stack."
                            }
                            div { class: "divider my-2" }
                            div { class: "w-full flex flex-col gap-2 text-sm text-left",
                                ContactRow {
                                    icon: rsx!(Icon { width: 14, height: 14, icon: FaLocationDot }),
                                    text: "Mumbai, India".to_string(),
                                }
                                ContactRow {
                                    icon: rsx!(Icon { width: 14, height: 14, icon: FaEnvelope }),
                                    text: email,
                                }
                                a {
                                    class: "flex items-center gap-2 hover:text-primary",
                                    href: "https://linkedin.com/in/student",
                                    target: "_blank",
                                    Icon { width: 14, height: 14, icon: FaLinkedin }
                                    "linkedin.com/in/student"
                                }
                                a {
                                    class: "flex items-center gap-2 hover:text-primary",
                                    href: "https://github.com/student",
                                    target: "_blank",
                                    Icon { width: 14, height: 14, icon: FaGithub }
                                    "github.com/student"
                                }
                            }
                        }
                    }

                    div { class: "card bg-base-100 border border-base-300",
                        div { class: "card-body",
                            h3 { class: "card-title text-base", "Skills" }
                            div { class: "flex flex-wrap gap-2",
                                {DEFAULT_SKILLS.iter().map(|skill| rsx!(
                                    span { class: "badge badge-primary badge-outline", "{skill}" }
                                ))}
                            }
                        }
                    }
                }

                div { class: "lg:col-span-2 flex flex-col gap-6",
                    div { class: "card bg-base-100 border border-base-300",
                        div { class: "card-body",
                            SectionHeader { title: "Education", action: "+ Add" }
                            div { class: "border-l-2 border-primary pl-4",
                                h4 { class: "font-bold", "B.Tech Computer Science" }
                                p { class: "text-sm opacity-60", "XYZ University" }
                                div { class: "flex gap-2 mt-1",
                                    span { class: "badge badge-ghost badge-sm", "2024" }
                                    span { class: "badge badge-ghost badge-sm", "8.5 CGPA" }
                                }
                            }
                        }
                    }

                    div { class: "card bg-base-100 border border-base-300",
                        div { class: "card-body",
                            SectionHeader { title: "Experience", action: "+ Add" }
                            div { class: "border-l-2 border-secondary pl-4",
                                h4 { class: "font-bold", "Frontend Intern" }
                                p { class: "text-sm text-primary", "TechCorp" }
                                p { class: "text-xs opacity-60", "Jun 2023 - Aug 2023" }
                                p { class: "text-sm mt-1", "Worked on React components." }
                            }
                        }
                    }

                    div { class: "card bg-base-100 border border-base-300",
                        div { class: "card-body",
                            SectionHeader { title: "Projects", action: "Add Project" }
                            div { class: "p-4 rounded-box border border-base-300",
                                h4 { class: "font-bold", "E-commerce App" }
                                p { class: "text-xs font-mono opacity-60", "React, Node, Mongo" }
                                p { class: "text-sm mt-1", "Full stack shopping platform." }
                            }
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn ContactRow(icon: Element, text: String) -> Element {
    rsx!(
        div { class: "flex items-center gap-2",
            {icon}
            span { class: "truncate", "{text}" }
        }
    )
}

#[component]
fn SectionHeader(title: &'static str, action: &'static str) -> Element {
    rsx!(
        div { class: "flex justify-between items-center mb-3",
            h3 { class: "card-title text-base", "{title}" }
            button { class: "btn btn-ghost btn-xs text-primary", "{action}" }
        }
    )
}
