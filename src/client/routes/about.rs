use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBullseye, FaGraduationCap, FaUsers};
use dioxus_free_icons::Icon;

use crate::client::components::{Footer, Page};

#[component]
pub fn About() -> Element {
    rsx!(
        Title { "About | Makjuz Academy" }
        Page {
            section { class: "max-w-5xl mx-auto px-6 py-16 text-center",
                h1 { class: "text-4xl md:text-5xl font-bold text-primary mb-6", "About Makjuz Academy" }
                p { class: "text-lg opacity-80 max-w-3xl mx-auto leading-relaxed",
                    "Makjuz Academy is a career platform for IT aspirants. We combine instructor-led courses with internships, final year project mentorship, and a full placement pipeline so that learning and hiring happen in the same place."
                }
                p { class: "text-lg opacity-80 max-w-3xl mx-auto leading-relaxed mt-4",
                    "Our mentors are working engineers. Our curriculum is rewritten every cohort to follow what companies actually interview for."
                }
            }

            section { class: "max-w-5xl mx-auto px-6 pb-16",
                div { class: "stats stats-vertical md:stats-horizontal shadow w-full bg-base-200",
                    div { class: "stat place-items-center",
                        div { class: "stat-value text-primary", "50K+" }
                        div { class: "stat-desc", "Students trained" }
                    }
                    div { class: "stat place-items-center",
                        div { class: "stat-value text-primary", "1,200+" }
                        div { class: "stat-desc", "Placement offers" }
                    }
                    div { class: "stat place-items-center",
                        div { class: "stat-value text-primary", "120+" }
                        div { class: "stat-desc", "Hiring partners" }
                    }
                }
            }

            section { class: "max-w-5xl mx-auto px-6 pb-20",
                div { class: "grid grid-cols-1 md:grid-cols-3 gap-8",
                    ValueCard {
                        icon: rsx!(Icon { width: 28, height: 28, icon: FaGraduationCap }),
                        title: "Learn by Building",
                        blurb: "Every course ships with projects reviewed by mentors, not auto-graders.",
                    }
                    ValueCard {
                        icon: rsx!(Icon { width: 28, height: 28, icon: FaUsers }),
                        title: "Community First",
                        blurb: "Study groups, peer mock interviews, and alumni referrals built into every batch.",
                    }
                    ValueCard {
                        icon: rsx!(Icon { width: 28, height: 28, icon: FaBullseye }),
                        title: "Outcome Driven",
                        blurb: "We measure ourselves on offers signed, not certificates issued.",
                    }
                }
            }
            Footer {}
        }
    )
}

#[component]
fn ValueCard(icon: Element, title: &'static str, blurb: &'static str) -> Element {
    rsx!(
        div { class: "card bg-base-100 border border-base-300 shadow-md",
            div { class: "card-body items-center text-center",
                div { class: "text-primary mb-2", {icon} }
                h3 { class: "card-title text-lg", "{title}" }
                p { class: "text-sm opacity-70", "{blurb}" }
            }
        }
    )
}
