use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaArrowRight, FaAward, FaBookOpen, FaBriefcase, FaChartLine, FaClock, FaFileLines,
    FaLightbulb, FaMicrophone, FaRobot, FaShieldHalved, FaStar, FaUser, FaUsers,
};
use dioxus_free_icons::Icon;

use crate::client::components::{Footer, Page};
use crate::client::router::Route;

/// Marketing page for the interview tool suite. Everything here is static
/// copy; the working tools live in the placement hub.
#[component]
pub fn Mock() -> Element {
    rsx!(
        Title { "Interview Tools | Makjuz Academy" }
        Page {
            section { class: "max-w-6xl mx-auto px-4 py-12 flex flex-col items-center text-center gap-8",
                div { class: "inline-flex items-center gap-2 rounded-full border border-primary px-5 py-2 text-primary text-sm font-medium",
                    Icon { width: 14, height: 14, icon: FaShieldHalved }
                    "Trusted by 50,000+ Job Seekers"
                }

                h1 { class: "text-4xl md:text-6xl font-bold leading-tight",
                    "Land Your Next Job in "
                    span { class: "text-primary", "30 Days*" }
                    br {}
                    "or Less with Makjuz AI"
                }
                p { class: "text-lg opacity-70 max-w-2xl",
                    "AI-powered tools to help you ace interviews, apply faster, and land offers with confidence. Join thousands who've transformed their careers."
                }

                div { class: "grid grid-cols-2 md:grid-cols-4 gap-4 w-full",
                    StatCard {
                        icon: rsx!(Icon { width: 24, height: 24, icon: FaAward }),
                        value: "98%",
                        label: "Success Rate",
                    }
                    StatCard {
                        icon: rsx!(Icon { width: 24, height: 24, icon: FaClock }),
                        value: "30",
                        label: "Days Average",
                    }
                    StatCard {
                        icon: rsx!(Icon { width: 24, height: 24, icon: FaUsers }),
                        value: "50K+",
                        label: "Users Hired",
                    }
                    StatCard {
                        icon: rsx!(Icon { width: 24, height: 24, icon: FaStar }),
                        value: "4.9",
                        label: "User Rating",
                    }
                }

                h2 { class: "text-2xl md:text-3xl font-bold mt-4", "Everything You Need to Get Hired" }

                div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4 w-full text-left",
                    ToolCard {
                        icon: rsx!(Icon { width: 18, height: 18, icon: FaUser }),
                        label: "Interview Copilot",
                        description: "AI-powered interview assistance",
                    }
                    ToolCard {
                        icon: rsx!(Icon { width: 18, height: 18, icon: FaMicrophone }),
                        label: "Mock Interview",
                        description: "Practice with AI interviewer",
                    }
                    ToolCard {
                        icon: rsx!(Icon { width: 18, height: 18, icon: FaBookOpen }),
                        label: "Preparation Hub",
                        description: "Study materials & resources",
                    }
                    ToolCard {
                        icon: rsx!(Icon { width: 18, height: 18, icon: FaFileLines }),
                        label: "AI Resume Builder",
                        description: "Create ATS-optimized resumes",
                    }
                    ToolCard {
                        icon: rsx!(Icon { width: 18, height: 18, icon: FaShieldHalved }),
                        label: "Stealth Mode",
                        description: "Private job search mode",
                        tag: rsx!(span { class: "badge badge-secondary badge-sm", "NEW" }),
                    }
                    ToolCard {
                        icon: rsx!(Icon { width: 18, height: 18, icon: FaRobot }),
                        label: "AI Material Generator",
                        description: "Generate interview content",
                    }
                    ToolCard {
                        icon: rsx!(Icon { width: 18, height: 18, icon: FaBriefcase }),
                        label: "AI Career Coach",
                        description: "Personalized career guidance",
                    }
                    ToolCard {
                        icon: rsx!(Icon { width: 18, height: 18, icon: FaUsers }),
                        label: "Speak with Recruiters",
                        description: "Connect with hiring managers",
                    }
                    ToolCard {
                        icon: rsx!(Icon { width: 18, height: 18, icon: FaChartLine }),
                        label: "AI Salary Calculator",
                        description: "Know your market value",
                    }
                    ToolCard {
                        icon: rsx!(Icon { width: 18, height: 18, icon: FaLightbulb }),
                        label: "Interview Question Bank",
                        description: "Thousands of practice questions",
                    }
                }

                Link {
                    class: "btn btn-primary btn-lg gap-2 mt-4",
                    to: Route::Placement {},
                    "Get Started for Free"
                    Icon { width: 18, height: 18, icon: FaArrowRight }
                }
                p { class: "text-sm opacity-60",
                    "4.9/5 rating • GDPR Compliant • No credit card required"
                }
            }
            Footer {}
        }
    )
}

#[component]
fn StatCard(icon: Element, value: &'static str, label: &'static str) -> Element {
    rsx!(
        div { class: "card bg-base-200 shadow-sm",
            div { class: "card-body items-center p-5",
                div { class: "text-primary", {icon} }
                p { class: "text-2xl font-bold", "{value}" }
                p { class: "text-sm opacity-60", "{label}" }
            }
        }
    )
}

#[component]
fn ToolCard(
    icon: Element,
    label: &'static str,
    description: &'static str,
    tag: Option<Element>,
) -> Element {
    rsx!(
        div { class: "flex items-start gap-3 p-4 rounded-box bg-base-200 hover:bg-base-300 transition-colors",
            div { class: "text-primary mt-1", {icon} }
            div { class: "flex-1",
                div { class: "flex items-center gap-2",
                    p { class: "font-semibold", "{label}" }
                    {tag}
                }
                p { class: "text-sm opacity-60", "{description}" }
            }
        }
    )
}
