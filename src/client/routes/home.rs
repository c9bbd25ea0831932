use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaBriefcase, FaBullseye, FaChartLine, FaFileLines, FaGraduationCap, FaLightbulb, FaUsers,
};
use dioxus_free_icons::Icon;

#[cfg(feature = "web")]
use crate::client::api::courses::get_courses;
use crate::client::components::navbar::avatar_url;
use crate::client::components::{ErrorAlert, Footer, Page, Spinner};
#[cfg(feature = "web")]
use crate::client::loader::load_into;
use crate::client::loader::LoadState;
use crate::client::router::Route;
use crate::model::course::CourseDto;

#[component]
pub fn Home() -> Element {
    rsx!(
        Title { "Makjuz Academy" }
        Meta {
            name: "description",
            content: "Courses, internships, project mentorship, and placement preparation for IT careers."
        }
        Page {
            Hero {}
            WhyChooseUs {}
            TrendingCourses {}
            FeaturesSection {}
            Testimonials {}
            Footer {}
        }
    )
}

#[component]
fn Hero() -> Element {
    rsx!(
        section { class: "min-h-[80vh] grid grid-cols-1 md:grid-cols-2 gap-8 items-center px-6 lg:px-20 py-20",
            div { class: "space-y-6 text-center md:text-left",
                h1 { class: "text-4xl md:text-6xl font-bold text-primary",
                    "Kickstart Your Career with Makjuz Academy"
                }
                p { class: "text-lg md:text-xl max-w-xl mx-auto md:mx-0 opacity-80",
                    "Your all-in-one platform for "
                    span { class: "font-bold text-info", "Premium Internships" }
                    ", "
                    span { class: "font-bold text-secondary", "Project Mentorship" }
                    ", "
                    span { class: "font-bold text-success", "Placement Success" }
                    ", and "
                    span { class: "font-bold text-warning", "Soft Skills Mastery" }
                    "."
                }
                div { class: "flex flex-col sm:flex-row gap-4 justify-center md:justify-start",
                    Link { to: Route::Internships {}, class: "btn btn-primary", "Get Hired" }
                    Link { to: Route::Projects {}, class: "btn btn-secondary", "Start Project" }
                    Link { to: Route::Placement {}, class: "btn btn-accent", "Placement Prep" }
                }
            }
            div { class: "w-full flex justify-center md:justify-end",
                img {
                    class: "max-w-md md:max-w-lg rounded-2xl shadow-2xl",
                    src: "https://placehold.co/800x600/8A2BE2/ffffff?text=Learn+Build+Get+Hired",
                    alt: "Learning illustration",
                }
            }
        }
    )
}

#[component]
fn WhyChooseUs() -> Element {
    rsx!(
        section { class: "px-6 lg:px-20 py-16",
            div { class: "max-w-7xl mx-auto text-center",
                h2 { class: "text-3xl sm:text-4xl font-extrabold", "Why Choose Us" }
                p { class: "mt-3 max-w-2xl mx-auto opacity-70",
                    "Everything between your first lesson and your first offer letter, under one roof."
                }
                div { class: "mt-12 grid grid-cols-1 md:grid-cols-3 gap-8",
                    ReasonCard {
                        icon: rsx!(Icon { width: 32, height: 32, icon: FaUsers }),
                        title: "Industry Mentors",
                        blurb: "Learn directly from engineers who interview and hire at product companies.",
                    }
                    ReasonCard {
                        icon: rsx!(Icon { width: 32, height: 32, icon: FaGraduationCap }),
                        title: "Hands-on Curriculum",
                        blurb: "Every course ends in a portfolio project, not just a completion badge.",
                    }
                    ReasonCard {
                        icon: rsx!(Icon { width: 32, height: 32, icon: FaChartLine }),
                        title: "Placement Support",
                        blurb: "Job board, mock interviews, and application tracking built into the platform.",
                    }
                }
            }
        }
    )
}

#[component]
fn ReasonCard(icon: Element, title: &'static str, blurb: &'static str) -> Element {
    rsx!(
        div { class: "card bg-base-100 border border-base-300 shadow-md",
            div { class: "card-body items-center text-center",
                div { class: "text-primary mb-2", {icon} }
                h3 { class: "card-title", "{title}" }
                p { class: "text-sm opacity-70", "{blurb}" }
            }
        }
    )
}

/// First six catalog entries, fetched on mount.
#[component]
fn TrendingCourses() -> Element {
    let courses = use_signal(LoadState::<Vec<CourseDto>>::default);

    #[cfg(feature = "web")]
    let _fetch = use_resource(move || load_into(courses, get_courses()));

    let state = courses.read();
    let trending: Vec<CourseDto> = state
        .data()
        .map(|list| list.iter().take(6).cloned().collect())
        .unwrap_or_default();
    let load_error = state
        .error()
        .map(|error| rsx!(ErrorAlert { message: error.message() }));

    rsx!(
        section { class: "px-6 lg:px-20 py-16 bg-base-200 rounded-box",
            div { class: "max-w-7xl mx-auto",
                div { class: "text-center mb-12",
                    h2 { class: "text-3xl sm:text-4xl font-extrabold", "Trending Courses" }
                    p { class: "mt-3 max-w-2xl mx-auto opacity-70",
                        "Upskill with industry-relevant programs curated to accelerate your career."
                    }
                }

                if state.is_loading() {
                    div { class: "flex justify-center py-10", Spinner {} }
                }
                {load_error}

                div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8",
                    {trending.iter().map(|course| {
                        let course_id = course.id.clone();

                        rsx!(
                            div {
                                key: "{course.id}",
                                class: "card bg-base-100 shadow-md hover:shadow-xl transition-shadow",
                                div { class: "card-body justify-between",
                                    div {
                                        h3 { class: "card-title", "{course.title}" }
                                        p { class: "text-sm leading-relaxed line-clamp-3 opacity-80",
                                            "{course.description}"
                                        }
                                    }
                                    div { class: "card-actions justify-end mt-4",
                                        Link {
                                            to: Route::CourseDetail { course_id },
                                            class: "btn btn-primary btn-sm rounded-full",
                                            "Details"
                                        }
                                    }
                                }
                            }
                        )
                    })}
                }
            }
        }
    )
}

#[component]
fn FeaturesSection() -> Element {
    rsx!(
        section { class: "px-6 lg:px-20 py-16",
            div { class: "max-w-7xl mx-auto text-center",
                h3 { class: "text-sm uppercase tracking-wider font-semibold opacity-60",
                    "Join us to elevate"
                }
                h2 { class: "text-3xl sm:text-4xl font-extrabold mt-2 leading-snug",
                    "Your "
                    span { class: "text-primary", "IT career" }
                    " with unparalleled Training and Support!"
                }
                div { class: "mt-12 grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8",
                    FeatureCard {
                        icon: rsx!(Icon { width: 32, height: 32, icon: FaBriefcase }),
                        title: "Premium Internships",
                        blurb: "Access exclusive internship opportunities with top tech companies. Gain real-world experience and get hired faster.",
                    }
                    FeatureCard {
                        icon: rsx!(Icon { width: 32, height: 32, icon: FaFileLines }),
                        title: "Project Mentorship",
                        blurb: "Struggling with your final year project? Get access to premium templates, documentation, and 1-on-1 expert guidance.",
                    }
                    FeatureCard {
                        icon: rsx!(Icon { width: 32, height: 32, icon: FaBullseye }),
                        title: "Placement Success",
                        blurb: "From AI-powered resume building to mock interviews with industry veterans, we prepare you to crack any interview.",
                    }
                    FeatureCard {
                        icon: rsx!(Icon { width: 32, height: 32, icon: FaLightbulb }),
                        title: "Soft Skills Training",
                        blurb: "Master workplace communication, leadership, and emotional intelligence. Stand out in any interview.",
                    }
                }
            }
        }
    )
}

#[component]
fn FeatureCard(icon: Element, title: &'static str, blurb: &'static str) -> Element {
    rsx!(
        div { class: "p-8 rounded-2xl shadow-lg bg-base-100 border border-base-300",
            div { class: "flex justify-center mb-4 text-primary", {icon} }
            h3 { class: "text-xl font-semibold mb-2", "{title}" }
            p { class: "text-sm leading-relaxed opacity-70", "{blurb}" }
        }
    )
}

const TESTIMONIALS: [(&str, &str, &str); 3] = [
    (
        "Ananya Sharma",
        "Data Analyst at Flipkart",
        "The placement portal did the heavy lifting. I tracked every application in one place and walked into interviews knowing exactly what to brush up.",
    ),
    (
        "Rohit Verma",
        "Backend Developer at Zoho",
        "The final year project templates saved my semester. My mentor reviewed my code every week until the submission.",
    ),
    (
        "Priya Nair",
        "Cloud Engineer at TCS",
        "Mock interviews felt uncomfortably real, which is exactly why the actual one felt easy.",
    ),
];

#[component]
fn Testimonials() -> Element {
    rsx!(
        section { class: "px-6 lg:px-20 py-16 bg-base-200 rounded-box",
            div { class: "max-w-7xl mx-auto",
                h2 { class: "text-3xl sm:text-4xl font-extrabold text-center",
                    "What Our Students Say"
                }
                div { class: "mt-12 grid grid-cols-1 md:grid-cols-3 gap-8",
                    {TESTIMONIALS.iter().map(|(name, role, quote)| {
                        let photo = avatar_url(name);

                        rsx!(
                            div { key: "{name}", class: "card bg-base-100 shadow-md",
                                div { class: "card-body",
                                    p { class: "text-sm leading-relaxed italic", "\"{quote}\"" }
                                    div { class: "flex items-center gap-3 mt-4",
                                        div { class: "avatar",
                                            div { class: "w-10 rounded-full",
                                                img { src: "{photo}", alt: "{name}" }
                                            }
                                        }
                                        div {
                                            p { class: "font-semibold text-sm", "{name}" }
                                            p { class: "text-xs opacity-60", "{role}" }
                                        }
                                    }
                                }
                            }
                        )
                    })}
                }
            }
        }
    )
}
