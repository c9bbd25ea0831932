use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaAward, FaCircleCheck, FaClock, FaStar, FaUsers, FaXmark,
};
use dioxus_free_icons::Icon;
use rand::Rng;

#[cfg(feature = "web")]
use crate::client::api::courses::get_course;
use crate::client::api::ApiError;
use crate::client::components::course_card::FALLBACK_COURSE_IMAGE;
use crate::client::components::{ErrorAlert, Page, Spinner};
#[cfg(feature = "web")]
use crate::client::loader::load_into;
use crate::client::loader::LoadState;
use crate::model::course::CourseDto;

#[component]
pub fn CourseDetail(course_id: ReadOnlySignal<String>) -> Element {
    let course = use_signal(LoadState::<CourseDto>::default);

    // Reading the id inside the closure re-runs the fetch when the route
    // param changes.
    #[cfg(feature = "web")]
    let _fetch = use_resource(move || load_into(course, get_course(course_id())));

    let state = course.read();
    let body = match &*state {
        LoadState::Idle | LoadState::Loading => rsx!(
            div { class: "min-h-[60vh] flex items-center justify-center", Spinner {} }
        ),
        LoadState::Error(ApiError::NotFound) => rsx!(
            div { class: "min-h-[60vh] flex items-center justify-center text-center font-bold text-xl text-error",
                "Course not found. Please check the URL or return to the courses page."
            }
        ),
        LoadState::Error(error) => rsx!(
            div { class: "max-w-3xl mx-auto py-20",
                ErrorAlert { message: error.message() }
            }
        ),
        LoadState::Loaded(course) => rsx!(CourseView { course: course.clone() }),
    };

    rsx!(
        Title { "Course Details | Makjuz Academy" }
        Page {
            {body}
        }
    )
}

#[component]
fn CourseView(course: CourseDto) -> Element {
    let mut show_contact = use_signal(|| false);

    let image = course
        .image
        .clone()
        .unwrap_or_else(|| FALLBACK_COURSE_IMAGE.to_string());
    let contact_modal = show_contact().then(|| {
        rsx!(ContactModal { on_close: move |_| show_contact.set(false) })
    });

    rsx!(
        section { class: "py-12 px-4 sm:px-6 lg:px-8 max-w-7xl mx-auto",
            div { class: "grid grid-cols-1 md:grid-cols-2 gap-10 items-center",
                div {
                    h1 { class: "text-4xl md:text-5xl font-bold mb-4 leading-snug",
                        "Become a "
                        span { class: "text-primary", "Job-Ready {course.title} Expert" }
                    }
                    p { class: "text-lg mb-6 opacity-80",
                        "Learn from the best mentors, build real-world projects, and get placement-ready with our comprehensive {course.title} program."
                    }
                    div { class: "flex flex-wrap gap-3 mb-6",
                        span { class: "badge badge-lg badge-outline gap-1",
                            span { class: "text-warning",
                                Icon { width: 14, height: 14, icon: FaStar }
                            }
                            "{course.rating} Rating"
                        }
                        span { class: "badge badge-lg badge-outline gap-1",
                            Icon { width: 14, height: 14, icon: FaUsers }
                            "{course.students}+ Students"
                        }
                        span { class: "badge badge-lg badge-outline gap-1",
                            Icon { width: 14, height: 14, icon: FaClock }
                            "{course.duration}"
                        }
                    }
                    div { class: "grid grid-cols-2 sm:grid-cols-3 gap-3",
                        div { class: "rounded-lg p-3 text-center font-medium bg-base-200", "Live Classes" }
                        div { class: "rounded-lg p-3 text-center font-medium bg-base-200", "Expert Mentors" }
                        div { class: "rounded-lg p-3 text-center font-medium bg-base-200", "1:1 Doubt Support" }
                    }
                }
                div { class: "flex justify-center items-center",
                    img {
                        class: "w-full h-auto max-h-[400px] object-cover rounded-2xl shadow-2xl",
                        src: "{image}",
                        alt: "{course.title}",
                    }
                }
            }
        }

        section { class: "py-16 px-4 sm:px-6 lg:px-8 max-w-7xl mx-auto text-center",
            h2 { class: "text-3xl md:text-4xl font-bold mb-4",
                "{course.title}: Why is it Booming?"
            }
            p { class: "max-w-3xl mx-auto mb-12 opacity-70",
                "{course.title} is revolutionizing industries worldwide, driving innovation, automation, and high-paying career opportunities. Now is the perfect time to start."
            }
            div { class: "grid grid-cols-1 md:grid-cols-3 gap-8",
                BoomingStat {
                    title: "Average Annual Salary",
                    value: "₹12.5 LPA".to_string(),
                    caption: "Source: Glassdoor".to_string(),
                }
                BoomingStat {
                    title: "Explosive Growth in India",
                    value: "300%".to_string(),
                    caption: "Surge in demand from 2022 to 2030 driven by AI adoption (Source: NASSCOM)".to_string(),
                }
                BoomingStat {
                    title: "Diverse Opportunities",
                    value: "90%".to_string(),
                    caption: format!("{} roles available across healthcare, finance, and tech.", course.title),
                }
            }
        }

        SyllabusViewer {
            course: course.clone(),
            on_enroll: move |_| show_contact.set(true),
        }

        {contact_modal}
    )
}

#[component]
fn BoomingStat(title: &'static str, value: String, caption: String) -> Element {
    rsx!(
        div { class: "card bg-base-100 border border-base-300 shadow-lg",
            div { class: "card-body",
                h3 { class: "text-lg font-semibold", "{title}" }
                p { class: "text-3xl font-bold text-primary", "{value}" }
                p { class: "text-sm opacity-60", "{caption}" }
            }
        }
    )
}

#[component]
fn SyllabusViewer(course: CourseDto, on_enroll: EventHandler<()>) -> Element {
    let mut active_module = use_signal(|| 0usize);

    let selected = active_module();
    let active = course.syllabus.get(selected).cloned();
    let topic = active
        .as_ref()
        .map(|module| module.topic.clone())
        .unwrap_or_else(|| "Module Title".to_string());
    let points = active
        .as_ref()
        .map(|module| split_topics(&module.content))
        .unwrap_or_default();
    // Display hours are decorative; they reroll on every render.
    let hours = rand::rng().random_range(4..9);

    let outcomes = (!course.outcomes.is_empty()).then(|| {
        rsx!(
            div { class: "mb-4",
                h4 { class: "font-semibold mb-2 text-primary", "What You'll Learn" }
                ul { class: "space-y-1",
                    {course.outcomes.iter().map(|outcome| rsx!(
                        li { class: "flex items-start gap-2 text-sm",
                            span { class: "text-success mt-0.5",
                                Icon { width: 12, height: 12, icon: FaCircleCheck }
                            }
                            "{outcome}"
                        }
                    ))}
                }
            }
        )
    });
    let prerequisites = (!course.prerequisites.is_empty()).then(|| {
        rsx!(
            div { class: "mb-4",
                h4 { class: "font-semibold mb-2 text-primary", "Prerequisites" }
                div { class: "flex flex-wrap gap-2",
                    {course.prerequisites.iter().map(|requirement| rsx!(
                        span { class: "badge badge-primary badge-outline", "{requirement}" }
                    ))}
                }
            }
        )
    });
    let resources = (!course.resources.is_empty()).then(|| {
        rsx!(
            div { class: "mb-4",
                h4 { class: "font-semibold mb-2 text-primary", "Resources Included" }
                ul { class: "space-y-1",
                    {course.resources.iter().map(|resource| rsx!(
                        li { class: "text-sm", "• {resource}" }
                    ))}
                }
            }
        )
    });
    let certification = course.certification.as_ref().map(|certificate| {
        rsx!(
            div { class: "flex items-center gap-2 text-sm mb-4",
                span { class: "text-warning",
                    Icon { width: 14, height: 14, icon: FaAward }
                }
                "{certificate}"
            }
        )
    });

    rsx!(
        section { class: "py-10 px-3 sm:px-5 lg:px-6 max-w-6xl mx-auto",
            h2 { class: "text-xl sm:text-2xl md:text-3xl font-bold mb-6 text-center",
                "Explore Our Industry-Aligned Curriculum"
            }
            div { class: "grid grid-cols-1 md:grid-cols-3 gap-4 rounded-2xl p-4 md:p-6 bg-base-200",
                div { class: "flex flex-col gap-2",
                    {(0..course.syllabus.len()).map(|index| {
                        let class = if index == selected {
                            "btn btn-primary btn-sm justify-start"
                        } else {
                            "btn btn-ghost btn-sm justify-start"
                        };
                        let number = index + 1;

                        rsx!(
                            button {
                                key: "{index}",
                                class: "{class}",
                                onclick: move |_| active_module.set(index),
                                "Module {number}"
                            }
                        )
                    })}
                }
                div { class: "md:col-span-2",
                    div { class: "rounded-2xl p-5 md:p-6 border border-base-300 bg-base-100 h-[440px] flex flex-col justify-between",
                        div { class: "overflow-y-auto pr-2",
                            div { class: "flex justify-between items-center mb-3",
                                h3 { class: "text-base sm:text-lg font-semibold", "{topic}" }
                                div { class: "flex items-center gap-1 text-xs sm:text-sm text-primary",
                                    Icon { width: 14, height: 14, icon: FaClock }
                                    "{hours} Hrs"
                                }
                            }
                            ul { class: "space-y-1 mb-4 text-sm",
                                {points.iter().map(|point| rsx!(
                                    li { class: "flex items-start gap-2 leading-relaxed",
                                        span { class: "text-success mt-0.5",
                                            Icon { width: 12, height: 12, icon: FaCircleCheck }
                                        }
                                        "{point}"
                                    }
                                ))}
                            }
                            {outcomes}
                            {prerequisites}
                            {resources}
                            {certification}
                        }
                        div { class: "flex justify-center mt-3 pt-2 border-t border-base-300",
                            button {
                                class: "btn btn-success btn-sm text-white",
                                onclick: move |_| on_enroll.call(()),
                                "Download Syllabus"
                            }
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn ContactModal(on_close: EventHandler<()>) -> Element {
    rsx!(
        div { class: "modal modal-open",
            div { class: "modal-box max-w-md",
                button {
                    class: "btn btn-sm btn-circle btn-ghost absolute right-2 top-2",
                    onclick: move |_| on_close.call(()),
                    Icon { width: 16, height: 16, icon: FaXmark }
                }
                h2 { class: "text-xl font-semibold mb-4 text-center", "Apply now to Unlock Offer!" }
                div { class: "flex flex-col gap-4",
                    input { class: "input input-bordered w-full", placeholder: "Name" }
                    input {
                        class: "input input-bordered w-full",
                        r#type: "email",
                        placeholder: "Email",
                    }
                    input {
                        class: "input input-bordered w-full",
                        r#type: "tel",
                        placeholder: "Mobile Number",
                    }
                    select { class: "select select-bordered w-full",
                        option { value: "", "Education Qualification" }
                        option { "B.Tech" }
                        option { "B.Sc" }
                        option { "Other" }
                    }
                    select { class: "select select-bordered w-full",
                        option { value: "", "Current Profile" }
                        option { "Student" }
                        option { "Working Professional" }
                        option { "Other" }
                    }
                    button { class: "btn btn-primary w-full", "Apply Now" }
                }
            }
            div { class: "modal-backdrop", onclick: move |_| on_close.call(()) }
        }
    )
}

/// Splits a syllabus module's comma separated topic list into trimmed,
/// non-empty entries.
pub fn split_topics(content: &str) -> Vec<String> {
    content
        .split(',')
        .map(str::trim)
        .filter(|point| !point.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::split_topics;

    /// Test a normal comma separated topic list.
    ///
    /// Expected: entries are trimmed and kept in order.
    #[test]
    fn splits_and_trims_topics() {
        let points = split_topics("Intro to Python,  Numpy Arrays , Pandas");

        assert_eq!(points, vec!["Intro to Python", "Numpy Arrays", "Pandas"]);
    }

    /// Test degenerate content strings.
    ///
    /// Expected: empty input and stray commas produce no entries.
    #[test]
    fn empty_or_comma_only_content_yields_nothing() {
        assert!(split_topics("").is_empty());
        assert!(split_topics(" , ,").is_empty());
    }
}
