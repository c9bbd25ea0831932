use dioxus::document::Title;
use dioxus::prelude::*;

#[cfg(feature = "web")]
use crate::client::api::courses::get_courses;
use crate::client::components::{CourseCard, ErrorAlert, Footer, Page, Spinner};
#[cfg(feature = "web")]
use crate::client::loader::load_into;
use crate::client::loader::LoadState;
use crate::model::course::CourseDto;

const CATEGORIES: [&str; 7] = [
    "All Courses",
    "Machine Learning",
    "Data Analytics",
    "Data Science",
    "SQL",
    "Generative AI",
    "Cloud",
];

#[component]
pub fn Courses() -> Element {
    let courses = use_signal(LoadState::<Vec<CourseDto>>::default);
    let mut category = use_signal(|| "All Courses");

    #[cfg(feature = "web")]
    let _fetch = use_resource(move || load_into(courses, get_courses()));

    let state = courses.read();
    let selected = category();
    let heading = if selected == "All Courses" {
        "Featured Courses"
    } else {
        selected
    };
    let visible = state
        .data()
        .map(|list| filter_courses(list, selected))
        .unwrap_or_default();
    let load_error = state.error().map(|_| {
        rsx!(ErrorAlert { message: "Failed to load courses. Please try again later." })
    });

    rsx!(
        Title { "Courses | Makjuz Academy" }
        Page {
            div { class: "max-w-7xl mx-auto",
                div { class: "text-center my-10",
                    h2 { class: "text-3xl md:text-5xl font-bold text-primary mb-4", "{heading}" }
                    p { class: "text-lg max-w-3xl mx-auto opacity-70",
                        "Explore our comprehensive curriculum designed by industry experts to accelerate your career!"
                    }
                }

                div { class: "flex flex-wrap justify-center gap-2 mb-10",
                    {CATEGORIES.iter().map(|&label| {
                        let class = if label == selected {
                            "btn btn-primary btn-sm"
                        } else {
                            "btn btn-ghost btn-sm"
                        };

                        rsx!(
                            button {
                                key: "{label}",
                                class: "{class}",
                                onclick: move |_| category.set(label),
                                "{label}"
                            }
                        )
                    })}
                }

                if state.is_loading() {
                    div { class: "flex justify-center py-20", Spinner {} }
                }
                {load_error}

                if !state.is_loading() && state.error().is_none() && visible.is_empty() {
                    div { class: "text-center py-20 opacity-60",
                        p { "No courses found in this category." }
                    }
                }

                div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8 pb-10",
                    {visible.iter().map(|course| rsx!(
                        CourseCard { key: "{course.id}", course: course.clone() }
                    ))}
                }
            }
            Footer {}
        }
    )
}

/// Category filter: a course stays when the category term appears in one of
/// its tags or in its title.
pub fn filter_courses(courses: &[CourseDto], category: &str) -> Vec<CourseDto> {
    if category == "All Courses" {
        return courses.to_vec();
    }

    let needle = category.to_lowercase();
    courses
        .iter()
        .filter(|course| {
            course
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&needle))
                || course.title.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::filter_courses;
    use crate::model::course::CourseDto;

    fn course(id: &str, title: &str, tags: &[&str]) -> CourseDto {
        serde_json::from_value(json!({
            "_id": id,
            "title": title,
            "tags": tags
        }))
        .unwrap()
    }

    /// Test the tag match.
    ///
    /// Expected: a Machine Learning tagged course stays under the Machine
    /// Learning category and disappears under SQL.
    #[test]
    fn tag_match_keeps_course_in_its_category() {
        let courses = vec![course("c1", "ML Basics", &["Machine Learning"])];

        assert_eq!(filter_courses(&courses, "Machine Learning").len(), 1);
        assert!(filter_courses(&courses, "SQL").is_empty());
    }

    /// Test the title fallback.
    ///
    /// Expected: an untagged course still matches a category named in its
    /// title.
    #[test]
    fn title_match_covers_untagged_courses() {
        let courses = vec![course("c2", "SQL Mastery Bootcamp", &[])];

        let filtered = filter_courses(&courses, "SQL");

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "c2");
    }

    /// Test the catch-all category.
    ///
    /// Expected: "All Courses" keeps everything.
    #[test]
    fn all_courses_keeps_everything() {
        let courses = vec![
            course("c1", "ML Basics", &["Machine Learning"]),
            course("c2", "SQL Mastery", &["SQL"]),
        ];

        assert_eq!(filter_courses(&courses, "All Courses").len(), 2);
    }

    /// Test case-insensitive matching.
    ///
    /// Expected: category casing does not affect the match.
    #[test]
    fn matching_ignores_case() {
        let courses = vec![course("c3", "Cloud Foundations", &["cloud"])];

        assert_eq!(filter_courses(&courses, "Cloud").len(), 1);
    }
}
