use dioxus::document::Title;
use dioxus::prelude::*;

#[cfg(feature = "web")]
use crate::client::api::users::get_user;
use crate::client::api::ApiError;
use crate::client::components::navbar::avatar_url;
use crate::client::components::{ErrorAlert, Footer, Page, Spinner};
#[cfg(feature = "web")]
use crate::client::loader::load_into;
use crate::client::loader::LoadState;
use crate::model::user::UserDto;

const DEFAULT_PROGRESS: [&str; 4] = ["React", "Node.js", "MongoDB", "Express"];
const DEFAULT_PROJECT_IMAGE: &str =
    "https://images.unsplash.com/photo-1555066931-4365d14bab8c?auto=format&fit=crop&w=600&h=400";

/// Everything the spotlight page renders, with a fallback filled in for
/// each field the student left empty.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentView {
    pub name: String,
    pub photo_url: String,
    pub program: String,
    pub quote: String,
    pub github_url: String,
    pub expected_graduation: String,
    pub my_story: String,
    pub why_this_academy: String,
    pub my_experience: String,
    pub what_next: String,
    pub progress: Vec<String>,
    pub spotlight: SpotlightView,
    pub mentor_name: String,
    pub mentor_quote: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpotlightView {
    pub title: String,
    pub challenge: String,
    pub solution: String,
    pub project_image: String,
    pub github_link: String,
    pub live_project_link: String,
}

fn filled(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

impl StudentView {
    pub fn from_user(user: &UserDto) -> Self {
        let sections = user.student_profile.as_ref();
        let github_url = filled(user.github_url.clone()).unwrap_or_else(|| "#".to_string());

        let spotlight = sections
            .and_then(|profile| profile.mock_exam_spotlight.as_ref())
            .filter(|spotlight| !spotlight.title.trim().is_empty())
            .map(|spotlight| SpotlightView {
                title: spotlight.title.clone(),
                challenge: spotlight.challenge.clone(),
                solution: spotlight.solution.clone(),
                project_image: spotlight.project_image.clone(),
                github_link: spotlight.github_link.clone(),
                live_project_link: spotlight.live_project_link.clone(),
            })
            .unwrap_or_else(|| SpotlightView {
                title: "E-Commerce Platform".to_string(),
                challenge: "Building a scalable backend with high concurrency.".to_string(),
                solution: "Implemented microservices architecture using Node.js and Docker."
                    .to_string(),
                project_image: DEFAULT_PROJECT_IMAGE.to_string(),
                github_link: github_url.clone(),
                live_project_link: filled(user.portfolio_url.clone())
                    .unwrap_or_else(|| "#".to_string()),
            });

        let (mentor_name, mentor_quote) = sections
            .and_then(|profile| profile.pull_quote.as_ref())
            .filter(|pull_quote| !pull_quote.quote.trim().is_empty())
            .map(|pull_quote| (pull_quote.mentor_name.clone(), pull_quote.quote.clone()))
            .unwrap_or_else(|| {
                (
                    "Senior Mentor".to_string(),
                    "This student shows exceptional promise and dedication.".to_string(),
                )
            });

        let progress = if !user.progress.is_empty() {
            user.progress.clone()
        } else if !user.skills.is_empty() {
            user.skills.clone()
        } else {
            DEFAULT_PROGRESS.iter().map(|s| s.to_string()).collect()
        };

        StudentView {
            name: user.name.clone(),
            photo_url: filled(user.image.clone()).unwrap_or_else(|| avatar_url(&user.name)),
            program: filled(user.program.clone())
                .or_else(|| filled(user.qualification.clone()))
                .unwrap_or_else(|| "Full-Stack Development".to_string()),
            quote: filled(user.quote.clone())
                .unwrap_or_else(|| "Learning is a lifelong journey.".to_string()),
            github_url,
            expected_graduation: filled(user.expected_graduation.clone())
                .unwrap_or_else(|| "2025".to_string()),
            my_story: sections
                .and_then(|profile| filled(profile.my_story.clone()))
                .or_else(|| filled(user.bio.clone()))
                .unwrap_or_else(|| "Student has not added a story yet.".to_string()),
            why_this_academy: sections
                .and_then(|profile| filled(profile.why_this_academy.clone()))
                .unwrap_or_else(|| {
                    "The curriculum seemed very comprehensive and practical.".to_string()
                }),
            my_experience: sections
                .and_then(|profile| filled(profile.my_experience.clone()))
                .unwrap_or_else(|| {
                    "It has been a challenging but rewarding experience.".to_string()
                }),
            what_next: sections
                .and_then(|profile| filled(profile.what_next.clone()))
                .unwrap_or_else(|| "I plan to work as a Senior Developer.".to_string()),
            progress,
            spotlight,
            mentor_name,
            mentor_quote,
        }
    }
}

/// Public spotlight page for one student.
#[component]
pub fn Student(student_id: ReadOnlySignal<String>) -> Element {
    let profile = use_signal(LoadState::<UserDto>::default);

    // Reading the id inside the closure re-runs the fetch when the route
    // param changes.
    #[cfg(feature = "web")]
    let _fetch = use_resource(move || load_into(profile, get_user(student_id())));

    let state = profile.read();
    let body = match &*state {
        LoadState::Idle | LoadState::Loading => rsx!(Spinner {}),
        LoadState::Error(ApiError::NotFound) => rsx!(
            div { class: "text-center text-xl py-24", "Profile not found." }
        ),
        LoadState::Error(error) => rsx!(ErrorAlert { message: error.message() }),
        LoadState::Loaded(user) => {
            let view = StudentView::from_user(user);
            rsx!(SpotlightPage { view })
        }
    };

    rsx!(
        Title { "Student | Makjuz Academy" }
        Page {
            section { class: "max-w-6xl mx-auto px-4 py-8", {body} }
            Footer {}
        }
    )
}

#[component]
fn SpotlightPage(view: StudentView) -> Element {
    rsx!(
        div { class: "flex flex-col gap-10",
            div { class: "card bg-base-200 shadow-lg",
                div { class: "card-body md:flex-row items-center gap-8",
                    img {
                        class: "w-48 h-48 rounded-full border-4 border-primary shadow-xl object-cover",
                        src: "{view.photo_url}",
                        alt: "Photo of {view.name}",
                    }
                    div { class: "text-center md:text-left flex-1",
                        h1 { class: "text-4xl md:text-5xl font-bold text-primary", "{view.name}" }
                        p { class: "text-xl font-semibold opacity-70 mt-1", "{view.program}" }
                        p { class: "italic my-4 text-lg opacity-80", "\"{view.quote}\"" }
                        div { class: "flex flex-wrap gap-3 justify-center md:justify-start text-sm",
                            a {
                                class: "link link-info",
                                href: "{view.github_url}",
                                target: "_blank",
                                "GitHub Profile"
                            }
                            span { class: "opacity-40", "|" }
                            span { class: "opacity-70",
                                "Expected Graduation: "
                                span { class: "font-semibold text-primary", "{view.expected_graduation}" }
                            }
                        }
                    }
                }
            }

            div { class: "grid grid-cols-1 md:grid-cols-2 gap-6",
                StorySection { title: "My Story", content: view.my_story.clone() }
                StorySection { title: "Why this Academy?", content: view.why_this_academy.clone() }
                StorySection { title: "My Experience", content: view.my_experience.clone() }
                StorySection { title: "What's Next?", content: view.what_next.clone() }
            }

            div { class: "card bg-base-200 shadow-lg",
                div { class: "card-body",
                    h2 { class: "text-3xl font-bold text-primary", "Technical Skills" }
                    div { class: "flex flex-wrap gap-3 mt-4",
                        {view.progress.iter().map(|skill| rsx!(
                            span { class: "badge badge-lg badge-primary badge-outline", "{skill}" }
                        ))}
                    }
                }
            }

            div { class: "card bg-base-200 shadow-lg",
                div { class: "card-body",
                    h2 { class: "text-3xl font-bold text-primary", "Project Spotlight" }
                    div { class: "grid md:grid-cols-2 gap-8 items-center mt-4",
                        div {
                            h3 { class: "text-2xl font-bold", "{view.spotlight.title}" }
                            p { class: "mt-3",
                                span { class: "font-semibold text-primary", "The Challenge: " }
                                span { class: "opacity-80", "{view.spotlight.challenge}" }
                            }
                            p { class: "mt-2",
                                span { class: "font-semibold text-success", "The Solution: " }
                                span { class: "opacity-80", "{view.spotlight.solution}" }
                            }
                            div { class: "flex gap-3 mt-6",
                                a {
                                    class: "btn btn-primary",
                                    href: "{view.spotlight.github_link}",
                                    target: "_blank",
                                    "View Code"
                                }
                                a {
                                    class: "btn btn-neutral",
                                    href: "{view.spotlight.live_project_link}",
                                    target: "_blank",
                                    "Live Demo"
                                }
                            }
                        }
                        img {
                            class: "rounded-box shadow-lg border border-base-300",
                            src: "{view.spotlight.project_image}",
                            alt: "Project Screenshot",
                        }
                    }
                }
            }

            div { class: "card bg-base-200 shadow-lg border-l-4 border-primary",
                div { class: "card-body text-center",
                    blockquote { class: "text-2xl italic opacity-90", "\"{view.mentor_quote}\"" }
                    p { class: "mt-2 text-primary font-bold", "- {view.mentor_name}" }
                }
            }
        }
    )
}

#[component]
fn StorySection(title: &'static str, content: String) -> Element {
    rsx!(
        div { class: "card bg-base-200 shadow-md h-full",
            div { class: "card-body",
                h3 { class: "text-xl font-bold text-primary", "{title}" }
                p { class: "leading-relaxed opacity-80", "{content}" }
            }
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user_from(value: serde_json::Value) -> UserDto {
        serde_json::from_value(value).unwrap()
    }

    /// Test a user with nothing but a name still fills every section.
    /// Expected: the documented fallback for each field.
    #[test]
    fn bare_user_gets_every_default() {
        let user = user_from(json!({ "_id": "u1", "name": "Ravi Kumar", "email": "ravi@example.com" }));

        let view = StudentView::from_user(&user);

        assert_eq!(view.program, "Full-Stack Development");
        assert_eq!(view.quote, "Learning is a lifelong journey.");
        assert_eq!(view.expected_graduation, "2025");
        assert_eq!(view.my_story, "Student has not added a story yet.");
        assert_eq!(view.progress, DEFAULT_PROGRESS);
        assert_eq!(view.spotlight.title, "E-Commerce Platform");
        assert_eq!(view.spotlight.github_link, "#");
        assert_eq!(view.mentor_name, "Senior Mentor");
        assert!(view.photo_url.contains("ui-avatars.com"));
    }

    /// Test filled-in profile fields pass through untouched.
    /// Expected: no fallback replaces a present value.
    #[test]
    fn filled_profile_passes_through() {
        let user = user_from(json!({
            "_id": "u2",
            "name": "Meera Joshi",
            "email": "meera@example.com",
            "image": "https://example.com/meera.png",
            "program": "Data Engineering",
            "quote": "Ship it.",
            "expectedGraduation": "2026",
            "progress": ["Spark", "Airflow"],
            "studentProfile": {
                "myStory": "Started in support, moved to data.",
                "mockExamSpotlight": {
                    "title": "Pipeline Monitor",
                    "challenge": "Alert noise.",
                    "solution": "Dedup layer.",
                    "projectImage": "https://example.com/shot.png",
                    "githubLink": "https://github.com/meera/pipeline",
                    "liveProjectLink": "https://pipeline.example.com"
                },
                "pullQuote": { "mentorName": "Lead Mentor", "quote": "Fearless debugging." }
            }
        }));

        let view = StudentView::from_user(&user);

        assert_eq!(view.photo_url, "https://example.com/meera.png");
        assert_eq!(view.program, "Data Engineering");
        assert_eq!(view.progress, vec!["Spark", "Airflow"]);
        assert_eq!(view.spotlight.title, "Pipeline Monitor");
        assert_eq!(view.spotlight.github_link, "https://github.com/meera/pipeline");
        assert_eq!(view.mentor_quote, "Fearless debugging.");
    }

    /// Test the bio backfills the story and skills backfill progress.
    /// Expected: secondary sources win over the canned text.
    #[test]
    fn bio_and_skills_backfill_missing_sections() {
        let user = user_from(json!({
            "_id": "u3",
            "name": "Arjun",
            "email": "arjun@example.com",
            "bio": "Self-taught tinkerer.",
            "skills": ["Rust", "Go"]
        }));

        let view = StudentView::from_user(&user);

        assert_eq!(view.my_story, "Self-taught tinkerer.");
        assert_eq!(view.progress, vec!["Rust", "Go"]);
    }

    /// Test the default spotlight borrows the user's own links.
    /// Expected: github and portfolio URLs flow into the canned project.
    #[test]
    fn default_spotlight_borrows_profile_links() {
        let user = user_from(json!({
            "_id": "u4",
            "name": "Divya",
            "email": "divya@example.com",
            "githubUrl": "https://github.com/divya",
            "portfolioUrl": "https://divya.dev"
        }));

        let view = StudentView::from_user(&user);

        assert_eq!(view.spotlight.github_link, "https://github.com/divya");
        assert_eq!(view.spotlight.live_project_link, "https://divya.dev");
        assert_eq!(view.github_url, "https://github.com/divya");
    }

    /// Test a spotlight with a blank title is treated as absent.
    /// Expected: the canned project shows instead of empty sections.
    #[test]
    fn blank_spotlight_title_falls_back() {
        let user = user_from(json!({
            "_id": "u5",
            "name": "Sneha",
            "email": "sneha@example.com",
            "studentProfile": { "mockExamSpotlight": { "title": "  " } }
        }));

        let view = StudentView::from_user(&user);

        assert_eq!(view.spotlight.title, "E-Commerce Platform");
    }
}
