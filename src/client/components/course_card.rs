use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaClock, FaStar, FaUsers};
use dioxus_free_icons::Icon;

use crate::client::router::Route;
use crate::model::course::CourseDto;

/// Artwork shown when a course record carries no image of its own.
pub const FALLBACK_COURSE_IMAGE: &str =
    "https://placehold.co/600x400/8A2BE2/ffffff?text=Makjuz+Academy";

#[component]
pub fn CourseCard(course: CourseDto) -> Element {
    let image = course
        .image
        .clone()
        .unwrap_or_else(|| FALLBACK_COURSE_IMAGE.to_string());

    rsx!(
        div { class: "card bg-base-100 shadow-sm hover:shadow-lg transition-shadow h-full",
            figure { class: "h-44 overflow-hidden",
                img {
                    class: "w-full h-full object-cover",
                    src: "{image}",
                    alt: "{course.title}"
                }
            }
            div { class: "card-body",
                h2 { class: "card-title", "{course.title}" }
                p { class: "text-sm opacity-70 line-clamp-2", "{course.description}" }
                div { class: "flex flex-wrap gap-1",
                    {course.tags.iter().map(|tag| rsx!(
                        span { class: "badge badge-outline badge-sm", "{tag}" }
                    ))}
                }
                div { class: "flex items-center justify-between text-sm opacity-80 mt-2",
                    span { class: "flex items-center gap-1",
                        Icon { width: 14, height: 14, icon: FaClock }
                        "{course.duration}"
                    }
                    span { class: "flex items-center gap-1",
                        Icon { width: 14, height: 14, icon: FaUsers }
                        {format_count(course.students)}
                    }
                    span { class: "flex items-center gap-1 text-warning",
                        Icon { width: 14, height: 14, icon: FaStar }
                        "{course.rating}"
                    }
                }
                div { class: "card-actions justify-end mt-2",
                    Link {
                        to: Route::CourseDetail { course_id: course.id.clone() },
                        class: "btn btn-primary btn-sm",
                        "Know More"
                    }
                }
            }
        }
    )
}

/// Thousands-separated student count, e.g. 12500 -> "12,500".
fn format_count(count: u32) -> String {
    let digits = count.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test thousands grouping of the enrolled count.
    ///
    /// Expected: commas every three digits, small counts untouched.
    #[test]
    fn format_count_groups_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(950), "950");
        assert_eq!(format_count(12500), "12,500");
        assert_eq!(format_count(1234567), "1,234,567");
    }
}
