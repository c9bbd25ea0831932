use chrono::{DateTime, Utc};
use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaAward, FaBriefcase, FaBullseye, FaChartLine};
use dioxus_free_icons::Icon;

#[cfg(feature = "web")]
use crate::client::api::internships::get_internships;
#[cfg(feature = "web")]
use crate::client::api::placement::get_jobs;
use crate::client::components::{ErrorAlert, Spinner};
use crate::client::loader::LoadState;
#[cfg(feature = "web")]
use crate::client::loader::load_into;
use crate::client::util::time::format_relative_time;
use crate::model::internship::InternshipDto;
use crate::model::placement::{ApplicationStatus, JobDto};

/// Jobs still accepting applications.
fn active_job_count(jobs: &[JobDto]) -> usize {
    jobs.iter().filter(|job| job.is_active).count()
}

/// Applications across every posting.
fn total_application_count(jobs: &[JobDto]) -> usize {
    jobs.iter().map(|job| job.applicants.len()).sum()
}

/// Mean match score across every applicant, rounded down. Zero when nobody
/// has applied yet.
fn average_match_score(jobs: &[JobDto]) -> u32 {
    let mut total = 0u32;
    let mut count = 0u32;
    for job in jobs {
        for applicant in &job.applicants {
            total += applicant.match_score;
            count += 1;
        }
    }
    if count == 0 {
        return 0;
    }
    total / count
}

/// One row in the recent-applications feed.
#[derive(Clone, Debug, PartialEq)]
struct RecentApplicant {
    name: String,
    job_title: String,
    status: ApplicationStatus,
    applied_at: DateTime<Utc>,
}

/// Applications across every posting, newest first, capped at `limit`.
fn recent_applicants(jobs: &[JobDto], limit: usize) -> Vec<RecentApplicant> {
    let mut rows: Vec<RecentApplicant> = jobs
        .iter()
        .flat_map(|job| {
            job.applicants.iter().map(|applicant| RecentApplicant {
                name: applicant.user.name.clone(),
                job_title: job.title.clone(),
                status: applicant.status,
                applied_at: applicant.applied_at,
            })
        })
        .collect();
    rows.sort_by(|a, b| b.applied_at.cmp(&a.applied_at));
    rows.truncate(limit);
    rows
}

fn status_badge_class(status: ApplicationStatus) -> &'static str {
    match status {
        ApplicationStatus::Applied => "badge badge-ghost",
        ApplicationStatus::UnderReview => "badge badge-warning",
        ApplicationStatus::InterviewScheduled => "badge badge-info",
        ApplicationStatus::Hired => "badge badge-success",
        ApplicationStatus::Rejected => "badge badge-error",
    }
}

/// Admin landing screen. The headline numbers are derived client-side from
/// the same job and internship lists the public screens read; there is no
/// dedicated stats endpoint.
#[component]
pub fn AdminDashboard() -> Element {
    let jobs = use_signal(LoadState::<Vec<JobDto>>::default);
    let internships = use_signal(LoadState::<Vec<InternshipDto>>::default);

    #[cfg(feature = "web")]
    let _jobs_fetch = use_resource(move || load_into(jobs, get_jobs(String::new(), String::new())));
    #[cfg(feature = "web")]
    let _internships_fetch = use_resource(move || load_into(internships, get_internships()));

    let jobs_state = jobs.read();
    let internships_state = internships.read();

    let body = if jobs_state.is_loading() || internships_state.is_loading() {
        rsx!(Spinner {})
    } else {
        let load_error = (jobs_state.error().is_some() || internships_state.error().is_some())
            .then(|| rsx!(ErrorAlert { message: "Failed to load dashboard data." }));

        let job_list = jobs_state.data().map(Vec::as_slice).unwrap_or_default();
        let internship_count = internships_state.data().map(Vec::len).unwrap_or_default();

        let active = active_job_count(job_list).to_string();
        let applications = total_application_count(job_list).to_string();
        let match_score = format!("{}%", average_match_score(job_list));
        let recent = recent_applicants(job_list, 5);

        let feed = if recent.is_empty() {
            rsx!(p { class: "opacity-60 text-center py-10", "No applications yet." })
        } else {
            rsx!(
                div { class: "flex flex-col gap-3",
                    {recent.iter().map(|row| {
                        let initial = row.name.chars().next().unwrap_or('?');
                        let when = format_relative_time(&row.applied_at);
                        let chip_class = status_badge_class(row.status);
                        let status_label = row.status.label();
                        rsx!(
                            div {
                                key: "{row.name}-{row.applied_at}",
                                class: "flex items-center gap-4 p-3 rounded-box bg-base-100 border border-base-300",
                                div { class: "w-10 h-10 rounded-full bg-primary text-primary-content flex items-center justify-center font-bold shrink-0",
                                    "{initial}"
                                }
                                div { class: "flex-1 overflow-hidden",
                                    p { class: "font-semibold truncate",
                                        "{row.name} applied for {row.job_title}"
                                    }
                                    p { class: "text-xs opacity-60", "{when}" }
                                }
                                span { class: "{chip_class}", "{status_label}" }
                            }
                        )
                    })}
                }
            )
        };

        rsx!(
            {load_error}

            div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6",
                StatCard {
                    icon: rsx!(Icon { width: 24, height: 24, icon: FaBriefcase }),
                    value: active,
                    label: "Active Jobs",
                }
                StatCard {
                    icon: rsx!(Icon { width: 24, height: 24, icon: FaChartLine }),
                    value: applications,
                    label: "Applications",
                }
                StatCard {
                    icon: rsx!(Icon { width: 24, height: 24, icon: FaAward }),
                    value: "{internship_count}",
                    label: "Internships",
                }
                StatCard {
                    icon: rsx!(Icon { width: 24, height: 24, icon: FaBullseye }),
                    value: match_score,
                    label: "Avg Match Score",
                }
            }

            div { class: "grid grid-cols-1 lg:grid-cols-2 gap-6 mt-8",
                div { class: "card bg-base-200 shadow-md",
                    div { class: "card-body",
                        h3 { class: "text-xl font-bold mb-2", "Recent Applications" }
                        {feed}
                    }
                }
                div { class: "card bg-base-200 shadow-md",
                    div { class: "card-body items-center justify-center text-center opacity-60 min-h-[16rem]",
                        span { class: "opacity-40",
                            Icon { width: 48, height: 48, icon: FaChartLine }
                        }
                        p { "Placement Analytics Chart (Coming Soon)" }
                    }
                }
            }
        )
    };

    rsx!(
        Title { "Admin Dashboard | Makjuz Academy" }
        h1 { class: "text-3xl font-bold mb-8", "Dashboard Overview" }
        {body}
    )
}

#[component]
fn StatCard(icon: Element, value: String, label: &'static str) -> Element {
    rsx!(
        div { class: "card bg-base-200 shadow-md",
            div { class: "card-body p-5",
                div { class: "text-primary", {icon} }
                p { class: "text-3xl font-bold mt-2", "{value}" }
                p { class: "text-sm opacity-60", "{label}" }
            }
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn applicant(id: &str, name: &str, score: u32, status: &str, applied_at: &str) -> serde_json::Value {
        json!({
            "user": { "_id": id, "name": name, "email": format!("{id}@example.com") },
            "status": status,
            "matchScore": score,
            "appliedAt": applied_at,
        })
    }

    fn job(id: &str, title: &str, is_active: bool, applicants: Vec<serde_json::Value>) -> JobDto {
        serde_json::from_value(json!({
            "_id": id,
            "title": title,
            "company": "Acme Corp",
            "isActive": is_active,
            "createdAt": "2025-06-01T10:00:00Z",
            "applicants": applicants,
        }))
        .unwrap()
    }

    /// Test the headline counts over a mixed job list.
    ///
    /// Expected: only active postings count as active; applications sum
    /// across every posting including closed ones.
    #[test]
    fn counts_cover_active_flags_and_every_posting() {
        let jobs = vec![
            job(
                "j1",
                "React Developer",
                true,
                vec![
                    applicant("u1", "Asha", 80, "Applied", "2025-06-02T10:00:00Z"),
                    applicant("u2", "Bilal", 90, "Hired", "2025-06-03T10:00:00Z"),
                ],
            ),
            job("j2", "Backend Engineer", false, vec![
                applicant("u3", "Chitra", 70, "Rejected", "2025-06-04T10:00:00Z"),
            ]),
            job("j3", "Data Analyst", true, vec![]),
        ];

        assert_eq!(active_job_count(&jobs), 2);
        assert_eq!(total_application_count(&jobs), 3);
    }

    /// Test the mean match score across applicants on different jobs.
    ///
    /// Expected: scores pool across postings; no applicants means zero
    /// rather than a division error.
    #[test]
    fn match_score_averages_across_jobs() {
        let jobs = vec![
            job("j1", "React Developer", true, vec![
                applicant("u1", "Asha", 80, "Applied", "2025-06-02T10:00:00Z"),
                applicant("u2", "Bilal", 90, "Applied", "2025-06-03T10:00:00Z"),
            ]),
            job("j2", "Backend Engineer", true, vec![
                applicant("u3", "Chitra", 70, "Applied", "2025-06-04T10:00:00Z"),
            ]),
        ];

        assert_eq!(average_match_score(&jobs), 80);
        assert_eq!(average_match_score(&[]), 0);
        assert_eq!(
            average_match_score(&[job("j3", "Data Analyst", true, vec![])]),
            0
        );
    }

    /// Test the recent-applications feed ordering and cap.
    ///
    /// Expected: rows come out newest first with the posting title attached,
    /// truncated to the requested limit.
    #[test]
    fn recent_feed_is_newest_first_and_capped() {
        let jobs = vec![
            job("j1", "React Developer", true, vec![
                applicant("u1", "Asha", 80, "Applied", "2025-06-02T10:00:00Z"),
                applicant("u2", "Bilal", 90, "Hired", "2025-06-05T10:00:00Z"),
            ]),
            job("j2", "Backend Engineer", true, vec![
                applicant("u3", "Chitra", 70, "Under Review", "2025-06-04T10:00:00Z"),
            ]),
        ];

        let feed = recent_applicants(&jobs, 2);

        assert_eq!(feed.len(), 2);
        assert_eq!(feed[0].name, "Bilal");
        assert_eq!(feed[0].job_title, "React Developer");
        assert_eq!(feed[0].status, ApplicationStatus::Hired);
        assert_eq!(feed[1].name, "Chitra");
        assert_eq!(feed[1].job_title, "Backend Engineer");
    }
}
