use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaArrowRight, FaBuilding, FaMagnifyingGlass, FaXmark,
};
use dioxus_free_icons::Icon;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::api::placement::{apply_to_job, get_jobs};
use crate::client::api::ApiError;
use crate::client::components::{EmptyNotice, ErrorAlert, Spinner, SuccessAlert};
use crate::client::loader::LoadState;
#[cfg(feature = "web")]
use crate::client::loader::load_into;
use crate::client::util::browser;
use crate::model::placement::{JobDto, SalaryRangeDto};

/// Role filter values the backend recognizes, with their display labels.
pub const ROLE_FILTERS: [(&str, &str); 6] = [
    ("Frontend", "Frontend Developer"),
    ("Backend", "Backend Developer"),
    ("Fullstack", "Full Stack Developer"),
    ("DevOps", "DevOps Engineer"),
    ("AI/ML", "AI / ML Engineer"),
    ("Data Science", "Data Analyst"),
];

/// Work mode filter values the backend recognizes.
pub const TYPE_FILTERS: [&str; 3] = ["Remote", "Hybrid", "On-site"];

#[component]
pub fn JobBoard() -> Element {
    let jobs = use_signal(LoadState::<Vec<JobDto>>::default);
    let mut role_filter = use_signal(String::new);
    let mut type_filter = use_signal(String::new);
    let mut search = use_signal(String::new);
    let mut sort_newest = use_signal(|| true);
    let mut selected_job = use_signal(|| None::<JobDto>);
    let mut apply_result = use_signal(|| None::<Result<String, ApiError>>);

    // Role and type narrow on the server; reading them here re-runs the
    // fetch whenever either select changes.
    #[cfg(feature = "web")]
    let _fetch = use_resource(move || load_into(jobs, get_jobs(role_filter(), type_filter())));

    let on_apply = move |job: JobDto| {
        if let Some(link) = job.apply_link.clone().filter(|link| !link.is_empty()) {
            browser::open_in_new_tab(&link);
            selected_job.set(None);
            return;
        }

        #[cfg(feature = "web")]
        spawn(async move {
            match apply_to_job(&job.id).await {
                Ok(()) => {
                    apply_result.set(Some(Ok("Application submitted successfully!".to_string())));
                }
                Err(err) => {
                    tracing::error!("Failed to apply to job: {err}");
                    apply_result.set(Some(Err(err)));
                }
            }
            selected_job.set(None);
        });
    };

    let state = jobs.read();
    let visible = state
        .data()
        .map(|list| sorted_jobs(search_jobs(list, &search.read()), sort_newest()))
        .unwrap_or_default();

    let banner = match &*apply_result.read() {
        Some(Ok(message)) => Some(rsx!(SuccessAlert { message: message.clone() })),
        Some(Err(error)) => Some(rsx!(ErrorAlert { message: error.message() })),
        None => None,
    };
    let load_error = state
        .error()
        .map(|error| rsx!(ErrorAlert { message: error.message() }));
    let modal = selected_job.read().clone().map(|job| {
        rsx!(
            JobDetailsModal {
                job,
                on_close: move |_| selected_job.set(None),
                on_apply,
            }
        )
    });

    rsx!(
        div { class: "flex flex-col gap-6",
            {banner}

            div { class: "card bg-base-200 shadow-sm",
                div { class: "card-body grid grid-cols-1 md:grid-cols-4 gap-3 p-4",
                    label { class: "input input-bordered flex items-center gap-2",
                        Icon { width: 16, height: 16, icon: FaMagnifyingGlass }
                        input {
                            class: "grow",
                            r#type: "text",
                            placeholder: "Search role or company...",
                            value: "{search}",
                            oninput: move |event| search.set(event.value()),
                        }
                    }
                    select {
                        class: "select select-bordered",
                        onchange: move |event| role_filter.set(event.value()),
                        option { value: "", "All Roles" }
                        {ROLE_FILTERS.iter().map(|(value, label)| rsx!(
                            option { value: "{value}", "{label}" }
                        ))}
                    }
                    select {
                        class: "select select-bordered",
                        onchange: move |event| type_filter.set(event.value()),
                        option { value: "", "Any Work Mode" }
                        {TYPE_FILTERS.iter().map(|mode| rsx!(
                            option { value: "{mode}", "{mode}" }
                        ))}
                    }
                    select {
                        class: "select select-bordered",
                        onchange: move |event| sort_newest.set(event.value() == "newest"),
                        option { value: "newest", "Newest First" }
                        option { value: "oldest", "Oldest First" }
                    }
                }
            }

            if state.is_loading() {
                Spinner {}
            }
            {load_error}

            if !state.is_loading() && state.error().is_none() && visible.is_empty() {
                EmptyNotice {
                    title: "No jobs found matching your criteria.",
                    hint: "Try clearing the filters or searching for a different role.",
                }
            }

            div { class: "grid md:grid-cols-2 lg:grid-cols-3 gap-6",
                {visible.iter().map(|job| rsx!(
                    JobCard {
                        key: "{job.id}",
                        job: job.clone(),
                        on_details: move |job| selected_job.set(Some(job)),
                        on_apply,
                    }
                ))}
            }

            {modal}
        }
    )
}

#[component]
fn JobCard(job: JobDto, on_details: EventHandler<JobDto>, on_apply: EventHandler<JobDto>) -> Element {
    let initial = job.company.chars().next().unwrap_or('?');
    let logo = job
        .company_details
        .as_ref()
        .and_then(|details| details.logo.clone());
    let logo_el = match logo {
        Some(url) => rsx!(img {
            class: "w-full h-full object-cover",
            src: "{url}",
            alt: "{job.company}"
        }),
        None => rsx!("{initial}"),
    };
    let extra_stack = job.tech_stack.len().saturating_sub(3);
    let details_job = job.clone();
    let apply_job = job.clone();

    rsx!(
        div { class: "card bg-base-100 border border-base-300 shadow-sm hover:shadow-lg transition-shadow",
            div { class: "card-body",
                div { class: "flex items-center gap-3",
                    div { class: "w-12 h-12 rounded-xl bg-neutral text-neutral-content flex items-center justify-center text-xl font-bold overflow-hidden",
                        {logo_el}
                    }
                    div {
                        h4 { class: "font-bold leading-tight", "{job.title}" }
                        p { class: "text-sm opacity-60", "{job.company}" }
                    }
                }
                div { class: "flex gap-2 mt-3",
                    span { class: "badge badge-secondary badge-outline", "{job.job_type}" }
                    span { class: "badge badge-success badge-outline",
                        {format_salary(job.salary_range.as_ref())}
                    }
                }
                div { class: "flex flex-wrap gap-1 mt-3",
                    {job.tech_stack.iter().take(3).map(|tech| rsx!(
                        span { class: "badge badge-ghost badge-sm", "{tech}" }
                    ))}
                    if extra_stack > 0 {
                        span { class: "text-xs opacity-60", "+{extra_stack}" }
                    }
                }
                div { class: "card-actions mt-4 pt-3 border-t border-dashed border-base-300",
                    button {
                        class: "btn btn-ghost btn-sm flex-1",
                        onclick: move |_| on_details.call(details_job.clone()),
                        "Details"
                    }
                    button {
                        class: "btn btn-success btn-sm flex-1",
                        onclick: move |_| on_apply.call(apply_job.clone()),
                        "Apply"
                    }
                }
            }
        }
    )
}

#[component]
fn JobDetailsModal(
    job: JobDto,
    on_close: EventHandler<()>,
    on_apply: EventHandler<JobDto>,
) -> Element {
    let initial = job.company.chars().next().unwrap_or('?');
    let description = job
        .description
        .clone()
        .unwrap_or_else(|| "No description provided.".to_string());
    let salary = format_salary(job.salary_range.as_ref());
    let apply_job = job.clone();

    rsx!(
        div { class: "modal modal-open",
            div { class: "modal-box max-w-2xl",
                button {
                    class: "btn btn-ghost btn-circle btn-sm absolute right-4 top-4",
                    onclick: move |_| on_close.call(()),
                    Icon { width: 20, height: 20, icon: FaXmark }
                }

                div { class: "flex items-center gap-4 mb-4",
                    div { class: "w-16 h-16 rounded-2xl bg-primary text-primary-content flex items-center justify-center text-2xl font-bold",
                        "{initial}"
                    }
                    div {
                        h2 { class: "text-2xl font-bold", "{job.title}" }
                        p { class: "flex items-center gap-2 text-success font-medium",
                            Icon { width: 14, height: 14, icon: FaBuilding }
                            "{job.company}"
                        }
                    }
                }

                div { class: "flex flex-wrap gap-2 mb-6",
                    span { class: "badge badge-secondary", "{job.job_type}" }
                    span { class: "badge badge-info", "{job.role}" }
                    span { class: "badge badge-success", "{salary}" }
                }

                h3 { class: "font-bold border-b border-base-300 pb-1 mb-2", "Job Description" }
                p { class: "whitespace-pre-wrap text-sm opacity-80 mb-6", "{description}" }

                h3 { class: "font-bold border-b border-base-300 pb-1 mb-2", "Requirements" }
                ul { class: "grid grid-cols-1 md:grid-cols-2 gap-2 mb-6",
                    {job.requirements.iter().map(|requirement| rsx!(
                        li { class: "flex items-start gap-2 text-sm opacity-80",
                            span { class: "text-success mt-1",
                                Icon { width: 12, height: 12, icon: FaArrowRight }
                            }
                            "{requirement}"
                        }
                    ))}
                }

                h3 { class: "font-bold border-b border-base-300 pb-1 mb-2", "Tech Stack" }
                div { class: "flex flex-wrap gap-2",
                    {job.tech_stack.iter().map(|tech| rsx!(
                        span { class: "badge badge-outline", "{tech}" }
                    ))}
                }

                div { class: "modal-action",
                    button {
                        class: "btn btn-success w-full",
                        onclick: move |_| on_apply.call(apply_job.clone()),
                        "Apply Now"
                    }
                }
            }
            div { class: "modal-backdrop", onclick: move |_| on_close.call(()) }
        }
    )
}

/// Case-insensitive match on title, company, or tech stack.
pub fn search_jobs(jobs: &[JobDto], query: &str) -> Vec<JobDto> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return jobs.to_vec();
    }

    jobs.iter()
        .filter(|job| {
            job.title.to_lowercase().contains(&query)
                || job.company.to_lowercase().contains(&query)
                || job
                    .tech_stack
                    .iter()
                    .any(|tech| tech.to_lowercase().contains(&query))
        })
        .cloned()
        .collect()
}

/// Order postings by creation date.
pub fn sorted_jobs(mut jobs: Vec<JobDto>, newest_first: bool) -> Vec<JobDto> {
    if newest_first {
        jobs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    } else {
        jobs.sort_by(|a, b| a.created_at.cmp(&b.created_at));
    }
    jobs
}

/// Lakhs-per-annum salary band, e.g. "₹6-12 LPA".
pub fn format_salary(range: Option<&SalaryRangeDto>) -> String {
    match range {
        Some(range) => format!("₹{}-{} LPA", format_lakhs(range.min), format_lakhs(range.max)),
        None => "Salary disclosed".to_string(),
    }
}

fn format_lakhs(value: i64) -> String {
    if value % 100_000 == 0 {
        (value / 100_000).to_string()
    } else {
        (value as f64 / 100_000.0).to_string()
    }
}
