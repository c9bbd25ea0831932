use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaBriefcase, FaPenToSquare, FaPlus, FaTrashCan, FaUsers, FaXmark,
};
use dioxus_free_icons::Icon;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::api::placement::{
    create_job, delete_job, get_jobs, update_application_status, update_job,
};
use crate::client::components::{EmptyNotice, ErrorAlert, Spinner, SuccessAlert};
use crate::client::loader::LoadState;
#[cfg(feature = "web")]
use crate::client::loader::load_into;
#[cfg(feature = "web")]
use crate::client::util::browser;
#[cfg(feature = "web")]
use crate::client::util::patch::{remove_by_key, replace_by_key, set_applicant_status};
use crate::client::util::time::format_date;
#[cfg(feature = "web")]
use crate::model::placement::StatusUpdateDto;
use crate::model::placement::{
    ApplicantDto, ApplicationStatus, JobDto, JobPayloadDto, SalaryRangeDto,
};

/// Role categories offered in the posting form.
pub const ROLE_OPTIONS: [&str; 7] = [
    "Frontend",
    "Backend",
    "Fullstack",
    "DevOps",
    "AI/ML",
    "Data Science",
    "Other",
];

/// Employment types offered in the posting form.
pub const TYPE_OPTIONS: [&str; 7] = [
    "Full-time",
    "Part-time",
    "Contract",
    "Internship",
    "Remote",
    "Hybrid",
    "On-site",
];

// Pipeline stages in dropdown order, paired with the short label the
// dropdown shows.
const STATUS_CHOICES: [(ApplicationStatus, &str); 5] = [
    (ApplicationStatus::Applied, "Applied"),
    (ApplicationStatus::UnderReview, "Under Review"),
    (ApplicationStatus::InterviewScheduled, "Interview"),
    (ApplicationStatus::Hired, "Hired"),
    (ApplicationStatus::Rejected, "Rejected"),
];

fn status_from_value(value: &str) -> Option<ApplicationStatus> {
    STATUS_CHOICES
        .iter()
        .find(|(status, _)| status.label() == value)
        .map(|(status, _)| *status)
}

/// Editable text mirror of a job posting. Everything stays as entered and is
/// only split and parsed when the request body is built.
#[derive(Clone, Debug, PartialEq)]
pub struct JobForm {
    pub title: String,
    pub company: String,
    pub role: String,
    pub job_type: String,
    pub salary_min: String,
    pub salary_max: String,
    pub requirements: String,
    pub tech_stack: String,
    pub description: String,
    pub apply_link: String,
}

impl Default for JobForm {
    fn default() -> Self {
        JobForm {
            title: String::new(),
            company: String::new(),
            role: "Fullstack".to_string(),
            job_type: "Full-time".to_string(),
            salary_min: String::new(),
            salary_max: String::new(),
            requirements: String::new(),
            tech_stack: String::new(),
            description: String::new(),
            apply_link: String::new(),
        }
    }
}

impl JobForm {
    /// Prefill from an existing posting for editing.
    pub fn from_job(job: &JobDto) -> Self {
        let (salary_min, salary_max) = match &job.salary_range {
            Some(range) => (range.min.to_string(), range.max.to_string()),
            None => (String::new(), String::new()),
        };

        JobForm {
            title: job.title.clone(),
            company: job.company.clone(),
            role: job.role.clone(),
            job_type: job.job_type.clone(),
            salary_min,
            salary_max,
            requirements: job.requirements.join("\n"),
            tech_stack: job.tech_stack.join(", "),
            description: job.description.clone().unwrap_or_default(),
            apply_link: job.apply_link.clone().unwrap_or_default(),
        }
    }

    /// Request body for create and update calls. Requirements split on
    /// newlines with blank lines dropped, the tech stack on commas with
    /// entries trimmed; unparseable salary fields fall back to zero.
    pub fn to_payload(&self) -> JobPayloadDto {
        JobPayloadDto {
            title: self.title.clone(),
            company: self.company.clone(),
            role: self.role.clone(),
            job_type: self.job_type.clone(),
            salary_range: SalaryRangeDto {
                min: self.salary_min.trim().parse().unwrap_or(0),
                max: self.salary_max.trim().parse().unwrap_or(0),
                currency: "INR".to_string(),
            },
            requirements: self
                .requirements
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(str::to_string)
                .collect(),
            tech_stack: self
                .tech_stack
                .split(',')
                .map(str::trim)
                .filter(|entry| !entry.is_empty())
                .map(str::to_string)
                .collect(),
            description: self.description.clone(),
            apply_link: self.apply_link.clone(),
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
enum AdminTab {
    Postings,
    Applications,
}

/// Job posting manager. One tab maintains the postings, the other reviews
/// applicants per posting and moves them through the pipeline. Every
/// mutation patches the loaded list in place once the backend confirms it.
#[component]
pub fn AdminJobs() -> Element {
    let mut jobs = use_signal(LoadState::<Vec<JobDto>>::default);
    let mut active_tab = use_signal(|| AdminTab::Postings);
    let mut selected_job = use_signal(|| None::<String>);

    let mut form = use_signal(JobForm::default);
    let mut editing = use_signal(|| None::<String>);
    let mut modal_open = use_signal(|| false);
    let mut saving = use_signal(|| false);

    let mut toast = use_signal(|| None::<String>);
    let mut action_error = use_signal(|| None::<String>);
    let mut save_error = use_signal(|| None::<String>);

    #[cfg(feature = "web")]
    let _fetch = use_resource(move || load_into(jobs, get_jobs(String::new(), String::new())));

    let on_add = move |_| {
        form.set(JobForm::default());
        editing.set(None);
        save_error.set(None);
        modal_open.set(true);
    };

    let on_edit = move |job: JobDto| {
        form.set(JobForm::from_job(&job));
        editing.set(Some(job.id));
        save_error.set(None);
        modal_open.set(true);
    };

    let on_save = move |_| {
        #[cfg(feature = "web")]
        {
            if saving() {
                return;
            }
            let payload = form.read().to_payload();
            let target = editing.read().clone();
            saving.set(true);
            spawn(async move {
                let result = match &target {
                    Some(job_id) => update_job(job_id, &payload).await,
                    None => create_job(&payload).await,
                };
                match result {
                    Ok(stored) => {
                        if let LoadState::Loaded(list) = &mut *jobs.write() {
                            match &target {
                                Some(_) => {
                                    replace_by_key(list, stored);
                                }
                                None => list.insert(0, stored),
                            }
                        }
                        let message = if target.is_some() {
                            "Job updated successfully"
                        } else {
                            "Job created successfully"
                        };
                        toast.set(Some(message.to_string()));
                        modal_open.set(false);
                        saving.set(false);
                        browser::sleep_ms(3000).await;
                        toast.set(None);
                    }
                    Err(err) => {
                        tracing::error!("Failed to save job posting: {err}");
                        save_error.set(Some(err.message()));
                        saving.set(false);
                    }
                }
            });
        }
    };

    let on_delete = move |job_id: String| {
        action_error.set(None);

        #[cfg(feature = "web")]
        spawn(async move {
            if !browser::confirm("Are you sure you want to delete this job?").await {
                return;
            }
            match delete_job(&job_id).await {
                Ok(()) => {
                    if let LoadState::Loaded(list) = &mut *jobs.write() {
                        remove_by_key(list, &job_id);
                    }
                    toast.set(Some("Job deleted successfully".to_string()));
                    browser::sleep_ms(3000).await;
                    toast.set(None);
                }
                Err(err) => {
                    tracing::error!("Failed to delete job posting: {err}");
                    action_error.set(Some("Failed to delete job".to_string()));
                    browser::sleep_ms(3000).await;
                    action_error.set(None);
                }
            }
        });
    };

    let on_status = move |(job_id, user_id, status): (String, String, ApplicationStatus)| {
        action_error.set(None);

        #[cfg(feature = "web")]
        spawn(async move {
            let update = StatusUpdateDto { status };
            match update_application_status(&job_id, &user_id, &update).await {
                Ok(()) => {
                    if let LoadState::Loaded(list) = &mut *jobs.write() {
                        set_applicant_status(list, &job_id, &user_id, status);
                    }
                    toast.set(Some(format!("Status updated to {}", status.label())));
                    browser::sleep_ms(3000).await;
                    toast.set(None);
                }
                Err(err) => {
                    tracing::error!("Failed to update application status: {err}");
                    action_error.set(Some("Failed to update status".to_string()));
                    browser::sleep_ms(3000).await;
                    action_error.set(None);
                }
            }
        });
    };

    let state = jobs.read();
    let listings = state.data().map(Vec::as_slice).unwrap_or_default();
    let tab = active_tab();

    let banner = toast
        .read()
        .clone()
        .map(|message| rsx!(SuccessAlert { message }));
    let error_banner = action_error
        .read()
        .clone()
        .map(|message| rsx!(ErrorAlert { message }));
    let load_error = state
        .error()
        .map(|_| rsx!(ErrorAlert { message: "Failed to fetch jobs" }));

    let postings_class = if tab == AdminTab::Postings {
        "btn btn-sm btn-primary"
    } else {
        "btn btn-sm btn-ghost"
    };
    let applications_class = if tab == AdminTab::Applications {
        "btn btn-sm btn-primary"
    } else {
        "btn btn-sm btn-ghost"
    };
    let add_button = (tab == AdminTab::Postings).then(|| {
        rsx!(
            button { class: "btn btn-primary gap-2", onclick: on_add,
                Icon { width: 16, height: 16, icon: FaPlus }
                "Add Job"
            }
        )
    });

    let pane = if state.is_loading() {
        rsx!(Spinner {})
    } else {
        match tab {
            AdminTab::Postings => rsx!(
                if listings.is_empty() && state.error().is_none() {
                    EmptyNotice {
                        title: "No job postings yet.",
                        hint: "Use Add Job to publish your first posting.",
                    }
                }
                div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                    {listings.iter().map(|job| rsx!(
                        PostingCard {
                            key: "{job.id}",
                            job: job.clone(),
                            on_edit,
                            on_delete,
                        }
                    ))}
                }
            ),
            AdminTab::Applications => {
                let selected_id = selected_job.read().clone();
                let detail = selected_id
                    .as_ref()
                    .and_then(|job_id| listings.iter().find(|job| &job.id == job_id))
                    .map(|job| rsx!(ApplicantPane { job: job.clone(), on_status }))
                    .unwrap_or_else(|| {
                        rsx!(
                            div { class: "card bg-base-200 shadow-md h-full",
                                div { class: "card-body items-center justify-center text-center opacity-60 min-h-[16rem]",
                                    span { class: "opacity-50",
                                        Icon { width: 48, height: 48, icon: FaUsers }
                                    }
                                    p { class: "mt-3", "Select a job to view applicants" }
                                }
                            }
                        )
                    });

                rsx!(
                    div { class: "grid grid-cols-1 md:grid-cols-3 gap-6 items-start",
                        div { class: "card bg-base-200 shadow-md",
                            div { class: "card-body p-4",
                                h3 { class: "font-bold text-lg px-2", "Select Job Role" }
                                div { class: "flex flex-col gap-2 mt-2",
                                    {listings.iter().map(|job| {
                                        let row_class = if selected_id.as_deref() == Some(job.id.as_str()) {
                                            "flex items-center gap-3 p-3 rounded-box text-left bg-primary text-primary-content"
                                        } else {
                                            "flex items-center gap-3 p-3 rounded-box text-left hover:bg-base-300"
                                        };
                                        let picked = job.id.clone();
                                        let count = job.applicants.len();
                                        rsx!(
                                            button {
                                                key: "{job.id}",
                                                class: "{row_class}",
                                                onclick: move |_| selected_job.set(Some(picked.clone())),
                                                div { class: "flex-1 overflow-hidden",
                                                    p { class: "font-bold text-sm truncate", "{job.title}" }
                                                    p { class: "text-xs opacity-70 truncate", "{job.company}" }
                                                }
                                                span { class: "badge badge-sm", "{count}" }
                                            }
                                        )
                                    })}
                                }
                            }
                        }
                        div { class: "md:col-span-2", {detail} }
                    }
                )
            }
        }
    };

    let modal = modal_open().then(|| {
        rsx!(
            JobFormModal {
                form,
                editing: editing.read().is_some(),
                saving: saving(),
                error: save_error.read().clone(),
                on_close: move |_| modal_open.set(false),
                on_save,
            }
        )
    });

    rsx!(
        Title { "Placement Admin | Makjuz Academy" }

        div { class: "flex flex-col md:flex-row md:items-start justify-between gap-4 mb-6",
            div {
                h1 { class: "text-3xl font-bold", "Placement Admin" }
                div { class: "flex gap-2 mt-4",
                    button {
                        class: "{postings_class}",
                        onclick: move |_| active_tab.set(AdminTab::Postings),
                        "Job Postings"
                    }
                    button {
                        class: "{applications_class}",
                        onclick: move |_| active_tab.set(AdminTab::Applications),
                        "Applications"
                    }
                }
            }
            {add_button}
        }

        {banner}
        {error_banner}
        {load_error}

        {pane}
        {modal}
    )
}

#[component]
fn PostingCard(job: JobDto, on_edit: EventHandler<JobDto>, on_delete: EventHandler<String>) -> Element {
    let chip_class = if job.is_active {
        "badge badge-success"
    } else {
        "badge badge-error"
    };
    let chip_label = if job.is_active { "Active" } else { "Closed" };
    let applicant_count = job.applicants.len();
    let edited = job.clone();
    let job_id = job.id.clone();

    rsx!(
        div { class: "card bg-base-200 shadow-md",
            div { class: "card-body",
                div { class: "flex justify-between items-start",
                    div {
                        h3 { class: "text-lg font-bold", "{job.title}" }
                        p { class: "text-sm opacity-60 flex items-center gap-1",
                            Icon { width: 12, height: 12, icon: FaBriefcase }
                            "{job.company}"
                        }
                    }
                    span { class: "{chip_class}", "{chip_label}" }
                }

                p { class: "text-xs opacity-60 mt-2", "{job.role} • {job.job_type}" }
                div { class: "flex items-center gap-2 mt-1 text-xs opacity-70",
                    Icon { width: 14, height: 14, icon: FaUsers }
                    span { "{applicant_count} Applicants" }
                }

                div { class: "flex gap-2 mt-4 pt-4 border-t border-base-300",
                    button {
                        class: "btn btn-sm btn-outline btn-info flex-1 gap-2",
                        onclick: move |_| on_edit.call(edited.clone()),
                        Icon { width: 14, height: 14, icon: FaPenToSquare }
                        "Edit"
                    }
                    button {
                        class: "btn btn-sm btn-outline btn-error",
                        onclick: move |_| on_delete.call(job_id.clone()),
                        Icon { width: 14, height: 14, icon: FaTrashCan }
                    }
                }
            }
        }
    )
}

#[component]
fn ApplicantPane(
    job: JobDto,
    on_status: EventHandler<(String, String, ApplicationStatus)>,
) -> Element {
    let rows = if job.applicants.is_empty() {
        rsx!(p { class: "opacity-60 text-center py-10", "No applicants yet." })
    } else {
        rsx!(
            div { class: "flex flex-col gap-3",
                {job.applicants.iter().map(|applicant| rsx!(
                    ApplicantRow {
                        key: "{applicant.user.id}",
                        job_id: job.id.clone(),
                        applicant: applicant.clone(),
                        on_status,
                    }
                ))}
            }
        )
    };

    rsx!(
        div { class: "card bg-base-200 shadow-md",
            div { class: "card-body",
                h3 { class: "font-bold text-xl mb-2", "Applicants for {job.title}" }
                {rows}
            }
        }
    )
}

#[component]
fn ApplicantRow(
    job_id: String,
    applicant: ApplicantDto,
    on_status: EventHandler<(String, String, ApplicationStatus)>,
) -> Element {
    let applied = format_date(&applicant.applied_at);
    let current = applicant.status.label();
    let select_class = match applicant.status {
        ApplicationStatus::Hired => "select select-bordered select-sm select-success",
        ApplicationStatus::Rejected => "select select-bordered select-sm select-error",
        _ => "select select-bordered select-sm",
    };
    let user_id = applicant.user.id.clone();

    rsx!(
        div { class: "flex flex-col sm:flex-row sm:items-center justify-between gap-3 p-4 rounded-box bg-base-100 border border-base-300",
            div {
                h4 { class: "font-bold", "{applicant.user.name}" }
                p { class: "text-xs opacity-60", "{applicant.user.email}" }
                div { class: "flex gap-2 mt-2",
                    span { class: "badge badge-success badge-outline badge-sm",
                        "Match: {applicant.match_score}%"
                    }
                    span { class: "badge badge-info badge-outline badge-sm",
                        "Applied: {applied}"
                    }
                }
            }
            select {
                class: "{select_class}",
                value: "{current}",
                onchange: move |event| {
                    if let Some(status) = status_from_value(&event.value()) {
                        on_status.call((job_id.clone(), user_id.clone(), status));
                    }
                },
                {STATUS_CHOICES.iter().map(|(status, short)| {
                    let value = status.label();
                    rsx!(option { key: "{value}", value: "{value}", "{short}" })
                })}
            }
        }
    )
}

#[component]
fn JobFormModal(
    mut form: Signal<JobForm>,
    editing: bool,
    saving: bool,
    error: Option<String>,
    on_close: EventHandler<()>,
    on_save: EventHandler<()>,
) -> Element {
    let current = form.read().clone();
    let heading = if editing { "Edit Job" } else { "Post New Job" };
    let submit_label = if saving { "Saving..." } else { "Save Job" };
    let alert = error.map(|message| rsx!(ErrorAlert { message }));

    rsx!(
        div { class: "modal modal-open",
            div { class: "modal-box max-w-3xl",
                button {
                    class: "btn btn-sm btn-circle btn-ghost absolute right-3 top-3",
                    onclick: move |_| on_close.call(()),
                    Icon { width: 16, height: 16, icon: FaXmark }
                }

                h2 { class: "text-2xl font-bold mb-4", "{heading}" }

                {alert}

                div { class: "flex flex-col gap-4",
                    div { class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                        div {
                            label { class: "label",
                                span { class: "label-text font-medium", "Job Title" }
                            }
                            input {
                                class: "input input-bordered w-full",
                                r#type: "text",
                                placeholder: "e.g. Senior React Developer",
                                value: "{current.title}",
                                oninput: move |event| form.write().title = event.value(),
                            }
                        }
                        div {
                            label { class: "label",
                                span { class: "label-text font-medium", "Company Name" }
                            }
                            input {
                                class: "input input-bordered w-full",
                                r#type: "text",
                                placeholder: "e.g. TechCorp Inc.",
                                value: "{current.company}",
                                oninput: move |event| form.write().company = event.value(),
                            }
                        }
                    }

                    div { class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                        div {
                            label { class: "label",
                                span { class: "label-text font-medium", "Role Category" }
                            }
                            select {
                                class: "select select-bordered w-full",
                                value: "{current.role}",
                                onchange: move |event| form.write().role = event.value(),
                                {ROLE_OPTIONS.iter().map(|choice| rsx!(
                                    option { key: "{choice}", value: "{choice}", "{choice}" }
                                ))}
                            }
                        }
                        div {
                            label { class: "label",
                                span { class: "label-text font-medium", "Job Type" }
                            }
                            select {
                                class: "select select-bordered w-full",
                                value: "{current.job_type}",
                                onchange: move |event| form.write().job_type = event.value(),
                                {TYPE_OPTIONS.iter().map(|choice| rsx!(
                                    option { key: "{choice}", value: "{choice}", "{choice}" }
                                ))}
                            }
                        }
                    }

                    div { class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                        div {
                            label { class: "label",
                                span { class: "label-text font-medium", "Min Salary" }
                            }
                            input {
                                class: "input input-bordered w-full",
                                r#type: "number",
                                placeholder: "e.g. 500000",
                                value: "{current.salary_min}",
                                oninput: move |event| form.write().salary_min = event.value(),
                            }
                        }
                        div {
                            label { class: "label",
                                span { class: "label-text font-medium", "Max Salary" }
                            }
                            input {
                                class: "input input-bordered w-full",
                                r#type: "number",
                                placeholder: "e.g. 1500000",
                                value: "{current.salary_max}",
                                oninput: move |event| form.write().salary_max = event.value(),
                            }
                        }
                    }

                    div {
                        label { class: "label",
                            span { class: "label-text font-medium", "Application Link (Optional)" }
                        }
                        input {
                            class: "input input-bordered w-full",
                            r#type: "url",
                            placeholder: "https://company.com/careers/apply/123",
                            value: "{current.apply_link}",
                            oninput: move |event| form.write().apply_link = event.value(),
                        }
                        p { class: "text-xs opacity-60 mt-1",
                            "If provided, the 'Apply' button will redirect here."
                        }
                    }

                    div {
                        label { class: "label",
                            span { class: "label-text font-medium", "Job Description" }
                        }
                        textarea {
                            class: "textarea textarea-bordered w-full h-24",
                            placeholder: "Detailed job description...",
                            value: "{current.description}",
                            oninput: move |event| form.write().description = event.value(),
                        }
                    }

                    div {
                        label { class: "label",
                            span { class: "label-text font-medium", "Requirements (One per line)" }
                        }
                        textarea {
                            class: "textarea textarea-bordered w-full h-24",
                            placeholder: "- React.js experience\n- Knowledge of Node.js",
                            value: "{current.requirements}",
                            oninput: move |event| form.write().requirements = event.value(),
                        }
                    }

                    div {
                        label { class: "label",
                            span { class: "label-text font-medium", "Tech Stack (Comma separated)" }
                        }
                        input {
                            class: "input input-bordered w-full",
                            r#type: "text",
                            placeholder: "React, Node.js, MongoDB, AWS",
                            value: "{current.tech_stack}",
                            oninput: move |event| form.write().tech_stack = event.value(),
                        }
                    }

                    div { class: "flex gap-3 pt-2",
                        button {
                            class: "btn btn-ghost flex-1",
                            onclick: move |_| on_close.call(()),
                            "Cancel"
                        }
                        button {
                            class: "btn btn-primary flex-1",
                            disabled: saving,
                            onclick: move |_| on_save.call(()),
                            "{submit_label}"
                        }
                    }
                }
            }
            div { class: "modal-backdrop", onclick: move |_| on_close.call(()) }
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn posting() -> JobDto {
        serde_json::from_value(json!({
            "_id": "j1",
            "title": "Senior React Developer",
            "company": "TechCorp Inc.",
            "role": "Frontend",
            "type": "Remote",
            "salaryRange": { "min": 500000, "max": 1500000, "currency": "INR" },
            "requirements": ["3+ years of React", "REST API experience"],
            "techStack": ["React", "Node.js"],
            "description": "Build and maintain the customer portal.",
            "applyLink": "https://techcorp.example/careers/42",
            "createdAt": "2025-06-01T10:00:00Z",
        }))
        .unwrap()
    }

    /// Test prefilling the form from a stored posting.
    ///
    /// Expected: list fields flatten to newline and comma separated text,
    /// salary bounds become editable strings.
    #[test]
    fn edit_form_mirrors_the_posting() {
        let form = JobForm::from_job(&posting());

        assert_eq!(form.title, "Senior React Developer");
        assert_eq!(form.role, "Frontend");
        assert_eq!(form.job_type, "Remote");
        assert_eq!(form.salary_min, "500000");
        assert_eq!(form.salary_max, "1500000");
        assert_eq!(form.requirements, "3+ years of React\nREST API experience");
        assert_eq!(form.tech_stack, "React, Node.js");
        assert_eq!(form.apply_link, "https://techcorp.example/careers/42");
    }

    /// Test building the request body from entered text.
    ///
    /// Expected: blank requirement lines are dropped, tech stack entries are
    /// trimmed, salaries parse into the INR range.
    #[test]
    fn payload_splits_and_parses_entered_text() {
        let mut form = JobForm::from_job(&posting());
        form.requirements = "- React.js experience\n\n- Knowledge of Node.js\n   ".to_string();
        form.tech_stack = "React, Node.js , MongoDB,".to_string();

        let payload = form.to_payload();

        assert_eq!(
            payload.requirements,
            vec!["- React.js experience", "- Knowledge of Node.js"]
        );
        assert_eq!(payload.tech_stack, vec!["React", "Node.js", "MongoDB"]);
        assert_eq!(payload.salary_range.min, 500_000);
        assert_eq!(payload.salary_range.max, 1_500_000);
        assert_eq!(payload.salary_range.currency, "INR");
    }

    /// Test salary parsing for blank and non-numeric input.
    ///
    /// Expected: both fall back to zero rather than failing the submit.
    #[test]
    fn unparseable_salary_falls_back_to_zero() {
        let mut form = JobForm::default();
        form.salary_min = String::new();
        form.salary_max = "lots".to_string();

        let payload = form.to_payload();

        assert_eq!(payload.salary_range.min, 0);
        assert_eq!(payload.salary_range.max, 0);
    }

    /// Test the blank form used for new postings.
    ///
    /// Expected: role and type carry the most common defaults, everything
    /// else starts empty.
    #[test]
    fn new_postings_default_to_fullstack_full_time() {
        let form = JobForm::default();

        assert_eq!(form.role, "Fullstack");
        assert_eq!(form.job_type, "Full-time");
        assert!(form.title.is_empty());
        assert!(form.requirements.is_empty());
    }

    /// Test mapping dropdown values back to pipeline statuses.
    ///
    /// Expected: every wire label resolves to its status, unknown values
    /// resolve to nothing.
    #[test]
    fn dropdown_values_resolve_to_statuses() {
        assert_eq!(
            status_from_value("Under Review"),
            Some(ApplicationStatus::UnderReview)
        );
        assert_eq!(
            status_from_value("Interview Scheduled"),
            Some(ApplicationStatus::InterviewScheduled)
        );
        assert_eq!(status_from_value("Hired"), Some(ApplicationStatus::Hired));
        assert_eq!(status_from_value("On Hold"), None);
    }
}
