use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaDownload, FaFileLines, FaTrashCan};
use dioxus_free_icons::Icon;

#[cfg(feature = "web")]
use crate::client::api::placement::get_my_applications;
use crate::client::components::{EmptyNotice, ErrorAlert, Spinner};
#[cfg(feature = "web")]
use crate::client::loader::load_into;
use crate::client::loader::LoadState;
use crate::client::util::time::format_date;
use crate::model::placement::{ApplicationDto, ApplicationStatus};

/// Pipeline stages shown on the application timeline, in order.
pub const TIMELINE_STAGES: [ApplicationStatus; 4] = [
    ApplicationStatus::Applied,
    ApplicationStatus::UnderReview,
    ApplicationStatus::InterviewScheduled,
    ApplicationStatus::Hired,
];

/// Focus areas suggested when the backend sends no gap analysis for an
/// application.
const DEFAULT_SKILL_GAP: [&str; 3] = ["System Design", "GraphQL", "AWS"];

/// Counts behind the four summary cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ApplicationSummary {
    pub total: usize,
    pub interviews: usize,
    pub offers: usize,
    pub rejected: usize,
}

impl ApplicationSummary {
    pub fn from_applications(applications: &[ApplicationDto]) -> Self {
        let mut interviews = 0;
        let mut offers = 0;
        let mut rejected = 0;

        for application in applications {
            match application.status {
                ApplicationStatus::InterviewScheduled => interviews += 1,
                ApplicationStatus::Hired => offers += 1,
                ApplicationStatus::Rejected => rejected += 1,
                ApplicationStatus::Applied | ApplicationStatus::UnderReview => {}
            }
        }

        Self {
            total: applications.len(),
            interviews,
            offers,
            rejected,
        }
    }
}

/// Index of the last completed stage on the four stage pipeline. Rejected
/// parks at the first stage; the status chip carries the outcome.
pub fn timeline_stage_index(status: ApplicationStatus) -> usize {
    match status {
        ApplicationStatus::Applied => 0,
        ApplicationStatus::UnderReview => 1,
        ApplicationStatus::InterviewScheduled => 2,
        ApplicationStatus::Hired => 3,
        ApplicationStatus::Rejected => 0,
    }
}

/// daisyUI badge modifier for a pipeline status chip.
pub fn status_badge_class(status: ApplicationStatus) -> &'static str {
    match status {
        ApplicationStatus::Applied => "badge-info",
        ApplicationStatus::UnderReview => "badge-secondary",
        ApplicationStatus::InterviewScheduled => "badge-warning",
        ApplicationStatus::Hired => "badge-success",
        ApplicationStatus::Rejected => "badge-error",
    }
}

#[component]
pub fn MyApplications() -> Element {
    let applications = use_signal(LoadState::<Vec<ApplicationDto>>::default);
    let mut selected = use_signal(|| None::<ApplicationDto>);
    let mut note_input = use_signal(String::new);

    #[cfg(feature = "web")]
    let _fetch = use_resource(move || load_into(applications, get_my_applications()));

    let state = applications.read();
    let list = state.data().map(Vec::as_slice).unwrap_or_default();
    let summary = ApplicationSummary::from_applications(list);
    let selected_id = selected.read().as_ref().map(|app| app.job_id.clone());

    let load_error = state
        .error()
        .map(|error| rsx!(ErrorAlert { message: error.message() }));
    let detail = match selected.read().clone() {
        Some(application) => rsx!(ApplicationDetail { application, note_input }),
        None => rsx!(
            div { class: "h-full min-h-64 flex flex-col items-center justify-center gap-3 border border-dashed border-base-300 rounded-box p-12 opacity-60",
                Icon { width: 40, height: 40, icon: FaFileLines }
                p { "Select an application to view details" }
            }
        ),
    };

    rsx!(
        div { class: "flex flex-col gap-6",
            div { class: "grid grid-cols-2 md:grid-cols-4 gap-4",
                SummaryCard { label: "Total Applied", value: summary.total, accent: "text-info" }
                SummaryCard { label: "Interviews", value: summary.interviews, accent: "text-warning" }
                SummaryCard { label: "Offers", value: summary.offers, accent: "text-success" }
                SummaryCard { label: "Rejected", value: summary.rejected, accent: "text-error" }
            }

            if state.is_loading() {
                Spinner {}
            }
            {load_error}

            if !state.is_loading() && state.error().is_none() && list.is_empty() {
                EmptyNotice {
                    title: "No applications yet.",
                    hint: "Apply to a job from the job board to start tracking it here.",
                }
            }

            if !list.is_empty() {
                div { class: "grid md:grid-cols-3 gap-6",
                    div { class: "md:col-span-1 card bg-base-100 border border-base-300 overflow-hidden",
                        div { class: "p-4 border-b border-base-300 bg-base-200",
                            h3 { class: "font-bold text-lg", "Detailed List" }
                        }
                        div { class: "max-h-[600px] overflow-y-auto",
                            {list.iter().map(|application| {
                                let row = application.clone();
                                let note = row.notes.clone().unwrap_or_default();
                                let active = selected_id.as_deref() == Some(application.job_id.as_str());
                                let row_class = if active {
                                    "p-4 border-b border-base-300 cursor-pointer bg-primary/10 border-l-4 border-l-primary"
                                } else {
                                    "p-4 border-b border-base-300 cursor-pointer hover:bg-base-200"
                                };
                                let badge = status_badge_class(application.status);

                                rsx!(
                                    div {
                                        key: "{application.job_id}",
                                        class: "{row_class}",
                                        onclick: move |_| {
                                            note_input.set(note.clone());
                                            selected.set(Some(row.clone()));
                                        },
                                        h4 { class: "font-bold text-sm", "{application.title}" }
                                        p { class: "text-xs opacity-60 mb-2", "{application.company}" }
                                        div { class: "flex justify-between items-center",
                                            span { class: "badge badge-sm {badge}",
                                                {application.status.label()}
                                            }
                                            span { class: "text-xs font-mono opacity-60",
                                                {format_date(&application.applied_at)}
                                            }
                                        }
                                    }
                                )
                            })}
                        }
                    }

                    div { class: "md:col-span-2",
                        {detail}
                    }
                }
            }
        }
    )
}

#[component]
fn SummaryCard(label: &'static str, value: usize, accent: &'static str) -> Element {
    rsx!(
        div { class: "card bg-base-100 border border-base-300 shadow-sm",
            div { class: "card-body items-center p-4",
                span { class: "text-3xl font-bold {accent}", "{value}" }
                span { class: "text-xs opacity-60 uppercase tracking-wider font-semibold",
                    "{label}"
                }
            }
        }
    )
}

#[component]
fn ApplicationDetail(application: ApplicationDto, mut note_input: Signal<String>) -> Element {
    let current_stage = timeline_stage_index(application.status);
    let skill_gap: Vec<String> = if application.skill_gap.is_empty() {
        DEFAULT_SKILL_GAP.iter().map(|s| s.to_string()).collect()
    } else {
        application.skill_gap.clone()
    };

    rsx!(
        div { class: "card bg-base-100 border border-base-300",
            div { class: "card-body",
                div { class: "flex justify-between items-start",
                    div {
                        h2 { class: "text-2xl font-bold", "{application.title}" }
                        h3 { class: "text-lg opacity-60", "{application.company}" }
                    }
                    div { class: "text-right",
                        div { class: "text-3xl font-bold text-success", "{application.match_score}%" }
                        div { class: "text-xs opacity-60 uppercase tracking-wider", "Match Score" }
                    }
                }

                div { class: "mt-6 p-4 rounded-box bg-base-200",
                    h4 { class: "text-sm font-bold opacity-60 uppercase tracking-wider mb-4",
                        "Application Timeline"
                    }
                    ul { class: "steps w-full",
                        {TIMELINE_STAGES.iter().enumerate().map(|(index, stage)| {
                            let class = if index <= current_stage {
                                "step step-success"
                            } else {
                                "step"
                            };
                            rsx!(li { class: "{class}", "{stage.label()}" })
                        })}
                    }
                }

                div { class: "grid md:grid-cols-2 gap-6 mt-6",
                    div { class: "p-5 rounded-box border border-error/30 bg-error/5",
                        h4 { class: "font-bold text-error mb-2", "Skill Gap Analysis" }
                        p { class: "text-sm opacity-70 mb-3",
                            "Based on the job requirements, you should focus on improving:"
                        }
                        div { class: "flex flex-wrap gap-2",
                            {skill_gap.iter().map(|skill| rsx!(
                                span { class: "badge badge-error badge-outline", "{skill}" }
                            ))}
                        }
                        p { class: "text-xs opacity-60 mt-3 italic",
                            "\"Completing a System Design course could boost your match score to 92%\""
                        }
                    }
                    div { class: "p-5 rounded-box border border-warning/30 bg-warning/5",
                        h4 { class: "font-bold text-warning mb-2", "Personal Notes" }
                        textarea {
                            class: "textarea textarea-bordered w-full h-24 resize-none",
                            placeholder: "Add notes about interview questions, HR details, etc...",
                            value: "{note_input}",
                            oninput: move |event| note_input.set(event.value()),
                        }
                        button { class: "btn btn-ghost btn-xs mt-2 text-warning", "Save Note" }
                    }
                }

                div { class: "flex gap-4 mt-6 pt-4 border-t border-base-300",
                    button { class: "btn btn-neutral btn-sm",
                        Icon { width: 14, height: 14, icon: FaDownload }
                        "Offer Letter"
                    }
                    button { class: "btn btn-outline btn-error btn-sm ml-auto",
                        Icon { width: 14, height: 14, icon: FaTrashCan }
                        "Withdraw"
                    }
                }
            }
        }
    )
}
