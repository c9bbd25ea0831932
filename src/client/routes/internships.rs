use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaArrowRight, FaBriefcase, FaBuilding, FaLocationDot, FaXmark,
};
use dioxus_free_icons::Icon;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::api::internships::{apply_to_internship, get_internships};
use crate::client::components::{EmptyNotice, ErrorAlert, Footer, Page, Spinner, SuccessAlert};
use crate::client::loader::LoadState;
#[cfg(feature = "web")]
use crate::client::loader::load_into;
#[cfg(feature = "web")]
use crate::client::util::browser;
use crate::model::internship::{InternshipDto, InternshipStatus};

/// Internship listings with an in-app application flow. Closed postings
/// stay visible but cannot be applied to.
#[component]
pub fn Internships() -> Element {
    let internships = use_signal(LoadState::<Vec<InternshipDto>>::default);
    let mut selected = use_signal(|| None::<InternshipDto>);
    let mut cover_letter = use_signal(String::new);
    let mut applying = use_signal(|| false);
    let mut toast = use_signal(|| None::<String>);
    let mut apply_error = use_signal(|| None::<String>);

    #[cfg(feature = "web")]
    let _fetch = use_resource(move || load_into(internships, get_internships()));

    let on_open = move |internship: InternshipDto| {
        cover_letter.set(String::new());
        apply_error.set(None);
        selected.set(Some(internship));
    };

    let on_submit = move |_| {
        #[cfg(feature = "web")]
        {
            let Some(internship) = selected.read().clone() else {
                return;
            };
            let letter = cover_letter.read().clone();
            applying.set(true);
            spawn(async move {
                match apply_to_internship(&internship.id, &letter).await {
                    Ok(()) => {
                        toast.set(Some(format!(
                            "Successfully applied to {}!",
                            internship.company
                        )));
                        selected.set(None);
                        cover_letter.set(String::new());
                        applying.set(false);
                        browser::sleep_ms(3000).await;
                        toast.set(None);
                    }
                    Err(err) => {
                        tracing::error!("Failed to apply to internship: {err}");
                        apply_error.set(Some(err.message()));
                        applying.set(false);
                    }
                }
            });
        }
    };

    let state = internships.read();
    let listings = state.data().map(Vec::as_slice).unwrap_or_default();

    let banner = toast
        .read()
        .clone()
        .map(|message| rsx!(SuccessAlert { message }));
    let load_error = state
        .error()
        .map(|_| rsx!(ErrorAlert { message: "Failed to load internships." }));
    let modal = selected.read().clone().map(|internship| {
        rsx!(
            ApplyModal {
                internship,
                cover_letter,
                applying: applying(),
                error: apply_error.read().clone(),
                on_close: move |_| selected.set(None),
                on_submit,
            }
        )
    });

    rsx!(
        Title { "Internships | Makjuz Academy" }
        Page {
            section { class: "max-w-6xl mx-auto px-4 py-10 flex flex-col gap-8",
                div { class: "text-center",
                    h1 { class: "text-4xl md:text-5xl font-bold",
                        "Launch Your Career with "
                        span { class: "text-primary", "Premium Internships" }
                    }
                    p { class: "mt-3 text-lg opacity-70 max-w-2xl mx-auto",
                        "Gain real-world experience, work on live projects, and get mentored by industry experts."
                    }
                }

                {banner}
                {load_error}

                if state.is_loading() {
                    Spinner {}
                }

                if !state.is_loading() && state.error().is_none() && listings.is_empty() {
                    EmptyNotice {
                        title: "No internships available right now.",
                        hint: "New openings are added every week, check back soon.",
                    }
                }

                div { class: "grid md:grid-cols-2 lg:grid-cols-3 gap-6",
                    {listings.iter().map(|internship| rsx!(
                        InternshipCard {
                            key: "{internship.id}",
                            internship: internship.clone(),
                            on_apply: on_open,
                        }
                    ))}
                }
            }
            Footer {}
        }
        {modal}
    )
}

#[component]
fn InternshipCard(internship: InternshipDto, on_apply: EventHandler<InternshipDto>) -> Element {
    let closed = internship.status == InternshipStatus::Closed;
    let chip_class = if closed {
        "badge badge-error badge-outline"
    } else {
        "badge badge-success badge-outline"
    };
    let action_label = if closed { "Applications Closed" } else { "Apply Now" };
    let status_label = internship.status.label();
    let opened = internship.clone();

    rsx!(
        div { class: "card bg-base-200 shadow-md hover:shadow-lg transition-shadow",
            div { class: "card-body",
                div { class: "flex justify-between items-start",
                    div { class: "p-3 rounded-box bg-info/10 text-info",
                        Icon { width: 24, height: 24, icon: FaBuilding }
                    }
                    span { class: "{chip_class}", "{status_label}" }
                }

                h3 { class: "text-xl font-bold mt-2", "{internship.role}" }
                p { class: "text-sm opacity-60", "{internship.company}" }

                div { class: "flex flex-wrap gap-3 text-xs opacity-70 mt-2",
                    span { class: "flex items-center gap-1",
                        Icon { width: 12, height: 12, icon: FaLocationDot }
                        "{internship.location}"
                    }
                    span { class: "flex items-center gap-1",
                        Icon { width: 12, height: 12, icon: FaBriefcase }
                        "{internship.duration}"
                    }
                    span { class: "text-success font-medium", "{internship.stipend}" }
                }

                p { class: "text-sm opacity-80 line-clamp-2 mt-2", "{internship.description}" }

                div { class: "flex flex-wrap gap-2 mt-2",
                    {internship.tags.iter().map(|tag| rsx!(
                        span { class: "badge badge-ghost badge-sm", "{tag}" }
                    ))}
                }

                button {
                    class: "btn btn-primary w-full mt-4 gap-2",
                    disabled: closed,
                    onclick: move |_| on_apply.call(opened.clone()),
                    "{action_label}"
                    if !closed {
                        Icon { width: 14, height: 14, icon: FaArrowRight }
                    }
                }
            }
        }
    )
}

#[component]
fn ApplyModal(
    internship: InternshipDto,
    mut cover_letter: Signal<String>,
    applying: bool,
    error: Option<String>,
    on_close: EventHandler<()>,
    on_submit: EventHandler<()>,
) -> Element {
    let submit_label = if applying { "Submitting..." } else { "Submit Application" };
    let alert = error.map(|message| rsx!(ErrorAlert { message }));

    rsx!(
        div { class: "modal modal-open",
            div { class: "modal-box max-w-lg",
                button {
                    class: "btn btn-sm btn-circle btn-ghost absolute right-3 top-3",
                    onclick: move |_| on_close.call(()),
                    Icon { width: 16, height: 16, icon: FaXmark }
                }

                h2 { class: "text-2xl font-bold", "Apply to {internship.company}" }
                p { class: "text-sm opacity-60 mt-1 mb-4",
                    "Fill out the details below to apply for the {internship.role} position."
                }

                {alert}

                div { class: "flex flex-col gap-4",
                    div {
                        span { class: "label-text font-medium", "Upload Resume (Optional)" }
                        div { class: "w-full p-3 mt-1 rounded-box border border-base-300 bg-base-100 text-center text-sm opacity-60",
                            "Profile Resume will be used"
                        }
                    }
                    div {
                        span { class: "label-text font-medium",
                            "Why should we hire you? (Cover Letter)"
                        }
                        textarea {
                            class: "textarea textarea-bordered w-full h-28 mt-1",
                            placeholder: "Briefly describe your skills and motivation...",
                            value: "{cover_letter}",
                            oninput: move |event| cover_letter.set(event.value()),
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
                            disabled: applying,
                            onclick: move |_| on_submit.call(()),
                            "{submit_label}"
                        }
                    }
                }
            }
            div { class: "modal-backdrop", onclick: move |_| on_close.call(()) }
        }
    )
}
