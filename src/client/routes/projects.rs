use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCode, FaDownload, FaFileLines, FaUsers};
use dioxus_free_icons::Icon;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::api::projects::{get_project_resources, request_download};
use crate::client::components::{EmptyNotice, ErrorAlert, Footer, Page, Spinner, SuccessAlert};
use crate::client::loader::LoadState;
#[cfg(feature = "web")]
use crate::client::loader::load_into;
#[cfg(feature = "web")]
use crate::client::util::browser;
use crate::model::project::{ProjectResourceDto, ResourceKind};

#[derive(Clone, Copy, PartialEq, Eq)]
enum HubTab {
    Templates,
    Docs,
    Mentorship,
}

const HUB_TABS: [(HubTab, &str); 3] = [
    (HubTab::Templates, "Project Templates"),
    (HubTab::Docs, "Documentation"),
    (HubTab::Mentorship, "Mentorship"),
];

/// Resources of one kind, in listing order. Guides are reserved for a
/// future tab and show up in neither current one.
pub fn resources_of_kind(
    resources: &[ProjectResourceDto],
    kind: ResourceKind,
) -> Vec<ProjectResourceDto> {
    resources
        .iter()
        .filter(|resource| resource.kind == kind)
        .cloned()
        .collect()
}

/// Final year project hub: downloadable templates and documentation plus a
/// mentorship booking shell.
#[component]
pub fn Projects() -> Element {
    let resources = use_signal(LoadState::<Vec<ProjectResourceDto>>::default);
    let mut tab = use_signal(|| HubTab::Templates);
    let mut toast = use_signal(|| None::<String>);
    let mut download_error = use_signal(|| None::<String>);

    #[cfg(feature = "web")]
    let _fetch = use_resource(move || load_into(resources, get_project_resources()));

    let on_download = move |resource: ProjectResourceDto| {
        download_error.set(None);

        #[cfg(feature = "web")]
        spawn(async move {
            match request_download(&resource.id).await {
                Ok(link) => match link.url {
                    Some(url) => browser::open_in_new_tab(&url),
                    None => download_error.set(Some("Download URL not found.".to_string())),
                },
                Err(err) => {
                    tracing::error!("Failed to download resource: {err}");
                    download_error.set(Some("Failed to download resource.".to_string()));
                }
            }
        });
    };

    let on_mentorship = move |_| {
        toast.set(Some("Mentorship request sent! We will contact you.".to_string()));
        #[cfg(feature = "web")]
        spawn(async move {
            browser::sleep_ms(3000).await;
            toast.set(None);
        });
    };

    let state = resources.read();
    let all = state.data().map(Vec::as_slice).unwrap_or_default();
    let active = tab();

    let banner = toast
        .read()
        .clone()
        .map(|message| rsx!(SuccessAlert { message }));
    let load_error = state
        .error()
        .map(|_| rsx!(ErrorAlert { message: "Failed to fetch project resources." }));
    let download_alert = download_error
        .read()
        .clone()
        .map(|message| rsx!(ErrorAlert { message }));

    let pane = match active {
        HubTab::Templates => {
            let templates = resources_of_kind(all, ResourceKind::Template);
            if templates.is_empty() {
                rsx!(
                    EmptyNotice {
                        title: "No project templates available at the moment.",
                        hint: "New templates land alongside every cohort.",
                    }
                )
            } else {
                rsx!(
                    div { class: "grid md:grid-cols-2 lg:grid-cols-3 gap-6",
                        {templates.iter().map(|resource| rsx!(
                            TemplateCard {
                                key: "{resource.id}",
                                resource: resource.clone(),
                                on_download,
                            }
                        ))}
                    }
                )
            }
        }
        HubTab::Docs => {
            let docs = resources_of_kind(all, ResourceKind::Document);
            if docs.is_empty() {
                rsx!(
                    EmptyNotice {
                        title: "No documentation resources available.",
                        hint: "Report formats and guides are on their way.",
                    }
                )
            } else {
                rsx!(
                    div { class: "grid md:grid-cols-2 gap-4",
                        {docs.iter().map(|resource| rsx!(
                            DocumentRow {
                                key: "{resource.id}",
                                resource: resource.clone(),
                                on_download,
                            }
                        ))}
                    }
                )
            }
        }
        HubTab::Mentorship => rsx!(
            div { class: "border border-dashed border-base-300 rounded-box py-12 text-center",
                div { class: "opacity-40 flex justify-center mb-4",
                    Icon { width: 48, height: 48, icon: FaUsers }
                }
                h3 { class: "text-2xl font-bold", "Schedule a Code Review" }
                p { class: "opacity-70 max-w-lg mx-auto mt-2 mb-6",
                    "Get 1-on-1 feedback from senior developers on your project architecture and code quality."
                }
                button {
                    class: "btn btn-primary",
                    onclick: on_mentorship,
                    "Book a Session"
                }
            }
        ),
    };

    rsx!(
        Title { "Project Hub | Makjuz Academy" }
        Page {
            section { class: "max-w-6xl mx-auto px-4 py-10 flex flex-col gap-8",
                div { class: "text-center",
                    h1 { class: "text-4xl md:text-5xl font-bold",
                        "Final Year "
                        span { class: "text-primary", "Project Hub" }
                    }
                    p { class: "mt-3 text-lg opacity-70 max-w-2xl mx-auto",
                        "Everything you need to ace your final year project: Ideas, Templates, Documentation, and Mentor Support."
                    }
                }

                div { class: "flex flex-wrap justify-center gap-3",
                    {HUB_TABS.iter().map(|(hub_tab, label)| {
                        let class = if *hub_tab == active {
                            "btn btn-primary rounded-full"
                        } else {
                            "btn btn-ghost border border-base-300 rounded-full"
                        };
                        let chosen = *hub_tab;
                        rsx!(
                            button {
                                key: "{label}",
                                class: "{class}",
                                onclick: move |_| tab.set(chosen),
                                "{label}"
                            }
                        )
                    })}
                }

                {banner}
                {load_error}
                {download_alert}

                if state.is_loading() {
                    Spinner {}
                }

                if !state.is_loading() && state.error().is_none() {
                    {pane}
                }
            }
            Footer {}
        }
    )
}

#[component]
fn TemplateCard(resource: ProjectResourceDto, on_download: EventHandler<ProjectResourceDto>) -> Element {
    let clicked = resource.clone();

    rsx!(
        div { class: "card bg-base-200 shadow-md",
            div { class: "card-body",
                div { class: "w-12 h-12 rounded-box bg-secondary/10 text-secondary flex items-center justify-center",
                    Icon { width: 24, height: 24, icon: FaCode }
                }
                h3 { class: "text-xl font-bold mt-2", "{resource.title}" }
                div { class: "flex flex-wrap gap-2",
                    {resource.tech_stack.iter().map(|tech| rsx!(
                        span { class: "badge badge-ghost badge-sm font-mono", "{tech}" }
                    ))}
                }
                p { class: "text-sm opacity-70 line-clamp-3 mt-1", "{resource.description}" }
                button {
                    class: "btn btn-outline btn-secondary w-full mt-4 gap-2",
                    onclick: move |_| on_download.call(clicked.clone()),
                    Icon { width: 16, height: 16, icon: FaDownload }
                    "Download Template"
                }
            }
        }
    )
}

#[component]
fn DocumentRow(resource: ProjectResourceDto, on_download: EventHandler<ProjectResourceDto>) -> Element {
    let clicked = resource.clone();

    rsx!(
        div { class: "flex items-center justify-between gap-4 p-5 rounded-box bg-base-200",
            div { class: "flex items-center gap-4",
                div { class: "text-info",
                    Icon { width: 32, height: 32, icon: FaFileLines }
                }
                div {
                    h3 { class: "font-bold", "{resource.title}" }
                    p { class: "text-xs opacity-60", "Downloads: {resource.downloads}" }
                }
            }
            button {
                class: "btn btn-ghost btn-circle",
                onclick: move |_| on_download.call(clicked.clone()),
                Icon { width: 20, height: 20, icon: FaDownload }
            }
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn resource(id: &str, kind: &str) -> ProjectResourceDto {
        serde_json::from_value(json!({
            "_id": id,
            "title": "MERN Starter",
            "type": kind,
        }))
        .unwrap()
    }

    /// Test the tab filter keeps only resources of the requested kind.
    /// Expected: templates and documents split cleanly.
    #[test]
    fn kind_filter_splits_templates_and_documents() {
        let all = vec![
            resource("r1", "Template"),
            resource("r2", "Document"),
            resource("r3", "Template"),
        ];

        let templates = resources_of_kind(&all, ResourceKind::Template);
        let docs = resources_of_kind(&all, ResourceKind::Document);

        assert_eq!(templates.len(), 2);
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].id, "r2");
    }

    /// Test guides stay off both visible tabs.
    /// Expected: a guide resource matches neither filter.
    #[test]
    fn guides_belong_to_neither_tab() {
        let all = vec![resource("r1", "Guide")];

        assert!(resources_of_kind(&all, ResourceKind::Template).is_empty());
        assert!(resources_of_kind(&all, ResourceKind::Document).is_empty());
    }
}
