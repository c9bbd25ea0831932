use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaBriefcase, FaCircleUser, FaLightbulb, FaMagnifyingGlass, FaMicrophone,
};
use dioxus_free_icons::Icon;

use crate::client::components::placement::{
    JobBoard, MockInterviews, MyApplications, ResumeProfile, SoftSkills,
};
use crate::client::components::{Footer, Page};

#[derive(Clone, Copy, PartialEq, Eq)]
enum PlacementTab {
    Jobs,
    Applications,
    Interviews,
    Resume,
    SoftSkills,
}

const PLACEMENT_TABS: [(PlacementTab, &str); 5] = [
    (PlacementTab::Jobs, "Job Board"),
    (PlacementTab::Applications, "My Applications"),
    (PlacementTab::Interviews, "Mock Interviews"),
    (PlacementTab::Resume, "Resume Profile"),
    (PlacementTab::SoftSkills, "Soft Skills"),
];

fn tab_icon(tab: PlacementTab) -> Element {
    match tab {
        PlacementTab::Jobs => rsx!(Icon { width: 16, height: 16, icon: FaBriefcase }),
        PlacementTab::Applications => rsx!(Icon { width: 16, height: 16, icon: FaMagnifyingGlass }),
        PlacementTab::Interviews => rsx!(Icon { width: 16, height: 16, icon: FaMicrophone }),
        PlacementTab::Resume => rsx!(Icon { width: 16, height: 16, icon: FaCircleUser }),
        PlacementTab::SoftSkills => rsx!(Icon { width: 16, height: 16, icon: FaLightbulb }),
    }
}

/// Career portal shell. Each tab is its own screen-sized component that
/// fetches on mount when it becomes active.
#[component]
pub fn Placement() -> Element {
    let mut tab = use_signal(|| PlacementTab::Jobs);
    let active = tab();

    let pane = match active {
        PlacementTab::Jobs => rsx!(JobBoard {}),
        PlacementTab::Applications => rsx!(MyApplications {}),
        PlacementTab::Interviews => rsx!(MockInterviews {}),
        PlacementTab::Resume => rsx!(ResumeProfile {}),
        PlacementTab::SoftSkills => rsx!(SoftSkills {}),
    };

    rsx!(
        Title { "Placement | Makjuz Academy" }
        Page {
            section { class: "max-w-7xl mx-auto px-4 py-10",
                div { class: "text-center mb-10",
                    h1 { class: "text-4xl md:text-5xl font-bold",
                        "Your "
                        span { class: "text-primary", "Career Portal" }
                    }
                    p { class: "mt-3 text-lg opacity-70 max-w-2xl mx-auto",
                        "Prepare for interviews, build your resume, and land your dream job with our comprehensive placement support."
                    }
                }

                div { class: "flex justify-center flex-wrap gap-2 mb-10 p-2 rounded-box bg-base-200",
                    {PLACEMENT_TABS.iter().map(|(placement_tab, label)| {
                        let class = if *placement_tab == active {
                            "btn btn-sm md:btn-md btn-primary gap-2"
                        } else {
                            "btn btn-sm md:btn-md btn-ghost gap-2"
                        };
                        let chosen = *placement_tab;
                        rsx!(
                            button {
                                key: "{label}",
                                class: "{class}",
                                onclick: move |_| tab.set(chosen),
                                {tab_icon(chosen)}
                                "{label}"
                            }
                        )
                    })}
                }

                div { class: "min-h-[400px]", {pane} }
            }
            Footer {}
        }
    )
}
