use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaBars, FaBriefcase, FaChartLine, FaRightFromBracket, FaXmark,
};
use dioxus_free_icons::Icon;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::api::auth::logout;
use crate::client::components::Spinner;
use crate::client::router::Route;
use crate::client::store::user::UserState;

/// Chrome for the `/admin` nest: collapsible sidebar plus a scrollable main
/// pane. Renders the nested screen only once a session is established.
#[component]
pub fn AdminLayout() -> Element {
    let mut user_store = use_context::<Store<UserState>>();
    let mut open = use_signal(|| true);
    let navigator = use_navigator();

    let (fetched, session) = {
        let store = user_store.read();
        (store.fetched, store.user.clone())
    };
    if !fetched {
        return rsx!(
            div { class: "min-h-screen flex items-center justify-center",
                Spinner {}
            }
        );
    }
    let Some(user) = session else {
        return rsx!(
            div { class: "min-h-screen flex items-center justify-center",
                div { class: "card bg-base-200 shadow-lg",
                    div { class: "card-body items-center text-center",
                        h2 { class: "card-title", "Admin area" }
                        p { "Sign in to manage jobs and placements." }
                        div { class: "card-actions mt-2",
                            Link { to: Route::Login {}, class: "btn btn-primary", "Sign In" }
                        }
                    }
                }
            }
        );
    };

    let expanded = open();
    let aside_class = if expanded { "w-64" } else { "w-16" };
    let toggle_icon = if expanded {
        rsx!(Icon { width: 18, height: 18, icon: FaXmark })
    } else {
        rsx!(Icon { width: 18, height: 18, icon: FaBars })
    };
    let initial = user.name.chars().next().unwrap_or('A');

    let on_logout = move |_| {
        #[cfg(feature = "web")]
        spawn(async move {
            if let Err(error) = logout().await {
                tracing::warn!("Failed to end session cleanly: {error}");
            }
            user_store.write().end();
        });
        #[cfg(not(feature = "web"))]
        user_store.write().end();
        navigator.push(Route::Login {});
    };

    rsx!(
        div { class: "flex h-screen overflow-hidden bg-base-100",
            aside { class: "{aside_class} shrink-0 bg-base-200 border-r border-base-300 flex flex-col justify-between py-6 transition-all",
                div {
                    div { class: "flex items-center justify-between px-4 mb-8",
                        if expanded {
                            span { class: "font-bold text-xl text-primary", "Admin Panel" }
                        }
                        button {
                            class: "btn btn-ghost btn-sm btn-square",
                            onclick: move |_| {
                                let next = !open();
                                open.set(next);
                            },
                            {toggle_icon}
                        }
                    }
                    nav { class: "flex flex-col gap-1 px-3",
                        SidebarLink {
                            route: Route::AdminDashboard {},
                            label: "Dashboard",
                            icon: rsx!(Icon { width: 18, height: 18, icon: FaChartLine }),
                            expanded,
                        }
                        SidebarLink {
                            route: Route::AdminJobs {},
                            label: "Jobs & Placements",
                            icon: rsx!(Icon { width: 18, height: 18, icon: FaBriefcase }),
                            expanded,
                        }
                    }
                }

                div { class: "px-3",
                    div { class: "flex items-center gap-3 p-3 rounded-box bg-base-300",
                        div { class: "w-8 h-8 rounded-full bg-primary text-primary-content flex items-center justify-center font-bold shrink-0",
                            "{initial}"
                        }
                        if expanded {
                            div { class: "overflow-hidden",
                                p { class: "text-sm font-semibold truncate", "{user.name}" }
                                p { class: "text-xs opacity-60 truncate", "{user.email}" }
                            }
                        }
                    }
                    button {
                        class: "btn btn-ghost btn-sm w-full mt-2 text-error justify-start gap-3",
                        onclick: on_logout,
                        Icon { width: 18, height: 18, icon: FaRightFromBracket }
                        if expanded {
                            "Logout"
                        }
                    }
                }
            }

            main { class: "flex-1 overflow-y-auto",
                div { class: "p-6 md:p-10 max-w-7xl mx-auto",
                    Outlet::<Route> {}
                }
            }
        }
    )
}

#[component]
fn SidebarLink(route: Route, label: &'static str, icon: Element, expanded: bool) -> Element {
    rsx!(
        Link {
            to: route,
            class: "flex items-center gap-3 px-3 py-3 rounded-box font-medium hover:bg-base-300",
            active_class: "bg-primary text-primary-content",
            span { class: "shrink-0", {icon} }
            if expanded {
                span { class: "whitespace-nowrap", "{label}" }
            }
        }
    )
}
