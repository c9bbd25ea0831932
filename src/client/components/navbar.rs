use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaAward, FaBars, FaBriefcase, FaBullseye, FaCode, FaMoon, FaRightFromBracket, FaSun, FaUser,
};
use dioxus_free_icons::Icon;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::api::auth::logout;
use crate::client::components::AcademyTitleButton;
use crate::client::router::Route;
use crate::client::store::theme::{self, ThemeState};
use crate::client::store::user::UserState;
use crate::client::util::browser;

#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            class: "navbar bg-base-200 fixed top-0 z-50 shadow-sm",
            div {
                class: "navbar-start gap-1",
                MobileMenu {}
                AcademyTitleButton {}
            }
            div {
                class: "navbar-center hidden lg:flex",
                ul { class: "menu menu-horizontal px-1 items-center",
                    li { Link { to: Route::Home {}, "Home" } }
                    li { Link { to: Route::Courses {}, "Courses" } }
                    li { ProgramsDropdown {} }
                    li { Link { to: Route::Placement {}, "Jobs" } }
                    li { Link { to: Route::About {}, "About" } }
                    li { Link { to: Route::Mock {}, "Mock" } }
                    li { Link { to: Route::Contact {}, "Contact" } }
                }
            }
            div {
                class: "navbar-end gap-2",
                ThemeToggle {}
                SessionMenu {}
            }
        }

        Outlet::<Route> {}
    }
}

/// "Programs" dropdown listing the four specialized tracks.
#[component]
fn ProgramsDropdown() -> Element {
    rsx!(
        div { class: "dropdown dropdown-hover",
            div { tabindex: 0, role: "button", "Programs" }
            ul {
                tabindex: 0,
                class: "dropdown-content menu bg-base-100 rounded-box z-10 w-64 p-2 shadow-lg",
                ProgramEntry {
                    route: Route::Certificates {},
                    label: "Certificates",
                    hint: "Earn credentials",
                    icon_kind: ProgramIcon::Award,
                }
                ProgramEntry {
                    route: Route::Internships {},
                    label: "Internships",
                    hint: "Gain experience",
                    icon_kind: ProgramIcon::Briefcase,
                }
                ProgramEntry {
                    route: Route::Projects {},
                    label: "Project Hub",
                    hint: "Build portfolio",
                    icon_kind: ProgramIcon::Code,
                }
                ProgramEntry {
                    route: Route::Placement {},
                    label: "Placement",
                    hint: "Get hired",
                    icon_kind: ProgramIcon::Bullseye,
                }
            }
        }
    )
}

#[derive(Clone, Copy, PartialEq)]
enum ProgramIcon {
    Award,
    Briefcase,
    Code,
    Bullseye,
}

#[component]
fn ProgramEntry(
    route: Route,
    label: &'static str,
    hint: &'static str,
    icon_kind: ProgramIcon,
) -> Element {
    let icon = match icon_kind {
        ProgramIcon::Award => rsx!(Icon { width: 16, height: 16, icon: FaAward }),
        ProgramIcon::Briefcase => rsx!(Icon { width: 16, height: 16, icon: FaBriefcase }),
        ProgramIcon::Code => rsx!(Icon { width: 16, height: 16, icon: FaCode }),
        ProgramIcon::Bullseye => rsx!(Icon { width: 16, height: 16, icon: FaBullseye }),
    };

    rsx!(
        li {
            Link { to: route,
                span { class: "w-8 h-8 rounded-lg bg-primary/10 text-primary flex items-center justify-center",
                    {icon}
                }
                span { class: "flex flex-col",
                    span { class: "font-semibold", "{label}" }
                    span { class: "text-xs opacity-60", "{hint}" }
                }
            }
        }
    )
}

/// Compact menu for small screens.
#[component]
fn MobileMenu() -> Element {
    rsx!(
        div { class: "dropdown lg:hidden",
            div { tabindex: 0, role: "button", class: "btn btn-ghost btn-circle",
                Icon { width: 20, height: 20, icon: FaBars }
            }
            ul {
                tabindex: 0,
                class: "dropdown-content menu bg-base-100 rounded-box z-10 w-56 p-2 shadow-lg",
                li { Link { to: Route::Home {}, "Home" } }
                li { Link { to: Route::Courses {}, "Courses" } }
                li { Link { to: Route::Certificates {}, "Certificates" } }
                li { Link { to: Route::Internships {}, "Internships" } }
                li { Link { to: Route::Projects {}, "Project Hub" } }
                li { Link { to: Route::Placement {}, "Placement" } }
                li { Link { to: Route::About {}, "About" } }
                li { Link { to: Route::Mock {}, "Mock" } }
                li { Link { to: Route::Contact {}, "Contact" } }
            }
        }
    )
}

#[component]
fn ThemeToggle() -> Element {
    let mut theme_store = use_context::<Store<ThemeState>>();
    let dark = theme_store.read().dark;

    rsx!(
        button {
            class: "btn btn-ghost btn-circle",
            "aria-label": "Toggle theme",
            onclick: move |_| {
                let name = {
                    let mut theme_state = theme_store.write();
                    theme_state.toggle();
                    theme_state.name()
                };
                browser::local_storage_set(theme::STORAGE_KEY, name);
            },
            if dark {
                Icon { width: 18, height: 18, icon: FaSun }
            } else {
                Icon { width: 18, height: 18, icon: FaMoon }
            }
        }
    )
}

/// Avatar dropdown when signed in, login and register buttons once the
/// session check has finished signed out. Nothing renders while the check
/// is still in flight.
#[component]
fn SessionMenu() -> Element {
    let mut user_store = use_context::<Store<UserState>>();
    let navigator = use_navigator();

    let signed_in_avatar = {
        let user = user_store.read();
        user.user.as_ref().map(|user| {
            user.image
                .clone()
                .unwrap_or_else(|| avatar_url(&user.name))
        })
    };
    let fetched = user_store.read().fetched;

    let on_logout = move |_| {
        spawn(async move {
            #[cfg(feature = "web")]
            if let Err(err) = logout().await {
                tracing::warn!("Failed to end backend session: {err}");
            }
            user_store.write().end();
            navigator.push(Route::Home {});
        });
    };

    match signed_in_avatar {
        Some(avatar) => rsx!(
            div { class: "dropdown dropdown-end",
                div { tabindex: 0, role: "button", class: "btn btn-ghost btn-circle avatar",
                    div { class: "w-9 rounded-full",
                        img { src: "{avatar}", alt: "Profile" }
                    }
                }
                ul {
                    tabindex: 0,
                    class: "dropdown-content menu bg-base-100 rounded-box z-10 w-44 p-2 shadow-lg",
                    li {
                        Link { to: Route::Profile {},
                            Icon { width: 14, height: 14, icon: FaUser }
                            "Profile"
                        }
                    }
                    li {
                        a { onclick: on_logout,
                            Icon { width: 14, height: 14, icon: FaRightFromBracket }
                            "Logout"
                        }
                    }
                }
            }
        ),
        None => rsx!(
            if fetched {
                div { class: "flex items-center gap-2",
                    Link { to: Route::Login {}, class: "btn btn-outline btn-sm", "Login" }
                    Link { to: Route::Register {}, class: "btn btn-primary btn-sm", "Register" }
                }
            }
        ),
    }
}

/// Generated initials avatar for users without a profile image.
pub fn avatar_url(name: &str) -> String {
    format!(
        "https://ui-avatars.com/api/?name={}&background=8A2BE2&color=fff",
        name.replace(' ', "+")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test the generated avatar link.
    ///
    /// Expected: spaces in the display name become plus signs so the
    /// initials service sees every word.
    #[test]
    fn avatar_url_encodes_spaces() {
        assert_eq!(
            avatar_url("Asha Verma"),
            "https://ui-avatars.com/api/?name=Asha+Verma&background=8A2BE2&color=fff"
        );
    }
}
