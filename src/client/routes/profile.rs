use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaArrowRight, FaAward, FaBriefcase, FaCircleUser, FaRightFromBracket, FaRocket,
};
use dioxus_free_icons::Icon;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::api::auth::logout;
use crate::client::components::navbar::avatar_url;
use crate::client::components::{Footer, Page, Spinner};
use crate::client::router::Route;
use crate::client::store::user::UserState;
use crate::model::user::UserDto;

/// Signed-in landing screen: session card, enrolment details and quick
/// links. Shows a sign-in prompt once the session check comes back empty.
#[component]
pub fn Profile() -> Element {
    let mut user_store = use_context::<Store<UserState>>();
    let navigator = use_navigator();

    let (fetched, session) = {
        let store = user_store.read();
        (store.fetched, store.user.clone())
    };

    let on_signout = move |_| {
        spawn(async move {
            #[cfg(feature = "web")]
            if let Err(err) = logout().await {
                tracing::warn!("Failed to end backend session: {err}");
            }
            user_store.write().end();
            navigator.push(Route::Home {});
        });
    };

    let body = if !fetched {
        rsx!(Spinner {})
    } else {
        match session {
            Some(user) => rsx!(SessionCard { user, on_signout }),
            None => rsx!(SignedOutPrompt {}),
        }
    };

    rsx!(
        Title { "Profile | Makjuz Academy" }
        Page {
            section { class: "max-w-4xl mx-auto px-4 py-10", {body} }
            Footer {}
        }
    )
}

#[component]
fn SessionCard(user: UserDto, on_signout: EventHandler<()>) -> Element {
    let avatar = user.image.clone().unwrap_or_else(|| avatar_url(&user.name));
    let role = user.role.clone().unwrap_or_else(|| "student".to_string());
    let programme = user
        .select_programme
        .clone()
        .or_else(|| user.program.clone())
        .map(|value| programme_label(&value))
        .unwrap_or_else(|| "Not selected".to_string());
    let phone = user.phone.clone().unwrap_or_else(|| "Not provided".to_string());
    let city = user
        .place_city
        .clone()
        .unwrap_or_else(|| "Not provided".to_string());
    let qualification = user
        .qualification
        .clone()
        .unwrap_or_else(|| "Not provided".to_string());
    let student_id = user.id.clone();

    rsx!(
        div { class: "flex flex-col gap-6",
            div { class: "card bg-base-200 shadow-md",
                div { class: "card-body md:flex-row items-center gap-6",
                    div { class: "avatar",
                        div { class: "w-24 rounded-full ring ring-primary ring-offset-2 ring-offset-base-200",
                            img { src: "{avatar}", alt: "{user.name}" }
                        }
                    }
                    div { class: "flex-1 text-center md:text-left",
                        h1 { class: "text-2xl font-bold", "{user.name}" }
                        p { class: "opacity-70", "{user.email}" }
                        span { class: "badge badge-primary badge-outline mt-2 capitalize", "{role}" }
                    }
                    button {
                        class: "btn btn-outline btn-error gap-2",
                        onclick: move |_| on_signout.call(()),
                        Icon { width: 16, height: 16, icon: FaRightFromBracket }
                        "Sign Out"
                    }
                }
            }

            div { class: "grid grid-cols-1 md:grid-cols-2 gap-6",
                div { class: "card bg-base-200 shadow-md",
                    div { class: "card-body gap-3",
                        h2 { class: "card-title text-lg", "Enrolment Details" }
                        DetailRow { label: "Phone", value: phone }
                        DetailRow { label: "City", value: city }
                        DetailRow { label: "Qualification", value: qualification }
                        DetailRow { label: "Programme", value: programme }
                    }
                }

                div { class: "card bg-base-200 shadow-md",
                    div { class: "card-body gap-2",
                        h2 { class: "card-title text-lg", "Quick Links" }
                        QuickLink {
                            route: Route::Certificates {},
                            label: "My Certificates",
                            icon: rsx!(Icon { width: 18, height: 18, icon: FaAward }),
                        }
                        QuickLink {
                            route: Route::Placement {},
                            label: "Placement Hub",
                            icon: rsx!(Icon { width: 18, height: 18, icon: FaBriefcase }),
                        }
                        QuickLink {
                            route: Route::Internships {},
                            label: "Internships",
                            icon: rsx!(Icon { width: 18, height: 18, icon: FaRocket }),
                        }
                        QuickLink {
                            route: Route::Student { student_id },
                            label: "Public Profile",
                            icon: rsx!(Icon { width: 18, height: 18, icon: FaCircleUser }),
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn DetailRow(label: &'static str, value: String) -> Element {
    rsx!(
        div { class: "flex justify-between gap-4 text-sm",
            span { class: "opacity-60", "{label}" }
            span { class: "font-medium text-right", "{value}" }
        }
    )
}

#[component]
fn QuickLink(route: Route, label: &'static str, icon: Element) -> Element {
    rsx!(
        Link {
            class: "flex items-center gap-3 p-3 rounded-box bg-base-100 hover:bg-base-300 transition-colors",
            to: route,
            span { class: "text-primary", {icon} }
            span { class: "font-medium", "{label}" }
            span { class: "ml-auto opacity-40",
                Icon { width: 14, height: 14, icon: FaArrowRight }
            }
        }
    )
}

#[component]
fn SignedOutPrompt() -> Element {
    rsx!(
        div { class: "card bg-base-200 shadow-md max-w-md mx-auto text-center",
            div { class: "card-body items-center gap-3",
                div { class: "text-primary",
                    Icon { width: 48, height: 48, icon: FaCircleUser }
                }
                h1 { class: "card-title text-2xl", "You're not signed in" }
                p { class: "opacity-70",
                    "Sign in to see your enrolment details and track your placement journey."
                }
                div { class: "card-actions mt-2",
                    Link { class: "btn btn-primary", to: Route::Login {}, "Sign In" }
                    Link { class: "btn btn-ghost", to: Route::Register {}, "Create Account" }
                }
            }
        }
    )
}

/// Human label for a stored programme value, falling back to the raw value
/// when it is not one of the catalog programmes.
fn programme_label(value: &str) -> String {
    super::register::PROGRAMMES
        .iter()
        .find(|(key, _)| *key == value)
        .map(|(_, label)| (*label).to_string())
        .unwrap_or_else(|| value.replace('_', " ").to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test catalog programme values display their enrolment label.
    /// Expected: the uppercase label from the registration options.
    #[test]
    fn known_programme_uses_catalog_label() {
        assert_eq!(programme_label("data_sciences"), "DATA SCIENCES");
        assert_eq!(
            programme_label("cloud_computing_engineering"),
            "CLOUD COMPUTING & ENGINEERING"
        );
    }

    /// Test values outside the catalog still render something readable.
    /// Expected: underscores swapped for spaces and the text upcased.
    #[test]
    fn unknown_programme_upcases_the_raw_value() {
        assert_eq!(programme_label("game_dev"), "GAME DEV");
    }
}
