use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_brands_icons::FaGoogle;
use dioxus_free_icons::icons::fa_solid_icons::FaShieldHalved;
use dioxus_free_icons::Icon;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::api::auth::login;
use crate::client::components::{ErrorAlert, Footer, Page};
use crate::client::router::Route;
#[cfg(feature = "web")]
use crate::client::store::user::UserState;
#[cfg(feature = "web")]
use crate::model::user::LoginDto;

/// Email and password sign-in. Google goes through a backend redirect,
/// so it is a plain anchor rather than a handler.
#[component]
pub fn Login() -> Element {
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut loading = use_signal(|| false);
    #[cfg(feature = "web")]
    let mut user_store = use_context::<Store<UserState>>();
    #[cfg(feature = "web")]
    let navigator = use_navigator();

    let on_submit = move |_| {
        if loading() {
            return;
        }
        error.set(None);

        #[cfg(feature = "web")]
        {
            let credentials = LoginDto {
                email: email(),
                password: password(),
            };
            loading.set(true);
            spawn(async move {
                match login(&credentials).await {
                    Ok(response) => {
                        user_store.write().establish(response.user);
                        navigator.push(Route::Profile {});
                    }
                    Err(err) => {
                        tracing::error!("Login failed: {err}");
                        error.set(Some(err.message()));
                        loading.set(false);
                    }
                }
            });
        }
    };

    let alert = error
        .read()
        .clone()
        .map(|message| rsx!(ErrorAlert { message }));
    let submit_label = if loading() { "Logging in..." } else { "Login" };

    rsx!(
        Title { "Login | Makjuz Academy" }
        Page {
            div { class: "flex items-center justify-center py-12",
                div { class: "card w-full max-w-md bg-base-200 shadow-xl",
                    div { class: "card-body gap-4",
                        div { class: "flex flex-col items-center gap-2",
                            div { class: "text-primary",
                                Icon { width: 40, height: 40, icon: FaShieldHalved }
                            }
                            h1 { class: "text-3xl font-bold text-primary", "Login" }
                            p { class: "text-sm opacity-70", "Welcome back! Please enter your details." }
                        }

                        {alert}

                        label { class: "form-control w-full",
                            div { class: "label",
                                span { class: "label-text font-medium", "Email" }
                            }
                            input {
                                class: "input input-bordered w-full",
                                r#type: "email",
                                placeholder: "you@example.com",
                                value: "{email}",
                                oninput: move |event| email.set(event.value()),
                            }
                        }
                        label { class: "form-control w-full",
                            div { class: "label",
                                span { class: "label-text font-medium", "Password" }
                            }
                            input {
                                class: "input input-bordered w-full",
                                r#type: "password",
                                placeholder: "Enter your password",
                                value: "{password}",
                                oninput: move |event| password.set(event.value()),
                            }
                        }

                        button {
                            class: "btn btn-primary w-full mt-2",
                            disabled: loading(),
                            onclick: on_submit,
                            "{submit_label}"
                        }

                        div { class: "divider text-xs opacity-60", "Or continue with" }

                        a {
                            class: "btn btn-outline w-full gap-2",
                            href: "/api/auth/google",
                            Icon { width: 18, height: 18, icon: FaGoogle }
                            "Continue with Google"
                        }

                        p { class: "text-sm text-center mt-2",
                            "Don't have an account? "
                            Link {
                                class: "link link-primary font-medium",
                                to: Route::Register {},
                                "Sign up"
                            }
                        }
                    }
                }
            }
            Footer {}
        }
    )
}
