use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaBriefcase, FaEnvelope, FaFileLines, FaLocationDot, FaPhone, FaShieldHalved, FaUser,
};
use dioxus_free_icons::Icon;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::api::auth::register;
use crate::client::components::{ErrorAlert, Footer, Page};
use crate::client::router::Route;
use crate::model::user::RegistrationDto;

pub const QUALIFICATIONS: [(&str, &str); 4] = [
    ("bachelor", "Bachelor's Degree"),
    ("master", "Master's Degree"),
    ("phd", "Ph.D."),
    ("other", "Other"),
];

pub const PROGRAMMES: [(&str, &str); 8] = [
    ("azure_data_engineering", "AZURE DATA ENGINEERING"),
    ("cloud_computing_engineering", "CLOUD COMPUTING & ENGINEERING"),
    ("machine_learning", "MACHINE LEARNING"),
    ("sql_database_management", "SQL DATABASE MANAGEMENT"),
    ("generative_ai", "GENERATIVE AI"),
    ("data_sciences", "DATA SCIENCES"),
    ("data_analytics", "DATA ANALYTICS"),
    ("cloud_engineering", "CLOUD ENGINEERING"),
];

/// Required-field check for the registration form. City and resume link
/// stay optional.
pub fn validate_registration(form: &RegistrationDto) -> Vec<(&'static str, &'static str)> {
    let mut errors = Vec::new();
    if form.full_name.trim().is_empty() {
        errors.push(("full_name", "Full Name is required."));
    }
    if form.email.trim().is_empty() {
        errors.push(("email", "Email is required."));
    }
    if form.password.trim().is_empty() {
        errors.push(("password", "Password is required."));
    }
    if form.phone.trim().is_empty() {
        errors.push(("phone", "Phone number is required."));
    }
    if form.qualification.is_empty() {
        errors.push(("qualification", "Qualification is required."));
    }
    if form.select_programme.is_empty() {
        errors.push(("select_programme", "Programme selection is required."));
    }
    errors
}

pub fn field_error<'a>(
    errors: &'a [(&'static str, &'static str)],
    field: &str,
) -> Option<&'a str> {
    errors
        .iter()
        .find(|(name, _)| *name == field)
        .map(|(_, message)| *message)
}

/// Course registration form. Validates locally before posting, then routes
/// to the login screen on success.
#[component]
pub fn Register() -> Element {
    let mut form = use_signal(RegistrationDto::default);
    let mut errors = use_signal(Vec::<(&'static str, &'static str)>::new);
    let mut general_error = use_signal(|| None::<String>);
    let mut loading = use_signal(|| false);
    #[cfg(feature = "web")]
    let navigator = use_navigator();

    let on_submit = move |_| {
        if loading() {
            return;
        }
        general_error.set(None);

        let payload = form.read().clone();
        let found = validate_registration(&payload);
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        errors.set(Vec::new());

        #[cfg(feature = "web")]
        {
            loading.set(true);
            spawn(async move {
                match register(&payload).await {
                    Ok(()) => {
                        navigator.push(Route::Login {});
                    }
                    Err(err) => {
                        tracing::error!("Registration failed: {err}");
                        general_error.set(Some(err.message()));
                        loading.set(false);
                    }
                }
            });
        }
    };

    let current = form.read().clone();
    let error_list = errors.read().clone();
    let alert = general_error
        .read()
        .clone()
        .map(|message| rsx!(ErrorAlert { message }));
    let submit_label = if loading() {
        "Submitting..."
    } else {
        "Submit Registration"
    };

    let name_error = inline_error(&error_list, "full_name");
    let email_error = inline_error(&error_list, "email");
    let password_error = inline_error(&error_list, "password");
    let phone_error = inline_error(&error_list, "phone");
    let qualification_error = inline_error(&error_list, "qualification");
    let programme_error = inline_error(&error_list, "select_programme");

    rsx!(
        Title { "Register | Makjuz Academy" }
        Page {
            div { class: "flex items-center justify-center py-12",
                div { class: "card w-full max-w-md bg-base-200 shadow-xl",
                    div { class: "card-body gap-3",
                        div { class: "flex flex-col items-center gap-2 mb-2",
                            div { class: "text-primary",
                                Icon { width: 40, height: 40, icon: FaShieldHalved }
                            }
                            h1 { class: "text-3xl font-bold text-primary", "Join Us" }
                            p { class: "text-sm opacity-70", "Courses Registration" }
                        }

                        {alert}

                        FieldLabel { text: "Full Name" }
                        label { class: "input input-bordered flex items-center gap-2",
                            Icon { width: 16, height: 16, icon: FaUser }
                            input {
                                class: "grow",
                                r#type: "text",
                                placeholder: "Enter your full name",
                                value: "{current.full_name}",
                                oninput: move |event| form.write().full_name = event.value(),
                            }
                        }
                        {name_error}

                        FieldLabel { text: "Email Address" }
                        label { class: "input input-bordered flex items-center gap-2",
                            Icon { width: 16, height: 16, icon: FaEnvelope }
                            input {
                                class: "grow",
                                r#type: "email",
                                placeholder: "Enter your email",
                                value: "{current.email}",
                                oninput: move |event| form.write().email = event.value(),
                            }
                        }
                        {email_error}

                        FieldLabel { text: "Password" }
                        label { class: "input input-bordered flex items-center gap-2",
                            Icon { width: 16, height: 16, icon: FaShieldHalved }
                            input {
                                class: "grow",
                                r#type: "password",
                                placeholder: "Enter your password",
                                value: "{current.password}",
                                oninput: move |event| form.write().password = event.value(),
                            }
                        }
                        {password_error}

                        FieldLabel { text: "Phone Number" }
                        label { class: "input input-bordered flex items-center gap-2",
                            Icon { width: 16, height: 16, icon: FaPhone }
                            input {
                                class: "grow",
                                r#type: "tel",
                                placeholder: "Mobile number (10-digit)",
                                value: "{current.phone}",
                                oninput: move |event| form.write().phone = event.value(),
                            }
                        }
                        {phone_error}

                        FieldLabel { text: "Place / City" }
                        label { class: "input input-bordered flex items-center gap-2",
                            Icon { width: 16, height: 16, icon: FaLocationDot }
                            input {
                                class: "grow",
                                r#type: "text",
                                placeholder: "e.g., Chennai",
                                value: "{current.place_city}",
                                oninput: move |event| form.write().place_city = event.value(),
                            }
                        }

                        FieldLabel { text: "Highest Academic Qualification" }
                        select {
                            class: "select select-bordered w-full",
                            value: "{current.qualification}",
                            onchange: move |event| form.write().qualification = event.value(),
                            option { value: "", disabled: true, "Select Qualification" }
                            {QUALIFICATIONS.iter().map(|(value, label)| rsx!(
                                option { value: "{value}", "{label}" }
                            ))}
                        }
                        {qualification_error}

                        FieldLabel { text: "Select Internship Programme" }
                        select {
                            class: "select select-bordered w-full",
                            value: "{current.select_programme}",
                            onchange: move |event| form.write().select_programme = event.value(),
                            option { value: "", disabled: true, "Select Programme" }
                            {PROGRAMMES.iter().map(|(value, label)| rsx!(
                                option { value: "{value}", "{label}" }
                            ))}
                        }
                        {programme_error}

                        FieldLabel { text: "Resume Link" }
                        label { class: "input input-bordered flex items-center gap-2",
                            Icon { width: 16, height: 16, icon: FaFileLines }
                            input {
                                class: "grow",
                                r#type: "url",
                                placeholder: "Link to your resume (optional)",
                                value: "{current.resume_url}",
                                oninput: move |event| form.write().resume_url = event.value(),
                            }
                        }

                        button {
                            class: "btn btn-primary w-full mt-3 gap-2",
                            disabled: loading(),
                            onclick: on_submit,
                            Icon { width: 16, height: 16, icon: FaBriefcase }
                            "{submit_label}"
                        }

                        p { class: "text-sm text-center mt-2",
                            "Already have an account? "
                            Link {
                                class: "link link-primary font-medium",
                                to: Route::Login {},
                                "Log in"
                            }
                        }
                    }
                }
            }
            Footer {}
        }
    )
}

fn inline_error(errors: &[(&'static str, &'static str)], field: &str) -> Option<Element> {
    field_error(errors, field).map(|message| {
        rsx!(
            p { class: "text-error text-sm", "{message}" }
        )
    })
}

#[component]
fn FieldLabel(text: &'static str) -> Element {
    rsx!(
        span { class: "label-text font-medium mt-1", "{text}" }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> RegistrationDto {
        RegistrationDto {
            full_name: "Asha Pillai".to_string(),
            email: "asha@example.com".to_string(),
            password: "hunter2!".to_string(),
            phone: "9876543210".to_string(),
            place_city: String::new(),
            qualification: "bachelor".to_string(),
            select_programme: "data_sciences".to_string(),
            resume_url: String::new(),
        }
    }

    /// Test an untouched form fails every required field.
    /// Expected: one message per required field, optional ones excluded.
    #[test]
    fn empty_form_flags_every_required_field() {
        let errors = validate_registration(&RegistrationDto::default());

        assert_eq!(errors.len(), 6);
        assert_eq!(
            field_error(&errors, "full_name"),
            Some("Full Name is required.")
        );
        assert_eq!(field_error(&errors, "email"), Some("Email is required."));
        assert_eq!(
            field_error(&errors, "password"),
            Some("Password is required.")
        );
        assert_eq!(
            field_error(&errors, "phone"),
            Some("Phone number is required.")
        );
        assert_eq!(
            field_error(&errors, "qualification"),
            Some("Qualification is required.")
        );
        assert_eq!(
            field_error(&errors, "select_programme"),
            Some("Programme selection is required.")
        );
        assert_eq!(field_error(&errors, "place_city"), None);
        assert_eq!(field_error(&errors, "resume_url"), None);
    }

    /// Test a fully filled form passes even with the optional fields blank.
    /// Expected: no errors.
    #[test]
    fn complete_form_passes_validation() {
        assert!(validate_registration(&filled_form()).is_empty());
    }

    /// Test whitespace-only input does not satisfy a required text field.
    /// Expected: the full name error comes back.
    #[test]
    fn whitespace_only_input_still_fails() {
        let mut form = filled_form();
        form.full_name = "   ".to_string();

        let errors = validate_registration(&form);

        assert_eq!(
            field_error(&errors, "full_name"),
            Some("Full Name is required.")
        );
        assert_eq!(errors.len(), 1);
    }
}
