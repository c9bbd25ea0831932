use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaAward, FaCircleCheck, FaDownload, FaShieldHalved,
};
use dioxus_free_icons::Icon;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::api::certificates::{generate_certificate, get_my_certificates};
use crate::client::components::{EmptyNotice, ErrorAlert, Footer, Page, Spinner};
use crate::client::loader::LoadState;
#[cfg(feature = "web")]
use crate::client::loader::load_into;
use crate::client::store::user::UserState;
#[cfg(feature = "web")]
use crate::client::util::browser;
use crate::client::util::time::format_date;
use crate::model::certificate::CertificateDto;
#[cfg(feature = "web")]
use crate::model::certificate::CertificateRequestDto;

/// Earned certificates with on-demand PDF generation. Download asks the
/// backend to render the PDF and opens the returned link.
#[component]
pub fn Certificates() -> Element {
    let certificates = use_signal(LoadState::<Vec<CertificateDto>>::default);
    let mut generating = use_signal(|| None::<String>);
    let mut download_error = use_signal(|| None::<String>);
    let user_store = use_context::<Store<UserState>>();

    #[cfg(feature = "web")]
    let _fetch = use_resource(move || load_into(certificates, get_my_certificates()));

    let on_download = move |certificate: CertificateDto| {
        download_error.set(None);

        #[cfg(feature = "web")]
        {
            let Some(course) = certificate.course else {
                return;
            };
            let user_name = user_store
                .read()
                .user
                .as_ref()
                .map(|user| user.name.clone())
                .unwrap_or_else(|| "Student Name".to_string());

            generating.set(Some(certificate.id.clone()));
            spawn(async move {
                let request = CertificateRequestDto {
                    course_id: course.id,
                    user_name,
                };
                match generate_certificate(&request).await {
                    Ok(rendered) if !rendered.download_url.is_empty() => {
                        browser::open_in_new_tab(&rendered.download_url);
                    }
                    Ok(_) => {
                        download_error.set(Some(
                            "Download failed or certificate not ready".to_string(),
                        ));
                    }
                    Err(err) => {
                        tracing::error!("Failed to generate certificate: {err}");
                        download_error.set(Some(err.message()));
                    }
                }
                generating.set(None);
            });
        }
    };

    let state = certificates.read();
    let earned = state.data().map(Vec::as_slice).unwrap_or_default();
    let busy_id = generating.read().clone();

    let load_error = state
        .error()
        .map(|_| rsx!(ErrorAlert { message: "Failed to fetch certificates." }));
    let download_alert = download_error
        .read()
        .clone()
        .map(|message| rsx!(ErrorAlert { message }));

    rsx!(
        Title { "Certificates | Makjuz Academy" }
        Page {
            section { class: "max-w-6xl mx-auto px-4 py-10 flex flex-col gap-10",
                div { class: "text-center",
                    h1 { class: "text-4xl md:text-5xl font-bold text-primary", "Your Achievements" }
                    p { class: "mt-3 text-lg opacity-70 max-w-2xl mx-auto",
                        "Verify your skills and showcase your expertise with our industry-recognized certifications."
                    }
                }

                {load_error}
                {download_alert}

                if state.is_loading() {
                    Spinner {}
                }

                if !state.is_loading() && state.error().is_none() && earned.is_empty() {
                    EmptyNotice {
                        title: "No certificates yet",
                        hint: "Complete courses to earn your first certificate!",
                    }
                }

                div { class: "grid md:grid-cols-2 gap-6",
                    {earned.iter().map(|certificate| rsx!(
                        CertificateCard {
                            key: "{certificate.id}",
                            certificate: certificate.clone(),
                            busy: busy_id.as_deref() == Some(certificate.id.as_str()),
                            on_download,
                        }
                    ))}
                }

                VerificationBlurb {}

                div {
                    h2 { class: "text-3xl font-bold text-center mb-8", "Why Our Certificates Matter" }
                    div { class: "grid md:grid-cols-3 gap-6",
                        WhyCard {
                            title: "Industry Recognized",
                            blurb: "Validated by top tech companies and industry leaders.",
                        }
                        WhyCard {
                            title: "Blockchain Secured",
                            blurb: "Tamper-proof digital credentials that last forever.",
                        }
                        WhyCard {
                            title: "Skill Validated",
                            blurb: "Earned only after completing rigorous hands-on projects.",
                        }
                    }
                }
            }
            Footer {}
        }
    )
}

#[component]
fn CertificateCard(
    certificate: CertificateDto,
    busy: bool,
    on_download: EventHandler<CertificateDto>,
) -> Element {
    let title = certificate
        .course
        .as_ref()
        .map(|course| course.title.clone())
        .unwrap_or_else(|| "Course Certificate".to_string());
    let issued = format_date(&certificate.issue_date);
    let download_label = if busy { "Preparing..." } else { "Download PDF" };
    let orphaned = certificate.course.is_none();
    let clicked = certificate.clone();

    rsx!(
        div { class: "card bg-base-200 shadow-md",
            div { class: "card-body",
                div { class: "flex justify-between items-start",
                    div { class: "p-3 rounded-box bg-primary/10 text-primary",
                        Icon { width: 32, height: 32, icon: FaAward }
                    }
                    span { class: "badge badge-success badge-outline", "Verified" }
                }
                h3 { class: "card-title text-2xl mt-2", "{title}" }
                p { class: "text-sm opacity-60",
                    "Issued on {issued} • ID: {certificate.certificate_id}"
                }
                button {
                    class: "btn btn-primary w-full mt-4 gap-2",
                    disabled: busy || orphaned,
                    onclick: move |_| on_download.call(clicked.clone()),
                    Icon { width: 18, height: 18, icon: FaDownload }
                    "{download_label}"
                }
            }
        }
    )
}

#[component]
fn VerificationBlurb() -> Element {
    rsx!(
        div { class: "card bg-base-200 border border-primary/20 shadow-md",
            div { class: "card-body items-center text-center",
                div { class: "text-info",
                    Icon { width: 48, height: 48, icon: FaShieldHalved }
                }
                h3 { class: "text-2xl font-bold", "Employer Verification" }
                p { class: "opacity-70",
                    "Employers can verify your certificates instantly using your unique Certificate ID."
                }
                div { class: "w-full max-w-md p-4 rounded-box bg-base-100 text-left mt-2",
                    p { class: "text-xs opacity-50 mb-1", "Your Public Verification URL" }
                    p { class: "text-sm font-mono truncate text-info", "https://makjuz.academy/verify" }
                }
            }
        }
    )
}

#[component]
fn WhyCard(title: &'static str, blurb: &'static str) -> Element {
    rsx!(
        div { class: "card bg-base-200 shadow-sm",
            div { class: "card-body",
                div { class: "text-success",
                    Icon { width: 24, height: 24, icon: FaCircleCheck }
                }
                h3 { class: "text-xl font-bold", "{title}" }
                p { class: "opacity-70", "{blurb}" }
            }
        }
    )
}
