use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCircleCheck, FaStar};
use dioxus_free_icons::Icon;

const EARNED_BADGES: [&str; 3] = ["Interview Ready", "Comm. Pro", "Quick Solver"];

const SKILL_MODULES: [(&str, &str, u32); 4] = [
    ("Communication", "Speak clearly & confidently.", 65),
    ("Interview Prep", "HR & Behavioral Q&A.", 40),
    ("Aptitude", "Logical & Quant reasoning.", 80),
    ("Workplace", "Etiquette & Time mgmt.", 25),
];

const DAILY_TASKS: [(&str, bool); 3] = [
    ("Speak English for 10 mins", true),
    ("Solve 5 Aptitude Qs", false),
    ("Record 1 Mock Answer", false),
];

#[component]
pub fn SoftSkills() -> Element {
    rsx!(
        div { class: "flex flex-col gap-6",
            div { class: "card bg-base-100 border border-base-300",
                div { class: "card-body lg:flex-row lg:items-center lg:justify-between",
                    div {
                        h2 { class: "text-2xl font-bold", "Soft Skills Mastery" }
                        p { class: "opacity-70 mt-1 max-w-xl",
                            "Improve your communication, confidence, and professional behavior to become placement-ready."
                        }
                        div { class: "flex flex-wrap gap-2 mt-4",
                            {EARNED_BADGES.iter().map(|badge| rsx!(
                                span { class: "badge badge-primary badge-outline gap-1",
                                    Icon { width: 10, height: 10, icon: FaStar }
                                    "{badge}"
                                }
                            ))}
                        }
                    }
                    div { class: "flex gap-4 mt-4 lg:mt-0",
                        div { class: "text-center p-4 rounded-box bg-base-200",
                            div { class: "text-2xl font-bold text-primary", "725" }
                            div { class: "text-xs opacity-60 uppercase tracking-wider", "XP Points" }
                        }
                        div { class: "text-center p-4 rounded-box bg-base-200",
                            div { class: "text-2xl font-bold text-secondary", "Lvl 4" }
                            div { class: "text-xs opacity-60 uppercase tracking-wider", "Current Level" }
                        }
                    }
                }
            }

            div { class: "grid md:grid-cols-2 gap-4",
                {SKILL_MODULES.iter().map(|(name, blurb, percent)| rsx!(
                    div { key: "{name}", class: "card bg-base-100 border border-base-300",
                        div { class: "card-body p-5",
                            div { class: "flex justify-between items-center",
                                h3 { class: "font-bold", "{name}" }
                                span { class: "badge badge-warning badge-sm", "In Progress" }
                            }
                            p { class: "text-sm opacity-60", "{blurb}" }
                            div { class: "flex items-center gap-3 mt-2",
                                progress {
                                    class: "progress progress-primary flex-1",
                                    value: "{percent}",
                                    max: "100",
                                }
                                span { class: "text-sm font-semibold", "{percent}%" }
                            }
                            div { class: "card-actions justify-end mt-2",
                                button { class: "btn btn-outline btn-sm", "Continue" }
                            }
                        }
                    }
                ))}
            }

            div { class: "grid lg:grid-cols-3 gap-6",
                div { class: "lg:col-span-2 card bg-base-100 border border-base-300",
                    div { class: "card-body",
                        h3 { class: "card-title text-base", "Video Lessons" }
                        {(0..3).map(|index| rsx!(
                            div {
                                key: "{index}",
                                class: "flex items-center gap-4 p-3 rounded-box hover:bg-base-200 cursor-pointer",
                                div { class: "w-20 h-12 rounded bg-neutral text-neutral-content flex items-center justify-center text-xs font-bold",
                                    "10:00"
                                }
                                div {
                                    p { class: "font-semibold text-sm",
                                        "Mastering Self-Introduction in 5 Steps"
                                    }
                                    p { class: "text-xs opacity-60", "10 mins • Communication" }
                                }
                            }
                        ))}
                    }
                }

                div { class: "card bg-base-100 border border-base-300",
                    div { class: "card-body",
                        h3 { class: "card-title text-base", "Daily Tasks" }
                        {DAILY_TASKS.iter().map(|(task, done)| {
                            let check = if *done {
                                rsx!(
                                    span { class: "text-success",
                                        Icon { width: 16, height: 16, icon: FaCircleCheck }
                                    }
                                )
                            } else {
                                rsx!(span { class: "w-4 h-4 rounded-full border-2 border-base-300" })
                            };
                            let text_class = if *done {
                                "text-sm line-through opacity-50"
                            } else {
                                "text-sm"
                            };

                            rsx!(
                                div { key: "{task}", class: "flex items-center gap-3 py-2",
                                    {check}
                                    span { class: "{text_class}", "{task}" }
                                }
                            )
                        })}
                        div { class: "card-actions mt-2",
                            button { class: "btn btn-ghost btn-sm btn-block text-primary", "View All Tasks" }
                        }
                    }
                }
            }
        }
    )
}
