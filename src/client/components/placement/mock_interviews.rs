use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaCircleCheck, FaMicrophone, FaPaperPlane, FaRobot, FaUser,
};
use dioxus_free_icons::Icon;

/// Opening line from the automated interviewer.
const OPENING_QUESTION: &str = "Hello! I'm your AI Interviewer. Let's start with a basic question: Tell me about yourself and your experience with React.";

/// Follow-up sent after every student answer. A single canned prompt until
/// the interview service goes live.
const FOLLOW_UP_QUESTION: &str =
    "That's a good start. Can you explain the difference between state and props?";

const SUGGESTED_TOPICS: [&str; 3] = ["React Hooks", "State Management", "Lifecycle"];

const MENTOR_SLOTS: [&str; 3] = ["Tomorrow, 10:00 AM", "Tomorrow, 2:00 PM", "Fri, 11:00 AM"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InterviewMode {
    Ai,
    Expert,
    SelfPractice,
}

const MODE_TABS: [(InterviewMode, &str); 3] = [
    (InterviewMode::Ai, "AI Mock Interview"),
    (InterviewMode::Expert, "Expert Scheduled"),
    (InterviewMode::SelfPractice, "Self Practice"),
];

#[derive(Debug, Clone, PartialEq)]
struct ChatMessage {
    from_student: bool,
    body: String,
}

fn seed_messages() -> Vec<ChatMessage> {
    vec![ChatMessage {
        from_student: false,
        body: OPENING_QUESTION.to_string(),
    }]
}

#[component]
pub fn MockInterviews() -> Element {
    let mut mode = use_signal(|| InterviewMode::Ai);

    let pane = match mode() {
        InterviewMode::Ai => rsx!(AiInterview {}),
        InterviewMode::Expert => rsx!(ExpertSchedule {}),
        InterviewMode::SelfPractice => rsx!(SelfPractice {}),
    };

    rsx!(
        div { class: "flex flex-col gap-6",
            div { class: "grid grid-cols-2 lg:grid-cols-4 gap-4",
                MetricCard { value: "12", label: "Interviews Taken", caption: "+2 this week", tone: "text-success" }
                MetricCard { value: "78%", label: "Avg. Score", caption: "+5% improvement", tone: "text-success" }
                MetricCard { value: "React", label: "Strong Area", caption: "Top 10%", tone: "text-info" }
                MetricCard { value: "DSA", label: "Needs Focus", caption: "Practice Arrays", tone: "text-warning" }
            }

            div { class: "tabs tabs-boxed w-fit",
                {MODE_TABS.iter().map(|(tab_mode, label)| {
                    let tab_mode = *tab_mode;
                    let class = if mode() == tab_mode { "tab tab-active" } else { "tab" };

                    rsx!(
                        button {
                            key: "{label}",
                            class: "{class}",
                            onclick: move |_| mode.set(tab_mode),
                            "{label}"
                        }
                    )
                })}
            }

            {pane}
        }
    )
}

#[component]
fn MetricCard(
    value: &'static str,
    label: &'static str,
    caption: &'static str,
    tone: &'static str,
) -> Element {
    rsx!(
        div { class: "card bg-base-100 border border-base-300 shadow-sm",
            div { class: "card-body p-4",
                span { class: "text-2xl font-bold", "{value}" }
                span { class: "text-xs opacity-60 uppercase tracking-wider", "{label}" }
                span { class: "text-xs font-semibold {tone}", "{caption}" }
            }
        }
    )
}

#[component]
fn AiInterview() -> Element {
    let mut messages = use_signal(seed_messages);
    let mut draft = use_signal(String::new);

    let mut send_answer = move || {
        let body = draft.read().trim().to_string();
        if body.is_empty() {
            return;
        }
        messages.write().push(ChatMessage {
            from_student: true,
            body,
        });
        draft.set(String::new());

        #[cfg(feature = "web")]
        spawn(async move {
            crate::client::util::browser::sleep_ms(1000).await;
            messages.write().push(ChatMessage {
                from_student: false,
                body: FOLLOW_UP_QUESTION.to_string(),
            });
        });
    };

    rsx!(
        div { class: "grid lg:grid-cols-3 gap-6",
            div { class: "lg:col-span-2 card bg-base-100 border border-base-300 overflow-hidden",
                div { class: "p-4 border-b border-base-300 bg-base-200 flex justify-between items-center",
                    div { class: "flex items-center gap-2",
                        span { class: "relative flex h-3 w-3",
                            span { class: "animate-ping absolute inline-flex h-full w-full rounded-full bg-success opacity-75" }
                            span { class: "relative inline-flex rounded-full h-3 w-3 bg-success" }
                        }
                        span { class: "font-bold text-sm", "AI Interviewer is Active" }
                    }
                    button {
                        class: "btn btn-outline btn-error btn-xs",
                        onclick: move |_| {
                            messages.set(seed_messages());
                            draft.set(String::new());
                        },
                        "End Session"
                    }
                }

                div { class: "h-96 overflow-y-auto p-4 flex flex-col gap-2",
                    {messages.read().iter().enumerate().map(|(index, message)| {
                        let (side, bubble, icon) = if message.from_student {
                            ("chat chat-end", "chat-bubble chat-bubble-primary", rsx!(Icon { width: 16, height: 16, icon: FaUser }))
                        } else {
                            ("chat chat-start", "chat-bubble", rsx!(Icon { width: 16, height: 16, icon: FaRobot }))
                        };

                        rsx!(
                            div { key: "{index}", class: "{side}",
                                div { class: "chat-image avatar placeholder",
                                    div { class: "w-8 rounded-full bg-base-300 flex items-center justify-center",
                                        {icon}
                                    }
                                }
                                div { class: "{bubble}", "{message.body}" }
                            }
                        )
                    })}
                }

                div { class: "p-4 border-t border-base-300 flex gap-2",
                    button { class: "btn btn-ghost btn-circle",
                        Icon { width: 18, height: 18, icon: FaMicrophone }
                    }
                    input {
                        class: "input input-bordered flex-1",
                        placeholder: "Type your answer...",
                        value: "{draft}",
                        oninput: move |event| draft.set(event.value()),
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| send_answer(),
                        Icon { width: 16, height: 16, icon: FaPaperPlane }
                    }
                }
            }

            div { class: "flex flex-col gap-6",
                div { class: "card bg-base-100 border border-base-300",
                    div { class: "card-body",
                        h3 { class: "card-title text-base", "Live Feedback" }
                        FeedbackBar { label: "Confidence", percent: 85 }
                        FeedbackBar { label: "Clarity", percent: 92 }
                    }
                }
                div { class: "card bg-base-100 border border-base-300",
                    div { class: "card-body",
                        h3 { class: "card-title text-base", "Suggested Topics" }
                        div { class: "flex flex-wrap gap-2",
                            {SUGGESTED_TOPICS.iter().map(|topic| rsx!(
                                span { class: "badge badge-outline", "{topic}" }
                            ))}
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn FeedbackBar(label: &'static str, percent: u32) -> Element {
    rsx!(
        div {
            div { class: "flex justify-between text-sm mb-1",
                span { "{label}" }
                span { class: "font-semibold", "{percent}%" }
            }
            progress {
                class: "progress progress-primary w-full",
                value: "{percent}",
                max: "100",
            }
        }
    )
}

#[component]
fn ExpertSchedule() -> Element {
    rsx!(
        div { class: "grid md:grid-cols-2 gap-6",
            div { class: "card bg-base-100 border border-base-300",
                div { class: "card-body",
                    h3 { class: "card-title", "Schedule with Mentors" }
                    ul { class: "flex flex-col gap-3 my-4",
                        ExpertPerk { text: "1-on-1 Session with Industry Experts" }
                        ExpertPerk { text: "Detailed Performance Report" }
                        ExpertPerk { text: "Mock HR & Technical Rounds" }
                    }
                    div { class: "card-actions",
                        button { class: "btn btn-primary w-full", "Book a Slot" }
                    }
                }
            }
            div { class: "card bg-base-100 border border-base-300",
                div { class: "card-body",
                    h3 { class: "card-title text-base", "Upcoming Slots" }
                    {MENTOR_SLOTS.iter().map(|slot| rsx!(
                        div {
                            key: "{slot}",
                            class: "flex items-center justify-between p-3 rounded-box border border-base-300",
                            div { class: "flex items-center gap-3",
                                div { class: "avatar placeholder",
                                    div { class: "w-10 rounded-full bg-neutral text-neutral-content flex items-center justify-center",
                                        span { class: "text-xs font-bold", "EX" }
                                    }
                                }
                                div {
                                    p { class: "font-semibold text-sm", "{slot}" }
                                    p { class: "text-xs opacity-60", "Senior Frontend Dev" }
                                }
                            }
                            button { class: "btn btn-outline btn-sm", "Book" }
                        }
                    ))}
                }
            }
        }
    )
}

#[component]
fn ExpertPerk(text: &'static str) -> Element {
    rsx!(
        li { class: "flex items-center gap-2 text-sm",
            span { class: "text-success",
                Icon { width: 14, height: 14, icon: FaCircleCheck }
            }
            "{text}"
        }
    )
}

#[component]
fn SelfPractice() -> Element {
    rsx!(
        div { class: "card bg-base-100 border border-base-300",
            div { class: "card-body items-center text-center py-12",
                div { class: "text-primary",
                    Icon { width: 48, height: 48, icon: FaMicrophone }
                }
                h3 { class: "card-title mt-4", "Self-Paced Practice" }
                p { class: "max-w-md opacity-70",
                    "Record yourself answering common interview questions and review the playback to polish your delivery."
                }
                button { class: "btn btn-primary mt-4", "Start Session" }
            }
        }
    )
}
