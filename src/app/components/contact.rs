//! Contact section: client-side validation and submission feedback.
//!
//! There is no transport behind the form. Valid input clears the fields and
//! raises the success toast; invalid input blocks submission with an alert
//! listing what's missing.

use std::sync::LazyLock;

use dioxus::prelude::*;
use regex::Regex;

use super::toast::{show_toast, Toast, ToastPhase};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // one @, at least one dot after it, no whitespace anywhere
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Returns the list of problems, empty when the form may submit.
pub fn validate(name: &str, email: &str, message: &str) -> Vec<&'static str> {
    let mut problems = Vec::new();
    if name.trim().is_empty() {
        problems.push("Please enter your name.");
    }
    if !is_valid_email(email.trim()) {
        problems.push("Please enter a valid email address.");
    }
    if message.trim().is_empty() {
        problems.push("Please enter a message.");
    }
    problems
}

#[component]
pub fn Contact() -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);
    let toast_phase = use_signal(ToastPhase::default);

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        let problems = validate(&name(), &email(), &message());
        if !problems.is_empty() {
            blocking_alert(&problems.join("\n"));
            return;
        }

        tracing::info!(name = %name().trim(), "contact form submitted");
        name.set(String::new());
        email.set(String::new());
        message.set(String::new());
        show_toast(toast_phase);
    };

    rsx! {
        section { id: "contact", class: "section section-contact",
            div { class: "container",
                h2 { class: "section-title", "Contact" }
                p { "Have a project in mind? Drop me a line." }
                form { class: "contact-form", onsubmit: on_submit,
                    label {
                        span { "Name" }
                        input {
                            r#type: "text",
                            name: "name",
                            value: "{name}",
                            oninput: move |evt| name.set(evt.value()),
                        }
                    }
                    label {
                        span { "Email" }
                        input {
                            r#type: "email",
                            name: "email",
                            value: "{email}",
                            oninput: move |evt| email.set(evt.value()),
                        }
                    }
                    label {
                        span { "Message" }
                        textarea {
                            name: "message",
                            rows: "5",
                            value: "{message}",
                            oninput: move |evt| message.set(evt.value()),
                        }
                    }
                    button { class: "btn btn-primary", r#type: "submit", "Send message" }
                }
                Toast {
                    phase: toast_phase,
                    message: "Thanks for reaching out — I'll get back to you soon.".to_string(),
                }
            }
        }
    }
}

/// User-visible blocking alert; a log line elsewhere.
fn blocking_alert(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::warn!("form validation failed: {message}");
    }
}
