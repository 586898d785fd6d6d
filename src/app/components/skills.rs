//! Skills section.

use dioxus::prelude::*;

const SKILL_GROUPS: &[(&str, &[&str])] = &[
    ("Languages", &["Rust", "TypeScript", "Go", "SQL"]),
    ("Frontend", &["Dioxus", "Svelte", "CSS", "WebGL"]),
    ("Backend", &["Axum", "Postgres", "Redis", "NATS"]),
    ("Practices", &["Profiling", "CI/CD", "Accessibility"]),
];

#[component]
pub fn Skills() -> Element {
    rsx! {
        section { id: "skills", class: "section section-skills",
            div { class: "container",
                h2 { class: "section-title", "Skills" }
                div { class: "skill-grid",
                    for (group, items) in SKILL_GROUPS.iter().copied() {
                        div { class: "skill-group",
                            h3 { "{group}" }
                            ul {
                                for item in items.iter().copied() {
                                    li { "{item}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
