//! Projects section: a card grid revealed as it scrolls into view.

use dioxus::prelude::*;

struct Project {
    title: &'static str,
    blurb: &'static str,
    tags: &'static [&'static str],
}

const PROJECTS: &[Project] = &[
    Project {
        title: "liveboard",
        blurb: "Realtime kanban with CRDT sync and offline-first storage.",
        tags: &["Rust", "WebSockets", "CRDT"],
    },
    Project {
        title: "shutterlog",
        blurb: "A photo-journal generator that turns EXIF trails into maps.",
        tags: &["TypeScript", "SvelteKit"],
    },
    Project {
        title: "pedalstats",
        blurb: "GPS ride analytics with elevation smoothing and segment detection.",
        tags: &["Rust", "Axum", "Postgres"],
    },
    Project {
        title: "quietmail",
        blurb: "Batched notification digests so inboxes breathe again.",
        tags: &["Go", "IMAP"],
    },
];

#[component]
pub fn Projects() -> Element {
    rsx! {
        section { id: "projects", class: "section section-projects",
            div { class: "container",
                h2 { class: "section-title", "Projects" }
                div { class: "project-grid",
                    for project in PROJECTS {
                        article { class: "project-card",
                            h3 { "{project.title}" }
                            p { "{project.blurb}" }
                            ul { class: "tag-list",
                                for tag in project.tags.iter().copied() {
                                    li { class: "tag", "{tag}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
