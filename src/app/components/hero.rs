//! Hero section. The inner content block is the parallax target; the
//! section element itself stays untransformed so its layout box keeps
//! feeding the engine honest geometry.

use dioxus::prelude::*;

use crate::app::scroll_driver::scroll_to_section;

#[component]
pub fn Hero() -> Element {
    rsx! {
        section { id: "home", class: "hero",
            div { class: "hero-content",
                p { class: "hero-kicker", "Hi, my name is" }
                h1 { class: "hero-title", "Daniel Reyes." }
                h2 { class: "hero-subtitle", "I build things for the web." }
                p { class: "hero-lede",
                    "Systems-minded web developer with a soft spot for fast, "
                    "quiet interfaces. Currently exploring Rust on both sides "
                    "of the wire."
                }
                div { class: "hero-actions",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| scroll_to_section("projects"),
                        "View my work"
                    }
                    button {
                        class: "btn btn-ghost",
                        onclick: move |_| scroll_to_section("contact"),
                        "Get in touch"
                    }
                }
            }
        }
    }
}
