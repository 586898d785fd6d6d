//! About section.

use dioxus::prelude::*;

#[component]
pub fn About() -> Element {
    rsx! {
        section { id: "about", class: "section section-about",
            div { class: "container",
                h2 { class: "section-title", "About" }
                p {
                    "I'm a developer who cares about the space between \"it works\" "
                    "and \"it feels right\". Most of my days are spent in Rust and "
                    "TypeScript, building interfaces that stay out of the way."
                }
                p {
                    "Away from the keyboard I ride long distances on small wheels "
                    "and take photographs of buildings nobody else stops for."
                }
            }
        }
    }
}
