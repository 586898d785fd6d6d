//! Page layout: head links, navigation, content, footer.

use dioxus::prelude::*;

use super::nav::Nav;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab)
    pub title: String,
    /// Page content
    pub children: Element,
}

/// Wraps page content with the shared chrome.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let version = env!("PORTFOLIO_VERSION");
    let full_title = format!("{} · Daniel Reyes", props.title);

    rsx! {
        // Head elements - Dioxus hoists these to the real <head>
        document::Title { "{full_title}" }
        document::Link {
            rel: "stylesheet",
            href: asset!("/public/portfolio.css")
        }
        document::Link {
            rel: "icon",
            r#type: "image/svg+xml",
            href: asset!("/public/favicon.svg")
        }

        Nav {}

        main { {props.children} }

        footer { class: "site-footer",
            p { "© Daniel Reyes" }
            p { class: "footer-meta", "built with Rust · v{version}" }
        }
    }
}
