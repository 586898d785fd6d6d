//! Navigation bar: brand, anchor links, mobile menu, and the theme toggle.
//!
//! The active link class is owned by the scroll engine's tracker, not by
//! component state; the driver assigns it directly on the rendered anchors.

use dioxus::prelude::*;

use crate::app::scroll_driver::scroll_to_section;
use crate::app::theme::use_theme;

/// Anchor targets in document order.
const NAV_LINKS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("about", "About"),
    ("projects", "Projects"),
    ("skills", "Skills"),
    ("contact", "Contact"),
];

/// Fixed top navigation. The `elevated` class is applied by the scroll
/// engine once the page scrolls past the threshold.
#[component]
pub fn Nav() -> Element {
    let theme = use_theme();
    let mut menu_open = use_signal(|| false);
    let theme_glyph = theme.get().toggle_glyph();

    rsx! {
        header { id: "navbar",
            nav { class: "nav-inner",
                a {
                    class: "brand",
                    href: "#home",
                    onclick: move |evt| {
                        evt.prevent_default();
                        scroll_to_section("home");
                    },
                    "Daniel Reyes"
                }
                button {
                    class: "menu-toggle",
                    aria_label: "Toggle navigation menu",
                    onclick: move |_| {
                        let open = menu_open();
                        menu_open.set(!open);
                    },
                    "☰"
                }
                ul { class: if menu_open() { "nav-menu open" } else { "nav-menu" },
                    for (id, label) in NAV_LINKS.iter().copied() {
                        li {
                            a {
                                class: "nav-link",
                                href: "#{id}",
                                onclick: move |evt| {
                                    evt.prevent_default();
                                    // any link click closes the mobile menu
                                    menu_open.set(false);
                                    scroll_to_section(id);
                                },
                                "{label}"
                            }
                        }
                    }
                }
                button {
                    class: "theme-toggle",
                    aria_label: "Toggle color scheme",
                    onclick: move |_| theme.toggle(),
                    "{theme_glyph}"
                }
            }
        }
    }
}
