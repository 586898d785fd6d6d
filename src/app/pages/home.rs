//! The portfolio page: every section under the shared layout, with the
//! scroll engine wired once the client mounts.

use dioxus::prelude::*;

use crate::app::components::{About, Contact, Hero, Layout, Projects, Skills};
use crate::app::scroll_driver::use_scroll_effects;

#[component]
pub fn Home() -> Element {
    use_scroll_effects();

    rsx! {
        Layout {
            title: "Portfolio".to_string(),
            Hero {}
            About {}
            Projects {}
            Skills {}
            Contact {}
        }
    }
}
