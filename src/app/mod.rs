//! Dioxus fullstack application entry point.
//!
//! This module provides the main App component that serves as the root
//! of the Dioxus application with client-side hydration.

use dioxus::prelude::*;

pub mod components;
pub mod pages;
pub mod scroll_driver;
pub mod theme;

use pages::Home;
use theme::use_theme_provider;

/// Root app component with routing
#[component]
pub fn App() -> Element {
    // Initialize theme context at app root (handles localStorage + DOM attribute)
    use_theme_provider();

    rsx! {
        Router::<Route> {}
    }
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
}
