//! Portfolio Web
//!
//! A personal portfolio site built as a Dioxus fullstack crate.
//!
//! This library provides:
//! - A platform-free scroll-effects engine (smoothing loop, parallax,
//!   overlay hand-off, background bands, active-link tracking)
//! - The Dioxus UI with theme persistence and a client-side contact form
//! - An axum server shell for SSR + hydration (behind the `server` feature)

pub mod app;
#[cfg(feature = "server")]
pub mod config;
pub mod scroll;
