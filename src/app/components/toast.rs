//! Transient success banner for the contact form.
//!
//! Shown for four seconds, then plays a short exit animation before the
//! node is removed entirely. Timing lives here; the phase signal is owned
//! by whoever triggers the toast.

use dioxus::prelude::*;

/// How long the banner stays fully visible.
pub const TOAST_DISPLAY_MS: i32 = 4000;
/// Exit animation length before the node is dropped.
pub const TOAST_EXIT_MS: i32 = 300;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ToastPhase {
    #[default]
    Hidden,
    Visible,
    Leaving,
}

/// Renders nothing while hidden; the `toast-leaving` class drives the exit
/// animation in CSS.
#[component]
pub fn Toast(phase: Signal<ToastPhase>, message: String) -> Element {
    rsx! {
        if phase() != ToastPhase::Hidden {
            div {
                class: if phase() == ToastPhase::Leaving { "toast toast-leaving" } else { "toast" },
                role: "status",
                "{message}"
            }
        }
    }
}

/// Kick off the show -> leave -> hidden sequence. Outside the browser the
/// banner simply appears; there is no timer to retire it during SSR.
pub fn show_toast(phase: Signal<ToastPhase>) {
    let mut phase = phase;
    phase.set(ToastPhase::Visible);

    #[cfg(target_arch = "wasm32")]
    {
        schedule(TOAST_DISPLAY_MS, move || {
            let mut phase = phase;
            phase.set(ToastPhase::Leaving);
            schedule(TOAST_EXIT_MS, move || {
                let mut phase = phase;
                phase.set(ToastPhase::Hidden);
            });
        });
    }
}

/// One-shot timer; the closure frees itself after firing.
#[cfg(target_arch = "wasm32")]
fn schedule(ms: i32, callback: impl FnOnce() + 'static) {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    let callback = Closure::once_into_js(callback);
    if let Some(window) = web_sys::window() {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref::<js_sys::Function>(),
            ms,
        );
    }
}
