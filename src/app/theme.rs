//! Theme management with localStorage persistence.
//!
//! Provides a theme context for the light/dark preference. The stored key
//! is `theme` with values `"light"` / `"dark"`; absence means light.

use dioxus::prelude::*;

/// Browser-local storage key for the persisted preference.
pub const STORAGE_KEY: &str = "theme";

/// Theme options
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Unknown or missing values fall back to light.
    pub fn parse(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Glyph shown on the toggle control: the moon offers dark mode, the
    /// sun offers the way back.
    pub fn toggle_glyph(&self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }
}

/// Global theme state shared via context
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub current: Signal<Theme>,
}

impl ThemeContext {
    /// Get current theme
    pub fn get(&self) -> Theme {
        (self.current)()
    }

    /// Set and persist theme
    pub fn set(&self, theme: Theme) {
        let mut current = self.current;
        current.set(theme);

        // Apply to DOM and save to localStorage
        #[cfg(target_arch = "wasm32")]
        {
            apply_theme_to_dom(theme);
            save_theme_to_storage(theme);
        }
    }

    /// Flip between light and dark
    pub fn toggle(&self) {
        self.set(self.get().toggled());
    }
}

/// Initialize theme context provider - call once at app root
pub fn use_theme_provider() {
    let current = use_signal(Theme::default);

    let ctx = ThemeContext { current };
    use_context_provider(|| ctx);

    // Client-side only: load from localStorage and apply
    #[cfg(target_arch = "wasm32")]
    {
        let mut current = current;
        use_effect(move || {
            let saved = load_theme_from_storage();
            current.set(saved);
            apply_theme_to_dom(saved);
        });
    }
}

/// Get theme context - use in any component
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
}

// ============ WASM-only helpers ============

#[cfg(target_arch = "wasm32")]
fn load_theme_from_storage() -> Theme {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(value)) = storage.get_item(STORAGE_KEY) {
                return Theme::parse(&value);
            }
        }
    }
    Theme::default()
}

#[cfg(target_arch = "wasm32")]
fn save_theme_to_storage(theme: Theme) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if storage.set_item(STORAGE_KEY, theme.as_str()).is_err() {
                tracing::warn!("theme preference could not be persisted");
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn apply_theme_to_dom(theme: Theme) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute("data-color-scheme", theme.as_str());
        }
    }
}
