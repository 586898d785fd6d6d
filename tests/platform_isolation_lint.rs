#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! Architecture enforcement lints for the scroll engine.
//!
//! The engine under `src/scroll/` is the testable core of the site: it must
//! stay platform-free so every property can be exercised without a browser.
//! Platform bindings belong in `src/app/scroll_driver.rs` and nowhere else.
//!
//! These tests scan and parse the source directly:
//! 1. No browser/framework crate may leak into `src/scroll/`.
//! 2. Non-test engine code must not `unwrap()`/`expect()` - missing layout
//!    is a per-frame no-op, never a panic.
//! 3. The tuning constants the visual contract depends on must not drift.

use std::fs;
use std::path::Path;

use syn::visit::Visit;
use syn::ExprMethodCall;
use walkdir::WalkDir;

/// Crates that must never appear in the platform-free engine.
const FORBIDDEN_IN_ENGINE: &[(&str, &str)] = &[
    ("web_sys", "DOM access belongs in src/app/scroll_driver.rs"),
    ("js_sys", "JS interop belongs in src/app/scroll_driver.rs"),
    ("wasm_bindgen", "wasm glue belongs in src/app/scroll_driver.rs"),
    ("dioxus", "UI concerns belong under src/app/"),
];

fn engine_sources() -> Vec<std::path::PathBuf> {
    WalkDir::new("src/scroll")
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.path().extension() == Some(std::ffi::OsStr::new("rs")))
        .map(|entry| entry.path().to_path_buf())
        .collect()
}

#[test]
fn lint_engine_is_platform_free() {
    let sources = engine_sources();
    assert!(!sources.is_empty(), "engine sources should exist");

    let mut violations = Vec::new();
    for path in &sources {
        let src = fs::read_to_string(path)
            .unwrap_or_else(|_| panic!("failed to read {}", path.display()));
        for (needle, hint) in FORBIDDEN_IN_ENGINE {
            if src.contains(needle) {
                violations.push(format!("{}: references `{needle}` - {hint}", path.display()));
            }
        }
    }

    assert!(
        violations.is_empty(),
        "platform code leaked into the engine:\n{}",
        violations.join("\n")
    );
}

/// Collects `unwrap`/`expect` calls outside `#[cfg(test)]` modules.
struct PanicVisitor {
    current_file: String,
    violations: Vec<String>,
}

impl<'ast> Visit<'ast> for PanicVisitor {
    fn visit_item_mod(&mut self, node: &'ast syn::ItemMod) {
        if is_cfg_test(&node.attrs) {
            return; // test modules may unwrap freely
        }
        syn::visit::visit_item_mod(self, node);
    }

    fn visit_expr_method_call(&mut self, node: &'ast ExprMethodCall) {
        let method = node.method.to_string();
        if method == "unwrap" || method == "expect" {
            self.violations
                .push(format!("{}: `.{}()` in non-test code", self.current_file, method));
        }
        syn::visit::visit_expr_method_call(self, node);
    }
}

fn is_cfg_test(attrs: &[syn::Attribute]) -> bool {
    attrs.iter().any(|attr| {
        if !attr.path().is_ident("cfg") {
            return false;
        }
        match &attr.meta {
            syn::Meta::List(list) => list.tokens.to_string().contains("test"),
            _ => false,
        }
    })
}

#[test]
fn lint_engine_never_panics_on_missing_layout() {
    let mut violations = Vec::new();
    for path in engine_sources() {
        let src = fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("failed to read {}", path.display()));
        let file = syn::parse_file(&src)
            .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));

        let mut visitor = PanicVisitor {
            current_file: path.display().to_string(),
            violations: Vec::new(),
        };
        visitor.visit_file(&file);
        violations.extend(visitor.violations);
    }

    assert!(
        violations.is_empty(),
        "engine code must degrade, not panic:\n{}",
        violations.join("\n")
    );
}

// =============================================================================
// Tuning-constant regression lints. The visual contract is built on these
// exact values; a silent change shows up here before it shows up on screen.
// =============================================================================

fn read(path: &str) -> String {
    fs::read_to_string(Path::new(path)).unwrap_or_else(|_| panic!("failed to read {path}"))
}

#[test]
fn lint_smoothing_constants_hold() {
    let state = read("src/scroll/state.rs");
    assert!(
        state.contains("alpha: 0.12"),
        "scroll smoothing must close 12% of the gap per frame"
    );
    assert!(
        state.contains("epsilon: 0.5"),
        "the loop settles at half a unit from target"
    );
    assert!(
        state.contains("alpha: 0.18"),
        "band cross-fade uses its own smoothing coefficient"
    );
}

#[test]
fn lint_effect_constants_hold() {
    let module = read("src/scroll/mod.rs");
    assert!(module.contains("NAVBAR_THRESHOLD: f64 = 50.0"));
    assert!(module.contains("PARALLAX_FACTOR: f64 = 0.45"));
    assert!(module.contains("OVERLAY_MARGIN: f64 = 10.0"));
    assert!(module.contains("TRACKING_LINE_OFFSET: f64 = 120.0"));
    assert!(module.contains("BAND_RANGE_FACTOR: f64 = 0.75"));
    assert!(module.contains("OBSERVER_MIN_RATIO: f64 = 0.25"));
    assert!(module.contains("OBSERVER_BOTTOM_FRACTION: f64 = 0.40"));
}

#[test]
fn lint_theme_storage_contract_holds() {
    let theme = read("src/app/theme.rs");
    assert!(
        theme.contains(r#"STORAGE_KEY: &str = "theme""#),
        "persisted preference lives under the `theme` key"
    );
    assert!(
        theme.contains(r#""dark" => Theme::Dark"#),
        "stored value `dark` selects the dark scheme"
    );
}
