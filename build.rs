//! Build script to inject version and git SHA at compile time.
//!
//! Environment variables (set by CI or fall back to defaults):
//! - PORTFOLIO_VERSION: Version string (defaults to CARGO_PKG_VERSION)
//! - PORTFOLIO_GIT_SHA: Git commit SHA (defaults to "unknown" or git rev-parse)

use std::process::Command;

fn main() {
    // Version: prefer PORTFOLIO_VERSION env var, fall back to CARGO_PKG_VERSION
    let version = std::env::var("PORTFOLIO_VERSION").unwrap_or_else(|_| {
        std::env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "unknown".into())
    });
    println!("cargo:rustc-env=PORTFOLIO_VERSION={}", version);

    // Git SHA: prefer PORTFOLIO_GIT_SHA, then GITHUB_SHA, then try git command
    let git_sha = std::env::var("PORTFOLIO_GIT_SHA")
        .or_else(|_| std::env::var("GITHUB_SHA").map(|s| s[..7].to_string()))
        .unwrap_or_else(|_| get_git_sha());
    println!("cargo:rustc-env=PORTFOLIO_GIT_SHA={}", git_sha);

    // Rebuild if these change
    println!("cargo:rerun-if-env-changed=PORTFOLIO_VERSION");
    println!("cargo:rerun-if-env-changed=PORTFOLIO_GIT_SHA");
    println!("cargo:rerun-if-env-changed=GITHUB_SHA");
}

fn get_git_sha() -> String {
    Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .and_then(|o| {
            if o.status.success() {
                String::from_utf8(o.stdout)
                    .ok()
                    .map(|s| s.trim().to_string())
            } else {
                None
            }
        })
        .unwrap_or_else(|| "unknown".into())
}
