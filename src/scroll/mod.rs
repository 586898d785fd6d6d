//! Frame-driven scroll-effects engine.
//!
//! Decouples the scroll event stream (high, unpredictable frequency) from
//! visual updates (once per animation frame) with exponential smoothing.
//! The engine is platform-free: it reads layout through
//! [`PageModel`] bounds providers and emits effects through the
//! [`EffectSink`] trait, so every property is testable without a browser.
//! The wasm binding lives in `crate::app::scroll_driver`.

pub mod controller;
pub mod effects;
pub mod geom;
pub mod sections;
pub mod state;
pub mod tracker;

pub use controller::{ControllerConfig, EffectSink, FrameOutcome, ScrollController};
pub use effects::{NavbarState, OverlayEffect};
pub use geom::{PageMetrics, Rect};
pub use sections::{BandDescriptor, BoundsProvider, PageModel, SectionDescriptor, ZParity};
pub use state::{ScrollState, Smoothing};
pub use tracker::{observer_root_margin, ObserverTracker, TrackerStrategy, VisibilityEntry};

/// Scroll offset above which the navbar takes its elevated treatment.
pub const NAVBAR_THRESHOLD: f64 = 50.0;

/// Hero displacement per unit of smoothed scroll.
pub const PARALLAX_FACTOR: f64 = 0.45;

/// Slack around the nav line for overlay activation, keeping the hand-off
/// from engaging or lingering at the scroll extremes.
pub const OVERLAY_MARGIN: f64 = 10.0;

/// Distance below the nav bar of the line that active-link tracking keys on.
pub const TRACKING_LINE_OFFSET: f64 = 120.0;

/// Band opacity fades to zero at this fraction of a viewport from center.
pub const BAND_RANGE_FACTOR: f64 = 0.75;

/// Band drift per unit of section offset from the nav line.
pub const BAND_DRIFT_FACTOR: f64 = 0.05;

/// Band drift is clamped to this many units either way.
pub const BAND_DRIFT_LIMIT: f64 = 24.0;

/// Minimum visible fraction for a section to claim the active link under
/// observer tracking.
pub const OBSERVER_MIN_RATIO: f64 = 0.25;

/// Fraction of the viewport height excluded from the tracked band at the
/// bottom.
pub const OBSERVER_BOTTOM_FRACTION: f64 = 0.40;
