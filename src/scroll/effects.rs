//! Per-frame visual-effect computations.
//!
//! Everything here is a pure function of the smoothed scroll value and the
//! current layout boxes. Application to the page happens behind the
//! [`EffectSink`](super::controller::EffectSink) seam, so these stay
//! checkable without a rendering engine.

use super::geom::{PageMetrics, Rect};
use super::{
    BAND_DRIFT_FACTOR, BAND_DRIFT_LIMIT, BAND_RANGE_FACTOR, NAVBAR_THRESHOLD, OVERLAY_MARGIN,
    PARALLAX_FACTOR,
};

/// Binary navbar treatment keyed on the smoothed scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarState {
    Flat,
    Elevated,
}

/// Elevated above the threshold, flat at or below it. Assignment semantics:
/// callers reapply the result every frame rather than toggling.
pub fn navbar_state(current: f64) -> NavbarState {
    if current > NAVBAR_THRESHOLD {
        NavbarState::Elevated
    } else {
        NavbarState::Flat
    }
}

/// Vertical hero displacement, `None` when parallax is disabled. The sink
/// applies this as a 3-D translation so only compositor properties move.
pub fn parallax_offset(current: f64, reduced_motion: bool) -> Option<f64> {
    if reduced_motion {
        None
    } else {
        Some(current * PARALLAX_FACTOR)
    }
}

/// The hand-off between the hero and the section that catches it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayEffect {
    /// Offset applied to the following section.
    pub translate: f64,
    /// Whether the overlay marker is set this frame.
    pub active: bool,
}

/// How far the following section has "caught up" with the scrolled-out part
/// of the hero. Both activation conditions must hold, otherwise the overlay
/// would engage before the following section reaches the nav line or linger
/// after the hero is gone.
pub fn overlay(hero: Rect, following: Rect, metrics: &PageMetrics) -> OverlayEffect {
    let nav = metrics.nav_height;
    let visible_hero = (hero.bottom() - nav).clamp(0.0, hero.height);
    let scrolled_out = hero.height - visible_hero;
    let translate = scrolled_out.clamp(0.0, following.height);

    let threshold = nav + OVERLAY_MARGIN;
    let active = following.top <= threshold && hero.bottom() > threshold;

    OverlayEffect { translate, active }
}

/// Target opacity for a section's band: 1 at viewport center, fading to 0 at
/// three quarters of a viewport away.
pub fn band_target_opacity(section: Rect, metrics: &PageMetrics) -> f64 {
    let viewport_center = metrics.viewport_height / 2.0;
    let distance = (section.center() - viewport_center).abs();
    let range = BAND_RANGE_FACTOR * metrics.viewport_height;
    if range <= 0.0 {
        return 0.0;
    }
    (1.0 - distance / range).clamp(0.0, 1.0)
}

/// Small vertical drift keeping band swaps from popping when the stacking
/// parity flips. Proportional to the section's offset from the nav line,
/// clamped so distant sections don't drag their band off-screen.
pub fn band_drift(section: Rect, metrics: &PageMetrics) -> f64 {
    ((section.top - metrics.nav_height) * BAND_DRIFT_FACTOR)
        .clamp(-BAND_DRIFT_LIMIT, BAND_DRIFT_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(viewport_height: f64, nav_height: f64) -> PageMetrics {
        PageMetrics {
            viewport_height,
            nav_height,
            scroll_height: 4000.0,
        }
    }

    #[test]
    fn navbar_flips_strictly_above_threshold() {
        assert_eq!(navbar_state(0.0), NavbarState::Flat);
        assert_eq!(navbar_state(NAVBAR_THRESHOLD), NavbarState::Flat);
        assert_eq!(navbar_state(NAVBAR_THRESHOLD + 0.1), NavbarState::Elevated);
    }

    #[test]
    fn navbar_is_idempotent() {
        assert_eq!(navbar_state(300.0), navbar_state(300.0));
    }

    #[test]
    fn parallax_scales_and_respects_reduced_motion() {
        assert_eq!(parallax_offset(1000.0, false), Some(450.0));
        assert_eq!(parallax_offset(1000.0, true), None);
    }

    #[test]
    fn overlay_inactive_at_scroll_zero() {
        let m = metrics(800.0, 64.0);
        // Page at rest: hero fills the viewport, following section below it.
        let hero = Rect::new(0.0, 800.0);
        let following = Rect::new(800.0, 600.0);
        let fx = overlay(hero, following, &m);
        assert!(!fx.active);
        assert_eq!(fx.translate, 0.0);
    }

    #[test]
    fn overlay_activates_while_following_section_catches_hero() {
        let m = metrics(800.0, 64.0);
        // Mid hand-off: the hero still reaches past the nav line while the
        // (already translated) following section has climbed up to it.
        let hero = Rect::new(-500.0, 800.0);
        let following = Rect::new(50.0, 600.0);
        let fx = overlay(hero, following, &m);
        assert!(fx.active);
        assert_eq!(fx.translate, 564.0);
    }

    #[test]
    fn overlay_releases_once_hero_fully_gone() {
        let m = metrics(800.0, 64.0);
        let hero = Rect::new(-1400.0, 800.0);
        let following = Rect::new(-600.0, 600.0);
        let fx = overlay(hero, following, &m);
        assert!(!fx.active, "hero bottom above nav line ends the overlay");
        // translate stays clamped to the follower's height
        assert_eq!(fx.translate, 600.0);
    }

    #[test]
    fn band_opacity_peaks_at_viewport_center() {
        let m = metrics(800.0, 64.0);
        let centered = Rect::new(300.0, 200.0); // center 400 = viewport center
        assert_eq!(band_target_opacity(centered, &m), 1.0);

        let off = Rect::new(900.0, 200.0); // center 1000, distance 600 = full range
        assert_eq!(band_target_opacity(off, &m), 0.0);
    }

    #[test]
    fn band_opacity_is_monotonic_in_distance() {
        let m = metrics(800.0, 64.0);
        let near = Rect::new(350.0, 200.0);
        let mid = Rect::new(550.0, 200.0);
        let far = Rect::new(750.0, 200.0);
        let a = band_target_opacity(near, &m);
        let b = band_target_opacity(mid, &m);
        let c = band_target_opacity(far, &m);
        assert!(a > b && b > c);
    }

    #[test]
    fn band_drift_is_clamped() {
        let m = metrics(800.0, 64.0);
        let far_below = Rect::new(5000.0, 200.0);
        assert_eq!(band_drift(far_below, &m), BAND_DRIFT_LIMIT);
        let far_above = Rect::new(-5000.0, 200.0);
        assert_eq!(band_drift(far_above, &m), -BAND_DRIFT_LIMIT);
    }
}
