//! Active-navigation-link tracking.
//!
//! Two strategies, chosen once at startup: an intersection-driven tracker
//! when the host can observe section visibility, and a per-frame polled
//! fallback otherwise. The polled midline rule is the authoritative
//! definition of "active"; the observer thresholds approximate it (see
//! DESIGN.md), and both converge at steady state: the section occupying the
//! area just below the navigation bar.

use super::geom::PageMetrics;
use super::sections::SectionDescriptor;
use super::{OBSERVER_BOTTOM_FRACTION, OBSERVER_MIN_RATIO, TRACKING_LINE_OFFSET};

/// Which tracking strategy the controller runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerStrategy {
    /// Visibility-threshold tracking fed by the host's observer callbacks.
    Observer,
    /// Per-frame document-order scan inside the smoothing loop.
    Polled,
}

/// One observer callback record: a section's visible fraction within the
/// tracked band.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityEntry {
    pub id: String,
    pub ratio: f64,
    pub intersecting: bool,
}

/// Root-margin for the observed band: everything from the top down to
/// `nav_height + 120` and the bottom 40% of the viewport are excluded.
pub fn observer_root_margin(nav_height: f64) -> String {
    let top = nav_height + TRACKING_LINE_OFFSET;
    let bottom_pct = (OBSERVER_BOTTOM_FRACTION * 100.0).round() as i64;
    format!("-{}px 0px -{}% 0px", top.round() as i64, bottom_pct)
}

/// Reduces observer callbacks to at most one active section id.
#[derive(Debug, Default)]
pub struct ObserverTracker {
    active: Option<String>,
}

impl ObserverTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Fold a batch of entries into the active id. Last qualifying entry
    /// wins; the current active section is cleared when it fully leaves the
    /// band and nothing else qualifies.
    pub fn update(&mut self, entries: &[VisibilityEntry]) -> Option<&str> {
        let mut qualified = None;
        for entry in entries {
            if entry.intersecting && entry.ratio > OBSERVER_MIN_RATIO {
                qualified = Some(entry.id.clone());
            }
        }

        if let Some(id) = qualified {
            self.active = Some(id);
        } else if let Some(active) = &self.active {
            let left_band = entries
                .iter()
                .any(|entry| !entry.intersecting && entry.id == *active);
            if left_band {
                self.active = None;
            }
        }

        self.active()
    }
}

/// Polled fallback: first section in document order whose layout box
/// straddles the tracking line. Sections without bounds are skipped.
pub fn poll_active<'a>(
    sections: &'a [SectionDescriptor],
    metrics: &PageMetrics,
) -> Option<&'a str> {
    let line = metrics.tracking_line();
    sections.iter().find_map(|section| {
        section
            .bounds()
            .filter(|rect| rect.straddles(line))
            .map(|_| section.id())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::geom::Rect;

    fn entry(id: &str, ratio: f64, intersecting: bool) -> VisibilityEntry {
        VisibilityEntry {
            id: id.to_string(),
            ratio,
            intersecting,
        }
    }

    #[test]
    fn last_qualifying_entry_wins() {
        let mut tracker = ObserverTracker::new();
        let active = tracker
            .update(&[
                entry("about", 0.4, true),
                entry("projects", 0.6, true),
                entry("skills", 0.1, true),
            ])
            .map(str::to_string);
        assert_eq!(active.as_deref(), Some("projects"));
    }

    #[test]
    fn below_threshold_entries_do_not_steal_focus() {
        let mut tracker = ObserverTracker::new();
        tracker.update(&[entry("about", 0.5, true)]);
        let active = tracker
            .update(&[entry("projects", 0.2, true)])
            .map(str::to_string);
        assert_eq!(active.as_deref(), Some("about"));
    }

    #[test]
    fn active_clears_when_its_section_leaves_the_band() {
        let mut tracker = ObserverTracker::new();
        tracker.update(&[entry("about", 0.5, true)]);
        let active = tracker.update(&[entry("about", 0.0, false)]);
        assert_eq!(active, None);
    }

    #[test]
    fn unrelated_departures_keep_the_active_link() {
        let mut tracker = ObserverTracker::new();
        tracker.update(&[entry("about", 0.5, true)]);
        let active = tracker
            .update(&[entry("skills", 0.0, false)])
            .map(str::to_string);
        assert_eq!(active.as_deref(), Some("about"));
    }

    #[test]
    fn poll_picks_first_section_straddling_the_line() {
        let metrics = PageMetrics {
            viewport_height: 800.0,
            nav_height: 64.0,
            scroll_height: 4000.0,
        };
        // line = 184
        let sections = vec![
            SectionDescriptor::new("about", Box::new(|| Some(Rect::new(-400.0, 500.0)))),
            SectionDescriptor::new("projects", Box::new(|| Some(Rect::new(100.0, 500.0)))),
            SectionDescriptor::new("skills", Box::new(|| Some(Rect::new(600.0, 500.0)))),
        ];
        // both "about" (-400..100) misses and "projects" (100..600) straddles 184
        assert_eq!(poll_active(&sections, &metrics), Some("projects"));
    }

    #[test]
    fn poll_skips_unrendered_sections() {
        let metrics = PageMetrics {
            viewport_height: 800.0,
            nav_height: 64.0,
            scroll_height: 4000.0,
        };
        let sections = vec![
            SectionDescriptor::new("ghost", Box::new(|| None)),
            SectionDescriptor::new("projects", Box::new(|| Some(Rect::new(100.0, 500.0)))),
        ];
        assert_eq!(poll_active(&sections, &metrics), Some("projects"));
    }

    #[test]
    fn poll_yields_none_between_sections() {
        let metrics = PageMetrics {
            viewport_height: 800.0,
            nav_height: 64.0,
            scroll_height: 4000.0,
        };
        let sections = vec![SectionDescriptor::new(
            "about",
            Box::new(|| Some(Rect::new(500.0, 300.0))),
        )];
        assert_eq!(poll_active(&sections, &metrics), None);
    }

    #[test]
    fn root_margin_formats_band_exclusions() {
        assert_eq!(observer_root_margin(64.0), "-184px 0px -40% 0px");
    }
}
