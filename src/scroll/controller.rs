//! The scroll controller: one owner for scroll state, effect handlers, and
//! band lifecycle.
//!
//! The controller is platform-free. A host binds it by feeding scroll
//! samples into [`ScrollController::on_scroll`], driving
//! [`ScrollController::on_frame`] from its render callback while the loop
//! reports [`FrameOutcome::Continue`], and implementing [`EffectSink`] to
//! apply the computed effects. Layout is only ever read through the
//! [`PageModel`] captured at construction and replaced wholesale on resize.

use super::effects::{self, NavbarState, OverlayEffect};
use super::geom::PageMetrics;
use super::sections::{BandDescriptor, PageModel};
use super::state::{ScrollState, Smoothing};
use super::tracker::{self, ObserverTracker, TrackerStrategy, VisibilityEntry};

/// Receiver for per-frame effect output. Handlers with nothing to do this
/// frame (missing node, disabled effect) are simply not invoked; the active
/// link is the exception since deactivation must also reach the page.
pub trait EffectSink {
    fn apply_navbar(&mut self, state: NavbarState);
    fn apply_parallax(&mut self, hero_offset: f64);
    fn apply_overlay(&mut self, effect: OverlayEffect);
    fn apply_active_link(&mut self, id: Option<&str>);
    fn apply_band(&mut self, section: usize, opacity: f64, drift: f64);
}

/// What the host should do after a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Gap still open: schedule another frame.
    Continue,
    /// Caught up: the loop is idle until the next scroll sample.
    Settled,
}

/// Startup-time knobs. Built once from host capabilities and the user's
/// motion preference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerConfig {
    pub smoothing: Smoothing,
    pub band_smoothing: Smoothing,
    pub reduced_motion: bool,
    pub strategy: TrackerStrategy,
}

impl ControllerConfig {
    /// Resolve the config from what the host offers: observer-based
    /// tracking when available, and snap smoothing under reduced motion.
    pub fn resolve(reduced_motion: bool, observer_available: bool) -> Self {
        let strategy = if observer_available {
            TrackerStrategy::Observer
        } else {
            TrackerStrategy::Polled
        };
        Self {
            smoothing: if reduced_motion {
                Smoothing::SNAP
            } else {
                Smoothing::SCROLL
            },
            band_smoothing: if reduced_motion {
                Smoothing::SNAP
            } else {
                Smoothing::BAND
            },
            reduced_motion,
            strategy,
        }
    }
}

pub struct ScrollController {
    config: ControllerConfig,
    state: ScrollState,
    model: PageModel,
    bands: Vec<BandDescriptor>,
    observer: ObserverTracker,
    started: bool,
}

impl ScrollController {
    pub fn new(config: ControllerConfig, model: PageModel) -> Self {
        let bands = build_bands(&model);
        Self {
            config,
            state: ScrollState::new(),
            model,
            bands,
            observer: ObserverTracker::new(),
            started: false,
        }
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    pub fn band_count(&self) -> usize {
        self.bands.len()
    }

    /// Begin accepting scroll samples.
    pub fn start(&mut self) {
        self.started = true;
        tracing::debug!(
            strategy = ?self.config.strategy,
            reduced_motion = self.config.reduced_motion,
            sections = self.model.sections.len(),
            "scroll controller started"
        );
    }

    /// Stop the loop; pending samples are discarded until `start` again.
    pub fn stop(&mut self) {
        self.started = false;
        self.state.halt();
        tracing::debug!("scroll controller stopped");
    }

    /// Scroll sampler entry point. Records the raw offset and reports
    /// whether the host must schedule a frame (Idle -> Running edge).
    /// Safe at arbitrary frequency; samples inside one frame coalesce.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        if !self.started {
            return false;
        }
        self.state.set_target(offset)
    }

    /// One frame of the smoothing loop: advance `current`, then run the
    /// handlers in fixed order: navbar, parallax, overlay, active-link
    /// fallback, bands.
    pub fn on_frame(&mut self, sink: &mut dyn EffectSink) -> FrameOutcome {
        if !self.started {
            return FrameOutcome::Settled;
        }

        let keep_running = self.state.advance(self.config.smoothing);
        let current = self.state.current();
        let metrics = self.model.metrics();

        sink.apply_navbar(effects::navbar_state(current));

        if let Some(hero) = self.model.hero_section() {
            if hero.bounds().is_some() {
                if let Some(offset) = effects::parallax_offset(current, self.config.reduced_motion)
                {
                    sink.apply_parallax(offset);
                }
            }
        }

        if let (Some(hero), Some(following)) =
            (self.model.hero_section(), self.model.following_section())
        {
            if let (Some(hero_rect), Some(following_rect)) = (hero.bounds(), following.bounds()) {
                sink.apply_overlay(effects::overlay(hero_rect, following_rect, &metrics));
            }
        }

        if self.config.strategy == TrackerStrategy::Polled {
            let active = tracker::poll_active(&self.model.sections, &metrics);
            sink.apply_active_link(active);
        }

        self.update_bands(&metrics, sink);

        if keep_running {
            FrameOutcome::Continue
        } else {
            FrameOutcome::Settled
        }
    }

    /// Primary-strategy entry point: fold observer callbacks into the
    /// active link. Ignored when the polled fallback was selected.
    pub fn on_observer_update(&mut self, entries: &[VisibilityEntry], sink: &mut dyn EffectSink) {
        if self.config.strategy != TrackerStrategy::Observer {
            tracing::debug!("observer update ignored under polled tracking");
            return;
        }
        let active = self.observer.update(entries);
        sink.apply_active_link(active);
    }

    /// Viewport resize: replace the captured layout and rebuild the band
    /// set wholesale, since band identity and section colors may have changed.
    pub fn rebuild(&mut self, model: PageModel) {
        self.bands = build_bands(&model);
        self.model = model;
        tracing::debug!(bands = self.bands.len(), "page model rebuilt after resize");
    }

    fn update_bands(&mut self, metrics: &PageMetrics, sink: &mut dyn EffectSink) {
        for band in &mut self.bands {
            let Some(section) = self.model.sections.get(band.section) else {
                continue;
            };
            let Some(rect) = section.bounds() else {
                continue;
            };
            let target = effects::band_target_opacity(rect, metrics);
            band.opacity = self.config.band_smoothing.step(band.opacity, target);
            let drift = if self.config.reduced_motion {
                0.0
            } else {
                effects::band_drift(rect, metrics)
            };
            sink.apply_band(band.section, band.opacity, drift);
        }
    }
}

/// One band per section, hero excluded; the hero has its own treatment.
fn build_bands(model: &PageModel) -> Vec<BandDescriptor> {
    (0..model.sections.len())
        .filter(|index| Some(*index) != model.hero)
        .map(BandDescriptor::new)
        .collect()
}
