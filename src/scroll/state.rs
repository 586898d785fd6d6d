//! Scroll position state and the exponential smoothing law.
//!
//! `target` is written only by the scroll sampler; `current` is advanced
//! only by the frame loop. Keeping each field behind its own method makes
//! the single-writer rule an API property instead of a convention.

/// First-order low-pass smoothing: each step closes a fixed fraction of the
/// remaining gap, and the value snaps once the gap is inside `epsilon`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Smoothing {
    /// Fraction of the gap closed per frame, in (0, 1].
    pub alpha: f64,
    /// Settle distance: gaps at or below this snap to the target.
    pub epsilon: f64,
}

impl Smoothing {
    /// Default feel for scroll-following motion.
    pub const SCROLL: Smoothing = Smoothing {
        alpha: 0.12,
        epsilon: 0.5,
    };

    /// Band cross-fade smoothing, slightly quicker than scroll.
    pub const BAND: Smoothing = Smoothing {
        alpha: 0.18,
        epsilon: 0.001,
    };

    /// No smoothing: every step lands exactly on the target. Used when the
    /// user asks for reduced motion.
    pub const SNAP: Smoothing = Smoothing {
        alpha: 1.0,
        epsilon: 0.5,
    };

    /// Advance `current` one frame toward `target`. Returns the new value,
    /// snapped to `target` when within `epsilon`.
    pub fn step(&self, current: f64, target: f64) -> f64 {
        let next = current + (target - current) * self.alpha;
        if (target - next).abs() <= self.epsilon {
            target
        } else {
            next
        }
    }

    pub fn settled(&self, current: f64, target: f64) -> bool {
        (target - current).abs() <= self.epsilon
    }
}

/// Raw and smoothed scroll offset plus the frame-scheduling flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    target: f64,
    current: f64,
    running: bool,
}

impl ScrollState {
    pub fn new() -> Self {
        Self {
            target: 0.0,
            current: 0.0,
            running: false,
        }
    }

    /// Sampler-side write. Returns true when a frame needs scheduling
    /// (the loop was idle); repeated samples within one frame coalesce.
    pub fn set_target(&mut self, target: f64) -> bool {
        self.target = target;
        if self.running {
            false
        } else {
            self.running = true;
            true
        }
    }

    /// Loop-side write: advance `current` one frame. Returns true while the
    /// loop should keep running, false once the state has settled (at which
    /// point the running flag clears).
    pub fn advance(&mut self, smoothing: Smoothing) -> bool {
        self.current = smoothing.step(self.current, self.target);
        if smoothing.settled(self.current, self.target) {
            self.current = self.target;
            self.running = false;
        }
        self.running
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Drop back to idle without touching positions. Used by `stop()`.
    pub fn halt(&mut self) {
        self.running = false;
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_closes_a_fixed_fraction_of_the_gap() {
        let s = Smoothing::SCROLL;
        let next = s.step(0.0, 100.0);
        assert!((next - 12.0).abs() < 1e-9);
    }

    #[test]
    fn step_snaps_inside_epsilon() {
        let s = Smoothing::SCROLL;
        assert_eq!(s.step(99.8, 100.0), 100.0);
    }

    #[test]
    fn snap_smoothing_lands_in_one_step() {
        assert_eq!(Smoothing::SNAP.step(0.0, 1234.5), 1234.5);
    }

    #[test]
    fn distance_strictly_decreases_until_snap() {
        let s = Smoothing::SCROLL;
        let target = 1000.0;
        let mut current = 0.0;
        let mut gap = target;
        while current != target {
            current = s.step(current, target);
            let next_gap = (target - current).abs();
            assert!(next_gap < gap, "gap must shrink every frame");
            gap = next_gap;
        }
    }

    #[test]
    fn set_target_schedules_exactly_once() {
        let mut st = ScrollState::new();
        assert!(st.set_target(10.0), "idle -> running requests a frame");
        assert!(!st.set_target(20.0), "already running, coalesced");
        assert!(!st.set_target(30.0));
        assert_eq!(st.target(), 30.0);
    }

    #[test]
    fn advance_runs_until_settled_then_clears_running() {
        let mut st = ScrollState::new();
        st.set_target(10.0);
        let mut frames = 0;
        while st.advance(Smoothing::SCROLL) {
            frames += 1;
            assert!(frames < 200, "must settle");
        }
        assert_eq!(st.current(), 10.0);
        assert!(!st.is_running());
        // next sample schedules again
        assert!(st.set_target(0.0));
    }

    #[test]
    fn zero_height_page_settles_after_one_frame() {
        let mut st = ScrollState::new();
        st.set_target(0.0);
        assert!(!st.advance(Smoothing::SCROLL));
    }
}
