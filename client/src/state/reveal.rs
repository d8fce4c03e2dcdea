//! Fire-once reveal animations: per-element fade-in and the skills bar group.
//!
//! DESIGN
//! ======
//! A `RevealLatch` moves `Pending -> Fired` exactly once and never back, so
//! later intersection callbacks (or a container re-entering the viewport)
//! cannot replay an animation. The progress group carries one latch for the
//! whole set of bars.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Delay between zeroing the bars and setting their target widths, so the
/// browser paints the empty state and the CSS width transition runs.
pub const PROGRESS_FILL_DELAY_MS: u32 = 100;

/// Intersection observer parameters for one kind of reveal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

/// Fade-in: 10% visible and at least 50px above the viewport bottom.
pub const FADE_IN: RevealOptions = RevealOptions { threshold: 0.1, root_margin: "0px 0px -50px 0px" };

/// Skills container: 30% visible.
pub const PROGRESS: RevealOptions = RevealOptions { threshold: 0.3, root_margin: "0px" };

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealLatch {
    #[default]
    Pending,
    Fired,
}

impl RevealLatch {
    /// Fire the latch. Returns `true` only for the first call.
    pub fn fire(&mut self) -> bool {
        match self {
            RevealLatch::Pending => {
                *self = RevealLatch::Fired;
                true
            }
            RevealLatch::Fired => false,
        }
    }

    pub fn is_fired(self) -> bool {
        self == RevealLatch::Fired
    }
}

/// One skill bar. `width` is the rendered percentage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressBarState {
    pub label: String,
    pub target: u8,
    pub width: u8,
}

impl ProgressBarState {
    /// Server-rendered bars start at their target so the page reads correctly
    /// before (or without) hydration.
    pub fn new(label: impl Into<String>, target: u8) -> Self {
        let target = target.min(100);
        Self { label: label.into(), target, width: target }
    }

    pub fn width_css(&self) -> String {
        format!("{}%", self.width)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProgressGroupState {
    pub bars: Vec<ProgressBarState>,
    pub latch: RevealLatch,
}

impl ProgressGroupState {
    pub fn new(bars: Vec<ProgressBarState>) -> Self {
        Self { bars, latch: RevealLatch::Pending }
    }

    /// First entry into view: zero every bar. Returns `false` (and changes
    /// nothing) if the group has already animated.
    pub fn begin_fill(&mut self) -> bool {
        if !self.latch.fire() {
            return false;
        }
        for bar in &mut self.bars {
            bar.width = 0;
        }
        true
    }

    /// Second step, after `PROGRESS_FILL_DELAY_MS`: grow bars to target.
    pub fn complete_fill(&mut self) {
        for bar in &mut self.bars {
            bar.width = bar.target;
        }
    }
}
