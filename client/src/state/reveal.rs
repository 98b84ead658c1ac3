//! Viewport-triggered reveal animation for the hero text blocks.
//!
//! Each block starts hidden and offset downward, then transitions into place
//! the first time it becomes visible. `RevealLatch` guarantees the transition
//! fires at most once per element.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Timing and offset of one staggered reveal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealSpec {
    pub delay_secs: f64,
    pub duration_secs: f64,
    pub offset_px: f64,
}

/// Vertical distance hidden blocks sit below their resting position.
pub const REVEAL_OFFSET_PX: f64 = 20.0;

/// Eyebrow line, headline, tagline.
pub const HERO_REVEALS: [RevealSpec; 3] = [
    RevealSpec { delay_secs: 0.3, duration_secs: 0.7, offset_px: REVEAL_OFFSET_PX },
    RevealSpec { delay_secs: 0.4, duration_secs: 0.8, offset_px: REVEAL_OFFSET_PX },
    RevealSpec { delay_secs: 0.5, duration_secs: 1.0, offset_px: REVEAL_OFFSET_PX },
];

impl RevealSpec {
    /// Inline CSS for the hidden or revealed state.
    ///
    /// The transition is attached in both states so the browser animates the
    /// switch from hidden to revealed.
    #[must_use]
    pub fn style(&self, revealed: bool) -> String {
        let (opacity, offset) = if revealed { (1.0, 0.0) } else { (0.0, self.offset_px) };
        format!(
            "opacity: {opacity}; transform: translateY({offset}px); \
             transition: opacity {d}s ease-out {delay}s, transform {d}s ease-out {delay}s;",
            d = self.duration_secs,
            delay = self.delay_secs,
        )
    }
}

/// One-shot visibility latch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    /// Feed a visibility observation. Returns `true` only for the
    /// observation that triggers the reveal.
    pub fn observe(&mut self, visible: bool) -> bool {
        if self.revealed || !visible {
            return false;
        }
        self.revealed = true;
        true
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}
