#![forbid(unsafe_code)]

//! Swipe classification for touch input.
//!
//! [`SwipeTracker`] samples a touch sequence and decides, on release,
//! whether it was a horizontal swipe or something else (a tap or a vertical
//! scroll). Sampling never navigates; only [`SwipeTracker::finish`] produces
//! a decision.
//!
//! # State Machine
//!
//! `Idle --begin--> Tracking --update*--> Tracking --finish/cancel--> Idle`
//!
//! # Invariants
//!
//! 1. `begin()` always zeroes the delta, even if a previous sequence was
//!    never finished.
//! 2. `update()` without a prior `begin()` is ignored.
//! 3. A swipe qualifies iff `|dx| > |dy|` and `|dx| >= threshold`.
//! 4. After `finish()` or `cancel()` the tracker is idle.

use crate::event::TouchPoint;

/// Default minimum horizontal travel, in CSS pixels.
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 40.0;

/// Thresholds for swipe recognition.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SwipeConfig {
    /// Minimum absolute horizontal travel for a swipe (default: 40px).
    pub threshold: f64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SWIPE_THRESHOLD,
        }
    }
}

/// Result of a finished touch sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    /// Leftward swipe: go to the next item.
    Forward,
    /// Rightward swipe: go to the previous item.
    Backward,
    /// Movement too short or mostly vertical.
    Tap,
    /// `finish()` was called with no sequence in progress.
    None,
}

impl SwipeOutcome {
    /// Whether the gesture should navigate.
    #[must_use]
    pub const fn navigates(self) -> bool {
        matches!(self, Self::Forward | Self::Backward)
    }
}

/// Stateful touch sampler.
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    config: SwipeConfig,
    origin: Option<TouchPoint>,
    delta: (f64, f64),
}

impl SwipeTracker {
    /// Create a tracker with the given thresholds.
    #[must_use]
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            origin: None,
            delta: (0.0, 0.0),
        }
    }

    /// Record the origin of a new touch sequence.
    pub fn begin(&mut self, at: TouchPoint) {
        self.origin = Some(at);
        self.delta = (0.0, 0.0);
    }

    /// Sample the current touch position.
    pub fn update(&mut self, at: TouchPoint) {
        if let Some(origin) = self.origin {
            self.delta = (at.x - origin.x, at.y - origin.y);
        }
    }

    /// Classify the sequence and return to idle.
    pub fn finish(&mut self) -> SwipeOutcome {
        if self.origin.take().is_none() {
            return SwipeOutcome::None;
        }
        let (dx, dy) = std::mem::take(&mut self.delta);
        if dx.abs() > dy.abs() && dx.abs() >= self.config.threshold {
            if dx < 0.0 {
                SwipeOutcome::Forward
            } else {
                SwipeOutcome::Backward
            }
        } else {
            SwipeOutcome::Tap
        }
    }

    /// Abandon the sequence without classifying it.
    pub fn cancel(&mut self) {
        self.origin = None;
        self.delta = (0.0, 0.0);
    }

    /// A touch sequence is in progress.
    #[inline]
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.origin.is_some()
    }

    /// Displacement since `begin()`.
    #[inline]
    #[must_use]
    pub fn delta(&self) -> (f64, f64) {
        self.delta
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }
}
