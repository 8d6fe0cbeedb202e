// Copyright 2025 the Mosaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-of-content detection for pagination.

use crate::ScrollMetrics;

/// State of an [`EndReachedDetector`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EndReachedState {
    /// The next threshold crossing fires.
    #[default]
    Armed,
    /// Already fired; waits for the user to scroll back above the threshold.
    Triggered,
}

/// Fires once each time the scroll position comes within `threshold` of the end.
///
/// While the user stays near the bottom the detector stays
/// [`Triggered`](EndReachedState::Triggered). Scrolling back so that more than
/// `threshold` pixels remain re-arms it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EndReachedDetector {
    threshold: f64,
    state: EndReachedState,
}

impl EndReachedDetector {
    /// Creates an armed detector.
    #[must_use]
    pub const fn new(threshold: f64) -> Self {
        Self {
            threshold,
            state: EndReachedState::Armed,
        }
    }

    /// Distance from the end, in pixels, at which the detector fires.
    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Changes the threshold without touching the state.
    pub fn set_threshold(&mut self, threshold: f64) {
        self.threshold = threshold;
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> EndReachedState {
        self.state
    }

    /// Re-arms the detector, for example after the content was replaced.
    pub fn rearm(&mut self) {
        self.state = EndReachedState::Armed;
    }

    /// Feeds one scroll observation. Returns `true` if the end was just reached.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) -> bool {
        if metrics.bottom_offset() > self.threshold {
            self.state = EndReachedState::Armed;
            return false;
        }
        match self.state {
            EndReachedState::Armed => {
                self.state = EndReachedState::Triggered;
                log::debug!(
                    "end reached: {}px left under a {}px threshold",
                    metrics.bottom_offset(),
                    self.threshold
                );
                true
            }
            EndReachedState::Triggered => false,
        }
    }
}
