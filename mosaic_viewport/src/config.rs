// Copyright 2025 the Mosaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration for a [`MasonryView`](crate::MasonryView).

use mosaic_masonry::ColumnPolicy;

use crate::{ObserveTargets, VisibilityMode};

/// Default margin rendered above and below the viewport.
pub const DEFAULT_BUFFER: f64 = 200.0;
/// Default quiet period before a resize triggers relayout.
pub const DEFAULT_RESIZE_DEBOUNCE_MS: u64 = 250;
/// Default distance from the end at which `on_end_reached` fires.
pub const DEFAULT_END_REACHED_THRESHOLD: f64 = 200.0;

/// Tunables for a [`MasonryView`](crate::MasonryView).
#[derive(Debug, Clone, PartialEq)]
pub struct MasonryConfig {
    /// Horizontal and vertical gap between items.
    pub gap: f64,
    /// Margin added above and below the viewport by the frame-scan strategy.
    pub buffer: f64,
    /// Quiet period, in milliseconds, before a burst of resizes relayouts.
    pub resize_debounce_ms: u64,
    /// Remaining scroll distance at which the end-reached callback fires.
    pub end_reached_threshold: f64,
    /// How the column count follows the container width.
    pub columns: ColumnPolicy,
    /// Which visibility strategy to use.
    pub visibility: VisibilityMode,
    /// Surfaces to listen to while mounted.
    pub targets: ObserveTargets,
}

impl Default for MasonryConfig {
    fn default() -> Self {
        Self {
            gap: 10.0,
            buffer: DEFAULT_BUFFER,
            resize_debounce_ms: DEFAULT_RESIZE_DEBOUNCE_MS,
            end_reached_threshold: DEFAULT_END_REACHED_THRESHOLD,
            columns: ColumnPolicy::default(),
            visibility: VisibilityMode::default(),
            targets: ObserveTargets::default(),
        }
    }
}

impl MasonryConfig {
    /// Default configuration with the given `gap`.
    #[must_use]
    pub fn with_gap(gap: f64) -> Self {
        Self {
            gap,
            ..Self::default()
        }
    }

    /// Replaces the column policy.
    #[must_use]
    pub fn columns(mut self, columns: ColumnPolicy) -> Self {
        self.columns = columns;
        self
    }

    /// Replaces the visibility strategy.
    #[must_use]
    pub fn visibility(mut self, visibility: VisibilityMode) -> Self {
        self.visibility = visibility;
        self
    }
}
