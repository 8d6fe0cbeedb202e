// Copyright 2025 the Mosaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Column count and column width resolution.

use alloc::vec;
use alloc::vec::Vec;
use core::num::NonZeroUsize;

/// One step of a breakpoint table: containers up to `max_width` get `columns`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint {
    /// Inclusive upper bound of the container width for this step.
    pub max_width: f64,
    /// Column count used when the container fits under `max_width`.
    pub columns: NonZeroUsize,
}

impl Breakpoint {
    /// Creates a breakpoint step.
    #[must_use]
    pub const fn new(max_width: f64, columns: NonZeroUsize) -> Self {
        Self { max_width, columns }
    }
}

/// How the number of columns is derived from the container width.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnPolicy {
    /// Fixed breakpoints, checked in ascending `max_width` order.
    ///
    /// Containers wider than every step get `otherwise` columns.
    Breakpoints {
        /// Steps sorted by ascending `max_width`.
        steps: Vec<Breakpoint>,
        /// Column count for containers wider than the last step.
        otherwise: NonZeroUsize,
    },
    /// As many columns of at least `column_width` as fit, separated by the gap.
    ///
    /// The count is `floor(container_width / (column_width + gap))`, at least 1.
    FixedWidth {
        /// Desired column width before stretching to fill the container.
        column_width: f64,
    },
    /// A column count chosen by the host (for example from a style variable).
    Count(NonZeroUsize),
}

impl Default for ColumnPolicy {
    /// Two columns up to 640px, four up to 1024px, five beyond.
    fn default() -> Self {
        Self::Breakpoints {
            steps: vec![
                Breakpoint::new(640.0, NonZeroUsize::MIN.saturating_add(1)),
                Breakpoint::new(1024.0, NonZeroUsize::MIN.saturating_add(3)),
            ],
            otherwise: NonZeroUsize::MIN.saturating_add(4),
        }
    }
}

impl ColumnPolicy {
    /// Convenience constructor for [`ColumnPolicy::FixedWidth`].
    #[must_use]
    pub const fn fixed_width(column_width: f64) -> Self {
        Self::FixedWidth { column_width }
    }

    /// Resolves the column count for a container of `container_width`.
    ///
    /// Returns `0` when the container has no usable width (zero, negative, or
    /// not finite); layout short-circuits to an empty result in that case.
    /// Otherwise the result is at least `1`.
    #[must_use]
    pub fn column_count(&self, container_width: f64, gap: f64) -> usize {
        if !container_width.is_finite() || container_width <= 0.0 {
            return 0;
        }
        match self {
            Self::Breakpoints { steps, otherwise } => steps
                .iter()
                .find(|step| container_width <= step.max_width)
                .map_or(*otherwise, |step| step.columns)
                .get(),
            Self::FixedWidth { column_width } => {
                let stride = column_width + gap.max(0.0);
                if !stride.is_finite() || stride <= 0.0 {
                    return 1;
                }
                let ratio = container_width / stride;
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    reason = "Ratio is positive and finite; truncation is the intended floor"
                )]
                let count = ratio as usize;
                count.max(1)
            }
            Self::Count(count) => count.get(),
        }
    }
}

/// Uniform column width for `column_count` columns separated by `gap`.
///
/// Computes `(container_width - (column_count - 1) * gap) / column_count`,
/// clamped to zero. Returns `0.0` when `column_count` is `0`.
#[must_use]
pub fn column_width(column_count: usize, container_width: f64, gap: f64) -> f64 {
    if column_count == 0 || !container_width.is_finite() || container_width <= 0.0 {
        return 0.0;
    }
    #[allow(
        clippy::cast_precision_loss,
        reason = "Column counts are small; precision loss would need > 2^52 columns"
    )]
    let (count, gutters) = (column_count as f64, (column_count - 1) as f64);
    let width = (container_width - gutters * gap.max(0.0)) / count;
    width.max(0.0)
}
