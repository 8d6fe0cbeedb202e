// Copyright 2025 the Mosaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visible-set computation over a positioned layout.

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashSet;
use mosaic_masonry::{Placement, PositionedItem};

use crate::{ObservedItems, ObserverOptions, ViewportWindow};

/// The items worth rendering for one viewport.
///
/// Stores input indices (ascending) and ids. Two sets compare equal when they
/// hold the same ids, regardless of how they were produced.
#[derive(Debug, Clone)]
pub struct VisibleSet<K> {
    indices: Vec<usize>,
    ids: HashSet<K>,
}

impl<K> Default for VisibleSet<K> {
    fn default() -> Self {
        Self {
            indices: Vec::new(),
            ids: HashSet::default(),
        }
    }
}

impl<K: Clone + Eq + Hash> VisibleSet<K> {
    /// Collects a set from positioned items, keeping their input order.
    pub fn from_items<'a, I>(items: I) -> Self
    where
        I: IntoIterator<Item = &'a PositionedItem<K>>,
        K: 'a,
    {
        let mut set = Self::default();
        for item in items {
            set.indices.push(item.index);
            set.ids.insert(item.id.clone());
        }
        set
    }

    /// Returns `true` if the item with `id` is visible.
    #[must_use]
    pub fn contains(&self, id: &K) -> bool {
        self.ids.contains(id)
    }
}

impl<K> VisibleSet<K> {
    /// Input indices of the visible items, ascending.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Ids of the visible items, in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = &K> {
        self.ids.iter()
    }

    /// Number of visible items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` if nothing is visible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

impl<K: Eq + Hash> PartialEq for VisibleSet<K> {
    fn eq(&self, other: &Self) -> bool {
        self.ids == other.ids
    }
}

impl<K: Eq + Hash> Eq for VisibleSet<K> {}

/// Returns `true` if `placement` has any vertical overlap with `[start, end]`.
///
/// Edges count as overlap, so an item whose bottom touches the window start
/// is still included.
pub(crate) fn overlaps_range(placement: &Placement, start: f64, end: f64) -> bool {
    placement.bottom() >= start && placement.top <= end
}

/// A way of deciding which positioned items are visible.
///
/// Implementations may keep state between calls (for example a registry of
/// observed items) but must satisfy the same contract: an item entirely
/// outside the buffered viewport is excluded, and an item with any overlap
/// with it is included.
pub trait VisibilityStrategy<K> {
    /// Computes the visible subset of `items` for `viewport`.
    fn compute_visible(
        &mut self,
        items: &[PositionedItem<K>],
        viewport: ViewportWindow,
    ) -> VisibleSet<K>;
}

/// Bulk strategy: scan every positioned item against the buffered viewport.
///
/// Meant to run once per animation frame; see
/// [`FrameThrottle`](crate::FrameThrottle).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameScan {
    /// Margin added above and below the viewport.
    pub buffer: f64,
}

impl FrameScan {
    /// Creates a scan strategy with the given `buffer`.
    #[must_use]
    pub const fn new(buffer: f64) -> Self {
        Self { buffer }
    }
}

impl<K: Clone + Eq + Hash> VisibilityStrategy<K> for FrameScan {
    fn compute_visible(
        &mut self,
        items: &[PositionedItem<K>],
        viewport: ViewportWindow,
    ) -> VisibleSet<K> {
        let (start, end) = viewport.buffered(self.buffer.max(0.0));
        VisibleSet::from_items(
            items
                .iter()
                .filter(|item| overlaps_range(&item.placement, start, end)),
        )
    }
}

/// Which visibility strategy a view uses.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum VisibilityMode {
    /// Recompute the whole set with [`FrameScan`] once per frame.
    #[default]
    FrameScan,
    /// Track each item individually with an [`ItemObserver`](crate::ItemObserver).
    ObserveItems(ObserverOptions),
}

/// A [`VisibilityStrategy`] selected at runtime from a [`VisibilityMode`].
#[derive(Debug, Clone)]
pub enum Visibility<K> {
    /// Bulk per-frame scan.
    FrameScan(FrameScan),
    /// Per-item observation.
    Observed(ObservedItems<K>),
}

impl<K: Clone + Eq + Hash> Visibility<K> {
    /// Builds the strategy for `mode`; `buffer` applies to [`VisibilityMode::FrameScan`].
    #[must_use]
    pub fn from_mode(mode: VisibilityMode, buffer: f64) -> Self {
        match mode {
            VisibilityMode::FrameScan => Self::FrameScan(FrameScan::new(buffer)),
            VisibilityMode::ObserveItems(options) => Self::Observed(ObservedItems::new(options)),
        }
    }
}

impl<K: Clone + Eq + Hash> VisibilityStrategy<K> for Visibility<K> {
    fn compute_visible(
        &mut self,
        items: &[PositionedItem<K>],
        viewport: ViewportWindow,
    ) -> VisibleSet<K> {
        match self {
            Self::FrameScan(scan) => scan.compute_visible(items, viewport),
            Self::Observed(observed) => observed.compute_visible(items, viewport),
        }
    }
}
