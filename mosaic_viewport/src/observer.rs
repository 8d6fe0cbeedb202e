// Copyright 2025 the Mosaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-item visibility observation.
//!
//! Instead of rescanning the whole layout, each item registers its bounds with
//! a shared [`ItemObserver`]. When the viewport moves, the observer reports
//! only the items whose intersection state flipped, much like an intersection
//! observer configured with a root margin and a threshold.

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::{HashMap, HashSet};
use kurbo::Rect;
use mosaic_masonry::PositionedItem;

use crate::{ViewportWindow, VisibilityStrategy, VisibleSet};

/// Root margin and threshold for an [`ItemObserver`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    /// Extra margin above the viewport.
    pub root_margin_top: f64,
    /// Extra margin below the viewport.
    pub root_margin_bottom: f64,
    /// Fraction of an item's height that must be inside the root for it to
    /// count as intersecting. `0.0` means any overlap, including touching edges.
    pub threshold: f64,
}

impl Default for ObserverOptions {
    /// A 100px margin below the viewport and no threshold.
    fn default() -> Self {
        Self {
            root_margin_top: 0.0,
            root_margin_bottom: 100.0,
            threshold: 0.0,
        }
    }
}

impl ObserverOptions {
    /// Same margin above and below the viewport, threshold `0.0`.
    #[must_use]
    pub const fn symmetric(margin: f64) -> Self {
        Self {
            root_margin_top: margin,
            root_margin_bottom: margin,
            threshold: 0.0,
        }
    }
}

/// A change in an observed item's intersection state.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationEntry<K> {
    /// Id of the observed item.
    pub id: K,
    /// Whether the item now intersects the root.
    pub is_intersecting: bool,
    /// Fraction of the item's height inside the root.
    pub intersection_ratio: f64,
}

#[derive(Debug, Clone, Copy)]
struct Target {
    bounds: Rect,
    intersecting: bool,
}

/// Registry of individually observed items.
///
/// Items are keyed by id. Call [`ItemObserver::update_viewport`] whenever the
/// viewport changes or targets were added; it returns the entries whose
/// state changed since the previous update.
#[derive(Debug, Clone)]
pub struct ItemObserver<K> {
    options: ObserverOptions,
    targets: HashMap<K, Target>,
    root: Option<Rect>,
}

impl<K: Clone + Eq + Hash> ItemObserver<K> {
    /// Creates an observer with no targets.
    #[must_use]
    pub fn new(options: ObserverOptions) -> Self {
        Self {
            options,
            targets: HashMap::default(),
            root: None,
        }
    }

    /// Returns the observer options.
    #[must_use]
    pub const fn options(&self) -> ObserverOptions {
        self.options
    }

    /// Starts observing `id` with `bounds`, or updates the bounds of an existing target.
    ///
    /// New targets start out not intersecting; the next update reports them
    /// if they are inside the root.
    pub fn observe(&mut self, id: K, bounds: Rect) {
        self.targets
            .entry(id)
            .and_modify(|target| target.bounds = bounds)
            .or_insert(Target {
                bounds,
                intersecting: false,
            });
    }

    /// Stops observing `id`. Returns `true` if it was observed.
    pub fn unobserve(&mut self, id: &K) -> bool {
        self.targets.remove(id).is_some()
    }

    /// Stops observing every target whose id is not in `keep`.
    pub fn retain_ids(&mut self, keep: &HashSet<K>) {
        self.targets.retain(|id, _| keep.contains(id));
    }

    /// Stops observing everything.
    pub fn disconnect(&mut self) {
        self.targets.clear();
        self.root = None;
    }

    /// The root rectangle from the last update, if any.
    ///
    /// The root spans the whole horizontal axis; only its vertical range matters.
    #[must_use]
    pub const fn root(&self) -> Option<Rect> {
        self.root
    }

    /// Number of observed targets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Returns `true` if nothing is observed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Returns `true` if `id` is observed and currently intersecting.
    #[must_use]
    pub fn is_visible(&self, id: &K) -> bool {
        self.targets.get(id).is_some_and(|target| target.intersecting)
    }

    /// Moves the root to `viewport` (grown by the root margins) and
    /// re-evaluates every target, returning the ones that changed state.
    pub fn update_viewport(&mut self, viewport: ViewportWindow) -> Vec<ObservationEntry<K>> {
        let (start, end) =
            viewport.expanded(self.options.root_margin_top, self.options.root_margin_bottom);
        let root = Rect::new(f64::NEG_INFINITY, start, f64::INFINITY, end);
        self.root = Some(root);

        let threshold = self.options.threshold;
        let mut changes = Vec::new();
        for (id, target) in &mut self.targets {
            let (intersecting, ratio) = evaluate(target.bounds, root, threshold);
            if intersecting != target.intersecting {
                target.intersecting = intersecting;
                changes.push(ObservationEntry {
                    id: id.clone(),
                    is_intersecting: intersecting,
                    intersection_ratio: ratio,
                });
            }
        }
        changes
    }
}

fn evaluate(bounds: Rect, root: Rect, threshold: f64) -> (bool, f64) {
    let touches = bounds.y1 >= root.y0 && bounds.y0 <= root.y1;
    if !touches {
        return (false, 0.0);
    }
    let height = bounds.height();
    let ratio = if height > 0.0 {
        bounds.intersect(root).height() / height
    } else {
        1.0
    };
    let intersecting = if threshold > 0.0 {
        ratio >= threshold
    } else {
        true
    };
    (intersecting, ratio)
}

/// [`VisibilityStrategy`] backed by an [`ItemObserver`].
///
/// Each call re-registers the current placements (dropping ids no longer in
/// the layout), moves the root, and reads membership back in input order.
#[derive(Debug, Clone)]
pub struct ObservedItems<K> {
    observer: ItemObserver<K>,
    last_changes: usize,
}

impl<K: Clone + Eq + Hash> ObservedItems<K> {
    /// Creates the strategy with a fresh observer.
    #[must_use]
    pub fn new(options: ObserverOptions) -> Self {
        Self {
            observer: ItemObserver::new(options),
            last_changes: 0,
        }
    }

    /// The underlying observer.
    #[must_use]
    pub fn observer(&self) -> &ItemObserver<K> {
        &self.observer
    }

    /// Number of items whose state flipped during the last computation.
    #[must_use]
    pub const fn last_changes(&self) -> usize {
        self.last_changes
    }
}

impl<K: Clone + Eq + Hash> VisibilityStrategy<K> for ObservedItems<K> {
    fn compute_visible(
        &mut self,
        items: &[PositionedItem<K>],
        viewport: ViewportWindow,
    ) -> VisibleSet<K> {
        let mut present = HashSet::with_capacity(items.len());
        for item in items {
            present.insert(item.id.clone());
            self.observer.observe(item.id.clone(), item.placement.rect());
        }
        self.observer.retain_ids(&present);
        self.last_changes = self.observer.update_viewport(viewport).len();

        VisibleSet::from_items(items.iter().filter(|item| self.observer.is_visible(&item.id)))
    }
}
