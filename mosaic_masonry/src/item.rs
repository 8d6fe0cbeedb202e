// Copyright 2025 the Mosaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input items for a layout pass.

use core::hash::Hash;

use kurbo::Size;

/// An item that can be packed into a masonry layout.
///
/// The layout only looks at the intrinsic size (for the aspect ratio) and the id
/// (to label the resulting [`PositionedItem`](crate::PositionedItem)). Items are
/// treated as read-only for the duration of a pass.
pub trait MasonryItem {
    /// Identifier type. Ids are expected to be unique within one item list.
    type Id: Clone + Eq + Hash;

    /// Returns this item's identifier.
    fn id(&self) -> Self::Id;

    /// Returns the true intrinsic pixel dimensions of the item.
    ///
    /// Both dimensions should be finite and positive. Items that violate this
    /// are laid out as squares rather than producing non-finite positions.
    fn intrinsic_size(&self) -> Size;
}

/// A minimal [`MasonryItem`]: an id paired with its intrinsic size.
#[derive(Clone, Debug, PartialEq)]
pub struct SizedItem<K> {
    /// Item identifier.
    pub id: K,
    /// Intrinsic pixel dimensions.
    pub size: Size,
}

impl<K> SizedItem<K> {
    /// Creates a new item from an id and intrinsic `width` × `height`.
    #[must_use]
    pub const fn new(id: K, width: f64, height: f64) -> Self {
        Self {
            id,
            size: Size::new(width, height),
        }
    }
}

impl<K: Clone + Eq + Hash> MasonryItem for SizedItem<K> {
    type Id = K;

    fn id(&self) -> K {
        self.id.clone()
    }

    fn intrinsic_size(&self) -> Size {
        self.size
    }
}

impl<T: MasonryItem> MasonryItem for &T {
    type Id = T::Id;

    fn id(&self) -> Self::Id {
        (**self).id()
    }

    fn intrinsic_size(&self) -> Size {
        (**self).intrinsic_size()
    }
}

/// Height of an item of intrinsic `size` scaled to `column_width`.
///
/// Computes `column_width * height / width`, which keeps results exact for
/// the common case of integral intrinsic dimensions. Returns `None` when the
/// intrinsic size is not finite and strictly positive.
pub(crate) fn scaled_height(size: Size, column_width: f64) -> Option<f64> {
    let Size { width, height } = size;
    if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
        return None;
    }
    let scaled = column_width * height / width;
    scaled.is_finite().then_some(scaled)
}
