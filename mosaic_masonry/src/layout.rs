// Copyright 2025 the Mosaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Greedy shortest-column packing.

use alloc::vec;
use alloc::vec::Vec;

use kurbo::{Rect, Size};

use crate::item::scaled_height;
use crate::{ColumnPolicy, MasonryItem, column_width};

/// Absolute placement of one item inside the masonry container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Distance from the container's left edge.
    pub left: f64,
    /// Distance from the container's top edge.
    pub top: f64,
    /// Width of the item; always the resolved column width.
    pub width: f64,
    /// Height of the item, derived from its aspect ratio.
    pub height: f64,
}

impl Placement {
    /// Bottom edge of the item (`top + height`).
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Right edge of the item (`left + width`).
    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// The placement as a [`Rect`] in container coordinates.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(self.left, self.top, self.right(), self.bottom())
    }
}

/// An item id together with where the layout put it.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedItem<K> {
    /// Id of the source item.
    pub id: K,
    /// Index of the source item in the input list.
    pub index: usize,
    /// Column the item was packed into.
    pub column: usize,
    /// Absolute placement.
    pub placement: Placement,
}

/// Result of one layout pass.
///
/// Holds one [`PositionedItem`] per input item, in input order, plus the
/// total content height. A layout is recomputed from scratch whenever its
/// inputs change; it is never patched in place.
#[derive(Debug, Clone, PartialEq)]
pub struct MasonryLayout<K> {
    items: Vec<PositionedItem<K>>,
    column_heights: Vec<f64>,
    column_width: f64,
    gap: f64,
    total_height: f64,
}

impl<K> Default for MasonryLayout<K> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<K> MasonryLayout<K> {
    /// A layout with no columns and no items.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            items: Vec::new(),
            column_heights: Vec::new(),
            column_width: 0.0,
            gap: 0.0,
            total_height: 0.0,
        }
    }

    /// Positioned items, parallel to the input list.
    #[must_use]
    pub fn items(&self) -> &[PositionedItem<K>] {
        &self.items
    }

    /// Placement of the item at input `index`, if any.
    #[must_use]
    pub fn placement(&self, index: usize) -> Option<Placement> {
        self.items.get(index).map(|item| item.placement)
    }

    /// Number of positioned items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if no item was positioned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of columns used by this pass.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.column_heights.len()
    }

    /// Resolved width of every column.
    #[must_use]
    pub const fn column_width(&self) -> f64 {
        self.column_width
    }

    /// Vertical and horizontal gap used by this pass.
    #[must_use]
    pub const fn gap(&self) -> f64 {
        self.gap
    }

    /// Final column accumulators, each including one trailing gap per item.
    #[must_use]
    pub fn column_heights(&self) -> &[f64] {
        &self.column_heights
    }

    /// Height of the tallest column, without a trailing gap.
    #[must_use]
    pub const fn total_height(&self) -> f64 {
        self.total_height
    }

    /// Overall size of the laid-out content.
    #[must_use]
    pub fn content_size(&self) -> Size {
        let columns = self.column_count();
        if columns == 0 {
            return Size::ZERO;
        }
        #[allow(
            clippy::cast_precision_loss,
            reason = "Column counts are small; precision loss would need > 2^52 columns"
        )]
        let width = columns as f64 * self.column_width + (columns - 1) as f64 * self.gap;
        Size::new(width, self.total_height)
    }

    /// Consumes the layout and returns its positioned items.
    #[must_use]
    pub fn into_items(self) -> Vec<PositionedItem<K>> {
        self.items
    }
}

/// Index of the shortest column; ties go to the lowest index.
fn shortest_column(heights: &[f64]) -> usize {
    let mut index = 0;
    let mut best = heights.first().copied().unwrap_or(0.0);
    for (i, height) in heights.iter().copied().enumerate().skip(1) {
        if height < best {
            best = height;
            index = i;
        }
    }
    index
}

/// Packs `(id, intrinsic size)` pairs into `column_count` columns.
///
/// Each item, in order, goes to the currently shortest column (first one on
/// ties), at `left = column * (column_width + gap)` and `top` equal to that
/// column's running height; the column then grows by the item height plus
/// `gap`. Item height is `column_width * height / width`.
///
/// Items whose intrinsic size is not finite and positive are laid out as
/// squares so that no placement is ever `NaN` or infinite.
///
/// When `column_count` is zero or `column_width` is not positive the result
/// is empty, as it is for an empty input.
///
/// The result is a pure function of the inputs.
pub fn pack_columns<K, I>(
    items: I,
    column_count: usize,
    column_width: f64,
    gap: f64,
) -> MasonryLayout<K>
where
    I: IntoIterator<Item = (K, Size)>,
{
    let gap = if gap.is_finite() { gap.max(0.0) } else { 0.0 };
    if column_count == 0 || !column_width.is_finite() || column_width <= 0.0 {
        return MasonryLayout::empty();
    }

    let items = items.into_iter();
    let mut positioned = Vec::with_capacity(items.size_hint().0);
    let mut heights = vec![0.0_f64; column_count];
    let stride = column_width + gap;

    for (index, (id, size)) in items.enumerate() {
        let height = scaled_height(size, column_width).unwrap_or_else(|| {
            log::debug!("item {index} has degenerate size {size:?}; laying out as a square");
            column_width
        });
        let column = shortest_column(&heights);
        #[allow(
            clippy::cast_precision_loss,
            reason = "Column indices are small; precision loss would need > 2^52 columns"
        )]
        let left = column as f64 * stride;
        let top = heights[column];
        positioned.push(PositionedItem {
            id,
            index,
            column,
            placement: Placement {
                left,
                top,
                width: column_width,
                height,
            },
        });
        heights[column] = top + height + gap;
    }

    let total_height = if positioned.is_empty() {
        0.0
    } else {
        let tallest = heights.iter().copied().fold(0.0_f64, f64::max);
        (tallest - gap).max(0.0)
    };

    log::trace!(
        "packed {} items into {column_count} columns of {column_width}px, total height {total_height}",
        positioned.len()
    );

    MasonryLayout {
        items: positioned,
        column_heights: heights,
        column_width,
        gap,
        total_height,
    }
}

/// Resolves columns for `container_width` with `policy`, then packs `items`.
///
/// A container without usable width yields an empty layout.
pub fn layout_items<T: MasonryItem>(
    items: &[T],
    container_width: f64,
    gap: f64,
    policy: &ColumnPolicy,
) -> MasonryLayout<T::Id> {
    let column_count = policy.column_count(container_width, gap);
    let width = column_width(column_count, container_width, gap);
    pack_columns(
        items.iter().map(|item| (item.id(), item.intrinsic_size())),
        column_count,
        width,
        gap,
    )
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;
    use core::num::NonZeroUsize;

    use kurbo::Size;

    use super::{layout_items, pack_columns, shortest_column};
    use crate::{ColumnPolicy, SizedItem};

    fn photos() -> Vec<SizedItem<&'static str>> {
        Vec::from([
            SizedItem::new("1", 100.0, 100.0),
            SizedItem::new("2", 100.0, 200.0),
            SizedItem::new("3", 100.0, 150.0),
            SizedItem::new("4", 100.0, 120.0),
        ])
    }

    #[test]
    fn shortest_column_prefers_lowest_index_on_ties() {
        assert_eq!(shortest_column(&[0.0, 0.0, 0.0]), 0);
        assert_eq!(shortest_column(&[5.0, 3.0, 3.0]), 1);
        assert_eq!(shortest_column(&[5.0, 4.0, 1.0]), 2);
    }

    #[test]
    fn four_items_fill_four_columns() {
        let layout = layout_items(&photos(), 1000.0, 10.0, &ColumnPolicy::fixed_width(200.0));
        assert_eq!(layout.column_count(), 4);
        assert_eq!(layout.column_width(), 242.5);

        let expected = [
            (0.0, 0.0, 242.5),
            (252.5, 0.0, 485.0),
            (505.0, 0.0, 363.75),
            (757.5, 0.0, 291.0),
        ];
        assert_eq!(layout.len(), expected.len());
        for (item, (left, top, height)) in layout.items().iter().zip(expected) {
            assert_eq!(item.placement.left, left);
            assert_eq!(item.placement.top, top);
            assert_eq!(item.placement.height, height);
            assert_eq!(item.placement.width, 242.5);
        }
        assert_eq!(layout.total_height(), 485.0);
    }

    #[test]
    fn fifth_item_goes_under_the_shortest_column() {
        let mut items = photos();
        items.push(SizedItem::new("5", 100.0, 180.0));
        let layout = layout_items(&items, 1000.0, 10.0, &ColumnPolicy::fixed_width(200.0));
        let fifth = &layout.items()[4];
        // Column 0 ends at 242.5 + gap.
        assert_eq!(fifth.column, 0);
        assert_eq!(fifth.placement.left, 0.0);
        assert_eq!(fifth.placement.top, 252.5);
        assert_eq!(fifth.placement.height, 436.5);
        assert_eq!(layout.total_height(), 689.0);
    }

    #[test]
    fn empty_input_has_no_positions_and_zero_height() {
        let items: [SizedItem<u32>; 0] = [];
        for width in [0.0, 320.0, 1000.0, 4000.0] {
            let layout = layout_items(&items, width, 10.0, &ColumnPolicy::default());
            assert!(layout.is_empty());
            assert_eq!(layout.total_height(), 0.0);
        }
    }

    #[test]
    fn zero_width_container_has_no_positions() {
        for width in [0.0, -100.0] {
            let layout = layout_items(&photos(), width, 10.0, &ColumnPolicy::fixed_width(200.0));
            assert!(layout.is_empty());
            assert_eq!(layout.total_height(), 0.0);
            assert_eq!(layout.column_count(), 0);
        }
    }

    #[test]
    fn identical_inputs_give_identical_layouts() {
        let policy = ColumnPolicy::default();
        let a = layout_items(&photos(), 900.0, 6.0, &policy);
        let b = layout_items(&photos(), 900.0, 6.0, &policy);
        assert_eq!(a, b);
        for (x, y) in a.items().iter().zip(b.items()) {
            assert_eq!(x.placement.top.to_bits(), y.placement.top.to_bits());
            assert_eq!(x.placement.height.to_bits(), y.placement.height.to_bits());
        }
    }

    #[test]
    fn narrower_container_changes_columns_and_positions() {
        let policy = ColumnPolicy::fixed_width(200.0);
        let wide = layout_items(&photos(), 1000.0, 10.0, &policy);
        let narrow = layout_items(&photos(), 800.0, 10.0, &policy);
        assert_eq!(wide.column_width(), 242.5);
        assert_eq!(narrow.column_width(), 260.0);
        assert_ne!(wide.column_width(), narrow.column_width());
        assert_ne!(wide.items(), narrow.items());
        // Fourth item wraps under the first column in a three-column layout.
        assert_eq!(narrow.items()[3].column, 0);
        assert_eq!(narrow.items()[3].placement.top, 270.0);
    }

    #[test]
    fn columns_stack_without_overlap_separated_by_gap() {
        let gap = 8.0;
        let items: Vec<_> = (0..40_u32)
            .map(|i| SizedItem::new(i, 100.0 + f64::from(i % 7) * 30.0, 80.0 + f64::from(i % 5) * 45.0))
            .collect();
        let layout = layout_items(&items, 1200.0, gap, &ColumnPolicy::default());
        assert_eq!(layout.len(), items.len());

        let mut tallest: f64 = 0.0;
        for column in 0..layout.column_count() {
            let stacked: Vec<_> = layout.items().iter().filter(|item| item.column == column).collect();
            let mut expected_top = 0.0;
            for item in &stacked {
                assert!((item.placement.top - expected_top).abs() < 1e-9, "column {column} has a hole or overlap");
                expected_top = item.placement.bottom() + gap;
            }
            assert!((layout.column_heights()[column] - expected_top).abs() < 1e-9);
            if !stacked.is_empty() {
                tallest = tallest.max(expected_top);
            }
        }
        assert!((layout.total_height() - (tallest - gap)).abs() < 1e-9);
    }

    #[test]
    fn each_step_picks_the_shortest_column() {
        let items: Vec<_> = (0..25_u32)
            .map(|i| SizedItem::new(i, 90.0, 60.0 + f64::from((i * 37) % 11) * 17.0))
            .collect();
        let layout = layout_items(&items, 700.0, 4.0, &ColumnPolicy::default());
        let mut heights = alloc::vec![0.0_f64; layout.column_count()];
        for item in layout.items() {
            let min = heights.iter().copied().fold(f64::INFINITY, f64::min);
            let first_min = heights.iter().position(|h| *h == min).unwrap();
            assert_eq!(item.column, first_min);
            heights[item.column] = heights[item.column] + item.placement.height + layout.gap();
        }
    }

    #[test]
    fn degenerate_items_are_laid_out_as_squares() {
        let items = [
            SizedItem::new(1, 0.0, 100.0),
            SizedItem::new(2, 100.0, -5.0),
            SizedItem::new(3, f64::NAN, 10.0),
        ];
        let policy = ColumnPolicy::Count(NonZeroUsize::new(1).unwrap());
        let layout = layout_items(&items, 300.0, 10.0, &policy);
        assert_eq!(layout.len(), 3);
        for item in layout.items() {
            assert!(item.placement.height.is_finite());
            assert_eq!(item.placement.height, 300.0);
        }
        assert_eq!(layout.total_height(), 920.0);
    }

    #[test]
    fn pack_columns_short_circuits_without_columns() {
        let layout = pack_columns([(1_u8, Size::new(10.0, 10.0))], 0, 100.0, 10.0);
        assert!(layout.is_empty());
        let layout = pack_columns([(1_u8, Size::new(10.0, 10.0))], 3, 0.0, 10.0);
        assert!(layout.is_empty());
        assert_eq!(layout.content_size(), Size::ZERO);
    }

    #[test]
    fn content_size_spans_columns_and_gutters() {
        let layout = layout_items(&photos(), 1000.0, 10.0, &ColumnPolicy::fixed_width(200.0));
        assert_eq!(layout.content_size(), Size::new(1000.0, 485.0));
        assert_eq!(layout.placement(1).unwrap().rect().y1, 485.0);
    }
}
