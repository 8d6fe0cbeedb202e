// Copyright 2025 the Mosaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mosaic Masonry: column resolution and greedy masonry packing.
//!
//! This crate turns an ordered list of variable-aspect-ratio items into absolute
//! positions inside `N` equal-width columns. It is renderer-agnostic: it does not
//! know about widgets, the DOM, or scrolling. Virtualization of the resulting
//! layout lives in `mosaic_viewport`.
//!
//! The core concepts are:
//!
//! - [`MasonryItem`]: anything with an id and an intrinsic size. [`SizedItem`]
//!   is a ready-made implementation.
//! - [`ColumnPolicy`]: how many columns a container of a given width gets
//!   (breakpoints, a desired column width, or a fixed count), and
//!   [`column_width`] for the resulting uniform column width.
//! - [`pack_columns`]: the packing pass. Every item goes to the shortest
//!   column so far (lowest index on ties); its height follows from its aspect
//!   ratio and the column width.
//! - [`MasonryLayout`]: the result, one [`PositionedItem`] per input item plus
//!   the total content height.
//!
//! Layout passes are pure and total. A container without usable width or an
//! empty item list yields an empty layout with zero height, and items with a
//! degenerate intrinsic size are laid out as squares instead of producing
//! non-finite positions.
//!
//! ## Minimal example
//!
//! ```rust
//! use mosaic_masonry::{ColumnPolicy, SizedItem, layout_items};
//!
//! let items = [
//!     SizedItem::new("a", 100.0, 100.0),
//!     SizedItem::new("b", 100.0, 200.0),
//!     SizedItem::new("c", 100.0, 150.0),
//!     SizedItem::new("d", 100.0, 120.0),
//! ];
//!
//! // Columns of at least 200px separated by 10px gaps: four columns of 242.5px.
//! let layout = layout_items(&items, 1000.0, 10.0, &ColumnPolicy::fixed_width(200.0));
//! assert_eq!(layout.column_count(), 4);
//! assert_eq!(layout.items()[1].placement.left, 252.5);
//! assert_eq!(layout.total_height(), 485.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod columns;
mod item;
mod layout;

pub use columns::{Breakpoint, ColumnPolicy, column_width};
pub use item::{MasonryItem, SizedItem};
pub use layout::{MasonryLayout, Placement, PositionedItem, layout_items, pack_columns};
