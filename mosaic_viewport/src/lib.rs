// Copyright 2025 the Mosaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mosaic Viewport: virtualization for masonry layouts.
//!
//! This crate decides which items of a [`mosaic_masonry`] layout should be
//! rendered, and when to recompute that. It stays renderer-agnostic: a host
//! (a DOM binding, a native toolkit, a test double) implements [`ViewportHost`]
//! and forwards its events.
//!
//! The core concepts are:
//!
//! - [`ScrollMetrics`] and [`resolve_viewport`]: pick the scrolling surface
//!   (the container when it overflows, the window otherwise) and express the
//!   viewport in the container's coordinate space as a [`ViewportWindow`].
//! - [`VisibilityStrategy`]: computes a [`VisibleSet`] from positioned items and
//!   a viewport. [`FrameScan`] tests every item against the buffered viewport;
//!   [`ObservedItems`] keeps an [`ItemObserver`] per item and reports
//!   intersection changes. [`VisibilityMode`] selects one at runtime.
//! - [`FrameThrottle`] and [`Debouncer`]: coalesce scroll events into one
//!   recomputation per animation frame, and resize bursts into one relayout
//!   after a quiet period. The debouncer is generic and also suits search input.
//! - [`EndReachedDetector`]: fires once each time scrolling comes within a
//!   threshold of the end of the content.
//! - [`MasonryView`]: the controller tying all of the above to a host, with
//!   explicit [`mount`](MasonryView::mount) and [`unmount`](MasonryView::unmount).
//!
//! Time is never read from a clock. Hosts pass milliseconds on any monotonic
//! clock to [`MasonryView::on_resize`] and [`MasonryView::advance`], and deliver
//! the frames they were asked for through [`MasonryView::on_animation_frame`].
//!
//! ## Minimal example
//!
//! ```rust
//! use mosaic_masonry::SizedItem;
//! use mosaic_viewport::{
//!     FrameId, FrameScheduler, Listener, MasonryConfig, MasonryView, ScrollMetrics,
//!     ViewportHost,
//! };
//!
//! #[derive(Debug, Default)]
//! struct Page {
//!     scroll_top: f64,
//!     frames: u64,
//! }
//!
//! impl FrameScheduler for Page {
//!     fn request_frame(&mut self) -> FrameId {
//!         self.frames += 1;
//!         FrameId(self.frames)
//!     }
//!     fn cancel_frame(&mut self, _frame: FrameId) {}
//! }
//!
//! impl ViewportHost for Page {
//!     fn container_width(&self) -> f64 { 1200.0 }
//!     fn container_metrics(&self) -> ScrollMetrics { ScrollMetrics::default() }
//!     fn window_metrics(&self) -> ScrollMetrics {
//!         ScrollMetrics::new(self.scroll_top, 800.0, 20_000.0)
//!     }
//!     fn container_offset(&self) -> f64 { 0.0 }
//!     fn attach(&mut self, _listener: Listener) {}
//!     fn detach(&mut self, _listener: Listener) {}
//! }
//!
//! let photos: Vec<_> = (0..500_u32).map(|id| SizedItem::new(id, 400.0, 300.0)).collect();
//! let mut view = MasonryView::new(Page::default(), MasonryConfig::default());
//! view.set_items(&photos);
//! view.mount();
//! let before = view.visible_revision();
//!
//! view.host_mut().scroll_top = 6000.0;
//! view.on_scroll();
//! let frame = FrameId(view.host().frames);
//! assert!(view.on_animation_frame(frame));
//! assert!(view.visible_revision() > before);
//! assert!(view.visible_items().all(|item| item.placement.bottom() >= 5800.0));
//!
//! view.unmount();
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod debounce;
mod end_reached;
mod frame;
mod host;
mod metrics;
mod observer;
mod view;
mod visible;

pub use config::{
    DEFAULT_BUFFER, DEFAULT_END_REACHED_THRESHOLD, DEFAULT_RESIZE_DEBOUNCE_MS, MasonryConfig,
};
pub use debounce::Debouncer;
pub use end_reached::{EndReachedDetector, EndReachedState};
pub use frame::{FrameId, FrameScheduler, FrameThrottle};
pub use host::{ListenEvent, ListenTarget, Listener, ObserveTargets, ViewportHost};
pub use metrics::{ScrollMetrics, ScrollSource, ViewportWindow, resolve_viewport};
pub use observer::{ItemObserver, ObservationEntry, ObservedItems, ObserverOptions};
pub use view::{MasonryOutput, MasonryView};
pub use visible::{FrameScan, Visibility, VisibilityMode, VisibilityStrategy, VisibleSet};
