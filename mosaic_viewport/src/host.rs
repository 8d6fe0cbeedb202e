// Copyright 2025 the Mosaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The boundary between a masonry view and the surface it is mounted on.

use crate::{FrameScheduler, ScrollMetrics};

bitflags::bitflags! {
    /// Surfaces a mounted view listens to.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ObserveTargets: u8 {
        /// The window (scroll and resize).
        const WINDOW    = 0b0000_0001;
        /// The masonry container itself (scroll and resize).
        const CONTAINER = 0b0000_0010;
    }
}

impl Default for ObserveTargets {
    fn default() -> Self {
        Self::WINDOW | Self::CONTAINER
    }
}

/// Surface an event listener is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenTarget {
    /// The window.
    Window,
    /// The masonry container.
    Container,
}

/// Event kind a listener is attached for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenEvent {
    /// Scroll events; routed to [`MasonryView::on_scroll`](crate::MasonryView::on_scroll).
    Scroll,
    /// Resize events; routed to [`MasonryView::on_resize`](crate::MasonryView::on_resize).
    Resize,
}

/// One attached event listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Listener {
    /// Where the listener is attached.
    pub target: ListenTarget,
    /// What it listens for.
    pub event: ListenEvent,
}

impl Listener {
    /// Creates a listener description.
    #[must_use]
    pub const fn new(target: ListenTarget, event: ListenEvent) -> Self {
        Self { target, event }
    }
}

/// Everything a [`MasonryView`](crate::MasonryView) needs from its host.
///
/// Hosts own the real surface (a DOM element, a native scroll view, a test
/// double). They report measurements on demand, attach and detach the event
/// listeners the view asks for, and deliver scroll, resize, timer and frame
/// events back to the view.
pub trait ViewportHost: FrameScheduler {
    /// Current width of the masonry container.
    fn container_width(&self) -> f64;

    /// Scroll metrics of the container.
    fn container_metrics(&self) -> ScrollMetrics;

    /// Scroll metrics of the window, where `client_height` is the window's
    /// inner height and `scroll_height` the document height.
    fn window_metrics(&self) -> ScrollMetrics;

    /// Top edge of the container in document coordinates.
    fn container_offset(&self) -> f64;

    /// Starts delivering `listener` events to the view.
    fn attach(&mut self, listener: Listener);

    /// Stops delivering `listener` events to the view.
    fn detach(&mut self, listener: Listener);
}
