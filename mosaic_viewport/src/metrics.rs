// Copyright 2025 the Mosaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll metrics and viewport resolution.

/// Scroll state of one scrollable surface (a container or the document).
///
/// Mirrors the usual `scrollTop` / `clientHeight` / `scrollHeight` triple.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollMetrics {
    /// Distance scrolled from the top.
    pub scroll_top: f64,
    /// Height of the visible part of the surface.
    pub client_height: f64,
    /// Full height of the scrollable content.
    pub scroll_height: f64,
}

impl ScrollMetrics {
    /// Creates a metrics triple.
    #[must_use]
    pub const fn new(scroll_top: f64, client_height: f64, scroll_height: f64) -> Self {
        Self {
            scroll_top,
            client_height,
            scroll_height,
        }
    }

    /// Distance between the bottom of the visible area and the end of the content.
    #[must_use]
    pub fn bottom_offset(&self) -> f64 {
        self.scroll_height - (self.scroll_top + self.client_height)
    }

    /// Returns `true` if the content is taller than the visible area.
    #[must_use]
    pub fn is_scrollable(&self) -> bool {
        self.scroll_height > self.client_height
    }
}

/// Which surface is actually scrolling the masonry content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollSource {
    /// The container scrolls its own content.
    Container,
    /// The container grows to fit and the window scrolls.
    Window,
}

/// The visible vertical window, expressed in masonry content coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ViewportWindow {
    /// Content offset at the top edge of the viewport. May be negative when
    /// the container starts below the top of the window.
    pub scroll_offset: f64,
    /// Height of the viewport.
    pub extent: f64,
}

impl ViewportWindow {
    /// Creates a viewport window.
    #[must_use]
    pub const fn new(scroll_offset: f64, extent: f64) -> Self {
        Self {
            scroll_offset,
            extent,
        }
    }

    /// The `[start, end]` range grown by `buffer` on both sides.
    #[must_use]
    pub fn buffered(&self, buffer: f64) -> (f64, f64) {
        self.expanded(buffer, buffer)
    }

    /// The `[start, end]` range grown by `before` above and `after` below.
    #[must_use]
    pub fn expanded(&self, before: f64, after: f64) -> (f64, f64) {
        let extent = self.extent.max(0.0);
        (
            self.scroll_offset - before,
            self.scroll_offset + extent + after,
        )
    }
}

/// Resolves the viewport from whichever surface is scrolling.
///
/// If the container's content overflows it (`scroll_height > client_height`),
/// the container is the scroller and its own metrics are used directly.
/// Otherwise the window scrolls; `container_offset` is the container's top
/// edge in document coordinates, which maps the window scroll position into
/// content coordinates.
#[must_use]
pub fn resolve_viewport(
    container: ScrollMetrics,
    window: ScrollMetrics,
    container_offset: f64,
) -> (ScrollSource, ViewportWindow) {
    if container.is_scrollable() {
        (
            ScrollSource::Container,
            ViewportWindow::new(container.scroll_top, container.client_height),
        )
    } else {
        (
            ScrollSource::Window,
            ViewportWindow::new(window.scroll_top - container_offset, window.client_height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{ScrollMetrics, ScrollSource, ViewportWindow, resolve_viewport};

    #[test]
    fn bottom_offset_measures_remaining_content() {
        let metrics = ScrollMetrics::new(300.0, 700.0, 1200.0);
        assert_eq!(metrics.bottom_offset(), 200.0);
        assert!(metrics.is_scrollable());
        assert!(!ScrollMetrics::new(0.0, 700.0, 700.0).is_scrollable());
    }

    #[test]
    fn overflowing_container_is_the_scroller() {
        let container = ScrollMetrics::new(150.0, 400.0, 2000.0);
        let window = ScrollMetrics::new(900.0, 800.0, 3000.0);
        let (source, viewport) = resolve_viewport(container, window, 120.0);
        assert_eq!(source, ScrollSource::Container);
        assert_eq!(viewport, ViewportWindow::new(150.0, 400.0));
    }

    #[test]
    fn window_scroll_is_offset_by_container_position() {
        let container = ScrollMetrics::new(0.0, 2000.0, 2000.0);
        let window = ScrollMetrics::new(900.0, 800.0, 3000.0);
        let (source, viewport) = resolve_viewport(container, window, 120.0);
        assert_eq!(source, ScrollSource::Window);
        assert_eq!(viewport, ViewportWindow::new(780.0, 800.0));

        // Before the container reaches the top of the window the offset is negative.
        let window = ScrollMetrics::new(0.0, 800.0, 3000.0);
        let (_, viewport) = resolve_viewport(container, window, 120.0);
        assert_eq!(viewport.scroll_offset, -120.0);
    }

    #[test]
    fn buffered_range_grows_both_ways() {
        let viewport = ViewportWindow::new(1000.0, 600.0);
        assert_eq!(viewport.buffered(200.0), (800.0, 1800.0));
        assert_eq!(viewport.expanded(0.0, 100.0), (1000.0, 1700.0));
    }
}
