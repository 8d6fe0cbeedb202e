// Copyright 2025 the Mosaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A controller tying layout, visibility, and host events together.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::hash::Hash;

use kurbo::Size;
use mosaic_masonry::{
    ColumnPolicy, MasonryItem, MasonryLayout, PositionedItem, column_width, pack_columns,
};
use smallvec::SmallVec;

use crate::{
    Debouncer, EndReachedDetector, FrameId, FrameThrottle, ListenEvent, ListenTarget, Listener,
    MasonryConfig, ObserveTargets, ScrollMetrics, ScrollSource, ViewportHost, Visibility,
    VisibilityMode, VisibilityStrategy, VisibleSet, resolve_viewport,
};

/// What a view hands to its rendering surface.
#[derive(Debug, Clone, PartialEq)]
pub struct MasonryOutput<K> {
    /// Items to render, in input order.
    pub visible_items: Vec<PositionedItem<K>>,
    /// Height the container must have to hold every item.
    pub total_height: f64,
}

/// A virtualized masonry view mounted on a [`ViewportHost`].
///
/// This type:
/// - owns the item list (ids and intrinsic sizes) and the current layout,
/// - relayouts from scratch when items, gap, column policy, or (debounced)
///   container size change, and refreshes visibility synchronously at the end
///   of every layout pass,
/// - refreshes visibility on scroll at most once per animation frame,
/// - fires an optional end-reached callback once per threshold crossing,
/// - attaches listeners on [`mount`](Self::mount) and detaches them, together
///   with any pending frame or resize timer, on [`unmount`](Self::unmount).
///
/// Event entry points are no-ops while unmounted.
///
/// It does *not* render anything. Hosts read [`visible_items`](Self::visible_items)
/// or [`output`](Self::output) after [`visible_revision`](Self::visible_revision)
/// or [`layout_revision`](Self::layout_revision) changes and update their surface.
pub struct MasonryView<K, H> {
    host: H,
    config: MasonryConfig,
    items: Vec<(K, Size)>,
    layout: MasonryLayout<K>,
    dirty: bool,
    layout_revision: u64,

    visibility: Visibility<K>,
    visible: VisibleSet<K>,
    visible_revision: u64,
    source: ScrollSource,

    frame: FrameThrottle,
    resize: Debouncer<()>,
    end_reached: EndReachedDetector,
    on_end_reached: Option<Box<dyn FnMut()>>,

    listeners: SmallVec<[Listener; 4]>,
    mounted: bool,
}

impl<K: fmt::Debug, H: fmt::Debug> fmt::Debug for MasonryView<K, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MasonryView")
            .field("host", &self.host)
            .field("config", &self.config)
            .field("items", &self.items.len())
            .field("layout", &self.layout)
            .field("dirty", &self.dirty)
            .field("layout_revision", &self.layout_revision)
            .field("visibility", &self.visibility)
            .field("visible", &self.visible)
            .field("visible_revision", &self.visible_revision)
            .field("source", &self.source)
            .field("frame", &self.frame)
            .field("resize", &self.resize)
            .field("end_reached", &self.end_reached)
            .field("on_end_reached", &self.on_end_reached.is_some())
            .field("listeners", &self.listeners)
            .field("mounted", &self.mounted)
            .finish()
    }
}

impl<K: Clone + Eq + Hash, H: ViewportHost> MasonryView<K, H> {
    /// Creates an unmounted view over `host`.
    #[must_use]
    pub fn new(host: H, config: MasonryConfig) -> Self {
        let visibility = Visibility::from_mode(config.visibility, config.buffer);
        let resize = Debouncer::new(config.resize_debounce_ms);
        let end_reached = EndReachedDetector::new(config.end_reached_threshold);
        Self {
            host,
            config,
            items: Vec::new(),
            layout: MasonryLayout::empty(),
            dirty: true,
            layout_revision: 0,
            visibility,
            visible: VisibleSet::default(),
            visible_revision: 0,
            source: ScrollSource::Window,
            frame: FrameThrottle::new(),
            resize,
            end_reached,
            on_end_reached: None,
            listeners: SmallVec::new(),
            mounted: false,
        }
    }

    /// Returns a shared reference to the host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Returns a mutable reference to the host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn config(&self) -> &MasonryConfig {
        &self.config
    }

    /// Returns `true` between [`mount`](Self::mount) and [`unmount`](Self::unmount).
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Attaches listeners and runs the first layout pass.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        let targets = self.config.targets;
        for (flag, target) in [
            (ObserveTargets::WINDOW, ListenTarget::Window),
            (ObserveTargets::CONTAINER, ListenTarget::Container),
        ] {
            if targets.contains(flag) {
                for event in [ListenEvent::Scroll, ListenEvent::Resize] {
                    let listener = Listener::new(target, event);
                    self.host.attach(listener);
                    self.listeners.push(listener);
                }
            }
        }
        self.mounted = true;
        log::debug!("masonry view mounted with {} listeners", self.listeners.len());
        self.relayout();
    }

    /// Detaches every listener and cancels any pending frame or resize timer.
    ///
    /// No recomputation happens after this returns until the view is mounted again.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        for listener in self.listeners.drain(..) {
            self.host.detach(listener);
        }
        self.frame.cancel(&mut self.host);
        self.resize.cancel();
        self.mounted = false;
        log::debug!("masonry view unmounted");
    }

    /// Replaces the item list and relayouts.
    pub fn set_items<T: MasonryItem<Id = K>>(&mut self, items: &[T]) {
        self.items.clear();
        self.items.extend(items.iter().map(|item| (item.id(), item.intrinsic_size())));
        self.relayout();
    }

    /// Appends items to the list and relayouts.
    ///
    /// The layout is still recomputed from scratch, so the result is identical
    /// to calling [`set_items`](Self::set_items) with the combined list.
    pub fn append_items<T: MasonryItem<Id = K>>(&mut self, items: &[T]) {
        if items.is_empty() {
            return;
        }
        self.items.extend(items.iter().map(|item| (item.id(), item.intrinsic_size())));
        self.relayout();
    }

    /// Number of items currently held.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Changes the gap; relayouts if it differs.
    pub fn set_gap(&mut self, gap: f64) {
        if gap != self.config.gap {
            self.config.gap = gap;
            self.relayout();
        }
    }

    /// Changes the column policy; relayouts if it differs.
    pub fn set_column_policy(&mut self, columns: ColumnPolicy) {
        if columns != self.config.columns {
            self.config.columns = columns;
            self.relayout();
        }
    }

    /// Switches the visibility strategy and refreshes visibility.
    pub fn set_visibility_mode(&mut self, mode: VisibilityMode) {
        self.config.visibility = mode;
        self.visibility = Visibility::from_mode(mode, self.config.buffer);
        if self.mounted {
            self.refresh_visible();
        }
    }

    /// Registers the callback fired when scrolling comes near the end.
    pub fn set_on_end_reached(&mut self, callback: impl FnMut() + 'static) {
        self.on_end_reached = Some(Box::new(callback));
    }

    /// Removes the end-reached callback.
    pub fn clear_on_end_reached(&mut self) {
        self.on_end_reached = None;
    }

    /// Changes the end-reached threshold, in pixels.
    pub fn set_end_reached_threshold(&mut self, threshold: f64) {
        self.config.end_reached_threshold = threshold;
        self.end_reached.set_threshold(threshold);
    }

    /// Handles a resize event at `now_ms`.
    ///
    /// Relayout happens from [`advance`](Self::advance) once the resize quiet
    /// period has passed; later resizes in a burst push it back.
    pub fn on_resize(&mut self, now_ms: u64) {
        if self.mounted {
            self.resize.call((), now_ms);
        }
    }

    /// When the host should next call [`advance`](Self::advance), if anything is pending.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        if self.mounted { self.resize.deadline() } else { None }
    }

    /// Runs timers due at `now_ms`. Returns `true` if a relayout happened.
    pub fn advance(&mut self, now_ms: u64) -> bool {
        if !self.mounted || self.resize.poll(now_ms).is_none() {
            return false;
        }
        self.relayout();
        true
    }

    /// Handles a scroll event.
    ///
    /// Checks for end-of-content immediately and schedules a visibility
    /// refresh for the next animation frame, replacing any frame not yet fired.
    pub fn on_scroll(&mut self) {
        if !self.mounted {
            return;
        }
        if self.end_reached.on_scroll(self.scroll_metrics())
            && let Some(callback) = self.on_end_reached.as_mut()
        {
            callback();
        }
        self.frame.schedule(&mut self.host);
    }

    /// Delivers an animation frame. Returns `true` if the visible set changed.
    ///
    /// Frames that were replaced or cancelled are ignored.
    pub fn on_animation_frame(&mut self, frame: FrameId) -> bool {
        if !self.mounted || !self.frame.fire(frame) {
            return false;
        }
        self.refresh_visible()
    }

    /// Returns `true` if a visibility refresh is waiting for its frame.
    #[must_use]
    pub const fn is_frame_pending(&self) -> bool {
        self.frame.is_pending()
    }

    /// Recomputes the layout from scratch and then the visible set.
    ///
    /// While unmounted this only marks the layout stale; it is recomputed on mount.
    pub fn relayout(&mut self) {
        if !self.mounted {
            self.dirty = true;
            return;
        }
        let width = self.host.container_width();
        let gap = self.config.gap;
        let column_count = self.config.columns.column_count(width, gap);
        let column_width = column_width(column_count, width, gap);
        self.layout = pack_columns(self.items.iter().cloned(), column_count, column_width, gap);
        self.dirty = false;
        self.layout_revision += 1;
        log::trace!(
            "relayout: {} items, container {width}px, {column_count} columns",
            self.items.len()
        );
        self.refresh_visible();
    }

    /// Recomputes the visible set for the current scroll position.
    ///
    /// Returns `true` and bumps [`visible_revision`](Self::visible_revision)
    /// only if the set of visible ids changed. Positions may move without the
    /// ids changing; [`layout_revision`](Self::layout_revision) tracks that.
    pub fn refresh_visible(&mut self) -> bool {
        if !self.mounted {
            return false;
        }
        let (source, viewport) = resolve_viewport(
            self.host.container_metrics(),
            self.host.window_metrics(),
            self.host.container_offset(),
        );
        self.source = source;
        let visible = self
            .visibility
            .compute_visible(self.layout.items(), viewport);
        let changed = visible != self.visible;
        // Indices must follow the current layout even when the ids did not change.
        self.visible = visible;
        if changed {
            self.visible_revision += 1;
        }
        changed
    }

    fn scroll_metrics(&self) -> ScrollMetrics {
        let container = self.host.container_metrics();
        if container.is_scrollable() {
            container
        } else {
            self.host.window_metrics()
        }
    }

    /// The current layout.
    #[must_use]
    pub fn layout(&self) -> &MasonryLayout<K> {
        &self.layout
    }

    /// Returns `true` if the layout is stale and will be recomputed on mount.
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Height of the laid-out content.
    #[must_use]
    pub fn total_height(&self) -> f64 {
        self.layout.total_height()
    }

    /// The current visible set.
    #[must_use]
    pub fn visible(&self) -> &VisibleSet<K> {
        &self.visible
    }

    /// Counter bumped by every layout pass.
    ///
    /// Placements of visible items can change without the visible ids
    /// changing, so hosts re-render when either revision moves.
    #[must_use]
    pub const fn layout_revision(&self) -> u64 {
        self.layout_revision
    }

    /// Counter bumped every time the visible set changes.
    #[must_use]
    pub const fn visible_revision(&self) -> u64 {
        self.visible_revision
    }

    /// Which surface was scrolling at the last visibility refresh.
    #[must_use]
    pub const fn scroll_source(&self) -> ScrollSource {
        self.source
    }

    /// Positioned items in the visible set, in input order.
    pub fn visible_items(&self) -> impl Iterator<Item = &PositionedItem<K>> {
        let items = self.layout.items();
        self.visible
            .indices()
            .iter()
            .filter_map(move |index| items.get(*index))
    }

    /// Snapshot of the visible items and total height.
    #[must_use]
    pub fn output(&self) -> MasonryOutput<K> {
        MasonryOutput {
            visible_items: self.visible_items().cloned().collect(),
            total_height: self.total_height(),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::Cell;
    use core::num::NonZeroUsize;

    use mosaic_masonry::{ColumnPolicy, SizedItem};

    use super::MasonryView;
    use crate::{
        FrameId, FrameScheduler, ListenEvent, ListenTarget, Listener, MasonryConfig,
        ObserveTargets, ObserverOptions, ScrollMetrics, ScrollSource, ViewportHost,
        VisibilityMode,
    };

    /// A window-scrolled page whose container starts at the top of the document.
    #[derive(Debug, Default)]
    struct FakeHost {
        width: f64,
        scroll_top: f64,
        inner_height: f64,
        container: ScrollMetrics,
        attached: Vec<Listener>,
        next_frame: u64,
        live_frames: Vec<FrameId>,
        requested: usize,
    }

    impl FakeHost {
        fn new(width: f64, inner_height: f64) -> Self {
            Self {
                width,
                inner_height,
                ..Self::default()
            }
        }

        fn last_frame(&self) -> FrameId {
            *self.live_frames.last().unwrap()
        }
    }

    impl FrameScheduler for FakeHost {
        fn request_frame(&mut self) -> FrameId {
            self.next_frame += 1;
            self.requested += 1;
            let frame = FrameId(self.next_frame);
            self.live_frames.push(frame);
            frame
        }

        fn cancel_frame(&mut self, frame: FrameId) {
            self.live_frames.retain(|live| *live != frame);
        }
    }

    impl ViewportHost for FakeHost {
        fn container_width(&self) -> f64 {
            self.width
        }

        fn container_metrics(&self) -> ScrollMetrics {
            self.container
        }

        fn window_metrics(&self) -> ScrollMetrics {
            ScrollMetrics::new(self.scroll_top, self.inner_height, 10_000.0)
        }

        fn container_offset(&self) -> f64 {
            0.0
        }

        fn attach(&mut self, listener: Listener) {
            self.attached.push(listener);
        }

        fn detach(&mut self, listener: Listener) {
            self.attached.retain(|attached| *attached != listener);
        }
    }

    /// One column of 100 square items, each 100px tall with a 10px gap.
    fn single_column() -> (MasonryView<u32, FakeHost>, Vec<SizedItem<u32>>) {
        let config = MasonryConfig::with_gap(10.0)
            .columns(ColumnPolicy::Count(NonZeroUsize::new(1).unwrap()));
        let view = MasonryView::new(FakeHost::new(100.0, 500.0), config);
        let items = (0..100).map(|id| SizedItem::new(id, 50.0, 50.0)).collect();
        (view, items)
    }

    #[test]
    fn mount_attaches_listeners_and_lays_out() {
        let (mut view, items) = single_column();
        view.set_items(&items);
        assert!(view.is_dirty());
        assert!(view.layout().is_empty());

        view.mount();
        assert_eq!(view.host().attached.len(), 4);
        assert!(
            view.host()
                .attached
                .contains(&Listener::new(ListenTarget::Container, ListenEvent::Scroll))
        );
        assert!(!view.is_dirty());
        assert_eq!(view.layout().len(), 100);
        assert_eq!(view.total_height(), 100.0 * 100.0 + 99.0 * 10.0);

        // Viewport [0, 500] plus a 200px buffer below: items 0..=6 (item 6 starts at 660).
        assert_eq!(view.visible().indices(), &[0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(view.visible_revision(), 1);
        assert_eq!(view.scroll_source(), ScrollSource::Window);
    }

    #[test]
    fn window_only_targets_attach_two_listeners() {
        let config = MasonryConfig {
            targets: ObserveTargets::WINDOW,
            ..MasonryConfig::default()
        };
        let mut view: MasonryView<u32, _> = MasonryView::new(FakeHost::new(800.0, 600.0), config);
        view.mount();
        assert_eq!(view.host().attached.len(), 2);
        assert!(
            view.host()
                .attached
                .iter()
                .all(|listener| listener.target == ListenTarget::Window)
        );
    }

    #[test]
    fn scroll_bursts_coalesce_into_one_frame() {
        let (mut view, items) = single_column();
        view.set_items(&items);
        view.mount();

        view.host_mut().scroll_top = 1000.0;
        view.on_scroll();
        view.host_mut().scroll_top = 2000.0;
        view.on_scroll();
        view.host_mut().scroll_top = 3000.0;
        view.on_scroll();
        assert_eq!(view.host().requested, 3);
        assert_eq!(view.host().live_frames.len(), 1);

        // Nothing is recomputed until the frame fires.
        assert_eq!(view.visible().indices()[0], 0);
        let frame = view.host().last_frame();
        assert!(view.on_animation_frame(frame));
        // Window [2800, 3700] after buffering: items 25..=33.
        assert_eq!(view.visible().indices(), &(25..=33).collect::<Vec<_>>()[..]);
        assert!(!view.is_frame_pending());
    }

    #[test]
    fn stale_frames_are_ignored() {
        let (mut view, items) = single_column();
        view.set_items(&items);
        view.mount();
        view.on_scroll();
        let stale = view.host().last_frame();
        view.on_scroll();
        assert!(!view.on_animation_frame(stale));
        assert!(view.is_frame_pending());
    }

    #[test]
    fn unchanged_visible_set_does_not_bump_revision() {
        let (mut view, items) = single_column();
        view.set_items(&items);
        view.mount();
        let revision = view.visible_revision();

        // A small scroll keeps the same ids in view.
        view.host_mut().scroll_top = 5.0;
        view.on_scroll();
        let frame = view.host().last_frame();
        assert!(!view.on_animation_frame(frame));
        assert_eq!(view.visible_revision(), revision);
    }

    #[test]
    fn resize_is_debounced_to_the_last_event() {
        let config = MasonryConfig::with_gap(10.0).columns(ColumnPolicy::fixed_width(200.0));
        let mut view = MasonryView::new(FakeHost::new(1000.0, 800.0), config);
        let items: Vec<_> = (0..4_u32)
            .zip([100.0, 200.0, 150.0, 120.0])
            .map(|(id, height)| SizedItem::new(id, 100.0, height))
            .collect();
        view.set_items(&items);
        view.mount();
        assert_eq!(view.layout().column_width(), 242.5);
        let wide = view.layout().clone();

        view.host_mut().width = 900.0;
        view.on_resize(0);
        view.host_mut().width = 800.0;
        view.on_resize(100);
        assert_eq!(view.next_deadline(), Some(350));
        assert!(!view.advance(300));
        assert_eq!(view.layout().column_width(), 242.5);

        assert!(view.advance(350));
        assert_eq!(view.layout().column_count(), 3);
        assert_eq!(view.layout().column_width(), 260.0);
        assert_ne!(view.layout(), &wide);
        assert_eq!(view.next_deadline(), None);
    }

    #[test]
    fn end_reached_fires_once_per_crossing() {
        let (mut view, items) = single_column();
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        view.set_on_end_reached(move || counter.set(counter.get() + 1));
        view.set_items(&items);
        view.mount();

        // Document is 10_000px tall with a 500px window: the end is at 9500.
        view.host_mut().scroll_top = 9400.0;
        view.on_scroll();
        assert_eq!(hits.get(), 1);
        view.host_mut().scroll_top = 9450.0;
        view.on_scroll();
        assert_eq!(hits.get(), 1);

        view.host_mut().scroll_top = 5000.0;
        view.on_scroll();
        view.host_mut().scroll_top = 9350.0;
        view.on_scroll();
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn nothing_happens_after_unmount() {
        let (mut view, items) = single_column();
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        view.set_on_end_reached(move || counter.set(counter.get() + 1));
        view.set_items(&items);
        view.mount();

        view.on_scroll();
        let pending = view.host().last_frame();
        view.on_resize(0);
        view.unmount();

        assert!(view.host().attached.is_empty());
        assert!(view.host().live_frames.is_empty());
        assert_eq!(view.next_deadline(), None);

        let layout = view.layout().clone();
        let visible = view.visible().clone();
        let revision = view.visible_revision();
        let requested = view.host().requested;

        view.host_mut().scroll_top = 9400.0;
        view.host_mut().width = 40.0;
        view.on_scroll();
        view.on_resize(10);
        assert!(!view.advance(10_000));
        assert!(!view.on_animation_frame(pending));
        assert!(!view.refresh_visible());

        assert_eq!(view.layout(), &layout);
        assert_eq!(view.visible(), &visible);
        assert_eq!(view.visible_revision(), revision);
        assert_eq!(view.host().requested, requested);
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn relayout_refreshes_visibility_before_returning() {
        let (mut view, items) = single_column();
        view.mount();
        assert!(view.visible().is_empty());
        view.set_items(&items[..3]);
        assert_eq!(view.visible().indices(), &[0, 1, 2]);

        view.append_items(&items[3..]);
        assert_eq!(view.item_count(), 100);
        assert_eq!(view.visible().len(), 7);
        assert_eq!(view.output().total_height, view.total_height());
        assert_eq!(view.output().visible_items.len(), 7);
    }

    #[test]
    fn zero_width_container_yields_empty_output() {
        let mut view = MasonryView::new(FakeHost::new(0.0, 800.0), MasonryConfig::default());
        view.set_items(&[SizedItem::new(1_u32, 10.0, 10.0)]);
        view.mount();
        let output = view.output();
        assert!(output.visible_items.is_empty());
        assert_eq!(output.total_height, 0.0);
    }

    #[test]
    fn observed_items_mode_matches_frame_scan() {
        let (mut view, items) = single_column();
        view.set_items(&items);
        view.mount();
        view.host_mut().scroll_top = 4321.0;
        view.refresh_visible();
        let scanned = view.visible().clone();

        view.set_visibility_mode(VisibilityMode::ObserveItems(ObserverOptions::symmetric(200.0)));
        assert_eq!(view.visible(), &scanned);
        assert_eq!(view.visible().indices(), scanned.indices());
    }

    #[test]
    fn container_scroller_is_detected() {
        let (mut view, items) = single_column();
        view.set_items(&items);
        view.host_mut().container = ScrollMetrics::new(2200.0, 400.0, 10_990.0);
        view.mount();
        assert_eq!(view.scroll_source(), ScrollSource::Container);
        // Container window [2000, 2800] after buffering: items 18..=25.
        assert_eq!(view.visible().indices(), &(18..=25).collect::<Vec<_>>()[..]);
    }

    #[test]
    fn gap_change_relayouts() {
        let (mut view, items) = single_column();
        view.set_items(&items);
        view.mount();
        view.set_gap(0.0);
        assert_eq!(view.total_height(), 100.0 * 100.0);
        assert_eq!(view.layout().items()[3].placement.top, 300.0);
    }

    #[test]
    fn visible_items_follow_the_new_layout_when_ids_are_unchanged() {
        let config = MasonryConfig {
            buffer: 0.0,
            ..MasonryConfig::with_gap(10.0)
                .columns(ColumnPolicy::Count(NonZeroUsize::new(1).unwrap()))
        };
        let mut view = MasonryView::new(FakeHost::new(100.0, 50.0), config);
        view.host_mut().scroll_top = 1005.0;
        // Item 99 sits at [1010, 1110] in both lists.
        view.set_items(&[SizedItem::new(1_u32, 100.0, 1000.0), SizedItem::new(99, 100.0, 100.0)]);
        view.mount();
        assert_eq!(view.visible().indices(), &[1]);
        let revision = view.visible_revision();
        let layout_revision = view.layout_revision();

        view.set_items(&[
            SizedItem::new(2_u32, 100.0, 500.0),
            SizedItem::new(3, 100.0, 490.0),
            SizedItem::new(99, 100.0, 100.0),
        ]);
        assert_eq!(view.visible().indices(), &[2]);
        let ids: Vec<u32> = view.visible_items().map(|item| item.id).collect();
        assert_eq!(ids, [99]);
        assert_eq!(view.output().visible_items[0].placement.top, 1010.0);
        assert_eq!(view.visible_revision(), revision);
        assert!(view.layout_revision() > layout_revision);
    }
}
