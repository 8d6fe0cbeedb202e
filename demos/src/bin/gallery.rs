// Copyright 2025 the Mosaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted session over a virtualized masonry gallery.
//!
//! This demo shows how a host drives `mosaic_viewport`:
//! - implementing `ViewportHost` for a window-scrolled page,
//! - forwarding scroll, resize, timer and animation-frame events,
//! - appending another batch of items when the end is reached.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p mosaic_demos --bin gallery`

use std::cell::Cell;
use std::rc::Rc;

use mosaic_masonry::SizedItem;
use mosaic_viewport::{
    FrameId, FrameScheduler, Listener, MasonryConfig, MasonryView, ScrollMetrics, ViewportHost,
};

/// Height of the page header above the gallery.
const HEADER: f64 = 120.0;
const BATCH: u32 = 200;

/// A browser-like page: the window scrolls and the gallery does not.
#[derive(Debug)]
struct Page {
    width: f64,
    inner_height: f64,
    scroll_y: f64,
    document_height: f64,
    listeners: Vec<Listener>,
    next_frame: u64,
    frame: Option<FrameId>,
}

impl FrameScheduler for Page {
    fn request_frame(&mut self) -> FrameId {
        self.next_frame += 1;
        let frame = FrameId(self.next_frame);
        self.frame = Some(frame);
        frame
    }

    fn cancel_frame(&mut self, frame: FrameId) {
        if self.frame == Some(frame) {
            self.frame = None;
        }
    }
}

impl ViewportHost for Page {
    fn container_width(&self) -> f64 {
        self.width
    }

    fn container_metrics(&self) -> ScrollMetrics {
        let height = self.document_height - HEADER;
        ScrollMetrics::new(0.0, height, height)
    }

    fn window_metrics(&self) -> ScrollMetrics {
        ScrollMetrics::new(self.scroll_y, self.inner_height, self.document_height)
    }

    fn container_offset(&self) -> f64 {
        HEADER
    }

    fn attach(&mut self, listener: Listener) {
        log::info!("attach {listener:?}");
        self.listeners.push(listener);
    }

    fn detach(&mut self, listener: Listener) {
        log::info!("detach {listener:?}");
        self.listeners.retain(|attached| *attached != listener);
    }
}

/// Deterministic photo-like sizes: landscapes, portraits and squares.
fn batch(start: u32) -> Vec<SizedItem<u32>> {
    let mut seed = u64::from(start).wrapping_mul(6364136223846793005).wrapping_add(1);
    (start..start + BATCH)
        .map(|id| {
            seed = seed
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let (width, height) = match (seed >> 33) % 3 {
                0 => (6000.0, 4000.0),
                1 => (3000.0, 4500.0),
                _ => (3024.0, 3024.0),
            };
            SizedItem::new(id, width, height)
        })
        .collect()
}

#[derive(Debug, Clone, Copy)]
enum Step {
    ScrollTo(f64),
    ScrollToEnd,
    Resize(f64),
    Wait(u64),
}

fn sync_document(view: &mut MasonryView<u32, Page>) {
    let height = HEADER + view.total_height();
    view.host_mut().document_height = height;
}

fn report(view: &MasonryView<u32, Page>, label: &str) {
    let ids: Vec<u32> = view.visible_items().map(|item| item.id).collect();
    let layout = view.layout();
    println!(
        "{label:>22}: rev {:>2} | {} cols x {:.1}px | {:>3} of {} visible ({:?}..{:?}) | height {:.0}",
        view.visible_revision(),
        layout.column_count(),
        layout.column_width(),
        ids.len(),
        layout.len(),
        ids.iter().min(),
        ids.iter().max(),
        view.total_height(),
    );
}

fn main() {
    env_logger::init();

    let page = Page {
        width: 1200.0,
        inner_height: 900.0,
        scroll_y: 0.0,
        document_height: HEADER,
        listeners: Vec::new(),
        next_frame: 0,
        frame: None,
    };
    let mut view = MasonryView::new(page, MasonryConfig::default());

    let end_reached = Rc::new(Cell::new(false));
    let flag = Rc::clone(&end_reached);
    view.set_on_end_reached(move || flag.set(true));

    let mut loaded = 0;
    view.set_items(&batch(loaded));
    loaded += BATCH;
    view.mount();
    sync_document(&mut view);
    report(&view, "mounted");

    let script = [
        Step::ScrollTo(2_500.0),
        Step::ScrollTo(6_000.0),
        Step::ScrollToEnd,
        Step::ScrollTo(3_000.0),
        Step::Resize(1_000.0),
        Step::Resize(820.0),
        Step::Resize(600.0),
        Step::Wait(100),
        Step::Wait(200),
        Step::ScrollToEnd,
    ];

    let mut now_ms = 0;
    for step in script {
        match step {
            Step::ScrollTo(y) => {
                view.host_mut().scroll_y = y;
                view.on_scroll();
            }
            Step::ScrollToEnd => {
                let page = view.host();
                let y = page.document_height - page.inner_height - 50.0;
                view.host_mut().scroll_y = y;
                view.on_scroll();
            }
            Step::Resize(width) => {
                view.host_mut().width = width;
                view.on_resize(now_ms);
            }
            Step::Wait(ms) => {
                now_ms += ms;
                if view.advance(now_ms) {
                    sync_document(&mut view);
                    report(&view, "debounced relayout");
                }
            }
        }

        if end_reached.replace(false) {
            view.append_items(&batch(loaded));
            loaded += BATCH;
            sync_document(&mut view);
            report(&view, "end reached, appended");
        }

        if let Some(frame) = view.host_mut().frame.take()
            && view.on_animation_frame(frame)
        {
            report(&view, &format!("{step:?}"));
        }
    }

    view.unmount();
    assert!(view.host().listeners.is_empty());
    println!("unmounted; pending frame: {}", view.is_frame_pending());
}
