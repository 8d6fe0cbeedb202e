// Copyright 2025 the Mosaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame-coalesced scheduling.

/// Handle for a requested animation frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(pub u64);

/// Host facility for requesting and cancelling animation frame callbacks.
///
/// A requested frame is later delivered back to its owner (for example
/// [`MasonryView::on_animation_frame`](crate::MasonryView::on_animation_frame))
/// unless it was cancelled first.
pub trait FrameScheduler {
    /// Requests a callback on the next display frame.
    fn request_frame(&mut self) -> FrameId;

    /// Cancels a frame that has not fired yet.
    fn cancel_frame(&mut self, frame: FrameId);
}

/// Coalesces bursts of events into at most one pending frame.
///
/// Scheduling while a frame is pending cancels the pending one and requests a
/// fresh frame, so only the latest request can fire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameThrottle {
    pending: Option<FrameId>,
}

impl FrameThrottle {
    /// Creates a throttle with nothing pending.
    #[must_use]
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// Cancels any pending frame on `scheduler` and requests a new one.
    pub fn schedule<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) -> FrameId {
        if let Some(previous) = self.pending.take() {
            scheduler.cancel_frame(previous);
        }
        let frame = scheduler.request_frame();
        self.pending = Some(frame);
        frame
    }

    /// Consumes `frame` if it is the pending one.
    ///
    /// Returns `false` for stale or unknown frames, which callers should ignore.
    pub fn fire(&mut self, frame: FrameId) -> bool {
        if self.pending == Some(frame) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Cancels the pending frame, if any.
    pub fn cancel<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if let Some(frame) = self.pending.take() {
            scheduler.cancel_frame(frame);
        }
    }

    /// The frame currently waiting to fire.
    #[must_use]
    pub const fn pending(&self) -> Option<FrameId> {
        self.pending
    }

    /// Returns `true` if a frame is waiting to fire.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{FrameId, FrameScheduler, FrameThrottle};

    #[derive(Default)]
    struct Frames {
        next: u64,
        live: Vec<FrameId>,
        cancelled: Vec<FrameId>,
    }

    impl FrameScheduler for Frames {
        fn request_frame(&mut self) -> FrameId {
            self.next += 1;
            let frame = FrameId(self.next);
            self.live.push(frame);
            frame
        }

        fn cancel_frame(&mut self, frame: FrameId) {
            self.live.retain(|live| *live != frame);
            self.cancelled.push(frame);
        }
    }

    #[test]
    fn bursts_leave_a_single_live_frame() {
        let mut frames = Frames::default();
        let mut throttle = FrameThrottle::new();
        for _ in 0..5 {
            throttle.schedule(&mut frames);
        }
        assert_eq!(frames.live, [FrameId(5)]);
        assert_eq!(frames.cancelled.len(), 4);
        assert_eq!(throttle.pending(), Some(FrameId(5)));
    }

    #[test]
    fn only_the_pending_frame_fires() {
        let mut frames = Frames::default();
        let mut throttle = FrameThrottle::new();
        let first = throttle.schedule(&mut frames);
        let second = throttle.schedule(&mut frames);
        assert!(!throttle.fire(first));
        assert!(throttle.fire(second));
        // Already consumed.
        assert!(!throttle.fire(second));
        assert!(!throttle.is_pending());
    }

    #[test]
    fn cancel_releases_the_pending_frame() {
        let mut frames = Frames::default();
        let mut throttle = FrameThrottle::new();
        let frame = throttle.schedule(&mut frames);
        throttle.cancel(&mut frames);
        assert!(frames.live.is_empty());
        assert_eq!(frames.cancelled, [frame]);
        assert!(!throttle.fire(frame));
    }
}
