// Copyright 2025 the Mosaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trailing-edge debouncing driven by host time.

/// Coalesces rapid calls and yields the last value after a quiet period.
///
/// Time is supplied by the host as milliseconds on any monotonic clock. Each
/// [`call`](Self::call) replaces the pending value and restarts the quiet
/// period; [`poll`](Self::poll) hands the value out once `delay_ms` has passed
/// since the last call.
///
/// ```
/// use mosaic_viewport::Debouncer;
///
/// let mut query = Debouncer::new(300);
/// query.call("ca", 0);
/// query.call("cat", 120);
/// assert_eq!(query.poll(400), None);
/// assert_eq!(query.poll(420), Some("cat"));
/// assert_eq!(query.poll(900), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Debouncer<T> {
    delay_ms: u64,
    pending: Option<(u64, T)>,
}

impl<T> Debouncer<T> {
    /// Creates a debouncer with the given quiet period.
    #[must_use]
    pub const fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    /// Quiet period in milliseconds.
    #[must_use]
    pub const fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Records a call at `now_ms`, replacing any pending value.
    pub fn call(&mut self, value: T, now_ms: u64) {
        self.pending = Some((now_ms.saturating_add(self.delay_ms), value));
    }

    /// Takes the pending value if its quiet period has elapsed at `now_ms`.
    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        let deadline = self.deadline()?;
        if now_ms < deadline {
            return None;
        }
        self.pending.take().map(|(_, value)| value)
    }

    /// Drops the pending value without delivering it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(_, value)| value)
    }

    /// Time at which the pending value becomes available.
    #[must_use]
    pub fn deadline(&self) -> Option<u64> {
        self.pending.as_ref().map(|(deadline, _)| *deadline)
    }

    /// Returns `true` if a value is waiting for its quiet period.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::Debouncer;

    #[test]
    fn only_the_last_call_in_a_burst_is_delivered() {
        let mut resize = Debouncer::new(250);
        resize.call(800, 0);
        resize.call(760, 100);
        resize.call(720, 200);
        assert_eq!(resize.deadline(), Some(450));
        assert_eq!(resize.poll(449), None);
        assert_eq!(resize.poll(450), Some(720));
        assert!(!resize.is_pending());
    }

    #[test]
    fn cancel_discards_the_pending_value() {
        let mut resize = Debouncer::new(250);
        resize.call((), 10);
        assert_eq!(resize.cancel(), Some(()));
        assert_eq!(resize.poll(10_000), None);
        assert_eq!(resize.deadline(), None);
    }

    #[test]
    fn zero_delay_delivers_on_the_next_poll() {
        let mut debouncer = Debouncer::new(0);
        debouncer.call('x', 5);
        assert_eq!(debouncer.poll(5), Some('x'));
    }
}
