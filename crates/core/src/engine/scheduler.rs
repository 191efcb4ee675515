//! Explicit timer queue for one tab.
//!
//! The scheduler never reads a clock. Callers pass the time an event was
//! produced at (`at_ms`) when scheduling and the current time when
//! polling, so the same sequence of fires comes out regardless of how
//! often the host ticks.

/// A timer that came due.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fired<E> {
    /// When the timer was due, which may be earlier than the poll time.
    pub due_ms: u64,
    pub event: E,
}

#[derive(Debug, Clone)]
struct Timer<E> {
    due_ms: u64,
    seq: u64,
    event: E,
}

#[derive(Debug, Clone)]
pub struct Scheduler<E> {
    timers: Vec<Timer<E>>,
    next_seq: u64,
}

impl<E> Scheduler<E> {
    pub fn new() -> Self {
        Self {
            timers: Vec::new(),
            next_seq: 0,
        }
    }

    /// Queue `event` to fire `after_ms` after `at_ms`.
    pub fn schedule(&mut self, at_ms: u64, after_ms: u64, event: E) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.timers.push(Timer {
            due_ms: at_ms.saturating_add(after_ms),
            seq,
            event,
        });
    }

    /// Remove and return the earliest timer due at or before `now_ms`.
    /// Timers with equal due times fire in scheduling order.
    pub fn poll(&mut self, now_ms: u64) -> Option<Fired<E>> {
        let (pos, _) = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due_ms <= now_ms)
            .min_by_key(|(_, t)| (t.due_ms, t.seq))?;
        let timer = self.timers.swap_remove(pos);
        Some(Fired {
            due_ms: timer.due_ms,
            event: timer.event,
        })
    }

    /// Drop every pending timer. Returns how many were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let dropped = self.timers.len();
        self.timers.clear();
        dropped
    }

    pub fn next_due(&self) -> Option<u64> {
        self.timers.iter().map(|t| t.due_ms).min()
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_in_due_order_then_fifo() {
        let mut s = Scheduler::new();
        s.schedule(0, 30, "c");
        s.schedule(0, 10, "a");
        s.schedule(5, 5, "b");
        assert_eq!(s.next_due(), Some(10));

        let fired: Vec<_> = std::iter::from_fn(|| s.poll(100)).map(|f| f.event).collect();
        assert_eq!(fired, vec!["a", "b", "c"]);
        assert!(s.is_empty());
    }

    #[test]
    fn nothing_fires_early() {
        let mut s = Scheduler::new();
        s.schedule(100, 50, 1);
        assert_eq!(s.poll(149), None);
        assert_eq!(
            s.poll(150),
            Some(Fired {
                due_ms: 150,
                event: 1
            })
        );
    }

    #[test]
    fn cancel_all_drops_pending_timers() {
        let mut s = Scheduler::new();
        s.schedule(0, 10, ());
        s.schedule(0, 20, ());
        assert_eq!(s.len(), 2);
        assert_eq!(s.cancel_all(), 2);
        assert_eq!(s.poll(u64::MAX), None);
        assert_eq!(s.next_due(), None);
    }
}
