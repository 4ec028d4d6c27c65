// Copyright 2025 the Kinetic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scheduled continuations with identity tokens.
//!
//! Press feedback suspends in two places: the touch disambiguation delay and the
//! minimum press duration. Rather than holding futures or callbacks, each suspension is
//! an entry in a [`TimerQueue`] carrying a payload. The host's loop asks for the
//! [`next_deadline`](TimerQueue::next_deadline) and drains due entries with
//! [`pop_due`](TimerQueue::pop_due); the owner then re-validates the payload against
//! its current state, so a continuation whose gesture has been superseded is a no-op.
//!
//! ```
//! use kinetic_ripple::TimerQueue;
//!
//! let mut timers = TimerQueue::new();
//! let hold = timers.schedule(150, "hold");
//! timers.schedule(100, "fade");
//!
//! assert_eq!(timers.next_deadline(), Some(100));
//! assert!(timers.pop_due(99).is_none());
//! assert_eq!(timers.pop_due(500).map(|t| t.payload), Some("fade"));
//!
//! // Canceled entries never fire.
//! assert!(timers.cancel(hold));
//! assert!(timers.pop_due(500).is_none());
//! ```

use smallvec::SmallVec;

/// Identity of one scheduled entry. Tokens are never reused within a queue.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerToken(u64);

/// A due entry handed back by [`TimerQueue::pop_due`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fired<T> {
    /// Token the entry was scheduled under.
    pub token: TimerToken,
    /// When the entry was due (ms). Continuations should use this, not the drain time.
    pub deadline: u64,
    /// The scheduled payload.
    pub payload: T,
}

/// A small deadline-ordered queue of payloads.
#[derive(Clone, Debug)]
pub struct TimerQueue<T> {
    next_token: u64,
    entries: SmallVec<[Fired<T>; 2]>,
}

impl<T> TimerQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            next_token: 0,
            entries: SmallVec::new(),
        }
    }

    /// Schedule `payload` to become due at `deadline` (ms).
    pub fn schedule(&mut self, deadline: u64, payload: T) -> TimerToken {
        let token = TimerToken(self.next_token);
        self.next_token += 1;
        self.entries.push(Fired {
            token,
            deadline,
            payload,
        });
        token
    }

    /// Remove a pending entry. Returns `false` if it already fired or was canceled.
    pub fn cancel(&mut self, token: TimerToken) -> bool {
        match self.entries.iter().position(|e| e.token == token) {
            Some(i) => {
                self.entries.remove(i);
                true
            }
            None => false,
        }
    }

    /// `true` if `token` is still pending.
    pub fn is_pending(&self, token: TimerToken) -> bool {
        self.entries.iter().any(|e| e.token == token)
    }

    /// Earliest pending deadline, if any.
    pub fn next_deadline(&self) -> Option<u64> {
        self.entries.iter().map(|e| e.deadline).min()
    }

    /// Remove and return the earliest entry due at or before `now`.
    ///
    /// Entries with equal deadlines come out in scheduling order.
    pub fn pop_due(&mut self, now: u64) -> Option<Fired<T>> {
        let (i, _) = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.deadline <= now)
            .min_by_key(|(_, e)| (e.deadline, e.token))?;
        Some(self.entries.remove(i))
    }

    /// Number of pending entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every pending entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_deadlines_fire_in_schedule_order() {
        let mut q = TimerQueue::new();
        q.schedule(10, 'a');
        q.schedule(10, 'b');
        q.schedule(5, 'c');
        let order: SmallVec<[char; 3]> =
            core::iter::from_fn(|| q.pop_due(10).map(|f| f.payload)).collect();
        assert_eq!(order.as_slice(), &['c', 'a', 'b']);
        assert!(q.is_empty());
    }

    #[test]
    fn tokens_are_not_reused_after_firing() {
        let mut q = TimerQueue::new();
        let first = q.schedule(1, ());
        assert!(q.pop_due(1).is_some());
        let second = q.schedule(1, ());
        assert_ne!(first, second);
        assert!(!q.is_pending(first));
        assert!(q.is_pending(second));
    }

    #[test]
    fn cancel_twice_reports_false() {
        let mut q = TimerQueue::new();
        let t = q.schedule(1, ());
        assert!(q.cancel(t));
        assert!(!q.cancel(t));
        assert_eq!(q.next_deadline(), None);
    }

    #[test]
    fn fired_carries_deadline_not_drain_time() {
        let mut q = TimerQueue::new();
        q.schedule(150, ());
        let fired = q.pop_due(400).unwrap();
        assert_eq!(fired.deadline, 150);
    }
}
