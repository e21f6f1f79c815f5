//! Deadline scheduler for timed UI effects.
//!
//! Banner expiry, the delayed post-submit reset and shake clearing are all
//! fixed-delay timers. Entries carry explicit deadlines and cancellation
//! tickets, and every call takes the current `Instant` from the caller, so
//! tests drive time directly instead of sleeping. The event loop sleeps
//! until [`next_deadline`](Scheduler::next_deadline) and then drains
//! [`pop_due`](Scheduler::pop_due).

use std::time::{Duration, Instant};

use log::debug;

/// Ticket for a scheduled effect, usable to cancel it before it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

#[derive(Debug)]
struct Entry<E> {
    id: TaskId,
    deadline: Instant,
    effect: E,
}

/// Pending timed effects, ordered by deadline on delivery.
#[derive(Debug)]
pub struct Scheduler<E> {
    entries: Vec<Entry<E>>,
    next_id: u64,
}

impl<E> Scheduler<E> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Schedule an effect at an absolute deadline.
    pub fn schedule_at(&mut self, deadline: Instant, effect: E) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            deadline,
            effect,
        });
        debug!("[schedule] task {:?}, {} pending", id, self.entries.len());
        id
    }

    /// Schedule an effect `delay` after `now`.
    pub fn schedule_after(&mut self, now: Instant, delay: Duration, effect: E) -> TaskId {
        self.schedule_at(now + delay, effect)
    }

    /// Drop a pending effect. Returns false if it already fired or was
    /// never scheduled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        before != self.entries.len()
    }

    /// Earliest pending deadline, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.iter().map(|e| e.deadline).min()
    }

    /// Remove and return every effect due at `now`, earliest first. Effects
    /// sharing a deadline keep their scheduling order.
    pub fn pop_due(&mut self, now: Instant) -> Vec<E> {
        let mut due = Vec::new();
        let mut pending = Vec::with_capacity(self.entries.len());
        for entry in self.entries.drain(..) {
            if entry.deadline <= now {
                due.push(entry);
            } else {
                pending.push(entry);
            }
        }
        self.entries = pending;

        due.sort_by_key(|e| e.deadline);
        due.into_iter().map(|e| e.effect).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}
