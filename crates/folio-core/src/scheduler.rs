//! Virtual-clock timer queue.
//!
//! Stands in for the page timer facility: one-shot and repeating timers on a
//! single cooperative thread. Time only moves when the host drains the queue
//! with [`Scheduler::pop_due`] or calls [`Scheduler::advance_to`], so tests
//! can replay minutes of animation instantly and the TUI can map wall-clock
//! time onto the same queue.
//!
//! # Example
//! ```
//! use std::time::Duration;
//! use folio_core::scheduler::Scheduler;
//!
//! let mut timers = Scheduler::new();
//! let tick = timers.every(Duration::from_millis(100), "tick");
//! timers.once(Duration::from_millis(150), "once");
//!
//! let mut fired = Vec::new();
//! while let Some((_, task)) = timers.pop_due(Duration::from_millis(200)) {
//!     fired.push(task);
//! }
//! assert_eq!(fired, ["tick", "once", "tick"]);
//! assert!(timers.cancel(tick));
//! ```

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::time::Duration;

use tracing::trace;

/// Smallest period a repeating timer may have.
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Handle to a scheduled timer, used to cancel it.
///
/// A repeating timer keeps the same handle across all its firings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

impl TaskHandle {
    /// Raw id, unique per scheduler.
    #[must_use]
    pub fn id(self) -> u64 {
        self.0
    }
}

struct Entry<T> {
    task: T,
    deadline: Duration,
    period: Option<Duration>,
}

/// Deterministic timer queue over a virtual clock.
///
/// Due tasks are yielded in deadline order; tasks with equal deadlines come
/// out in the order they were armed.
pub struct Scheduler<T> {
    now: Duration,
    next_id: u64,
    next_seq: u64,
    queue: BinaryHeap<Reverse<(Duration, u64, u64)>>,
    entries: HashMap<u64, Entry<T>>,
}

impl<T: Clone> Scheduler<T> {
    /// Create an empty scheduler with its clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            next_seq: 0,
            queue: BinaryHeap::new(),
            entries: HashMap::new(),
        }
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Arm a one-shot timer firing `delay` after now.
    pub fn once(&mut self, delay: Duration, task: T) -> TaskHandle {
        self.arm(delay, None, task)
    }

    /// Arm a repeating timer firing every `period`, first after one period.
    ///
    /// Periods shorter than one millisecond are raised to one millisecond so
    /// a drain always terminates.
    pub fn every(&mut self, period: Duration, task: T) -> TaskHandle {
        let period = period.max(MIN_PERIOD);
        self.arm(period, Some(period), task)
    }

    fn arm(&mut self, delay: Duration, period: Option<Duration>, task: T) -> TaskHandle {
        let id = self.next_id;
        self.next_id += 1;
        let deadline = self.now + delay;
        self.push(deadline, id);
        self.entries.insert(
            id,
            Entry {
                task,
                deadline,
                period,
            },
        );
        trace!(id, ?deadline, "timer armed");
        TaskHandle(id)
    }

    fn push(&mut self, deadline: Duration, id: u64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Reverse((deadline, seq, id)));
    }

    /// Cancel a timer. Returns `false` if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let removed = self.entries.remove(&handle.0).is_some();
        if removed {
            trace!(id = handle.0, "timer cancelled");
        }
        removed
    }

    /// Cancel every pending timer.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.queue.clear();
    }

    /// Whether the timer is still armed.
    #[must_use]
    pub fn is_pending(&self, handle: TaskHandle) -> bool {
        self.entries.contains_key(&handle.0)
    }

    /// Number of armed timers.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    /// Deadline of the earliest armed timer.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.entries.values().map(|e| e.deadline).min()
    }

    /// Pop the next task due at or before `until`, moving the clock to its
    /// deadline. Repeating timers are re-armed one period later.
    pub fn pop_due(&mut self, until: Duration) -> Option<(TaskHandle, T)> {
        loop {
            let Reverse((deadline, _, id)) = *self.queue.peek()?;
            if deadline > until {
                return None;
            }
            self.queue.pop();

            // Skip heap slots left behind by cancelled or re-armed timers.
            let Some(entry) = self.entries.get_mut(&id) else {
                continue;
            };
            if entry.deadline != deadline {
                continue;
            }

            self.now = self.now.max(deadline);
            let task = match entry.period {
                Some(period) => {
                    entry.deadline = deadline + period;
                    let task = entry.task.clone();
                    self.push(deadline + period, id);
                    task
                }
                None => self.entries.remove(&id).map(|e| e.task)?,
            };
            return Some((TaskHandle(id), task));
        }
    }

    /// Move the clock forward to `until`. The clock never moves backwards.
    ///
    /// Due tasks are not run; drain them with [`Scheduler::pop_due`] first.
    pub fn advance_to(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }
}

impl<T: Clone> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn drain(timers: &mut Scheduler<&'static str>, until: Duration) -> Vec<(u128, &'static str)> {
        let mut out = Vec::new();
        while let Some((_, task)) = timers.pop_due(until) {
            out.push((timers.now().as_millis(), task));
        }
        timers.advance_to(until);
        out
    }

    #[test]
    fn one_shot_fires_once() {
        let mut timers = Scheduler::new();
        timers.once(ms(50), "a");
        assert_eq!(drain(&mut timers, ms(49)), vec![]);
        assert_eq!(drain(&mut timers, ms(50)), vec![(50, "a")]);
        assert_eq!(drain(&mut timers, ms(1000)), vec![]);
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn deadline_order_then_fifo() {
        let mut timers = Scheduler::new();
        timers.once(ms(30), "late");
        timers.once(ms(10), "first");
        timers.once(ms(10), "second");
        let fired: Vec<_> = drain(&mut timers, ms(100))
            .into_iter()
            .map(|(_, t)| t)
            .collect();
        assert_eq!(fired, ["first", "second", "late"]);
    }

    #[test]
    fn repeating_timer_fires_each_period() {
        let mut timers = Scheduler::new();
        timers.every(ms(6000), "advance");
        let fired = drain(&mut timers, ms(18_000));
        assert_eq!(fired, vec![(6000, "advance"), (12_000, "advance"), (18_000, "advance")]);
        assert_eq!(timers.pending(), 1);
        assert_eq!(timers.next_deadline(), Some(ms(24_000)));
    }

    #[test]
    fn cancel_removes_pending_timer() {
        let mut timers = Scheduler::new();
        let handle = timers.once(ms(10), "x");
        assert!(timers.is_pending(handle));
        assert!(timers.cancel(handle));
        assert!(!timers.cancel(handle));
        assert!(drain(&mut timers, ms(100)).is_empty());
    }

    #[test]
    fn cancel_repeating_between_firings() {
        let mut timers = Scheduler::new();
        let handle = timers.every(ms(10), "tick");
        assert_eq!(drain(&mut timers, ms(25)).len(), 2);
        assert!(timers.cancel(handle));
        assert!(drain(&mut timers, ms(100)).is_empty());
    }

    #[test]
    fn zero_period_is_clamped() {
        let mut timers = Scheduler::new();
        timers.every(Duration::ZERO, "spin");
        assert_eq!(drain(&mut timers, ms(3)).len(), 3);
    }

    #[test]
    fn tasks_armed_while_draining_run_in_same_drain() {
        let mut timers = Scheduler::new();
        timers.once(ms(10), "outer");
        let mut fired = Vec::new();
        while let Some((_, task)) = timers.pop_due(ms(100)) {
            fired.push((timers.now().as_millis(), task));
            if task == "outer" {
                timers.once(ms(5), "inner");
            }
        }
        assert_eq!(fired, vec![(10, "outer"), (15, "inner")]);
    }

    #[test]
    fn clock_never_moves_backwards() {
        let mut timers: Scheduler<()> = Scheduler::new();
        timers.advance_to(ms(500));
        timers.advance_to(ms(100));
        assert_eq!(timers.now(), ms(500));
    }

    #[test]
    fn clear_drops_everything() {
        let mut timers = Scheduler::new();
        timers.once(ms(1), "a");
        timers.every(ms(1), "b");
        timers.clear();
        assert_eq!(timers.pending(), 0);
        assert!(timers.next_deadline().is_none());
        assert!(drain(&mut timers, ms(10)).is_empty());
    }
}
