use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

struct Pending<T> {
    id: TaskId,
    due: Duration,
    task: T,
}

/// One-shot deferred tasks on a manually advanced clock.
///
/// Tasks come back out of `pop_due` in due-time order, ties broken by
/// scheduling order. Nothing fires on its own; the owner drives the clock.
pub struct Scheduler<T> {
    now: Duration,
    next_id: u64,
    pending: Vec<Pending<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            pending: Vec::new(),
        }
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn schedule(&mut self, delay: Duration, task: T) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.pending.push(Pending {
            id,
            due: self.now + delay,
            task,
        });
        id
    }

    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.id != id);
        self.pending.len() != before
    }

    /// Drop every pending task. Ids handed out earlier stay unique.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    #[cfg(test)]
    pub fn is_pending(&self, id: TaskId) -> bool {
        self.pending.iter().any(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Remove and return the earliest task due at or before `until`, moving
    /// the clock to its due time.
    pub fn pop_due(&mut self, until: Duration) -> Option<(TaskId, T)> {
        let idx = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= until)
            .min_by_key(|(_, p)| (p.due, p.id))
            .map(|(i, _)| i)?;

        let Pending { id, due, task } = self.pending.swap_remove(idx);
        self.now = self.now.max(due);
        Some((id, task))
    }

    /// Move the clock forward to `until` once every due task has been popped.
    pub fn settle(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn drain(s: &mut Scheduler<&'static str>, until: Duration) -> Vec<&'static str> {
        let mut out = Vec::new();
        while let Some((_, task)) = s.pop_due(until) {
            out.push(task);
        }
        s.settle(until);
        out
    }

    #[test]
    fn test_tasks_fire_in_due_order() {
        let mut s = Scheduler::new();
        s.schedule(ms(300), "c");
        s.schedule(ms(100), "a");
        s.schedule(ms(200), "b");
        assert_eq!(drain(&mut s, ms(1000)), vec!["a", "b", "c"]);
        assert!(s.is_empty());
        assert_eq!(s.now(), ms(1000));
    }

    #[test]
    fn test_ties_fire_in_schedule_order() {
        let mut s = Scheduler::new();
        s.schedule(ms(100), "first");
        s.schedule(ms(100), "second");
        assert_eq!(drain(&mut s, ms(100)), vec!["first", "second"]);
    }

    #[test]
    fn test_not_due_stays_pending() {
        let mut s = Scheduler::new();
        s.schedule(ms(500), "late");
        assert!(drain(&mut s, ms(499)).is_empty());
        assert_eq!(s.len(), 1);
        assert_eq!(drain(&mut s, ms(500)), vec!["late"]);
    }

    #[test]
    fn test_delay_is_relative_to_clock() {
        let mut s = Scheduler::new();
        s.settle(ms(1000));
        s.schedule(ms(100), "x");
        assert!(drain(&mut s, ms(1050)).is_empty());
        assert_eq!(drain(&mut s, ms(1100)), vec!["x"]);
    }

    #[test]
    fn test_cancel_and_clear() {
        let mut s = Scheduler::new();
        let a = s.schedule(ms(10), "a");
        let b = s.schedule(ms(10), "b");
        assert!(s.cancel(a));
        assert!(!s.cancel(a));
        assert!(!s.is_pending(a));
        assert!(s.is_pending(b));

        s.clear();
        assert!(drain(&mut s, ms(100)).is_empty());

        let c = s.schedule(ms(10), "c");
        assert_ne!(c, a);
        assert_ne!(c, b);
    }

    #[test]
    fn test_clock_never_moves_backwards() {
        let mut s: Scheduler<&str> = Scheduler::new();
        s.settle(ms(500));
        s.settle(ms(100));
        assert_eq!(s.now(), ms(500));
    }
}
