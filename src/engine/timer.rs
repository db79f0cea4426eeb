use std::time::Duration;

use crate::engine::scheduler::{Scheduler, TaskId};
use crate::game::state::GameState;

pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Standard typing convention: five characters make one word.
pub const CHARS_PER_WORD: u64 = 5;

/// `floor(chars / 5 / (secs / 60))`, done in integers so whole results are
/// exact. Zero elapsed time gives 0.
pub fn compute_wpm(total_chars: u64, elapsed_secs: u64) -> u32 {
    if elapsed_secs == 0 {
        return 0;
    }
    let wpm = total_chars.saturating_mul(60) / (CHARS_PER_WORD * elapsed_secs);
    u32::try_from(wpm).unwrap_or(u32::MAX)
}

/// One elapsed second: bump the clock and re-derive wpm.
pub fn on_tick(state: &mut GameState) {
    state.elapsed_secs += 1;
    state.wpm = compute_wpm(state.total_chars_typed, state.elapsed_secs);
}

/// Handle on the recurring tick. At most one tick is ever scheduled.
#[derive(Debug, Default)]
pub struct Timer {
    handle: Option<TaskId>,
}

impl Timer {
    #[cfg(test)]
    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    pub fn start<T>(&mut self, scheduler: &mut Scheduler<T>, tick: T) {
        self.stop(scheduler);
        self.handle = Some(scheduler.schedule(TICK_INTERVAL, tick));
    }

    pub fn stop<T>(&mut self, scheduler: &mut Scheduler<T>) {
        if let Some(id) = self.handle.take() {
            scheduler.cancel(id);
        }
    }

    /// Forget the handle without touching the scheduler, for when the
    /// scheduler has already been cleared.
    pub fn reset(&mut self) {
        self.handle = None;
    }

    /// Accept a fired tick and queue the next one. A tick that is not the live
    /// handle is stale and ignored.
    pub fn on_fired<T>(&mut self, id: TaskId, scheduler: &mut Scheduler<T>, tick: T) -> bool {
        if self.handle != Some(id) {
            return false;
        }
        self.handle = Some(scheduler.schedule(TICK_INTERVAL, tick));
        true
    }
}
