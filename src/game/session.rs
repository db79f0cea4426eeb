use std::time::Duration;

use rand::rngs::SmallRng;
use tracing::{debug, info};

use crate::dataset::Datasets;
use crate::engine::achievements;
use crate::engine::scheduler::{Scheduler, TaskId};
use crate::engine::timer::{self, Timer};
use crate::game::difficulty::Difficulty;
use crate::game::input::{self, InputOutcome, WordProgress};
use crate::game::state::GameState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Idle,
    Running,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionTiming {
    pub achievement_check_delay: Duration,
    pub notification_duration: Duration,
}

impl Default for SessionTiming {
    fn default() -> Self {
        Self {
            achievement_check_delay: Duration::from_millis(100),
            notification_duration: Duration::from_secs(3),
        }
    }
}

/// State changes reported to the presentation layer, drained after each
/// operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    Started,
    WordCompleted { word: String, score: u32 },
    Tick { elapsed_secs: u64, wpm: u32 },
    AchievementUnlocked { name: String },
    NotificationCleared { name: String },
    DifficultyChanged { difficulty: Difficulty },
    Restarted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Task {
    Tick,
    CheckAchievements,
    ClearNotification { seq: u64 },
}

pub struct GameSession {
    datasets: Datasets,
    state: GameState,
    rng: SmallRng,
    scheduler: Scheduler<Task>,
    timer: Timer,
    timing: SessionTiming,
    notification_seq: u64,
    events: Vec<SessionEvent>,
}

impl GameSession {
    pub fn new(
        datasets: Datasets,
        difficulty: Difficulty,
        timing: SessionTiming,
        mut rng: SmallRng,
    ) -> Self {
        let word = datasets.words.random_word(difficulty, &mut rng);
        Self {
            datasets,
            state: GameState::new(difficulty, word),
            rng,
            scheduler: Scheduler::new(),
            timer: Timer::default(),
            timing,
            notification_seq: 0,
            events: Vec::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn datasets(&self) -> &Datasets {
        &self.datasets
    }

    pub fn status(&self) -> Status {
        if self.state.running {
            Status::Running
        } else {
            Status::Idle
        }
    }

    pub fn word_progress(&self) -> WordProgress {
        input::word_progress(&self.state.current_word, &self.state.user_input)
    }

    /// Number of deferred tasks still queued (tick, checks, clears).
    pub fn pending_tasks(&self) -> usize {
        self.scheduler.len()
    }

    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Handle a change of the typed text.
    pub fn on_input(&mut self, value: &str) {
        if !self.state.running {
            self.start();
        }

        match input::apply_input(&mut self.state, value) {
            InputOutcome::Partial => {}
            InputOutcome::Completed { word } => {
                self.state.current_word = self
                    .datasets
                    .words
                    .random_word(self.state.difficulty, &mut self.rng);
                debug!(
                    word = %word,
                    score = self.state.score,
                    next = %self.state.current_word,
                    "word completed"
                );
                self.events.push(SessionEvent::WordCompleted {
                    word,
                    score: self.state.score,
                });
                self.scheduler
                    .schedule(self.timing.achievement_check_delay, Task::CheckAchievements);
            }
        }
    }

    /// Back to idle with a fresh word. Every pending tick, check and clear is
    /// dropped.
    pub fn restart(&mut self) {
        self.scheduler.clear();
        self.timer.reset();
        let difficulty = self.state.difficulty;
        let word = self.datasets.words.random_word(difficulty, &mut self.rng);
        self.state = GameState::new(difficulty, word);
        info!(difficulty = %difficulty, "session restarted");
        self.events.push(SessionEvent::Restarted);
    }

    /// While idle the current word is re-picked; while running only later
    /// words come from the new list.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.state.difficulty = difficulty;
        if !self.state.running {
            self.state.current_word = self.datasets.words.random_word(difficulty, &mut self.rng);
        }
        info!(difficulty = %difficulty, running = self.state.running, "difficulty changed");
        self.events.push(SessionEvent::DifficultyChanged { difficulty });
    }

    /// Move the session clock forward, running whatever falls due in order.
    pub fn advance(&mut self, dt: Duration) {
        let until = self.scheduler.now() + dt;
        while let Some((id, task)) = self.scheduler.pop_due(until) {
            self.run_task(id, task);
        }
        self.scheduler.settle(until);
    }

    fn start(&mut self) {
        self.state.running = true;
        self.timer.start(&mut self.scheduler, Task::Tick);
        info!(difficulty = %self.state.difficulty, "session started");
        self.events.push(SessionEvent::Started);
    }

    fn run_task(&mut self, id: TaskId, task: Task) {
        match task {
            Task::Tick => {
                if self.timer.on_fired(id, &mut self.scheduler, Task::Tick) {
                    timer::on_tick(&mut self.state);
                    self.events.push(SessionEvent::Tick {
                        elapsed_secs: self.state.elapsed_secs,
                        wpm: self.state.wpm,
                    });
                }
            }
            Task::CheckAchievements => self.check_achievements(),
            Task::ClearNotification { seq } => {
                if seq == self.notification_seq {
                    if let Some(name) = self.state.notification.take() {
                        self.events.push(SessionEvent::NotificationCleared { name });
                    }
                }
            }
        }
    }

    fn check_achievements(&mut self) {
        let fresh = achievements::check_achievements(
            self.datasets.achievements.entries(),
            &self.state.unlocked_achievements,
            &self.state.progress(),
        );
        for name in fresh {
            self.state.unlocked_achievements.push(name.clone());
            self.notify(name);
        }
    }

    fn notify(&mut self, name: String) {
        self.notification_seq += 1;
        self.scheduler.schedule(
            self.timing.notification_duration,
            Task::ClearNotification {
                seq: self.notification_seq,
            },
        );
        info!(achievement = %name, "achievement unlocked");
        self.state.notification = Some(name.clone());
        self.events.push(SessionEvent::AchievementUnlocked { name });
    }
}
