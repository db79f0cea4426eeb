use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::{error, info, trace};

use crate::config::Config;
use crate::dataset::Datasets;
use crate::event::AppEvent;
use crate::game::difficulty::Difficulty;
use crate::game::session::{GameSession, SessionEvent, Status};
use crate::ui::line_input::LineInput;
use crate::ui::theme::Theme;

pub struct App {
    pub config: Config,
    pub theme: Theme,
    /// `None` when the datasets failed to load; the game is then inert.
    pub session: Option<GameSession>,
    pub input: LineInput,
    pub show_achievements: bool,
    pub should_quit: bool,
    last_frame: Instant,
}

impl App {
    pub fn new(config: Config, theme: Theme) -> Self {
        let session = match Datasets::load(
            config.words_path.as_deref(),
            config.achievements_path.as_deref(),
        ) {
            Ok(datasets) => {
                info!(
                    achievements = datasets.achievements.len(),
                    difficulty = %config.difficulty,
                    "datasets loaded"
                );
                Some(GameSession::new(
                    datasets,
                    config.difficulty,
                    config.session_timing(),
                    SmallRng::from_entropy(),
                ))
            }
            Err(err) => {
                error!(error = %err, "failed to load datasets, game is inert");
                None
            }
        };
        Self::with_session(config, theme, session)
    }

    pub fn with_session(config: Config, theme: Theme, session: Option<GameSession>) -> Self {
        let show_achievements = config.show_achievements;
        Self {
            config,
            theme,
            session,
            input: LineInput::default(),
            show_achievements,
            should_quit: false,
            last_frame: Instant::now(),
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.session
            .as_ref()
            .map_or(self.config.difficulty, |s| s.state().difficulty)
    }

    pub fn is_running(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.status() == Status::Running)
    }

    /// Bring the game clock up to `now`, then apply the event. Ticks and
    /// clears that fell due before a keystroke run before it.
    pub fn handle_event(&mut self, event: AppEvent, now: Instant) {
        self.advance_to(now);
        if let AppEvent::Key(key) = event {
            self.handle_key(key);
        }
    }

    fn advance_to(&mut self, now: Instant) {
        let dt = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;
        self.advance(dt);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('r') if ctrl => self.restart(),
            KeyCode::Char('a') if ctrl => self.toggle_achievements(),
            KeyCode::Char('w') if ctrl => self.delete_word(),
            KeyCode::Char('u') if ctrl => self.clear_input(),
            KeyCode::Tab => self.cycle_difficulty(true),
            KeyCode::BackTab => self.cycle_difficulty(false),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Char(ch) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                self.type_char(ch)
            }
            _ => {}
        }
    }

    pub fn advance(&mut self, dt: Duration) {
        if let Some(ref mut session) = self.session {
            session.advance(dt);
        }
        self.sync_from_session();
    }

    pub fn type_char(&mut self, ch: char) {
        if self.input.insert(ch) {
            self.submit_input();
        }
    }

    pub fn backspace(&mut self) {
        if self.input.backspace() {
            self.submit_input();
        }
    }

    pub fn delete_word(&mut self) {
        if self.input.delete_word() {
            self.submit_input();
        }
    }

    pub fn clear_input(&mut self) {
        if self.input.clear() {
            self.submit_input();
        }
    }

    pub fn restart(&mut self) {
        if let Some(ref mut session) = self.session {
            session.restart();
        }
        self.input.clear();
        self.sync_from_session();
    }

    pub fn cycle_difficulty(&mut self, forward: bool) {
        let current = self.difficulty();
        let next = if forward { current.next() } else { current.prev() };
        self.config.difficulty = next;
        if let Some(ref mut session) = self.session {
            session.set_difficulty(next);
        }
        self.sync_from_session();
    }

    pub fn toggle_achievements(&mut self) {
        self.show_achievements = !self.show_achievements;
    }

    fn submit_input(&mut self) {
        if let Some(ref mut session) = self.session {
            session.on_input(self.input.value());
        }
        self.sync_from_session();
    }

    /// Pull state changes out of the session after every operation.
    fn sync_from_session(&mut self) {
        let Some(ref mut session) = self.session else {
            return;
        };
        for event in session.drain_events() {
            match event {
                SessionEvent::Tick { elapsed_secs, wpm } => {
                    trace!(elapsed_secs, wpm, "tick");
                }
                other => trace!(event = ?other, "session event"),
            }
        }
        self.input.sync(&session.state().user_input);
    }
}
