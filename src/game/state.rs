use crate::engine::achievements::Progress;
use crate::game::difficulty::Difficulty;

/// Everything the presentation layer renders about a game in progress.
///
/// Field groups have one writer each: the input evaluator owns score, word,
/// input and characters typed; the timer owns elapsed time and wpm; the
/// achievement evaluator owns the unlocked list and the notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub difficulty: Difficulty,
    pub current_word: String,
    pub user_input: String,
    pub score: u32,
    pub elapsed_secs: u64,
    pub wpm: u32,
    pub total_chars_typed: u64,
    pub running: bool,
    /// Unlock order, no duplicates.
    pub unlocked_achievements: Vec<String>,
    pub notification: Option<String>,
}

impl GameState {
    pub fn new(difficulty: Difficulty, current_word: String) -> Self {
        Self {
            difficulty,
            current_word,
            user_input: String::new(),
            score: 0,
            elapsed_secs: 0,
            wpm: 0,
            total_chars_typed: 0,
            running: false,
            unlocked_achievements: Vec::new(),
            notification: None,
        }
    }

    pub fn progress(&self) -> Progress {
        Progress {
            score: self.score,
            elapsed_secs: self.elapsed_secs,
            wpm: self.wpm,
        }
    }

    pub fn is_unlocked(&self, name: &str) -> bool {
        self.unlocked_achievements.iter().any(|n| n == name)
    }
}
