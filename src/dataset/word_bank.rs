use rand::Rng;
use rand::seq::SliceRandom;
use serde::Deserialize;

use crate::error::{DatasetError, Result};
use crate::game::difficulty::Difficulty;

#[derive(Debug, Deserialize)]
struct RawWordBank {
    easy: Vec<String>,
    medium: Vec<String>,
    hard: Vec<String>,
}

/// Word lists keyed by difficulty. Every list is non-empty and holds no
/// empty words, so random selection always yields a word.
#[derive(Clone, Debug)]
pub struct WordBank {
    easy: Vec<String>,
    medium: Vec<String>,
    hard: Vec<String>,
}

impl WordBank {
    pub fn new(easy: Vec<String>, medium: Vec<String>, hard: Vec<String>) -> Result<Self> {
        let bank = Self { easy, medium, hard };
        for difficulty in Difficulty::ALL {
            let words = bank.words(difficulty);
            if words.is_empty() {
                return Err(DatasetError::EmptyWordList(difficulty));
            }
            if words.iter().any(|w| w.is_empty()) {
                return Err(DatasetError::EmptyWord(difficulty));
            }
        }
        Ok(bank)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawWordBank = serde_json::from_str(json).map_err(|source| DatasetError::Parse {
            what: "word bank".to_string(),
            source,
        })?;
        Self::new(raw.easy, raw.medium, raw.hard)
    }

    pub fn words(&self, difficulty: Difficulty) -> &[String] {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }

    /// Uniform pick from the difficulty's list. Repeats of the previous word
    /// are allowed.
    pub fn random_word<R: Rng + ?Sized>(&self, difficulty: Difficulty, rng: &mut R) -> String {
        self.words(difficulty)
            .choose(rng)
            .cloned()
            .unwrap_or_default()
    }

    pub fn contains(&self, difficulty: Difficulty, word: &str) -> bool {
        self.words(difficulty).iter().any(|w| w == word)
    }
}
