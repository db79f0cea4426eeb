use std::path::PathBuf;

use thiserror::Error;

use crate::game::difficulty::Difficulty;

/// Failures while loading the word bank or the achievement catalog.
///
/// Any of these leaves the game without a session; the app logs the error and
/// keeps running inert.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("bundled dataset {0} is missing")]
    MissingAsset(&'static str),

    #[error("failed to parse {what}: {source}")]
    Parse {
        what: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("word list for {0} difficulty is empty")]
    EmptyWordList(Difficulty),

    #[error("word list for {0} difficulty contains an empty word")]
    EmptyWord(Difficulty),

    #[error("duplicate achievement name: {0}")]
    DuplicateAchievement(String),
}

pub type Result<T> = std::result::Result<T, DatasetError>;
