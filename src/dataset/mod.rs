pub mod achievements;
pub mod word_bank;

use std::fs;
use std::path::Path;

use rust_embed::Embed;

use crate::error::{DatasetError, Result};
use achievements::AchievementCatalog;
use word_bank::WordBank;

const WORDS_ASSET: &str = "words.json";
const ACHIEVEMENTS_ASSET: &str = "achievements.json";

#[derive(Embed)]
#[folder = "assets/data/"]
struct DataAssets;

/// The two read-only datasets a game session is built from.
#[derive(Clone, Debug)]
pub struct Datasets {
    pub words: WordBank,
    pub achievements: AchievementCatalog,
}

impl Datasets {
    /// Load both datasets, reading from disk where a path is given and from
    /// the bundled assets otherwise.
    pub fn load(words_path: Option<&Path>, achievements_path: Option<&Path>) -> Result<Self> {
        let words = WordBank::from_json(&read_dataset(words_path, WORDS_ASSET)?)?;
        let achievements =
            AchievementCatalog::from_json(&read_dataset(achievements_path, ACHIEVEMENTS_ASSET)?)?;
        Ok(Self {
            words,
            achievements,
        })
    }

    pub fn bundled() -> Result<Self> {
        Self::load(None, None)
    }
}

fn read_dataset(path: Option<&Path>, asset: &'static str) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            let file = DataAssets::get(asset).ok_or(DatasetError::MissingAsset(asset))?;
            Ok(String::from_utf8_lossy(file.data.as_ref()).into_owned())
        }
    }
}
