use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::game::difficulty::Difficulty;
use crate::game::session::SessionTiming;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default)]
    pub words_path: Option<PathBuf>,
    #[serde(default)]
    pub achievements_path: Option<PathBuf>,
    #[serde(default = "default_achievement_check_delay_ms")]
    pub achievement_check_delay_ms: u64,
    #[serde(default = "default_notification_duration_ms")]
    pub notification_duration_ms: u64,
    #[serde(default = "default_frame_rate_ms")]
    pub frame_rate_ms: u64,
    #[serde(default)]
    pub show_achievements: bool,
}

fn default_theme() -> String {
    "codetypr-dark".to_string()
}
fn default_achievement_check_delay_ms() -> u64 {
    100
}
fn default_notification_duration_ms() -> u64 {
    3000
}
fn default_frame_rate_ms() -> u64 {
    50
}

impl Default for Config {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            theme: default_theme(),
            words_path: None,
            achievements_path: None,
            achievement_check_delay_ms: default_achievement_check_delay_ms(),
            notification_duration_ms: default_notification_duration_ms(),
            frame_rate_ms: default_frame_rate_ms(),
            show_achievements: false,
        }
    }
}

impl Config {
    /// Load a config file, falling back to defaults when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            let config: Config = toml::from_str(&content)
                .with_context(|| format!("parsing config {}", path.display()))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("codetypr")
            .join("config.toml")
    }

    pub fn session_timing(&self) -> SessionTiming {
        SessionTiming {
            achievement_check_delay: Duration::from_millis(self.achievement_check_delay_ms),
            notification_duration: Duration::from_millis(self.notification_duration_ms),
        }
    }

    /// Redraw cadence for the terminal loop. Clamped so a zero in the file
    /// cannot spin the event thread.
    pub fn frame_rate(&self) -> Duration {
        Duration::from_millis(self.frame_rate_ms.max(10))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_config_serde_defaults_from_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.difficulty, Difficulty::Medium);
        assert_eq!(config.achievement_check_delay_ms, 100);
        assert_eq!(config.notification_duration_ms, 3000);
        assert!(config.words_path.is_none());
    }

    #[test]
    fn test_config_partial_file_keeps_other_defaults() {
        let toml_str = r#"
difficulty = "hard"
words_path = "/tmp/words.json"
notification_duration_ms = 1500
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.words_path, Some(PathBuf::from("/tmp/words.json")));
        assert_eq!(config.notification_duration_ms, 1500);
        assert_eq!(config.theme, "codetypr-dark");
        assert_eq!(config.achievement_check_delay_ms, 100);
    }

    #[test]
    fn test_unknown_difficulty_is_error() {
        assert!(toml::from_str::<Config>(r#"difficulty = "nightmare""#).is_err());
    }

    #[test]
    fn test_load_from_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "difficulty = \"easy\"\nshow_achievements = true\n").unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.difficulty, Difficulty::Easy);
        assert!(config.show_achievements);
    }

    #[test]
    fn test_session_timing_from_config() {
        let config = Config {
            achievement_check_delay_ms: 250,
            notification_duration_ms: 1000,
            ..Config::default()
        };
        let timing = config.session_timing();
        assert_eq!(timing.achievement_check_delay, Duration::from_millis(250));
        assert_eq!(timing.notification_duration, Duration::from_secs(1));
    }

    #[test]
    fn test_frame_rate_clamped() {
        let config = Config {
            frame_rate_ms: 0,
            ..Config::default()
        };
        assert_eq!(config.frame_rate(), Duration::from_millis(10));
    }
}
