use std::fmt;

use serde::Deserialize;

use crate::dataset::achievements::AchievementDef;

/// The quantity an achievement threshold is measured against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Metric {
    Score,
    Timer,
    Wpm,
}

impl Metric {
    fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "score" => Some(Metric::Score),
            "timer" => Some(Metric::Timer),
            "wpm" => Some(Metric::Wpm),
            _ => None,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Metric::Score => "score",
            Metric::Timer => "timer",
            Metric::Wpm => "wpm",
        }
    }
}

/// Parsed form of an achievement's condition string.
///
/// Only `<metric> >= <N>` is understood. Anything else is kept verbatim as
/// `Unrecognized` and never holds.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Condition {
    AtLeast { metric: Metric, min: u64 },
    Unrecognized(String),
}

impl Condition {
    pub fn parse(text: &str) -> Self {
        let unrecognized = || Condition::Unrecognized(text.to_string());

        let Some((lhs, rhs)) = text.split_once(">=") else {
            return unrecognized();
        };
        let Some(metric) = Metric::from_keyword(lhs.trim()) else {
            return unrecognized();
        };

        // Leading digits only, so "10 words" still reads as 10.
        let rhs = rhs.trim_start();
        let end = rhs
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rhs.len());
        match rhs[..end].parse::<u64>() {
            Ok(min) => Condition::AtLeast { metric, min },
            Err(_) => unrecognized(),
        }
    }

    pub fn is_met(&self, progress: &Progress) -> bool {
        match *self {
            Condition::AtLeast { metric, min } => progress.value(metric) >= min,
            Condition::Unrecognized(_) => false,
        }
    }
}

impl From<String> for Condition {
    fn from(text: String) -> Self {
        Condition::parse(&text)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::AtLeast { metric, min } => write!(f, "{} >= {min}", metric.keyword()),
            Condition::Unrecognized(text) => f.write_str(text),
        }
    }
}

/// Snapshot of the numbers achievements are judged on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Progress {
    pub score: u32,
    pub elapsed_secs: u64,
    pub wpm: u32,
}

impl Progress {
    fn value(&self, metric: Metric) -> u64 {
        match metric {
            Metric::Score => u64::from(self.score),
            Metric::Timer => self.elapsed_secs,
            Metric::Wpm => u64::from(self.wpm),
        }
    }
}

/// Names of achievements whose condition holds for `progress` and which are
/// not in `unlocked` yet, in catalog order.
pub fn check_achievements(
    catalog: &[AchievementDef],
    unlocked: &[String],
    progress: &Progress,
) -> Vec<String> {
    catalog
        .iter()
        .filter(|a| !unlocked.iter().any(|name| name == &a.name))
        .filter(|a| a.condition.is_met(progress))
        .map(|a| a.name.clone())
        .collect()
}
