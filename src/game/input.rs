use crate::game::state::GameState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharStatus {
    Correct,
    Incorrect,
    Pending,
}

/// Per-character view of the target word against what has been typed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordProgress {
    pub chars: Vec<(char, CharStatus)>,
    /// Typed characters past the end of the target word.
    pub overtyped: String,
}

pub fn word_progress(word: &str, input: &str) -> WordProgress {
    let mut typed = input.chars();
    let chars = word
        .chars()
        .map(|expected| {
            let status = match typed.next() {
                Some(actual) if actual == expected => CharStatus::Correct,
                Some(_) => CharStatus::Incorrect,
                None => CharStatus::Pending,
            };
            (expected, status)
        })
        .collect();

    WordProgress {
        chars,
        overtyped: typed.collect(),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputOutcome {
    /// The value was stored but does not match the target.
    Partial,
    /// The value matched exactly and was scored.
    Completed { word: String },
}

/// Store `value` as the typed text and score it on an exact match.
///
/// Picking the next word is left to the caller, which owns the word bank.
pub fn apply_input(state: &mut GameState, value: &str) -> InputOutcome {
    state.user_input.clear();
    state.user_input.push_str(value);

    if value != state.current_word {
        return InputOutcome::Partial;
    }

    state.score += 1;
    state.total_chars_typed += state.current_word.chars().count() as u64;
    state.user_input.clear();
    InputOutcome::Completed {
        word: state.current_word.clone(),
    }
}
