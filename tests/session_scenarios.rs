use std::fs;
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::SmallRng;

use codetypr::dataset::Datasets;
use codetypr::dataset::achievements::AchievementCatalog;
use codetypr::dataset::word_bank::WordBank;
use codetypr::error::DatasetError;
use codetypr::game::difficulty::Difficulty;
use codetypr::game::session::{GameSession, SessionEvent, SessionTiming, Status};

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn first_step_session(seed: u64) -> GameSession {
    let datasets = Datasets {
        words: WordBank::new(words(&["let"]), words(&["for", "if"]), words(&["impl<T>"])).unwrap(),
        achievements: AchievementCatalog::from_json(
            r#"{"achievements": [
                {"name": "First Step", "description": "Type your first word", "condition": "score >= 1"},
                {"name": "Broken", "description": "never", "condition": "score > 0"}
            ]}"#,
        )
        .unwrap(),
    };
    GameSession::new(
        datasets,
        Difficulty::Medium,
        SessionTiming::default(),
        SmallRng::seed_from_u64(seed),
    )
}

#[test]
fn typing_for_unlocks_first_step() {
    for seed in 0..8 {
        let mut session = first_step_session(seed);
        // make the current word "for" deterministically
        while session.state().current_word != "for" {
            session.set_difficulty(Difficulty::Medium);
        }

        session.on_input("for");
        let state = session.state();
        assert_eq!(state.score, 1);
        assert!(state.current_word == "for" || state.current_word == "if");

        session.advance(Duration::from_millis(100));
        let state = session.state();
        assert_eq!(state.unlocked_achievements, vec!["First Step".to_string()]);
        assert_eq!(state.notification.as_deref(), Some("First Step"));
    }
}

#[test]
fn one_character_off_never_scores() {
    let mut session = first_step_session(3);
    let word = session.state().current_word.clone();
    let mut wrong = word.clone();
    wrong.pop();
    wrong.push('#');

    session.on_input(&wrong);
    session.on_input(&format!("{word}x"));
    session.on_input(&word.to_uppercase());
    assert_eq!(session.state().score, 0);
    assert_eq!(session.status(), Status::Running);
}

#[test]
fn counters_are_monotonic_while_running() {
    let mut session = first_step_session(11);
    session.on_input("?");

    let mut last = (0, 0, 0);
    for step in 0..200 {
        if step % 3 == 0 {
            let word = session.state().current_word.clone();
            session.on_input(&word);
        } else {
            session.on_input("x");
        }
        session.advance(Duration::from_millis(370));

        let s = session.state();
        let now = (s.score, s.elapsed_secs, s.total_chars_typed);
        assert!(now.0 >= last.0 && now.1 >= last.1 && now.2 >= last.2);
        last = now;
    }
    assert!(last.0 > 0 && last.1 > 0);
}

#[test]
fn restart_mid_game_resets_state() {
    let mut session = first_step_session(5);
    session.on_input("x");
    for _ in 0..5 {
        let word = session.state().current_word.clone();
        session.on_input(&word);
    }
    session.advance(Duration::from_secs(30));
    assert_eq!(session.state().score, 5);
    assert_eq!(session.state().elapsed_secs, 30);

    session.restart();
    let events = session.drain_events();
    assert_eq!(events.last(), Some(&SessionEvent::Restarted));

    let s = session.state();
    assert_eq!((s.score, s.elapsed_secs, s.wpm, s.total_chars_typed), (0, 0, 0, 0));
    assert!(s.unlocked_achievements.is_empty());
    assert!(s.notification.is_none());
    assert!(s.current_word == "for" || s.current_word == "if");
    assert_eq!(session.status(), Status::Idle);
}

#[test]
fn stale_notification_does_not_return_after_restart() {
    let mut session = first_step_session(9);
    let word = session.state().current_word.clone();
    session.on_input(&word);
    session.advance(Duration::from_millis(100));
    assert!(session.state().notification.is_some());

    session.restart();
    assert!(session.state().notification.is_none());

    // start again and score; the first clear must not cut the new banner short
    session.advance(Duration::from_secs(1));
    let word = session.state().current_word.clone();
    session.on_input(&word);
    session.advance(Duration::from_millis(100));
    assert_eq!(session.state().notification.as_deref(), Some("First Step"));

    session.advance(Duration::from_millis(2900));
    assert_eq!(session.state().notification.as_deref(), Some("First Step"));
    session.advance(Duration::from_millis(100));
    assert!(session.state().notification.is_none());
}

#[test]
fn empty_word_list_fails_at_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("words.json");
    fs::write(&path, r#"{"easy": [], "medium": ["for"], "hard": ["x"]}"#).unwrap();

    let err = Datasets::load(Some(&path), None).unwrap_err();
    assert!(matches!(err, DatasetError::EmptyWordList(Difficulty::Easy)));
}

#[test]
fn bundled_datasets_start_a_session() {
    let datasets = Datasets::bundled().unwrap();
    let session = GameSession::new(
        datasets,
        Difficulty::Hard,
        SessionTiming::default(),
        SmallRng::seed_from_u64(0),
    );
    let word = &session.state().current_word;
    assert!(session.datasets().words.contains(Difficulty::Hard, word));
}
