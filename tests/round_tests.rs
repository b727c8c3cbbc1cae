//! Round lifecycle tests through the public API

use tui_pairs::core::{NumberSource, Round, RoundConfig, Rules};
use tui_pairs::types::{GameEvent, Outcome, SoundCue, TokenId};

fn round(pair_count: usize, difficulty: f64) -> Round {
    let config = RoundConfig {
        difficulty,
        pair_count,
        seed: 1,
        sound_enabled: true,
    };
    let mut round = Round::new(config, Box::new(NumberSource::new(1))).unwrap();
    round.start();
    round
}

fn drain(round: &mut Round) -> Vec<GameEvent> {
    let mut events = Vec::new();
    while let Some(e) = round.take_event() {
        events.push(e);
    }
    events
}

fn partner(round: &Round, id: TokenId) -> TokenId {
    (0..round.deck().len())
        .find(|&b| round.deck().matches(id, b))
        .unwrap()
}

fn non_partner(round: &Round, id: TokenId) -> TokenId {
    (0..round.deck().len())
        .find(|&b| b != id && !round.deck().matches(id, b))
        .unwrap()
}

#[test]
fn rules_derive_from_difficulty_by_flooring() {
    let r = Rules::for_difficulty(1.0).unwrap();
    assert_eq!((r.guess_window_ms, r.tour_secs), (1000, 60));
    let r = Rules::for_difficulty(1.7).unwrap();
    assert_eq!((r.guess_window_ms, r.tour_secs), (588, 35));
    let r = Rules::for_difficulty(7.0).unwrap();
    assert_eq!((r.guess_window_ms, r.tour_secs), (142, 8));
}

#[test]
fn mismatch_then_match_scenario() {
    let mut round = round(2, 1.0);
    let other = non_partner(&round, 0);
    let mate = partner(&round, 0);

    // Mismatch: no score, both stay revealed until the window elapses.
    round.handle_select(0);
    round.handle_select(other);
    assert_eq!(round.score(), 0);
    assert!(round.deck().token(0).unwrap().revealed);
    round.tick(1_000);
    assert!(!round.deck().token(0).unwrap().revealed);
    assert!(!round.deck().token(other).unwrap().revealed);
    drain(&mut round);

    // Match: score, fresh tour.
    round.tick(5_000);
    round.handle_select(0);
    round.handle_select(mate);
    assert_eq!(round.score(), 1);
    assert_eq!(round.remaining_seconds(), 60);
    assert!(round.deck().token(0).unwrap().matched);
}

#[test]
fn lone_pick_timeout_aborts_without_scoring() {
    let mut round = round(2, 1.0);
    round.handle_select(0);
    drain(&mut round);

    // Guess window plus 200ms grace.
    round.tick(1_199);
    assert!(round.deck().token(0).unwrap().peeking);
    round.tick(1);
    assert!(!round.deck().token(0).unwrap().peeking);
    assert!(round.deck().token(0).unwrap().revealed);

    // Hidden again after the short abort delay.
    round.tick(200);
    assert!(!round.deck().token(0).unwrap().revealed);
    assert_eq!(round.score(), 0);
    assert!(!round.is_terminal());
}

#[test]
fn win_is_terminal_and_emitted_once() {
    let mut round = round(2, 1.0);
    for id in 0..round.deck().len() {
        if round.deck().token(id).unwrap().matched {
            continue;
        }
        round.handle_select(id);
        round.handle_select(partner(&round, id));
    }
    assert_eq!(round.outcome(), Some(Outcome::Win));
    assert!(round.deck().tokens().iter().all(|t| t.revealed));

    let events = drain(&mut round);
    assert_eq!(
        events
            .iter()
            .filter(|e| matches!(e, GameEvent::RoundEnded(Outcome::Win)))
            .count(),
        1
    );

    // Input and time are ignored from here on.
    round.handle_select(0);
    round.tick(120_000);
    assert!(drain(&mut round).is_empty());
    assert_eq!(round.score(), 2);
}

#[test]
fn time_over_aborts_the_pending_guess() {
    let mut round = round(3, 1.0);
    round.handle_select(0);
    drain(&mut round);

    round.tick(60_000);
    assert_eq!(round.outcome(), Some(Outcome::TimeOver));
    assert_eq!(round.score(), 0);
    assert!(round.deck().tokens().iter().all(|t| t.revealed));
    assert!(round.deck().tokens().iter().all(|t| !t.peeking));

    let events = drain(&mut round);
    assert!(events.contains(&GameEvent::RoundEnded(Outcome::TimeOver)));
}

#[test]
fn tokens_stay_revealed_when_the_round_ends_mid_hide() {
    let mut round = round(2, 1.0);
    let other = non_partner(&round, 0);
    round.handle_select(0);
    round.handle_select(other);

    // Win before the mismatch hide is due.
    for id in 0..round.deck().len() {
        if round.deck().token(id).unwrap().matched {
            continue;
        }
        round.handle_select(id);
        round.handle_select(partner(&round, id));
    }
    assert!(round.is_terminal());
    round.tick(10_000);
    assert!(round.deck().tokens().iter().all(|t| t.revealed));
}

#[test]
fn untimed_rounds_cannot_be_built() {
    // A factor above 60 floors the tour to zero seconds, which would leave
    // the countdown unarmed forever.
    let config = RoundConfig {
        difficulty: 61.0,
        pair_count: 2,
        seed: 1,
        sound_enabled: true,
    };
    assert!(Round::new(config, Box::new(NumberSource::new(1))).is_err());

    // Every buildable round still reaches time-over.
    let mut round = round(2, 60.0);
    round.tick(1_000);
    assert_eq!(round.outcome(), Some(Outcome::TimeOver));
}

#[test]
fn faster_difficulty_shrinks_the_timers() {
    let mut round = round(2, 2.0);
    assert_eq!(round.rules().guess_window_ms, 500);
    assert_eq!(round.remaining_seconds(), 30);

    round.handle_select(0);
    // 500ms window + 200ms grace.
    round.tick(700);
    assert!(!round.deck().token(0).unwrap().peeking);
}

#[test]
fn countdown_warning_starts_below_ten_seconds() {
    let mut round = round(2, 1.0);
    drain(&mut round);

    // Exactly 10s remaining is still outside the warning band.
    round.tick(50_000);
    let events = drain(&mut round);
    assert!(!events.iter().any(|e| matches!(e, GameEvent::Sound(SoundCue::Bip))));

    round.tick(1_000);
    let events = drain(&mut round);
    assert!(events.contains(&GameEvent::Sound(SoundCue::Bip)));

    round.set_muted(true);
    round.tick(1_000);
    let events = drain(&mut round);
    assert!(!events.iter().any(|e| matches!(e, GameEvent::Sound(_))));
}

#[test]
fn score_events_carry_the_running_total() {
    let mut round = round(3, 1.0);
    drain(&mut round);
    let mut expected = 1;
    for id in 0..round.deck().len() {
        if round.deck().token(id).unwrap().matched {
            continue;
        }
        round.handle_select(id);
        round.handle_select(partner(&round, id));
        let events = drain(&mut round);
        assert!(events.contains(&GameEvent::ScoreChanged(expected)));
        expected += 1;
    }
}
