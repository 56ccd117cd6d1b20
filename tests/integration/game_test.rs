//! Game rules driven through the public controller API

use colortap::game::{
    GameController, GameEvent, MissReason, Phase, Rules, Session, GRID_SIZE, MAX_LIVES,
};

use crate::helpers::{ms, target_index, wait_for_play, wrong_index};

fn seeded(seed: u64) -> GameController {
    let mut c = GameController::with_seed(Rules::default(), seed);
    wait_for_play(&mut c);
    c
}

// ============================================================================
// Rounds
// ============================================================================

#[test]
fn every_round_has_target_and_distinct_label() {
    let mut c = seeded(3);
    for _ in 0..200 {
        let round = c.round().clone();
        assert_eq!(round.target_count(), 1);
        assert_ne!(round.label_color, round.target);
        assert_eq!(round.grid.len(), GRID_SIZE);
        c.tap(target_index(&c)).unwrap();
    }
}

#[test]
fn same_seed_gives_same_game() {
    let a = seeded(99);
    let b = seeded(99);
    assert_eq!(a.round(), b.round());
}

// ============================================================================
// Scoring and Difficulty
// ============================================================================

#[test]
fn three_hits_from_2000ms_speed_up_to_1860ms() {
    let rules = Rules {
        initial_time_limit_ms: 2000,
        ..Rules::default()
    };
    let mut c = GameController::with_seed(rules, 5);
    wait_for_play(&mut c);

    let mut events = Vec::new();
    for _ in 0..3 {
        events.extend(c.tap(target_index(&c)).unwrap());
    }

    assert_eq!(c.session().score, 3);
    assert_eq!(c.session().lives, 3);
    assert_eq!(c.session().time_limit_ms, 1860);
    assert!(events.contains(&GameEvent::SpeedUp { time_limit_ms: 1860 }));
    assert_eq!(c.round().time_limit_ms, 1860);
}

#[test]
fn score_rises_by_one_per_hit() {
    let mut c = seeded(8);
    for expected in 1..=10 {
        let before = *c.session();
        c.tap(target_index(&c)).unwrap();
        assert_eq!(c.session().score, expected);
        assert_eq!(c.session().score, before.score + 1);
    }
}

#[test]
fn time_limit_never_drops_below_floor() {
    let rules = Rules {
        initial_time_limit_ms: 1000,
        speedup_every: 1,
        ..Rules::default()
    };
    let mut c = GameController::with_seed(rules, 21);
    wait_for_play(&mut c);

    for _ in 0..50 {
        c.tap(target_index(&c)).unwrap();
        assert!(c.session().time_limit_ms >= 700);
    }
    assert_eq!(c.session().time_limit_ms, 700);
}

// ============================================================================
// Misses and Game Over
// ============================================================================

#[test]
fn three_misses_end_the_game() {
    let mut c = seeded(13);
    for lives_left in [2, 1] {
        let events = c.tap(wrong_index(&c)).unwrap();
        assert!(matches!(
            events.as_slice(),
            [GameEvent::Miss { reason: MissReason::WrongColor(_), lives }] if *lives == lives_left
        ));
        assert!(!c.is_game_over());
        wait_for_play(&mut c);
    }

    let events = c.tap(wrong_index(&c)).unwrap();
    assert_eq!(c.session().lives, 0);
    assert!(c.is_game_over());
    assert_eq!(c.phase(), Phase::GameOver);
    assert!(events.contains(&GameEvent::GameOver { score: 0 }));
}

#[test]
fn timeout_costs_one_life_like_a_wrong_tap() {
    let mut c = seeded(17);
    let score = c.session().score;

    let events = c.advance(ms(2900));
    assert!(events.is_empty());
    assert_eq!(c.remaining_ms(), 100);

    let events = c.advance(ms(100));
    assert_eq!(
        events,
        vec![GameEvent::Miss {
            reason: MissReason::Timeout,
            lives: 2
        }]
    );
    assert_eq!(c.session().score, score);
    assert_eq!(c.phase(), Phase::Recovering);

    // Next round appears after the miss delay with the same time limit
    let events = c.advance(ms(700));
    assert!(matches!(
        events.first(),
        Some(GameEvent::RoundStarted { time_limit_ms: 3000, .. })
    ));
    assert_eq!(c.phase(), Phase::Playing);
}

#[test]
fn taps_after_game_over_are_ignored() {
    let mut c = seeded(23);
    while !c.is_game_over() {
        wait_for_play(&mut c);
        c.tap(wrong_index(&c)).unwrap();
    }
    let before = *c.session();
    assert!(c.tap(target_index(&c)).unwrap().is_empty());
    assert!(c.advance(ms(10_000)).is_empty());
    assert_eq!(*c.session(), before);
}

#[test]
fn huge_starting_lives_are_capped() {
    let rules = Rules {
        starting_lives: 50_000_000,
        ..Rules::default()
    };
    let mut c = GameController::with_seed(rules, 2);
    assert_eq!(c.session().lives, MAX_LIVES);

    wait_for_play(&mut c);
    c.tap(wrong_index(&c)).unwrap();
    c.restart();
    assert_eq!(c.session().lives, MAX_LIVES);
}

#[test]
fn out_of_range_tap_is_an_error() {
    let mut c = seeded(1);
    assert!(c.tap(GRID_SIZE).is_err());
    assert_eq!(c.session().lives, 3);
}

// ============================================================================
// Restart
// ============================================================================

#[test]
fn restart_resets_session() {
    let mut c = seeded(29);
    c.tap(target_index(&c)).unwrap();
    while !c.is_game_over() {
        wait_for_play(&mut c);
        c.tap(wrong_index(&c)).unwrap();
    }

    let events = c.restart();
    assert_eq!(events.first(), Some(&GameEvent::Restarted));
    assert_eq!(*c.session(), Session::new(&Rules::default()));
    assert_eq!(c.session().score, 0);
    assert_eq!(c.session().lives, 3);
    assert_eq!(c.session().time_limit_ms, 3000);
    assert!(!c.is_game_over());
    assert_eq!(c.stats().games_played, 2);
    assert_eq!(c.stats().best_score, 1);
}

#[test]
fn restart_during_recovery_drops_pending_round() {
    let mut c = seeded(31);
    c.tap(wrong_index(&c)).unwrap();
    assert_eq!(c.phase(), Phase::Recovering);

    c.restart();
    let round = c.round().clone();

    let restarted_at = c.clock();
    let events = c.advance(ms(1000));
    assert_eq!(c.clock(), restarted_at + ms(1000));
    assert_eq!(events, vec![GameEvent::TimerStarted { time_limit_ms: 3000 }]);
    assert_eq!(c.round(), &round);
    assert_eq!(c.phase(), Phase::Playing);
    assert_eq!(c.session().lives, 3);
}
