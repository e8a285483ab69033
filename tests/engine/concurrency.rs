//! Concurrent submissions against one or many games.

use std::sync::Arc;
use std::thread;

use bowling_service::{EngineError, RollRejection, Score};

use crate::support::engine;

#[test]
fn concurrent_rolls_on_one_game_never_interleave() {
    let engine = Arc::new(engine());
    let id = engine.create_game().unwrap().id();

    // 30 threads race to roll a 1; exactly 20 fit into an open game.
    let handles: Vec<_> = (0..30)
        .map(|_| {
            let engine = engine.clone();
            thread::spawn(move || engine.submit_roll(id, 1))
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let accepted = results.iter().filter(|r| r.is_ok()).count();
    let complete = results
        .iter()
        .filter(|r| {
            matches!(
                r,
                Err(EngineError::Rejected(RollRejection::GameAlreadyComplete))
            )
        })
        .count();

    assert_eq!(accepted, 20);
    assert_eq!(complete, 10);

    let game = engine.game(id).unwrap();
    assert_eq!(game.rolls(), vec![1; 20]);
    let card = engine.compute_score(id).unwrap();
    assert_eq!(card.total, Score::Scored(20));
}

#[test]
fn concurrent_spare_attempts_admit_only_one() {
    let engine = Arc::new(engine());
    let id = engine.create_game().unwrap().id();
    engine.submit_roll(id, 4).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let engine = engine.clone();
            thread::spawn(move || engine.submit_roll(id, 6))
        })
        .collect();

    let accepted = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|r| r.is_ok())
        .count();

    // first 6 makes the spare, the second goes into frame 2, the rest are too many
    // for the 4 left standing.
    assert_eq!(accepted, 2);
    assert_eq!(engine.game(id).unwrap().rolls(), vec![4, 6, 6]);
}

#[test]
fn different_games_progress_independently() {
    let engine = Arc::new(engine());
    let ids: Vec<_> = (0..6).map(|_| engine.create_game().unwrap().id()).collect();

    let handles: Vec<_> = ids
        .iter()
        .map(|id| {
            let engine = engine.clone();
            let id = *id;
            thread::spawn(move || {
                for _ in 0..12 {
                    engine.submit_roll(id, 10).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    for id in ids {
        assert_eq!(engine.compute_score(id).unwrap().total, Score::Scored(300));
    }
}
