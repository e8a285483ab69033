//! Rejected rolls leave no trace.

use bowling_service::{EngineError, RollRejection};

use crate::support::{engine, play};

#[test]
fn unknown_game() {
    let engine = engine();
    assert_eq!(
        engine.submit_roll(404, 3).unwrap_err(),
        EngineError::GameNotFound(404)
    );
    assert_eq!(
        engine.compute_score(404).unwrap_err(),
        EngineError::GameNotFound(404)
    );
    assert_eq!(
        engine.delete_game(404).unwrap_err(),
        EngineError::GameNotFound(404)
    );
}

#[test]
fn invalid_pin_counts() {
    let engine = engine();
    let (id, _) = play(&engine, &[]);
    for pins in [-1, 11, 99, i64::MIN, i64::MAX] {
        assert_eq!(
            engine.submit_roll(id, pins).unwrap_err(),
            EngineError::Rejected(RollRejection::InvalidPinCount { pins })
        );
    }
}

#[test]
fn rejection_does_not_change_recorded_rolls() {
    let engine = engine();
    let (id, _) = play(&engine, &[10, 3, 4, 8]);
    let before = engine.game(id).unwrap();

    assert!(engine.submit_roll(id, 3).is_err());
    assert!(engine.submit_roll(id, 11).is_err());

    let after = engine.game(id).unwrap();
    assert_eq!(after.rolls(), vec![10, 3, 4, 8]);
    assert_eq!(before, after);
}

#[test]
fn every_rejection_has_a_distinct_reason() {
    let engine = engine();
    let (id, _) = play(&engine, &[7]);
    let exceeds = engine.submit_roll(id, 4).unwrap_err();
    let invalid = engine.submit_roll(id, 12).unwrap_err();
    let missing = engine.submit_roll(id + 100, 1).unwrap_err();

    let (done, _) = play(&engine, &[0; 20]);
    let complete = engine.submit_roll(done, 0).unwrap_err();

    let reasons = [
        exceeds.reason(),
        invalid.reason(),
        missing.reason(),
        complete.reason(),
    ];
    assert_eq!(
        reasons,
        [
            "PinCountExceedsRemaining",
            "InvalidPinCount",
            "GameNotFound",
            "GameAlreadyComplete"
        ]
    );
}
