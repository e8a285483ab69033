//! Ten-pin bowling scoring service.
//!
//! Rolls arrive one at a time through [`ScoringEngine::submit_roll`]. Each
//! roll is checked by the [validator](rules::validate), recorded into the
//! game's ten [`Frame`]s and persisted through a [`GameStore`] while the
//! game's lock is held. [`score_game`] turns a game into a [`Scorecard`] in
//! which frames still waiting for bonus rolls are [`Score::Pending`].
//!
//! The `http` feature (on by default) adds an axum transport in [`http`].

pub mod config;
mod engine;
mod error;
pub mod game;
pub mod lock;
pub mod rules;
mod score;
pub mod store;

#[cfg(feature = "http")]
pub mod http;

pub use config::ServiceConfig;
pub use engine::ScoringEngine;
pub use error::EngineError;
pub use game::{Frame, FrameKind, Game, GameId, GameStatus, Roll};
pub use lock::{InMemoryLockManager, Lock, LockError, LockGuard, LockManager};
pub use rules::{validate, RollKind, RollRejection};
pub use score::{score_game, FrameScore, Score, Scorecard};
pub use store::{GameStore, InMemoryGameStore, StoreError};
