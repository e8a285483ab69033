//! The scoring engine: admits rolls and produces score sheets.
//!
//! ## Example
//!
//! ```
//! use bowling_service::{InMemoryGameStore, Score, ScoringEngine};
//!
//! let engine = ScoringEngine::new(InMemoryGameStore::new());
//! let game = engine.create_game().unwrap();
//!
//! engine.submit_roll(game.id(), 5).unwrap();
//! let card = engine.submit_roll(game.id(), 5).unwrap();
//! assert_eq!(card.frames[0].score, Score::Pending);
//!
//! let card = engine.submit_roll(game.id(), 3).unwrap();
//! assert_eq!(card.frames[0].score, Score::Scored(13));
//! ```

use tracing::{debug, info, warn};

use crate::error::EngineError;
use crate::game::{Game, GameId};
use crate::lock::{InMemoryLockManager, LockManager};
use crate::score::{score_game, Scorecard};
use crate::store::GameStore;

/// Applies rolls to stored games and scores them.
///
/// Generic over the store `S` and the lock manager `M`. Every mutation of a
/// game happens while holding that game's lock, so submissions for one game
/// are applied strictly one after another while different games proceed in
/// parallel.
pub struct ScoringEngine<S, M = InMemoryLockManager> {
    store: S,
    locks: M,
}

impl<S: GameStore> ScoringEngine<S> {
    /// Engine with in-process per-game locks.
    pub fn new(store: S) -> Self {
        Self::with_locks(store, InMemoryLockManager::new())
    }
}

impl<S: GameStore, M: LockManager> ScoringEngine<S, M> {
    pub fn with_locks(store: S, locks: M) -> Self {
        Self { store, locks }
    }

    pub fn locks(&self) -> &M {
        &self.locks
    }

    /// Start a new, empty game.
    pub fn create_game(&self) -> Result<Game, EngineError> {
        let game = self.store.create()?;
        info!(game_id = game.id(), "game created");
        Ok(game)
    }

    /// Record a roll of `pins` and return the updated score sheet.
    ///
    /// The roll is validated against the latest stored state. A rejected roll
    /// or a failed save leaves the stored game unchanged.
    pub fn submit_roll(&self, id: GameId, pins: i64) -> Result<Scorecard, EngineError> {
        self.with_game_locked(id, |mut game| {
            let kind = game.roll(pins).map_err(|rejection| {
                warn!(game_id = id, pins, reason = rejection.code(), "roll rejected");
                EngineError::from(rejection)
            })?;

            self.store.save(&game).map_err(|err| {
                warn!(game_id = id, pins, error = %err, "failed to persist roll");
                EngineError::from(err)
            })?;

            debug!(game_id = id, pins, kind = ?kind, roll = game.rolls_played(), "roll recorded");
            let card = score_game(&game);
            if game.is_complete() {
                info!(game_id = id, total = ?card.total.value(), "game complete");
            }
            Ok(card)
        })
    }

    /// Replace every roll of a game with `pins`, replayed from an empty game.
    ///
    /// Each roll goes through the same validation as [`submit_roll`]. The
    /// first rejected roll aborts the update and the stored game is kept as is.
    ///
    /// [`submit_roll`]: ScoringEngine::submit_roll
    pub fn replace_rolls(&self, id: GameId, pins: &[i64]) -> Result<Game, EngineError> {
        self.with_game_locked(id, |_| {
            let mut game = Game::new(id);
            for (index, &p) in pins.iter().enumerate() {
                game.roll(p).map_err(|rejection| {
                    warn!(
                        game_id = id,
                        pins = p,
                        index,
                        reason = rejection.code(),
                        "replayed roll rejected"
                    );
                    EngineError::from(rejection)
                })?;
            }

            self.store.save(&game).map_err(|err| {
                warn!(game_id = id, error = %err, "failed to persist replaced rolls");
                EngineError::from(err)
            })?;

            info!(game_id = id, rolls = game.rolls_played(), "game rolls replaced");
            Ok(game)
        })
    }

    /// Score a game as it currently stands. Read-only.
    pub fn compute_score(&self, id: GameId) -> Result<Scorecard, EngineError> {
        let game = self.load(id)?;
        Ok(score_game(&game))
    }

    pub fn game(&self, id: GameId) -> Result<Game, EngineError> {
        self.load(id)
    }

    /// All games, ordered by id.
    pub fn games(&self) -> Result<Vec<Game>, EngineError> {
        Ok(self.store.list()?)
    }

    /// Remove a game together with its frames and rolls.
    pub fn delete_game(&self, id: GameId) -> Result<(), EngineError> {
        self.with_game_locked(id, |_| {
            if !self.store.delete(id)? {
                return Err(EngineError::GameNotFound(id));
            }
            Ok(())
        })?;
        self.locks.discard(id)?;
        info!(game_id = id, "game deleted");
        Ok(())
    }

    fn load(&self, id: GameId) -> Result<Game, EngineError> {
        self.store.load(id)?.ok_or(EngineError::GameNotFound(id))
    }

    /// Run `f` on the freshly loaded game while holding its lock.
    ///
    /// Unknown ids are turned away before a lock is allocated. A game deleted
    /// while we waited for its lock leaves no lock behind either.
    fn with_game_locked<T, F>(&self, id: GameId, f: F) -> Result<T, EngineError>
    where
        F: FnOnce(Game) -> Result<T, EngineError>,
    {
        self.load(id)?;

        let outcome = {
            let _guard = self.locks.acquire(id)?;
            self.load(id).and_then(f)
        };

        if let Err(EngineError::GameNotFound(_)) = outcome {
            self.locks.discard_if_unused(id)?;
        }
        outcome
    }
}
