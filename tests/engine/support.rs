//! Shared helpers: an engine factory and a store that can be made to fail.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use bowling_service::{
    Game, GameId, GameStore, InMemoryGameStore, Scorecard, ScoringEngine, StoreError,
};

pub fn engine() -> ScoringEngine<InMemoryGameStore> {
    ScoringEngine::new(InMemoryGameStore::new())
}

/// Create a game and roll `pins` into it, panicking on any rejection.
pub fn play<S: GameStore>(engine: &ScoringEngine<S>, pins: &[i64]) -> (GameId, Option<Scorecard>) {
    let id = engine.create_game().unwrap().id();
    let mut last = None;
    for p in pins {
        last = Some(engine.submit_roll(id, *p).unwrap());
    }
    (id, last)
}

/// Wraps an in-memory store; `save` fails while the switch is on.
#[derive(Clone, Default)]
pub struct FlakyStore {
    inner: InMemoryGameStore,
    failing: Arc<AtomicBool>,
}

impl FlakyStore {
    pub fn fail_saves(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

impl GameStore for FlakyStore {
    fn create(&self) -> Result<Game, StoreError> {
        self.inner.create()
    }

    fn load(&self, id: GameId) -> Result<Option<Game>, StoreError> {
        self.inner.load(id)
    }

    fn save(&self, game: &Game) -> Result<(), StoreError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("write timed out".into()));
        }
        self.inner.save(game)
    }

    fn delete(&self, id: GameId) -> Result<bool, StoreError> {
        self.inner.delete(id)
    }

    fn list(&self) -> Result<Vec<Game>, StoreError> {
        self.inner.list()
    }
}
