use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use super::{GameStore, StoreError};
use crate::game::{Game, GameId};

/// Game store backed by a map of `bitcode`-encoded games.
///
/// Games are encoded on `save` and decoded on `load`, so callers never share
/// memory with the stored copy. Clone-friendly via `Arc`.
#[derive(Clone)]
pub struct InMemoryGameStore {
    storage: Arc<RwLock<BTreeMap<GameId, Vec<u8>>>>,
    next_id: Arc<AtomicU64>,
}

impl Default for InMemoryGameStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryGameStore {
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    fn decode(bytes: &[u8]) -> Result<Game, StoreError> {
        Ok(bitcode::deserialize(bytes)?)
    }
}

impl GameStore for InMemoryGameStore {
    fn create(&self) -> Result<Game, StoreError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let game = Game::new(id);
        let bytes = bitcode::serialize(&game)?;

        let mut storage = self
            .storage
            .write()
            .map_err(|_| StoreError::Storage("lock poisoned".into()))?;
        storage.insert(id, bytes);

        Ok(game)
    }

    fn load(&self, id: GameId) -> Result<Option<Game>, StoreError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| StoreError::Storage("lock poisoned".into()))?;

        match storage.get(&id) {
            Some(bytes) => Ok(Some(Self::decode(bytes)?)),
            None => Ok(None),
        }
    }

    fn save(&self, game: &Game) -> Result<(), StoreError> {
        let bytes = bitcode::serialize(game)?;

        let mut storage = self
            .storage
            .write()
            .map_err(|_| StoreError::Storage("lock poisoned".into()))?;
        storage.insert(game.id(), bytes);

        Ok(())
    }

    fn delete(&self, id: GameId) -> Result<bool, StoreError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| StoreError::Storage("lock poisoned".into()))?;
        Ok(storage.remove(&id).is_some())
    }

    fn list(&self) -> Result<Vec<Game>, StoreError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| StoreError::Storage("lock poisoned".into()))?;
        storage
            .values()
            .map(|bytes| Self::decode(bytes))
            .collect()
    }
}
