//! Persistence collaborator for games.
//!
//! The engine only talks to [`GameStore`]; [`InMemoryGameStore`] is the
//! implementation the service ships with.

mod error;
mod in_memory;

pub use error::StoreError;
pub use in_memory::InMemoryGameStore;

use crate::game::{Game, GameId};

/// Durable home of games.
///
/// A `save` must be all-or-nothing: on `Err` the previously stored game is
/// left exactly as it was. Reads must observe every acknowledged `save` for
/// the same id.
pub trait GameStore: Send + Sync {
    /// Allocate an id and store a fresh, empty game under it.
    fn create(&self) -> Result<Game, StoreError>;

    /// Load a game, `None` if the id is unknown.
    fn load(&self, id: GameId) -> Result<Option<Game>, StoreError>;

    /// Replace the stored state of `game`.
    fn save(&self, game: &Game) -> Result<(), StoreError>;

    /// Remove a game with all its frames and rolls. Returns whether it existed.
    fn delete(&self, id: GameId) -> Result<bool, StoreError>;

    /// All stored games, ordered by id.
    fn list(&self) -> Result<Vec<Game>, StoreError>;
}

impl<S: GameStore + ?Sized> GameStore for std::sync::Arc<S> {
    fn create(&self) -> Result<Game, StoreError> {
        (**self).create()
    }

    fn load(&self, id: GameId) -> Result<Option<Game>, StoreError> {
        (**self).load(id)
    }

    fn save(&self, game: &Game) -> Result<(), StoreError> {
        (**self).save(game)
    }

    fn delete(&self, id: GameId) -> Result<bool, StoreError> {
        (**self).delete(id)
    }

    fn list(&self) -> Result<Vec<Game>, StoreError> {
        (**self).list()
    }
}
