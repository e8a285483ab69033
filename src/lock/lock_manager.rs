use std::sync::Arc;

use super::{Lock, LockError, LockGuard};
use crate::game::GameId;

/// Hands out one lock per game id.
///
/// Repeated calls with the same id must return the same logical lock,
/// otherwise two writers could hold "the" lock of a game at once.
pub trait LockManager: Send + Sync {
    /// The concrete lock type returned by this manager.
    type Lock: Lock;

    /// Get (or create) the lock for the given game.
    fn get_lock(&self, id: GameId) -> Result<Arc<Self::Lock>, LockError>;

    /// Forget the lock of a game that no longer exists.
    fn discard(&self, _id: GameId) -> Result<(), LockError> {
        Ok(())
    }

    /// Forget the lock of `id` only if no caller holds or waits on it.
    fn discard_if_unused(&self, _id: GameId) -> Result<(), LockError> {
        Ok(())
    }

    /// Block until the game's lock is held and return a guard that releases it on drop.
    fn acquire(&self, id: GameId) -> Result<LockGuard<Self::Lock>, LockError> {
        LockGuard::acquire(self.get_lock(id)?)
    }
}
