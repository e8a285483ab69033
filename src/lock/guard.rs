use std::sync::Arc;

use super::{Lock, LockError};

/// Holds a [`Lock`] for as long as it lives.
///
/// The lock is released in `Drop`, so early returns and `?` on error paths
/// cannot leak a held game lock.
pub struct LockGuard<L: Lock> {
    lock: Arc<L>,
}

impl<L: Lock> LockGuard<L> {
    /// Block until `lock` is acquired.
    pub fn acquire(lock: Arc<L>) -> Result<Self, LockError> {
        lock.lock()?;
        Ok(Self { lock })
    }
}

impl<L: Lock> Drop for LockGuard<L> {
    fn drop(&mut self) {
        if let Err(err) = self.lock.unlock() {
            tracing::warn!(error = %err, "failed to release game lock");
        }
    }
}
