use super::LockError;

/// A single game's write lock.
///
/// `lock` blocks until the lock is free. Callers normally go through
/// [`LockGuard`](super::LockGuard) instead of pairing `lock`/`unlock` by hand.
pub trait Lock: Send + Sync {
    /// Acquire the lock, blocking until it becomes available.
    fn lock(&self) -> Result<(), LockError>;

    /// Try to acquire the lock without blocking.
    /// Returns `Ok(true)` if acquired, `Ok(false)` if already held.
    fn try_lock(&self) -> Result<bool, LockError>;

    /// Release the lock.
    fn unlock(&self) -> Result<(), LockError>;
}
