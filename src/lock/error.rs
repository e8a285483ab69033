use std::fmt;

/// Error type for lock operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LockError {
    /// The underlying lock primitive was poisoned (a thread panicked while holding it).
    Poisoned(String),
    /// Failed to acquire the lock.
    AcquireFailed(String),
    /// Failed to release the lock.
    ReleaseFailed(String),
}

impl fmt::Display for LockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LockError::Poisoned(msg) => write!(f, "game lock poisoned: {}", msg),
            LockError::AcquireFailed(msg) => write!(f, "game lock acquire failed: {}", msg),
            LockError::ReleaseFailed(msg) => write!(f, "game lock release failed: {}", msg),
        }
    }
}

impl std::error::Error for LockError {}
