//! Per-game mutual exclusion.
//!
//! Every mutation of a game runs inside a [`LockGuard`] obtained from a
//! [`LockManager`] keyed by [`GameId`](crate::game::GameId). Two writers for
//! the same game queue up behind each other; writers for different games
//! never touch the same lock.

mod error;
mod guard;
mod in_memory;
mod lock;
mod lock_manager;

pub use error::LockError;
pub use guard::LockGuard;
pub use in_memory::{InMemoryLock, InMemoryLockManager};
pub use lock::Lock;
pub use lock_manager::LockManager;
