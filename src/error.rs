//! Errors surfaced by the scoring engine.

use std::error::Error;
use std::fmt;

use crate::game::GameId;
use crate::lock::LockError;
use crate::rules::RollRejection;
use crate::store::StoreError;

/// Error type for engine operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// No game with this id.
    GameNotFound(GameId),
    /// The roll was refused by the validator; nothing was recorded.
    Rejected(RollRejection),
    /// The store failed; nothing was committed.
    Persistence(StoreError),
    /// The per-game lock could not be taken or released.
    Lock(LockError),
}

impl EngineError {
    /// Stable machine-readable reason code.
    pub fn reason(&self) -> &'static str {
        match self {
            EngineError::GameNotFound(_) => "GameNotFound",
            EngineError::Rejected(rejection) => rejection.code(),
            EngineError::Persistence(_) => "PersistenceFailure",
            EngineError::Lock(_) => "LockFailure",
        }
    }

    /// Map this error to an HTTP-style status code.
    pub fn status_code(&self) -> u16 {
        match self {
            EngineError::GameNotFound(_) => 404,
            EngineError::Rejected(RollRejection::GameAlreadyComplete) => 409,
            EngineError::Rejected(_) => 400,
            EngineError::Persistence(_) => 503,
            EngineError::Lock(_) => 500,
        }
    }

    /// Whether the same request may succeed if simply retried.
    pub fn is_retryable(&self) -> bool {
        matches!(self, EngineError::Persistence(_))
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::GameNotFound(id) => write!(f, "game not found: {}", id),
            EngineError::Rejected(rejection) => write!(f, "roll rejected: {}", rejection),
            EngineError::Persistence(e) => write!(f, "persistence failure: {}", e),
            EngineError::Lock(e) => write!(f, "{}", e),
        }
    }
}

impl Error for EngineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            EngineError::Rejected(e) => Some(e),
            EngineError::Persistence(e) => Some(e),
            EngineError::Lock(e) => Some(e),
            EngineError::GameNotFound(_) => None,
        }
    }
}

impl From<RollRejection> for EngineError {
    fn from(err: RollRejection) -> Self {
        EngineError::Rejected(err)
    }
}

impl From<StoreError> for EngineError {
    fn from(err: StoreError) -> Self {
        EngineError::Persistence(err)
    }
}

impl From<LockError> for EngineError {
    fn from(err: LockError) -> Self {
        EngineError::Lock(err)
    }
}
