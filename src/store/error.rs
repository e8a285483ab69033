use std::fmt;

/// Error type for game store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Encoding or decoding a stored game failed.
    Serde(String),
    /// The backing storage failed.
    Storage(String),
    /// The backing storage did not answer in time or is unreachable.
    Unavailable(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Serde(msg) => write!(f, "game serialization error: {}", msg),
            StoreError::Storage(msg) => write!(f, "game storage error: {}", msg),
            StoreError::Unavailable(msg) => write!(f, "game storage unavailable: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<bitcode::Error> for StoreError {
    fn from(err: bitcode::Error) -> Self {
        StoreError::Serde(err.to_string())
    }
}
