use std::fmt;

/// Why a roll was not admitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollRejection {
    /// Pin count outside 0..=10.
    InvalidPinCount { pins: i64 },
    /// The tenth frame is already complete.
    GameAlreadyComplete,
    /// More pins than are standing.
    PinCountExceedsRemaining { pins: u8, standing: u8 },
}

impl RollRejection {
    /// Stable machine-readable code for the rejection.
    pub fn code(&self) -> &'static str {
        match self {
            RollRejection::InvalidPinCount { .. } => "InvalidPinCount",
            RollRejection::GameAlreadyComplete => "GameAlreadyComplete",
            RollRejection::PinCountExceedsRemaining { .. } => "PinCountExceedsRemaining",
        }
    }
}

impl fmt::Display for RollRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RollRejection::InvalidPinCount { pins } => {
                write!(f, "invalid pin count {} (expected 0 to 10)", pins)
            }
            RollRejection::GameAlreadyComplete => write!(f, "game is already complete"),
            RollRejection::PinCountExceedsRemaining { pins, standing } => write!(
                f,
                "cannot knock down {} pins with only {} standing",
                pins, standing
            ),
        }
    }
}

impl std::error::Error for RollRejection {}
