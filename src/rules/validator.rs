use serde::{Deserialize, Serialize};

use super::{RollRejection, PINS};
use crate::game::{Frame, FrameKind, Game};

/// What an admitted roll amounts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RollKind {
    Open,
    Strike,
    Spare,
    /// A tenth-frame roll earned by a strike or spare earlier in that frame.
    Bonus,
}

/// Decide whether `pins` may be rolled next in `game`.
///
/// Checks run in a fixed order: the pin count range, then whether the game
/// is over, then whether that many pins are still standing. Nothing is
/// mutated.
pub fn validate(game: &Game, pins: i64) -> Result<RollKind, RollRejection> {
    let pins = u8::try_from(pins)
        .ok()
        .filter(|pins| *pins <= PINS)
        .ok_or(RollRejection::InvalidPinCount { pins })?;

    let frame = game
        .current_frame()
        .ok_or(RollRejection::GameAlreadyComplete)?;

    let standing = frame.standing_pins();
    if pins > standing {
        return Err(RollRejection::PinCountExceedsRemaining { pins, standing });
    }

    Ok(classify(frame, pins))
}

fn classify(frame: &Frame, pins: u8) -> RollKind {
    if frame.is_final() && matches!(frame.kind(), FrameKind::Strike | FrameKind::Spare) {
        return RollKind::Bonus;
    }
    match frame.rolls() {
        [] if pins == PINS => RollKind::Strike,
        [first] if first.pins + pins == PINS => RollKind::Spare,
        _ => RollKind::Open,
    }
}
