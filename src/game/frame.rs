use serde::{Deserialize, Serialize};

use crate::rules::{FRAMES, PINS};

/// A single delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roll {
    /// Pins knocked down, 0..=10.
    pub pins: u8,
    /// Zero-based position of this roll within the whole game.
    pub sequence: u32,
}

/// Outcome of a frame judged by the rolls it holds so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameKind {
    Open,
    Spare,
    Strike,
    Incomplete,
}

/// One of the ten scoring units of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    position: u8,
    rolls: Vec<Roll>,
}

impl Frame {
    pub(crate) fn new(position: u8) -> Self {
        Self {
            position,
            rolls: Vec::with_capacity(2),
        }
    }

    /// 1-based frame number.
    pub fn position(&self) -> u8 {
        self.position
    }

    pub fn rolls(&self) -> &[Roll] {
        &self.rolls
    }

    /// Pin counts of this frame's rolls, in order.
    pub fn pins(&self) -> Vec<u8> {
        self.rolls.iter().map(|roll| roll.pins).collect()
    }

    /// The tenth frame, which holds its own bonus rolls.
    pub fn is_final(&self) -> bool {
        self.position == FRAMES
    }

    /// Game-wide sequence number of the frame's first roll.
    pub fn first_sequence(&self) -> Option<u32> {
        self.rolls.first().map(|roll| roll.sequence)
    }

    pub fn kind(&self) -> FrameKind {
        match self.rolls.as_slice() {
            [first, ..] if first.pins == PINS => FrameKind::Strike,
            [first, second, ..] if first.pins + second.pins == PINS => FrameKind::Spare,
            [_, _, ..] => FrameKind::Open,
            _ => FrameKind::Incomplete,
        }
    }

    /// Frames 1-9 close on a strike or after two rolls. The tenth needs a
    /// third roll when it opened with a strike or made a spare.
    pub fn is_complete(&self) -> bool {
        let rolled = self.rolls.len();
        match (self.is_final(), self.kind()) {
            (false, FrameKind::Strike) => true,
            (false, _) => rolled >= 2,
            (true, FrameKind::Strike | FrameKind::Spare) => rolled >= 3,
            (true, _) => rolled >= 2,
        }
    }

    /// Pins still standing for the next roll of this frame.
    ///
    /// The rack starts at ten and every roll removes its pins; a cleared rack
    /// is reset to ten. In frames 1-9 a cleared rack closes the frame, so the
    /// reset only matters for the tenth.
    pub fn standing_pins(&self) -> u8 {
        self.rolls.iter().fold(PINS, |standing, roll| {
            match standing.saturating_sub(roll.pins) {
                0 => PINS,
                left => left,
            }
        })
    }

    pub(crate) fn push(&mut self, roll: Roll) {
        self.rolls.push(roll);
    }
}
