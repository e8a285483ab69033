//! The game aggregate: ten fixed frames filled one roll at a time.
//!
//! A [`Game`] owns its frames and a frame owns its rolls. Rolls are only
//! appended through [`Game::roll`], which asks the
//! [validator](crate::rules::validate) first and records nothing when the
//! roll is rejected.

mod frame;

use serde::{Deserialize, Serialize};

pub use frame::{Frame, FrameKind, Roll};

use crate::rules::{self, RollKind, RollRejection, FRAMES, MAX_ROLLS};

/// Identifier assigned to a game by its store.
pub type GameId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    Complete,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    id: GameId,
    frames: Vec<Frame>,
    status: GameStatus,
}

impl Game {
    /// An empty game: ten frames, no rolls, in progress.
    pub fn new(id: GameId) -> Self {
        Self {
            id,
            frames: (1..=FRAMES).map(Frame::new).collect(),
            status: GameStatus::InProgress,
        }
    }

    pub fn id(&self) -> GameId {
        self.id
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Frame by 1-based position.
    pub fn frame(&self, position: u8) -> Option<&Frame> {
        position
            .checked_sub(1)
            .and_then(|index| self.frames.get(usize::from(index)))
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_complete(&self) -> bool {
        self.status == GameStatus::Complete
    }

    /// The frame the next roll goes into, `None` once the game is over.
    pub fn current_frame(&self) -> Option<&Frame> {
        self.frames.iter().find(|frame| !frame.is_complete())
    }

    /// Every pin count in the order it was rolled.
    pub fn rolls(&self) -> Vec<u8> {
        self.frames
            .iter()
            .flat_map(|frame| frame.rolls().iter().map(|roll| roll.pins))
            .collect()
    }

    pub fn rolls_played(&self) -> u32 {
        self.frames.iter().map(|frame| frame.rolls().len() as u32).sum()
    }

    /// Validate and record a roll.
    ///
    /// On rejection the game is left untouched.
    pub fn roll(&mut self, pins: i64) -> Result<RollKind, RollRejection> {
        let kind = rules::validate(self, pins)?;
        // validate only admits 0..=10
        self.record(pins as u8);
        Ok(kind)
    }

    fn record(&mut self, pins: u8) {
        let sequence = self.rolls_played();
        debug_assert!((sequence as usize) < MAX_ROLLS, "roll past the end of a game");
        if let Some(frame) = self.frames.iter_mut().find(|frame| !frame.is_complete()) {
            frame.push(Roll { pins, sequence });
        }
        if self.frames.iter().all(Frame::is_complete) {
            self.status = GameStatus::Complete;
        }
    }
}
