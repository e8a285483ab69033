//! Frame and running scores.
//!
//! A frame's score reads rolls by their game-wide position: a strike at
//! position `i` is worth `rolls[i] + rolls[i + 1] + rolls[i + 2]`, a spare
//! starting at `i` the same three rolls, an open frame its own two. When a
//! roll it needs has not happened yet the score is [`Score::Pending`].

use serde::{Deserialize, Serialize};

use crate::game::{Frame, FrameKind, Game, GameId, GameStatus};

/// A score that may not be determinable yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum Score {
    Pending,
    Scored(u32),
}

impl Score {
    pub fn value(self) -> Option<u32> {
        match self {
            Score::Scored(value) => Some(value),
            Score::Pending => None,
        }
    }

    pub fn is_pending(self) -> bool {
        self == Score::Pending
    }

    fn plus(self, other: Score) -> Score {
        match (self, other) {
            (Score::Scored(a), Score::Scored(b)) => Score::Scored(a + b),
            _ => Score::Pending,
        }
    }
}

/// Score line of one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameScore {
    pub position: u8,
    pub kind: FrameKind,
    pub rolls: Vec<u8>,
    pub score: Score,
    /// Running total through this frame.
    pub cumulative: Score,
}

/// The full score sheet of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scorecard {
    pub game_id: GameId,
    pub status: GameStatus,
    pub rolls_played: u32,
    pub frames: Vec<FrameScore>,
    /// Latest running total that is already determined, 0 before any is.
    pub current_score: u32,
    /// Final score, pending until the game is complete.
    pub total: Score,
}

impl Scorecard {
    pub fn frame(&self, position: u8) -> Option<&FrameScore> {
        self.frames.iter().find(|frame| frame.position == position)
    }
}

/// Score every frame of `game`.
pub fn score_game(game: &Game) -> Scorecard {
    let rolls = game.rolls();
    let mut running = Score::Scored(0);
    let mut current_score = 0;

    let frames = game
        .frames()
        .iter()
        .map(|frame| {
            let score = frame_score(frame, &rolls);
            running = running.plus(score);
            if let Score::Scored(value) = running {
                current_score = value;
            }
            FrameScore {
                position: frame.position(),
                kind: frame.kind(),
                rolls: frame.pins(),
                score,
                cumulative: running,
            }
        })
        .collect();

    let total = if game.is_complete() {
        running
    } else {
        Score::Pending
    };

    Scorecard {
        game_id: game.id(),
        status: game.status(),
        rolls_played: game.rolls_played(),
        frames,
        current_score,
        total,
    }
}

fn frame_score(frame: &Frame, rolls: &[u8]) -> Score {
    let Some(start) = frame.first_sequence() else {
        return Score::Pending;
    };
    let counted = match frame.kind() {
        FrameKind::Strike | FrameKind::Spare => 3,
        FrameKind::Open => 2,
        FrameKind::Incomplete => return Score::Pending,
    };
    let start = start as usize;
    rolls
        .get(start..start + counted)
        .map(|window| Score::Scored(window.iter().map(|pins| u32::from(*pins)).sum()))
        .unwrap_or(Score::Pending)
}
