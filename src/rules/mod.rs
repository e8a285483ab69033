//! Ten-pin rules: the numbers the game is played with and the roll validator.

mod rejection;
mod validator;

pub use rejection::RollRejection;
pub use validator::{validate, RollKind};

/// Frames in a game.
pub const FRAMES: u8 = 10;

/// Pins in a full rack.
pub const PINS: u8 = 10;

/// Upper bound on rolls in one game: nine strikes-or-pairs plus three in the tenth.
pub const MAX_ROLLS: usize = 21;

/// Score of a perfect game.
pub const MAX_SCORE: u32 = 300;
