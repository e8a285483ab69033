//! Wire shapes of the HTTP API.

use serde::{Deserialize, Serialize};

use crate::game::{Game, GameId, GameStatus};
use crate::score::{score_game, FrameScore, Score};

/// Base path of the game resources.
pub const GAMES_PATH: &str = "/api/v1/bowling";

/// Body of `POST /api/v1/bowling/:id/rolls`.
///
/// Wide enough that any JSON integer a client sends reaches the validator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RollRequest {
    pub pins: i64,
}

/// Body of `PUT /api/v1/bowling/:id`: the complete roll history to replay.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGameRequest {
    pub knocked_over_pins_per_roll: Vec<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameLinks {
    #[serde(rename = "self")]
    pub self_link: Link,
    pub score: Link,
    pub rolls: Link,
}

impl GameLinks {
    pub fn for_game(id: GameId) -> Self {
        let base = format!("{}/{}", GAMES_PATH, id);
        Self {
            score: Link {
                href: format!("{}/score", base),
            },
            rolls: Link {
                href: format!("{}/rolls", base),
            },
            self_link: Link { href: base },
        }
    }
}

/// A game as rendered by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    pub id: GameId,
    pub status: GameStatus,
    /// Number of rolls played so far.
    pub current_roll: u32,
    pub knocked_over_pins_per_roll: Vec<u8>,
    pub current_score: u32,
    pub total: Score,
    pub frames: Vec<FrameScore>,
    #[serde(rename = "_links")]
    pub links: GameLinks,
}

impl From<&Game> for GameView {
    fn from(game: &Game) -> Self {
        let card = score_game(game);
        Self {
            id: game.id(),
            status: game.status(),
            current_roll: card.rolls_played,
            knocked_over_pins_per_roll: game.rolls(),
            current_score: card.current_score,
            total: card.total,
            frames: card.frames,
            links: GameLinks::for_game(game.id()),
        }
    }
}

/// Body of `GET /api/v1/status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiStatus {
    pub status: bool,
    pub version: String,
    pub main_url: String,
}

impl Default for ApiStatus {
    fn default() -> Self {
        Self {
            status: true,
            version: env!("CARGO_PKG_VERSION").to_string(),
            main_url: "/api/v1".to_string(),
        }
    }
}
