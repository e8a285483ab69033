//! HTTP transport for the scoring engine.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `GET /`: life sign, empty 200.
//! - `GET /api/v1/status`: `{ "status": true, "version": ..., "mainUrl": "/api/v1" }`.
//! - `GET /api/v1/bowling`: list games.
//! - `POST /api/v1/bowling`: create a game (201).
//! - `POST /api/v1/bowling/start`: create a game (200).
//! - `GET /api/v1/bowling/:id`: read a game.
//! - `PUT /api/v1/bowling/:id`: replace the rolls with `{ "knockedOverPinsPerRoll": [...] }`.
//! - `DELETE /api/v1/bowling/:id`: delete a game (204).
//! - `POST /api/v1/bowling/:id/rolls`: submit `{ "pins": n }`, returns the scorecard.
//! - `POST /api/v1/bowling/:id/roll/:pins`: same, pins taken from the path.
//! - `GET /api/v1/bowling/:id/score`: current scorecard.
//!
//! Unparseable bodies and path segments answer 400 with reason
//! `MalformedRequest`. Engine calls block on the per-game lock, so they run
//! on tokio's blocking pool rather than on the async workers.

mod dto;
mod error;

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

pub use dto::{ApiStatus, GameLinks, GameView, Link, RollRequest, UpdateGameRequest, GAMES_PATH};
pub use error::ApiError;

use crate::engine::ScoringEngine;
use crate::error::EngineError;
use crate::game::GameId;
use crate::lock::LockManager;
use crate::score::Scorecard;
use crate::store::GameStore;

type Engine<S, M> = Arc<ScoringEngine<S, M>>;
type GamePath = Result<Path<GameId>, PathRejection>;

/// Build an axum `Router` serving the given engine.
pub fn router<S, M>(engine: Engine<S, M>) -> Router
where
    S: GameStore + 'static,
    M: LockManager + 'static,
{
    Router::new()
        .route("/", get(index))
        .route("/api/v1/status", get(status))
        .route(
            GAMES_PATH,
            get(list_games::<S, M>).post(create_game::<S, M>),
        )
        .route("/api/v1/bowling/start", post(start_game::<S, M>))
        .route(
            "/api/v1/bowling/:id",
            get(read_game::<S, M>)
                .put(update_game::<S, M>)
                .delete(delete_game::<S, M>),
        )
        .route("/api/v1/bowling/:id/rolls", post(submit_roll::<S, M>))
        .route("/api/v1/bowling/:id/roll/:pins", post(roll_pins::<S, M>))
        .route("/api/v1/bowling/:id/score", get(read_score::<S, M>))
        .with_state(engine)
}

/// Serve the engine over HTTP at the given address (e.g. `"0.0.0.0:8080"`).
pub async fn serve<S, M>(engine: Engine<S, M>, addr: &str) -> Result<(), std::io::Error>
where
    S: GameStore + 'static,
    M: LockManager + 'static,
{
    let app = router(engine);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "bowling service listening");
    axum::serve(listener, app).await
}

/// Run an engine call on the blocking pool.
async fn blocking<T, F>(call: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, EngineError> + Send + 'static,
    T: Send + 'static,
{
    match tokio::task::spawn_blocking(call).await {
        Ok(result) => result.map_err(ApiError::from),
        Err(err) => Err(ApiError::Internal(err.to_string())),
    }
}

async fn index() -> StatusCode {
    StatusCode::OK
}

async fn status() -> Json<ApiStatus> {
    Json(ApiStatus::default())
}

async fn list_games<S, M>(
    State(engine): State<Engine<S, M>>,
) -> Result<Json<Vec<GameView>>, ApiError>
where
    S: GameStore + 'static,
    M: LockManager + 'static,
{
    let games = blocking(move || engine.games()).await?;
    Ok(Json(games.iter().map(GameView::from).collect()))
}

async fn create_game<S, M>(
    State(engine): State<Engine<S, M>>,
) -> Result<impl IntoResponse, ApiError>
where
    S: GameStore + 'static,
    M: LockManager + 'static,
{
    let game = blocking(move || engine.create_game()).await?;
    Ok((StatusCode::CREATED, Json(GameView::from(&game))))
}

async fn start_game<S, M>(State(engine): State<Engine<S, M>>) -> Result<Json<GameView>, ApiError>
where
    S: GameStore + 'static,
    M: LockManager + 'static,
{
    let game = blocking(move || engine.create_game()).await?;
    Ok(Json(GameView::from(&game)))
}

async fn read_game<S, M>(
    State(engine): State<Engine<S, M>>,
    path: GamePath,
) -> Result<Json<GameView>, ApiError>
where
    S: GameStore + 'static,
    M: LockManager + 'static,
{
    let Path(id) = path?;
    let game = blocking(move || engine.game(id)).await?;
    Ok(Json(GameView::from(&game)))
}

async fn update_game<S, M>(
    State(engine): State<Engine<S, M>>,
    path: GamePath,
    body: Result<Json<UpdateGameRequest>, JsonRejection>,
) -> Result<Json<GameView>, ApiError>
where
    S: GameStore + 'static,
    M: LockManager + 'static,
{
    let Path(id) = path?;
    let Json(request) = body?;
    let game =
        blocking(move || engine.replace_rolls(id, &request.knocked_over_pins_per_roll)).await?;
    Ok(Json(GameView::from(&game)))
}

async fn delete_game<S, M>(
    State(engine): State<Engine<S, M>>,
    path: GamePath,
) -> Result<StatusCode, ApiError>
where
    S: GameStore + 'static,
    M: LockManager + 'static,
{
    let Path(id) = path?;
    blocking(move || engine.delete_game(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn submit_roll<S, M>(
    State(engine): State<Engine<S, M>>,
    path: GamePath,
    body: Result<Json<RollRequest>, JsonRejection>,
) -> Result<Json<Scorecard>, ApiError>
where
    S: GameStore + 'static,
    M: LockManager + 'static,
{
    let Path(id) = path?;
    let Json(request) = body?;
    let card = blocking(move || engine.submit_roll(id, request.pins)).await?;
    Ok(Json(card))
}

async fn roll_pins<S, M>(
    State(engine): State<Engine<S, M>>,
    path: Result<Path<(GameId, i64)>, PathRejection>,
) -> Result<Json<Scorecard>, ApiError>
where
    S: GameStore + 'static,
    M: LockManager + 'static,
{
    let Path((id, pins)) = path?;
    let card = blocking(move || engine.submit_roll(id, pins)).await?;
    Ok(Json(card))
}

async fn read_score<S, M>(
    State(engine): State<Engine<S, M>>,
    path: GamePath,
) -> Result<Json<Scorecard>, ApiError>
where
    S: GameStore + 'static,
    M: LockManager + 'static,
{
    let Path(id) = path?;
    let card = blocking(move || engine.compute_score(id)).await?;
    Ok(Json(card))
}
