use std::net::SocketAddr;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};

use kalah_common::games::kalah::{BoardSettings, GameSnapshot};
use kalah_common::{GameId, KalahError, PlayerId, log};

use crate::game_registry::GameRegistry;

#[derive(Clone)]
pub struct WebServerState {
    pub registry: GameRegistry,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameRequest {
    pub game_name: String,
    #[serde(default)]
    pub player_name: Option<String>,
    #[serde(default)]
    pub pits_per_player: Option<usize>,
    #[serde(default)]
    pub stones_per_pit: Option<u32>,
}

impl CreateGameRequest {
    fn board_settings(&self) -> Option<BoardSettings> {
        if self.pits_per_player.is_none() && self.stones_per_pit.is_none() {
            return None;
        }
        let defaults = BoardSettings::default();
        Some(BoardSettings {
            pits_per_player: self.pits_per_player.unwrap_or(defaults.pits_per_player),
            stones_per_pit: self.stones_per_pit.unwrap_or(defaults.stones_per_pit),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameResponse {
    pub game_id: GameId,
    pub player_id: Option<PlayerId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRequest {
    pub player_id: PlayerId,
    pub pit_index: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error_code: String,
    pub error_message: String,
}

#[derive(Debug)]
pub struct ApiError(pub KalahError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            KalahError::GameNotFound(_) => StatusCode::NOT_FOUND,
            KalahError::GameFull(_) => StatusCode::CONFLICT,
            KalahError::UnauthorizedPitAccess { .. } => StatusCode::UNAUTHORIZED,
            KalahError::GameNotStarted(_)
            | KalahError::GameFinished(_)
            | KalahError::WrongTurn { .. }
            | KalahError::IllegalMove { .. }
            | KalahError::InvalidSettings(_) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn body(&self) -> ErrorResponse {
        let status = self.status();
        ErrorResponse {
            error_code: status.canonical_reason().unwrap_or("Error").to_string(),
            error_message: self.0.to_string(),
        }
    }
}

impl From<KalahError> for ApiError {
    fn from(e: KalahError) -> Self {
        ApiError(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        log!("Request rejected: {}", self.0);
        (self.status(), Json(self.body())).into_response()
    }
}

pub fn build_router(state: WebServerState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/v1/game", post(create_game))
        .route("/api/v1/game/join/{game_id}", post(join_game))
        .route("/api/v1/game/move/{game_id}", post(make_move))
        .route("/api/v1/game/{game_id}", get(get_game))
        .layer(cors)
        .with_state(state)
}

pub async fn run_web_server(
    registry: GameRegistry,
    addr: SocketAddr,
    shutdown_signal: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    let app = build_router(WebServerState { registry });

    let listener = tokio::net::TcpListener::bind(addr).await?;
    log!("Web server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
}

pub async fn create_game(
    State(state): State<WebServerState>,
    Json(request): Json<CreateGameRequest>,
) -> Result<Json<CreateGameResponse>, ApiError> {
    let game_id = state
        .registry
        .create_game(request.game_name.clone(), request.board_settings())
        .await?;

    let player_id = match request.player_name {
        Some(player_name) => Some(state.registry.assign_player(&game_id, player_name).await?),
        None => None,
    };

    Ok(Json(CreateGameResponse { game_id, player_id }))
}

pub async fn join_game(
    State(state): State<WebServerState>,
    Path(game_id): Path<String>,
    player_name: String,
) -> Result<String, ApiError> {
    let player_id = state
        .registry
        .assign_player(&GameId::new(game_id), player_name.trim().to_string())
        .await?;
    Ok(player_id.into())
}

pub async fn make_move(
    State(state): State<WebServerState>,
    Path(game_id): Path<String>,
    Json(request): Json<MoveRequest>,
) -> Result<Json<GameSnapshot>, ApiError> {
    let snapshot = state
        .registry
        .make_move(&GameId::new(game_id), &request.player_id, request.pit_index)
        .await?;
    Ok(Json(snapshot))
}

pub async fn get_game(
    State(state): State<WebServerState>,
    Path(game_id): Path<String>,
) -> Result<Json<GameSnapshot>, ApiError> {
    let snapshot = state.registry.get_game(&GameId::new(game_id)).await?;
    Ok(Json(snapshot))
}
