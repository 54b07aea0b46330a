use axum::{Router, response::IntoResponse, routing::get};

use app::state::AppState;
use models::domains::Game;
use models::schemas::game::GameSchema;
use sea_orm::Iterable;

use crate::extractor::Json;

/// The game registry, in dashboard order. Leaderboard dropdowns and game
/// clients take their `game_name` values from here.
#[utoipa::path(
    get,
    path = "/games",
    tag = "games",
    responses((status = 200, description = "Every hosted game", body = Vec<GameSchema>))
)]
pub async fn games_get() -> impl IntoResponse {
    let games: Vec<GameSchema> = Game::iter().map(GameSchema::from).collect();
    Json(games)
}

pub fn create_game_router() -> Router<AppState> {
    Router::new().route("/", get(games_get))
}
