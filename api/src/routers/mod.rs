use axum::Router;

pub mod auth;
pub mod game;
pub mod score;

use app::state::AppState;
use auth::create_auth_router;
use game::create_game_router;
use score::create_score_router;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/auth", create_auth_router())
        .nest("/games", create_game_router())
        .nest("/scores", create_score_router())
        .with_state(state)
}
