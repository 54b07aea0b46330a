use axum::{
    Extension, Router,
    extract::{Query, State},
    response::IntoResponse,
    routing::get,
};

use app::error::ScoreError;
use app::persistence::scores::{get_leaderboard, get_user_scores, submit_score};
use app::persistence::users::get_user;
use app::state::AppState;
use models::params::score::SubmitScoreParams;
use models::queries::score::LeaderboardQuery;
use models::schemas::score::{LeaderboardEntry, ScoreSchema};
use models::schemas::user::{ClientSchema, UserSchema};

use crate::extractor::Json;
use crate::response::ApiErrorResponse;
use crate::{ApiResponse, error::ApiError};

/// The session's player, provided their account still exists.
async fn logged_in(state: &AppState, client: &ClientSchema) -> Result<UserSchema, ApiError> {
    let session_user = client.user.as_ref().ok_or(ScoreError::Unauthenticated)?;
    match get_user(&state.conn, &session_user.id).await? {
        Some(user) => Ok(UserSchema::from(user)),
        None => {
            tracing::warn!(user_id = %session_user.id, "Session refers to a deleted account");
            Err(ScoreError::Unauthenticated.into())
        }
    }
}

/// Adds the submitted points to the logged-in player's total for the game.
#[utoipa::path(
    post,
    path = "/scores",
    tag = "scores",
    request_body = SubmitScoreParams,
    responses(
        (status = 200, description = "New cumulative total; the message tells a first entry from an update", body = ApiResponse<ScoreSchema>),
        (status = 400, description = "Unknown game or out-of-range score", body = ApiErrorResponse),
        (status = 401, description = "Not logged in", body = ApiErrorResponse),
        (status = 500, description = "Storage failure, nothing was saved", body = ApiErrorResponse),
    )
)]
pub async fn scores_post(
    State(state): State<AppState>,
    Extension(client): Extension<ClientSchema>,
    Json(params): Json<SubmitScoreParams>,
) -> Result<impl IntoResponse, ApiError> {
    let user = logged_in(&state, &client).await?;
    let submitted = submit_score(&state.conn, &user, params).await?;
    let message = if submitted.created {
        "Score saved successfully!"
    } else {
        "Score updated successfully!"
    };

    Ok(Json(ApiResponse::success(
        message,
        Some(ScoreSchema::from(submitted.record)),
    )))
}

/// Leaderboard for one game; position in the array is the rank.
#[utoipa::path(
    get,
    path = "/scores",
    tag = "scores",
    params(LeaderboardQuery),
    responses(
        (status = 200, description = "Ranked entries, possibly empty", body = Vec<LeaderboardEntry>),
        (status = 400, description = "Unknown game", body = ApiErrorResponse),
        (status = 500, description = "Storage failure", body = ApiErrorResponse),
    )
)]
pub async fn scores_get(
    State(state): State<AppState>,
    Query(query): Query<LeaderboardQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let entries = get_leaderboard(&state.conn, query.game_name.as_deref()).await?;
    Ok(Json(entries))
}

#[utoipa::path(
    get,
    path = "/scores/me",
    tag = "scores",
    responses(
        (status = 200, description = "The caller's total per game", body = ApiResponse<Vec<ScoreSchema>>),
        (status = 401, description = "Not logged in", body = ApiErrorResponse),
    )
)]
pub async fn my_scores_get(
    State(state): State<AppState>,
    Extension(client): Extension<ClientSchema>,
) -> Result<impl IntoResponse, ApiError> {
    let user = logged_in(&state, &client).await?;
    let scores: Vec<ScoreSchema> = get_user_scores(&state.conn, &user.id)
        .await?
        .into_iter()
        .map(ScoreSchema::from)
        .collect();

    Ok(Json(ApiResponse::success(
        "Scores retrieved successfully",
        Some(scores),
    )))
}

pub fn create_score_router() -> Router<AppState> {
    Router::new()
        .route("/", get(scores_get).post(scores_post))
        .route("/me", get(my_scores_get))
}
