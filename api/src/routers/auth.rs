use axum::{
    Extension, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tower_sessions::Session;

use app::persistence::users::{create_user, login_user};
use app::state::AppState;
use models::params::user::{CreateUserParams, LoginUserParams};
use models::schemas::user::{ClientSchema, UserSchema};

use crate::extractor::{Json, Valid};
use crate::middleware::session::save_client;
use crate::response::ApiErrorResponse;
use crate::{ApiResponse, error::ApiError};

/// Creates an account. The caller still has to log in afterwards.
#[utoipa::path(
    post,
    path = "/auth/register",
    tag = "auth",
    request_body = CreateUserParams,
    responses(
        (status = 201, description = "Account created", body = ApiResponse<UserSchema>),
        (status = 400, description = "Missing or invalid fields", body = ApiErrorResponse),
        (status = 409, description = "Username or email taken", body = ApiErrorResponse),
    )
)]
pub async fn register_post(
    State(state): State<AppState>,
    Valid(Json(params)): Valid<Json<CreateUserParams>>,
) -> Result<impl IntoResponse, ApiError> {
    let user = create_user(&state.conn, params, state.config.password_hash_cost).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Registration successful.",
            Some(UserSchema::from(user)),
        )),
    ))
}

#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body = LoginUserParams,
    responses(
        (status = 200, description = "Logged in", body = ApiResponse<UserSchema>),
        (status = 401, description = "Invalid username or password", body = ApiErrorResponse),
    )
)]
pub async fn login_post(
    State(state): State<AppState>,
    session: Session,
    Extension(mut client): Extension<ClientSchema>,
    Valid(Json(params)): Valid<Json<LoginUserParams>>,
) -> Result<impl IntoResponse, ApiError> {
    let user = login_user(&state.conn, params).await?;

    // New identity, new session id.
    session.cycle_id().await?;
    client.update(Some(user));
    save_client(&session, &client).await?;

    Ok(Json(ApiResponse::success("Login successful.", client.user)))
}

#[utoipa::path(
    post,
    path = "/auth/logout",
    tag = "auth",
    responses((status = 200, description = "Logged out", body = ApiResponse<UserSchema>))
)]
pub async fn logout_post(
    session: Session,
    Extension(mut client): Extension<ClientSchema>,
) -> Result<impl IntoResponse, ApiError> {
    if client.user.is_some() {
        client.update(None);
        save_client(&session, &client).await?;
        session.cycle_id().await?;
    }

    Ok(Json(ApiResponse::<()>::success(
        "Logged out successfully.",
        None,
    )))
}

#[utoipa::path(
    get,
    path = "/auth/me",
    tag = "auth",
    responses((status = 200, description = "Current client session", body = ClientSchema))
)]
pub async fn me_get(
    Extension(client_state): Extension<ClientSchema>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(client_state))
}

pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login_post))
        .route("/logout", post(logout_post))
        .route("/register", post(register_post))
        .route("/me", get(me_get))
}
