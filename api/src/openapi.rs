use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Arcadia API",
        version = "0.1.0",
        description = "Accounts, sessions and per-game leaderboards for the Arcadia game portal",
        license(name = "MIT"),
    ),
    paths(
        crate::routers::auth::register_post,
        crate::routers::auth::login_post,
        crate::routers::auth::logout_post,
        crate::routers::auth::me_get,
        crate::routers::game::games_get,
        crate::routers::score::scores_post,
        crate::routers::score::scores_get,
        crate::routers::score::my_scores_get,
    ),
    components(
        schemas(
            crate::response::ApiErrorResponse,
            models::schemas::user::UserSchema,
            models::schemas::user::ClientSchema,
            models::schemas::game::GameSchema,
            models::schemas::score::ScoreSchema,
            models::schemas::score::LeaderboardEntry,
            models::params::user::CreateUserParams,
            models::params::user::LoginUserParams,
            models::params::score::SubmitScoreParams,
        )
    ),
    tags(
        (name = "auth", description = "Registration and session login"),
        (name = "games", description = "Game registry"),
        (name = "scores", description = "Score ledger and leaderboards"),
    )
)]
pub struct ApiDoc;
