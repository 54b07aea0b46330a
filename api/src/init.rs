use anyhow::Context;
use axum::Router;
use axum::http::{HeaderValue, Method, header};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tower_sessions::cookie::time::Duration;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use app::config::Config;
use app::state::AppState;

use crate::middleware::session;
use crate::openapi::ApiDoc;
use crate::routers::create_router;

pub fn setup_router(config: Config, conn: DatabaseConnection) -> anyhow::Result<Router> {
    let allowed_origin = config
        .allowed_origin
        .parse::<HeaderValue>()
        .context("Failed to parse allowed origin")?;

    let cors = CorsLayer::new()
        .allow_methods([Method::OPTIONS, Method::GET, Method::POST])
        .allow_headers([header::ACCEPT, header::CONTENT_TYPE])
        .allow_origin(allowed_origin)
        .allow_credentials(true);

    let session_store = MemoryStore::default();

    let session_layer = SessionManagerLayer::new(session_store)
        .with_http_only(true)
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(config.session_days)));

    // Outermost layer last: the session layer has to run before `client_session`.
    let router = create_router(AppState { conn, config })
        .merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(axum::middleware::from_fn(session::client_session))
        .layer(session_layer)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    Ok(router)
}

pub fn setup_config() -> anyhow::Result<Config> {
    Config::from_env()
}

pub async fn setup_db(db_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(db_url);
    opt.max_lifetime(std::time::Duration::from_secs(60))
        .min_connections(1)
        .max_connections(100)
        .sqlx_logging(false);

    Database::connect(opt).await
}
