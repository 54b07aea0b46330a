use anyhow::Context;

use api::{setup_config, setup_db, setup_router};
use utils::{create_dev_db, migrate};

/// Loads configuration, brings the schema up to date and serves the API
/// until the listener fails.
pub async fn run() -> anyhow::Result<()> {
    let config = setup_config()?;

    create_dev_db(&config.db_url).context("Failed to create the development database")?;
    let conn = setup_db(&config.db_url)
        .await
        .context("Database connection failed")?;
    migrate(&conn).await.context("Migration failed")?;

    let listener = tokio::net::TcpListener::bind(config.get_server_url())
        .await
        .context("bind to port")?;
    tracing::info!("listening on http://{}", listener.local_addr()?);

    let router = setup_router(config, conn)?;
    axum::serve(listener, router).await.context("start server")?;

    Ok(())
}
