use migration::{Migrator, MigratorTrait, SchemaManager};
use sea_orm::{DatabaseConnection, DbErr};

pub async fn migrate(conn: &DatabaseConnection) -> Result<(), DbErr> {
    let schema_manager = SchemaManager::new(conn);
    Migrator::up(conn, None).await?;
    if !schema_manager.has_table("users").await? || !schema_manager.has_table("scores").await? {
        return Err(DbErr::Migration("schema is missing after migration".to_string()));
    }
    tracing::info!("Database schema is up to date");
    Ok(())
}
