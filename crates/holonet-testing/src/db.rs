//! In-memory SQLite databases with the production migrations applied.

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;

use holonet_favorites_migration::Migrator;

/// Open a fresh in-memory SQLite database.
///
/// The pool is pinned to a single connection: every SQLite `:memory:`
/// connection is its own database.
pub async fn memory_db() -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    Database::connect(options).await
}

/// Open a fresh in-memory SQLite database and run every favorites migration on it.
pub async fn migrated_memory_db() -> Result<DatabaseConnection, DbErr> {
    let db = memory_db().await?;
    Migrator::up(&db, None).await?;
    Ok(db)
}
