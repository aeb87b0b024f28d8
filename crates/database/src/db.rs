use log::info;
use migration::MigratorTrait;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Creates a database connection
///
/// In-memory SQLite databases are limited to a single pooled connection so
/// every query sees the same database.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut opts = ConnectOptions::new(database_url);
    opts.sqlx_logging(false);

    if database_url.contains(":memory:") {
        opts.max_connections(1).min_connections(1);
    }

    Database::connect(opts).await
}

/// Connects and creates any missing tables owned by the migrator `M`
pub async fn init<M: MigratorTrait>(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = create_connection(database_url).await?;

    let pending = M::get_pending_migrations(&db).await?.len();
    M::up(&db, None).await?;
    info!("Database ready ({pending} migration(s) applied)");

    Ok(db)
}
