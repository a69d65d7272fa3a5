use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};

use crate::error::AppResult;

/// Opens the SQLite database and brings the schema up to date.
pub async fn connect_and_migrate(database_url: &str) -> AppResult<DatabaseConnection> {
    let mut opts = ConnectOptions::new(database_url.to_string());
    // One connection: statements run one at a time and `:memory:` databases
    // stay alive for the lifetime of the pool.
    opts.max_connections(1)
        .min_connections(1)
        .sqlx_logging(false)
        // Movie foreign keys are declared but never enforced.
        .map_sqlx_sqlite_opts(|o| o.foreign_keys(false));

    let db = Database::connect(opts).await?;

    if !database_url.contains(":memory:") {
        pragma(&db, "journal_mode=WAL").await?;
    }
    pragma(&db, "synchronous=NORMAL").await?;

    Migrator::up(&db, None).await?;
    tracing::debug!("schema migrations applied");

    Ok(db)
}

async fn pragma(db: &DatabaseConnection, setting: &str) -> AppResult<()> {
    db.execute(Statement::from_string(db.get_database_backend(), format!("PRAGMA {setting}")))
        .await?;
    Ok(())
}
