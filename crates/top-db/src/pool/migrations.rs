//! Embedded schema migrations

use sqlx::migrate::MigrateError;
use sqlx::PgPool;

/// Apply every pending migration from the crate's `migrations/` directory
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
