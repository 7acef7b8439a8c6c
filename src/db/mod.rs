pub mod bootstrap;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use crate::config::Config;

/// Opens the store handle shared by every handler.
pub async fn create_pool(config: &Config) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
}
