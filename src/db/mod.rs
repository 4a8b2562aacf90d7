use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use crate::config::DatabaseConfig;
use crate::models::*;

/// Connection pool shared by every request handler.
///
/// Built once at startup and handed to the router as state. Call
/// [`Database::close`] on shutdown so in-flight queries finish before the
/// connections are dropped.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn connect(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(&config.url)?;

        let pool = SqlitePoolOptions::new()
            .max_connections(config.pool_size)
            .connect_with(options)
            .await?;

        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Waits for checked-out connections to be returned, then closes them all.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

// Team queries
pub async fn count_teams(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    tracing::debug!("Counting teams");
    sqlx::query_scalar::<_, i64>(
        r#"SELECT COUNT(*) FROM football"#
    )
    .fetch_one(pool)
    .await
}

// `next_game` is cast to TEXT so stores keeping it as an INTEGER timestamp
// still decode; NULL stays NULL.
pub async fn get_all_teams(pool: &SqlitePool, page: Option<Pagination>) -> Result<Vec<Team>, sqlx::Error> {
    tracing::debug!(?page, "Fetching teams");
    match page {
        Some(page) => {
            sqlx::query_as::<_, Team>(
                r#"SELECT id, team_name, stadium, CAST(next_game AS TEXT) AS next_game, team_url
                   FROM football
                   ORDER BY id
                   LIMIT ? OFFSET ?"#
            )
            .bind(page.num_items)
            .bind(page.offset)
            .fetch_all(pool)
            .await
        }
        None => {
            sqlx::query_as::<_, Team>(
                r#"SELECT id, team_name, stadium, CAST(next_game AS TEXT) AS next_game, team_url
                   FROM football
                   ORDER BY id"#
            )
            .fetch_all(pool)
            .await
        }
    }
}

pub async fn get_team_by_id(pool: &SqlitePool, team_id: i64) -> Result<Option<Team>, sqlx::Error> {
    sqlx::query_as::<_, Team>(
        r#"SELECT id, team_name, stadium, CAST(next_game AS TEXT) AS next_game, team_url
           FROM football
           WHERE id = ?"#
    )
    .bind(team_id)
    .fetch_optional(pool)
    .await
}
