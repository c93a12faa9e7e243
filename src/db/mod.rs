use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{Pool, Postgres};
use tracing::warn;

use crate::error::DataError;

pub mod queries;

pub type DbPool = Pool<Postgres>;

/// Owned handle to the database connection. One caller, one lifecycle:
/// connect, use, disconnect. The pool also closes on drop, so every exit
/// path releases the connection.
pub struct Database {
    pool: DbPool,
}

impl Database {
    pub async fn connect(database_url: &str) -> Result<Self, DataError> {
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .connect(database_url)
            .await
            .map_err(DataError::Connect)?;
        Ok(Self { pool })
    }

    /// Returns false when the pool is closed or the probe query fails.
    pub async fn is_connected(&self) -> bool {
        if self.pool.is_closed() {
            return false;
        }
        match sqlx::query(queries::PROBE).execute(&self.pool).await {
            Ok(_) => true,
            Err(e) => {
                warn!("Connectivity probe failed: {}", e);
                false
            }
        }
    }

    /// Executes an arbitrary query string and returns the full result set.
    /// The caller supplies a complete, trusted query; no parameters are bound.
    pub async fn fetch_all(&self, query: &str) -> Result<Vec<PgRow>, DataError> {
        sqlx::query(query)
            .fetch_all(&self.pool)
            .await
            .map_err(DataError::Query)
    }

    pub async fn disconnect(self) {
        self.pool.close().await;
    }
}
