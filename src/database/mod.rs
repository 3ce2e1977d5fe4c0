//! Database layer for `PostgreSQL` operations
//!
//! Stores engagement records in a single `engagement_records` relation and
//! exposes schema initialization, bulk insert, and filtered aggregate
//! queries. Connection pooling is managed by `sqlx::PgPool` with
//! configurable max/min connections and acquire timeout.
//!
//! Any connection or authentication failure propagates to the caller as a
//! fatal error; there are no retries and no partial results.

use sqlx::PgPool;

use crate::models::EngagementRecord;
use crate::Result;

mod engagement;

/// Database connection pool wrapper
///
/// This type is `Clone` and thread-safe. Cloning creates a new reference to
/// the same connection pool (cheap operation).
#[derive(Debug, Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Create a new database instance with an existing pool
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new database instance from configuration
    ///
    /// # Errors
    /// Returns an error if the database connection fails or the
    /// configuration is invalid.
    pub async fn from_config(config: &crate::config::AppConfig) -> Result<Self> {
        let pool_options = sqlx::postgres::PgPoolOptions::new()
            .max_connections(config.max_connections())
            .min_connections(config.min_connections())
            .acquire_timeout(std::time::Duration::from_secs(config.connection_timeout()));

        let pool = pool_options.connect(config.database_url()).await?;

        tracing::debug!(
            "Database pool configured: max_connections={}, min_connections={}",
            config.max_connections(),
            config.min_connections()
        );

        Ok(Self::new(pool))
    }

    /// Access the underlying pool
    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Idempotently ensure the engagement records relation exists
    ///
    /// # Errors
    /// Returns an error if the DDL statement fails.
    pub async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS engagement_records (
                post_id INT PRIMARY KEY,
                post_type TEXT NOT NULL,
                likes INT NOT NULL,
                shares INT NOT NULL,
                comments INT NOT NULL,
                vectorize TEXT
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        tracing::debug!("engagement_records schema ensured");
        Ok(())
    }

    /// Insert engagement records, one write per record, last-write-wins on
    /// duplicate `post_id`
    ///
    /// `embedding_text` produces the text from which the storage provider
    /// derives a vector embedding for each record; it is stored alongside
    /// the numeric fields. There is no transactional batching across
    /// records: a failure part-way leaves earlier rows written.
    ///
    /// # Errors
    /// Returns an error if any individual insert fails.
    pub async fn insert_records<F>(
        &self,
        records: &[EngagementRecord],
        embedding_text: F,
    ) -> Result<u64>
    where
        F: Fn(&EngagementRecord) -> String,
    {
        let mut written: u64 = 0;
        for record in records {
            sqlx::query(
                r"
                INSERT INTO engagement_records (post_id, post_type, likes, shares, comments, vectorize)
                VALUES ($1, $2, $3, $4, $5, $6)
                ON CONFLICT (post_id) DO UPDATE SET
                    post_type = EXCLUDED.post_type,
                    likes = EXCLUDED.likes,
                    shares = EXCLUDED.shares,
                    comments = EXCLUDED.comments,
                    vectorize = EXCLUDED.vectorize
                ",
            )
            .bind(record.post_id)
            .bind(&record.post_type)
            .bind(record.likes)
            .bind(record.shares)
            .bind(record.comments)
            .bind(embedding_text(record))
            .execute(&self.pool)
            .await?;
            written += 1;
        }

        tracing::info!("Inserted {} engagement records", written);
        Ok(written)
    }
}
