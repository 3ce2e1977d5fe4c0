//! Engagement metrics database queries

use super::Database;
use crate::models::AggregateMetrics;
use crate::models::EngagementRecord;
use crate::Result;

impl Database {
    /// Fetch all engagement records matching a post type
    ///
    /// The filter is a parameterized bind, never interpolated into the
    /// statement text.
    ///
    /// # Errors
    /// Returns an error if the database query fails.
    pub async fn engagement_by_type(&self, post_type: &str) -> Result<Vec<EngagementRecord>> {
        let records = sqlx::query_as::<_, EngagementRecord>(
            r"
            SELECT post_id, post_type, likes, shares, comments
            FROM engagement_records
            WHERE post_type = $1
            ORDER BY post_id
            ",
        )
        .bind(post_type)
        .fetch_all(self.pool())
        .await?;

        Ok(records)
    }

    /// Average likes, shares, and comments across records of one post type
    ///
    /// Returns `None` when no records match. "No data" is not an error;
    /// callers must check for it before generating insights.
    ///
    /// # Errors
    /// Returns an error if the database query fails.
    pub async fn aggregate_by_type(&self, post_type: &str) -> Result<Option<AggregateMetrics>> {
        let records = self.engagement_by_type(post_type).await?;
        tracing::debug!(
            "Aggregating {} records for post type {}",
            records.len(),
            post_type
        );
        Ok(AggregateMetrics::from_records(post_type, &records))
    }
}
