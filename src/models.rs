//! Core data types for engagement analytics

use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

/// A single stored engagement record for one social media post
///
/// Created by bulk insert and immutable thereafter; there is no deletion
/// path. Duplicate `post_id`s are resolved last-write-wins at insert time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct EngagementRecord {
    pub post_id: i32,
    pub post_type: String,
    pub likes: i32,
    pub shares: i32,
    pub comments: i32,
}

impl EngagementRecord {
    /// Default embedding-string strategy: the text from which the storage
    /// provider derives a vector embedding for this record
    #[must_use]
    pub fn embedding_text(&self) -> String {
        format!(
            "post_type: {}, likes: {}, shares: {}, comments: {}",
            self.post_type, self.likes, self.shares, self.comments
        )
    }
}

/// Average engagement metrics for one post type
///
/// Derived and ephemeral: recomputed on every query, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateMetrics {
    pub post_type: String,
    pub average_likes: f64,
    pub average_shares: f64,
    pub average_comments: f64,
}

impl AggregateMetrics {
    /// Fold a set of records into arithmetic means of the three counters
    ///
    /// Returns `None` when `records` is empty: no data for this post type,
    /// which callers must not conflate with zero engagement.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Engagement counts stay far below 2^52
    pub fn from_records(post_type: &str, records: &[EngagementRecord]) -> Option<Self> {
        if records.is_empty() {
            return None;
        }

        let mut total_likes: i64 = 0;
        let mut total_shares: i64 = 0;
        let mut total_comments: i64 = 0;
        for record in records {
            total_likes += i64::from(record.likes);
            total_shares += i64::from(record.shares);
            total_comments += i64::from(record.comments);
        }

        let count = records.len() as f64;
        Some(Self {
            post_type: post_type.to_string(),
            average_likes: total_likes as f64 / count,
            average_shares: total_shares as f64 / count,
            average_comments: total_comments as f64 / count,
        })
    }
}

/// The fixed set of post categories accepted on the interactive path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostType {
    Carousel,
    Reels,
    Static,
}

impl PostType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Carousel => "carousel",
            Self::Reels => "reels",
            Self::Static => "static",
        }
    }
}

impl FromStr for PostType {
    type Err = crate::SocialPulseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "carousel" => Ok(Self::Carousel),
            "reels" => Ok(Self::Reels),
            "static" => Ok(Self::Static),
            other => Err(crate::SocialPulseError::InvalidInput(format!(
                "Invalid post type '{other}'. Please choose from carousel, reels, or static."
            ))),
        }
    }
}

impl std::fmt::Display for PostType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(post_id: i32, post_type: &str, likes: i32, shares: i32, comments: i32) -> EngagementRecord {
        EngagementRecord {
            post_id,
            post_type: post_type.to_string(),
            likes,
            shares,
            comments,
        }
    }

    #[test]
    fn test_aggregate_arithmetic_means() {
        let records = vec![
            record(1, "carousel", 150, 20, 30),
            record(5, "carousel", 200, 30, 40),
        ];

        let metrics = AggregateMetrics::from_records("carousel", &records)
            .expect("non-empty input yields metrics");
        assert_eq!(metrics.post_type, "carousel");
        assert_eq!(metrics.average_likes, 175.0);
        assert_eq!(metrics.average_shares, 25.0);
        assert_eq!(metrics.average_comments, 35.0);
    }

    #[test]
    fn test_aggregate_single_record() {
        let records = vec![record(2, "reels", 300, 50, 100)];
        let metrics = AggregateMetrics::from_records("reels", &records).unwrap();
        assert_eq!(metrics.average_likes, 300.0);
        assert_eq!(metrics.average_shares, 50.0);
        assert_eq!(metrics.average_comments, 100.0);
    }

    #[test]
    fn test_aggregate_empty_is_none() {
        assert!(AggregateMetrics::from_records("carousel", &[]).is_none());
    }

    #[test]
    fn test_post_type_parsing() {
        assert_eq!("carousel".parse::<PostType>().unwrap(), PostType::Carousel);
        assert_eq!(" Reels \n".parse::<PostType>().unwrap(), PostType::Reels);
        assert_eq!("STATIC".parse::<PostType>().unwrap(), PostType::Static);
    }

    #[test]
    fn test_post_type_rejects_unknown() {
        assert!("story".parse::<PostType>().is_err());
        assert!("".parse::<PostType>().is_err());
    }

    #[test]
    fn test_embedding_text_format() {
        let r = record(1, "carousel", 150, 20, 30);
        assert_eq!(
            r.embedding_text(),
            "post_type: carousel, likes: 150, shares: 20, comments: 30"
        );
    }
}
