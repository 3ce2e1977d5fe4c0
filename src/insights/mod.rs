//! Insight generation from aggregated engagement metrics
//!
//! Renders aggregated metrics into a fixed natural-language prompt and asks
//! the configured LLM for actionable insights.

mod generator;

pub use generator::InsightGenerator;

use crate::models::AggregateMetrics;

/// System instruction sent with every insight request
pub const INSIGHT_SYSTEM_PROMPT: &str =
    "You are an assistant generating insights from social media performance metrics.";

/// Render aggregated metrics into the insight prompt
///
/// Pure and deterministic: identical metrics always produce an identical
/// prompt string.
#[must_use]
pub fn build_insight_prompt(metrics: &AggregateMetrics) -> String {
    format!(
        "Analyze the following social media engagement metrics:\n\
         Post Type: {}\n\
         Average Likes: {}\n\
         Average Shares: {}\n\
         Average Comments: {}\n\
         Provide actionable insights based on the performance.",
        metrics.post_type, metrics.average_likes, metrics.average_shares, metrics.average_comments
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> AggregateMetrics {
        AggregateMetrics {
            post_type: "carousel".to_string(),
            average_likes: 175.0,
            average_shares: 25.0,
            average_comments: 35.0,
        }
    }

    #[test]
    fn test_prompt_contains_all_fields() {
        let prompt = build_insight_prompt(&metrics());
        assert!(prompt.contains("Post Type: carousel"));
        assert!(prompt.contains("Average Likes: 175"));
        assert!(prompt.contains("Average Shares: 25"));
        assert!(prompt.contains("Average Comments: 35"));
        assert!(prompt.starts_with("Analyze the following social media engagement metrics:"));
        assert!(prompt.ends_with("Provide actionable insights based on the performance."));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        assert_eq!(build_insight_prompt(&metrics()), build_insight_prompt(&metrics()));
    }
}
