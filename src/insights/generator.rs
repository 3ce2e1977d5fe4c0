//! Insight generation orchestration

use tracing::debug;
use tracing::info;

use crate::database::Database;
use crate::insights::build_insight_prompt;
use crate::insights::INSIGHT_SYSTEM_PROMPT;
use crate::llm::ChatMessage;
use crate::llm::LlmClient;
use crate::models::AggregateMetrics;
use crate::Result;

/// Generates prose insights for a post type's aggregated engagement
pub struct InsightGenerator {
    database: Database,
    llm: LlmClient,
    temperature: f32,
    max_tokens: usize,
}

impl InsightGenerator {
    #[must_use]
    pub const fn new(
        database: Database,
        llm: LlmClient,
        temperature: f32,
        max_tokens: usize,
    ) -> Self {
        Self {
            database,
            llm,
            temperature,
            max_tokens,
        }
    }

    /// Create a generator from application configuration
    ///
    /// # Errors
    /// - LLM client construction errors (unknown provider, HTTP client)
    pub fn from_config(config: &crate::config::AppConfig, database: Database) -> Result<Self> {
        let llm = LlmClient::from_config(config)?;
        Ok(Self::new(
            database,
            llm,
            config.llm_temperature(),
            config.llm_max_tokens(),
        ))
    }

    /// Aggregate engagement for a post type
    ///
    /// Returns `Ok(None)` when no records match.
    ///
    /// # Errors
    /// - Database query errors
    pub async fn aggregate(&self, post_type: &str) -> Result<Option<AggregateMetrics>> {
        self.database.aggregate_by_type(post_type).await
    }

    /// Generate insights for aggregated metrics
    ///
    /// # Errors
    /// - LLM API call errors (network, authentication, quota)
    pub async fn generate_for_metrics(&self, metrics: &AggregateMetrics) -> Result<String> {
        let prompt = build_insight_prompt(metrics);
        debug!("Insight prompt:\n{}", prompt);

        let messages = vec![
            ChatMessage::system(INSIGHT_SYSTEM_PROMPT),
            ChatMessage::user(prompt),
        ];

        let response = self
            .llm
            .chat(messages, self.temperature, self.max_tokens)
            .await?;

        Ok(response.trim().to_string())
    }

    /// Aggregate a post type and generate insights in one step
    ///
    /// Returns `Ok(None)` when no records match the post type; the LLM is
    /// never called in that case.
    ///
    /// # Errors
    /// - Database query errors
    /// - LLM API call errors
    pub async fn generate(&self, post_type: &str) -> Result<Option<String>> {
        let Some(metrics) = self.aggregate(post_type).await? else {
            info!("No data found for post type: {}", post_type);
            return Ok(None);
        };

        debug!("Metrics for {}: {:?}", post_type, metrics);
        let insights = self.generate_for_metrics(&metrics).await?;
        Ok(Some(insights))
    }
}
