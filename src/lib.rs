//! `socialpulse` - social media engagement analytics with LLM insights
//!
//! `socialpulse` stores per-post engagement metrics (likes, shares,
//! comments) in `PostgreSQL`, aggregates them by post type, and asks an LLM
//! to turn the aggregates into actionable prose insights. An independent
//! `flow` path forwards a raw message to a hosted Langflow execution
//! endpoint and returns the provider's JSON verbatim.
//!
//! # Quick Start
//!
//! Create `config.toml` from `config.example.toml` and set your database
//! URL, then:
//!
//! ```rust,no_run
//! use socialpulse::{AppConfig, SocialPulse};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::load()?;
//!     let pulse = SocialPulse::new(&config).await?;
//!
//!     // Initialize schema (idempotent)
//!     pulse.init_database().await?;
//!
//!     // Aggregate and generate insights
//!     let generator = pulse.insight_generator()?;
//!     if let Some(insights) = generator.generate("carousel").await? {
//!         println!("{insights}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                CLI Layer                    │
//! ├─────────────────────────────────────────────┤
//! │  SocialPulse (High-level Interface)         │
//! ├──────────────────────┬──────────────────────┤
//! │  Insight Generator   │     Flow Client      │
//! ├──────────────────────┤   (independent path) │
//! │     LLM Client       │                      │
//! ├──────────────────────┴──────────────────────┤
//! │              Database Layer                 │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Every remote call is a single awaited request/response exchange: no
//! fan-out, no background work, no retries.

pub mod cli;
pub mod config;
pub mod database;
pub mod errors;
pub mod flow;
pub mod insights;
pub mod llm;
pub mod logging;
pub mod models;

pub use config::AppConfig;
pub use database::Database;
pub use errors::Result;
pub use errors::SocialPulseError;
pub use flow::FlowClient;
pub use insights::InsightGenerator;
pub use llm::LlmClient;
pub use models::AggregateMetrics;
pub use models::EngagementRecord;
pub use models::PostType;

/// High-level interface tying configuration and database together
pub struct SocialPulse {
    config: AppConfig,
    database: Database,
}

impl SocialPulse {
    /// Create a new instance from configuration
    ///
    /// # Errors
    /// - Database connection errors
    pub async fn new(config: &AppConfig) -> Result<Self> {
        let database = Database::from_config(config).await?;
        Ok(Self {
            config: config.clone(),
            database,
        })
    }

    /// Idempotently initialize the database schema
    ///
    /// # Errors
    /// - Database DDL errors
    pub async fn init_database(&self) -> Result<()> {
        self.database.init_schema().await
    }

    /// Access the underlying database
    #[must_use]
    pub const fn database(&self) -> &Database {
        &self.database
    }

    /// Bulk-insert engagement records with the default embedding-string
    /// strategy
    ///
    /// # Errors
    /// - Database insert errors
    pub async fn load_records(&self, records: &[EngagementRecord]) -> Result<u64> {
        self.database
            .insert_records(records, EngagementRecord::embedding_text)
            .await
    }

    /// Build an insight generator over this instance's database
    ///
    /// # Errors
    /// - LLM client construction errors
    pub fn insight_generator(&self) -> Result<InsightGenerator> {
        InsightGenerator::from_config(&self.config, self.database.clone())
    }
}
