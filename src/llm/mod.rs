//! LLM integration layer

mod client;

pub use client::ChatMessage;
pub use client::LlmClient;
pub use client::LlmProvider;
