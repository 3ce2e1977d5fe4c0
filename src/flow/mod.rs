//! Hosted flow execution layer

mod client;

pub use client::parse_tweaks;
pub use client::FlowClient;
pub use client::Tweaks;
