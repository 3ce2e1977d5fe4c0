//! Configuration display handler

use crate::config::AppConfig;
use crate::Result;

/// Print the resolved configuration, with secrets masked
///
/// # Errors
/// - TOML serialization errors
pub fn handle_config_command(config: &AppConfig) -> Result<()> {
    let mut shown = config.clone();
    if shown.llm.llm_key.is_some() {
        shown.llm.llm_key = Some("***".to_string());
    }
    if shown.flow.application_token.is_some() {
        shown.flow.application_token = Some("***".to_string());
    }

    let rendered = toml::to_string_pretty(&shown)
        .map_err(|e| crate::SocialPulseError::ConfigError(e.to_string()))?;
    println!("{rendered}");
    Ok(())
}
