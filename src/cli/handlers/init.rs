//! Database initialization handler

use crate::Result;
use crate::SocialPulse;

/// Ensure the engagement records schema exists
///
/// # Errors
/// - Database connection or DDL errors
pub async fn handle_init_command(pulse: &SocialPulse) -> Result<()> {
    pulse.init_database().await?;
    println!("Engagement records schema initialized.");
    Ok(())
}
