//! Bulk loading of engagement records from JSON files

use crate::models::EngagementRecord;
use crate::Result;
use crate::SocialPulse;

/// Load a JSON array of engagement records and insert them
///
/// Each record is written with the default embedding-string strategy so the
/// storage provider can derive a vector embedding from it.
///
/// # Errors
/// - File I/O errors
/// - JSON parsing errors (file is not an array of records)
/// - Database insert errors
pub async fn handle_load_command(pulse: &SocialPulse, path: &str) -> Result<()> {
    let content = std::fs::read_to_string(path)?;
    let records: Vec<EngagementRecord> = serde_json::from_str(&content)?;
    tracing::debug!("Parsed {} records from {}", records.len(), path);

    let written = pulse.load_records(&records).await?;
    println!("Inserted {written} items.");
    Ok(())
}
