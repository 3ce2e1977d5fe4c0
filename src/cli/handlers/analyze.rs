//! Interactive engagement analysis and insight generation

use std::io::Write;

use crate::models::PostType;
use crate::Result;
use crate::SocialPulse;

/// Prompt for a post type on stdin, aggregate its engagement, and generate
/// LLM insights
///
/// A post type outside the allow-set prints a message and returns without
/// error, and no database query is issued. A post type with no stored
/// records prints a "no data" message; the LLM is never called in that case.
///
/// # Errors
/// - stdin read errors
/// - Database query errors
/// - LLM API call errors
pub async fn handle_analyze_command(pulse: &SocialPulse) -> Result<()> {
    print!("Enter post type (carousel, reels, static): ");
    std::io::stdout().flush()?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;

    let post_type: PostType = match input.parse() {
        Ok(post_type) => post_type,
        Err(_) => {
            println!("Invalid post type entered. Please choose from carousel, reels, or static.");
            return Ok(());
        }
    };

    println!("\nAnalyzing performance for post type: {post_type}...");

    let generator = pulse.insight_generator()?;
    let Some(metrics) = generator.aggregate(post_type.as_str()).await? else {
        println!("No data found for post type: {post_type}");
        return Ok(());
    };

    println!(
        "Metrics for {}: average likes {:.2}, average shares {:.2}, average comments {:.2}",
        post_type, metrics.average_likes, metrics.average_shares, metrics.average_comments
    );

    let insights = generator.generate_for_metrics(&metrics).await?;
    println!("\nGenerated Insights:\n{insights}");

    Ok(())
}
