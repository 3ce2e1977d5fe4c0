//! CLI command definitions and argument parsing

use clap::Parser;
use clap::Subcommand;

#[derive(Parser)]
#[command(name = "socialpulse")]
#[command(about = "Engagement analytics with LLM-generated insights and hosted flow execution")]
#[command(version)]
pub struct Cli {
    /// Enable verbose debug logging (default: info level)
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the engagement records schema (idempotent)
    Init,
    /// Load engagement records from a JSON file into the database
    Load {
        /// Path to a file containing a JSON array of engagement records
        path: String,
    },
    /// Analyze engagement for a post type and generate LLM insights
    ///
    /// Reads the post type interactively from standard input.
    Analyze,
    /// Run a hosted flow with a given message and optional tweaks
    Flow {
        /// The message to send to the flow
        message: String,
        /// The ID or the endpoint name of the flow (defaults to the configured flow id)
        #[arg(long)]
        endpoint: Option<String>,
        /// JSON string representing the tweaks to customize the flow
        #[arg(long, default_value = "{}")]
        tweaks: String,
        /// Application token for authentication (defaults to the configured token)
        #[arg(long)]
        application_token: Option<String>,
        /// The output type
        #[arg(long, default_value = "chat")]
        output_type: String,
        /// The input type
        #[arg(long, default_value = "chat")]
        input_type: String,
        /// Path to the file to upload
        #[arg(long)]
        upload_file: Option<String>,
        /// Components to upload the file to
        #[arg(long)]
        components: Option<String>,
    },
    /// Show current configuration
    Config,
}
