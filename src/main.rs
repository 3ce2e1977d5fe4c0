use clap::Parser;
use socialpulse::cli::handlers::flow::FlowRunArgs;
use socialpulse::cli::Cli;
use socialpulse::cli::Commands;
use socialpulse::AppConfig;
use socialpulse::Result;
use socialpulse::SocialPulse;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        socialpulse::logging::init_logging_with_level("debug")?;
    } else {
        socialpulse::logging::init_logging()?;
    }

    // Load configuration
    let config = AppConfig::load()?;
    tracing::debug!("Configuration loaded successfully");

    // The flow and config commands never touch the database; only connect
    // for the commands that need it
    match cli.command {
        Commands::Init => {
            let pulse = SocialPulse::new(&config).await?;
            socialpulse::cli::handle_init_command(&pulse).await?;
        }
        Commands::Load { path } => {
            let pulse = SocialPulse::new(&config).await?;
            pulse.init_database().await?;
            socialpulse::cli::handle_load_command(&pulse, &path).await?;
        }
        Commands::Analyze => {
            let pulse = SocialPulse::new(&config).await?;
            socialpulse::cli::handle_analyze_command(&pulse).await?;
        }
        Commands::Flow {
            message,
            endpoint,
            tweaks,
            application_token,
            output_type,
            input_type,
            upload_file,
            components,
        } => {
            socialpulse::cli::handle_flow_command(
                &config,
                FlowRunArgs {
                    message,
                    endpoint,
                    tweaks,
                    application_token,
                    output_type,
                    input_type,
                    upload_file,
                    components,
                },
            )
            .await?;
        }
        Commands::Config => {
            socialpulse::cli::handle_config_command(&config)?;
        }
    }

    Ok(())
}
