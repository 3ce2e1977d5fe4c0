//! Hosted flow execution handler

use crate::config::AppConfig;
use crate::flow::parse_tweaks;
use crate::flow::FlowClient;
use crate::Result;
use crate::SocialPulseError;

/// Arguments for a flow run, mirroring the CLI surface
pub struct FlowRunArgs {
    pub message: String,
    pub endpoint: Option<String>,
    pub tweaks: String,
    pub application_token: Option<String>,
    pub output_type: String,
    pub input_type: String,
    pub upload_file: Option<String>,
    pub components: Option<String>,
}

/// Run a hosted flow and print its JSON response verbatim
///
/// All input validation happens before any network call: malformed tweaks
/// JSON and an upload file without target components are both fatal.
///
/// # Errors
/// - Invalid tweaks JSON
/// - `--upload-file` without `--components`, or file upload in general
///   (requires the hosted flow helper, which this tool does not bundle)
/// - Flow request or response parsing errors
pub async fn handle_flow_command(config: &AppConfig, args: FlowRunArgs) -> Result<()> {
    let tweaks = parse_tweaks(&args.tweaks)?;

    if let Some(upload_file) = args.upload_file.as_deref() {
        if args.components.is_none() {
            return Err(SocialPulseError::InvalidInput(
                "You need to provide the components to upload the file to.".to_string(),
            ));
        }
        return Err(SocialPulseError::InvalidInput(format!(
            "File upload ({upload_file}) requires the hosted flow helper, which is not bundled."
        )));
    }

    let client = FlowClient::from_config(config)?;
    let endpoint = args.endpoint.as_deref().unwrap_or_else(|| config.flow_id());
    let token = args
        .application_token
        .as_deref()
        .or_else(|| config.flow_application_token());
    let tweaks_ref = if tweaks.is_empty() { None } else { Some(&tweaks) };

    let response = client
        .run(
            &args.message,
            endpoint,
            &args.output_type,
            &args.input_type,
            tweaks_ref,
            token,
        )
        .await?;

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
