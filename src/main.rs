// Entrypoint for the CLI application.
// - Keeps `main` small: resolve the API key, build the Gemini client
//   and hand it to the UI loop.
// - Returns `anyhow::Result` to simplify error handling for the
//   prototype.

use bridgegap_cli::api::{GeminiClient, ModelConfig};
use bridgegap_cli::credentials;
use bridgegap_cli::ui::main_menu;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr and stay quiet unless RUST_LOG says
    // otherwise; stdout belongs to the interactive flow.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // The key gates everything: without one there is no client and no
    // request path, so the session ends here.
    let Some(api_key) = credentials::resolve_credential(&credentials::default_sources()) else {
        println!("Please provide a Google API key to begin.");
        return Ok(());
    };

    // Model name and endpoint come from the environment with defaults.
    // See `api::ModelConfig::from_env`.
    let client = GeminiClient::new(ModelConfig::from_env(), api_key)?;
    tracing::info!(model = client.model(), "client ready");

    // Start the interactive menu. This call blocks until the user exits.
    main_menu(&client)?;
    Ok(())
}
