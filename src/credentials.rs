// Credential resolution for the Gemini API key. Sources are tried in a
// fixed order and the first one that yields a real value wins:
//   1. the `GOOGLE_API_KEY` environment variable,
//   2. a key file in the user's home directory,
//   3. an interactive masked prompt as a last resort.
// The chain is a plain list of trait objects so the resolution policy
// can be exercised in tests with fake sources, without a terminal.

use crossterm::style::Stylize;
use dialoguer::Password;
use std::path::PathBuf;

/// Environment variable checked first.
pub const KEY_ENV_VAR: &str = "GOOGLE_API_KEY";

/// File name under the home directory checked second.
pub const KEY_FILE_NAME: &str = ".bridgegap_key";

/// One place a credential might come from.
pub trait CredentialSource {
    /// Short name used in diagnostics.
    fn label(&self) -> &str;

    /// Try to produce a key. `None` means "not here, try the next one";
    /// read errors and interrupted prompts also count as `None`.
    fn resolve(&self) -> Option<String>;
}

/// Reads the key from the `GOOGLE_API_KEY` environment variable.
pub struct EnvKeySource;

impl CredentialSource for EnvKeySource {
    fn label(&self) -> &str {
        "environment"
    }

    fn resolve(&self) -> Option<String> {
        std::env::var(KEY_ENV_VAR).ok()
    }
}

/// Reads the key from `~/.bridgegap_key`. The file is only ever read:
/// a key typed interactively is not written back anywhere.
pub struct KeyFileSource;

impl CredentialSource for KeyFileSource {
    fn label(&self) -> &str {
        "key file"
    }

    fn resolve(&self) -> Option<String> {
        let dir = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        std::fs::read_to_string(dir.join(KEY_FILE_NAME)).ok()
    }
}

/// Asks the user directly, masking the input like a password field.
/// Leaving the prompt empty ends the resolution chain.
pub struct PromptKeySource;

impl CredentialSource for PromptKeySource {
    fn label(&self) -> &str {
        "interactive prompt"
    }

    fn resolve(&self) -> Option<String> {
        println!(
            "{}",
            format!("API key not found in the environment or ~/{KEY_FILE_NAME}.").yellow()
        );
        Password::new()
            .with_prompt("Enter Google API Key")
            .allow_empty_password(true)
            .interact()
            .ok()
    }
}

/// The default resolution order: environment, key file, interactive.
pub fn default_sources() -> Vec<Box<dyn CredentialSource>> {
    vec![
        Box::new(EnvKeySource),
        Box::new(KeyFileSource),
        Box::new(PromptKeySource),
    ]
}

/// Walk the sources in order and return the first non-empty value,
/// trimmed. Whitespace-only values do not count as a credential, so a
/// blank line at the interactive prompt still resolves to `None`.
pub fn resolve_credential(sources: &[Box<dyn CredentialSource>]) -> Option<String> {
    for source in sources {
        match source.resolve() {
            Some(raw) => {
                let key = raw.trim();
                if key.is_empty() {
                    tracing::debug!(source = source.label(), "source yielded an empty value");
                    continue;
                }
                tracing::info!(source = source.label(), "credential resolved");
                return Some(key.to_string());
            }
            None => tracing::debug!(source = source.label(), "source yielded nothing"),
        }
    }
    None
}
