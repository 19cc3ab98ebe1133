// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) uses these modules to implement the interactive flow.
//
// Module responsibilities:
// - `credentials`: Resolves the Gemini API key from an ordered list of
//   sources (environment, key file, interactive prompt).
// - `prompt`: Holds the prerequisite-concepts template and interpolates
//   the user's topic into it.
// - `api`: Encapsulates the blocking HTTP call to the Gemini
//   `generateContent` endpoint behind the `TopicAnalyzer` trait.
// - `ui`: Implements the terminal flow and delegates submissions to
//   whatever `TopicAnalyzer` it is handed.
//
// Keeping this separation makes it easier to test the request logic or
// replace the UI in the future (for example, adding a TUI or GUI).
pub mod api;
pub mod credentials;
pub mod prompt;
pub mod ui;
