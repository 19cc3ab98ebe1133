// API client module: a small blocking HTTP client for the Google
// Generative Language API. It is intentionally synchronous so the whole
// submit/wait/display round trip stays easy to follow.

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::prompt;

/// Model used when `BRIDGEGAP_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Which model answers and where requests go. Read once at startup and
/// passed into `GeminiClient::new`; nothing consults the environment
/// after that.
#[derive(Clone, Debug)]
pub struct ModelConfig {
    pub model: String,
    pub base_url: String,
}

impl ModelConfig {
    /// Read `BRIDGEGAP_MODEL` and `BRIDGEGAP_API_URL`, falling back to
    /// the hosted endpoint and the default model. The URL override lets
    /// tests point the client at a local mock server.
    pub fn from_env() -> Self {
        let model =
            std::env::var("BRIDGEGAP_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());
        let base_url =
            std::env::var("BRIDGEGAP_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        ModelConfig { model, base_url }
    }
}

/// What can go wrong between submitting a topic and seeing an answer.
/// The caller matches on this to decide what to show; nothing unwinds
/// across the UI boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed (DNS, connect, timeout) or the
    /// response body could not be read as JSON.
    #[error("request to the model endpoint failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status (bad key, quota,
    /// unknown model). The body usually explains which.
    #[error("model endpoint returned {status}: {body}")]
    Endpoint { status: StatusCode, body: String },

    /// A well-formed response that carries no answer text.
    #[error("model response contained no answer text")]
    MissingText,
}

/// The seam between the terminal flow and the HTTP client. The UI only
/// needs "topic in, markdown out"; tests substitute stubs here.
pub trait TopicAnalyzer {
    /// Produce the prerequisite-concepts markdown for `topic`.
    fn analyze(&self, topic: &str) -> std::result::Result<String, ApiError>;
}

/// Request body for `generateContent`: a list of contents, each holding
/// text parts. Mirrors the shape in Google's REST reference.
#[derive(Serialize, Debug)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize, Debug)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize, Debug)]
struct Part {
    text: String,
}

/// The slice of the response we care about. Safety ratings, usage
/// metadata and the rest are ignored by serde.
#[derive(Deserialize, Debug)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    content: Option<Content>,
}

impl GenerateContentResponse {
    /// First text part of the first candidate, which is where the model
    /// puts its answer for a plain text request.
    fn into_text(self) -> Option<String> {
        let text = self
            .candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text;
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// Blocking client for the Gemini `generateContent` endpoint. Holds the
/// reqwest client, the resolved credential and the model configuration
/// for the lifetime of the process.
pub struct GeminiClient {
    client: Client,
    config: ModelConfig,
    api_key: String,
}

impl GeminiClient {
    /// Build the HTTP client. Failure here is a startup error, reported
    /// before the menu ever shows.
    pub fn new(config: ModelConfig, api_key: String) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(GeminiClient {
            client,
            config,
            api_key,
        })
    }

    /// Model name this client is configured for.
    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }
}

impl TopicAnalyzer for GeminiClient {
    /// One POST per call: no retry, no streaming, default timeout. The
    /// key travels as a query parameter, which is how the Generative
    /// Language API authenticates plain API keys.
    fn analyze(&self, topic: &str) -> std::result::Result<String, ApiError> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt::build_prompt(topic),
                }],
            }],
        };

        tracing::debug!(model = %self.config.model, "sending generateContent request");
        let res = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()?;

        let status = res.status();
        tracing::debug!(%status, "generateContent response received");
        if !status.is_success() {
            let body = res.text().unwrap_or_else(|_| "".into());
            return Err(ApiError::Endpoint { status, body });
        }

        let parsed: GenerateContentResponse = res.json()?;
        parsed.into_text().ok_or(ApiError::MissingText)
    }
}
