//! Generation calls against the Ollama `/api/generate` endpoint.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use ureq::Agent;

use crate::error::OllamaError;

/// Default generation endpoint.
pub const DEFAULT_URL: &str = "http://localhost:11434/api/generate";

/// Default model tag.
pub const DEFAULT_MODEL: &str = "llama3.1";

/// Connection and sampling settings for the generation endpoint.
#[derive(Debug, Clone)]
pub struct OllamaConfig {
    pub url: String,
    pub model: String,
    pub temperature: f64,
    pub num_predict: u32,
    /// Bound on the whole call; the only way a generation in flight ends
    /// early.
    pub timeout: Duration,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.6,
            num_predict: 220,
            timeout: Duration::from_secs(60),
        }
    }
}

/// Outcome of one generation call.
///
/// `Failed` carries the error detail instead of surfacing an error, so
/// every interaction still has text to log and display;
/// [`Generation::into_text`] collapses it to the placeholder string the
/// audit log stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generation {
    Answer(String),
    Failed(String),
}

impl Generation {
    /// The text a caller logs and displays: the model's answer, or a
    /// warning placeholder carrying the error detail.
    pub fn into_text(self) -> String {
        match self {
            Generation::Answer(text) => text,
            Generation::Failed(detail) => format!("⚠️ Ollama error: {detail}"),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Generation::Failed(_))
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Serialize)]
struct GenerateOptions {
    temperature: f64,
    num_predict: u32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

/// Blocking HTTP client for the generation endpoint. Requests go out one
/// at a time; the configured timeout is the only bound on a call.
pub struct OllamaClient {
    agent: Agent,
    config: OllamaConfig,
}

impl OllamaClient {
    pub fn new(config: OllamaConfig) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(config.timeout))
            .build()
            .new_agent();
        Self { agent, config }
    }

    /// Send a prompt and return the outcome. Transport errors, timeouts,
    /// non-2xx statuses, and undecodable bodies all come back as
    /// [`Generation::Failed`]; no retry is attempted.
    pub fn generate(&self, prompt: &str) -> Generation {
        match self.try_generate(prompt) {
            Ok(text) => Generation::Answer(text),
            Err(e) => {
                warn!(error = %e, "generation call failed");
                Generation::Failed(e.to_string())
            }
        }
    }

    fn try_generate(&self, prompt: &str) -> Result<String, OllamaError> {
        debug!(
            model = %self.config.model,
            prompt_len = prompt.len(),
            "sending generation request"
        );
        let request = GenerateRequest {
            model: &self.config.model,
            prompt,
            stream: false,
            options: GenerateOptions {
                temperature: self.config.temperature,
                num_predict: self.config.num_predict,
            },
        };
        let mut response = self
            .agent
            .post(&self.config.url)
            .send_json(&request)
            .map_err(|e| match e {
                ureq::Error::StatusCode(code) => OllamaError::Status(code),
                other => OllamaError::Http(other),
            })?;
        let body: GenerateResponse = response.body_mut().read_json()?;
        Ok(body.response.trim().to_string())
    }
}
