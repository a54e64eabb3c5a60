//! AI code assistant
//!
//! The playground asks a language model for suggestions about the code in the
//! editor and, on request, for a program generated from a description. The
//! model sits behind the [`SuggestionBackend`] trait: it receives a prompt and
//! answers with JSON text. [`CommandBackend`] pipes the prompt through any
//! external command; tests plug in their own backends.
//!
//! Suggestions never fail from the caller's point of view. Short code is not
//! sent at all, and any backend or decoding failure comes back as a response
//! holding one generic error entry.

mod backend;
mod debounce;
mod prompt;

pub use backend::{CommandBackend, SuggestionBackend};
pub use debounce::Debouncer;
pub use prompt::{generation_prompt, suggestion_prompt};

use crate::config::DEFAULT_MIN_SUGGESTION_CHARS;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, warn};

/// Error entry shown when suggestions could not be fetched
pub const SUGGESTION_FAILURE: &str =
    "An error occurred while fetching AI suggestions. Please try again.";

/// Code to analyze and the tag of its language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionRequest {
    pub code: String,
    pub language: String,
}

/// Analysis returned by the model
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SuggestionResponse {
    pub suggestions: Vec<String>,
    pub errors: Vec<String>,
    pub best_practices: Vec<String>,
}

impl SuggestionResponse {
    /// The degraded response used whenever the backend could not deliver
    pub fn failure() -> Self {
        SuggestionResponse {
            errors: vec![SUGGESTION_FAILURE.to_string()],
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty() && self.errors.is_empty() && self.best_practices.is_empty()
    }
}

/// Description of a program to generate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub description: String,
    pub language: String,
}

/// A generated program
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedCode {
    pub code: String,
}

/// Failures talking to the model
#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    /// The backend ran but reported a failure
    #[error("assistant backend failed: {0}")]
    Backend(String),

    /// The backend command could not be started
    #[error("could not start assistant command '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("assistant I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The model's answer was not the expected JSON
    #[error("malformed assistant response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Suggestion and generation flows over one backend
#[derive(Debug, Clone)]
pub struct Assistant<B> {
    backend: B,
    min_chars: usize,
}

impl<B: SuggestionBackend> Assistant<B> {
    pub fn new(backend: B) -> Self {
        Assistant {
            backend,
            min_chars: DEFAULT_MIN_SUGGESTION_CHARS,
        }
    }

    /// Only code strictly longer than `min_chars` (after trimming) is analyzed
    pub fn with_min_chars(mut self, min_chars: usize) -> Self {
        self.min_chars = min_chars;
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Ask for suggestions about `request.code`.
    ///
    /// Returns `None` without calling the backend when the code is too short.
    pub fn suggest(&self, request: &SuggestionRequest) -> Option<SuggestionResponse> {
        let length = request.code.trim().chars().count();
        if length <= self.min_chars {
            debug!(length, "code too short for suggestions");
            return None;
        }

        match self.request_suggestions(request) {
            Ok(response) => Some(response),
            Err(err) => {
                warn!(error = %err, "AI suggestion failed");
                Some(SuggestionResponse::failure())
            }
        }
    }

    fn request_suggestions(
        &self,
        request: &SuggestionRequest,
    ) -> Result<SuggestionResponse, AssistantError> {
        let answer = self.backend.complete(&suggestion_prompt(request))?;
        decode(&answer)
    }

    /// Generate a program from a description
    pub fn generate(&self, request: &GenerateRequest) -> Result<GeneratedCode, AssistantError> {
        let answer = self.backend.complete(&generation_prompt(request))?;
        decode(&answer)
    }
}

/// Decode a JSON answer, tolerating a surrounding Markdown code fence
fn decode<T: DeserializeOwned>(answer: &str) -> Result<T, AssistantError> {
    Ok(serde_json::from_str(strip_code_fence(answer))?)
}

fn strip_code_fence(answer: &str) -> &str {
    let trimmed = answer.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // drop the info string (```json)
    let body = rest.split_once('\n').map_or("", |(_, body)| body);
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}
