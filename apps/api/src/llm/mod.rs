//! LLM client, the single point of entry for all model calls in Rankpilot.
//!
//! ARCHITECTURAL RULE: no other module may call the Anthropic API directly.
//! All model interactions MUST go through this module.
//!
//! There is deliberately no retry or backoff here: an upstream failure
//! surfaces to the caller on the first attempt and is mapped to a generic
//! 500 at the API layer.

use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod prompts;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// The model used for all LLM calls. Hardcoded to prevent accidental drift.
pub const MODEL: &str = "claude-sonnet-4-5";
const MAX_TOKENS: u32 = 4096;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("model returned JSON that does not match the expected schema: {0}")]
    Contract(#[from] serde_json::Error),

    #[error("model returned empty content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
    usage: Usage,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    input_tokens: u32,
    output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// The single LLM client shared by all services via `AppState`.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    /// Sends a single prompt and returns the text of the first text block.
    pub async fn call(&self, prompt: &str, system: &str) -> Result<String, LlmError> {
        let request_body = MessagesRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            system,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: MessagesResponse = response.json().await?;

        debug!(
            "LLM call succeeded: input_tokens={}, output_tokens={}",
            parsed.usage.input_tokens, parsed.usage.output_tokens
        );

        parsed
            .content
            .into_iter()
            .find(|b| b.block_type == "text")
            .and_then(|b| b.text)
            .filter(|t| !t.trim().is_empty())
            .ok_or(LlmError::EmptyContent)
    }

    /// Calls the model and decodes the answer into `T`.
    ///
    /// Decoding fails closed: a response that does not match the expected
    /// schema is a `Contract` error, never a silently-defaulted value. The
    /// prompt must instruct the model to return valid JSON.
    pub async fn call_json<T: DeserializeOwned>(
        &self,
        prompt: &str,
        system: &str,
    ) -> Result<T, LlmError> {
        let text = self.call(prompt, system).await?;
        let json = strip_code_fences(&text);
        serde_json::from_str(json).map_err(LlmError::Contract)
    }
}

/// Strips a surrounding ```json ... ``` (or plain ```) fence when the model
/// wraps its answer in one despite instructions.
fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(inner) = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
    else {
        return trimmed;
    };
    inner.strip_suffix("```").unwrap_or(inner).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_json_tagged_fence() {
        let input = "```json\n{\"score\": 42}\n```";
        assert_eq!(strip_code_fences(input), "{\"score\": 42}");
    }

    #[test]
    fn strips_bare_fence() {
        let input = "```\n[1, 2, 3]\n```";
        assert_eq!(strip_code_fences(input), "[1, 2, 3]");
    }

    #[test]
    fn leaves_unfenced_text_alone() {
        assert_eq!(strip_code_fences("  {\"a\": 1} "), "{\"a\": 1}");
    }

    #[test]
    fn tolerates_missing_closing_fence() {
        assert_eq!(strip_code_fences("```json\n{\"a\": 1}"), "{\"a\": 1}");
    }
}
