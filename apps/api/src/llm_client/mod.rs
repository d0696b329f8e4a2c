//! LLM Client: the single point of entry for text-generation calls.
//!
//! ARCHITECTURAL RULE: No other module may call the provider API directly.
//! Callers depend on the `TextGenerator` trait; `LlmClient` is the production
//! implementation over the OpenAI Responses API.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

const OPENAI_RESPONSES_URL: &str = "https://api.openai.com/v1/responses";
/// Model used when configuration does not name one.
pub const DEFAULT_MODEL: &str = "gpt-4.1-mini";
const MAX_RETRIES: u32 = 3;
const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("LLM returned empty content")]
    EmptyContent,
}

impl LlmError {
    /// Some models reject an explicit temperature with a 400.
    fn rejects_temperature(&self) -> bool {
        matches!(self, LlmError::Api { status: 400, message } if message.to_lowercase().contains("temperature"))
    }
}

/// Anything that turns a prompt into text. Implemented by `LlmClient`;
/// tests substitute canned generators.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn complete(
        &self,
        model: &str,
        prompt: &str,
        temperature: Option<f32>,
    ) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct ResponsesRequest<'a> {
    model: &'a str,
    input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Deserialize)]
pub struct LlmResponse {
    #[serde(default)]
    pub output: Vec<OutputItem>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct OutputItem {
    #[serde(rename = "type")]
    pub item_type: String,
    #[serde(default)]
    pub content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl LlmResponse {
    /// Concatenated text of every `output_text` block in message items.
    pub fn output_text(&self) -> String {
        self.output
            .iter()
            .filter(|item| item.item_type == "message")
            .flat_map(|item| item.content.iter())
            .filter(|block| block.block_type == "output_text")
            .filter_map(|block| block.text.as_deref())
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Wraps the Responses API with retry logic.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_key: String) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client, api_key })
    }

    /// Makes a raw call, returning the full response object.
    /// Retries on 429 (rate limit) and 5xx errors with exponential backoff.
    pub async fn call(
        &self,
        model: &str,
        prompt: &str,
        temperature: Option<f32>,
    ) -> Result<LlmResponse, LlmError> {
        let request_body = ResponsesRequest {
            model,
            input: prompt,
            temperature,
        };

        let mut last_error: Option<LlmError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s
                let delay = std::time::Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "LLM call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(OPENAI_RESPONSES_URL)
                .bearer_auth(&self.api_key)
                .json(&request_body)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(LlmError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("LLM API returned {}: {}", status, body);
                last_error = Some(LlmError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

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

            let llm_response: LlmResponse = response.json().await?;

            if let Some(usage) = &llm_response.usage {
                debug!(
                    "LLM call succeeded: model={}, input_tokens={}, output_tokens={}",
                    model, usage.input_tokens, usage.output_tokens
                );
            }

            return Ok(llm_response);
        }

        Err(last_error.unwrap_or(LlmError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }
}

#[async_trait]
impl TextGenerator for LlmClient {
    async fn complete(
        &self,
        model: &str,
        prompt: &str,
        temperature: Option<f32>,
    ) -> Result<String, LlmError> {
        let response = match self.call(model, prompt, temperature).await {
            Err(e) if temperature.is_some() && e.rejects_temperature() => {
                warn!("Model {model} rejected temperature, retrying without it");
                self.call(model, prompt, None).await?
            }
            other => other?,
        };

        let text = response.output_text();
        let text = text.trim();
        if text.is_empty() {
            return Err(LlmError::EmptyContent);
        }
        Ok(text.to_string())
    }
}

/// Strips a Markdown code fence wrapped around model output: the opening
/// fence line (with any language tag) and a closing fence line.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if !text.starts_with("```") {
        return text;
    }
    let body = match text.find('\n') {
        Some(idx) => &text[idx + 1..],
        None => "",
    };
    let body = body.trim_end();
    let body = match body.rfind('\n') {
        Some(idx) if body[idx + 1..].trim() == "```" => &body[..idx],
        None if body.trim() == "```" => "",
        _ => body,
    };
    body.trim()
}
