use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::info;

use super::error::{TranslateError, TranslateResult};
use super::interface::TranslationProvider;
use super::prompt::build_completion_prompt;
use super::sanitize::clean_translation_output;

/// Output cap sized for chat messages, not documents.
const MAX_TOKENS: u32 = 512;

/// Low temperature keeps the translation close to deterministic.
const TEMPERATURE: f32 = 0.1;

/// Cut generation at the first sign of commentary or a continued pattern.
const STOP_SEQUENCES: [&str; 6] = [
    "\n\n",
    "\nNote:",
    "\nExplanation:",
    "\nTranslation:",
    "\n\nInput:",
    "[/INST]",
];

/// Provider backed by a completion-style LLM endpoint.
pub struct CompletionLlmProvider {
    api_url: String,
    api_key: String,
    model: String,
    client: reqwest::Client,
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    prompt: String,
    max_tokens: u32,
    temperature: f32,
    stop: Vec<&'static str>,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    text: String,
}

impl CompletionLlmProvider {
    pub fn new(api_url: String, api_key: String, model: String) -> TranslateResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        info!(
            "Initialized CompletionLlmProvider: model={}, api_url={}",
            model, api_url
        );
        Ok(Self {
            api_url,
            api_key,
            model,
            client,
        })
    }

    fn build_request<'a>(
        &'a self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> CompletionRequest<'a> {
        CompletionRequest {
            model: &self.model,
            prompt: build_completion_prompt(text, source_language, target_language),
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
            stop: STOP_SEQUENCES.to_vec(),
        }
    }

    fn parse_response(body: &str) -> TranslateResult<String> {
        let decoded: CompletionResponse =
            serde_json::from_str(body).map_err(|e| TranslateError::Decode(e.to_string()))?;

        let choice = decoded
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| TranslateError::Backend("no translation returned".to_string()))?;

        Ok(clean_translation_output(&choice.text))
    }
}

#[async_trait]
impl TranslationProvider for CompletionLlmProvider {
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> TranslateResult<String> {
        let body = self.build_request(text, source_language, target_language);

        let mut request = self.client.post(&self.api_url).json(&body);
        if !self.api_key.is_empty() {
            request = request.bearer_auth(&self.api_key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(TranslateError::Backend(format!(
                "status {}: {}",
                status, error_text
            )));
        }

        let body_text = response.text().await?;
        Self::parse_response(&body_text)
    }

    fn kind(&self) -> &str {
        "completion_llm"
    }
}
