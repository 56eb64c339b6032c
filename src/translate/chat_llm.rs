use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::info;

use super::error::{TranslateError, TranslateResult};
use super::interface::TranslationProvider;
use super::prompt::{build_chat_prompt, TRANSLATOR_SYSTEM_INSTRUCTION};
use super::sanitize::clean_translation_output;

/// Chat models ramble more than completion models, so the cap is generous.
const MAX_TOKENS: u32 = 2048;

/// Slightly higher than the completion variant for more natural phrasing.
const TEMPERATURE: f32 = 0.3;

/// Provider backed by a chat-completion LLM endpoint.
pub struct ChatLlmProvider {
    api_url: String,
    api_key: String,
    model: String,
    client: reqwest::Client,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

impl ChatLlmProvider {
    pub fn new(api_url: String, api_key: String, model: String) -> TranslateResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        info!(
            "Initialized ChatLlmProvider: model={}, api_url={}",
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
    ) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: TRANSLATOR_SYSTEM_INSTRUCTION.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: build_chat_prompt(text, source_language, target_language),
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        }
    }

    fn parse_response(body: &str) -> TranslateResult<String> {
        let decoded: ChatResponse =
            serde_json::from_str(body).map_err(|e| TranslateError::Decode(e.to_string()))?;

        let choice = decoded
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| TranslateError::Backend("no translation returned".to_string()))?;

        Ok(clean_translation_output(&choice.message.content))
    }
}

#[async_trait]
impl TranslationProvider for ChatLlmProvider {
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
        "chat_llm"
    }
}
