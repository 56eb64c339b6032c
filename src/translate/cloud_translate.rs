use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::info;

use super::error::{TranslateError, TranslateResult};
use super::interface::TranslationProvider;
use super::languages::AUTO_SOURCE;

/// Provider backed by a managed translation service.
///
/// The service takes language codes as-is and detects the source itself
/// when no source code is sent, so no prompt or cleanup layer is involved.
pub struct CloudTranslateProvider {
    endpoint: String,
    api_key: String,
    client: reqwest::Client,
}

#[derive(Debug, Serialize)]
struct CloudTranslateRequest<'a> {
    text: &'a str,
    target_language_code: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_language_code: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct CloudTranslateResponse {
    translated_text: String,
}

impl CloudTranslateProvider {
    pub fn new(endpoint: String, api_key: String) -> TranslateResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        info!("Initialized CloudTranslateProvider: endpoint={}", endpoint);
        Ok(Self {
            endpoint,
            api_key,
            client,
        })
    }

    fn build_request<'a>(
        text: &'a str,
        source_language: &'a str,
        target_language: &'a str,
    ) -> CloudTranslateRequest<'a> {
        // Leaving the source code out asks the service to detect it.
        let source_language_code = (source_language != AUTO_SOURCE).then_some(source_language);
        CloudTranslateRequest {
            text,
            target_language_code: target_language,
            source_language_code,
        }
    }

    fn parse_response(body: &str) -> TranslateResult<String> {
        let decoded: CloudTranslateResponse =
            serde_json::from_str(body).map_err(|e| TranslateError::Decode(e.to_string()))?;
        Ok(decoded.translated_text)
    }
}

#[async_trait]
impl TranslationProvider for CloudTranslateProvider {
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> TranslateResult<String> {
        let body = Self::build_request(text, source_language, target_language);

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

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
        "cloud_translate"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_carries_both_language_codes() {
        let request = CloudTranslateProvider::build_request("안녕하세요", "ko", "en");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "text": "안녕하세요",
                "target_language_code": "en",
                "source_language_code": "ko",
            })
        );
    }

    #[test]
    fn test_auto_source_is_left_unset() {
        let request = CloudTranslateProvider::build_request("hola", "auto", "en");
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("source_language_code").is_none());
        assert_eq!(value["target_language_code"], "en");
    }

    #[test]
    fn test_parse_response() {
        let body = r#"{"translated_text": "Hello"}"#;
        assert_eq!(
            CloudTranslateProvider::parse_response(body).unwrap(),
            "Hello"
        );
    }

    #[test]
    fn test_malformed_response_is_decode_error() {
        let result = CloudTranslateProvider::parse_response("not json");
        assert!(matches!(result, Err(TranslateError::Decode(_))));

        let result = CloudTranslateProvider::parse_response(r#"{"unexpected": 1}"#);
        assert!(matches!(result, Err(TranslateError::Decode(_))));
    }

    #[test]
    fn test_provider_kind() {
        let provider =
            CloudTranslateProvider::new("https://translate.example".into(), "key".into()).unwrap();
        assert_eq!(provider.kind(), "cloud_translate");
    }
}
