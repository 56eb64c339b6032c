use std::sync::Arc;
use tracing::info;

use crate::config::TranslationSettings;

use super::chat_llm::ChatLlmProvider;
use super::cloud_translate::CloudTranslateProvider;
use super::completion_llm::CompletionLlmProvider;
use super::error::{TranslateError, TranslateResult};
use super::interface::TranslationProvider;

/// Factory for creating the translation backend selected by configuration.
pub struct TranslationFactory;

impl TranslationFactory {
    /// Create the provider named by `settings.provider`.
    ///
    /// Fails with a configuration error when the kind is missing or
    /// unknown, or when the selected kind's required fields are empty.
    pub fn create(settings: &TranslationSettings) -> TranslateResult<Arc<dyn TranslationProvider>> {
        if settings.provider.is_empty() {
            return Err(TranslateError::Config(
                "no translation provider configured".to_string(),
            ));
        }

        info!("Initializing translation provider: {}", settings.provider);

        match settings.provider.as_str() {
            "cloud_translate" => {
                let cfg = settings.cloud_translate.as_ref().ok_or_else(|| {
                    TranslateError::Config("cloud_translate settings missing".to_string())
                })?;
                if cfg.endpoint.is_empty() || cfg.api_key.is_empty() {
                    return Err(TranslateError::Config(
                        "cloud_translate requires endpoint and api_key".to_string(),
                    ));
                }
                Ok(Arc::new(CloudTranslateProvider::new(
                    cfg.endpoint.clone(),
                    cfg.api_key.clone(),
                )?))
            }
            "completion_llm" => {
                let cfg = settings.completion_llm.as_ref().ok_or_else(|| {
                    TranslateError::Config("completion_llm settings missing".to_string())
                })?;
                if cfg.api_url.is_empty() || cfg.model.is_empty() {
                    return Err(TranslateError::Config(
                        "completion_llm requires api_url and model".to_string(),
                    ));
                }
                Ok(Arc::new(CompletionLlmProvider::new(
                    cfg.api_url.clone(),
                    cfg.api_key.clone(),
                    cfg.model.clone(),
                )?))
            }
            "chat_llm" => {
                let cfg = settings.chat_llm.as_ref().ok_or_else(|| {
                    TranslateError::Config("chat_llm settings missing".to_string())
                })?;
                if cfg.api_url.is_empty() || cfg.model.is_empty() {
                    return Err(TranslateError::Config(
                        "chat_llm requires api_url and model".to_string(),
                    ));
                }
                Ok(Arc::new(ChatLlmProvider::new(
                    cfg.api_url.clone(),
                    cfg.api_key.clone(),
                    cfg.model.clone(),
                )?))
            }
            other => Err(TranslateError::Config(format!(
                "unsupported translation provider: {}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CloudTranslateSettings, LlmSettings};

    fn empty_settings(provider: &str) -> TranslationSettings {
        TranslationSettings {
            provider: provider.to_string(),
            cloud_translate: None,
            completion_llm: None,
            chat_llm: None,
        }
    }

    #[test]
    fn test_missing_provider_kind_fails_fast() {
        let result = TranslationFactory::create(&empty_settings(""));
        match result {
            Err(TranslateError::Config(msg)) => assert!(msg.contains("no translation provider")),
            _ => panic!("expected Config error"),
        }
    }

    #[test]
    fn test_unknown_provider_kind_rejected() {
        let result = TranslationFactory::create(&empty_settings("carrier_pigeon"));
        match result {
            Err(TranslateError::Config(msg)) => assert!(msg.contains("carrier_pigeon")),
            _ => panic!("expected Config error"),
        }
    }

    #[test]
    fn test_kind_without_its_settings_rejected() {
        let result = TranslationFactory::create(&empty_settings("chat_llm"));
        assert!(matches!(result, Err(TranslateError::Config(_))));
    }

    #[test]
    fn test_empty_required_fields_rejected() {
        let mut settings = empty_settings("completion_llm");
        settings.completion_llm = Some(LlmSettings {
            api_url: "http://localhost:8000/v1/completions".to_string(),
            api_key: String::new(),
            model: String::new(),
        });
        assert!(matches!(
            TranslationFactory::create(&settings),
            Err(TranslateError::Config(_))
        ));
    }

    #[test]
    fn test_creates_each_kind() {
        let mut settings = empty_settings("cloud_translate");
        settings.cloud_translate = Some(CloudTranslateSettings {
            endpoint: "https://mt.example/translate".to_string(),
            api_key: "k".to_string(),
        });
        assert_eq!(
            TranslationFactory::create(&settings).unwrap().kind(),
            "cloud_translate"
        );

        let mut settings = empty_settings("completion_llm");
        settings.completion_llm = Some(LlmSettings {
            api_url: "http://localhost:8000/v1/completions".to_string(),
            api_key: String::new(),
            model: "m".to_string(),
        });
        assert_eq!(
            TranslationFactory::create(&settings).unwrap().kind(),
            "completion_llm"
        );

        let mut settings = empty_settings("chat_llm");
        settings.chat_llm = Some(LlmSettings {
            api_url: "http://localhost:4000/v1/chat/completions".to_string(),
            api_key: "k".to_string(),
            model: "m".to_string(),
        });
        assert_eq!(
            TranslationFactory::create(&settings).unwrap().kind(),
            "chat_llm"
        );
    }
}
