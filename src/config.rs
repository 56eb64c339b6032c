use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub system_config: SystemConfig,
    #[serde(default)]
    pub bot_config: BotConfig,
    pub chat_service: ChatServiceSettings,
    pub translation: TranslationSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    pub host: String,
    pub port: u16,
}

/// Display identity for the replies the service posts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    #[serde(default = "default_bot_username")]
    pub username: String,
    #[serde(default)]
    pub icon_url: String,
}

fn default_bot_username() -> String {
    "autotranslate-bot".to_string()
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            username: default_bot_username(),
            icon_url: String::new(),
        }
    }
}

/// Where to reach the chat platform's REST surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatServiceSettings {
    pub base_url: String,
    #[serde(default)]
    pub service_token: String,
}

/// Selects and parameterizes the translation backend.
///
/// Exactly one kind is active, named by `provider`; the per-kind tables
/// below hold that backend's endpoint, credentials, and model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationSettings {
    pub provider: String,
    #[serde(default)]
    pub cloud_translate: Option<CloudTranslateSettings>,
    #[serde(default)]
    pub completion_llm: Option<LlmSettings>,
    #[serde(default)]
    pub chat_llm: Option<LlmSettings>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloudTranslateSettings {
    pub endpoint: String,
    pub api_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSettings {
    pub api_url: String,
    #[serde(default)]
    pub api_key: String,
    pub model: String,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;

        // File type by extension, YAML being the default
        let path_lower = path.to_lowercase();
        if path_lower.ends_with(".json") {
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            let config: Config = serde_yaml::from_str(&content)?;
            Ok(config)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_config_with_defaults() {
        let yaml = r#"
system_config:
  host: 0.0.0.0
  port: 12880
chat_service:
  base_url: http://localhost:8065/api/v4
  service_token: secret
translation:
  provider: chat_llm
  chat_llm:
    api_url: http://localhost:4000/v1/chat/completions
    model: gpt-4o-mini
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.system_config.port, 12880);
        assert_eq!(config.translation.provider, "chat_llm");
        assert!(config.translation.cloud_translate.is_none());
        // Defaults fill in what the file leaves out
        assert_eq!(config.bot_config.username, "autotranslate-bot");
        assert_eq!(config.translation.chat_llm.unwrap().api_key, "");
    }

    #[test]
    fn test_json_config_parses() {
        let json = r#"{
            "system_config": {"host": "127.0.0.1", "port": 9000},
            "bot_config": {"username": "relay-bot", "icon_url": ""},
            "chat_service": {"base_url": "http://chat.local/api/v4"},
            "translation": {
                "provider": "cloud_translate",
                "cloud_translate": {"endpoint": "https://mt.example/translate", "api_key": "k"}
            }
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.bot_config.username, "relay-bot");
        assert_eq!(config.chat_service.service_token, "");
        assert_eq!(config.translation.provider, "cloud_translate");
    }
}
