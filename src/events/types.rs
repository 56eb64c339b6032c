use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Reserved props key marking a post as this service's own output.
/// The event gate drops any post carrying it, which is what keeps the
/// translate-reply-translate loop from ever starting.
pub const AUTOTRANSLATED_PROP: &str = "autotranslated";

/// A message as delivered by the chat platform, both in webhook events
/// and in post-lookup responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatPost {
    pub id: String,
    pub channel_id: String,
    pub user_id: String,
    #[serde(default)]
    pub root_id: String,
    pub message: String,
    #[serde(rename = "type", default)]
    pub post_type: String,
    #[serde(default)]
    pub update_at: i64,
    #[serde(default)]
    pub props: Map<String, Value>,
}

impl ChatPost {
    /// Platform convention: administrative posts carry a `system_` type.
    pub fn is_system_message(&self) -> bool {
        self.post_type.starts_with("system_")
    }

    /// True when this post was emitted by the translation pipeline.
    pub fn is_autotranslated(&self) -> bool {
        self.props
            .get(AUTOTRANSLATED_PROP)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }
}

/// A reply to be created on the platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutboundMessage {
    pub channel_id: String,
    pub user_id: String,
    #[serde(default)]
    pub root_id: String,
    pub message: String,
    #[serde(default)]
    pub props: Map<String, Value>,
}
