use serde_json::json;
use tracing::{debug, error};

use crate::config::BotConfig;
use crate::preferences::UserPreference;
use crate::state::AppState;
use crate::translate::AUTO_SOURCE;

use super::types::{ChatPost, OutboundMessage, AUTOTRANSLATED_PROP};

/// Handle one posted-message event, replying with at most one translation.
///
/// The checks run in order and bail on the first miss. Nothing here ever
/// returns an error to the webhook caller: a message the pipeline cannot
/// handle is logged and dropped.
pub async fn on_message(state: &AppState, post: &ChatPost) {
    if post.is_system_message() {
        return;
    }

    // Own output first, before any author heuristic can misfire on it
    if post.is_autotranslated() {
        return;
    }

    let user = match state.chat.get_user(&post.user_id).await {
        Ok(user) => user,
        Err(e) => {
            error!("Failed to resolve posting user {}: {}", post.user_id, e);
            return;
        }
    };
    if user.is_bot {
        return;
    }

    // No preference or opted out: not an error, just not our message
    let Some(preference) = state.preferences.get(&post.user_id) else {
        return;
    };
    if !preference.activated {
        return;
    }

    let Some(provider) = state.translator.as_ref() else {
        error!("No translation provider available");
        return;
    };

    let translated = match provider
        .translate(
            &post.message,
            &preference.source_language,
            &preference.target_language,
        )
        .await
    {
        Ok(text) => text,
        Err(e) => {
            error!("Translation via {} failed: {}", provider.kind(), e);
            return;
        }
    };

    // Same text back usually means the message was already in the target
    // language; a no-op reply would just be noise
    if translated.trim() == post.message.trim() {
        debug!("Translation matches original, skipping reply");
        return;
    }

    let reply = compose_reply(&state.config.bot_config, post, &preference, &translated);
    if let Err(e) = state.chat.create_post(&reply).await {
        error!("Failed to post translated message: {}", e);
    }
}

/// Build the threaded reply carrying the translation.
///
/// The reply keeps the original author for display continuity, overrides
/// the rendered name/icon to the bot identity, and always carries the
/// marker prop.
pub fn compose_reply(
    bot: &BotConfig,
    post: &ChatPost,
    preference: &UserPreference,
    translated: &str,
) -> OutboundMessage {
    let source_display = if preference.source_language == AUTO_SOURCE {
        "detected"
    } else {
        &preference.source_language
    };

    let message = format!(
        "**[{} → {}]**\n{}",
        source_display, preference.target_language, translated
    );

    // Thread under the original's root when the original is itself a reply
    let root_id = if post.root_id.is_empty() {
        post.id.clone()
    } else {
        post.root_id.clone()
    };

    let mut props = serde_json::Map::new();
    props.insert(AUTOTRANSLATED_PROP.to_string(), json!(true));
    props.insert("override_username".to_string(), json!(bot.username));
    props.insert("override_icon_url".to_string(), json!(bot.icon_url));
    props.insert("disable_group_highlight".to_string(), json!(true));

    OutboundMessage {
        channel_id: post.channel_id.clone(),
        user_id: post.user_id.clone(),
        root_id,
        message,
        props,
    }
}
