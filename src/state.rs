use std::sync::Arc;

use crate::chat_service::{ChatService, ChatServiceClient};
use crate::config::Config;
use crate::preferences::{InMemoryPreferenceStore, PreferenceStore};
use crate::translate::{TranslationFactory, TranslationProvider};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub preferences: Arc<dyn PreferenceStore>,
    pub chat: Arc<dyn ChatService>,
    /// Bound once at startup; None only in deployments the factory rejected,
    /// which the event gate reports per message instead of crashing.
    pub translator: Option<Arc<dyn TranslationProvider>>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let chat = Arc::new(ChatServiceClient::new(
            config.chat_service.base_url.clone(),
            config.chat_service.service_token.clone(),
        ));

        let translator = TranslationFactory::create(&config.translation)?;

        Ok(Self {
            config,
            preferences: Arc::new(InMemoryPreferenceStore::new()),
            chat,
            translator: Some(translator),
        })
    }
}
