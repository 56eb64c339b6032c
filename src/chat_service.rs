use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::events::types::{ChatPost, OutboundMessage};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatUser {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub is_bot: bool,
}

/// The slice of the chat platform's REST surface this service consumes.
#[async_trait]
pub trait ChatService: Send + Sync {
    async fn get_user(&self, user_id: &str) -> Result<ChatUser>;
    async fn get_post(&self, post_id: &str) -> Result<ChatPost>;
    async fn create_post(&self, post: &OutboundMessage) -> Result<ChatPost>;
}

#[derive(Debug, Clone)]
pub struct ChatServiceClient {
    client: Client,
    base_url: String,
    token: String,
}

impl ChatServiceClient {
    pub fn new(base_url: String, token: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            token,
        }
    }
}

#[async_trait]
impl ChatService for ChatServiceClient {
    async fn get_user(&self, user_id: &str) -> Result<ChatUser> {
        let url = format!("{}/users/{}", self.base_url, user_id);
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await?
            .error_for_status()?;
        let user: ChatUser = response.json().await?;
        Ok(user)
    }

    async fn get_post(&self, post_id: &str) -> Result<ChatPost> {
        let url = format!("{}/posts/{}", self.base_url, post_id);
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await?
            .error_for_status()?;
        let post: ChatPost = response.json().await?;
        Ok(post)
    }

    async fn create_post(&self, post: &OutboundMessage) -> Result<ChatPost> {
        let url = format!("{}/posts", self.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(post)
            .send()
            .await?
            .error_for_status()?;
        let created: ChatPost = response.json().await?;
        Ok(created)
    }
}
