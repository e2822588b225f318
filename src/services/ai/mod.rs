pub mod assistant;
pub mod intent;
pub mod ollama;
pub mod openai;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::models::IntentAnalysis;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

pub(crate) fn chat_messages(system_prompt: &str, messages: &[Message]) -> Vec<serde_json::Value> {
    std::iter::once(serde_json::json!({ "role": "system", "content": system_prompt }))
        .chain(
            messages
                .iter()
                .map(|m| serde_json::json!({ "role": m.role, "content": m.content })),
        )
        .collect()
}

#[async_trait]
pub trait LlmProvider: Send + Sync {
    async fn chat(&self, system_prompt: &str, messages: &[Message]) -> anyhow::Result<String>;
}

#[async_trait]
pub trait IntentClassifier: Send + Sync {
    async fn classify(&self, message: &str, roster: &str) -> anyhow::Result<IntentAnalysis>;

    async fn generate_reply(
        &self,
        message: &str,
        context: &str,
        roster: &str,
    ) -> anyhow::Result<String>;

    async fn describe_dj(&self, dj_name: &str, roster: &str) -> anyhow::Result<String>;
}
