use anyhow::Context;
use async_trait::async_trait;
use serde_json::{json, Value};

use super::{chat_messages, LlmProvider, Message};

pub struct OpenAiProvider {
    api_key: String,
    base_url: String,
    model: String,
    client: reqwest::Client,
}

impl OpenAiProvider {
    pub fn new(api_key: String, base_url: String, model: String) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            client: reqwest::Client::new(),
        }
    }

    fn request_body(&self, system_prompt: &str, messages: &[Message]) -> Value {
        json!({
            "model": self.model,
            "messages": chat_messages(system_prompt, messages),
            "temperature": 0.3,
            "max_tokens": 800,
        })
    }
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    async fn chat(&self, system_prompt: &str, messages: &[Message]) -> anyhow::Result<String> {
        let resp = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&self.request_body(system_prompt, messages))
            .send()
            .await
            .context("failed to call chat completions API")?;

        let status = resp.status();
        let data: Value = resp
            .json()
            .await
            .context("failed to parse chat completions response")?;

        if !status.is_success() {
            anyhow::bail!("chat completions API error ({}): {}", status, data);
        }

        data["choices"][0]["message"]["content"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| anyhow::anyhow!("missing content in chat completions response"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body() {
        let provider = OpenAiProvider::new(
            "sk-test".into(),
            "https://api.example.com/v1/".into(),
            "gpt-3.5-turbo".into(),
        );
        let body = provider.request_body("sistema", &[Message::user("hola")]);

        assert_eq!(provider.base_url, "https://api.example.com/v1");
        assert_eq!(body["model"], "gpt-3.5-turbo");
        assert_eq!(body["max_tokens"], 800);
        assert_eq!(body["messages"].as_array().unwrap().len(), 2);
        assert_eq!(body["messages"][1]["content"], "hola");
    }
}
