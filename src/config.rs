use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LlmBackend {
    None,
    OpenAi,
    Ollama,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: String,
    pub knowledge_dir: PathBuf,
    pub static_dir: PathBuf,
    pub admin_token: String,
    pub llm_provider: LlmBackend,
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub openai_model: String,
    pub ollama_url: String,
    pub ollama_model: String,
    pub llm_timeout: Duration,
    pub payment_account: Option<String>,
    pub presskit_url: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let openai_api_key = env::var("OPENAI_API_KEY").unwrap_or_default();
        let llm_provider = match env::var("LLM_PROVIDER").ok().as_deref() {
            Some("openai") => LlmBackend::OpenAi,
            Some("ollama") => LlmBackend::Ollama,
            Some("none") => LlmBackend::None,
            Some(other) => {
                tracing::warn!(provider = other, "unknown LLM_PROVIDER, running without a model");
                LlmBackend::None
            }
            None if !openai_api_key.is_empty() => LlmBackend::OpenAi,
            None => LlmBackend::None,
        };

        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "bookings.db".to_string()),
            knowledge_dir: env::var("KNOWLEDGE_DIR")
                .unwrap_or_else(|_| ".".to_string())
                .into(),
            static_dir: env::var("STATIC_DIR")
                .unwrap_or_else(|_| "static".to_string())
                .into(),
            admin_token: env::var("ADMIN_TOKEN").unwrap_or_else(|_| "changeme".to_string()),
            llm_provider,
            openai_api_key,
            openai_base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-3.5-turbo".to_string()),
            ollama_url: env::var("OLLAMA_URL")
                .unwrap_or_else(|_| "http://localhost:11434".to_string()),
            ollama_model: env::var("OLLAMA_MODEL").unwrap_or_else(|_| "llama3.2".to_string()),
            llm_timeout: Duration::from_secs(
                env::var("LLM_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(10),
            ),
            payment_account: env::var("PAYMENT_ACCOUNT").ok().filter(|v| !v.is_empty()),
            presskit_url: env::var("PRESSKIT_URL").ok().filter(|v| !v.is_empty()),
        }
    }
}
