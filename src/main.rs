use std::sync::{Arc, Mutex};

use tracing_subscriber::EnvFilter;

use djbookings::config::{AppConfig, LlmBackend};
use djbookings::db;
use djbookings::handlers;
use djbookings::services::ai::assistant::LlmAssistant;
use djbookings::services::ai::ollama::OllamaProvider;
use djbookings::services::ai::openai::OpenAiProvider;
use djbookings::services::ai::LlmProvider;
use djbookings::services::bookings::SqliteBookingStore;
use djbookings::services::conversation::ConversationEngine;
use djbookings::services::knowledge::KnowledgeBase;
use djbookings::services::replies::AgencyInfo;
use djbookings::services::sessions::InMemorySessionStore;
use djbookings::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let conn = db::init_db(&config.database_url)?;
    let db = Arc::new(Mutex::new(conn));

    let knowledge = Arc::new(KnowledgeBase::load_dir(&config.knowledge_dir)?);

    let mut agency = AgencyInfo::default();
    if let Some(account) = &config.payment_account {
        agency.payment_account = account.clone();
    }
    if let Some(url) = &config.presskit_url {
        agency.presskit_url = url.clone();
    }

    let mut engine = ConversationEngine::new(
        Arc::new(InMemorySessionStore::new()),
        Arc::new(SqliteBookingStore::new(Arc::clone(&db))),
        Arc::clone(&knowledge),
    )
    .with_agency(agency);

    let llm: Option<Box<dyn LlmProvider>> = match config.llm_provider {
        LlmBackend::OpenAi => {
            anyhow::ensure!(
                !config.openai_api_key.is_empty(),
                "OPENAI_API_KEY must be set when LLM_PROVIDER=openai"
            );
            tracing::info!("using OpenAI-compatible LLM provider (model: {})", config.openai_model);
            Some(Box::new(OpenAiProvider::new(
                config.openai_api_key.clone(),
                config.openai_base_url.clone(),
                config.openai_model.clone(),
            )))
        }
        LlmBackend::Ollama => {
            tracing::info!("using Ollama LLM provider (url: {})", config.ollama_url);
            Some(Box::new(OllamaProvider::new(
                config.ollama_url.clone(),
                config.ollama_model.clone(),
            )))
        }
        LlmBackend::None => {
            tracing::info!("no LLM provider configured, using keyword matching only");
            None
        }
    };

    if let Some(llm) = llm {
        let assistant = LlmAssistant::new(llm).with_instructions(knowledge.instructions());
        engine = engine.with_classifier(Arc::new(assistant), config.llm_timeout);
    }

    let state = Arc::new(AppState {
        db,
        config: config.clone(),
        engine,
    });

    let app = handlers::build_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
