use async_trait::async_trait;

use super::intent::{parse_analysis_response, CLASSIFY_PROMPT};
use super::{IntentClassifier, LlmProvider, Message};
use crate::models::IntentAnalysis;
use crate::services::pricing::EXTRA_HOUR_PRICE;

const PERSONA: &str = "Eres el mejor manager de DJs de Funndication DJ Bookings, especializado en contratación de artistas. \
Eres profesional pero amigable, entusiasta de la música electrónica y experto en Break Beat. \
Ayudas a encontrar el DJ perfecto para cada evento, explicas los precios con claridad y guías la contratación paso a paso. \
Responde siempre en español.";

pub struct LlmAssistant {
    llm: Box<dyn LlmProvider>,
    instructions: Option<String>,
}

impl LlmAssistant {
    pub fn new(llm: Box<dyn LlmProvider>) -> Self {
        Self {
            llm,
            instructions: None,
        }
    }

    pub fn with_instructions(mut self, instructions: Option<&str>) -> Self {
        self.instructions = instructions.map(str::to_string);
        self
    }

    fn persona_prompt(&self, roster: &str) -> String {
        let mut prompt = format!(
            "{PERSONA}\n\nINFORMACIÓN DE DJS DISPONIBLES:\n{roster}\n\n\
             REGLAS:\n- El caché base cubre 1 hora de actuación\n\
             - +{EXTRA_HOUR_PRICE}€ por cada hora adicional\n\
             - Fuera de Málaga no se incluye hotel, desplazamiento ni comida"
        );
        if let Some(instructions) = &self.instructions {
            prompt.push_str("\n\nINSTRUCCIONES DE LA AGENCIA:\n");
            prompt.push_str(instructions);
        }
        prompt
    }
}

#[async_trait]
impl IntentClassifier for LlmAssistant {
    async fn classify(&self, message: &str, roster: &str) -> anyhow::Result<IntentAnalysis> {
        let system = format!("{CLASSIFY_PROMPT}\nDJS DISPONIBLES:\n{roster}");
        let response = self.llm.chat(&system, &[Message::user(message)]).await?;
        parse_analysis_response(&response)
    }

    async fn generate_reply(
        &self,
        message: &str,
        context: &str,
        roster: &str,
    ) -> anyhow::Result<String> {
        let system = self.persona_prompt(roster);
        let user = format!("Contexto: {context}\n\nUsuario dice: {message}");
        let reply = self.llm.chat(&system, &[Message::user(user)]).await?;
        non_empty(reply)
    }

    async fn describe_dj(&self, dj_name: &str, roster: &str) -> anyhow::Result<String> {
        let system = format!(
            "Extrae y formatea la información sobre {dj_name} de esta base de datos:\n\n{roster}\n\n\
             Incluye nombre y procedencia, estilo musical, precios (base, fuera de Málaga, fuera de España), \
             la regla de horas adicionales, redes sociales y disponibilidad. \
             Mantén un tono profesional pero entusiasta."
        );
        let request = format!("Dame información detallada sobre {dj_name}");
        let reply = self.llm.chat(&system, &[Message::user(request)]).await?;
        non_empty(reply)
    }
}

fn non_empty(reply: String) -> anyhow::Result<String> {
    let trimmed = reply.trim();
    if trimmed.is_empty() {
        anyhow::bail!("model returned an empty reply");
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::models::Intent;

    struct RecordingLlm {
        reply: String,
        prompts: Arc<Mutex<Vec<(String, String)>>>,
    }

    impl RecordingLlm {
        fn new(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
                prompts: Arc::new(Mutex::new(vec![])),
            }
        }
    }

    #[async_trait]
    impl LlmProvider for RecordingLlm {
        async fn chat(&self, system_prompt: &str, messages: &[Message]) -> anyhow::Result<String> {
            let user = messages.last().map(|m| m.content.clone()).unwrap_or_default();
            self.prompts
                .lock()
                .unwrap()
                .push((system_prompt.to_string(), user));
            Ok(self.reply.clone())
        }
    }

    #[tokio::test]
    async fn test_classify_parses_model_json() {
        let llm = RecordingLlm::new(r#"{"intent":"booking","confidence":0.95}"#);
        let prompts = llm.prompts.clone();
        let assistant = LlmAssistant::new(Box::new(llm));

        let analysis = assistant.classify("busco dj para mi boda", "ROSTER").await.unwrap();
        assert_eq!(analysis.intent, Intent::Booking);

        let prompts = prompts.lock().unwrap();
        assert!(prompts[0].0.contains("ROSTER"));
        assert_eq!(prompts[0].1, "busco dj para mi boda");
    }

    #[tokio::test]
    async fn test_classify_malformed_is_error() {
        let assistant = LlmAssistant::new(Box::new(RecordingLlm::new("lo siento, no puedo")));
        assert!(assistant.classify("hola", "").await.is_err());
    }

    #[tokio::test]
    async fn test_generate_reply_includes_context_and_instructions() {
        let llm = RecordingLlm::new("  ¡Hola! ¿Qué evento preparas?  ");
        let prompts = llm.prompts.clone();
        let assistant =
            LlmAssistant::new(Box::new(llm)).with_instructions(Some("Nunca prometas descuentos."));

        let reply = assistant
            .generate_reply("hola", "sin DJ elegido", "ROSTER")
            .await
            .unwrap();
        assert_eq!(reply, "¡Hola! ¿Qué evento preparas?");

        let prompts = prompts.lock().unwrap();
        assert!(prompts[0].0.contains("Nunca prometas descuentos."));
        assert!(prompts[0].0.contains("ROSTER"));
        assert!(prompts[0].1.contains("Contexto: sin DJ elegido"));
    }

    #[tokio::test]
    async fn test_empty_reply_is_error() {
        let assistant = LlmAssistant::new(Box::new(RecordingLlm::new("   ")));
        assert!(assistant.describe_dj("Tortu", "ROSTER").await.is_err());
    }
}
