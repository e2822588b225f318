use crate::models::{Dj, Entities, Intent, IntentAnalysis, ResponseType};

pub const BOOKING_VOCABULARY: &[&str] = &[
    "contratar",
    "contratación",
    "booking",
    "book",
    "reservar",
    "precio",
    "tarifa",
    "disponibilidad",
];

const BUDGET_WORDS: &[&str] = &["precio", "cuanto", "cuánto", "tarifa", "presupuesto"];

pub const CLASSIFY_PROMPT: &str = r#"Analiza la intención del usuario en este mensaje sobre contratación de DJs.

Devuelve SOLO un JSON válido (sin markdown ni explicaciones) con esta estructura:
{
  "intent": "booking|info|greeting|other",
  "confidence": 0.0,
  "entities": {
    "dj_mentioned": "nombre del DJ o null",
    "event_type": "tipo de evento o null",
    "location": "ubicación o null",
    "budget_mentioned": false
  },
  "suggested_response_type": "show_djs|provide_info|ask_clarification|greeting"
}

Ejemplos:
- "quiero contratar un dj" -> intent "booking", suggested_response_type "show_djs"
- "cuanto cuesta The Brainkiller" -> intent "info", dj_mentioned "The Brainkiller", suggested_response_type "provide_info"
- "hola" -> intent "greeting", suggested_response_type "greeting"
"#;

pub fn has_booking_intent(message: &str) -> bool {
    let lower = message.to_lowercase();
    BOOKING_VOCABULARY.iter().any(|w| lower.contains(w))
}

pub fn keyword_analysis(message: &str) -> IntentAnalysis {
    let lower = message.to_lowercase();
    let dj_mentioned = Dj::resolve(message).map(|dj| dj.name().to_string());
    let budget_mentioned = BUDGET_WORDS.iter().any(|w| lower.contains(w));

    let (intent, confidence, suggested_response_type) = if has_booking_intent(message) {
        (Intent::Booking, 0.8, ResponseType::ShowDjs)
    } else if dj_mentioned.is_some() {
        (Intent::Info, 0.5, ResponseType::ProvideInfo)
    } else {
        (Intent::Other, 0.5, ResponseType::AskClarification)
    };

    IntentAnalysis {
        intent,
        confidence,
        entities: Entities {
            dj_mentioned,
            event_type: None,
            location: None,
            budget_mentioned,
        },
        suggested_response_type,
    }
}

pub fn parse_analysis_response(response: &str) -> anyhow::Result<IntentAnalysis> {
    if let Ok(analysis) = serde_json::from_str::<IntentAnalysis>(response) {
        return Ok(analysis);
    }

    // Strip markdown code fences
    let cleaned = response
        .trim()
        .strip_prefix("```json")
        .or_else(|| response.trim().strip_prefix("```"))
        .unwrap_or(response.trim());
    let cleaned = cleaned.strip_suffix("```").unwrap_or(cleaned).trim();

    if let Ok(analysis) = serde_json::from_str::<IntentAnalysis>(cleaned) {
        return Ok(analysis);
    }

    if let (Some(start), Some(end)) = (cleaned.find('{'), cleaned.rfind('}')) {
        if start < end {
            if let Ok(analysis) = serde_json::from_str::<IntentAnalysis>(&cleaned[start..=end]) {
                return Ok(analysis);
            }
        }
    }

    anyhow::bail!("model response is not a valid intent analysis")
}
