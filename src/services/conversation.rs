use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::time::timeout;

use crate::models::{Booking, Dj, Intent, IntentAnalysis, Session, SessionState};
use crate::services::ai::intent::{has_booking_intent, keyword_analysis};
use crate::services::ai::IntentClassifier;
use crate::services::bookings::{BookingStore, StoreError};
use crate::services::collector::{collect_field, FieldOutcome};
use crate::services::knowledge::{self, KnowledgeBase};
use crate::services::pricing;
use crate::services::replies::{self, AgencyInfo};
use crate::services::sessions::SessionStore;

const EXIT_COMMANDS: &[&str] = &["salir", "exit", "quit"];
const DEFAULT_CLASSIFIER_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyStatus {
    Active,
    Completed,
    Error,
}

#[derive(Debug, Clone)]
pub struct Reply {
    pub session_id: String,
    pub text: String,
    pub status: ReplyStatus,
}

#[derive(Debug, thiserror::Error)]
enum TurnError {
    #[error("booking not saved: {0}")]
    BookingNotSaved(StoreError),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl TurnError {
    fn user_text(&self) -> &'static str {
        match self {
            TurnError::BookingNotSaved(StoreError::SlotTaken { .. }) => replies::SLOT_TAKEN_AT_SAVE,
            TurnError::BookingNotSaved(StoreError::Storage(_)) => replies::BOOKING_NOT_SAVED,
            TurnError::Internal(_) => replies::INTERNAL_ERROR,
        }
    }
}

pub fn is_exit_command(message: &str) -> bool {
    EXIT_COMMANDS
        .iter()
        .any(|c| message.trim().eq_ignore_ascii_case(c))
}

pub struct ConversationEngine {
    sessions: Arc<dyn SessionStore>,
    bookings: Arc<dyn BookingStore>,
    knowledge: Arc<KnowledgeBase>,
    classifier: Option<Arc<dyn IntentClassifier>>,
    classifier_timeout: Duration,
    agency: AgencyInfo,
}

impl ConversationEngine {
    pub fn new(
        sessions: Arc<dyn SessionStore>,
        bookings: Arc<dyn BookingStore>,
        knowledge: Arc<KnowledgeBase>,
    ) -> Self {
        Self {
            sessions,
            bookings,
            knowledge,
            classifier: None,
            classifier_timeout: DEFAULT_CLASSIFIER_TIMEOUT,
            agency: AgencyInfo::default(),
        }
    }

    pub fn with_classifier(
        mut self,
        classifier: Arc<dyn IntentClassifier>,
        classifier_timeout: Duration,
    ) -> Self {
        self.classifier = Some(classifier);
        self.classifier_timeout = classifier_timeout;
        self
    }

    pub fn with_agency(mut self, agency: AgencyInfo) -> Self {
        self.agency = agency;
        self
    }

    pub async fn handle_message(&self, session_id: Option<&str>, raw: &str) -> Reply {
        let message = raw.trim();

        if is_exit_command(message) {
            let id = match session_id {
                Some(id) => {
                    self.close_session(id).await;
                    id.to_string()
                }
                None => uuid::Uuid::new_v4().to_string(),
            };
            return Reply {
                session_id: id,
                text: replies::FAREWELL.to_string(),
                status: ReplyStatus::Completed,
            };
        }

        let handle = match session_id.and_then(|id| self.sessions.get(id)) {
            Some(handle) => handle,
            None => {
                if let Some(stale) = session_id {
                    tracing::debug!(session_id = stale, "unknown session, starting a new one");
                }
                self.sessions.create()
            }
        };
        let mut session = handle.lock_owned().await;

        // An exit may have closed the session while this turn waited for it.
        if self.sessions.get(&session.id).is_none() {
            tracing::debug!(session_id = %session.id, "session closed while waiting, starting a new one");
            session = self.sessions.create().lock_owned().await;
        }

        if message.is_empty() {
            return Reply {
                session_id: session.id.clone(),
                text: replies::EMPTY_PROMPT.to_string(),
                status: ReplyStatus::Active,
            };
        }

        let from = session.state;
        let result = self.step(&mut session, message).await;
        tracing::info!(
            session_id = %session.id,
            from = from.as_str(),
            to = session.state.as_str(),
            "turn processed"
        );

        match result {
            Ok(text) => Reply {
                session_id: session.id.clone(),
                text,
                status: ReplyStatus::Active,
            },
            Err(e) => {
                tracing::error!(session_id = %session.id, error = %e, "turn failed");
                Reply {
                    session_id: session.id.clone(),
                    text: e.user_text().to_string(),
                    status: ReplyStatus::Error,
                }
            }
        }
    }

    async fn close_session(&self, id: &str) {
        let Some(handle) = self.sessions.get(id) else {
            return;
        };
        // Waits for a turn already running on this session.
        let _session = handle.lock().await;
        if self.sessions.delete(id) {
            tracing::info!(session_id = id, "session closed by user");
        }
    }

    async fn step(&self, session: &mut Session, message: &str) -> Result<String, TurnError> {
        match session.state {
            SessionState::Initial => Ok(self.handle_initial(session, message).await),
            SessionState::SelectingDj => Ok(select_dj(session, message)),
            SessionState::CollectingFields => self.handle_field(session, message),
            SessionState::Finalized => Ok(replies::GENERIC_PROMPT.to_string()),
        }
    }

    async fn handle_initial(&self, session: &mut Session, message: &str) -> String {
        let analysis = self.analyze(message).await;
        tracing::debug!(
            session_id = %session.id,
            intent = ?analysis.intent,
            confidence = analysis.confidence,
            "intent analysed"
        );

        if analysis.intent == Intent::Booking || has_booking_intent(message) {
            session.state = SessionState::SelectingDj;
            return replies::roster_prompt(self.knowledge.roster_text());
        }

        self.answer(message, &analysis).await
    }

    async fn analyze(&self, message: &str) -> IntentAnalysis {
        let Some(classifier) = &self.classifier else {
            return keyword_analysis(message);
        };
        let roster = self.knowledge.roster_text();
        self.ask_model("classify", classifier.classify(message, roster))
            .await
            .unwrap_or_else(|| keyword_analysis(message))
    }

    async fn answer(&self, message: &str, analysis: &IntentAnalysis) -> String {
        let roster = self.knowledge.roster_text();
        let lookup = || replies::knowledge_answer(&knowledge::lookup(roster, message));

        let Some(classifier) = &self.classifier else {
            return lookup();
        };

        let mentioned = analysis
            .entities
            .dj_mentioned
            .as_deref()
            .and_then(|name| Dj::from_name(name).or_else(|| Dj::resolve(name)));

        if let Some(dj) = mentioned {
            if let Some(text) = self
                .ask_model("describe_dj", classifier.describe_dj(dj.name(), roster))
                .await
            {
                return text;
            }
            return knowledge::dj_profile(roster, dj.name()).unwrap_or_else(lookup);
        }

        let context = format!(
            "Intención detectada: {:?}. El usuario aún no ha elegido DJ.",
            analysis.intent
        );
        self.ask_model("generate_reply", classifier.generate_reply(message, &context, roster))
            .await
            .unwrap_or_else(lookup)
    }

    /// Runs one model call under the configured timeout. Any failure is
    /// logged and turned into `None` so the caller can use its fallback.
    async fn ask_model<T>(
        &self,
        call: &'static str,
        fut: impl Future<Output = anyhow::Result<T>>,
    ) -> Option<T> {
        match timeout(self.classifier_timeout, fut).await {
            Ok(Ok(value)) => Some(value),
            Ok(Err(e)) => {
                tracing::warn!(call, error = %e, "language model call failed, using fallback");
                None
            }
            Err(_) => {
                tracing::warn!(
                    call,
                    timeout_ms = self.classifier_timeout.as_millis() as u64,
                    "language model call timed out, using fallback"
                );
                None
            }
        }
    }

    fn handle_field(&self, session: &mut Session, message: &str) -> Result<String, TurnError> {
        let dj = session
            .selected_dj
            .ok_or_else(|| anyhow::anyhow!("collecting fields without a selected DJ"))?;

        // Work on a copy so a failed save leaves the session untouched.
        let mut details = session.details.clone();
        let outcome = collect_field(&mut details, message, dj, self.bookings.as_ref())?;

        match outcome {
            FieldOutcome::DateUnavailable { date } => Ok(replies::date_unavailable(dj, &date)),
            FieldOutcome::Accepted {
                field,
                next: Some(next),
            } => {
                session.details = details;
                Ok(replies::field_accepted(field, message, next))
            }
            FieldOutcome::Accepted { next: None, .. } => {
                let quote = pricing::quote(
                    dj.name(),
                    details.location.as_deref().unwrap_or_default(),
                    details.duration.as_deref().unwrap_or_default(),
                );
                let booking = Booking::from_details(dj, &details, quote.total)
                    .ok_or_else(|| anyhow::anyhow!("booking details incomplete"))?;

                self.bookings
                    .record_booking(&booking)
                    .map_err(TurnError::BookingNotSaved)?;

                tracing::info!(
                    session_id = %session.id,
                    booking_id = %booking.id,
                    dj = %dj,
                    total = quote.total,
                    "booking confirmed"
                );

                session.details = details;
                session.state = SessionState::Finalized;
                Ok(replies::booking_summary(dj, &session.details, &quote, &self.agency))
            }
        }
    }
}

fn select_dj(session: &mut Session, message: &str) -> String {
    match Dj::resolve(message) {
        Some(dj) => {
            tracing::info!(session_id = %session.id, dj = %dj, "DJ selected");
            session.selected_dj = Some(dj);
            session.state = SessionState::CollectingFields;
            replies::dj_selected(dj)
        }
        None => replies::UNKNOWN_DJ.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::time::Instant;

    use async_trait::async_trait;

    use super::*;
    use crate::db;
    use crate::models::{BookingField, Entities, ResponseType};
    use crate::services::bookings::SqliteBookingStore;
    use crate::services::sessions::InMemorySessionStore;

    const ROSTER: &str = "ARTISTAS:\n\
NOMBRE: Tortu\n\
Procedencia: Sevilla. Estilo: breaks progresivos con mucha energia.\n\
NOMBRE: Wardian\n\
Procedencia: Granada. Estilo: nu skool breaks para clubs.\n";

    const FIELDS: [&str; 6] = [
        "Sevilla",
        "2025-07-01",
        "2 horas",
        "Ana Lopez",
        "600111222",
        "ana@example.com",
    ];

    struct Harness {
        engine: ConversationEngine,
        sessions: Arc<InMemorySessionStore>,
        bookings: Arc<SqliteBookingStore>,
    }

    fn harness() -> Harness {
        let sessions = Arc::new(InMemorySessionStore::new());
        let conn = db::init_db(":memory:").unwrap();
        let bookings = Arc::new(SqliteBookingStore::new(Arc::new(Mutex::new(conn))));
        let engine = ConversationEngine::new(
            sessions.clone(),
            bookings.clone(),
            Arc::new(KnowledgeBase::new(ROSTER)),
        );
        Harness {
            engine,
            sessions,
            bookings,
        }
    }

    async fn state_of(h: &Harness, id: &str) -> SessionState {
        h.sessions.get(id).unwrap().lock().await.state
    }

    #[tokio::test]
    async fn test_full_booking_flow() {
        let h = harness();

        let reply = h.engine.handle_message(None, "Quiero contratar un DJ").await;
        let id = reply.session_id.clone();
        assert_eq!(reply.status, ReplyStatus::Active);
        assert!(reply.text.contains("NOMBRE: Tortu"));
        assert!(reply.text.ends_with("¿Cual de estos artistas te interesa contratar?"));
        assert_eq!(state_of(&h, &id).await, SessionState::SelectingDj);

        let reply = h.engine.handle_message(Some(&id), "tortu").await;
        assert!(reply.text.contains("Has seleccionado a Tortu"));
        assert_eq!(state_of(&h, &id).await, SessionState::CollectingFields);

        for (i, value) in FIELDS.iter().enumerate().take(5) {
            let reply = h.engine.handle_message(Some(&id), value).await;
            let expected = format!("Ahora necesito: {}", BookingField::ORDER[i + 1].label());
            assert!(reply.text.ends_with(&expected), "{}", reply.text);
        }

        let reply = h.engine.handle_message(Some(&id), FIELDS[5]).await;
        assert_eq!(reply.status, ReplyStatus::Active);
        assert!(reply.text.contains("TOTAL: 1700€"));
        assert!(reply.text.contains("Contratación guardada correctamente"));
        assert_eq!(state_of(&h, &id).await, SessionState::Finalized);
        assert!(h.bookings.is_booked("Tortu", "2025-07-01").unwrap());

        let reply = h.engine.handle_message(Some(&id), "gracias").await;
        assert_eq!(reply.text, replies::GENERIC_PROMPT);
        assert_eq!(state_of(&h, &id).await, SessionState::Finalized);
    }

    #[tokio::test]
    async fn test_non_booking_message_uses_lookup() {
        let h = harness();
        let reply = h.engine.handle_message(None, "de donde es wardian").await;
        assert!(reply
            .text
            .starts_with("Basandome en nuestra base de datos: "));
        assert!(reply.text.contains("Granada"));
        assert_eq!(state_of(&h, &reply.session_id).await, SessionState::Initial);
    }

    #[tokio::test]
    async fn test_unknown_dj_keeps_selecting() {
        let h = harness();
        let id = h.engine.handle_message(None, "booking").await.session_id;

        let reply = h.engine.handle_message(Some(&id), "no se").await;
        assert_eq!(reply.text, replies::UNKNOWN_DJ);
        assert_eq!(state_of(&h, &id).await, SessionState::SelectingDj);
    }

    #[tokio::test]
    async fn test_exit_is_idempotent() {
        let h = harness();
        let id = h.engine.handle_message(None, "reservar").await.session_id;

        let reply = h.engine.handle_message(Some(&id), "SALIR").await;
        assert_eq!(reply.text, replies::FAREWELL);
        assert_eq!(reply.status, ReplyStatus::Completed);
        assert_eq!(reply.session_id, id);
        assert!(h.sessions.get(&id).is_none());

        let again = h.engine.handle_message(Some(&id), "exit").await;
        assert_eq!(again.text, replies::FAREWELL);
        assert_eq!(again.status, ReplyStatus::Completed);

        let fresh = h.engine.handle_message(None, " quit ").await;
        assert_eq!(fresh.text, replies::FAREWELL);
        assert!(h.sessions.is_empty());
    }

    #[tokio::test]
    async fn test_exit_from_every_state() {
        let h = harness();

        let initial = h.engine.handle_message(None, "hola").await.session_id;
        let collecting_id = collecting(&h, "wardian").await;
        h.engine.handle_message(Some(&collecting_id), "Malaga").await;
        let finalized = collecting(&h, "tortu").await;
        for value in FIELDS {
            h.engine.handle_message(Some(&finalized), value).await;
        }

        assert_eq!(state_of(&h, &initial).await, SessionState::Initial);
        assert_eq!(state_of(&h, &collecting_id).await, SessionState::CollectingFields);
        assert_eq!(state_of(&h, &finalized).await, SessionState::Finalized);

        for id in [&initial, &collecting_id, &finalized] {
            let reply = h.engine.handle_message(Some(id.as_str()), "Quit").await;
            assert_eq!(reply.text, replies::FAREWELL);
            assert_eq!(reply.status, ReplyStatus::Completed);
            assert_eq!(&reply.session_id, id);
            assert!(h.sessions.get(id).is_none());
        }
        assert!(h.sessions.is_empty());
    }

    #[tokio::test]
    async fn test_empty_message_does_not_transition() {
        let h = harness();
        let reply = h.engine.handle_message(None, "   ").await;
        assert_eq!(reply.text, replies::EMPTY_PROMPT);
        assert_eq!(state_of(&h, &reply.session_id).await, SessionState::Initial);
    }

    #[tokio::test]
    async fn test_unknown_session_gets_fresh_id() {
        let h = harness();
        let reply = h.engine.handle_message(Some("gone"), "hola").await;
        assert_ne!(reply.session_id, "gone");
        assert!(h.sessions.get(&reply.session_id).is_some());
    }

    async fn collecting(h: &Harness, dj: &str) -> String {
        let id = h.engine.handle_message(None, "contratar").await.session_id;
        h.engine.handle_message(Some(&id), dj).await;
        id
    }

    #[tokio::test]
    async fn test_booked_date_is_reprompted() {
        let h = harness();
        let first = collecting(&h, "tortu").await;
        for value in FIELDS {
            h.engine.handle_message(Some(&first), value).await;
        }

        let id = collecting(&h, "tortu").await;
        h.engine.handle_message(Some(&id), "Malaga").await;
        let reply = h.engine.handle_message(Some(&id), "2025-07-01").await;
        assert_eq!(
            reply.text,
            "Lo siento, Tortu no está disponible el 2025-07-01. Esa fecha ya está ocupada. Por favor, elige otra fecha."
        );
        {
            let handle = h.sessions.get(&id).unwrap();
            let session = handle.lock().await;
            assert_eq!(session.details.filled(), 1);
            assert_eq!(session.details.next_field(), Some(BookingField::Date));
        }

        let reply = h.engine.handle_message(Some(&id), "2025-07-02").await;
        assert!(reply.text.starts_with("[OK] Fecha: 2025-07-02"));
    }

    struct FailingStore;

    impl BookingStore for FailingStore {
        fn is_booked(&self, _dj: &str, _date: &str) -> anyhow::Result<bool> {
            Ok(false)
        }

        fn record_booking(&self, _booking: &Booking) -> Result<(), StoreError> {
            Err(StoreError::Storage(anyhow::anyhow!("disk full")))
        }
    }

    #[tokio::test]
    async fn test_storage_failure_is_reported_and_retryable() {
        let sessions = Arc::new(InMemorySessionStore::new());
        let engine = ConversationEngine::new(
            sessions.clone(),
            Arc::new(FailingStore),
            Arc::new(KnowledgeBase::new(ROSTER)),
        );

        let id = engine.handle_message(None, "contratar").await.session_id;
        engine.handle_message(Some(&id), "wardian").await;
        for value in &FIELDS[..5] {
            engine.handle_message(Some(&id), value).await;
        }

        let reply = engine.handle_message(Some(&id), FIELDS[5]).await;
        assert_eq!(reply.status, ReplyStatus::Error);
        assert_eq!(reply.text, replies::BOOKING_NOT_SAVED);
        assert!(!reply.text.contains("guardada correctamente"));

        let handle = sessions.get(&id).unwrap();
        let session = handle.lock().await;
        assert_eq!(session.state, SessionState::CollectingFields);
        assert_eq!(session.details.filled(), 5);
    }

    struct ScriptedClassifier {
        analysis: Option<IntentAnalysis>,
        reply: Option<String>,
        delay: Option<Duration>,
    }

    #[async_trait]
    impl IntentClassifier for ScriptedClassifier {
        async fn classify(&self, _message: &str, _roster: &str) -> anyhow::Result<IntentAnalysis> {
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.analysis
                .clone()
                .ok_or_else(|| anyhow::anyhow!("provider unavailable"))
        }

        async fn generate_reply(
            &self,
            _message: &str,
            _context: &str,
            _roster: &str,
        ) -> anyhow::Result<String> {
            self.reply
                .clone()
                .ok_or_else(|| anyhow::anyhow!("provider unavailable"))
        }

        async fn describe_dj(&self, _dj_name: &str, _roster: &str) -> anyhow::Result<String> {
            anyhow::bail!("provider unavailable")
        }
    }

    fn with_classifier(classifier: ScriptedClassifier, limit: Duration) -> Harness {
        let mut h = harness();
        h.engine = h.engine.with_classifier(Arc::new(classifier), limit);
        h
    }

    fn analysis(intent: Intent, dj: Option<&str>) -> IntentAnalysis {
        IntentAnalysis {
            intent,
            confidence: 0.9,
            entities: Entities {
                dj_mentioned: dj.map(str::to_string),
                ..Entities::default()
            },
            suggested_response_type: ResponseType::ProvideInfo,
        }
    }

    #[tokio::test]
    async fn test_classifier_booking_intent_without_keywords() {
        let h = with_classifier(
            ScriptedClassifier {
                analysis: Some(analysis(Intent::Booking, None)),
                reply: None,
                delay: None,
            },
            Duration::from_secs(1),
        );
        let reply = h.engine.handle_message(None, "busco alguien que pinche en mi boda").await;
        assert_eq!(state_of(&h, &reply.session_id).await, SessionState::SelectingDj);
    }

    #[tokio::test]
    async fn test_classifier_generates_free_reply() {
        let h = with_classifier(
            ScriptedClassifier {
                analysis: Some(analysis(Intent::Greeting, None)),
                reply: Some("¡Hola! ¿Qué evento estás preparando?".to_string()),
                delay: None,
            },
            Duration::from_secs(1),
        );
        let reply = h.engine.handle_message(None, "hola").await;
        assert_eq!(reply.text, "¡Hola! ¿Qué evento estás preparando?");
        assert_eq!(state_of(&h, &reply.session_id).await, SessionState::Initial);
    }

    #[tokio::test]
    async fn test_classifier_failure_falls_back_to_keywords() {
        let h = with_classifier(
            ScriptedClassifier {
                analysis: None,
                reply: None,
                delay: None,
            },
            Duration::from_secs(1),
        );
        let reply = h.engine.handle_message(None, "quiero contratar").await;
        assert_eq!(reply.status, ReplyStatus::Active);
        assert_eq!(state_of(&h, &reply.session_id).await, SessionState::SelectingDj);

        let reply = h.engine.handle_message(None, "de donde es wardian").await;
        assert!(reply.text.contains("NOMBRE: Wardian"));
        assert!(!reply.text.contains("Tortu"));
    }

    #[tokio::test]
    async fn test_classifier_timeout_falls_back_to_keywords() {
        let h = with_classifier(
            ScriptedClassifier {
                analysis: Some(analysis(Intent::Booking, None)),
                reply: None,
                delay: Some(Duration::from_millis(500)),
            },
            Duration::from_millis(20),
        );
        // A late "booking" answer is discarded; the keyword path sees no booking words.
        let reply = h.engine.handle_message(None, "hola").await;
        assert_eq!(reply.status, ReplyStatus::Active);
        assert!(reply.text.starts_with("Basandome en nuestra base de datos: "));
        assert_eq!(state_of(&h, &reply.session_id).await, SessionState::Initial);
    }

    fn slow_harness() -> Harness {
        with_classifier(
            ScriptedClassifier {
                analysis: Some(analysis(Intent::Greeting, None)),
                reply: Some("¡Hola!".to_string()),
                delay: Some(Duration::from_millis(200)),
            },
            Duration::from_secs(2),
        )
    }

    #[tokio::test]
    async fn test_exit_waits_for_in_flight_turn() {
        let h = slow_harness();
        let id = h.engine.handle_message(None, "hola").await.session_id;

        let turn = async {
            let reply = h.engine.handle_message(Some(&id), "hola otra vez").await;
            (reply, Instant::now())
        };
        let exit = async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            let reply = h.engine.handle_message(Some(&id), "salir").await;
            (reply, Instant::now())
        };
        let ((turn, turn_done), (bye, bye_done)) = tokio::join!(turn, exit);

        assert_eq!(turn.status, ReplyStatus::Active);
        assert_eq!(turn.text, "¡Hola!");
        assert_eq!(bye.status, ReplyStatus::Completed);
        assert!(turn_done <= bye_done, "farewell sent before the running turn finished");
        assert!(h.sessions.get(&id).is_none());
    }

    #[tokio::test]
    async fn test_turn_queued_behind_exit_gets_new_session() {
        let h = slow_harness();
        let id = h.engine.handle_message(None, "hola").await.session_id;

        let first = h.engine.handle_message(Some(&id), "hola otra vez");
        let exit = async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            h.engine.handle_message(Some(&id), "salir").await
        };
        let late = async {
            tokio::time::sleep(Duration::from_millis(100)).await;
            h.engine.handle_message(Some(&id), "hola de nuevo").await
        };
        let (_, bye, late) = tokio::join!(first, exit, late);

        assert_eq!(bye.status, ReplyStatus::Completed);
        assert_eq!(late.status, ReplyStatus::Active);
        assert_ne!(late.session_id, id);
        assert!(h.sessions.get(&id).is_none());
        assert!(h.sessions.get(&late.session_id).is_some());
    }

    #[test]
    fn test_exit_commands() {
        assert!(is_exit_command("Salir"));
        assert!(is_exit_command(" QUIT "));
        assert!(!is_exit_command("quiero salir"));
    }
}
