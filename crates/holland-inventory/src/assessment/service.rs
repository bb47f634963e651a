use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::blueprint::{AssessmentBlueprint, Step};
use super::domain::{LedgerError, ProfileField, TOTAL_ITEMS};
use super::ledger::AnswerLedger;
use super::scoring::{ScoreReport, ScoringEngine};
use super::submission::{ResultSubmitter, SubmissionError, SubmissionPayload};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

static SESSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_session_id() -> SessionId {
    let id = SESSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SessionId(format!("assessment-{id:06}"))
}

/// Identity fields supplied when a respondent starts a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileSubmission {
    pub name: String,
    pub surname: String,
    pub section: String,
    pub gender: String,
}

/// One live assessment: the ledger plus the cached score report.
#[derive(Debug, Clone)]
struct AssessmentSession {
    ledger: AnswerLedger,
    report: Option<ScoreReport>,
    started_at: DateTime<Utc>,
}

/// Service composing the blueprint, the in-memory session map, and the
/// outbound submitter. One logical actor mutates any given session, so the
/// map-level mutex is the only synchronization needed.
pub struct AssessmentService<S> {
    blueprint: AssessmentBlueprint,
    sessions: Mutex<HashMap<SessionId, AssessmentSession>>,
    submitter: Arc<S>,
}

impl<S> AssessmentService<S>
where
    S: ResultSubmitter + 'static,
{
    pub fn new(submitter: Arc<S>) -> Self {
        Self {
            blueprint: AssessmentBlueprint::standard(),
            sessions: Mutex::new(HashMap::new()),
            submitter,
        }
    }

    pub fn blueprint(&self) -> &AssessmentBlueprint {
        &self.blueprint
    }

    /// Opens a session for the given profile. All four fields must be
    /// non-empty; the returned view already sits on the first instruction
    /// step.
    pub fn start(
        &self,
        submission: ProfileSubmission,
    ) -> Result<SessionView, AssessmentServiceError> {
        let mut ledger = AnswerLedger::new(&self.blueprint);
        ledger.set_profile_field(ProfileField::Name, submission.name);
        ledger.set_profile_field(ProfileField::Surname, submission.surname);
        ledger.set_profile_field(ProfileField::Section, submission.section);
        ledger.set_profile_field(ProfileField::Gender, submission.gender);
        ledger.advance()?;

        let session_id = next_session_id();
        let session = AssessmentSession {
            ledger,
            report: None,
            started_at: Utc::now(),
        };
        let view = self.view_of(&session_id, &session);

        let mut sessions = self.sessions.lock().expect("session mutex poisoned");
        sessions.insert(session_id.clone(), session);
        info!(session = %session_id.0, "assessment session started");

        Ok(view)
    }

    pub fn view(&self, session_id: &SessionId) -> Result<SessionView, AssessmentServiceError> {
        let sessions = self.sessions.lock().expect("session mutex poisoned");
        let session = sessions
            .get(session_id)
            .ok_or(AssessmentServiceError::SessionNotFound)?;
        Ok(self.view_of(session_id, session))
    }

    /// Moves past the current instruction page.
    pub fn advance(&self, session_id: &SessionId) -> Result<SessionView, AssessmentServiceError> {
        self.with_session(session_id, |session| {
            session.ledger.advance()?;
            Ok(())
        })
    }

    /// Records one answer. A rejected write (duplicate self-rating value,
    /// bad range) propagates the ledger error and leaves the session as it
    /// was, cursor included.
    pub fn answer(
        &self,
        session_id: &SessionId,
        item: usize,
        value: u8,
    ) -> Result<SessionView, AssessmentServiceError> {
        self.with_session(session_id, |session| {
            session.ledger.record_answer(item, value)?;
            // Any cached report predates this answer; drop it so scoring
            // always re-derives from the current snapshot.
            session.report = None;
            Ok(())
        })
    }

    pub fn back(&self, session_id: &SessionId) -> Result<SessionView, AssessmentServiceError> {
        self.with_session(session_id, |session| {
            session.ledger.go_back();
            Ok(())
        })
    }

    /// Computes the score report from the current answer snapshot and caches
    /// it on the session so submission retries need no recomputation.
    pub fn score(&self, session_id: &SessionId) -> Result<ScoreReport, AssessmentServiceError> {
        let mut sessions = self.sessions.lock().expect("session mutex poisoned");
        let session = sessions
            .get_mut(session_id)
            .ok_or(AssessmentServiceError::SessionNotFound)?;

        let report = ScoringEngine::score(&session.ledger.answers());
        session.report = Some(report.clone());
        Ok(report)
    }

    /// Hands the finished assessment to the submission collaborator. The
    /// session is left intact either way, so a transport failure can be
    /// retried without recomputing anything.
    pub fn submit(
        &self,
        session_id: &SessionId,
    ) -> Result<SubmissionPayload, AssessmentServiceError> {
        let payload = {
            let sessions = self.sessions.lock().expect("session mutex poisoned");
            let session = sessions
                .get(session_id)
                .ok_or(AssessmentServiceError::SessionNotFound)?;
            let report = session
                .report
                .as_ref()
                .ok_or(AssessmentServiceError::NotScored)?;

            SubmissionPayload::new(
                session.ledger.profile(),
                session.ledger.answers(),
                report.top3_codes(),
                Utc::now(),
            )
        };

        self.submitter.submit(payload.clone())?;
        info!(session = %session_id.0, top3 = ?payload.top3, "assessment submitted");
        Ok(payload)
    }

    fn with_session(
        &self,
        session_id: &SessionId,
        apply: impl FnOnce(&mut AssessmentSession) -> Result<(), LedgerError>,
    ) -> Result<SessionView, AssessmentServiceError> {
        let mut sessions = self.sessions.lock().expect("session mutex poisoned");
        let session = sessions
            .get_mut(session_id)
            .ok_or(AssessmentServiceError::SessionNotFound)?;
        apply(session)?;
        Ok(self.view_of(session_id, session))
    }

    fn view_of(&self, session_id: &SessionId, session: &AssessmentSession) -> SessionView {
        let step = session.ledger.current_step();

        let (question, disabled_values) = match step {
            Step::Item { index, item_kind } => {
                let disabled = (item_kind.min_value()..=item_kind.max_value())
                    .filter(|value| session.ledger.is_choice_disabled(index, *value))
                    .collect();
                (self.blueprint.question(index), disabled)
            }
            _ => (None, Vec::new()),
        };

        SessionView {
            session_id: session_id.clone(),
            step,
            question,
            disabled_values,
            answered_count: session.ledger.answered_count(),
            total_items: TOTAL_ITEMS,
            scored: session.report.is_some(),
            started_at: session.started_at,
        }
    }
}

/// Snapshot of a session as exposed over the API: the current step plus
/// whatever the UI needs to render it.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub session_id: SessionId,
    pub step: Step,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub disabled_values: Vec<u8>,
    pub answered_count: usize,
    pub total_items: usize,
    pub scored: bool,
    pub started_at: DateTime<Utc>,
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error("assessment session not found")]
    SessionNotFound,
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("scores have not been computed for this session yet")]
    NotScored,
    #[error(transparent)]
    Submission(#[from] SubmissionError),
}
