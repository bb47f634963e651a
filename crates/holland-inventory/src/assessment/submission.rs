use super::domain::{RespondentProfile, TOTAL_ITEMS};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Immutable snapshot handed to the submission collaborator once scoring is
/// done: identity fields, the raw 66-slot answer array, and the top-3 codes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub name: String,
    pub surname: String,
    pub section: String,
    pub gender: String,
    pub answers: Vec<Option<u8>>,
    pub top3: [String; 3],
    pub submitted_at: DateTime<Utc>,
}

impl SubmissionPayload {
    pub fn new(
        profile: &RespondentProfile,
        answers: [Option<u8>; TOTAL_ITEMS],
        top3: [&'static str; 3],
        submitted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            name: profile.name.clone(),
            surname: profile.surname.clone(),
            section: profile.section.clone(),
            gender: profile.gender.clone(),
            answers: answers.to_vec(),
            top3: top3.map(str::to_string),
            submitted_at,
        }
    }
}

/// Outbound boundary to whatever persists results (HTTP backend, queue,
/// in-memory recorder in tests). The core never retries; transport policy
/// belongs to implementations.
pub trait ResultSubmitter: Send + Sync {
    fn submit(&self, payload: SubmissionPayload) -> Result<(), SubmissionError>;
}

/// Submission transport failure. Non-fatal: the session stays intact and
/// the caller may retry without recomputing scores.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("submission transport unavailable: {0}")]
    Transport(String),
}
