//! RIASEC/Holland interest inventory: answer collection, scoring, and the
//! session API.
//!
//! The assessment walks a respondent through a fixed 70-step sequence
//! (profile entry, instructions, 60 attitude items, instructions, 6
//! self-rating items, results). [`AnswerLedger`] owns all mutable state and
//! funnels every mutation through explicit operations; [`ScoringEngine`]
//! turns an answer snapshot into the six dimension scores and the top-3
//! result.

pub mod blueprint;
pub mod domain;
pub mod ledger;
pub mod router;
pub mod scoring;
pub mod service;
pub mod submission;

#[cfg(test)]
mod tests;

pub use blueprint::{AssessmentBlueprint, InstructionPage, Step};
pub use domain::{
    Dimension, ItemKind, LedgerError, ProfileField, RespondentProfile, ATTITUDE_ITEMS,
    SELF_RATING_ITEMS, TOTAL_ITEMS,
};
pub use ledger::AnswerLedger;
pub use router::assessment_router;
pub use scoring::{DimensionScore, ScoreReport, ScoringEngine};
pub use service::{
    AssessmentService, AssessmentServiceError, ProfileSubmission, SessionId, SessionView,
};
pub use submission::{ResultSubmitter, SubmissionError, SubmissionPayload};
