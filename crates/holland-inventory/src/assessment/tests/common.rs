use std::sync::Mutex;

use crate::assessment::blueprint::AssessmentBlueprint;
use crate::assessment::domain::{ProfileField, ATTITUDE_ITEMS, TOTAL_ITEMS};
use crate::assessment::ledger::AnswerLedger;
use crate::assessment::service::ProfileSubmission;
use crate::assessment::submission::{ResultSubmitter, SubmissionError, SubmissionPayload};

pub(crate) fn ledger_with_profile() -> AnswerLedger {
    let blueprint = AssessmentBlueprint::standard();
    let mut ledger = AnswerLedger::new(&blueprint);
    ledger.set_profile_field(ProfileField::Name, "Ada");
    ledger.set_profile_field(ProfileField::Surname, "Lovelace");
    ledger.set_profile_field(ProfileField::Section, "5th F");
    ledger.set_profile_field(ProfileField::Gender, "Female");
    ledger
}

/// Ledger positioned on the first attitude item.
pub(crate) fn ledger_at_first_item() -> AnswerLedger {
    let mut ledger = ledger_with_profile();
    ledger.advance().expect("complete profile advances");
    ledger.advance().expect("instructions advance");
    ledger
}

pub(crate) fn profile_submission() -> ProfileSubmission {
    ProfileSubmission {
        name: "Ada".to_string(),
        surname: "Lovelace".to_string(),
        section: "5th F".to_string(),
        gender: "Female".to_string(),
    }
}

/// Answer array with every attitude item set to `attitude_value` and the six
/// self-ratings set to the distinct values 1-6 in dimension order.
pub(crate) fn uniform_answers(attitude_value: u8) -> [Option<u8>; TOTAL_ITEMS] {
    let mut answers = [None; TOTAL_ITEMS];
    for slot in answers.iter_mut().take(ATTITUDE_ITEMS) {
        *slot = Some(attitude_value);
    }
    for (offset, slot) in answers.iter_mut().skip(ATTITUDE_ITEMS).enumerate() {
        *slot = Some(offset as u8 + 1);
    }
    answers
}

/// Submitter capturing every payload for assertions.
#[derive(Default)]
pub(crate) struct RecordingSubmitter {
    payloads: Mutex<Vec<SubmissionPayload>>,
}

impl RecordingSubmitter {
    pub(crate) fn payloads(&self) -> Vec<SubmissionPayload> {
        self.payloads.lock().expect("submitter mutex poisoned").clone()
    }
}

impl ResultSubmitter for RecordingSubmitter {
    fn submit(&self, payload: SubmissionPayload) -> Result<(), SubmissionError> {
        self.payloads
            .lock()
            .expect("submitter mutex poisoned")
            .push(payload);
        Ok(())
    }
}

/// Submitter standing in for an unreachable results backend.
#[derive(Default)]
pub(crate) struct FailingSubmitter;

impl ResultSubmitter for FailingSubmitter {
    fn submit(&self, _payload: SubmissionPayload) -> Result<(), SubmissionError> {
        Err(SubmissionError::Transport(
            "results backend unreachable".to_string(),
        ))
    }
}
