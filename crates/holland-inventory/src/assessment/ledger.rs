use super::blueprint::{AssessmentBlueprint, Step};
use super::domain::{
    ItemKind, LedgerError, ProfileField, RespondentProfile, ATTITUDE_ITEMS, TOTAL_ITEMS,
};

/// Mutable assessment state for one respondent: identity fields, the 66-slot
/// answer array, and the navigation cursor over the blueprint's step list.
///
/// All mutation goes through the operations below; the uniqueness constraint
/// on the self-rating block is checked before any write, so no caller ever
/// observes a transient violation.
#[derive(Debug, Clone)]
pub struct AnswerLedger {
    profile: RespondentProfile,
    answers: [Option<u8>; TOTAL_ITEMS],
    cursor: usize,
    steps: Vec<Step>,
}

impl AnswerLedger {
    pub fn new(blueprint: &AssessmentBlueprint) -> Self {
        Self {
            profile: RespondentProfile::default(),
            answers: [None; TOTAL_ITEMS],
            cursor: 0,
            steps: blueprint.steps().to_vec(),
        }
    }

    /// Writes one identity field. Accepts any string and never moves the
    /// cursor; emptiness is only checked when leaving the profile step.
    pub fn set_profile_field(&mut self, field: ProfileField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ProfileField::Name => self.profile.name = value,
            ProfileField::Surname => self.profile.surname = value,
            ProfileField::Section => self.profile.section = value,
            ProfileField::Gender => self.profile.gender = value,
        }
    }

    pub fn profile(&self) -> &RespondentProfile {
        &self.profile
    }

    /// Gate for leaving the profile-entry step.
    pub fn can_advance_from_profile(&self) -> bool {
        self.profile.is_complete()
    }

    /// Explicit transition for the non-item steps. Leaving the profile step
    /// requires a complete profile; instruction pages advance freely; item
    /// and results steps do not accept a bare advance.
    pub fn advance(&mut self) -> Result<Step, LedgerError> {
        match self.current_step() {
            Step::ProfileEntry => {
                if !self.can_advance_from_profile() {
                    return Err(LedgerError::IncompleteProfile);
                }
            }
            Step::Instructions { .. } => {}
            Step::Item { .. } | Step::Results => return Err(LedgerError::StepMismatch),
        }

        self.cursor += 1;
        Ok(self.current_step())
    }

    /// Records an answer and advances one step. For self-rating items the
    /// write is rejected, with the ledger left untouched, when the value is
    /// already held by another slot of the block. Answering the final
    /// self-rating item jumps straight to the results step.
    pub fn record_answer(&mut self, item: usize, value: u8) -> Result<Step, LedgerError> {
        if item >= TOTAL_ITEMS {
            return Err(LedgerError::ItemOutOfBounds(item));
        }
        let kind = ItemKind::for_index(item);
        if !kind.accepts(value) {
            return Err(LedgerError::ValueOutOfRange {
                item,
                value,
                min: kind.min_value(),
                max: kind.max_value(),
            });
        }
        if kind == ItemKind::SelfRating && self.value_used_elsewhere(item, value) {
            return Err(LedgerError::DuplicateSelfRating(value));
        }

        self.answers[item] = Some(value);
        self.cursor = if item == TOTAL_ITEMS - 1 {
            self.results_position()
        } else {
            (self.cursor + 1).min(self.results_position())
        };
        Ok(self.current_step())
    }

    /// Steps back one position, floored at profile entry. Answers are never
    /// erased by navigation.
    pub fn go_back(&mut self) -> Step {
        self.cursor = self.cursor.saturating_sub(1);
        self.current_step()
    }

    /// Read-side mirror of the self-rating uniqueness check, used to gray
    /// out options before selection. Always false for attitude items.
    pub fn is_choice_disabled(&self, item: usize, value: u8) -> bool {
        if ItemKind::for_index(item) != ItemKind::SelfRating {
            return false;
        }
        self.value_used_elsewhere(item, value)
    }

    pub fn current_step(&self) -> Step {
        self.steps[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn answer(&self, item: usize) -> Option<u8> {
        self.answers.get(item).copied().flatten()
    }

    /// Snapshot of the full answer array, as consumed by the scoring engine.
    pub fn answers(&self) -> [Option<u8>; TOTAL_ITEMS] {
        self.answers
    }

    pub fn is_complete(&self) -> bool {
        self.answers.iter().all(Option::is_some)
    }

    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|slot| slot.is_some()).count()
    }

    fn results_position(&self) -> usize {
        self.steps.len() - 1
    }

    // The single uniqueness predicate shared by the write gate and the
    // disabled-option query.
    fn value_used_elsewhere(&self, item: usize, value: u8) -> bool {
        self.answers[ATTITUDE_ITEMS..]
            .iter()
            .enumerate()
            .any(|(offset, slot)| ATTITUDE_ITEMS + offset != item && *slot == Some(value))
    }
}
