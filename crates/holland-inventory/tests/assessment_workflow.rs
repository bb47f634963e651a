use holland_inventory::assessment::{
    AnswerLedger, AssessmentBlueprint, Dimension, InstructionPage, LedgerError, ProfileField,
    ScoringEngine, Step, ATTITUDE_ITEMS, TOTAL_ITEMS,
};

fn filled_profile(ledger: &mut AnswerLedger) {
    ledger.set_profile_field(ProfileField::Name, "Grace");
    ledger.set_profile_field(ProfileField::Surname, "Hopper");
    ledger.set_profile_field(ProfileField::Section, "5th D");
    ledger.set_profile_field(ProfileField::Gender, "Female");
}

#[test]
fn blueprint_exposes_sixty_six_questions_grouped_by_dimension() {
    let blueprint = AssessmentBlueprint::standard();

    for dimension in Dimension::ordered() {
        let statements = blueprint.statements_for(dimension);
        assert_eq!(
            statements.len(),
            10,
            "{} should own ten attitude statements",
            dimension.label()
        );
    }

    for index in 0..TOTAL_ITEMS {
        assert!(
            blueprint.question(index).is_some(),
            "item {index} has question text"
        );
    }
}

#[test]
fn respondent_walks_the_whole_sequence_and_gets_a_ranked_result() {
    let blueprint = AssessmentBlueprint::standard();
    let mut ledger = AnswerLedger::new(&blueprint);

    filled_profile(&mut ledger);
    assert_eq!(
        ledger.advance().expect("profile complete"),
        Step::Instructions {
            page: InstructionPage::AttitudeBlock
        }
    );
    ledger.advance().expect("begin attitude block");

    // Strong agreement on the Artistic block, neutral everywhere else.
    for item in 0..ATTITUDE_ITEMS {
        let value = if Dimension::Artistic.attitude_range().contains(&item) {
            5
        } else {
            3
        };
        ledger.record_answer(item, value).expect("attitude answer");
    }
    ledger.advance().expect("begin self-rating block");

    // Artistic self-rated highest; the rest take the remaining values.
    let self_ratings = [1u8, 2, 6, 3, 4, 5];
    for (offset, value) in self_ratings.into_iter().enumerate() {
        ledger
            .record_answer(ATTITUDE_ITEMS + offset, value)
            .expect("self-rating answer");
    }

    assert_eq!(ledger.current_step(), Step::Results);
    assert!(ledger.is_complete());

    let report = ScoringEngine::score(&ledger.answers());
    assert_eq!(report.top3[0], Dimension::Artistic);
    let artistic = report.score_for(Dimension::Artistic);
    assert_eq!(artistic.sum, 50);
    assert_eq!(artistic.sub, 20);

    // Scoring again from the same ledger snapshot changes nothing.
    assert_eq!(report, ScoringEngine::score(&ledger.answers()));
}

#[test]
fn backtracking_respondent_can_revise_without_losing_progress() {
    let blueprint = AssessmentBlueprint::standard();
    let mut ledger = AnswerLedger::new(&blueprint);
    filled_profile(&mut ledger);
    ledger.advance().expect("past profile");
    ledger.advance().expect("past instructions");

    ledger.record_answer(0, 2).expect("first take");
    ledger.record_answer(1, 4).expect("second item");

    ledger.go_back();
    ledger.go_back();
    assert!(matches!(ledger.current_step(), Step::Item { index: 0, .. }));
    assert_eq!(ledger.answer(1), Some(4), "later answer survives");

    ledger.record_answer(0, 5).expect("revised answer");
    assert_eq!(ledger.answer(0), Some(5));
}

#[test]
fn self_rating_block_enforces_the_no_repeat_rule_end_to_end() {
    let blueprint = AssessmentBlueprint::standard();
    let mut ledger = AnswerLedger::new(&blueprint);
    filled_profile(&mut ledger);

    ledger.record_answer(60, 6).expect("first self-rating");
    assert_eq!(
        ledger.record_answer(61, 6),
        Err(LedgerError::DuplicateSelfRating(6))
    );
    assert!(ledger.is_choice_disabled(61, 6));
    assert!(!ledger.is_choice_disabled(61, 1));
}
