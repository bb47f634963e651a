use crate::infra::RecordingSubmitter;
use clap::Args;
use holland_inventory::assessment::{
    AssessmentService, Dimension, ProfileSubmission, ATTITUDE_ITEMS,
};
use holland_inventory::error::AppError;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Respondent first name
    #[arg(long, default_value = "Alex")]
    pub(crate) name: String,
    /// Respondent surname
    #[arg(long, default_value = "Rivera")]
    pub(crate) surname: String,
    /// Class section label
    #[arg(long, default_value = "5th F")]
    pub(crate) section: String,
    /// Gender label
    #[arg(long, default_value = "Other")]
    pub(crate) gender: String,
    /// Print the score report and submission payload as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

// Scripted answers: one agreement level per attitude block, and a matching
// permutation of the six self-rating values.
const ATTITUDE_EMPHASIS: [u8; Dimension::COUNT] = [3, 4, 2, 5, 3, 4];
const SELF_RATINGS: [u8; Dimension::COUNT] = [2, 4, 1, 6, 3, 5];

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let submitter = Arc::new(RecordingSubmitter::new(None));
    let service = AssessmentService::new(submitter.clone());

    let session = service.start(ProfileSubmission {
        name: args.name,
        surname: args.surname,
        section: args.section,
        gender: args.gender,
    })?;
    let id = session.session_id;

    service.advance(&id)?;
    for (position, dimension) in Dimension::ordered().into_iter().enumerate() {
        for item in dimension.attitude_range() {
            service.answer(&id, item, ATTITUDE_EMPHASIS[position])?;
        }
    }
    service.advance(&id)?;
    for (offset, value) in SELF_RATINGS.into_iter().enumerate() {
        service.answer(&id, ATTITUDE_ITEMS + offset, value)?;
    }

    let report = service.score(&id)?;
    let payload = service.submit(&id)?;

    if args.json {
        println!(
            "{}",
            serde_json::json!({ "report": report, "submission": payload })
        );
        return Ok(());
    }

    println!("RIASEC demo respondent: {} {}", payload.name, payload.surname);
    println!();
    println!("{:<14} {:>5} {:>5} {:>7} {:>7} {:>7}", "Dimension", "Sum", "Sub", "P", "Self", "T");
    for score in &report.scores {
        println!(
            "{:<14} {:>5} {:>5} {:>7.2} {:>7.2} {:>7.2}",
            score.dimension.label(),
            score.sum,
            score.sub,
            score.p,
            score.self_rating,
            score.t
        );
    }
    println!();
    println!("Top 3: {}", report.top3_codes().join(" > "));
    println!("Submitted at {}", payload.submitted_at);
    println!("Recorded submissions: {}", submitter.payloads().len());

    Ok(())
}
