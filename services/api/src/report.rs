use crate::infra::engine_from_config;
use chrono::{Local, NaiveDate};
use clap::Args;
use lien_assist::config::AppConfig;
use lien_assist::error::AppError;
use lien_assist::workflows::lien::{
    BatchAssessment, BatchOutcome, BatchRowResult, DeadlineResult, EngineResult, IntakeMode,
    RawAnswers,
};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Questionnaire answers as a JSON object keyed by field id
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Evaluation date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Accept an incomplete questionnaire
    #[arg(long)]
    pub(crate) draft: bool,
    /// Print the raw engine result as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV export with one submission per row and field ids as headers
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Evaluation date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print every row outcome as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_assessment(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        answers,
        today,
        draft,
        json,
    } = args;

    let config = AppConfig::load()?;
    let engine = engine_from_config(&config)?;
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let mode = if draft {
        IntakeMode::Draft
    } else {
        IntakeMode::Submitted
    };

    let reader = BufReader::new(File::open(answers)?);
    let answers: RawAnswers = serde_json::from_reader(reader)?;
    let result = engine.evaluate_with_mode(&answers, today, mode)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", render_assessment(&result, today));
    }

    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let BatchArgs { csv, today, json } = args;

    let config = AppConfig::load()?;
    let engine = engine_from_config(&config)?;
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let outcomes = BatchAssessment::from_path(csv, &engine, today)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
    } else {
        println!("{}", render_batch(&outcomes, today));
    }

    Ok(())
}

pub(crate) fn render_assessment(result: &EngineResult, today: NaiveDate) -> String {
    let mut lines = vec![
        format!("Lien assessment (evaluated {today})"),
        format!("- Claimant tier: {}", result.tier.label()),
        format!("- Filing track: {}", result.track.label()),
        format!("- Deadline: {}", describe_deadline(&result.deadline)),
        format!("- Claim strength: {}", result.validity.level.label()),
    ];

    if result.deadline.is_urgent {
        lines.push("- URGENT: the filing window is closing".to_string());
    }

    lines.push("Next steps:".to_string());
    for (index, item) in result.recommendations.iter().enumerate() {
        lines.push(format!("  {}. {}", index + 1, item));
    }

    lines.join("\n")
}

pub(crate) fn render_batch(outcomes: &[BatchOutcome], today: NaiveDate) -> String {
    let assessed = outcomes.iter().filter(|outcome| outcome.is_assessed()).count();
    let mut lines = vec![format!(
        "Batch assessment (evaluated {today}): {} rows | {} assessed | {} rejected",
        outcomes.len(),
        assessed,
        outcomes.len() - assessed
    )];

    for outcome in outcomes {
        let id = outcome
            .submission_id
            .as_deref()
            .map(|id| format!(" [{id}]"))
            .unwrap_or_default();
        let detail = match &outcome.result {
            BatchRowResult::Assessed(result) => format!(
                "{} | {} | deadline {}",
                result.validity.level.label(),
                result.tier.label(),
                describe_deadline(&result.deadline)
            ),
            BatchRowResult::Rejected(err) => format!("rejected: {err}"),
        };
        lines.push(format!("- row {}{}: {}", outcome.row, id, detail));
    }

    lines.join("\n")
}

fn describe_deadline(deadline: &DeadlineResult) -> String {
    match (deadline.deadline_date, deadline.days_remaining) {
        (Some(date), Some(days)) if days > 0 => format!("{date} ({days} days remaining)"),
        (Some(date), Some(0)) => format!("{date} (today; filing window closed)"),
        (Some(date), Some(days)) => format!("{date} (passed {} days ago)", -days),
        _ => "unknown (last work date not provided)".to_string(),
    }
}
