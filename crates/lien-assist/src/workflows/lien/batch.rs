use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use super::domain::{EngineResult, RawAnswers, RawValue};
use super::engine::LienEngine;
use super::intake::{fields, ValidationError};

pub const SUBMISSION_ID_COLUMN: &str = "submissionId";

#[derive(Debug, thiserror::Error)]
pub enum BatchImportError {
    #[error("failed to read submissions export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid submissions CSV data: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum BatchRowResult {
    Assessed(EngineResult),
    Rejected(ValidationError),
}

/// Evaluation outcome for one exported submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchOutcome {
    /// 1-based data row, not counting the header.
    pub row: usize,
    pub submission_id: Option<String>,
    pub result: BatchRowResult,
}

impl BatchOutcome {
    pub fn is_assessed(&self) -> bool {
        matches!(self.result, BatchRowResult::Assessed(_))
    }
}

/// Re-evaluates exported questionnaire submissions against a single "today".
///
/// Column headers are questionnaire field ids; unknown columns are ignored.
pub struct BatchAssessment;

impl BatchAssessment {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        engine: &LienEngine,
        today: NaiveDate,
    ) -> Result<Vec<BatchOutcome>, BatchImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, engine, today)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        engine: &LienEngine,
        today: NaiveDate,
    ) -> Result<Vec<BatchOutcome>, BatchImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let headers = csv_reader.headers()?.clone();
        let mut outcomes = Vec::new();

        for (index, record) in csv_reader.records().enumerate() {
            let record = record?;
            let mut answers = RawAnswers::new();
            let mut submission_id = None;

            for (header, value) in headers.iter().zip(record.iter()) {
                if header == SUBMISSION_ID_COLUMN {
                    submission_id = Some(value.to_string()).filter(|id| !id.is_empty());
                } else if fields::ALL.contains(&header) {
                    answers.insert(header, RawValue::Text(value.to_string()));
                }
            }

            let result = match engine.evaluate(&answers, today) {
                Ok(result) => BatchRowResult::Assessed(result),
                Err(err) => BatchRowResult::Rejected(err),
            };

            outcomes.push(BatchOutcome {
                row: index + 1,
                submission_id,
                result,
            });
        }

        let assessed = outcomes.iter().filter(|outcome| outcome.is_assessed()).count();
        info!(
            rows = outcomes.len(),
            assessed,
            rejected = outcomes.len() - assessed,
            %today,
            "batch assessment complete"
        );

        Ok(outcomes)
    }
}
