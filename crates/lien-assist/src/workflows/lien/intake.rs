use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::domain::{
    ContractEvidence, ContractParty, PaymentDemandStatus, PreliminaryNoticeStatus,
    ProjectAssessment, ProjectType, RawAnswers, RawValue,
};

/// Questionnaire field ids as the intake form submits them.
pub mod fields {
    pub const PROJECT_TYPE: &str = "projectType";
    pub const CONTRACT_PARTY: &str = "contractParty";
    pub const WORK_START_DATE: &str = "workStartDate";
    pub const LAST_WORK_DATE: &str = "lastWorkDate";
    pub const AMOUNT_OWED: &str = "amountOwed";
    pub const HAS_WRITTEN_CONTRACT: &str = "hasWrittenContract";
    pub const PRELIMINARY_NOTICE_STATUS: &str = "preliminaryNoticeStatus";
    pub const PAYMENT_DEMAND_STATUS: &str = "paymentDemandStatus";
    pub const HAS_EXISTING_LIEN: &str = "hasExistingLien";

    pub const ALL: [&str; 9] = [
        PROJECT_TYPE,
        CONTRACT_PARTY,
        WORK_START_DATE,
        LAST_WORK_DATE,
        AMOUNT_OWED,
        HAS_WRITTEN_CONTRACT,
        PRELIMINARY_NOTICE_STATUS,
        PAYMENT_DEMAND_STATUS,
        HAS_EXISTING_LIEN,
    ];
}

/// Whether required answers must be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntakeMode {
    /// Final submission: every required answer must be present.
    #[default]
    Submitted,
    /// In-progress questionnaire: missing answers are tolerated, malformed ones are not.
    Draft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    Missing,
    Malformed,
}

/// One problem with one questionnaire answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIssue {
    pub field: String,
    pub kind: IssueKind,
    pub message: String,
}

impl FieldIssue {
    fn missing(field: &str) -> Self {
        Self {
            field: field.to_string(),
            kind: IssueKind::Missing,
            message: format!("{field} is required"),
        }
    }

    fn malformed(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            kind: IssueKind::Malformed,
            message: message.into(),
        }
    }
}

/// Every missing or malformed answer found in one pass over the questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub issues: Vec<FieldIssue>,
}

impl ValidationError {
    pub fn has_issue(&self, field: &str, kind: IssueKind) -> bool {
        self.issues
            .iter()
            .any(|issue| issue.field == field && issue.kind == kind)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let details = self
            .issues
            .iter()
            .map(|issue| issue.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        write!(
            f,
            "{} questionnaire answer(s) need attention: {}",
            self.issues.len(),
            details
        )
    }
}

impl std::error::Error for ValidationError {}

/// Convert raw questionnaire answers into a typed assessment.
pub fn normalize(
    answers: &RawAnswers,
    mode: IntakeMode,
) -> Result<ProjectAssessment, ValidationError> {
    let mut issues = Vec::new();

    let project_type = read_choice(
        answers,
        fields::PROJECT_TYPE,
        ProjectType::from_raw,
        &mut issues,
    )
    .unwrap_or(ProjectType::Other);

    let contract_party = read_choice(
        answers,
        fields::CONTRACT_PARTY,
        ContractParty::from_raw,
        &mut issues,
    );
    let contract_party = require(
        contract_party,
        fields::CONTRACT_PARTY,
        mode,
        answers,
        &mut issues,
    )
    .unwrap_or(ContractParty::Unknown);

    let work_start_date = read_date(answers, fields::WORK_START_DATE, &mut issues);
    let last_work_date = read_date(answers, fields::LAST_WORK_DATE, &mut issues);
    let last_work_date = require(
        last_work_date,
        fields::LAST_WORK_DATE,
        mode,
        answers,
        &mut issues,
    );

    if let (Some(start), Some(last)) = (work_start_date, last_work_date) {
        if start > last {
            issues.push(FieldIssue::malformed(
                fields::WORK_START_DATE,
                format!(
                    "{} ({start}) is after {} ({last})",
                    fields::WORK_START_DATE,
                    fields::LAST_WORK_DATE
                ),
            ));
        }
    }

    let amount_owed_cents = read_amount(answers, fields::AMOUNT_OWED, &mut issues).unwrap_or(0);

    let contract_evidence = read_choice(
        answers,
        fields::HAS_WRITTEN_CONTRACT,
        ContractEvidence::from_raw,
        &mut issues,
    )
    .unwrap_or(ContractEvidence::None);

    let preliminary_notice = read_choice(
        answers,
        fields::PRELIMINARY_NOTICE_STATUS,
        PreliminaryNoticeStatus::from_raw,
        &mut issues,
    )
    .unwrap_or(PreliminaryNoticeStatus::Unknown);

    let payment_demand = read_choice(
        answers,
        fields::PAYMENT_DEMAND_STATUS,
        PaymentDemandStatus::from_raw,
        &mut issues,
    )
    .unwrap_or(PaymentDemandStatus::None);

    let has_existing_lien =
        read_flag(answers, fields::HAS_EXISTING_LIEN, &mut issues).unwrap_or(false);

    if !issues.is_empty() {
        return Err(ValidationError { issues });
    }

    Ok(ProjectAssessment {
        project_type,
        contract_party,
        work_start_date,
        last_work_date,
        amount_owed_cents,
        contract_evidence,
        preliminary_notice,
        payment_demand,
        has_existing_lien,
    })
}

/// Record a missing-field issue when a required answer was left blank.
///
/// A malformed answer has already been reported, so it is not reported again.
fn require<T>(
    value: Option<T>,
    field: &str,
    mode: IntakeMode,
    answers: &RawAnswers,
    issues: &mut Vec<FieldIssue>,
) -> Option<T> {
    if value.is_none() && mode == IntakeMode::Submitted && answers.answered(field).is_none() {
        issues.push(FieldIssue::missing(field));
    }
    value
}

fn read_choice<T>(
    answers: &RawAnswers,
    field: &str,
    parse: fn(&str) -> Option<T>,
    issues: &mut Vec<FieldIssue>,
) -> Option<T> {
    let value = answers.answered(field)?;
    let parsed = match value {
        RawValue::Text(text) => parse(text),
        _ => None,
    };

    if parsed.is_none() {
        issues.push(FieldIssue::malformed(
            field,
            format!("{field} has an unrecognized value {}", describe(value)),
        ));
    }
    parsed
}

fn read_date(
    answers: &RawAnswers,
    field: &str,
    issues: &mut Vec<FieldIssue>,
) -> Option<NaiveDate> {
    let value = answers.answered(field)?;
    let parsed = match value {
        RawValue::Text(text) => parse_calendar_date(text),
        _ => None,
    };

    if parsed.is_none() {
        issues.push(FieldIssue::malformed(
            field,
            format!("{field} must be a YYYY-MM-DD date, found {}", describe(value)),
        ));
    }
    parsed
}

fn read_amount(answers: &RawAnswers, field: &str, issues: &mut Vec<FieldIssue>) -> Option<u64> {
    let value = answers.answered(field)?;
    let parsed = match value {
        RawValue::Number(number) => cents_from_number(*number),
        RawValue::Text(text) => cents_from_text(text),
        _ => None,
    };

    if parsed.is_none() {
        issues.push(FieldIssue::malformed(
            field,
            format!(
                "{field} must be a non-negative amount with at most two decimal places, found {}",
                describe(value)
            ),
        ));
    }
    parsed
}

fn read_flag(answers: &RawAnswers, field: &str, issues: &mut Vec<FieldIssue>) -> Option<bool> {
    let value = answers.answered(field)?;
    let parsed = match value {
        RawValue::Flag(flag) => Some(*flag),
        RawValue::Text(text) => match text.trim().to_ascii_lowercase().as_str() {
            "yes" | "true" => Some(true),
            "no" | "false" => Some(false),
            _ => None,
        },
        _ => None,
    };

    if parsed.is_none() {
        issues.push(FieldIssue::malformed(
            field,
            format!("{field} must be yes or no, found {}", describe(value)),
        ));
    }
    parsed
}

/// Parse a strict `YYYY-MM-DD` form date. Signs and short fields are rejected.
pub(crate) fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    let well_formed = trimmed.len() == 10
        && trimmed.bytes().enumerate().all(|(index, byte)| match index {
            4 | 7 => byte == b'-',
            _ => byte.is_ascii_digit(),
        });
    if !well_formed {
        return None;
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .filter(|date| date.year() >= 1)
}

fn cents_from_number(amount: f64) -> Option<u64> {
    if !amount.is_finite() || amount < 0.0 {
        return None;
    }

    let cents = amount * 100.0;
    let rounded = cents.round();
    if (cents - rounded).abs() > 1e-6 || rounded >= u64::MAX as f64 {
        return None;
    }

    Some(rounded as u64)
}

fn cents_from_text(raw: &str) -> Option<u64> {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix('$').unwrap_or(trimmed);
    let cleaned: String = trimmed.chars().filter(|ch| *ch != ',').collect();

    let (whole, fraction) = match cleaned.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (cleaned.as_str(), ""),
    };

    if whole.is_empty() && fraction.is_empty() {
        return None;
    }

    let all_digits = |part: &str| part.chars().all(|ch| ch.is_ascii_digit());
    if !all_digits(whole) || !all_digits(fraction) || fraction.len() > 2 {
        return None;
    }

    let whole: u64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
    let fraction: u64 = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<u64>().ok()? * 10,
        _ => fraction.parse().ok()?,
    };

    whole.checked_mul(100)?.checked_add(fraction)
}

fn describe(value: &RawValue) -> String {
    match value {
        RawValue::Null => "null".to_string(),
        RawValue::Flag(flag) => flag.to_string(),
        RawValue::Number(number) => number.to_string(),
        RawValue::Text(text) => format!("'{}'", text.trim()),
    }
}
