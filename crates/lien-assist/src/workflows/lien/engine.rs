use chrono::NaiveDate;
use tracing::{debug, error, warn};

use super::classifier::classify;
use super::deadline::compute_deadline;
use super::domain::{EngineResult, FilingTrack, ProjectAssessment, RawAnswers};
use super::intake::{normalize, IntakeMode, ValidationError};
use super::recommendations::generate_recommendations;
use super::rules::{ConfigurationError, LienRules};
use super::validity::score_validity;

/// Stateless evaluator that runs the full deadline pipeline for one questionnaire.
///
/// "Today" is always supplied by the caller so identical inputs produce
/// identical results.
#[derive(Debug, Clone)]
pub struct LienEngine {
    rules: LienRules,
}

impl LienEngine {
    pub fn new(rules: LienRules) -> Result<Self, ConfigurationError> {
        if let Err(err) = rules.validate() {
            error!(error = %err, ?rules, "refusing to build lien engine from invalid rules");
            return Err(err);
        }

        Ok(Self { rules })
    }

    pub fn statutory() -> Self {
        Self {
            rules: LienRules::statutory(),
        }
    }

    pub fn rules(&self) -> &LienRules {
        &self.rules
    }

    /// Evaluate a submitted questionnaire. Required answers must be present.
    pub fn evaluate(
        &self,
        answers: &RawAnswers,
        today: NaiveDate,
    ) -> Result<EngineResult, ValidationError> {
        self.evaluate_with_mode(answers, today, IntakeMode::Submitted)
    }

    /// Evaluate an in-progress questionnaire; a missing last work date yields an
    /// unknown deadline instead of an error.
    pub fn evaluate_draft(
        &self,
        answers: &RawAnswers,
        today: NaiveDate,
    ) -> Result<EngineResult, ValidationError> {
        self.evaluate_with_mode(answers, today, IntakeMode::Draft)
    }

    pub fn evaluate_with_mode(
        &self,
        answers: &RawAnswers,
        today: NaiveDate,
        mode: IntakeMode,
    ) -> Result<EngineResult, ValidationError> {
        let assessment = normalize(answers, mode).inspect_err(|err| {
            warn!(?mode, issues = err.issues.len(), "questionnaire rejected");
        })?;

        Ok(self.assess(&assessment, today))
    }

    /// Run classification, deadline math, scoring and recommendations over an
    /// already-normalized assessment.
    pub fn assess(&self, assessment: &ProjectAssessment, today: NaiveDate) -> EngineResult {
        let role = classify(assessment.contract_party);
        let deadline = compute_deadline(assessment.last_work_date, role.tier, today, &self.rules);
        let validity = score_validity(assessment, &deadline);
        let recommendations = generate_recommendations(assessment, &deadline, &validity);
        let track = FilingTrack::for_assessment(assessment);

        debug!(
            tier = ?role.tier,
            level = ?validity.level,
            days_remaining = ?deadline.days_remaining,
            recommendations = recommendations.len(),
            "lien assessment evaluated"
        );

        EngineResult {
            tier: role.tier,
            track,
            deadline,
            validity,
            recommendations,
        }
    }
}

impl Default for LienEngine {
    fn default() -> Self {
        Self::statutory()
    }
}
