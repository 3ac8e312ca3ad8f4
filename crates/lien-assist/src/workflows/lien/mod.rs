//! Statutory deadline and eligibility engine for construction-lien claims.
//!
//! The pipeline is linear and pure: raw questionnaire answers are normalized,
//! the claimant tier is classified, the filing deadline is computed against an
//! injected "today", and the claim is scored and turned into an ordered list of
//! next steps. The results view and the PDF report both consume the same
//! [`EngineResult`].

pub mod batch;
pub mod classifier;
pub mod deadline;
pub mod domain;
mod engine;
pub mod intake;
pub mod recommendations;
pub mod router;
pub mod rules;
pub mod validity;

#[cfg(test)]
mod tests;

pub use batch::{BatchAssessment, BatchImportError, BatchOutcome, BatchRowResult};
pub use classifier::classify;
pub use deadline::{compute_deadline, deadline_date};
pub use domain::{
    ClaimantTier, ContractEvidence, ContractParty, DeadlineResult, EngineResult, FilingTrack,
    PaymentDemandStatus, PreliminaryNoticeStatus, ProjectAssessment, ProjectType, RawAnswers,
    RawValue, RoleClassification, ValidityAssessment, ValidityLevel,
};
pub use engine::LienEngine;
pub use intake::{fields, normalize, FieldIssue, IntakeMode, IssueKind, ValidationError};
pub use recommendations::generate_recommendations;
pub use router::{lien_router, AssessmentRequest, ASSESSMENT_PATH};
pub use rules::{ConfigurationError, LienRules};
pub use validity::score_validity;

use chrono::NaiveDate;

/// Evaluate a submitted questionnaire under the statutory rules.
pub fn evaluate(answers: &RawAnswers, today: NaiveDate) -> Result<EngineResult, ValidationError> {
    LienEngine::statutory().evaluate(answers, today)
}
