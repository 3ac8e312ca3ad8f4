use super::domain::{
    DeadlineResult, PreliminaryNoticeStatus, ProjectAssessment, ValidityAssessment, ValidityLevel,
};

/// Rate claim strength. Rules are checked top-down and the first match wins;
/// risk factors never compound.
pub fn score_validity(
    assessment: &ProjectAssessment,
    deadline: &DeadlineResult,
) -> ValidityAssessment {
    let level = if deadline.is_past_deadline {
        ValidityLevel::Expired
    } else if assessment.contract_evidence.is_weak() {
        ValidityLevel::Moderate
    } else if assessment.preliminary_notice == PreliminaryNoticeStatus::NotSentPastDeadline {
        ValidityLevel::Weak
    } else {
        ValidityLevel::Strong
    };

    ValidityAssessment { level }
}
