use serde::{Deserialize, Serialize};

use super::domain::ClaimantTier;

pub const ORIGINAL_CONTRACTOR_MONTHS: u32 = 3;
pub const SUBCONTRACTOR_MONTHS: u32 = 2;
pub const DEADLINE_DAY_OF_MONTH: u32 = 15;
pub const DEFAULT_URGENCY_WINDOW_DAYS: i64 = 30;

/// Statutory constants for the modeled lien law.
///
/// The deadline falls on a fixed day of the Nth calendar month after the last
/// day of work, where N depends on the claimant tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LienRules {
    pub original_contractor_months: u32,
    pub subcontractor_months: u32,
    pub deadline_day_of_month: u32,
    pub urgency_window_days: i64,
}

impl LienRules {
    pub const fn statutory() -> Self {
        Self {
            original_contractor_months: ORIGINAL_CONTRACTOR_MONTHS,
            subcontractor_months: SUBCONTRACTOR_MONTHS,
            deadline_day_of_month: DEADLINE_DAY_OF_MONTH,
            urgency_window_days: DEFAULT_URGENCY_WINDOW_DAYS,
        }
    }

    pub fn with_urgency_window(mut self, days: i64) -> Self {
        self.urgency_window_days = days;
        self
    }

    pub const fn months_for(&self, tier: ClaimantTier) -> u32 {
        match tier {
            ClaimantTier::OriginalContractor => self.original_contractor_months,
            ClaimantTier::SubcontractorTier => self.subcontractor_months,
        }
    }

    /// Reject rule sets that would break the deadline invariants.
    ///
    /// The forced day must exist in every month, and the indirect tier may never
    /// receive more runway than the owner-direct tier.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.subcontractor_months == 0 || self.original_contractor_months == 0 {
            return Err(ConfigurationError::ZeroMonthOffset);
        }

        if self.subcontractor_months > self.original_contractor_months {
            return Err(ConfigurationError::TierOrdering {
                original: self.original_contractor_months,
                subcontractor: self.subcontractor_months,
            });
        }

        if !(1..=28).contains(&self.deadline_day_of_month) {
            return Err(ConfigurationError::DeadlineDay(self.deadline_day_of_month));
        }

        if self.urgency_window_days <= 0 {
            return Err(ConfigurationError::UrgencyWindow(self.urgency_window_days));
        }

        Ok(())
    }
}

impl Default for LienRules {
    fn default() -> Self {
        Self::statutory()
    }
}

/// Programming or deployment fault in the rule set. Never caused by user input.
///
/// An unmapped contract party cannot reach the classifier because its match is
/// exhaustive, so an invalid rule set is the only way to raise this error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("deadline month offsets must be at least one month")]
    ZeroMonthOffset,
    #[error(
        "subcontractor tier offset ({subcontractor} months) exceeds original contractor offset ({original} months)"
    )]
    TierOrdering { original: u32, subcontractor: u32 },
    #[error("deadline day of month must be between 1 and 28, found {0}")]
    DeadlineDay(u32),
    #[error("urgency window must be a positive number of days, found {0}")]
    UrgencyWindow(i64),
}
