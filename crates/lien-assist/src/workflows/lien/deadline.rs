use chrono::{Datelike, Months, NaiveDate};
use tracing::warn;

use super::domain::{ClaimantTier, DeadlineResult};
use super::rules::LienRules;

/// Date on which the claim of lien must be recorded.
///
/// Advances `last_work_date` by whole calendar months (clamping to the end of
/// shorter months) and then pins the day of month. Returns `None` only when the
/// result falls outside chrono's representable range.
pub fn deadline_date(
    last_work_date: NaiveDate,
    tier: ClaimantTier,
    rules: &LienRules,
) -> Option<NaiveDate> {
    last_work_date
        .checked_add_months(Months::new(rules.months_for(tier)))
        .and_then(|advanced| advanced.with_day(rules.deadline_day_of_month))
}

/// Compute the controlling deadline and its urgency flags as seen from `today`.
///
/// A missing last work date is a normal in-progress state and yields
/// [`DeadlineResult::unknown`].
pub fn compute_deadline(
    last_work_date: Option<NaiveDate>,
    tier: ClaimantTier,
    today: NaiveDate,
    rules: &LienRules,
) -> DeadlineResult {
    let Some(last_work_date) = last_work_date else {
        return DeadlineResult::unknown();
    };

    let Some(deadline) = deadline_date(last_work_date, tier, rules) else {
        warn!(%last_work_date, ?tier, "deadline falls outside the supported calendar range");
        return DeadlineResult::unknown();
    };

    let days_remaining = deadline.signed_duration_since(today).num_days();

    DeadlineResult {
        deadline_date: Some(deadline),
        days_remaining: Some(days_remaining),
        is_past_deadline: days_remaining < 0,
        is_urgent: days_remaining > 0 && days_remaining <= rules.urgency_window_days,
        // The deadline day itself is treated as too late to file.
        can_file_lien: days_remaining > 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    fn rules() -> LienRules {
        LienRules::statutory()
    }

    #[test]
    fn subcontractor_deadline_is_fifteenth_of_second_month() {
        let deadline = deadline_date(date(2024, 1, 20), ClaimantTier::SubcontractorTier, &rules());
        assert_eq!(deadline, Some(date(2024, 3, 15)));
    }

    #[test]
    fn original_contractor_deadline_is_fifteenth_of_third_month() {
        let deadline = deadline_date(date(2024, 1, 20), ClaimantTier::OriginalContractor, &rules());
        assert_eq!(deadline, Some(date(2024, 4, 15)));
    }

    #[test]
    fn month_end_work_date_rolls_into_next_year() {
        let deadline = deadline_date(date(2024, 10, 31), ClaimantTier::OriginalContractor, &rules());
        assert_eq!(deadline, Some(date(2025, 1, 15)));
    }

    #[test]
    fn month_end_clamping_does_not_shift_target_month() {
        // Nov 30 + 3 months clamps to Feb 28/29 before the day is pinned.
        let deadline = deadline_date(date(2023, 11, 30), ClaimantTier::OriginalContractor, &rules());
        assert_eq!(deadline, Some(date(2024, 2, 15)));

        let deadline = deadline_date(date(2023, 12, 31), ClaimantTier::SubcontractorTier, &rules());
        assert_eq!(deadline, Some(date(2024, 2, 15)));
    }

    #[test]
    fn calendar_months_differ_from_fixed_day_counts() {
        let last_work = date(2024, 1, 1);
        let deadline = deadline_date(last_work, ClaimantTier::OriginalContractor, &rules())
            .expect("deadline");
        assert_ne!(deadline, last_work + chrono::Duration::days(90));
        assert_eq!(deadline, date(2024, 4, 15));
    }

    #[test]
    fn missing_last_work_date_yields_unknown_sentinel() {
        let result = compute_deadline(
            None,
            ClaimantTier::OriginalContractor,
            date(2024, 2, 1),
            &rules(),
        );
        assert_eq!(result, DeadlineResult::unknown());
        assert!(!result.is_known());
        assert!(!result.can_file_lien);
    }

    #[test]
    fn counts_whole_days_until_deadline() {
        let result = compute_deadline(
            Some(date(2024, 1, 20)),
            ClaimantTier::SubcontractorTier,
            date(2024, 3, 14),
            &rules(),
        );
        assert_eq!(result.days_remaining, Some(1));
        assert!(result.can_file_lien);
        assert!(result.is_urgent);
        assert!(!result.is_past_deadline);
    }

    // Boundary: the deadline day itself is not filable. Whether the statute
    // intends the deadline day to be the last filable day is unresolved; this
    // pins the conservative reading until counsel confirms otherwise.
    #[test]
    fn deadline_day_itself_is_not_filable() {
        let result = compute_deadline(
            Some(date(2024, 1, 20)),
            ClaimantTier::SubcontractorTier,
            date(2024, 3, 15),
            &rules(),
        );
        assert_eq!(result.deadline_date, Some(date(2024, 3, 15)));
        assert_eq!(result.days_remaining, Some(0));
        assert!(!result.can_file_lien);
        assert!(!result.is_past_deadline);
        assert!(!result.is_urgent);
    }

    #[test]
    fn day_after_deadline_is_past() {
        let result = compute_deadline(
            Some(date(2024, 1, 20)),
            ClaimantTier::SubcontractorTier,
            date(2024, 3, 16),
            &rules(),
        );
        assert_eq!(result.days_remaining, Some(-1));
        assert!(result.is_past_deadline);
        assert!(!result.can_file_lien);
        assert!(!result.is_urgent);
    }

    #[test]
    fn urgency_window_is_inclusive_of_thirty_days() {
        let last_work = Some(date(2024, 1, 20));
        let deadline = date(2024, 4, 15);

        let at_thirty = compute_deadline(
            last_work,
            ClaimantTier::OriginalContractor,
            deadline - chrono::Duration::days(30),
            &rules(),
        );
        assert_eq!(at_thirty.days_remaining, Some(30));
        assert!(at_thirty.is_urgent);

        let at_thirty_one = compute_deadline(
            last_work,
            ClaimantTier::OriginalContractor,
            deadline - chrono::Duration::days(31),
            &rules(),
        );
        assert_eq!(at_thirty_one.days_remaining, Some(31));
        assert!(!at_thirty_one.is_urgent);
        assert!(at_thirty_one.can_file_lien);
    }

    #[test]
    fn leap_day_work_date_is_handled() {
        let deadline = deadline_date(date(2024, 2, 29), ClaimantTier::SubcontractorTier, &rules());
        assert_eq!(deadline, Some(date(2024, 4, 15)));
    }

    #[test]
    fn date_range_overflow_degrades_to_unknown() {
        let result = compute_deadline(
            Some(NaiveDate::MAX),
            ClaimantTier::OriginalContractor,
            date(2024, 1, 1),
            &rules(),
        );
        assert_eq!(result, DeadlineResult::unknown());
    }
}
