use chrono::NaiveDate;
use lien_assist::workflows::lien::{
    evaluate, fields, BatchAssessment, BatchRowResult, ClaimantTier, FilingTrack, IssueKind,
    LienEngine, LienRules, RawAnswers, ValidityLevel,
};
use std::io::Cursor;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

fn questionnaire(contract_party: &str, last_work: &str) -> RawAnswers {
    RawAnswers::new()
        .with(fields::PROJECT_TYPE, "residential-single")
        .with(fields::CONTRACT_PARTY, contract_party)
        .with(fields::WORK_START_DATE, "2023-09-05")
        .with(fields::LAST_WORK_DATE, last_work)
        .with(fields::AMOUNT_OWED, "$7,800.00")
        .with(fields::HAS_WRITTEN_CONTRACT, "written-signed")
        .with(fields::PRELIMINARY_NOTICE_STATUS, "sentOnTime")
        .with(fields::PAYMENT_DEMAND_STATUS, "multipleWrittenDemands")
        .with(fields::HAS_EXISTING_LIEN, false)
}

#[test]
fn subcontractor_deadline_is_fifteenth_of_second_month() {
    let result = evaluate(
        &questionnaire("subcontractor", "2024-01-20"),
        date(2024, 2, 1),
    )
    .expect("valid questionnaire");

    assert_eq!(result.tier, ClaimantTier::SubcontractorTier);
    assert_eq!(result.deadline.deadline_date, Some(date(2024, 3, 15)));
}

#[test]
fn original_contractor_deadline_is_fifteenth_of_third_month() {
    let result = evaluate(&questionnaire("owner", "2024-01-20"), date(2024, 2, 1))
        .expect("valid questionnaire");

    assert_eq!(result.tier, ClaimantTier::OriginalContractor);
    assert_eq!(result.deadline.deadline_date, Some(date(2024, 4, 15)));
}

#[test]
fn month_end_work_date_rolls_into_next_year() {
    let result = evaluate(&questionnaire("owner", "2024-10-31"), date(2024, 11, 1))
        .expect("valid questionnaire");

    assert_eq!(result.deadline.deadline_date, Some(date(2025, 1, 15)));
    assert_eq!(result.deadline.days_remaining, Some(75));
}

#[test]
fn deadline_day_reports_zero_days_and_no_filing() {
    let result = evaluate(&questionnaire("owner", "2024-01-20"), date(2024, 4, 15))
        .expect("valid questionnaire");

    assert_eq!(result.deadline.days_remaining, Some(0));
    assert!(!result.deadline.can_file_lien);
    assert!(!result.deadline.is_past_deadline);
}

#[test]
fn missed_deadline_is_expired_even_with_strong_answers() {
    let answers = questionnaire("owner", "2024-01-20");
    let on_time = evaluate(&answers, date(2024, 2, 1)).expect("valid questionnaire");
    let late = evaluate(&answers, date(2024, 4, 16)).expect("valid questionnaire");

    assert_eq!(on_time.validity.level, ValidityLevel::Strong);
    assert_eq!(late.validity.level, ValidityLevel::Expired);
    assert_eq!(late.deadline.days_remaining, Some(-1));
    assert_eq!(late.recommendations.len(), 2);
    assert!(late.recommendations[0].contains("deadline has passed"));
}

#[test]
fn risky_subcontractor_gets_blocking_items_before_housekeeping() {
    let answers = questionnaire("subcontractor", "2024-01-20")
        .with(fields::PROJECT_TYPE, "public")
        .with(fields::HAS_WRITTEN_CONTRACT, "verbalOnly")
        .with(fields::PRELIMINARY_NOTICE_STATUS, "notSentPastDeadline")
        .with(fields::PAYMENT_DEMAND_STATUS, "none");

    let result = evaluate(&answers, date(2024, 3, 1)).expect("valid questionnaire");

    // Weak contract evidence is checked before the missed notice and wins.
    assert_eq!(result.validity.level, ValidityLevel::Moderate);
    assert!(result.deadline.is_urgent);

    let recommendations = &result.recommendations;
    assert_eq!(recommendations.len(), 7);
    assert!(recommendations[0].contains("written evidence"));
    assert!(recommendations[1].contains("preliminary notice"));
    assert!(recommendations[2].contains("written demand"));
    assert!(recommendations[3].contains("approaching"));
    assert!(recommendations[4].contains("payment bond"));
    assert!(recommendations[5].contains("invoices"));
    assert!(recommendations[6].contains("legal description"));
}

#[test]
fn missing_required_answers_are_reported_together() {
    let answers = RawAnswers::new()
        .with(fields::PROJECT_TYPE, "commercial")
        .with(fields::AMOUNT_OWED, "twelve hundred");

    let error = evaluate(&answers, date(2024, 2, 1)).expect_err("incomplete questionnaire");

    assert!(error.has_issue(fields::CONTRACT_PARTY, IssueKind::Missing));
    assert!(error.has_issue(fields::LAST_WORK_DATE, IssueKind::Missing));
    assert!(error.has_issue(fields::AMOUNT_OWED, IssueKind::Malformed));
    assert!(error.to_string().contains("3 questionnaire answer(s) need attention"));
}

#[test]
fn existing_lien_switches_track_only() {
    let answers = questionnaire("owner", "2024-01-20").with(fields::HAS_EXISTING_LIEN, true);

    let result = evaluate(&answers, date(2024, 2, 1)).expect("valid questionnaire");

    assert_eq!(result.track, FilingTrack::ReleaseOfLien);
    assert_eq!(result.deadline.deadline_date, Some(date(2024, 4, 15)));
}

#[test]
fn configured_urgency_window_changes_only_urgency() {
    let wide = LienEngine::new(LienRules::statutory().with_urgency_window(90))
        .expect("valid rules");
    let answers = questionnaire("owner", "2024-01-20");

    let statutory = evaluate(&answers, date(2024, 2, 1)).expect("valid questionnaire");
    let widened = wide.evaluate(&answers, date(2024, 2, 1)).expect("valid questionnaire");

    assert!(!statutory.deadline.is_urgent);
    assert!(widened.deadline.is_urgent);
    assert_eq!(statutory.deadline.deadline_date, widened.deadline.deadline_date);
    assert_eq!(statutory.validity, widened.validity);
}

#[test]
fn exported_submissions_are_reassessed_in_bulk() {
    let csv = "submissionId,projectType,contractParty,lastWorkDate,amountOwed,hasExistingLien\n\
f-100,commercial,owner,2024-01-20,\"12,000\",no\n\
f-101,industrial,subcontractor,2023-11-02,900,yes\n\
f-102,commercial,,2024-01-20,,\n";

    let outcomes = BatchAssessment::from_reader(
        Cursor::new(csv),
        &LienEngine::statutory(),
        date(2024, 2, 1),
    )
    .expect("export parses");

    assert_eq!(outcomes.len(), 3);
    match &outcomes[0].result {
        BatchRowResult::Assessed(result) => {
            assert_eq!(result.deadline.days_remaining, Some(74));
            assert_eq!(result.track, FilingTrack::FileNewLien);
        }
        other => panic!("expected assessed row, got {other:?}"),
    }
    match &outcomes[1].result {
        BatchRowResult::Assessed(result) => {
            assert_eq!(result.deadline.deadline_date, Some(date(2024, 1, 15)));
            assert_eq!(result.validity.level, ValidityLevel::Expired);
            assert_eq!(result.track, FilingTrack::ReleaseOfLien);
        }
        other => panic!("expected assessed row, got {other:?}"),
    }
    match &outcomes[2].result {
        BatchRowResult::Rejected(error) => {
            assert!(error.has_issue(fields::CONTRACT_PARTY, IssueKind::Missing));
        }
        other => panic!("expected rejected row, got {other:?}"),
    }
}
