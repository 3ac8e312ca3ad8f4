use chrono::NaiveDate;

use crate::workflows::lien::domain::RawAnswers;
use crate::workflows::lien::intake::fields;
use crate::workflows::lien::LienEngine;

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn today() -> NaiveDate {
    date(2024, 2, 1)
}

pub(super) fn engine() -> LienEngine {
    LienEngine::statutory()
}

/// A fully answered questionnaire for an owner-direct contractor with a clean file.
pub(super) fn complete_answers() -> RawAnswers {
    RawAnswers::new()
        .with(fields::PROJECT_TYPE, "commercial")
        .with(fields::CONTRACT_PARTY, "owner")
        .with(fields::WORK_START_DATE, "2023-11-06")
        .with(fields::LAST_WORK_DATE, "2024-01-20")
        .with(fields::AMOUNT_OWED, "18,400.00")
        .with(fields::HAS_WRITTEN_CONTRACT, "written-signed")
        .with(fields::PRELIMINARY_NOTICE_STATUS, "sentOnTime")
        .with(fields::PAYMENT_DEMAND_STATUS, "oneWrittenDemand")
        .with(fields::HAS_EXISTING_LIEN, false)
}

pub(super) fn subcontractor_answers() -> RawAnswers {
    complete_answers().with(fields::CONTRACT_PARTY, "subcontractor")
}
