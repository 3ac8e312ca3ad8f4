use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Property classification captured by the intake questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectType {
    ResidentialSingle,
    ResidentialMulti,
    Commercial,
    Industrial,
    Public,
    Other,
}

impl ProjectType {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::ResidentialSingle,
            Self::ResidentialMulti,
            Self::Commercial,
            Self::Industrial,
            Self::Public,
            Self::Other,
        ]
    }

    pub const fn wire(self) -> &'static str {
        match self {
            Self::ResidentialSingle => "residential-single",
            Self::ResidentialMulti => "residential-multi",
            Self::Commercial => "commercial",
            Self::Industrial => "industrial",
            Self::Public => "public",
            Self::Other => "other",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ResidentialSingle => "Single-family residential",
            Self::ResidentialMulti => "Multi-family residential",
            Self::Commercial => "Commercial",
            Self::Industrial => "Industrial",
            Self::Public => "Public works",
            Self::Other => "Other",
        }
    }

    pub fn from_raw(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ordered().into_iter().find(|kind| kind.wire() == value)
    }
}

/// Who the claimant contracted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContractParty {
    Owner,
    GeneralContractor,
    Subcontractor,
    PropertyManager,
    Unknown,
}

impl ContractParty {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Owner,
            Self::GeneralContractor,
            Self::Subcontractor,
            Self::PropertyManager,
            Self::Unknown,
        ]
    }

    pub const fn wire(self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::GeneralContractor => "generalContractor",
            Self::Subcontractor => "subcontractor",
            Self::PropertyManager => "propertyManager",
            Self::Unknown => "unknown",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Owner => "Property owner",
            Self::GeneralContractor => "General contractor",
            Self::Subcontractor => "Subcontractor",
            Self::PropertyManager => "Property manager",
            Self::Unknown => "Not sure",
        }
    }

    pub fn from_raw(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ordered().into_iter().find(|party| party.wire() == value)
    }
}

/// Strength of the paper trail behind the claimant's agreement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContractEvidence {
    #[serde(rename = "written-signed")]
    WrittenSigned,
    PurchaseOrder,
    VerbalOnly,
    None,
}

impl ContractEvidence {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::WrittenSigned,
            Self::PurchaseOrder,
            Self::VerbalOnly,
            Self::None,
        ]
    }

    pub const fn wire(self) -> &'static str {
        match self {
            Self::WrittenSigned => "written-signed",
            Self::PurchaseOrder => "purchaseOrder",
            Self::VerbalOnly => "verbalOnly",
            Self::None => "none",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::WrittenSigned => "Signed written contract",
            Self::PurchaseOrder => "Purchase order",
            Self::VerbalOnly => "Verbal agreement only",
            Self::None => "No agreement on file",
        }
    }

    /// Verbal-only and missing agreements leave the claim resting on testimony.
    pub const fn is_weak(self) -> bool {
        matches!(self, Self::VerbalOnly | Self::None)
    }

    pub fn from_raw(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ordered()
            .into_iter()
            .find(|evidence| evidence.wire() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PreliminaryNoticeStatus {
    SentOnTime,
    SentLate,
    NotSentYet,
    NotSentPastDeadline,
    Unknown,
}

impl PreliminaryNoticeStatus {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::SentOnTime,
            Self::SentLate,
            Self::NotSentYet,
            Self::NotSentPastDeadline,
            Self::Unknown,
        ]
    }

    pub const fn wire(self) -> &'static str {
        match self {
            Self::SentOnTime => "sentOnTime",
            Self::SentLate => "sentLate",
            Self::NotSentYet => "notSentYet",
            Self::NotSentPastDeadline => "notSentPastDeadline",
            Self::Unknown => "unknown",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::SentOnTime => "Sent on time",
            Self::SentLate => "Sent late",
            Self::NotSentYet => "Not sent yet",
            Self::NotSentPastDeadline => "Not sent, deadline passed",
            Self::Unknown => "Not sure",
        }
    }

    pub fn from_raw(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ordered()
            .into_iter()
            .find(|status| status.wire() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaymentDemandStatus {
    MultipleWrittenDemands,
    OneWrittenDemand,
    VerbalOnly,
    None,
}

impl PaymentDemandStatus {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::MultipleWrittenDemands,
            Self::OneWrittenDemand,
            Self::VerbalOnly,
            Self::None,
        ]
    }

    pub const fn wire(self) -> &'static str {
        match self {
            Self::MultipleWrittenDemands => "multipleWrittenDemands",
            Self::OneWrittenDemand => "oneWrittenDemand",
            Self::VerbalOnly => "verbalOnly",
            Self::None => "none",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::MultipleWrittenDemands => "Multiple written demands",
            Self::OneWrittenDemand => "One written demand",
            Self::VerbalOnly => "Verbal demands only",
            Self::None => "No demand made",
        }
    }

    pub fn from_raw(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ordered()
            .into_iter()
            .find(|status| status.wire() == value)
    }
}

/// A single answer exactly as the questionnaire form submitted it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Null,
    Flag(bool),
    Number(f64),
    Text(String),
}

impl RawValue {
    /// Null values and blank strings count as unanswered.
    pub fn is_blank(&self) -> bool {
        match self {
            RawValue::Null => true,
            RawValue::Text(text) => text.trim().is_empty(),
            RawValue::Flag(_) | RawValue::Number(_) => false,
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        RawValue::Flag(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

/// Questionnaire answers keyed by form field id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawAnswers(BTreeMap<String, RawValue>);

impl RawAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: &str, value: impl Into<RawValue>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: &str, value: impl Into<RawValue>) {
        self.0.insert(field.to_string(), value.into());
    }

    pub fn remove(&mut self, field: &str) -> Option<RawValue> {
        self.0.remove(field)
    }

    /// Returns the answer for `field`, skipping blank entries.
    pub fn answered(&self, field: &str) -> Option<&RawValue> {
        self.0.get(field).filter(|value| !value.is_blank())
    }
}

impl<K: Into<String>> FromIterator<(K, RawValue)> for RawAnswers {
    fn from_iter<I: IntoIterator<Item = (K, RawValue)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(field, value)| (field.into(), value))
                .collect(),
        )
    }
}

/// Normalized, strongly typed view of one claimant's questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectAssessment {
    pub project_type: ProjectType,
    pub contract_party: ContractParty,
    pub work_start_date: Option<NaiveDate>,
    pub last_work_date: Option<NaiveDate>,
    pub amount_owed_cents: u64,
    pub contract_evidence: ContractEvidence,
    pub preliminary_notice: PreliminaryNoticeStatus,
    pub payment_demand: PaymentDemandStatus,
    pub has_existing_lien: bool,
}

/// Contractual tier that selects the statutory deadline formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ClaimantTier {
    OriginalContractor,
    SubcontractorTier,
}

impl ClaimantTier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::OriginalContractor => "Original contractor (contracted with owner)",
            Self::SubcontractorTier => "Subcontractor or supplier tier",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleClassification {
    pub tier: ClaimantTier,
}

/// Filing deadline with the urgency flags derived from it.
///
/// When the last work date is unknown every date-dependent field holds its
/// sentinel: no date, no day count, and all flags false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlineResult {
    pub deadline_date: Option<NaiveDate>,
    pub days_remaining: Option<i64>,
    pub is_past_deadline: bool,
    pub is_urgent: bool,
    pub can_file_lien: bool,
}

impl DeadlineResult {
    pub const fn unknown() -> Self {
        Self {
            deadline_date: None,
            days_remaining: None,
            is_past_deadline: false,
            is_urgent: false,
            can_file_lien: false,
        }
    }

    pub const fn is_known(&self) -> bool {
        self.deadline_date.is_some()
    }
}

/// Qualitative claim strength, ordered from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidityLevel {
    Expired,
    Weak,
    Moderate,
    Strong,
}

impl ValidityLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Expired => "Expired",
            Self::Weak => "Weak",
            Self::Moderate => "Moderate",
            Self::Strong => "Strong",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidityAssessment {
    pub level: ValidityLevel,
}

/// Downstream document track chosen from the existing-lien answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilingTrack {
    FileNewLien,
    ReleaseOfLien,
}

impl FilingTrack {
    pub const fn for_assessment(assessment: &ProjectAssessment) -> Self {
        if assessment.has_existing_lien {
            Self::ReleaseOfLien
        } else {
            Self::FileNewLien
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::FileNewLien => "File a new claim of lien",
            Self::ReleaseOfLien => "Release or satisfy an existing lien",
        }
    }
}

/// Everything the results view and the PDF report need, computed in one pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineResult {
    pub tier: ClaimantTier,
    pub track: FilingTrack,
    pub deadline: DeadlineResult,
    pub validity: ValidityAssessment,
    pub recommendations: Vec<String>,
}
