use super::domain::{
    DeadlineResult, PaymentDemandStatus, PreliminaryNoticeStatus, ProjectAssessment, ProjectType,
    ValidityAssessment,
};

pub(crate) const PAST_DEADLINE_REMEDY: &str =
    "The lien filing deadline has passed; consult a construction attorney about alternative remedies such as a breach of contract claim or a payment bond claim";
pub(crate) const PAST_DEADLINE_COLLECTION: &str =
    "Send a final written demand for payment and consider small claims court or a collections agency for the amount owed";
pub(crate) const CONTRACT_GAP: &str =
    "Gather written evidence of your agreement (emails, texts, invoices, change orders) to support a verbal or undocumented contract";
pub(crate) const PRELIMINARY_NOTICE: &str =
    "Confirm your preliminary notice was served correctly; if it was sent late or not at all, your lien rights may be limited to work performed after service";
pub(crate) const PAYMENT_DEMAND: &str =
    "Send a written demand for payment before filing so the owner has formal notice of the unpaid amount";
pub(crate) const URGENT_DEADLINE: &str =
    "Your filing deadline is approaching; prepare and record your claim of lien as soon as possible";
pub(crate) const PUBLIC_PROJECT: &str =
    "Public property generally cannot be liened; look into a payment bond claim against the project's surety instead";
pub(crate) const GATHER_DOCUMENTATION: &str =
    "Organize your invoices, contracts, delivery receipts, and payment records in one place";
pub(crate) const PROPERTY_RECORDS: &str =
    "Pull the property's legal description and owner of record from the county recorder or property appraiser";

/// Ordered list that silently drops repeated entries.
#[derive(Debug, Default)]
struct RecommendationList {
    items: Vec<String>,
}

impl RecommendationList {
    fn push(&mut self, item: &str) {
        if !self.items.iter().any(|existing| existing == item) {
            self.items.push(item.to_string());
        }
    }

    fn into_inner(self) -> Vec<String> {
        self.items
    }
}

/// Build the ordered action list for the results view and PDF report.
///
/// Unlike validity scoring, every matching condition contributes. Blocking items
/// come first and the two housekeeping items always close the list.
pub fn generate_recommendations(
    assessment: &ProjectAssessment,
    deadline: &DeadlineResult,
    _validity: &ValidityAssessment,
) -> Vec<String> {
    let mut list = RecommendationList::default();

    if deadline.is_past_deadline {
        list.push(PAST_DEADLINE_REMEDY);
        list.push(PAST_DEADLINE_COLLECTION);
        return list.into_inner();
    }

    if assessment.contract_evidence.is_weak() {
        list.push(CONTRACT_GAP);
    }

    if assessment.preliminary_notice != PreliminaryNoticeStatus::SentOnTime {
        list.push(PRELIMINARY_NOTICE);
    }

    if assessment.payment_demand == PaymentDemandStatus::None {
        list.push(PAYMENT_DEMAND);
    }

    if deadline.is_urgent {
        list.push(URGENT_DEADLINE);
    }

    if assessment.project_type == ProjectType::Public {
        list.push(PUBLIC_PROJECT);
    }

    list.push(GATHER_DOCUMENTATION);
    list.push(PROPERTY_RECORDS);

    list.into_inner()
}
