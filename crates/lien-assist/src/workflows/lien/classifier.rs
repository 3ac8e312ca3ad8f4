use super::domain::{ClaimantTier, ContractParty, RoleClassification};

/// Map the contract-party answer onto the statutory claimant tier.
///
/// Only a direct contract with the owner earns the longer window. An unknown
/// party falls into the subcontractor tier, whose deadline is never later.
pub fn classify(contract_party: ContractParty) -> RoleClassification {
    let tier = match contract_party {
        ContractParty::Owner => ClaimantTier::OriginalContractor,
        ContractParty::GeneralContractor
        | ContractParty::Subcontractor
        | ContractParty::PropertyManager
        | ContractParty::Unknown => ClaimantTier::SubcontractorTier,
    };

    RoleClassification { tier }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_contract_is_original_contractor() {
        assert_eq!(
            classify(ContractParty::Owner).tier,
            ClaimantTier::OriginalContractor
        );
    }

    #[test]
    fn every_other_party_is_subcontractor_tier() {
        for party in ContractParty::ordered() {
            if party == ContractParty::Owner {
                continue;
            }
            assert_eq!(
                classify(party).tier,
                ClaimantTier::SubcontractorTier,
                "{party:?} should map to the subcontractor tier"
            );
        }
    }

    // Assumed conservative default; confirm with counsel before relaxing.
    #[test]
    fn unknown_party_takes_the_stricter_tier() {
        assert_eq!(
            classify(ContractParty::Unknown).tier,
            ClaimantTier::SubcontractorTier
        );
    }

    #[test]
    fn unrecognized_party_never_reaches_the_classifier() {
        assert_eq!(ContractParty::from_raw("architect"), None);
        for party in ContractParty::ordered() {
            let parsed = ContractParty::from_raw(party.wire()).expect("wire value parses");
            assert_eq!(classify(parsed), classify(party));
        }
    }
}
