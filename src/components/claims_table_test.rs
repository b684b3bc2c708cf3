use super::*;
use crate::data::types::ClaimStatus;
use crate::state::toast::ToastVariant;

#[test]
fn filter_matches_customer_policy_id_and_claim_id() {
    let rows = seed::claims();
    assert_eq!(filter_claims(&rows, "").len(), 4);
    assert_eq!(filter_claims(&rows, "clm003").len(), 1);
    // POL001 backs two claims; "pol" matches every policy id and
    // therefore every claim.
    assert_eq!(filter_claims(&rows, "pol001").len(), 2);
    assert_eq!(filter_claims(&rows, "priya").len(), 1);
}

#[test]
fn approve_toast_includes_formatted_amount() {
    let claim = &seed::claims()[0];
    let toast = approve_toast(claim);
    assert_eq!(toast.title, "Claim Approved");
    assert_eq!(toast.message, "Claim CLM001 has been approved for LKR 45,000");
    assert_eq!(toast.variant, ToastVariant::Default);
}

#[test]
fn reject_and_delete_toasts_are_destructive() {
    let claim = &seed::claims()[0];
    assert_eq!(reject_toast(claim).variant, ToastVariant::Destructive);
    assert_eq!(reject_toast(claim).message, "Claim CLM001 has been rejected");
    assert_eq!(delete_toast(claim).variant, ToastVariant::Destructive);
}

#[test]
fn only_the_pending_claim_is_actionable() {
    let actionable: Vec<String> = seed::claims()
        .into_iter()
        .filter(|c| c.status.is_actionable())
        .map(|c| c.id)
        .collect();
    assert_eq!(actionable, vec!["CLM001".to_owned()]);
}

#[test]
fn edit_toast_references_the_claim_id() {
    let claim = &seed::claims()[2];
    assert_eq!(claim.status, ClaimStatus::InReview);
    assert_eq!(edit_toast(claim).message, "Opening edit form for claim CLM003");
}
