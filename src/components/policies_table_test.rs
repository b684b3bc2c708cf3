use super::*;
use crate::state::toast::ToastVariant;

#[test]
fn filter_matches_customer_type_and_agent() {
    let rows = seed::policies();
    assert_eq!(filter_policies(&rows, "").len(), 4);
    assert_eq!(filter_policies(&rows, "health").len(), 1);
    assert_eq!(filter_policies(&rows, "sarah").len(), 2);
    assert!(filter_policies(&rows, "travel").is_empty());
}

#[test]
fn filter_ignores_policy_id_column() {
    assert!(filter_policies(&seed::policies(), "POL001").is_empty());
}

#[test]
fn toasts_reference_the_policy_id() {
    let policy = &seed::policies()[0];
    assert_eq!(edit_toast(policy).message, "Opening edit form for policy POL001");
    assert_eq!(assign_toast(policy).message, "Opening agent assignment for policy POL001");
    let deleted = delete_toast(policy);
    assert_eq!(deleted.message, "Policy POL001 has been removed from the system");
    assert_eq!(deleted.variant, ToastVariant::Destructive);
}

#[test]
fn add_new_toast_is_informational() {
    let toast = add_new_toast();
    assert_eq!(toast.title, "Add New Policy");
    assert_eq!(toast.variant, ToastVariant::Default);
}
