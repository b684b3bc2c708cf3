use super::*;
use crate::state::toast::ToastVariant;

#[test]
fn validate_accepts_a_complete_form() {
    assert_eq!(validate_policy_form("John Silva", "auto", "75000", "+94 71 234 5678"), Ok(()));
}

#[test]
fn validate_rejects_any_missing_field() {
    let err = Err("Please fill in all fields");
    assert_eq!(validate_policy_form("", "auto", "75000", "x"), err);
    assert_eq!(validate_policy_form("John", "", "75000", "x"), err);
    assert_eq!(validate_policy_form("John", "auto", "", "x"), err);
    assert_eq!(validate_policy_form("John", "auto", "75000", ""), err);
}

#[test]
fn validate_rejects_whitespace_only_text_fields() {
    assert_eq!(
        validate_policy_form("   ", "auto", "75000", "x"),
        Err("Please fill in all fields")
    );
}

#[test]
fn created_toast_names_type_and_customer() {
    let toast = created_toast("John Silva", "auto");
    assert_eq!(toast.title, "Policy Created Successfully");
    assert_eq!(toast.message, "New auto policy for John Silva");
    assert_eq!(toast.variant, ToastVariant::Default);
}
