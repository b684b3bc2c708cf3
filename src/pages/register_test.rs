use super::*;
use crate::state::toast::ToastVariant;

#[test]
fn validate_accepts_a_complete_registration() {
    assert_eq!(
        validate_registration("agent", "  Sara Doe  ", "sara@company.com", "secret"),
        Ok("Sara Doe".to_owned())
    );
}

#[test]
fn validate_rejects_any_missing_field() {
    let err = Err("Please fill in all fields");
    assert_eq!(validate_registration("", "Sara", "s@c.com", "x"), err);
    assert_eq!(validate_registration("agent", "   ", "s@c.com", "x"), err);
    assert_eq!(validate_registration("agent", "Sara", "", "x"), err);
    assert_eq!(validate_registration("agent", "Sara", "s@c.com", ""), err);
}

#[test]
fn registered_toast_welcomes_by_name_and_role() {
    let toast = registered_toast("Sara Doe", "admin");
    assert_eq!(toast.title, "User registered successfully!");
    assert_eq!(toast.message, "Welcome Sara Doe! Your admin account has been created.");
    assert_eq!(toast.variant, ToastVariant::Default);
}
