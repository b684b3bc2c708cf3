use super::*;
use crate::state::toast::ToastVariant;

#[test]
fn subtitle_differs_by_role() {
    assert_eq!(
        welcome_subtitle(Role::Administrator),
        "Monitor your team performance and manage operations"
    );
    assert_eq!(
        welcome_subtitle(Role::FieldAgent),
        "Track your daily activities and manage your portfolio"
    );
}

#[test]
fn quick_action_toasts_are_informational_stubs() {
    let new_claim = new_claim_toast();
    assert_eq!(new_claim.title, "New Claim");
    assert_eq!(new_claim.message, "Opening claim creation form...");
    assert_eq!(new_claim.variant, ToastVariant::Default);

    assert_eq!(check_location_toast().title, "Location Check");
    assert_eq!(team_status_toast().title, "Team Status");
}
