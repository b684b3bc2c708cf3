use super::*;

#[test]
fn filter_matches_name_and_zone() {
    let rows = seed::agents();
    assert_eq!(filter_agents(&rows, "").len(), 4);
    assert_eq!(filter_agents(&rows, "sarah").len(), 1);
    assert_eq!(filter_agents(&rows, "galle").len(), 1);
    assert!(filter_agents(&rows, "matara").is_empty());
}

#[test]
fn filter_ignores_phone_column() {
    let rows = seed::agents();
    assert!(filter_agents(&rows, "+94 71 111").is_empty());
}

#[test]
fn toggle_toast_says_deactivated_for_active_agents() {
    let agent = &seed::agents()[0];
    let toast = toggle_status_toast(agent);
    assert_eq!(toast.title, "Agent Status Updated");
    assert_eq!(toast.message, "Sarah Fernando has been deactivated");
}

#[test]
fn toggle_toast_says_activated_for_inactive_agents() {
    let agent = &seed::agents()[3];
    assert_eq!(toggle_status_toast(agent).message, "Rohan Wickrama has been activated");
}

#[test]
fn edit_and_view_toasts_name_the_agent() {
    let agent = &seed::agents()[1];
    assert_eq!(edit_toast(agent).message, "Opening edit form for Mike Jayasinghe");
    assert_eq!(
        view_customers_toast(agent).message,
        "Showing customers assigned to Mike Jayasinghe"
    );
}
