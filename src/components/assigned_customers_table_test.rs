use super::*;

#[test]
fn filter_matches_name_location_and_policy_type() {
    let rows = seed::assigned_customers();
    assert_eq!(filter_assigned(&rows, "").len(), 4);
    assert_eq!(filter_assigned(&rows, "nimal").len(), 1);
    // Two assigned customers sit in Colombo suburbs.
    assert_eq!(filter_assigned(&rows, "colombo").len(), 2);
    assert_eq!(filter_assigned(&rows, "life insurance").len(), 1);
}

#[test]
fn filter_ignores_contact_and_address_columns() {
    let rows = seed::assigned_customers();
    assert!(filter_assigned(&rows, "+94 77 123").is_empty());
    assert!(filter_assigned(&rows, "galle road").is_empty());
}

#[test]
fn navigate_toast_names_the_customer() {
    let customer = &seed::assigned_customers()[1];
    let toast = navigate_toast(customer);
    assert_eq!(toast.title, "Navigation Started");
    assert_eq!(toast.message, "Opening Google Maps to Kamala Rajapaksa's location");
}

#[test]
fn navigate_url_is_built_from_the_street_address() {
    let customer = &seed::assigned_customers()[0];
    assert_eq!(
        maps::maps_search_url(&customer.address),
        "https://www.google.com/maps/search/?api=1&query=123%20Galle%20Road%2C%20Colombo%2007"
    );
}

#[test]
fn profile_toast_names_the_customer() {
    let customer = &seed::assigned_customers()[2];
    assert_eq!(view_profile_toast(customer).message, "Opening profile for Pradeep Wickrama");
}
