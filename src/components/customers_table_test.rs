use super::*;
use crate::state::toast::ToastVariant;

#[test]
fn filter_matches_name_location_and_agent() {
    let rows = seed::customers();
    assert_eq!(filter_customers(&rows, "").len(), 4);
    assert_eq!(filter_customers(&rows, "john").len(), 1);
    assert_eq!(filter_customers(&rows, "kandy").len(), 1);
    // Two customers are assigned to Sarah Fernando.
    assert_eq!(filter_customers(&rows, "sarah").len(), 2);
}

#[test]
fn filter_ignores_nic_and_phone_columns() {
    let rows = seed::customers();
    assert!(filter_customers(&rows, "199012345678").is_empty());
    assert!(filter_customers(&rows, "+94 71").is_empty());
}

#[test]
fn edit_toast_names_the_customer() {
    let customer = &seed::customers()[0];
    let toast = edit_toast(customer);
    assert_eq!(toast.title, "Edit Customer");
    assert_eq!(toast.message, "Opening edit form for John Silva");
    assert_eq!(toast.variant, ToastVariant::Default);
}

#[test]
fn delete_toast_is_destructive() {
    let customer = &seed::customers()[1];
    let toast = delete_toast(customer);
    assert_eq!(toast.title, "Customer Deleted");
    assert_eq!(toast.message, "Priya Perera has been removed from the system");
    assert_eq!(toast.variant, ToastVariant::Destructive);
}

#[test]
fn assign_toast_names_the_customer() {
    let customer = &seed::customers()[3];
    let toast = assign_toast(customer);
    assert_eq!(toast.title, "Assign Agent");
    assert_eq!(toast.message, "Opening agent assignment for Kamala Rajapaksa");
}
