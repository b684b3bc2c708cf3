use super::*;
use crate::state::toast::ToastVariant;

#[test]
fn filter_matches_route_name_area_and_agent() {
    let rows = seed::routes();
    assert_eq!(filter_routes(&rows, "").len(), 4);
    assert_eq!(filter_routes(&rows, "coast").len(), 1);
    assert_eq!(filter_routes(&rows, "peradeniya").len(), 1);
    assert_eq!(filter_routes(&rows, "unassigned").len(), 1);
}

#[test]
fn filter_term_can_match_multiple_routes() {
    // "route" appears in every route name.
    assert_eq!(filter_routes(&seed::routes(), "route").len(), 4);
}

#[test]
fn delete_toast_is_destructive_and_names_the_route() {
    let route = &seed::routes()[2];
    let toast = delete_toast(route);
    assert_eq!(toast.title, "Route Deleted");
    assert_eq!(toast.message, "Southern Coast Route has been removed from the system");
    assert_eq!(toast.variant, ToastVariant::Destructive);
}

#[test]
fn edit_and_assign_toasts_name_the_route() {
    let route = &seed::routes()[0];
    assert_eq!(edit_toast(route).message, "Opening edit form for Colombo Central Route");
    assert_eq!(assign_toast(route).message, "Opening agent assignment for Colombo Central Route");
}
