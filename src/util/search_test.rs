use super::*;

#[test]
fn empty_term_matches_everything() {
    assert!(matches_search(&["John Silva", "Colombo 07"], ""));
    assert!(matches_search(&[], ""));
}

#[test]
fn match_is_case_insensitive() {
    assert!(matches_search(&["John Silva"], "john"));
    assert!(matches_search(&["john silva"], "SILVA"));
}

#[test]
fn any_column_can_match() {
    assert!(matches_search(&["John Silva", "Kandy"], "kandy"));
    assert!(!matches_search(&["John Silva", "Kandy"], "galle"));
}

#[test]
fn partial_substrings_match() {
    assert!(matches_search(&["Sarah Fernando"], "fern"));
}

#[test]
fn no_columns_never_matches_a_term() {
    assert!(!matches_search(&[], "x"));
}
