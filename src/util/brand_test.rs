use super::*;

#[test]
fn brand_name_is_never_empty() {
    assert!(!brand_name().is_empty());
}

#[test]
fn default_brand_is_the_fixed_literal() {
    assert_eq!(DEFAULT_BRAND, "InsuraGo");
}
