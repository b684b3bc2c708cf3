//! Display brand name, overridable at build time.
//!
//! `INSURAGO_BRAND` affects rendered text only; behavior is identical
//! under any brand.

#[cfg(test)]
#[path = "brand_test.rs"]
mod brand_test;

const DEFAULT_BRAND: &str = "InsuraGo";

/// The brand name shown in page titles and the login/register cards.
pub fn brand_name() -> &'static str {
    option_env!("INSURAGO_BRAND").unwrap_or(DEFAULT_BRAND)
}
