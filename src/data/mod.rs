//! Entity DTOs and the fixed demo inventories behind every list view.

pub mod seed;
pub mod types;
