//! Validation logic for RFC compliance.
//!
//! Parsing accepts any structurally sound card; the validators here enforce
//! the vCard 4.0 cardinality and value-shape rules on top of that.

pub mod card;

pub use card::{PropertyCounter, validate_card, validate_dt, validate_param, validate_prop};
