//! vCard core types.
//!
//! - [`Card`] - Complete card record
//! - [`Property`] - One content line: group, name, parameters, values
//! - [`Parameter`] - A `name=value` property modifier
//! - [`DateTime`] - BDAY/ANNIVERSARY value, text or structured
//!
//! The [`registry`] module holds the table of recognized property names and
//! [`text`] the ASCII comparison helpers used throughout.
//!
//! ## Example
//!
//! ```rust
//! use vcardio_rfc::rfc::vcard::core::{Card, Property};
//!
//! let mut card = Card::with_formatted_name("John Doe");
//! card.add_property(Property::text("EMAIL", "john@example.com"));
//! assert_eq!(card.formatted_name(), Some("John Doe"));
//! ```

mod card;
mod datetime;
mod parameter;
mod property;
pub mod registry;
pub mod text;

pub use card::Card;
pub use datetime::{DateTime, MAX_DATE_LEN, MAX_TIME_LEN};
pub use parameter::{Parameter, compare_parameters};
pub use property::{Property, compare_properties, names};
pub use registry::{Arity, PropertyRule, Role};
