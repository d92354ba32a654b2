//! vCard serialization (RFC 6350).
//!
//! ## Usage
//!
//! ```rust
//! use vcardio_rfc::rfc::vcard::build::serialize;
//! use vcardio_rfc::rfc::vcard::core::{Card, Property};
//!
//! let mut card = Card::with_formatted_name("John Doe");
//! card.add_property(Property::text("EMAIL", "john@example.com"));
//!
//! let output = serialize(&card).unwrap();
//! assert!(output.starts_with("BEGIN:VCARD\r\nVERSION:4.0\r\n"));
//! ```
//!
//! Values are written byte-for-byte as stored; no escaping is applied.
//! Line folding at a configurable octet width is opt-in.

mod datetime;
mod fold;
mod serializer;

pub use datetime::encode_datetime;
pub use fold::{fold_default, fold_line};
pub use serializer::{serialize, serialize_with};
