//! vCard implementation (RFC 6350).
//!
//! ## Overview
//!
//! A card is read from a buffer or a `.vcf`/`.vcard` file, checked against
//! the vCard 4.0 cardinality rules, and written back byte-for-byte. Property
//! values are kept as written; escape sequences are not decoded.
//!
//! ## Usage
//!
//! ### Parsing
//!
//! ```rust
//! use vcardio_rfc::rfc::vcard::parse_str;
//! use vcardio_rfc::rfc::validation::validate_card;
//!
//! let input = "\
//! BEGIN:VCARD\r\n\
//! VERSION:4.0\r\n\
//! FN:John Doe\r\n\
//! EMAIL:john@example.com\r\n\
//! END:VCARD\r\n";
//!
//! let card = parse_str(input).unwrap();
//! assert_eq!(card.formatted_name(), Some("John Doe"));
//! assert!(validate_card(&card).is_ok());
//! ```
//!
//! ### Serializing
//!
//! ```rust
//! use vcardio_rfc::rfc::vcard::{Card, Property, serialize};
//!
//! let mut card = Card::with_formatted_name("Jane Doe");
//! card.add_property(Property::text("EMAIL", "jane@example.com"));
//!
//! let output = serialize(&card).unwrap();
//! assert!(output.contains("FN:Jane Doe\r\n"));
//! ```
//!
//! ## Submodules
//!
//! - [`core`] - Core types (`Card`, `Property`, `Parameter`, `DateTime`)
//! - [`parse`] - Content-line reader, tokenizer and parser
//! - [`build`] - Serialization and line folding
//! - [`json`] - JSON forms of properties, date values and string lists
//! - [`file`] - File reads and writes

pub mod build;
pub mod core;
pub mod error;
pub mod file;
pub mod json;
pub mod parse;

#[cfg(test)]
mod tests;

pub use build::serialize;
pub use core::{Card, DateTime, Parameter, Property};
pub use error::{CardError, CardErrorKind, CardResult, print_error};
pub use file::{parse_and_validate_file, read_all, write_file, write_file_with};
pub use parse::{parse_file, parse_str};
