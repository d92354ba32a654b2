//! vCard parsing (RFC 6350).
//!
//! ## Usage
//!
//! ```rust
//! use vcardio_rfc::rfc::vcard::parse;
//!
//! let input = "\
//! BEGIN:VCARD\r\n\
//! VERSION:4.0\r\n\
//! FN:John Doe\r\n\
//! EMAIL:john@example.com\r\n\
//! END:VCARD\r\n";
//!
//! let card = parse::parse_str(input).unwrap();
//! assert_eq!(card.formatted_name(), Some("John Doe"));
//! ```
//!
//! ## Features
//!
//! - Undoes line folding, rejecting bare CR or LF line endings
//! - Parses property groups (item1.TEL)
//! - Decodes BDAY/ANNIVERSARY as text or date/time/UTC
//! - Enforces N and ADR component counts while reading

mod datetime;
mod lexer;
mod parser;
mod reader;


pub use datetime::{TEXT_THRESHOLD, decode_datetime};
pub use lexer::{extract_group, extract_prop, parse_parameters, parse_property_values, tokenize};
pub use parser::{parse_file, parse_file_with, parse_str, parse_str_with};
pub use reader::ContentLines;
