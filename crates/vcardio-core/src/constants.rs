//! Literals shared by the reader, the serializer and the configuration defaults.

pub const CRLF: &str = "\r\n";

pub const BEGIN_LINE: &str = "BEGIN:VCARD";
pub const VERSION_LINE: &str = "VERSION:4.0";
pub const END_LINE: &str = "END:VCARD";

/// Header written at the top of every serialized card.
pub const CARD_HEADER: &str = const_str::concat!(BEGIN_LINE, CRLF, VERSION_LINE, CRLF);
pub const CARD_FOOTER: &str = const_str::concat!(END_LINE, CRLF);

/// Shortest buffer that can hold a card worth scanning.
pub const MIN_INPUT_LEN: usize = 20;

/// Maximum physical line length in octets (RFC 6350 §3.2).
pub const DEFAULT_FOLD_WIDTH: usize = 75;

pub const VCARD_EXTENSIONS: [&str; 2] = ["vcf", "vcard"];
