//! Decoder for BDAY/ANNIVERSARY values.
//!
//! A value is read as free text when a `VALUE=text` parameter says so, when it
//! contains a letter other than the `T` and `Z` designators, or when it is
//! longer than [`TEXT_THRESHOLD`]. Anything else is split into date, time and
//! UTC marker.

use super::lexer::parse_parameters;
use crate::rfc::vcard::core::text::until_line_break;
use crate::rfc::vcard::core::{DateTime, MAX_TIME_LEN, names};
use crate::rfc::vcard::error::{CardError, CardResult};

/// Values longer than this many bytes are always free text.
pub const TEXT_THRESHOLD: usize = 20;

/// Decodes the remainder of a BDAY/ANNIVERSARY line after the property name.
///
/// ## Errors
/// Returns a malformed-property error if the parameters are malformed, the
/// `:` is missing, or characters remain after the time and UTC marker.
pub fn decode_datetime(rest: &str, line_num: usize) -> CardResult<DateTime> {
    let (params, rest) = parse_parameters(rest, line_num)?;
    let forced_text = matches!(params.as_slice(), [only] if only.has_value(names::VALUE_TEXT));

    let Some(raw) = rest.strip_prefix(':') else {
        return Err(CardError::invalid_property(line_num, "missing ':' before date value"));
    };
    let value = until_line_break(raw);

    if forced_text || looks_like_text(value) {
        tracing::trace!(line = line_num, forced_text, "Date value read as text");
        return Ok(DateTime::text(value));
    }

    let date_end = value.find(['T', 't', 'Z', 'z']).unwrap_or(value.len());
    let date = &value[..date_end];
    let mut rest = &value[date_end..];

    let mut time = String::new();
    if let Some(after) = rest.strip_prefix(['T', 't']) {
        let mut consumed = 0;
        for c in after.chars() {
            if matches!(c, 'Z' | 'z') || time.len() >= MAX_TIME_LEN {
                break;
            }
            time.push(c);
            // A dash in the time stands for an omitted two-digit field.
            if c == '-' && time.len() < MAX_TIME_LEN {
                time.push('-');
            }
            consumed += c.len_utf8();
        }
        rest = &after[consumed..];
    }

    let utc = match rest.strip_prefix(['Z', 'z']) {
        Some(after) => {
            rest = after;
            true
        }
        None => false,
    };

    if !rest.is_empty() {
        return Err(CardError::invalid_property(
            line_num,
            format!("unexpected trailing characters in date value: {rest}"),
        ));
    }

    Ok(DateTime::structured(date, time, utc))
}

fn looks_like_text(value: &str) -> bool {
    value.len() > TEXT_THRESHOLD
        || value
            .bytes()
            .any(|b| b.is_ascii_alphabetic() && !matches!(b, b'T' | b't' | b'Z' | b'z'))
}
