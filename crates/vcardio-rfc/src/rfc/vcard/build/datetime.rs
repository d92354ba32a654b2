//! Encoder for BDAY/ANNIVERSARY values.

use crate::rfc::vcard::core::DateTime;
use crate::rfc::vcard::error::{CardError, CardResult};

/// Encodes a date value as the text that follows the property name.
///
/// Text values are written as `;Value=Text:<text>`, structured values as
/// `:<date>[T<time>][Z]`. Each `--` in the time is written as a single `-`,
/// which the decoder expands again.
///
/// ## Errors
/// Returns a write error for a structured value with neither date nor time.
pub fn encode_datetime(dt: &DateTime) -> CardResult<String> {
    match dt {
        DateTime::Text(text) => Ok(format!(";Value=Text:{text}")),
        DateTime::Structured { date, time, utc } => {
            if date.is_empty() && time.is_empty() {
                return Err(CardError::write("date value has neither date nor time"));
            }

            let mut out = String::with_capacity(date.len() + time.len() + 3);
            out.push(':');
            out.push_str(date);
            if !time.is_empty() {
                out.push('T');
                out.push_str(&time.replace("--", "-"));
            }
            if *utc {
                out.push('Z');
            }
            Ok(out)
        }
    }
}
