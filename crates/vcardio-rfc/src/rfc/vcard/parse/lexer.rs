//! Tokenizer for a single logical content line.
//!
//! Format: `[group.]name[;pname=pvalue]*:value[;value]*CRLF`
//!
//! Each step takes the remainder left by the previous one, so the parser can
//! stop after the name and hand the rest to a property-specific decoder.

use crate::rfc::vcard::core::text::{eq_ignore_case, until_line_break};
use crate::rfc::vcard::core::{Parameter, Property, names};
use crate::rfc::vcard::error::{CardError, CardResult};

/// Splits an optional `group.` prefix off a content line.
///
/// The group is everything before a `.` that appears ahead of the first `:`
/// or `;`. Without one the group is empty and the line is returned unchanged.
///
/// ## Errors
/// Returns a malformed-property error for an empty line.
pub fn extract_group(line: &str, line_num: usize) -> CardResult<(String, &str)> {
    if line.is_empty() {
        return Err(CardError::invalid_property(line_num, "empty content line"));
    }

    match line.find(['.', ':', ';']) {
        Some(dot) if line.as_bytes()[dot] == b'.' => {
            Ok((line[..dot].to_string(), &line[dot + 1..]))
        }
        _ => Ok((String::new(), line)),
    }
}

/// Splits the property name off a content line (group already removed).
///
/// The name is the leading run of ASCII letters and `-`. It must be followed
/// by more text, and every line except `END` must end in CRLF.
///
/// ## Errors
/// Returns a malformed-property error if the name is empty, nothing follows
/// it, or the line is unterminated.
pub fn extract_prop(line: &str, line_num: usize) -> CardResult<(String, &str)> {
    let end = line
        .find(|c: char| !(c.is_ascii_alphabetic() || c == '-'))
        .unwrap_or(line.len());

    if end == 0 {
        return Err(CardError::invalid_property(line_num, "missing property name"));
    }
    if end == line.len() {
        return Err(CardError::invalid_property(
            line_num,
            format!("nothing follows property name {line}"),
        ));
    }

    let name = &line[..end];
    if !eq_ignore_case(name, names::END) && !line.ends_with("\r\n") {
        return Err(CardError::invalid_property(
            line_num,
            format!("{name} line is not terminated by CRLF"),
        ));
    }

    Ok((name.to_string(), &line[end..]))
}

/// Reads `;name=value` parameters up to the `:` that starts the values.
///
/// Returns the parameters and the remainder beginning at that `:`.
///
/// ## Errors
/// Returns a malformed-property error if a parameter lacks `=`, runs to the
/// end of the line, has an empty name or value, or if anything other than
/// `;` or `:` follows the property name.
pub fn parse_parameters(rest: &str, line_num: usize) -> CardResult<(Vec<Parameter>, &str)> {
    let body = until_line_break(rest);
    let mut params = Vec::new();
    let mut pos = 0;

    loop {
        match body.as_bytes().get(pos) {
            Some(b':') => return Ok((params, &rest[pos..])),
            Some(b';') => pos += 1,
            Some(_) => {
                return Err(CardError::invalid_property(
                    line_num,
                    format!("unexpected character at offset {pos} of property"),
                ));
            }
            None => {
                return Err(CardError::invalid_property(line_num, "missing ':' before values"));
            }
        }

        let Some(eq) = body[pos..].find('=') else {
            return Err(CardError::invalid_property(line_num, "parameter without '='"));
        };
        let name = &body[pos..pos + eq];
        pos += eq + 1;

        let Some(len) = body[pos..].find([';', ':']) else {
            return Err(CardError::invalid_property(line_num, "unterminated parameter"));
        };
        let value = &body[pos..pos + len];
        pos += len;

        if name.is_empty() || value.is_empty() {
            return Err(CardError::invalid_property(
                line_num,
                format!("parameter {name}={value} has an empty name or value"),
            ));
        }

        tracing::trace!(line = line_num, name, value, "Parsed parameter");
        params.push(Parameter::new(name, value));
    }
}

/// Splits the text after `:` into values on every `;`.
///
/// An empty value section yields no values; a trailing `;` yields a trailing
/// empty value. Backslash sequences are kept as written.
///
/// ## Errors
/// Returns a malformed-property error if `rest` does not start with `:`.
pub fn parse_property_values(rest: &str, line_num: usize) -> CardResult<Vec<String>> {
    let Some(raw) = rest.strip_prefix(':') else {
        return Err(CardError::invalid_property(line_num, "missing ':' before values"));
    };

    let raw = until_line_break(raw);
    if raw.is_empty() {
        return Ok(Vec::new());
    }

    Ok(raw.split(';').map(String::from).collect())
}

/// Runs the whole tokenizer over one logical line.
///
/// ## Errors
/// Returns the first malformed-property error raised by any step.
pub fn tokenize(line: &str, line_num: usize) -> CardResult<(String, Property)> {
    let (group, rest) = extract_group(line, line_num)?;
    let (name, rest) = extract_prop(rest, line_num)?;
    let (parameters, rest) = parse_parameters(rest, line_num)?;
    let values = parse_property_values(rest, line_num)?;

    let prop = Property {
        name,
        group: group.clone(),
        parameters,
        values,
    };

    Ok((group, prop))
}
