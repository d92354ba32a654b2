//! vCard document parser.

use std::path::Path;

use vcardio_core::CodecConfig;
use vcardio_core::constants::{BEGIN_LINE, VERSION_LINE};

use super::datetime::decode_datetime;
use super::lexer::{extract_group, extract_prop, parse_parameters, parse_property_values};
use super::reader::ContentLines;
use crate::rfc::vcard::core::registry::{self, Arity, Role};
use crate::rfc::vcard::core::text::{eq_ignore_case, trim_line_end};
use crate::rfc::vcard::core::{Card, Property, names};
use crate::rfc::vcard::error::{CardError, CardResult};
use crate::rfc::vcard::file::read_all;

/// Parses a single card from a buffer using the default codec settings.
///
/// ## Summary
/// The buffer must start with `BEGIN:VCARD` and `VERSION:4.0` and contain an
/// `END:VCARD` line. The returned card is structurally complete but not yet
/// validated.
///
/// ## Errors
/// Returns an error if the buffer is too short, a line is malformed, or the
/// card structure is broken.
pub fn parse_str(input: &str) -> CardResult<Card> {
    parse_str_with(input, &CodecConfig::default())
}

/// Parses a single card from a buffer.
///
/// ## Errors
/// See [`parse_str`].
#[tracing::instrument(skip(input, config), fields(input_len = input.len()))]
pub fn parse_str_with(input: &str, config: &CodecConfig) -> CardResult<Card> {
    tracing::debug!("Parsing vCard");

    let lines = ContentLines::with_min_len(input, config.min_input_len)?;
    let card = Parser::new(lines).parse_card()?;

    tracing::debug!(
        properties = card.optional_properties.len(),
        "Parsed vCard"
    );

    Ok(card)
}

/// Reads and parses a card file using the default codec settings.
///
/// ## Errors
/// Returns an invalid-file error if the path cannot be read, otherwise any
/// error from [`parse_str`].
pub fn parse_file(path: impl AsRef<Path>) -> CardResult<Card> {
    parse_file_with(path, &CodecConfig::default())
}

/// Reads and parses a card file.
///
/// ## Errors
/// See [`parse_file`].
pub fn parse_file_with(path: impl AsRef<Path>, config: &CodecConfig) -> CardResult<Card> {
    let input = read_all(path.as_ref(), config)?;
    parse_str_with(&input, config)
}

struct Parser<'a> {
    lines: ContentLines<'a>,
    card: Card,
}

impl<'a> Parser<'a> {
    fn new(lines: ContentLines<'a>) -> Self {
        Self {
            lines,
            card: Card::new(),
        }
    }

    fn current_line(&self) -> usize {
        self.lines.line_number()
    }

    fn parse_card(mut self) -> CardResult<Card> {
        self.expect_line(BEGIN_LINE)?;
        self.expect_line(VERSION_LINE)?;

        loop {
            let Some(line) = self.lines.unfold_next()? else {
                tracing::warn!("Card ended without END:VCARD");
                return Err(CardError::invalid_card(
                    self.current_line(),
                    "missing END:VCARD",
                ));
            };
            let line_num = self.current_line();

            let (group, rest) = extract_group(&line, line_num)?;
            let (name, rest) = extract_prop(rest, line_num)?;

            if eq_ignore_case(&name, names::END) {
                if !eq_ignore_case(trim_line_end(rest), ":VCARD") {
                    return Err(CardError::invalid_card(
                        line_num,
                        format!("unexpected END value {}", trim_line_end(rest)),
                    ));
                }
                break;
            }

            if eq_ignore_case(&name, names::BEGIN) {
                return Err(CardError::invalid_card(line_num, "nested cards are not supported"));
            }

            self.dispatch(group, name, rest, line_num)?;
        }

        if self.card.fn_prop.is_none() {
            return Err(CardError::invalid_card(
                self.current_line(),
                "card has no FN property",
            ));
        }

        Ok(self.card)
    }

    /// Consumes one header line, which must match `expected` ignoring case.
    fn expect_line(&mut self, expected: &str) -> CardResult<()> {
        let line = self.lines.unfold_next()?;
        let line_num = self.current_line();

        match line {
            Some(line) if eq_ignore_case(trim_line_end(&line), expected) => Ok(()),
            Some(line) => Err(CardError::invalid_card(
                line_num,
                format!("expected {expected}, found {}", trim_line_end(&line)),
            )),
            None => Err(CardError::invalid_card(
                line_num,
                format!("missing {expected}"),
            )),
        }
    }

    fn dispatch(
        &mut self,
        group: String,
        name: String,
        rest: &str,
        line_num: usize,
    ) -> CardResult<()> {
        let rule = registry::lookup(&name);

        match rule.map_or(Role::Standard, |rule| rule.role) {
            Role::DateAndOrTime => {
                let slot = if eq_ignore_case(&name, names::BDAY) {
                    &mut self.card.birthday
                } else {
                    &mut self.card.anniversary
                };
                if slot.is_some() {
                    return Err(CardError::invalid_card(
                        line_num,
                        format!("duplicate {name} property"),
                    ));
                }
                *slot = Some(decode_datetime(rest, line_num)?);
            }
            role => {
                let (parameters, rest) = parse_parameters(rest, line_num)?;
                let values = parse_property_values(rest, line_num)?;

                if values.is_empty() {
                    return Err(CardError::invalid_property(
                        line_num,
                        format!("{name} has no value"),
                    ));
                }
                if let Some(Arity::Fixed(expected)) = rule.map(|rule| rule.arity) {
                    if values.len() != expected {
                        return Err(CardError::invalid_property(
                            line_num,
                            format!("{name} needs {expected} values, found {}", values.len()),
                        ));
                    }
                }

                let prop = Property {
                    name,
                    group,
                    parameters,
                    values,
                };

                if role == Role::FormattedName && self.card.fn_prop.is_none() {
                    self.card.fn_prop = Some(prop);
                } else {
                    self.card.add_property(prop);
                }
            }
        }

        tracing::trace!(line = line_num, "Parsed content line");
        Ok(())
    }
}
