//! vCard serialization.

use vcardio_core::CodecConfig;
use vcardio_core::constants::{CARD_FOOTER, CARD_HEADER, CRLF};

use super::datetime::encode_datetime;
use super::fold::fold_line;
use crate::rfc::vcard::core::{Card, DateTime, Property, names};
use crate::rfc::vcard::error::{CardError, CardResult};

/// Serializes a card to its wire text using the default codec settings.
///
/// ## Summary
/// Writes the header, FN, every optional property in order, ANNIVERSARY and
/// BDAY, then the footer. Values are written exactly as stored.
///
/// ## Errors
/// Returns a write error if the card has no FN, a property has no value, or a
/// date value has neither date nor time.
pub fn serialize(card: &Card) -> CardResult<String> {
    serialize_with(card, &CodecConfig::default())
}

/// Serializes a card, folding long lines when `config.fold_output` is set.
///
/// ## Errors
/// See [`serialize`].
#[tracing::instrument(skip_all, fields(properties = card.optional_properties.len()))]
pub fn serialize_with(card: &Card, config: &CodecConfig) -> CardResult<String> {
    let Some(fn_prop) = &card.fn_prop else {
        tracing::warn!("Refusing to serialize a card without FN");
        return Err(CardError::write("card has no FN property"));
    };

    let mut writer = LineWriter::new(config);
    writer.output.push_str(CARD_HEADER);

    writer.property(fn_prop)?;
    for prop in &card.optional_properties {
        writer.property(prop)?;
    }

    if let Some(anniversary) = &card.anniversary {
        writer.datetime(names::ANNIVERSARY, anniversary)?;
    }
    if let Some(birthday) = &card.birthday {
        writer.datetime(names::BDAY, birthday)?;
    }

    writer.output.push_str(CARD_FOOTER);

    tracing::debug!(len = writer.output.len(), "Serialized vCard");
    Ok(writer.output)
}

struct LineWriter<'a> {
    config: &'a CodecConfig,
    output: String,
}

impl<'a> LineWriter<'a> {
    fn new(config: &'a CodecConfig) -> Self {
        Self {
            config,
            output: String::new(),
        }
    }

    fn property(&mut self, prop: &Property) -> CardResult<()> {
        if prop.values.is_empty() {
            return Err(CardError::write(format!("{} has no value", prop.name)));
        }

        self.line(&prop.to_string());
        Ok(())
    }

    fn datetime(&mut self, name: &str, dt: &DateTime) -> CardResult<()> {
        let encoded = encode_datetime(dt)?;
        self.line(&format!("{name}{encoded}"));
        Ok(())
    }

    fn line(&mut self, line: &str) {
        if self.config.fold_output {
            self.output.push_str(&fold_line(line, self.config.fold_width));
        } else {
            self.output.push_str(line);
        }
        self.output.push_str(CRLF);
    }
}
