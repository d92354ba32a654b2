//! JSON forms of string lists, properties, date values and the card name.
//!
//! These are independent of the text grammar. Properties are encoded without
//! their parameters, and a card decodes from JSON only as far as its FN.
//!
//! ```text
//! ["a","b"]
//! {"group":"","name":"TEL","values":["555-1234"]}
//! {"isText":false,"date":"19850412","time":"","text":"","isUTC":false}
//! {"FN":"Jane Doe"}
//! ```

use serde::Deserialize;
use serde_json::{Value, json};

use super::core::{Card, DateTime, MAX_DATE_LEN, MAX_TIME_LEN, Property};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PropertyWire {
    group: String,
    name: String,
    values: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct DateTimeWire {
    is_text: bool,
    date: String,
    time: String,
    text: String,
    #[serde(rename = "isUTC")]
    is_utc: bool,
}

/// Encodes a list of strings as a JSON array.
#[must_use]
pub fn str_list_to_json(values: &[String]) -> String {
    json!(values).to_string()
}

/// Decodes a JSON array of strings.
///
/// Returns `None` for anything that is not an array of strings.
#[must_use]
pub fn json_to_str_list(text: &str) -> Option<Vec<String>> {
    serde_json::from_str(text).ok()
}

/// Encodes a property's group, name and values. Parameters are dropped.
#[must_use]
pub fn property_to_json(prop: &Property) -> String {
    json!({
        "group": prop.group,
        "name": prop.name,
        "values": prop.values,
    })
    .to_string()
}

/// Decodes a property from its JSON form.
///
/// Returns `None` if the text is malformed, the name is empty, or there are
/// no values.
#[must_use]
pub fn json_to_property(text: &str) -> Option<Property> {
    let wire: PropertyWire = serde_json::from_str(text)
        .inspect_err(|e| tracing::debug!(error = %e, "Rejected property JSON"))
        .ok()?;

    if wire.name.is_empty() || wire.values.is_empty() {
        return None;
    }

    Some(Property {
        name: wire.name,
        group: wire.group,
        parameters: Vec::new(),
        values: wire.values,
    })
}

/// Encodes a date value with the inactive shape's fields left empty.
#[must_use]
pub fn datetime_to_json(dt: &DateTime) -> String {
    json!({
        "isText": dt.is_text(),
        "date": dt.date_value(),
        "time": dt.time_value(),
        "text": dt.text_value(),
        "isUTC": dt.is_utc(),
    })
    .to_string()
}

/// Decodes a date value from its JSON form.
///
/// Returns `None` if the text is malformed, mixes the text and structured
/// shapes, has neither date nor time for a structured value, or overflows
/// the date or time field.
#[must_use]
pub fn json_to_datetime(text: &str) -> Option<DateTime> {
    let wire: DateTimeWire = serde_json::from_str(text)
        .inspect_err(|e| tracing::debug!(error = %e, "Rejected date JSON"))
        .ok()?;

    if wire.is_text {
        if !wire.date.is_empty() || !wire.time.is_empty() || wire.is_utc {
            return None;
        }
        return Some(DateTime::Text(wire.text));
    }

    if !wire.text.is_empty()
        || (wire.date.is_empty() && wire.time.is_empty())
        || wire.date.len() > MAX_DATE_LEN
        || wire.time.len() > MAX_TIME_LEN
    {
        return None;
    }

    Some(DateTime::structured(wire.date, wire.time, wire.is_utc))
}

/// Builds a card whose FN comes from the first string member of a JSON
/// object, e.g. `{"FN":"Jane Doe"}`. Other members are ignored.
#[must_use]
pub fn json_to_card(text: &str) -> Option<Card> {
    let Value::Object(members) = serde_json::from_str::<Value>(text).ok()? else {
        return None;
    };

    let (name, value) = members
        .into_iter()
        .find_map(|(key, value)| match value {
            Value::String(value) => Some((key, value)),
            _ => None,
        })?;

    if name.is_empty() {
        return None;
    }

    let mut card = Card::new();
    card.fn_prop = Some(Property::text(name, value));
    Some(card)
}
