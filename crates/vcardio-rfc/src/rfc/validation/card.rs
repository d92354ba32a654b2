//! ## Summary
//! Card validation against the property registry.
//!
//! Each optional property is checked against its registry rule: known name,
//! well-formed parameters, value count, and at most one occurrence for
//! singleton properties. The card as a whole must carry exactly one FN value,
//! a group KIND whenever MEMBER is present, and well-shaped date values.

use crate::rfc::vcard::core::registry::{self, Arity, REGISTRY, Role};
use crate::rfc::vcard::core::text::eq_ignore_case;
use crate::rfc::vcard::core::{
    Card, DateTime, MAX_DATE_LEN, MAX_TIME_LEN, Parameter, Property, names,
};
use crate::rfc::vcard::error::{CardError, CardResult};

/// ## Summary
/// Per-card occurrence counts, one slot per registry entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyCounter {
    counts: Vec<usize>,
}

impl Default for PropertyCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertyCounter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            counts: vec![0; REGISTRY.len()],
        }
    }

    /// Records one more occurrence of `name` and returns the new count, or
    /// `None` for a name outside the registry.
    pub fn increment(&mut self, name: &str) -> Option<usize> {
        let slot = registry::position(name)?;
        self.counts[slot] += 1;
        Some(self.counts[slot])
    }

    /// Returns how often `name` has been seen.
    #[must_use]
    pub fn count(&self, name: &str) -> usize {
        registry::position(name).map_or(0, |slot| self.counts[slot])
    }
}

/// ## Summary
/// Validates one optional property and records it in `counter`.
///
/// ## Errors
/// Returns a malformed-property error for an unknown name, a bad parameter,
/// a wrong value count, or a repeated singleton. Returns an invalid-card
/// error for VERSION, which belongs only in the header, and for BDAY or
/// ANNIVERSARY, which are held outside the optional properties.
pub fn validate_prop(prop: &Property, counter: &mut PropertyCounter) -> CardResult<()> {
    let (Some(rule), Some(count)) = (registry::lookup(&prop.name), counter.increment(&prop.name))
    else {
        return Err(CardError::invalid_property(
            0,
            format!("unknown property {}", prop.name),
        ));
    };

    for param in &prop.parameters {
        validate_param(param)?;
    }

    if let Arity::Fixed(expected) = rule.arity {
        if prop.values.len() != expected {
            return Err(CardError::invalid_property(
                0,
                format!(
                    "{} needs {expected} values, found {}",
                    rule.name,
                    prop.values.len()
                ),
            ));
        }
    }

    if rule.role == Role::Version {
        return Err(CardError::invalid_card(
            0,
            "VERSION is only allowed in the card header",
        ));
    }

    if rule.role == Role::DateAndOrTime {
        return Err(CardError::invalid_card(
            0,
            format!("{} belongs in the card's date slot", rule.name),
        ));
    }

    if rule.singleton && count > 1 {
        return Err(CardError::invalid_property(
            0,
            format!("{} may appear at most once", rule.name),
        ));
    }

    if prop.values.is_empty() {
        return Err(CardError::invalid_property(
            0,
            format!("{} has no value", rule.name),
        ));
    }

    if prop.values.len() > 1 && rule.arity == Arity::Single {
        return Err(CardError::invalid_property(
            0,
            format!("{} takes a single value", rule.name),
        ));
    }

    Ok(())
}

/// ## Summary
/// Checks that a parameter has both a name and a value.
///
/// ## Errors
/// Returns a malformed-property error otherwise.
pub fn validate_param(param: &Parameter) -> CardResult<()> {
    if param.is_well_formed() {
        Ok(())
    } else {
        Err(CardError::invalid_property(
            0,
            format!("parameter {param} has an empty name or value"),
        ))
    }
}

/// ## Summary
/// Checks the shape of a BDAY/ANNIVERSARY value.
///
/// Text must be non-empty. A structured value needs a date or a time; each
/// present part is at least two characters of digits and dashes, does not end
/// in a dash, and fits its field (8 for the date, 6 for the time).
///
/// ## Errors
/// Returns a malformed date-time error on any violation.
pub fn validate_dt(dt: &DateTime) -> CardResult<()> {
    match dt {
        DateTime::Text(text) if text.is_empty() => {
            Err(CardError::invalid_datetime("text date value is empty"))
        }
        DateTime::Text(_) => Ok(()),
        DateTime::Structured { date, time, .. } => {
            if date.is_empty() && time.is_empty() {
                return Err(CardError::invalid_datetime(
                    "date value has neither date nor time",
                ));
            }
            check_component("date", date, MAX_DATE_LEN)?;
            check_component("time", time, MAX_TIME_LEN)
        }
    }
}

fn check_component(label: &str, value: &str, max_len: usize) -> CardResult<()> {
    if value.is_empty() {
        return Ok(());
    }

    if value.len() < 2
        || value.len() > max_len
        || value.ends_with('-')
        || !value.bytes().all(|b| b.is_ascii_digit() || b == b'-')
    {
        return Err(CardError::invalid_datetime(format!(
            "malformed {label} component {value:?}"
        )));
    }

    Ok(())
}

/// ## Summary
/// Validates a complete card.
///
/// ## Errors
/// Returns an invalid-card error for a missing or malformed FN, a MEMBER
/// without a group KIND, or VERSION among the properties. Otherwise returns
/// the first property or date-value error.
#[tracing::instrument(skip_all, fields(properties = card.optional_properties.len()))]
pub fn validate_card(card: &Card) -> CardResult<()> {
    validate_formatted_name(card.fn_prop.as_ref())?;

    let mut counter = PropertyCounter::new();
    for prop in &card.optional_properties {
        validate_prop(prop, &mut counter).inspect_err(|e| {
            tracing::warn!(property = %prop.name, error = %e, "Property failed validation");
        })?;
    }

    if counter.count(names::MEMBER) > 0 && !has_group_kind(card) {
        return Err(CardError::invalid_card(
            0,
            "MEMBER requires KIND:group",
        ));
    }

    if let Some(birthday) = &card.birthday {
        validate_dt(birthday)?;
    }
    if let Some(anniversary) = &card.anniversary {
        validate_dt(anniversary)?;
    }

    tracing::debug!("Card is valid");
    Ok(())
}

fn validate_formatted_name(fn_prop: Option<&Property>) -> CardResult<()> {
    let Some(fn_prop) = fn_prop else {
        return Err(CardError::invalid_card(0, "card has no FN property"));
    };

    if !fn_prop.is_named(names::FN) {
        return Err(CardError::invalid_card(
            0,
            format!("formatted name is stored as {}", fn_prop.name),
        ));
    }

    if fn_prop.values.len() != 1 {
        return Err(CardError::invalid_card(
            0,
            format!("FN needs exactly one value, found {}", fn_prop.values.len()),
        ));
    }

    for param in &fn_prop.parameters {
        validate_param(param).map_err(|e| CardError::invalid_card(0, e.message))?;
    }

    Ok(())
}

fn has_group_kind(card: &Card) -> bool {
    card.get_properties(names::KIND).iter().any(|kind| {
        kind.first_value()
            .is_some_and(|value| eq_ignore_case(value, names::KIND_GROUP))
    })
}
