//! The root card record.

use super::datetime::DateTime;
use super::property::{Property, compare_properties, names};

/// A vCard 4.0 record.
///
/// A card produced by the parser always has `fn_prop` set; a card built by
/// hand may be incomplete until it passes
/// [`validate_card`](crate::rfc::validation::validate_card).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Card {
    /// The FN property.
    pub fn_prop: Option<Property>,
    /// BDAY value.
    pub birthday: Option<DateTime>,
    /// ANNIVERSARY value.
    pub anniversary: Option<DateTime>,
    /// Every other property, in order of appearance.
    pub optional_properties: Vec<Property>,
}

impl Card {
    /// Creates an empty card.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a card whose formatted name is `name`.
    #[must_use]
    pub fn with_formatted_name(name: impl Into<String>) -> Self {
        Self {
            fn_prop: Some(Property::text(names::FN, name)),
            ..Self::default()
        }
    }

    /// Returns the first FN value.
    #[must_use]
    pub fn formatted_name(&self) -> Option<&str> {
        self.fn_prop.as_ref().and_then(Property::first_value)
    }

    /// Appends an optional property.
    pub fn add_property(&mut self, prop: Property) {
        self.optional_properties.push(prop);
    }

    /// Returns the first optional property with the given name (case-insensitive).
    #[must_use]
    pub fn get_property(&self, name: &str) -> Option<&Property> {
        self.optional_properties.iter().find(|p| p.is_named(name))
    }

    /// Returns all optional properties with the given name (case-insensitive).
    #[must_use]
    pub fn get_properties(&self, name: &str) -> Vec<&Property> {
        self.optional_properties
            .iter()
            .filter(|p| p.is_named(name))
            .collect()
    }

    /// Compares two cards ignoring the order of optional properties.
    ///
    /// FN, BDAY and ANNIVERSARY must match exactly; optional properties are
    /// compared as a multiset.
    #[must_use]
    pub fn structurally_eq(&self, other: &Self) -> bool {
        if self.fn_prop != other.fn_prop
            || self.birthday != other.birthday
            || self.anniversary != other.anniversary
            || self.optional_properties.len() != other.optional_properties.len()
        {
            return false;
        }

        let mut left: Vec<&Property> = self.optional_properties.iter().collect();
        let mut right: Vec<&Property> = other.optional_properties.iter().collect();
        left.sort_by(|a, b| compare_properties(a, b));
        right.sort_by(|a, b| compare_properties(a, b));

        left == right
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_card_is_empty() {
        let card = Card::new();
        assert!(card.fn_prop.is_none());
        assert!(card.birthday.is_none());
        assert!(card.anniversary.is_none());
        assert!(card.optional_properties.is_empty());
    }

    #[test]
    fn lookup_properties_by_name() {
        let mut card = Card::with_formatted_name("Jane Doe");
        card.add_property(Property::text("TEL", "555-1234"));
        card.add_property(Property::text("tel", "555-9876"));
        card.add_property(Property::text("EMAIL", "jane@example.com"));

        assert_eq!(card.formatted_name(), Some("Jane Doe"));
        assert_eq!(card.get_properties("TEL").len(), 2);
        assert_eq!(
            card.get_property("email").and_then(Property::first_value),
            Some("jane@example.com")
        );
    }

    #[test]
    fn structural_equality_ignores_property_order() {
        let mut a = Card::with_formatted_name("Jane Doe");
        a.add_property(Property::text("TEL", "1"));
        a.add_property(Property::text("EMAIL", "e"));

        let mut b = Card::with_formatted_name("Jane Doe");
        b.add_property(Property::text("EMAIL", "e"));
        b.add_property(Property::text("TEL", "1"));

        assert!(a.structurally_eq(&b));
        assert_ne!(a, b);

        b.birthday = Some(DateTime::date("19850315"));
        assert!(!a.structurally_eq(&b));
    }

    #[test]
    fn structural_equality_counts_duplicates() {
        let mut a = Card::with_formatted_name("X");
        a.add_property(Property::text("TEL", "1"));
        a.add_property(Property::text("TEL", "1"));

        let mut b = Card::with_formatted_name("X");
        b.add_property(Property::text("TEL", "1"));
        b.add_property(Property::text("TEL", "2"));

        assert!(!a.structurally_eq(&b));
    }
}
