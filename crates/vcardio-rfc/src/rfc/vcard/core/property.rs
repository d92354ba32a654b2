//! vCard property type.

use std::cmp::Ordering;
use std::fmt;

use super::parameter::Parameter;

/// One content line's semantic payload.
///
/// `group` is the empty string when the line carried no group prefix.
/// A well-formed property has a non-empty name and at least one value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Property {
    /// Property name, case preserved (e.g. "TEL").
    pub name: String,
    /// Group prefix (e.g. "item1" in "item1.TEL"), or empty.
    pub group: String,
    /// Parameters in order of appearance.
    pub parameters: Vec<Parameter>,
    /// Values in order of appearance.
    pub values: Vec<String>,
}

impl Property {
    /// Creates an ungrouped property with no parameters and no values.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Creates an ungrouped property with a single value.
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: vec![value.into()],
            ..Self::default()
        }
    }

    /// Creates a grouped property with a single value.
    #[must_use]
    pub fn grouped_text(
        group: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            ..Self::text(name, value)
        }
    }

    /// Creates an ungrouped property with several values.
    #[must_use]
    pub fn multi<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Returns whether the property name matches, ignoring ASCII case.
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// Returns the first value, if any.
    #[must_use]
    pub fn first_value(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }

    /// Returns the parameter with the given name (case-insensitive).
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&Parameter> {
        self.parameters
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Adds a parameter to this property.
    pub fn add_param(&mut self, param: Parameter) {
        self.parameters.push(param);
    }

    /// Builder form of [`Property::add_param`].
    #[must_use]
    pub fn with_param(mut self, param: Parameter) -> Self {
        self.parameters.push(param);
        self
    }
}

/// Renders the property as its content line, without the CRLF.
impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.group.is_empty() {
            write!(f, "{}.", self.group)?;
        }
        f.write_str(&self.name)?;
        for param in &self.parameters {
            write!(f, ";{param}")?;
        }
        write!(f, ":{}", self.values.join(";"))
    }
}

/// Orders properties by their rendered content line.
#[must_use]
pub fn compare_properties(a: &Property, b: &Property) -> Ordering {
    a.to_string().cmp(&b.to_string())
}

/// Common property names as constants.
pub mod names {
    pub const BEGIN: &str = "BEGIN";
    pub const END: &str = "END";
    pub const VERSION: &str = "VERSION";

    pub const FN: &str = "FN";
    pub const N: &str = "N";
    pub const BDAY: &str = "BDAY";
    pub const ANNIVERSARY: &str = "ANNIVERSARY";
    pub const ADR: &str = "ADR";
    pub const KIND: &str = "KIND";
    pub const MEMBER: &str = "MEMBER";

    /// KIND value required on cards that list MEMBER properties.
    pub const KIND_GROUP: &str = "group";
    /// Parameter value that forces a BDAY/ANNIVERSARY value to text.
    pub const VALUE_TEXT: &str = "text";
    /// Trailer expected after `END` (case-insensitive).
    pub const VCARD: &str = "VCARD";
}
