//! vCard parameter type.

use std::cmp::Ordering;
use std::fmt;

use super::text::cmp_ignore_case;

/// A `name=value` modifier attached to a property (e.g. `TYPE=work`).
///
/// Names and values are kept exactly as read; comparisons that need to be
/// case-insensitive go through [`super::text`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Parameter {
    /// Parameter name.
    pub name: String,
    /// Parameter value.
    pub value: String,
}

impl Parameter {
    /// Creates a new parameter.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Returns whether both name and value are non-empty.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        !self.name.is_empty() && !self.value.is_empty()
    }

    /// Returns whether the parameter value equals `value`, ignoring ASCII case.
    #[must_use]
    pub fn has_value(&self, value: &str) -> bool {
        self.value.eq_ignore_ascii_case(value)
    }

    /// Creates a TYPE parameter.
    #[must_use]
    pub fn type_param(value: impl Into<String>) -> Self {
        Self::new("TYPE", value)
    }

    /// Creates a VALUE parameter specifying the value type.
    #[must_use]
    pub fn value_type(type_name: impl Into<String>) -> Self {
        Self::new("VALUE", type_name)
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

/// Orders parameters by `name` followed by `value`, ignoring ASCII case.
#[must_use]
pub fn compare_parameters(a: &Parameter, b: &Parameter) -> Ordering {
    let left = format!("{}{}", a.name, a.value);
    let right = format!("{}{}", b.name, b.value);
    cmp_ignore_case(&left, &right)
}
