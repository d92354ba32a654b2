//! Registry of recognized vCard 4.0 property names and their rules.
//!
//! The table is the single source of truth for how the parser dispatches a
//! content line and how the validator counts and shapes properties.

/// How the card parser handles a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Tokenized into a [`super::Property`].
    Standard,
    /// The card's formatted name; the first one becomes `Card::fn_prop`.
    FormattedName,
    /// Decoded with the date-time codec into `birthday`/`anniversary`.
    DateAndOrTime,
    /// Header-only; never allowed among a card's properties.
    Version,
}

/// How many values a property may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly one value.
    Single,
    /// Exactly this many values (structured properties).
    Fixed(usize),
    /// One or more values.
    Multi,
}

impl Arity {
    /// Returns whether `count` values are allowed.
    #[must_use]
    pub fn allows(self, count: usize) -> bool {
        match self {
            Self::Single => count == 1,
            Self::Fixed(n) => count == n,
            Self::Multi => count >= 1,
        }
    }
}

/// Rule for one registered property name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyRule {
    pub name: &'static str,
    pub role: Role,
    /// At most one occurrence per card.
    pub singleton: bool,
    pub arity: Arity,
}

const fn rule(name: &'static str, role: Role, singleton: bool, arity: Arity) -> PropertyRule {
    PropertyRule {
        name,
        role,
        singleton,
        arity,
    }
}

const fn standard(name: &'static str) -> PropertyRule {
    rule(name, Role::Standard, false, Arity::Single)
}

const fn multi(name: &'static str) -> PropertyRule {
    rule(name, Role::Standard, false, Arity::Multi)
}

/// Every property name known to the parser and validator.
pub static REGISTRY: [PropertyRule; 36] = [
    standard("SOURCE"),
    rule("KIND", Role::Standard, true, Arity::Single),
    standard("XML"),
    rule("FN", Role::FormattedName, false, Arity::Single),
    rule("N", Role::Standard, true, Arity::Fixed(5)),
    multi("NICKNAME"),
    multi("PHOTO"),
    rule("BDAY", Role::DateAndOrTime, false, Arity::Single),
    rule("ANNIVERSARY", Role::DateAndOrTime, false, Arity::Single),
    rule("GENDER", Role::Standard, true, Arity::Multi),
    rule("ADR", Role::Standard, false, Arity::Fixed(7)),
    multi("TEL"),
    standard("EMAIL"),
    standard("IMPP"),
    standard("LANG"),
    standard("TZ"),
    standard("GEO"),
    standard("TITLE"),
    standard("ROLE"),
    standard("LOGO"),
    multi("ORG"),
    standard("MEMBER"),
    standard("RELATED"),
    multi("CATEGORIES"),
    standard("NOTE"),
    rule("PRODID", Role::Standard, true, Arity::Single),
    rule("REV", Role::Standard, true, Arity::Single),
    standard("SOUND"),
    rule("UID", Role::Standard, true, Arity::Single),
    multi("CLIENTPIDMAP"),
    standard("URL"),
    rule("VERSION", Role::Version, false, Arity::Single),
    standard("KEY"),
    standard("FBURL"),
    standard("CALADRURI"),
    standard("CALURI"),
];

/// Returns the registry slot for `name`, ignoring ASCII case.
#[must_use]
pub fn position(name: &str) -> Option<usize> {
    REGISTRY
        .iter()
        .position(|rule| rule.name.eq_ignore_ascii_case(name))
}

/// Returns the rule for `name`, ignoring ASCII case.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static PropertyRule> {
    position(name).map(|slot| &REGISTRY[slot])
}
