//! BDAY/ANNIVERSARY value type (RFC 6350 §4.3.4).
//!
//! A value is either free-form text or a structured date and/or time kept as
//! the digit/dash strings that appeared on the wire. Truncated forms such as
//! `--0203` are stored verbatim rather than interpreted.

use std::fmt;

/// Longest structured date accepted (`YYYYMMDD`).
pub const MAX_DATE_LEN: usize = 8;
/// Longest structured time accepted (`HHMMSS`).
pub const MAX_TIME_LEN: usize = 6;

/// A BDAY or ANNIVERSARY value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DateTime {
    /// Free-form text (e.g. "circa 1800").
    Text(String),
    /// Calendar date and/or clock time as digit/dash strings.
    Structured {
        /// Date portion, e.g. `19850315` or `--0315`. May be empty.
        date: String,
        /// Time portion, e.g. `103000` or `--30`. May be empty.
        time: String,
        /// Whether a trailing `Z` marked the value as UTC.
        utc: bool,
    },
}

impl DateTime {
    /// Creates a text value.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Creates a structured value.
    #[must_use]
    pub fn structured(date: impl Into<String>, time: impl Into<String>, utc: bool) -> Self {
        Self::Structured {
            date: date.into(),
            time: time.into(),
            utc,
        }
    }

    /// Creates a date-only structured value.
    #[must_use]
    pub fn date(date: impl Into<String>) -> Self {
        Self::structured(date, String::new(), false)
    }

    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Returns the text, or "" for structured values.
    #[must_use]
    pub fn text_value(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Structured { .. } => "",
        }
    }

    /// Returns the date portion, or "" for text values.
    #[must_use]
    pub fn date_value(&self) -> &str {
        match self {
            Self::Structured { date, .. } => date,
            Self::Text(_) => "",
        }
    }

    /// Returns the time portion, or "" for text values.
    #[must_use]
    pub fn time_value(&self) -> &str {
        match self {
            Self::Structured { time, .. } => time,
            Self::Text(_) => "",
        }
    }

    /// Returns whether the value is a UTC structured value.
    #[must_use]
    pub fn is_utc(&self) -> bool {
        matches!(self, Self::Structured { utc: true, .. })
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Structured { date, time, .. } => {
                f.write_str(date)?;
                if !time.is_empty() {
                    write!(f, "T{time}")?;
                }
                Ok(())
            }
        }
    }
}
