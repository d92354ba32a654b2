//! vCard error types.

use std::fmt;

use thiserror::Error;

/// Result type for card reading, validation and writing.
pub type CardResult<T> = Result<T, CardError>;

/// An error raised while reading, validating or writing a card.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {kind}: {message}")]
pub struct CardError {
    /// The kind of error.
    pub kind: CardErrorKind,
    /// Logical line where the error occurred (1-based), or 0 when the error
    /// is not tied to a line.
    pub line: usize,
    /// Additional context or message.
    pub message: String,
}

impl CardError {
    /// Creates a new error.
    #[must_use]
    pub fn new(kind: CardErrorKind, line: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            line,
            message: message.into(),
        }
    }

    /// Creates an invalid-file error.
    #[must_use]
    pub fn invalid_file(message: impl Into<String>) -> Self {
        Self::new(CardErrorKind::InvalidFile, 0, message)
    }

    /// Creates an invalid-card error.
    #[must_use]
    pub fn invalid_card(line: usize, message: impl Into<String>) -> Self {
        Self::new(CardErrorKind::InvalidCard, line, message)
    }

    /// Creates a malformed-property error.
    #[must_use]
    pub fn invalid_property(line: usize, message: impl Into<String>) -> Self {
        Self::new(CardErrorKind::InvalidProperty, line, message)
    }

    /// Creates a malformed date-time error.
    #[must_use]
    pub fn invalid_datetime(message: impl Into<String>) -> Self {
        Self::new(CardErrorKind::InvalidDateTime, 0, message)
    }

    /// Creates a write error.
    #[must_use]
    pub fn write(message: impl Into<String>) -> Self {
        Self::new(CardErrorKind::WriteError, 0, message)
    }

    /// Creates a resource-exhaustion error.
    #[must_use]
    pub fn other(message: impl Into<String>) -> Self {
        Self::new(CardErrorKind::Other, 0, message)
    }
}

/// The kind of card error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardErrorKind {
    /// Bad path, extension, or unreadable input.
    InvalidFile,
    /// Structural, cardinality or header violation.
    InvalidCard,
    /// Malformed content line or property value.
    InvalidProperty,
    /// BDAY/ANNIVERSARY shape violation.
    InvalidDateTime,
    /// Output path, extension or unwritable file, or nothing to serialize.
    WriteError,
    /// Resource exhaustion.
    Other,
}

impl CardErrorKind {
    /// Returns the fixed diagnostic code for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidFile => "INV_FILE",
            Self::InvalidCard => "INV_CARD",
            Self::InvalidProperty => "INV_PROP",
            Self::InvalidDateTime => "INV_DT",
            Self::WriteError => "WRITE_ERROR",
            Self::Other => "OTHER_ERROR",
        }
    }
}

impl fmt::Display for CardErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps an error kind to its fixed diagnostic code.
#[must_use]
pub const fn print_error(kind: CardErrorKind) -> &'static str {
    kind.as_str()
}
