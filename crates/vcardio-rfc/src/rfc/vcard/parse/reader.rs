//! Content-line reader: undoes line folding (RFC 6350 §3.2).
//!
//! Physical lines end in CRLF. A physical line that starts with a space or a
//! tab continues the previous one; the fold character is dropped. Logical
//! lines are handed out one at a time and keep their terminating CRLF.

use vcardio_core::constants::MIN_INPUT_LEN;

use crate::rfc::vcard::error::{CardError, CardResult};

/// Iterator over the logical content lines of a card buffer.
#[derive(Debug, Clone)]
pub struct ContentLines<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
}

impl<'a> ContentLines<'a> {
    /// Creates a reader over `input`, rejecting buffers too short to hold a card.
    ///
    /// ## Errors
    /// Returns an invalid-file error if `input` is shorter than 20 bytes.
    pub fn new(input: &'a str) -> CardResult<Self> {
        Self::with_min_len(input, MIN_INPUT_LEN)
    }

    /// Creates a reader with a custom minimum buffer length.
    ///
    /// ## Errors
    /// Returns an invalid-file error if `input` is shorter than `min_len` bytes.
    pub fn with_min_len(input: &'a str, min_len: usize) -> CardResult<Self> {
        if input.len() < min_len {
            tracing::warn!(len = input.len(), min_len, "Card buffer too short");
            return Err(CardError::invalid_file(format!(
                "input is {} bytes, at least {min_len} required",
                input.len()
            )));
        }

        Ok(Self {
            input,
            pos: 0,
            line: 0,
        })
    }

    /// Number of logical lines handed out so far (1-based index of the last one).
    #[must_use]
    pub fn line_number(&self) -> usize {
        self.line
    }

    /// Byte offset of the next unread physical line.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the next logical line with folding undone, or `None` at the end
    /// of the buffer.
    ///
    /// ## Errors
    /// Returns a malformed-property error on a bare LF or a bare CR. The
    /// reader is exhausted after an error.
    pub fn unfold_next(&mut self) -> CardResult<Option<String>> {
        let bytes = self.input.as_bytes();
        if self.pos >= bytes.len() {
            return Ok(None);
        }

        self.line += 1;
        let mut logical = String::new();
        let mut start = self.pos;
        let mut i = self.pos;

        while i < bytes.len() {
            match bytes[i] {
                b'\n' => return Err(self.fail("line feed without carriage return")),
                b'\r' if bytes.get(i + 1) != Some(&b'\n') => {
                    return Err(self.fail("carriage return without line feed"));
                }
                b'\r' => {
                    if matches!(bytes.get(i + 2), Some(b' ' | b'\t')) {
                        // Folded: keep the text, drop CRLF and the fold character.
                        logical.push_str(&self.input[start..i]);
                        i += 3;
                        start = i;
                        continue;
                    }

                    logical.push_str(&self.input[start..i + 2]);
                    self.pos = i + 2;
                    tracing::trace!(line = self.line, len = logical.len(), "Unfolded content line");
                    return Ok(Some(logical));
                }
                _ => i += 1,
            }
        }

        // Final line without a terminating CRLF.
        logical.push_str(&self.input[start..]);
        self.pos = bytes.len();
        Ok(Some(logical))
    }

    fn fail(&mut self, message: &str) -> CardError {
        tracing::warn!(line = self.line, message, "Malformed line ending");
        self.pos = self.input.len();
        CardError::invalid_property(self.line, message)
    }
}

impl Iterator for ContentLines<'_> {
    type Item = CardResult<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.unfold_next().transpose()
    }
}
