//! vCard line folding.

use vcardio_core::constants::DEFAULT_FOLD_WIDTH;

/// Folds a logical line (without its CRLF) into physical lines of at most
/// `width` octets.
///
/// Continuation lines start with a single space that counts toward `width`.
/// Folds only at UTF-8 character boundaries; a character wider than the
/// remaining room always gets a line of its own.
#[must_use]
pub fn fold_line(line: &str, width: usize) -> String {
    if line.len() <= width {
        return line.to_string();
    }

    let mut result = String::with_capacity(line.len() + line.len() / width.max(1) * 3);
    let mut current_len = 0;
    let mut segment_start = 0;

    for c in line.chars() {
        let char_len = c.len_utf8();

        if current_len > segment_start && current_len + char_len > width {
            result.push_str("\r\n ");
            current_len = 1; // The space
            segment_start = 1;
        }

        result.push(c);
        current_len += char_len;
    }

    result
}

/// Folds at the RFC 6350 limit of 75 octets.
#[must_use]
pub fn fold_default(line: &str) -> String {
    fold_line(line, DEFAULT_FOLD_WIDTH)
}
