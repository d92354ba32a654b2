//! ASCII text primitives shared by every component that stores raw strings.
//!
//! Property names, parameter values such as `VALUE=text` and the
//! `BEGIN`/`END` markers are all matched without regard to ASCII case.
//! Non-ASCII characters compare byte-for-byte.

use std::cmp::Ordering;

/// Returns whether two strings are equal ignoring ASCII case.
#[must_use]
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// Orders two strings as if both were lowercased first.
#[must_use]
pub fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|byte| byte.to_ascii_lowercase())
        .cmp(b.bytes().map(|byte| byte.to_ascii_lowercase()))
}

/// Compares two raw value strings exactly.
#[must_use]
pub fn compare_values(a: &str, b: &str) -> Ordering {
    a.cmp(b)
}

/// Strips one trailing CRLF, or a lone trailing LF, from a logical line.
#[must_use]
pub fn trim_line_end(line: &str) -> &str {
    line.strip_suffix("\r\n")
        .or_else(|| line.strip_suffix('\n'))
        .unwrap_or(line)
}

/// Returns the prefix of `s` that precedes the first CR or LF.
#[must_use]
pub fn until_line_break(s: &str) -> &str {
    s.find(['\r', '\n']).map_or(s, |end| &s[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eq_ignores_ascii_case() {
        assert!(eq_ignore_case("VCARD", "vCard"));
        assert!(!eq_ignore_case("VCARD", "VCARDS"));
    }

    #[test]
    fn cmp_matches_lowercased_order() {
        assert_eq!(cmp_ignore_case("abc", "ABC"), Ordering::Equal);
        assert_eq!(cmp_ignore_case("ABD", "abc"), Ordering::Greater);
        assert_eq!(cmp_ignore_case("ab", "ABC"), Ordering::Less);
    }

    #[test]
    fn compare_values_is_case_sensitive() {
        assert_eq!(compare_values("a", "A"), Ordering::Greater);
        assert_eq!(compare_values("same", "same"), Ordering::Equal);
    }

    #[test]
    fn trims_only_the_line_terminator() {
        assert_eq!(trim_line_end("FN:Jane\r\n"), "FN:Jane");
        assert_eq!(trim_line_end("FN:Jane"), "FN:Jane");
        assert_eq!(trim_line_end("FN:Jane\r\n\r\n"), "FN:Jane\r\n");
    }

    #[test]
    fn stops_at_first_line_break() {
        assert_eq!(until_line_break("a;b\r\n"), "a;b");
        assert_eq!(until_line_break("no break"), "no break");
        assert_eq!(until_line_break("\r\n"), "");
    }
}
