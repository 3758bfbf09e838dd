//! Value patterns for the shape rules.

use std::sync::LazyLock;

use regex::Regex;

/// Local part, `@`, domain with at least one dot; no whitespace or extra `@`.
pub(crate) static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex"));

/// 10-20 characters of ASCII digits, spaces, `+`, `-` and parentheses.
pub(crate) static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9\s+\-()]{10,20}$").expect("Invalid phone regex"));

/// 2-50 Latin letters (accented Latin-1 included), spaces, hyphens, apostrophes.
pub(crate) static PERSON_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-ZÀ-ÿ\s\-']{2,50}$").expect("Invalid person name regex")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shape() {
        assert!(EMAIL.is_match("a@b.co"));
        assert!(EMAIL.is_match("max.mustermann@example.de"));
        assert!(!EMAIL.is_match("a@@b"));
        assert!(!EMAIL.is_match("ab.com"));
        assert!(!EMAIL.is_match("a@b"));
        assert!(!EMAIL.is_match("a b@c.de"));
    }

    #[test]
    fn test_phone_shape() {
        assert!(PHONE.is_match("+49 (30) 123-4567"));
        assert!(PHONE.is_match("0301234567"));
        assert!(!PHONE.is_match("030123456"));
        assert!(!PHONE.is_match("030-CALL-NOW"));
        assert!(!PHONE.is_match("012345678901234567890"));
        // Arabic-Indic digits
        assert!(!PHONE.is_match("٠١٢٣٤٥٦٧٨٩"));
    }

    #[test]
    fn test_person_name_shape() {
        assert!(PERSON_NAME.is_match("Anna-Marie O'Brien"));
        assert!(PERSON_NAME.is_match("Jürgen Müller"));
        assert!(!PERSON_NAME.is_match("R2D2"));
        assert!(!PERSON_NAME.is_match("A"));
        assert!(!PERSON_NAME.is_match(&"a".repeat(51)));
    }
}
