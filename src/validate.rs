//! Input validation for words and definitions.
//!
//! # Responsibilities
//! - Decide whether a candidate word is acceptable as a dictionary key
//! - Decide whether a candidate definition is acceptable
//!
//! # Design Decisions
//! - Both predicates are pure and total; callers trim before storing
//! - Words are restricted to a letter-led ASCII alphabet so they stay
//!   usable as case-insensitive keys
//! - Definitions are opaque text, only emptiness is rejected

/// Returns true if `s` trims to a word of the form "ASCII letter, then
/// zero or more ASCII letters / whitespace / hyphen / apostrophe".
///
/// Examples: "book", "ice cream", "mother-in-law", "O'Reilly".
/// No numerals or other punctuation permitted.
pub fn is_valid_word(s: &str) -> bool {
    let trimmed = s.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphabetic() || c.is_ascii_whitespace() || c == '-' || c == '\'')
}

/// Returns true if `s` trims to a non-empty string. Looser check than
/// the word: punctuation, numbers, anything goes, but not empty.
pub fn is_valid_definition(s: &str) -> bool {
    !s.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_words() {
        assert!(is_valid_word("book"));
        assert!(is_valid_word("ice cream"));
        assert!(is_valid_word("mother-in-law"));
        assert!(is_valid_word("O'Reilly"));
        assert!(is_valid_word("  padded  ")); // trimmed before matching
    }

    #[test]
    fn test_invalid_words() {
        assert!(!is_valid_word(""));
        assert!(!is_valid_word("   "));
        assert!(!is_valid_word("123abc"));
        assert!(!is_valid_word("-leading-hyphen"));
        assert!(!is_valid_word("'leading-apostrophe"));
        assert!(!is_valid_word("book!"));
        assert!(!is_valid_word("book2"));
        assert!(!is_valid_word("café")); // non-ASCII letter
    }

    #[test]
    fn test_valid_definitions() {
        assert!(is_valid_definition("A bound volume"));
        assert!(is_valid_definition("!?;")); // pure punctuation is fine
        assert!(is_valid_definition("42"));
    }

    #[test]
    fn test_invalid_definitions() {
        assert!(!is_valid_definition(""));
        assert!(!is_valid_definition("   "));
        assert!(!is_valid_definition("\t\n"));
    }
}
