//! Text length and option count bounds.
//!
//! Over-long text is clipped to these lengths rather than rejected.

/// Longest survey title kept, in characters
pub const MAX_TITLE_CHARS: usize = 99;

/// Longest question text kept, in characters
pub const MAX_QUESTION_CHARS: usize = 199;

/// Longest option text kept, in characters
pub const MAX_OPTION_CHARS: usize = 49;

/// Fewest options a question may have
pub const MIN_OPTIONS: usize = 2;

/// Most options a question may have
pub const MAX_OPTIONS: usize = 5;

/// Stored in place of an option submitted as empty text
pub const EMPTY_OPTION_PLACEHOLDER: &str = "(empty option)";

/// Check whether `text` counts as empty (whitespace only counts)
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("  \t "));
        assert!(!is_blank(" a "));
    }

    #[test]
    fn test_placeholder_fits_option_limit() {
        assert!(EMPTY_OPTION_PLACEHOLDER.chars().count() <= MAX_OPTION_CHARS);
    }
}
