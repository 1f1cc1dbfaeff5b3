//! Shared utility functions.

/// Clip a string to at most `max_chars` characters.
///
/// Counts characters rather than bytes, so the cut never splits a UTF-8
/// sequence. Returns a sub-slice of the original string.
pub fn clip_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_ascii() {
        assert_eq!(clip_chars("hello world", 5), "hello");
    }

    #[test]
    fn clip_no_op_when_short() {
        assert_eq!(clip_chars("hi", 10), "hi");
        assert_eq!(clip_chars("exact", 5), "exact");
    }

    #[test]
    fn clip_multibyte_counts_chars() {
        // 3 bytes per character, 3 characters
        let s = "あのね";
        assert_eq!(clip_chars(s, 1), "あ");
        assert_eq!(clip_chars(s, 2), "あの");
        assert_eq!(clip_chars(s, 3), "あのね");
    }

    #[test]
    fn clip_empty() {
        assert_eq!(clip_chars("", 10), "");
        assert_eq!(clip_chars("abc", 0), "");
    }
}
