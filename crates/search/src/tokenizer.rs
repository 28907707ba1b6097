//! Tokenizer and word validation
//!
//! Documents, queries and stop-word lists are all split the same way:
//! on the ASCII space character, with empty tokens dropped. Tabs, newlines
//! and every other character below U+0020 are control characters and make
//! the containing word invalid.

use std::collections::BTreeSet;

/// Split text into space-delimited words
///
/// # Example
///
/// ```
/// use scout_search::tokenizer::split_into_words;
///
/// let words: Vec<&str> = split_into_words("  funny  pet ").collect();
/// assert_eq!(words, vec!["funny", "pet"]);
/// ```
pub fn split_into_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(' ').filter(|word| !word.is_empty())
}

/// True if `word` contains no control characters (U+0000 to U+001F)
pub fn is_valid_word(word: &str) -> bool {
    !word.chars().any(|c| c < ' ')
}

/// Collect strings into an ordered set, dropping empty ones
pub fn make_unique_non_empty_strings<I, S>(strings: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    strings
        .into_iter()
        .filter(|s| !s.as_ref().is_empty())
        .map(|s| s.as_ref().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_basic() {
        let words: Vec<&str> = split_into_words("white cat and fashionable collar").collect();
        assert_eq!(words, vec!["white", "cat", "and", "fashionable", "collar"]);
    }

    #[test]
    fn test_split_drops_empty_tokens() {
        let words: Vec<&str> = split_into_words("   cat    dog  ").collect();
        assert_eq!(words, vec!["cat", "dog"]);
    }

    #[test]
    fn test_split_empty() {
        assert_eq!(split_into_words("").count(), 0);
        assert_eq!(split_into_words("     ").count(), 0);
    }

    #[test]
    fn test_split_keeps_punctuation_and_minus() {
        let words: Vec<&str> = split_into_words("-cat dog, --x").collect();
        assert_eq!(words, vec!["-cat", "dog,", "--x"]);
    }

    #[test]
    fn test_split_tab_is_not_separator() {
        let words: Vec<&str> = split_into_words("cat\tdog").collect();
        assert_eq!(words, vec!["cat\tdog"]);
        assert!(!is_valid_word(words[0]));
    }

    #[test]
    fn test_is_valid_word() {
        assert!(is_valid_word("cat"));
        assert!(is_valid_word("кот"));
        assert!(is_valid_word(""));
        assert!(!is_valid_word("ca\u{12}t"));
        assert!(!is_valid_word("\u{0}"));
        assert!(!is_valid_word("line\n"));
        // U+007F (DEL) is outside the rejected range
        assert!(is_valid_word("del\u{7f}"));
    }

    #[test]
    fn test_make_unique_non_empty_strings() {
        let set = make_unique_non_empty_strings(["in", "", "the", "in"]);
        let items: Vec<&str> = set.iter().map(String::as_str).collect();
        assert_eq!(items, vec!["in", "the"]);
    }
}
