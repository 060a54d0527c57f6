//! Word counting and the submission limit.

/// Submissions above this many words are refused client-side.
pub const WORD_LIMIT: usize = 1000;

/// Number of maximal non-empty runs of non-whitespace in `text`.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordCount {
    pub count: usize,
    pub limit: usize,
}

impl WordCount {
    pub fn of(text: &str) -> Self {
        Self {
            count: count_words(text),
            limit: WORD_LIMIT,
        }
    }

    pub fn exceeds_limit(&self) -> bool {
        self.count > self.limit
    }

    pub fn label(&self) -> String {
        format!("{}/{} words", self.count, self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_words_ignores_surrounding_and_repeated_space() {
        assert_eq!(count_words("  a  b c "), 3);
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words(" \n\t "), 0);
        assert_eq!(count_words("one"), 1);
    }

    #[test]
    fn test_count_words_splits_on_newlines_and_tabs() {
        assert_eq!(count_words("first line\nsecond\tline\r\nthird"), 5);
    }

    #[test]
    fn test_count_words_unicode_whitespace() {
        // U+00A0 no-break space and U+3000 ideographic space
        assert_eq!(count_words("a\u{00A0}b\u{3000}c"), 3);
    }

    #[test]
    fn test_label_format() {
        assert_eq!(WordCount::of("hello there").label(), "2/1000 words");
    }

    #[test]
    fn test_limit_boundary() {
        let at_limit = "w ".repeat(WORD_LIMIT);
        let over_limit = "w ".repeat(WORD_LIMIT + 1);
        assert!(!WordCount::of(&at_limit).exceeds_limit());
        assert!(WordCount::of(&over_limit).exceeds_limit());
    }
}
