//! Cleanup of artifacts left behind by PDF text extraction.
//!
//! Applied only when [`SummarizerConfig::normalize_text`](crate::SummarizerConfig::normalize_text)
//! is enabled, so the default pipeline sees the caller's text unchanged.

use once_cell::sync::Lazy;
use regex::Regex;

/// Replace typographic ligatures with their plain-letter spelling.
pub fn expand_ligatures(text: &str) -> String {
    text.replace('\u{FB00}', "ff")
        .replace('\u{FB01}', "fi")
        .replace('\u{FB02}', "fl")
        .replace('\u{FB03}', "ffi")
        .replace('\u{FB04}', "ffl")
        .replace(['\u{FB05}', '\u{FB06}'], "st")
}

/// Rejoin words split by a hyphen at a line break: `"summa-\nrization"` → `"summarization"`.
///
/// Only a hyphen directly followed by a newline between two lowercase letters
/// is removed. Inline compounds such as `"data-driven"` are left alone.
pub fn join_line_break_hyphens(text: &str) -> String {
    static RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\p{Ll})-[ \t]*\r?\n[ \t]*(\p{Ll})").unwrap());
    RE.replace_all(text, "$1$2").into_owned()
}

/// Full normalization pass applied to the corpus before segmentation.
pub fn normalize(text: &str) -> String {
    join_line_break_hyphens(&expand_ligatures(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_ligatures() {
        assert_eq!(expand_ligatures("ﬁnding ﬂow"), "finding flow");
        assert_eq!(expand_ligatures("eﬃcient oﬄine"), "efficient offline");
        assert_eq!(expand_ligatures("plain text"), "plain text");
    }

    #[test]
    fn test_join_line_break_hyphens() {
        assert_eq!(join_line_break_hyphens("summa-\nrization"), "summarization");
        assert_eq!(join_line_break_hyphens("classi-  \r\n  fication"), "classification");
    }

    #[test]
    fn test_inline_hyphens_survive() {
        assert_eq!(join_line_break_hyphens("data-driven"), "data-driven");
        // Capitalized continuation is likely a new sentence or a name
        assert_eq!(join_line_break_hyphens("end-\nNew"), "end-\nNew");
    }

    #[test]
    fn test_normalize_combines_passes() {
        assert_eq!(normalize("ef-\nﬁcient"), "efficient");
    }
}
