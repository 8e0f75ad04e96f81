use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::SummarizerConfig;

/// Sentence boundaries: any run of terminal punctuation.
///
/// No abbreviation or quotation handling, so `"e.g. this"` splits after `e`
/// and after `g`. Both fragments are then dropped or kept by length alone.
static SENTENCE_BOUNDARY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

/// Paragraph boundaries: a newline, optional whitespace, another newline.
static PARAGRAPH_BOUNDARY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").unwrap());

/// Output of segmenting a corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segments {
    /// Candidate sentences in document order.
    pub sentences: Vec<String>,
    /// Paragraphs in document order.
    pub paragraphs: Vec<String>,
}

/// Split a corpus into candidate sentences and paragraphs using the default thresholds.
pub fn segment(corpus: &str) -> Segments {
    segment_with_config(corpus, &SummarizerConfig::default())
}

/// Config-aware version of [`segment`].
pub(crate) fn segment_with_config(corpus: &str, config: &SummarizerConfig) -> Segments {
    let segments = Segments {
        sentences: split_kept(corpus, &SENTENCE_BOUNDARY_RE, config.min_sentence_chars),
        paragraphs: split_kept(corpus, &PARAGRAPH_BOUNDARY_RE, config.min_paragraph_chars),
    };
    tracing::debug!(
        sentences = segments.sentences.len(),
        paragraphs = segments.paragraphs.len(),
        "segmented corpus"
    );
    segments
}

/// Split `corpus` into candidate sentences (trimmed, longer than 20 chars).
pub fn split_sentences(corpus: &str) -> Vec<String> {
    split_kept(corpus, &SENTENCE_BOUNDARY_RE, SummarizerConfig::default().min_sentence_chars)
}

/// Split `corpus` into paragraphs (trimmed, longer than 50 chars).
pub fn split_paragraphs(corpus: &str) -> Vec<String> {
    split_kept(corpus, &PARAGRAPH_BOUNDARY_RE, SummarizerConfig::default().min_paragraph_chars)
}

fn split_kept(text: &str, boundary: &Regex, min_chars: usize) -> Vec<String> {
    boundary
        .split(text)
        .map(str::trim)
        .filter(|piece| piece.chars().count() > min_chars)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SummarizerConfigBuilder;

    #[test]
    fn test_split_sentences_on_all_terminators() {
        let text = "This is the very first sentence here. Is this the second sentence here? \
                    What an exciting third sentence this is!";
        let sentences = split_sentences(text);
        assert_eq!(
            sentences,
            vec![
                "This is the very first sentence here",
                "Is this the second sentence here",
                "What an exciting third sentence this is",
            ]
        );
    }

    #[test]
    fn test_split_sentences_drops_short_fragments() {
        // Exactly 20 characters is not enough; 21 is.
        let text = "abcdefghijklmnopqrst. abcdefghijklmnopqrstu. Short.";
        assert_eq!(split_sentences(text), vec!["abcdefghijklmnopqrstu"]);
    }

    #[test]
    fn test_split_sentences_collapses_punctuation_runs() {
        let text = "Wait, is this really happening?!... Yes it is happening right now.";
        let sentences = split_sentences(text);
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0], "Wait, is this really happening");
    }

    #[test]
    fn test_split_sentences_naive_abbreviations() {
        // The abbreviation splits the sentence; both halves are long enough to survive.
        let text = "The committee met with Dr. Smith about the quarterly budget review today.";
        let sentences = split_sentences(text);
        assert_eq!(
            sentences,
            vec![
                "The committee met with Dr",
                "Smith about the quarterly budget review today",
            ]
        );
        let text = "The committee met with the director, i.e. the person in charge of budgets.";
        let sentences = split_sentences(text);
        assert_eq!(
            sentences,
            vec![
                "The committee met with the director, i",
                "the person in charge of budgets",
            ]
        );
    }

    #[test]
    fn test_split_paragraphs() {
        let para = "This paragraph is comfortably longer than fifty characters in total.";
        let text = format!("{para}\n\nTiny one.\n   \n{para}");
        let paragraphs = split_paragraphs(&text);
        assert_eq!(paragraphs, vec![para, para]);
    }

    #[test]
    fn test_empty_corpus_yields_empty_segments() {
        assert_eq!(segment(""), Segments::default());
        assert_eq!(segment("   \n\n  "), Segments::default());
    }

    #[test]
    fn test_segment_with_custom_thresholds() {
        let config = SummarizerConfigBuilder::new()
            .min_sentence_chars(5)
            .min_paragraph_chars(5)
            .build()
            .unwrap();
        let segments = segment_with_config("Short one. Tiny two.\n\nNext block.", &config);
        assert_eq!(segments.sentences, vec!["Short one", "Tiny two", "Next block"]);
        assert_eq!(segments.paragraphs, vec!["Short one. Tiny two.", "Next block."]);
    }
}
