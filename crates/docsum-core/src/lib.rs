use std::fmt;

use thiserror::Error;

pub mod config;
pub mod config_file;
pub mod normalize;
pub mod render;
pub mod scoring;
pub mod segment;
pub mod summary;
pub mod topics;

pub use config::{LabeledPattern, ListOverride, SummarizerConfig, SummarizerConfigBuilder};
pub use render::render_markdown;
pub use scoring::Sentence;
pub use segment::Segments;
pub use summary::{DepthLabel, StructureLabel, SummaryResult};
pub use topics::TopicCount;

/// Shown instead of a summary when the documents hold too little text.
pub const INSUFFICIENT_CONTENT_NOTICE: &str =
    "The uploaded documents don't contain enough text to generate a meaningful summary.";

/// Shown instead of a summary when the analysis itself fails.
pub const ANALYSIS_FAILED_NOTICE: &str =
    "An error occurred while analyzing the documents, so no summary could be generated.";

#[derive(Error, Debug)]
pub enum SummarizeError {
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("failed to parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// One input document: already-extracted plain text plus a caller-chosen identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub identifier: String,
    pub text: String,
}

impl Document {
    pub fn new(identifier: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            text: text.into(),
        }
    }
}

/// Concatenate document texts with a blank line between each.
pub fn join_documents(documents: &[Document]) -> String {
    documents
        .iter()
        .map(|d| d.text.as_str())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Outcome of summarizing a set of documents.
///
/// Either a complete summary or one of two notices; partial summaries are
/// never produced.
#[derive(Debug)]
pub enum Analysis {
    Summary(SummaryResult),
    InsufficientContent,
    Failed(SummarizeError),
}

impl Analysis {
    pub fn summary(&self) -> Option<&SummaryResult> {
        match self {
            Analysis::Summary(s) => Some(s),
            _ => None,
        }
    }

    /// The user-facing notice, if this is not a summary.
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            Analysis::Summary(_) => None,
            Analysis::InsufficientContent => Some(INSUFFICIENT_CONTENT_NOTICE),
            Analysis::Failed(_) => Some(ANALYSIS_FAILED_NOTICE),
        }
    }

    /// Markdown summary, or the notice text.
    pub fn render(&self) -> String {
        match self {
            Analysis::Summary(s) => render_markdown(s),
            other => other.notice().unwrap_or_default().to_string(),
        }
    }
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Extractive summarizer over plain document text.
///
/// Pipeline:
/// 1. Join document texts with blank lines (optionally normalizing PDF artifacts)
/// 2. Short-circuit if the corpus is too short to analyze
/// 3. Segment into candidate sentences and paragraphs
/// 4. Score candidates and select key points
/// 5. Rank topic categories over the whole corpus
/// 6. Assemble statistics, key points, topics and excerpts
#[derive(Debug, Clone, Default)]
pub struct Summarizer {
    config: SummarizerConfig,
}

impl Summarizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SummarizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Summarize `documents`, converting any failure into [`Analysis::Failed`].
    pub fn analyze(&self, documents: &[Document]) -> Analysis {
        match self.try_analyze(documents) {
            Ok(Some(summary)) => Analysis::Summary(summary),
            Ok(None) => Analysis::InsufficientContent,
            Err(e) => {
                tracing::warn!(error = %e, "summarization failed");
                Analysis::Failed(e)
            }
        }
    }

    /// Summarize a single block of text.
    pub fn analyze_text(&self, text: &str) -> Analysis {
        self.analyze(&[Document::new("text", text)])
    }

    /// Summarize `documents`; `Ok(None)` means the corpus was too short.
    pub fn try_analyze(
        &self,
        documents: &[Document],
    ) -> Result<Option<SummaryResult>, SummarizeError> {
        self.config.validate()?;
        let corpus = self.corpus(documents);

        if summary::is_insufficient(&corpus, &self.config) {
            tracing::debug!(chars = corpus.trim().chars().count(), "corpus too short to summarize");
            return Ok(None);
        }

        let segments = segment::segment_with_config(&corpus, &self.config);
        if segments.paragraphs.is_empty() {
            tracing::debug!("no paragraph above the length threshold");
        }

        let scored = scoring::score_sentences_with_config(&segments.sentences, &self.config);
        let key_points = scoring::select_key_points(&scored, &self.config);
        let topics = topics::classify_with_config(&corpus, &self.config);

        let summary = summary::assemble(
            documents.len(),
            &corpus,
            &segments.sentences,
            key_points,
            topics,
            &self.config,
        );
        tracing::info!(
            documents = summary.document_count,
            words = summary.word_count,
            key_points = summary.key_points.len(),
            topics = summary.topics.len(),
            "summary complete"
        );
        Ok(Some(summary))
    }

    /// Match counts for every topic category, including those below the floor.
    pub fn topic_report(&self, documents: &[Document]) -> Vec<TopicCount> {
        topics::classify_counts(&self.corpus(documents), &self.config)
    }

    fn corpus(&self, documents: &[Document]) -> String {
        let joined = join_documents(documents);
        if self.config.normalize_text {
            normalize::normalize(&joined)
        } else {
            joined
        }
    }
}

/// Summarize `documents` with the default configuration.
pub fn summarize(documents: &[Document]) -> Analysis {
    Summarizer::new().analyze(documents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_documents_uses_blank_lines() {
        let docs = vec![Document::new("a.pdf", "First."), Document::new("b.pdf", "Second.")];
        assert_eq!(join_documents(&docs), "First.\n\nSecond.");
        assert_eq!(join_documents(&[]), "");
    }

    #[test]
    fn test_short_input_gives_notice() {
        let analysis = Summarizer::new().analyze_text("Hi.");
        assert!(matches!(analysis, Analysis::InsufficientContent));
        assert_eq!(analysis.render(), INSUFFICIENT_CONTENT_NOTICE);
    }

    #[test]
    fn test_invalid_config_becomes_failure_notice() {
        let config = SummarizerConfigBuilder::new()
            .words_per_page(0)
            .build()
            .unwrap();
        let analysis = Summarizer::with_config(config).analyze_text(&"word ".repeat(100));
        assert!(matches!(analysis, Analysis::Failed(SummarizeError::InvalidConfig(_))));
        assert_eq!(analysis.notice(), Some(ANALYSIS_FAILED_NOTICE));
        assert_eq!(analysis.to_string(), ANALYSIS_FAILED_NOTICE);
    }

    #[test]
    fn test_normalization_is_opt_in() {
        let text = "The eﬃciency of the pipeline was measured across many documents and \
                    the summa-\nrization quality improved considerably over the baseline.";
        let plain = Summarizer::new().analyze_text(text);
        let intro = plain.summary().and_then(|s| s.introduction.clone()).unwrap();
        assert!(intro.contains("eﬃciency"));

        let config = SummarizerConfigBuilder::new()
            .normalize_text(true)
            .build()
            .unwrap();
        let normalized = Summarizer::with_config(config).analyze_text(text);
        let intro = normalized
            .summary()
            .and_then(|s| s.introduction.clone())
            .unwrap();
        assert!(intro.contains("efficiency"));
        assert!(intro.contains("summarization"));
    }

    #[test]
    fn test_extreme_position_bonus_still_summarizes() {
        let config = SummarizerConfigBuilder::new()
            .position_bonus(u32::MAX)
            .build()
            .unwrap();
        let text = "The important research study found key results in the data. \
                    A second sentence follows with plain wording throughout. \
                    The last sentence closes the short sample document here.";
        let analysis = Summarizer::with_config(config).analyze_text(text);
        let summary = analysis.summary().unwrap();
        assert_eq!(
            summary.key_points,
            vec!["The important research study found key results in the data"]
        );
    }

    #[test]
    fn test_topic_report_applies_normalization() {
        let text = "The work-\nflow and the proto-\ncol were reviewed against the guide-\nline \
                    before the team signed off on the final version of the plan.";
        let count = |summarizer: &Summarizer| {
            summarizer
                .topic_report(&[Document::new("doc", text)])
                .into_iter()
                .find(|c| c.label == "Process & Procedures")
                .map(|c| c.matches)
                .unwrap()
        };
        assert_eq!(count(&Summarizer::new()), 0);

        let config = SummarizerConfigBuilder::new()
            .normalize_text(true)
            .build()
            .unwrap();
        assert_eq!(count(&Summarizer::with_config(config)), 3);
    }

    #[test]
    fn test_summarizer_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Summarizer>();
        assert_send_sync::<SummaryResult>();
    }
}
