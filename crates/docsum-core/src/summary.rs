use std::fmt;

use serde::Serialize;

use crate::config::SummarizerConfig;
use crate::scoring::Sentence;
use crate::topics::TopicCount;

/// How much material the corpus holds, judged by word count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DepthLabel {
    Concise,
    Detailed,
    Comprehensive,
}

impl fmt::Display for DepthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DepthLabel::Concise => "Concise",
            DepthLabel::Detailed => "Detailed",
            DepthLabel::Comprehensive => "Comprehensive",
        };
        f.write_str(s)
    }
}

/// Whether the corpus centers on a few topics or spans several.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StructureLabel {
    Focused,
    #[serde(rename = "Multi-topic")]
    MultiTopic,
}

impl fmt::Display for StructureLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StructureLabel::Focused => "Focused",
            StructureLabel::MultiTopic => "Multi-topic",
        };
        f.write_str(s)
    }
}

/// Structured summary of one or more documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryResult {
    pub document_count: usize,
    pub word_count: usize,
    pub page_estimate: usize,
    /// Topic labels, most frequent first.
    pub topics: Vec<String>,
    /// Selected sentences in document order.
    pub key_points: Vec<String>,
    pub introduction: Option<String>,
    pub conclusion: Option<String>,
    pub depth: DepthLabel,
    pub structure: StructureLabel,
}

/// Count whitespace-delimited tokens.
pub fn word_count(corpus: &str) -> usize {
    corpus.split_whitespace().count()
}

/// Pages the corpus would fill at `words_per_page`, rounded up.
pub fn page_estimate(word_count: usize, words_per_page: usize) -> usize {
    word_count.div_ceil(words_per_page)
}

pub fn depth_label(word_count: usize, config: &SummarizerConfig) -> DepthLabel {
    if word_count > config.comprehensive_words {
        DepthLabel::Comprehensive
    } else if word_count > config.detailed_words {
        DepthLabel::Detailed
    } else {
        DepthLabel::Concise
    }
}

pub fn structure_label(topic_count: usize, config: &SummarizerConfig) -> StructureLabel {
    if topic_count > config.multi_topic_threshold {
        StructureLabel::MultiTopic
    } else {
        StructureLabel::Focused
    }
}

/// Whether the trimmed corpus is too short to analyze.
pub fn is_insufficient(corpus: &str, config: &SummarizerConfig) -> bool {
    corpus.trim().chars().count() < config.min_corpus_chars
}

/// Join sentences with `". "`, keeping the result only if longer than `min_chars`.
fn excerpt(sentences: &[String], min_chars: usize) -> Option<String> {
    let joined = sentences.join(". ");
    (joined.chars().count() > min_chars).then_some(joined)
}

/// Merge corpus statistics, key points and topics into a [`SummaryResult`].
///
/// `candidates` are the unscored candidate sentences in document order; the
/// introduction and conclusion are drawn from its head and tail.
pub(crate) fn assemble(
    document_count: usize,
    corpus: &str,
    candidates: &[String],
    key_points: Vec<Sentence>,
    topics: Vec<TopicCount>,
    config: &SummarizerConfig,
) -> SummaryResult {
    let word_count = word_count(corpus);

    let head = &candidates[..config.introduction_sentences.min(candidates.len())];
    let tail = &candidates[candidates.len().saturating_sub(config.conclusion_sentences)..];
    let introduction = excerpt(head, config.min_excerpt_chars);
    let conclusion =
        excerpt(tail, config.min_excerpt_chars).filter(|c| introduction.as_ref() != Some(c));

    SummaryResult {
        document_count,
        word_count,
        page_estimate: page_estimate(word_count, config.words_per_page),
        structure: structure_label(topics.len(), config),
        topics: topics.into_iter().map(|t| t.label).collect(),
        key_points: key_points.into_iter().map(Sentence::into_text).collect(),
        introduction,
        conclusion,
        depth: depth_label(word_count, config),
    }
}
