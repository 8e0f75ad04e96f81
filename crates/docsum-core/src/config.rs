use regex::{Regex, RegexBuilder};

use crate::SummarizeError;

/// Candidate sentences must be longer than this many characters (trimmed).
pub const DEFAULT_MIN_SENTENCE_CHARS: usize = 20;
/// Paragraphs must be longer than this many characters (trimmed).
pub const DEFAULT_MIN_PARAGRAPH_CHARS: usize = 50;
/// Corpora shorter than this many characters (trimmed) are not analyzed.
pub const DEFAULT_MIN_CORPUS_CHARS: usize = 100;
/// Hard cap on the number of key points.
pub const DEFAULT_MAX_KEY_POINTS: usize = 8;
/// Key points are capped at `ceil(ratio * candidate_count)`.
pub const DEFAULT_KEY_POINT_RATIO: f64 = 0.15;
/// Leading/trailing share of the candidate sequence that earns the position bonus.
pub const DEFAULT_POSITION_FRACTION: f64 = 0.1;
pub const DEFAULT_POSITION_BONUS: u32 = 2;
pub const DEFAULT_LENGTH_BONUS_MIN_WORDS: usize = 10;
pub const DEFAULT_LENGTH_BONUS_MAX_WORDS: usize = 30;
/// More than this many capitalized terms earns the proper-noun bonus.
pub const DEFAULT_PROPER_NOUN_THRESHOLD: usize = 2;
pub const DEFAULT_MIN_TOPIC_MATCHES: usize = 3;
pub const DEFAULT_MAX_TOPICS: usize = 4;
pub const DEFAULT_WORDS_PER_PAGE: usize = 250;
pub const DEFAULT_DETAILED_WORDS: usize = 500;
pub const DEFAULT_COMPREHENSIVE_WORDS: usize = 1000;
/// More than this many topics makes a summary multi-topic.
pub const DEFAULT_MULTI_TOPIC_THRESHOLD: usize = 2;
pub const DEFAULT_INTRODUCTION_SENTENCES: usize = 3;
pub const DEFAULT_CONCLUSION_SENTENCES: usize = 2;
/// Introduction/conclusion excerpts must be longer than this many characters.
pub const DEFAULT_MIN_EXCERPT_CHARS: usize = 20;

/// A named, compiled pattern: one keyword class or one topic category.
#[derive(Debug, Clone)]
pub struct LabeledPattern {
    pub label: String,
    pub pattern: Regex,
}

impl LabeledPattern {
    /// Compile `pattern` case-insensitively under `label`.
    pub fn new(label: &str, pattern: &str) -> Result<Self, regex::Error> {
        let pattern = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        Ok(Self {
            label: label.to_string(),
            pattern,
        })
    }

    /// Number of non-overlapping matches in `text`.
    pub fn count_matches(&self, text: &str) -> usize {
        self.pattern.find_iter(text).count()
    }
}

/// Controls how a list of patterns is overridden from its defaults.
#[derive(Debug, Clone, Default)]
pub enum ListOverride<T> {
    /// Use the built-in defaults.
    #[default]
    Default,
    /// Completely replace the defaults with these values.
    Replace(Vec<T>),
    /// Append these values to the defaults.
    Extend(Vec<T>),
}

impl<T: Clone> ListOverride<T> {
    /// Resolve this override against the given defaults.
    pub fn resolve(&self, defaults: &[T]) -> Vec<T> {
        match self {
            ListOverride::Default => defaults.to_vec(),
            ListOverride::Replace(v) => v.clone(),
            ListOverride::Extend(v) => {
                let mut result = defaults.to_vec();
                result.extend(v.iter().cloned());
                result
            }
        }
    }
}

/// Configuration for the summarization pipeline.
///
/// Every threshold defaults to the matching `DEFAULT_*` constant. Use
/// [`SummarizerConfigBuilder`] to override them or to supply keyword and
/// topic patterns as strings.
#[derive(Debug, Clone)]
pub struct SummarizerConfig {
    // ── segment.rs ──
    pub(crate) min_sentence_chars: usize,
    pub(crate) min_paragraph_chars: usize,
    /// Expand ligatures and rejoin hyphenated line breaks before segmenting.
    pub(crate) normalize_text: bool,

    // ── scoring.rs ──
    pub(crate) max_key_points: usize,
    pub(crate) key_point_ratio: f64,
    pub(crate) position_fraction: f64,
    pub(crate) position_bonus: u32,
    pub(crate) length_bonus_words: (usize, usize),
    pub(crate) proper_noun_threshold: usize,
    pub(crate) keyword_classes: ListOverride<LabeledPattern>,

    // ── topics.rs ──
    pub(crate) min_topic_matches: usize,
    pub(crate) max_topics: usize,
    pub(crate) topics: ListOverride<LabeledPattern>,

    // ── summary.rs ──
    pub(crate) min_corpus_chars: usize,
    pub(crate) words_per_page: usize,
    pub(crate) detailed_words: usize,
    pub(crate) comprehensive_words: usize,
    pub(crate) multi_topic_threshold: usize,
    pub(crate) introduction_sentences: usize,
    pub(crate) conclusion_sentences: usize,
    pub(crate) min_excerpt_chars: usize,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            min_sentence_chars: DEFAULT_MIN_SENTENCE_CHARS,
            min_paragraph_chars: DEFAULT_MIN_PARAGRAPH_CHARS,
            normalize_text: false,
            max_key_points: DEFAULT_MAX_KEY_POINTS,
            key_point_ratio: DEFAULT_KEY_POINT_RATIO,
            position_fraction: DEFAULT_POSITION_FRACTION,
            position_bonus: DEFAULT_POSITION_BONUS,
            length_bonus_words: (DEFAULT_LENGTH_BONUS_MIN_WORDS, DEFAULT_LENGTH_BONUS_MAX_WORDS),
            proper_noun_threshold: DEFAULT_PROPER_NOUN_THRESHOLD,
            keyword_classes: ListOverride::Default,
            min_topic_matches: DEFAULT_MIN_TOPIC_MATCHES,
            max_topics: DEFAULT_MAX_TOPICS,
            topics: ListOverride::Default,
            min_corpus_chars: DEFAULT_MIN_CORPUS_CHARS,
            words_per_page: DEFAULT_WORDS_PER_PAGE,
            detailed_words: DEFAULT_DETAILED_WORDS,
            comprehensive_words: DEFAULT_COMPREHENSIVE_WORDS,
            multi_topic_threshold: DEFAULT_MULTI_TOPIC_THRESHOLD,
            introduction_sentences: DEFAULT_INTRODUCTION_SENTENCES,
            conclusion_sentences: DEFAULT_CONCLUSION_SENTENCES,
            min_excerpt_chars: DEFAULT_MIN_EXCERPT_CHARS,
        }
    }
}

impl SummarizerConfig {
    pub fn min_topic_matches(&self) -> usize {
        self.min_topic_matches
    }

    pub fn max_topics(&self) -> usize {
        self.max_topics
    }

    /// Check the numeric settings for values the pipeline cannot work with.
    pub fn validate(&self) -> Result<(), SummarizeError> {
        if !(self.key_point_ratio > 0.0 && self.key_point_ratio <= 1.0) {
            return Err(SummarizeError::InvalidConfig(format!(
                "key_point_ratio must be in (0, 1], got {}",
                self.key_point_ratio
            )));
        }
        if !(0.0..=0.5).contains(&self.position_fraction) {
            return Err(SummarizeError::InvalidConfig(format!(
                "position_fraction must be in [0, 0.5], got {}",
                self.position_fraction
            )));
        }
        if self.words_per_page == 0 {
            return Err(SummarizeError::InvalidConfig(
                "words_per_page must be greater than zero".to_string(),
            ));
        }
        let (min_words, max_words) = self.length_bonus_words;
        if min_words > max_words {
            return Err(SummarizeError::InvalidConfig(format!(
                "length bonus range is empty: {min_words}..={max_words}"
            )));
        }
        if self.detailed_words > self.comprehensive_words {
            return Err(SummarizeError::InvalidConfig(format!(
                "detailed_words ({}) exceeds comprehensive_words ({})",
                self.detailed_words, self.comprehensive_words
            )));
        }
        Ok(())
    }
}

/// Builder for [`SummarizerConfig`].
///
/// Accepts `(label, pattern)` string pairs that are compiled in
/// [`build()`](Self::build). Fails fast with `regex::Error` if any pattern is
/// invalid. Numeric settings are checked later by
/// [`SummarizerConfig::validate`].
#[derive(Debug, Clone, Default)]
pub struct SummarizerConfigBuilder {
    min_sentence_chars: Option<usize>,
    min_paragraph_chars: Option<usize>,
    normalize_text: Option<bool>,
    max_key_points: Option<usize>,
    key_point_ratio: Option<f64>,
    position_fraction: Option<f64>,
    position_bonus: Option<u32>,
    length_bonus_words: Option<(usize, usize)>,
    proper_noun_threshold: Option<usize>,
    keyword_classes: PatternListBuilder,
    min_topic_matches: Option<usize>,
    max_topics: Option<usize>,
    topics: PatternListBuilder,
    min_corpus_chars: Option<usize>,
    words_per_page: Option<usize>,
    detailed_words: Option<usize>,
    comprehensive_words: Option<usize>,
    multi_topic_threshold: Option<usize>,
    introduction_sentences: Option<usize>,
    conclusion_sentences: Option<usize>,
    min_excerpt_chars: Option<usize>,
}

/// Uncompiled `(label, pattern)` list override.
#[derive(Debug, Clone, Default)]
enum PatternListBuilder {
    #[default]
    Default,
    Replace(Vec<(String, String)>),
    Extend(Vec<(String, String)>),
}

impl PatternListBuilder {
    fn push(&mut self, label: String, pattern: String) {
        match self {
            PatternListBuilder::Extend(v) => v.push((label, pattern)),
            _ => *self = PatternListBuilder::Extend(vec![(label, pattern)]),
        }
    }

    fn compile(self) -> Result<ListOverride<LabeledPattern>, regex::Error> {
        let compile_all = |pairs: Vec<(String, String)>| -> Result<Vec<_>, regex::Error> {
            pairs
                .iter()
                .map(|(label, pattern)| LabeledPattern::new(label, pattern))
                .collect()
        };
        match self {
            PatternListBuilder::Default => Ok(ListOverride::Default),
            PatternListBuilder::Replace(pairs) => Ok(ListOverride::Replace(compile_all(pairs)?)),
            PatternListBuilder::Extend(pairs) => Ok(ListOverride::Extend(compile_all(pairs)?)),
        }
    }
}

impl SummarizerConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Segmentation ──

    pub fn min_sentence_chars(mut self, n: usize) -> Self {
        self.min_sentence_chars = Some(n);
        self
    }

    pub fn min_paragraph_chars(mut self, n: usize) -> Self {
        self.min_paragraph_chars = Some(n);
        self
    }

    pub fn normalize_text(mut self, enabled: bool) -> Self {
        self.normalize_text = Some(enabled);
        self
    }

    // ── Scoring ──

    pub fn max_key_points(mut self, n: usize) -> Self {
        self.max_key_points = Some(n);
        self
    }

    pub fn key_point_ratio(mut self, ratio: f64) -> Self {
        self.key_point_ratio = Some(ratio);
        self
    }

    pub fn position_fraction(mut self, fraction: f64) -> Self {
        self.position_fraction = Some(fraction);
        self
    }

    pub fn position_bonus(mut self, bonus: u32) -> Self {
        self.position_bonus = Some(bonus);
        self
    }

    pub fn length_bonus_words(mut self, min: usize, max: usize) -> Self {
        self.length_bonus_words = Some((min, max));
        self
    }

    pub fn proper_noun_threshold(mut self, n: usize) -> Self {
        self.proper_noun_threshold = Some(n);
        self
    }

    pub fn set_keyword_classes(mut self, classes: Vec<(String, String)>) -> Self {
        self.keyword_classes = PatternListBuilder::Replace(classes);
        self
    }

    pub fn add_keyword_class(mut self, label: &str, pattern: &str) -> Self {
        self.keyword_classes
            .push(label.to_string(), pattern.to_string());
        self
    }

    // ── Topics ──

    pub fn min_topic_matches(mut self, n: usize) -> Self {
        self.min_topic_matches = Some(n);
        self
    }

    pub fn max_topics(mut self, n: usize) -> Self {
        self.max_topics = Some(n);
        self
    }

    pub fn set_topics(mut self, topics: Vec<(String, String)>) -> Self {
        self.topics = PatternListBuilder::Replace(topics);
        self
    }

    pub fn add_topic(mut self, label: &str, pattern: &str) -> Self {
        self.topics.push(label.to_string(), pattern.to_string());
        self
    }

    // ── Assembly ──

    pub fn min_corpus_chars(mut self, n: usize) -> Self {
        self.min_corpus_chars = Some(n);
        self
    }

    pub fn words_per_page(mut self, n: usize) -> Self {
        self.words_per_page = Some(n);
        self
    }

    pub fn depth_thresholds(mut self, detailed: usize, comprehensive: usize) -> Self {
        self.detailed_words = Some(detailed);
        self.comprehensive_words = Some(comprehensive);
        self
    }

    pub fn multi_topic_threshold(mut self, n: usize) -> Self {
        self.multi_topic_threshold = Some(n);
        self
    }

    pub fn introduction_sentences(mut self, n: usize) -> Self {
        self.introduction_sentences = Some(n);
        self
    }

    pub fn conclusion_sentences(mut self, n: usize) -> Self {
        self.conclusion_sentences = Some(n);
        self
    }

    pub fn min_excerpt_chars(mut self, n: usize) -> Self {
        self.min_excerpt_chars = Some(n);
        self
    }

    /// Compile all string patterns and produce a [`SummarizerConfig`].
    pub fn build(self) -> Result<SummarizerConfig, regex::Error> {
        let defaults = SummarizerConfig::default();
        Ok(SummarizerConfig {
            min_sentence_chars: self
                .min_sentence_chars
                .unwrap_or(defaults.min_sentence_chars),
            min_paragraph_chars: self
                .min_paragraph_chars
                .unwrap_or(defaults.min_paragraph_chars),
            normalize_text: self.normalize_text.unwrap_or(defaults.normalize_text),
            max_key_points: self.max_key_points.unwrap_or(defaults.max_key_points),
            key_point_ratio: self.key_point_ratio.unwrap_or(defaults.key_point_ratio),
            position_fraction: self
                .position_fraction
                .unwrap_or(defaults.position_fraction),
            position_bonus: self.position_bonus.unwrap_or(defaults.position_bonus),
            length_bonus_words: self
                .length_bonus_words
                .unwrap_or(defaults.length_bonus_words),
            proper_noun_threshold: self
                .proper_noun_threshold
                .unwrap_or(defaults.proper_noun_threshold),
            keyword_classes: self.keyword_classes.compile()?,
            min_topic_matches: self
                .min_topic_matches
                .unwrap_or(defaults.min_topic_matches),
            max_topics: self.max_topics.unwrap_or(defaults.max_topics),
            topics: self.topics.compile()?,
            min_corpus_chars: self.min_corpus_chars.unwrap_or(defaults.min_corpus_chars),
            words_per_page: self.words_per_page.unwrap_or(defaults.words_per_page),
            detailed_words: self.detailed_words.unwrap_or(defaults.detailed_words),
            comprehensive_words: self
                .comprehensive_words
                .unwrap_or(defaults.comprehensive_words),
            multi_topic_threshold: self
                .multi_topic_threshold
                .unwrap_or(defaults.multi_topic_threshold),
            introduction_sentences: self
                .introduction_sentences
                .unwrap_or(defaults.introduction_sentences),
            conclusion_sentences: self
                .conclusion_sentences
                .unwrap_or(defaults.conclusion_sentences),
            min_excerpt_chars: self.min_excerpt_chars.unwrap_or(defaults.min_excerpt_chars),
        })
    }
}
