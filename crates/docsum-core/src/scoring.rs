//! Sentence scoring and key-point selection.
//!
//! Each candidate sentence gets an additive integer score built from four
//! independent signals:
//! - position: leading or trailing 10% of the candidate sequence
//! - keywords: matches of each keyword class (conclusions, connectives,
//!   research, method, evidence)
//! - length: a word count in the readable 10–30 range
//! - capitalized terms: more than two `Capitalized` words
//!
//! Selection takes the highest-scoring sentences and hands them back in
//! document order.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::{LabeledPattern, SummarizerConfig};

/// Built-in keyword classes, in scoring order.
pub(crate) static KEYWORD_CLASSES: Lazy<Vec<LabeledPattern>> = Lazy::new(|| {
    [
        (
            "conclusion",
            r"\b(?:in conclusion|conclusions?|conclude[sd]?|in summary|to summarize|overall|results?|findings?|important|significant(?:ly)?|key)\b",
        ),
        (
            "transition",
            r"\b(?:however|therefore|thus|hence|consequently|furthermore|moreover|additionally|because|as a result|in addition)\b",
        ),
        (
            "research",
            r"\b(?:research|study|studies|investigat(?:e|ed|es|ion)|experiments?|experimental|hypothes(?:is|es)|evaluat(?:e|ed|ion))\b",
        ),
        (
            "method",
            r"\b(?:methods?|methodology|approach(?:es)?|process(?:es)?|procedures?|techniques?|framework|implement(?:s|ed|ation)?|steps?)\b",
        ),
        (
            "evidence",
            r"\b(?:data|evidence|statistics?|statistical(?:ly)?|percent(?:age)?|measured|measurements?|observed|shows?|showed|shown|demonstrates?|demonstrated|indicates?)\b",
        ),
    ]
    .into_iter()
    .map(|(label, pattern)| LabeledPattern::new(label, pattern).unwrap())
    .collect()
});

/// A capitalized word: uppercase letter followed by lowercase letters.
///
/// Sentence-initial words count too, so the signal is only a rough proxy for
/// proper nouns.
static CAPITALIZED_TERM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z][a-z]+").unwrap());

/// A candidate sentence with its fixed position and computed score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    text: String,
    ordinal: usize,
    score: u32,
}

impl Sentence {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Position of the sentence among all candidates, in document order.
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

/// Score every candidate using the default configuration.
pub fn score_sentences(candidates: &[String]) -> Vec<Sentence> {
    score_sentences_with_config(candidates, &SummarizerConfig::default())
}

/// Config-aware version of [`score_sentences`]. Output keeps candidate order.
pub(crate) fn score_sentences_with_config(
    candidates: &[String],
    config: &SummarizerConfig,
) -> Vec<Sentence> {
    let classes = config.keyword_classes.resolve(&KEYWORD_CLASSES);
    let total = candidates.len();

    candidates
        .iter()
        .enumerate()
        .map(|(ordinal, text)| Sentence {
            score: score_sentence(text, ordinal, total, &classes, config),
            text: text.clone(),
            ordinal,
        })
        .collect()
}

fn score_sentence(
    text: &str,
    ordinal: usize,
    total: usize,
    classes: &[LabeledPattern],
    config: &SummarizerConfig,
) -> u32 {
    // Bonuses come from config, so every addition saturates instead of overflowing.
    let mut score: u32 = 0;

    if in_position_window(ordinal, total, config.position_fraction) {
        score = score.saturating_add(config.position_bonus);
    }

    for class in classes {
        let matches = u32::try_from(class.count_matches(text)).unwrap_or(u32::MAX);
        score = score.saturating_add(matches);
    }

    let (min_words, max_words) = config.length_bonus_words;
    if (min_words..=max_words).contains(&text.split_whitespace().count()) {
        score = score.saturating_add(1);
    }

    if CAPITALIZED_TERM_RE.find_iter(text).count() > config.proper_noun_threshold {
        score = score.saturating_add(1);
    }

    score
}

/// Whether `ordinal` falls in the leading or trailing `fraction` of `total` candidates.
fn in_position_window(ordinal: usize, total: usize, fraction: f64) -> bool {
    let i = ordinal as f64;
    let n = total as f64;
    i < fraction * n || i > (1.0 - fraction) * n
}

/// Number of key points for `candidate_count` sentences: `min(max, ceil(ratio * count))`.
pub fn key_point_limit(candidate_count: usize, config: &SummarizerConfig) -> usize {
    let proportional = (config.key_point_ratio * candidate_count as f64).ceil() as usize;
    proportional.min(config.max_key_points)
}

/// Pick the top-scoring sentences and return them in document order.
///
/// Equal scores keep ascending ordinal order, so earlier sentences win ties.
pub fn select_key_points(scored: &[Sentence], config: &SummarizerConfig) -> Vec<Sentence> {
    let limit = key_point_limit(scored.len(), config);

    let mut ranked: Vec<&Sentence> = scored.iter().collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score).then(a.ordinal.cmp(&b.ordinal)));
    ranked.truncate(limit);
    ranked.sort_by_key(|s| s.ordinal);

    tracing::debug!(
        candidates = scored.len(),
        selected = ranked.len(),
        top_score = ranked.iter().map(|s| s.score).max().unwrap_or(0),
        "selected key points"
    );

    ranked.into_iter().cloned().collect()
}
