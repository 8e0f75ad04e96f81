use once_cell::sync::Lazy;
use serde::Serialize;

use crate::config::{LabeledPattern, SummarizerConfig};

/// Built-in topic taxonomy. Declaration order breaks ties between equal counts.
pub(crate) static TOPIC_TAXONOMY: Lazy<Vec<LabeledPattern>> = Lazy::new(|| {
    [
        (
            "Research & Methodology",
            r"\b(?:research|study|studies|methodology|methods?|experiments?|hypothes(?:is|es)|surveys?|analysis)\b",
        ),
        (
            "Results & Findings",
            r"\b(?:results?|findings?|found|outcomes?|conclusions?|discovered|revealed|showed)\b",
        ),
        (
            "Technical Details",
            r"\b(?:technical|technology|technologies|systems?|software|hardware|algorithms?|implementation|architecture|specifications?)\b",
        ),
        (
            "Business & Strategy",
            r"\b(?:business|strategy|strategic|markets?|revenue|customers?|growth|investments?|competitive|profits?)\b",
        ),
        (
            "Process & Procedures",
            r"\b(?:process|processes|procedures?|steps?|workflows?|guidelines?|protocols?|phases?|stages?)\b",
        ),
        (
            "Data & Analytics",
            r"\b(?:data|datasets?|analytics|statistics?|statistical|metrics?|measurements?|trends?|charts?|graphs?)\b",
        ),
        (
            "Recommendations",
            r"\b(?:recommend|recommends|recommended|recommendations?|suggest|suggests|suggested|should|advise|advised|propose|proposed)\b",
        ),
    ]
    .into_iter()
    .map(|(label, pattern)| LabeledPattern::new(label, pattern).unwrap())
    .collect()
});

/// A taxonomy category together with how often its pattern matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicCount {
    pub label: String,
    pub matches: usize,
}

/// Labels of the built-in taxonomy, in declaration order.
pub fn taxonomy_labels() -> Vec<String> {
    TOPIC_TAXONOMY.iter().map(|t| t.label.clone()).collect()
}

/// Count matches of every taxonomy category in `corpus`, in declaration order.
///
/// Categories below the match floor are included so callers can inspect why
/// a topic was or was not reported.
pub fn classify_counts(corpus: &str, config: &SummarizerConfig) -> Vec<TopicCount> {
    config
        .topics
        .resolve(&TOPIC_TAXONOMY)
        .iter()
        .map(|topic| TopicCount {
            label: topic.label.clone(),
            matches: topic.count_matches(corpus),
        })
        .collect()
}

/// Rank the taxonomy categories present in `corpus` using the default configuration.
pub fn classify(corpus: &str) -> Vec<TopicCount> {
    classify_with_config(corpus, &SummarizerConfig::default())
}

/// Config-aware version of [`classify`].
///
/// Keeps categories with at least `min_topic_matches` matches, orders them by
/// descending count (stable, so declaration order breaks ties) and returns at
/// most `max_topics`. A label listed twice in the taxonomy is reported once.
pub(crate) fn classify_with_config(corpus: &str, config: &SummarizerConfig) -> Vec<TopicCount> {
    let mut ranked: Vec<TopicCount> = Vec::new();
    for count in classify_counts(corpus, config) {
        if count.matches < config.min_topic_matches {
            continue;
        }
        if ranked.iter().any(|r| r.label == count.label) {
            continue;
        }
        ranked.push(count);
    }

    ranked.sort_by(|a, b| b.matches.cmp(&a.matches));
    ranked.truncate(config.max_topics);

    tracing::debug!(
        topics = ?ranked.iter().map(|t| t.label.as_str()).collect::<Vec<_>>(),
        "classified corpus"
    );
    ranked
}
