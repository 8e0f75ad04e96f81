use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{SummarizeError, SummarizerConfigBuilder};

/// On-disk TOML configuration structure.
/// All fields are optional so partial configs work (merge with defaults).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    pub thresholds: Option<ThresholdsConfig>,
    pub scoring: Option<ScoringConfig>,
    pub topics: Option<TopicsConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThresholdsConfig {
    pub min_sentence_chars: Option<usize>,
    pub min_paragraph_chars: Option<usize>,
    pub min_corpus_chars: Option<usize>,
    pub words_per_page: Option<usize>,
    pub normalize_text: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub max_key_points: Option<usize>,
    pub key_point_ratio: Option<f64>,
    /// Extra keyword classes appended to the built-in ones.
    pub extra_keywords: Option<Vec<PatternEntry>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TopicsConfig {
    pub min_matches: Option<usize>,
    pub max_topics: Option<usize>,
    /// Extra categories appended after the built-in taxonomy.
    pub extra: Option<Vec<PatternEntry>>,
}

/// A labelled regex as written in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternEntry {
    pub label: String,
    pub pattern: String,
}

impl ConfigFile {
    /// Turn the file's settings into a builder; unset values keep their defaults.
    pub fn to_builder(&self) -> SummarizerConfigBuilder {
        let mut builder = SummarizerConfigBuilder::new();

        if let Some(t) = &self.thresholds {
            if let Some(n) = t.min_sentence_chars {
                builder = builder.min_sentence_chars(n);
            }
            if let Some(n) = t.min_paragraph_chars {
                builder = builder.min_paragraph_chars(n);
            }
            if let Some(n) = t.min_corpus_chars {
                builder = builder.min_corpus_chars(n);
            }
            if let Some(n) = t.words_per_page {
                builder = builder.words_per_page(n);
            }
            if let Some(enabled) = t.normalize_text {
                builder = builder.normalize_text(enabled);
            }
        }

        if let Some(s) = &self.scoring {
            if let Some(n) = s.max_key_points {
                builder = builder.max_key_points(n);
            }
            if let Some(ratio) = s.key_point_ratio {
                builder = builder.key_point_ratio(ratio);
            }
            for entry in s.extra_keywords.iter().flatten() {
                builder = builder.add_keyword_class(&entry.label, &entry.pattern);
            }
        }

        if let Some(t) = &self.topics {
            if let Some(n) = t.min_matches {
                builder = builder.min_topic_matches(n);
            }
            if let Some(n) = t.max_topics {
                builder = builder.max_topics(n);
            }
            for entry in t.extra.iter().flatten() {
                builder = builder.add_topic(&entry.label, &entry.pattern);
            }
        }

        builder
    }
}

/// Platform config directory path: `<config_dir>/docsum/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("docsum").join("config.toml"))
}

/// Load config by cascading CWD `.docsum.toml` over platform config.
/// CWD values override platform values.
pub fn load_config() -> ConfigFile {
    let platform = config_path().and_then(|p| load_from_path(&p));
    let cwd = load_from_path(Path::new(".docsum.toml"));

    match (platform, cwd) {
        (None, None) => ConfigFile::default(),
        (Some(p), None) => p,
        (None, Some(c)) => c,
        (Some(p), Some(c)) => merge(p, c),
    }
}

/// Load a config from a specific path. Returns `None` if the file doesn't
/// exist or can't be parsed.
pub fn load_from_path(path: &Path) -> Option<ConfigFile> {
    match read_config(path) {
        Ok(config) => Some(config),
        Err(SummarizeError::Io(_)) => None,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable config file");
            None
        }
    }
}

/// Load a config the caller asked for explicitly; any failure is an error.
pub fn read_config(path: &Path) -> Result<ConfigFile, SummarizeError> {
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Merge two configs: `overlay` values take precedence over `base`.
///
/// Extra pattern lists are not concatenated; the overlay's list replaces the base's.
pub fn merge(base: ConfigFile, overlay: ConfigFile) -> ConfigFile {
    let (bt, ot) = (base.thresholds.unwrap_or_default(), overlay.thresholds.unwrap_or_default());
    let (bs, os) = (base.scoring.unwrap_or_default(), overlay.scoring.unwrap_or_default());
    let (bp, op) = (base.topics.unwrap_or_default(), overlay.topics.unwrap_or_default());

    ConfigFile {
        thresholds: Some(ThresholdsConfig {
            min_sentence_chars: ot.min_sentence_chars.or(bt.min_sentence_chars),
            min_paragraph_chars: ot.min_paragraph_chars.or(bt.min_paragraph_chars),
            min_corpus_chars: ot.min_corpus_chars.or(bt.min_corpus_chars),
            words_per_page: ot.words_per_page.or(bt.words_per_page),
            normalize_text: ot.normalize_text.or(bt.normalize_text),
        }),
        scoring: Some(ScoringConfig {
            max_key_points: os.max_key_points.or(bs.max_key_points),
            key_point_ratio: os.key_point_ratio.or(bs.key_point_ratio),
            extra_keywords: os.extra_keywords.or(bs.extra_keywords),
        }),
        topics: Some(TopicsConfig {
            min_matches: op.min_matches.or(bp.min_matches),
            max_topics: op.max_topics.or(bp.max_topics),
            extra: op.extra.or(bp.extra),
        }),
    }
}
