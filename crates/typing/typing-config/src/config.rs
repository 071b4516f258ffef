use serde::Deserialize;
use std::path::Path;

#[derive(Deserialize, Debug)]
pub struct TypingConfig {
    #[serde(default = "defaults::words_file")]
    pub words_file: String,
    #[serde(default = "defaults::scores_file")]
    pub scores_file: String,
    /// Words drawn per round.
    #[serde(default = "defaults::words_per_round")]
    pub words_per_round: usize,
    /// Score for a correct answer before the latency bonus/penalty.
    #[serde(default = "defaults::base_score")]
    pub base_score: i64,
    /// Per-character time allowance; a word's deadline is `len * ms_per_char`.
    #[serde(default = "defaults::ms_per_char")]
    pub ms_per_char: u64,
    /// Breather between words, in milliseconds.
    #[serde(default = "defaults::pause_ms")]
    pub pause_ms: u64,
    #[serde(default = "defaults::log_level")]
    pub log_level: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read '{path}'")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config")]
    Parse(#[from] toml::de::Error),
}

mod defaults {
    pub fn words_file() -> String {
        "resources/words.txt".into()
    }

    pub fn scores_file() -> String {
        "typing_scores.txt".into()
    }

    pub fn words_per_round() -> usize {
        10
    }

    pub fn base_score() -> i64 {
        100
    }

    pub fn ms_per_char() -> u64 {
        2000
    }

    pub fn pause_ms() -> u64 {
        2000
    }

    pub fn log_level() -> String {
        "info".into()
    }
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            words_file: defaults::words_file(),
            scores_file: defaults::scores_file(),
            words_per_round: defaults::words_per_round(),
            base_score: defaults::base_score(),
            ms_per_char: defaults::ms_per_char(),
            pause_ms: defaults::pause_ms(),
            log_level: defaults::log_level(),
        }
    }
}

impl TypingConfig {
    pub fn load(path: impl AsRef<Path> + ToString) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        let config: TypingConfig = toml::from_str(&text)?;
        Ok(config)
    }

    /// Loads `path` when it exists, otherwise falls back to the built-in
    /// defaults.
    pub fn load_or_default(path: impl AsRef<Path> + ToString) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}
