use crate::description::DEFAULT_LOOKUP_BASE_URL;
use crate::selection::{SelectionMode, clamp_length};

/// A server-side word index offered in the word-type selector.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct Category {
    /// Name used in the endpoint path.
    pub name: String,
    /// Label shown next to the radio button.
    pub label: String,
}

impl Category {
    fn new(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct LengthRange {
    pub from: u32,
    pub to: u32,
}

impl Default for LengthRange {
    fn default() -> Self {
        Self { from: 2, to: 8 }
    }
}

/// Automatic retries of a failed word fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    /// Extra attempts after the first failure. Zero disables retrying.
    pub max_attempts: u32,
    pub delay_ms: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 2,
            delay_ms: 1500,
        }
    }
}

/// Widget settings. Every field is optional in the JSON form.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    pub endpoint_base: String,
    pub dictionary: String,
    pub batch_size: u32,
    pub lookup_base_url: String,
    pub default_history_size: usize,
    pub default_length: LengthRange,
    pub categories: Vec<Category>,
    pub retry: RetryPolicy,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            endpoint_base: "/words".to_string(),
            dictionary: "owl2".to_string(),
            batch_size: 40,
            lookup_base_url: DEFAULT_LOOKUP_BASE_URL.to_string(),
            default_history_size: 10,
            default_length: LengthRange::default(),
            categories: default_categories(),
            retry: RetryPolicy::default(),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("failed to parse quiz configuration: {message}")]
    Parse { message: String },
    #[error("batch size must be at least 1")]
    EmptyBatch,
}

impl QuizConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|error| ConfigError::Parse {
            message: error.to_string(),
        })?;

        if config.batch_size == 0 {
            return Err(ConfigError::EmptyBatch);
        }

        Ok(config)
    }

    /// Length selection the widget starts with.
    pub fn initial_selection(&self) -> SelectionMode {
        let (from, to) = clamp_length(self.default_length.from, self.default_length.to);
        SelectionMode::Length { from, to }
    }

    /// Full endpoint path for a selection, e.g. `/words/owl2/40/length/2/8`.
    pub fn endpoint_for(&self, mode: &SelectionMode) -> String {
        format!(
            "{}/{}/{}/{}",
            self.endpoint_base.trim_end_matches('/'),
            self.dictionary,
            self.batch_size,
            mode.path_segment()
        )
    }
}

pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new("j_words", "J words"),
        Category::new("q_words", "Q words"),
        Category::new("q_withoutt_u_words", "Q without U words"),
        Category::new("x_words", "X words"),
        Category::new("z_words", "Z words"),
        Category::new("consonants", "Consonants Only"),
        Category::new("all_vowels_but_one", "All vowels but one"),
        Category::new("out_words", "OUT- words"),
        Category::new("re_words", "RE- words"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_endpoint_paths() {
        let config = QuizConfig::default();

        assert_eq!(
            config.endpoint_for(&SelectionMode::length(2, 8)),
            "/words/owl2/40/length/2/8"
        );
        assert_eq!(
            config.endpoint_for(&SelectionMode::index("q_words")),
            "/words/owl2/40/index/q_words"
        );
    }

    #[test]
    fn endpoint_base_trailing_slash_is_ignored() {
        let config = QuizConfig {
            endpoint_base: "https://isaword.example/words/".to_string(),
            batch_size: 10,
            ..QuizConfig::default()
        };

        assert_eq!(
            config.endpoint_for(&SelectionMode::index("z_words")),
            "https://isaword.example/words/owl2/10/index/z_words"
        );
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = QuizConfig::from_json_str(r#"{ "batch_size": 20, "retry": { "delay_ms": 10 } }"#)
            .expect("partial config should parse");

        assert_eq!(config.batch_size, 20);
        assert_eq!(config.dictionary, "owl2");
        assert_eq!(config.retry.delay_ms, 10);
        assert_eq!(config.retry.max_attempts, 2);
        assert_eq!(config.categories.len(), 9);
    }

    #[test]
    fn rejects_malformed_json() {
        let error = QuizConfig::from_json_str("{ batch_size: ").expect_err("should fail");
        assert!(matches!(error, ConfigError::Parse { .. }));
    }

    #[test]
    fn rejects_zero_batch_size() {
        let error = QuizConfig::from_json_str(r#"{ "batch_size": 0 }"#).expect_err("should fail");
        assert_eq!(error, ConfigError::EmptyBatch);
    }

    #[test]
    fn initial_selection_is_clamped() {
        let config = QuizConfig {
            default_length: LengthRange { from: 0, to: 40 },
            ..QuizConfig::default()
        };

        assert_eq!(
            config.initial_selection(),
            SelectionMode::Length { from: 2, to: 15 }
        );
    }

    #[test]
    fn categories_replace_the_defaults() {
        let config = QuizConfig::from_json_str(
            r#"{ "categories": [ { "name": "vowels", "label": "Vowels Only" } ] }"#,
        )
        .expect("configuration should parse");

        assert_eq!(config.categories, vec![Category::new("vowels", "Vowels Only")]);
        assert!(
            QuizConfig::default()
                .categories
                .iter()
                .any(|category| category.name == "consonants")
        );
    }
}
