//! Analysis configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Settings for the built-in analysis backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSettings {
    /// Minimum character count before language detection is attempted.
    /// Shorter inputs get the `"unknown"` tag instead of failing.
    #[serde(default = "default_min_language_detect_chars")]
    pub min_language_detect_chars: usize,
    /// Languages with dedicated stemmer and stopword support.
    #[serde(default = "default_supported_languages")]
    pub supported_languages: Vec<String>,
    /// Stopword list used when the detected language has no dedicated list.
    #[serde(default = "default_stopword_fallback")]
    pub stopword_fallback: String,
}

fn default_min_language_detect_chars() -> usize {
    10
}

fn default_supported_languages() -> Vec<String> {
    ["en", "es", "fr", "de"].map(String::from).to_vec()
}

fn default_stopword_fallback() -> String {
    "en".to_string()
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            min_language_detect_chars: default_min_language_detect_chars(),
            supported_languages: default_supported_languages(),
            stopword_fallback: default_stopword_fallback(),
        }
    }
}

impl AnalysisSettings {
    /// Load settings from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    pub fn supports_language(&self, lang: &str) -> bool {
        self.supported_languages.iter().any(|l| l == lang)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = AnalysisSettings::default();
        assert_eq!(settings.min_language_detect_chars, 10);
        assert!(settings.supports_language("en"));
        assert!(settings.supports_language("de"));
        assert!(!settings.supports_language("zh"));
    }

    #[test]
    fn test_parse_partial_toml() {
        let settings: AnalysisSettings =
            toml::from_str("min_language_detect_chars = 25").unwrap();
        assert_eq!(settings.min_language_detect_chars, 25);
        assert_eq!(settings.supported_languages.len(), 4);
    }
}
