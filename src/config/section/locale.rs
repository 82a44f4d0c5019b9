//! `[locale]` configuration.

use serde::{Deserialize, Serialize};

/// Recommended language when none is configured.
const FALLBACK_LANGUAGE: &str = "en";

/// Language and regional formatting preferences.
///
/// Both fields treat "empty" as "use the environment default": an empty
/// `language` falls back to `"en"` via [`LocaleConfig::language_or_default`],
/// and an empty `tags` list means consumers should use the runtime locale for
/// date and number formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleConfig {
    /// HTML language code (e.g., "en", "zh-Hans"). Empty means default.
    pub language: String,

    /// Ordered BCP 47 language tags for date/number formatting.
    pub tags: Vec<String>,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language: FALLBACK_LANGUAGE.into(),
            tags: vec!["en-EN".into()],
        }
    }
}

impl LocaleConfig {
    /// Language code with the empty-means-default rule applied.
    pub fn language_or_default(&self) -> &str {
        if self.language.is_empty() {
            FALLBACK_LANGUAGE
        } else {
            &self.language
        }
    }

    /// Formatting tags, `None` when the environment default should be used.
    pub fn tags(&self) -> Option<&[String]> {
        if self.tags.is_empty() {
            None
        } else {
            Some(&self.tags)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.locale.language, "en");
        assert_eq!(config.locale.tags, vec!["en-EN".to_string()]);
    }

    #[test]
    fn test_round_trip() {
        let config = test_parse_config("[locale]\nlanguage = \"en\"\ntags = [\"en-EN\"]");
        let serialized = toml::to_string(&config.locale).unwrap();
        let back: LocaleConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(back, config.locale);
        assert_eq!(back.language, "en");
        assert_eq!(back.tags, vec!["en-EN".to_string()]);
    }

    #[test]
    fn test_empty_language_falls_back() {
        let config = test_parse_config("[locale]\nlanguage = \"\"");
        assert_eq!(config.locale.language, "");
        assert_eq!(config.locale.language_or_default(), "en");
    }

    #[test]
    fn test_configured_language_wins() {
        let config = test_parse_config("[locale]\nlanguage = \"zh-Hans\"");
        assert_eq!(config.locale.language_or_default(), "zh-Hans");
    }

    #[test]
    fn test_empty_tags_mean_environment_default() {
        let config = test_parse_config("[locale]\ntags = []");
        assert!(config.locale.tags().is_none());
    }

    #[test]
    fn test_tag_order_preserved() {
        let config = test_parse_config("[locale]\ntags = [\"en-US\", \"en-GB\", \"en\"]");
        assert_eq!(
            config.locale.tags().unwrap(),
            &["en-US".to_string(), "en-GB".to_string(), "en".to_string()]
        );
    }
}
