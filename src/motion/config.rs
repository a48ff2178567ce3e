use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// Declarative configuration for a pattern motion.
///
/// ```toml
/// path_data = "M0 0 L0 100 L100 100"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatternMotionConfig {
    /// Path data describing the motion pattern.
    #[serde(alias = "pathData")]
    pub path_data: Option<String>,
}

impl PatternMotionConfig {
    /// Creates a config holding the given path data.
    #[must_use]
    pub fn with_path_data(path_data: impl Into<String>) -> Self {
        Self {
            path_data: Some(path_data.into()),
        }
    }

    /// Parses a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or contains unknown keys.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| ConfigError::from(e).into())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::MotionError;

    #[test]
    fn reads_path_data() {
        let config = PatternMotionConfig::from_toml_str(r#"path_data = "M0 0 L1 1""#).unwrap();
        assert_eq!(config, PatternMotionConfig::with_path_data("M0 0 L1 1"));
    }

    #[test]
    fn accepts_camel_case_key() {
        let config = PatternMotionConfig::from_toml_str(r#"pathData = "M0 0 L1 1""#).unwrap();
        assert_eq!(config.path_data.as_deref(), Some("M0 0 L1 1"));
    }

    #[test]
    fn missing_key_is_none() {
        let config = PatternMotionConfig::from_toml_str("").unwrap();
        assert!(config.path_data.is_none());
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = PatternMotionConfig::from_toml_str(r#"path = "M0 0""#).unwrap_err();
        assert!(matches!(err, MotionError::Config(_)), "got {err:?}");
    }
}
