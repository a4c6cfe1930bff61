//! Presentation text for rendered tables
//!
//! Configuration changes labels only. Grid structure always comes from the
//! attribute record.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Labels and wrapper class used by both renderers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Heading above the grid
    pub heading: String,
    /// Class of the outer wrapper element
    pub wrapper_class: String,
    /// Display text for an included feature
    pub yes_label: String,
    /// Display text for an excluded feature
    pub no_label: String,
    /// Editor button: append plan
    pub add_plan_label: String,
    /// Editor button: remove plan
    pub delete_plan_label: String,
    /// Editor button: toggle plan highlight
    pub highlight_plan_label: String,
    /// Editor button: append feature
    pub add_feature_label: String,
    /// Editor button: remove feature
    pub delete_feature_label: String,
}

impl RenderConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With heading
    #[inline]
    #[must_use]
    pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = heading.into();
        self
    }

    /// With wrapper class
    #[inline]
    #[must_use]
    pub fn with_wrapper_class(mut self, class: impl Into<String>) -> Self {
        self.wrapper_class = class.into();
        self
    }

    /// With yes/no display labels
    #[inline]
    #[must_use]
    pub fn with_membership_labels(mut self, yes: impl Into<String>, no: impl Into<String>) -> Self {
        self.yes_label = yes.into();
        self.no_label = no.into();
        self
    }

    /// Parse from TOML text; absent keys keep their defaults
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for invalid TOML or mistyped keys
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load from a TOML file
    ///
    /// # Errors
    /// - [`ConfigError::Io`] if the file cannot be read
    /// - [`ConfigError::Parse`] if its content is invalid
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::io_error(path, e))?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded render config");
        Ok(config)
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            heading: "Features".to_string(),
            wrapper_class: "wp-block-pricing-table".to_string(),
            yes_label: "Yes".to_string(),
            no_label: "No".to_string(),
            add_plan_label: "Add Plan".to_string(),
            delete_plan_label: "Delete Plan".to_string(),
            highlight_plan_label: "Highlight Plan".to_string(),
            add_feature_label: "Add Feature".to_string(),
            delete_feature_label: "Delete Feature".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_stock_labels() {
        let config = RenderConfig::new();
        assert_eq!(config.heading, "Features");
        assert_eq!(config.yes_label, "Yes");
        assert_eq!(config.no_label, "No");
        assert_eq!(config.highlight_plan_label, "Highlight Plan");
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = RenderConfig::from_toml_str("heading = \"Compare plans\"\n").unwrap();
        assert_eq!(config.heading, "Compare plans");
        assert_eq!(config.add_plan_label, "Add Plan");
    }

    #[test]
    fn mistyped_key_rejected() {
        assert!(matches!(
            RenderConfig::from_toml_str("yes_label = 1\n"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "yes_label = \"Included\"").unwrap();

        let config = RenderConfig::load(file.path()).unwrap();
        assert_eq!(config.yes_label, "Included");
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = RenderConfig::load(dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn builders_chain() {
        let config = RenderConfig::new()
            .with_heading("Plans")
            .with_membership_labels("✓", "–")
            .with_wrapper_class("pricing");
        assert_eq!(config.heading, "Plans");
        assert_eq!(config.yes_label, "✓");
        assert_eq!(config.wrapper_class, "pricing");
    }
}
