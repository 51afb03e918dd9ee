// crates/feed-parser/src/config.rs
//! Parser configuration
//!
//! Defaults reproduce the standard behaviour of both dialects, so most callers
//! never need to touch this. It can be embedded in a larger TOML config file
//! or loaded on its own with [`ParserConfig::from_toml_str`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while loading or validating a [`ParserConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The TOML could not be deserialized
    #[error("Failed to parse parser config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is out of range
    #[error("Invalid parser config: {field} {message}")]
    Validation { field: String, message: String },
}

/// Where RDF item elements are looked up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RdfItemLocation {
    /// Items are siblings of `<channel>` under the root element
    #[default]
    RootSiblings,
    /// Use items nested in `<channel>` if there are any, otherwise root siblings
    NestedThenRoot,
}

/// Options for [`FeedParser`](crate::FeedParser)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Version reported for `<rss>` documents without a `version` attribute
    pub default_version: String,

    /// RDF item lookup rule
    pub rdf_item_location: RdfItemLocation,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            default_version: "2.0".to_string(),
            rdf_item_location: RdfItemLocation::default(),
        }
    }
}

impl ParserConfig {
    /// Loads and validates a config from TOML text
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that all values are usable
    pub fn validate(&self) -> ConfigResult<()> {
        if self.default_version.trim().is_empty() {
            return Err(ConfigError::Validation {
                field: "default_version".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ParserConfig::default();
        assert_eq!(config.default_version, "2.0");
        assert_eq!(config.rdf_item_location, RdfItemLocation::RootSiblings);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_uses_defaults() -> Result<(), Box<dyn std::error::Error>> {
        let config = ParserConfig::from_toml_str("")?;
        assert_eq!(config, ParserConfig::default());
        Ok(())
    }

    #[test]
    fn test_toml_overrides() -> Result<(), Box<dyn std::error::Error>> {
        let config = ParserConfig::from_toml_str(
            r#"
default_version = "0.92"
rdf_item_location = "nested_then_root"
"#,
        )?;
        assert_eq!(config.default_version, "0.92");
        assert_eq!(config.rdf_item_location, RdfItemLocation::NestedThenRoot);
        Ok(())
    }

    #[test]
    fn test_blank_version_rejected() {
        let result = ParserConfig::from_toml_str(r#"default_version = "  ""#);
        assert!(matches!(
            result,
            Err(ConfigError::Validation { ref field, .. }) if field == "default_version"
        ));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let result = ParserConfig::from_toml_str("this is not valid TOML {{{");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_serialization_roundtrip() -> Result<(), Box<dyn std::error::Error>> {
        let config = ParserConfig {
            default_version: "0.91".to_string(),
            rdf_item_location: RdfItemLocation::NestedThenRoot,
        };
        let text = toml::to_string(&config)?;
        assert_eq!(ParserConfig::from_toml_str(&text)?, config);
        Ok(())
    }
}
