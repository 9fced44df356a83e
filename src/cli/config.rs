//! Configuration file
//!
//! JSON object; every field is optional:
//!
//! ```text
//! {
//!   "log_level": "info",          // trace | info | warn | error
//!   "hyperlink_color": "0000FF",  // hex RGB, optional leading '#', "" for none
//!   "hyperlink_underline": true
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::observability::{log_event_with_fields, Event, Severity};
use crate::oxml::{HyperlinkOptions, DEFAULT_COLOR};

use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Minimum log severity (optional, default "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Run color for new hyperlinks (optional, default "0000FF")
    #[serde(default = "default_hyperlink_color")]
    pub hyperlink_color: String,

    /// Underline new hyperlinks (optional, default true)
    #[serde(default = "default_hyperlink_underline")]
    pub hyperlink_underline: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}
fn default_hyperlink_color() -> String {
    DEFAULT_COLOR.to_string()
}
fn default_hyperlink_underline() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            hyperlink_color: default_hyperlink_color(),
            hyperlink_underline: default_hyperlink_underline(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config = Self::from_json(&content)?;
        log_event_with_fields(Event::ConfigLoaded, &[("path", &path.display().to_string())]);
        Ok(config)
    }

    /// Parse and validate configuration JSON
    pub fn from_json(content: &str) -> CliResult<Self> {
        let config: Config = serde_json::from_str(content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        self.severity()?;

        let hex = self.hyperlink_color.trim_start_matches('#');
        let valid_color = self.hyperlink_color.is_empty()
            || (hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()));
        if !valid_color {
            return Err(CliError::config_error(format!(
                "Invalid hyperlink_color: '{}'. Expected six hex digits.",
                self.hyperlink_color
            )));
        }

        Ok(())
    }

    /// Parsed minimum log severity
    pub fn severity(&self) -> CliResult<Severity> {
        self.log_level
            .parse::<Severity>()
            .map_err(CliError::config_error)
    }

    /// Hyperlink options seeded from this configuration
    pub fn hyperlink_options(&self) -> HyperlinkOptions {
        HyperlinkOptions {
            color: Some(self.hyperlink_color.clone()).filter(|c| !c.is_empty()),
            underline: self.hyperlink_underline,
            ..HyperlinkOptions::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.severity().unwrap(), Severity::Info);
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let err = Config::from_json(r#"{"log_level": "verbose"}"#).unwrap_err();
        assert_eq!(err.code_str(), "FTN_CLI_CONFIG_ERROR");
    }

    #[test]
    fn test_color_validation() {
        assert!(Config::from_json(r##"{"hyperlink_color": "#00ff00"}"##).is_ok());
        assert!(Config::from_json(r#"{"hyperlink_color": ""}"#).is_ok());
        assert!(Config::from_json(r#"{"hyperlink_color": "blue"}"#).is_err());
    }

    #[test]
    fn test_rejects_unknown_fields() {
        assert!(Config::from_json(r#"{"log_levle": "info"}"#).is_err());
    }

    #[test]
    fn test_hyperlink_options() {
        let config = Config::from_json(r#"{"hyperlink_color": "", "hyperlink_underline": false}"#).unwrap();
        let options = config.hyperlink_options();
        assert_eq!(options.color, None);
        assert!(!options.underline);
    }
}
