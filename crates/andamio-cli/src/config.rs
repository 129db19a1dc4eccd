//! # CLI Configuration
//!
//! Settings are layered: defaults, then the YAML file named by `--config`,
//! then the `ANDAMIO_OUTPUT` environment variable. Command-line flags are
//! applied last by `main`.
//!
//! ```yaml
//! output: json
//! log_json: true
//! ```

use std::path::Path;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable overriding the configured output format.
pub const ENV_OUTPUT: &str = "ANDAMIO_OUTPUT";

/// How results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Bare lowercase hex digest or a one-line status.
    #[default]
    Hex,
    /// Pretty-printed JSON object.
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hex" => Ok(Self::Hex),
            "json" => Ok(Self::Json),
            other => bail!("unknown output format \"{other}\" (expected hex or json)"),
        }
    }
}

/// Settings loaded from the config file and environment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Output format for hash and verification results.
    pub output: OutputFormat,
    /// Emit logs as JSON lines instead of human-readable text.
    pub log_json: bool,
}

impl CliConfig {
    /// Load settings from an optional YAML file and the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Parse a YAML config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Parse config YAML. An empty document yields the defaults.
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Apply environment overrides through `lookup`.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(value) = lookup(ENV_OUTPUT) {
            self.output = value
                .parse()
                .with_context(|| format!("invalid {ENV_OUTPUT}"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = CliConfig::default();
        assert_eq!(config.output, OutputFormat::Hex);
        assert!(!config.log_json);
    }

    #[test]
    fn parses_yaml() {
        let config = CliConfig::from_yaml("output: json\nlog_json: true\n").unwrap();
        assert_eq!(config.output, OutputFormat::Json);
        assert!(config.log_json);
    }

    #[test]
    fn empty_yaml_is_default() {
        assert_eq!(CliConfig::from_yaml("  \n").unwrap(), CliConfig::default());
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(CliConfig::from_yaml("network: mainnet\n").is_err());
    }

    #[test]
    fn env_overrides_file() {
        let mut config = CliConfig::from_yaml("output: hex\n").unwrap();
        config
            .apply_env(|key| (key == ENV_OUTPUT).then(|| "JSON".to_string()))
            .unwrap();
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn env_rejects_unknown_format() {
        let mut config = CliConfig::default();
        let err = config
            .apply_env(|_| Some("xml".to_string()))
            .unwrap_err();
        assert!(format!("{err:#}").contains("xml"));
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("andamio.yaml");
        std::fs::write(&path, "log_json: true\n").unwrap();
        let config = CliConfig::from_file(&path).unwrap();
        assert!(config.log_json);
        assert_eq!(config.output, OutputFormat::Hex);
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = CliConfig::from_file(Path::new("/nonexistent/andamio.yaml")).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }
}
