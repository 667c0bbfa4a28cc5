//! Configuration file handling

use crate::error::CliError;
use anyhow::{Context, Result};
use ragsplit_api::{Config, ExecutionMode, Strategy};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq)]
pub struct CliConfig {
    /// Splitting configuration
    #[serde(default)]
    pub splitting: SplittingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Splitting-related configuration
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct SplittingConfig {
    /// Strategy name: `fixed`, `recursive` or `parent-child`
    pub strategy: String,

    /// Maximum chunk length in characters
    pub chunk_size: usize,

    /// Overlap between consecutive chunks in characters
    pub overlap_size: usize,

    /// Separators, coarsest first
    pub separators: Vec<String>,
}

impl Default for SplittingConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Recursive.as_str().to_string(),
            chunk_size: 500,
            overlap_size: 50,
            separators: ["\n\n", "\n", " ", ""].iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Append statistics after each document
    pub include_stats: bool,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            include_stats: false,
            pretty_json: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Split files and child passes in parallel
    pub parallel: bool,

    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            worker_threads: 0,
        }
    }
}

impl CliConfig {
    /// Load a configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse a configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Worker thread count, `None` when left to the runtime
    pub fn threads(&self) -> Option<usize> {
        match self.performance.worker_threads {
            0 => None,
            n => Some(n),
        }
    }

    /// Build the library configuration this file describes
    pub fn to_api_config(&self) -> Result<Config> {
        let splitting = &self.splitting;
        let mode = if self.performance.parallel {
            ExecutionMode::Parallel
        } else {
            ExecutionMode::Adaptive
        };

        let config = Config::builder()
            .strategy_name(&splitting.strategy)
            .map_err(|e| CliError::ConfigError(e.to_string()))?
            .chunk_size(splitting.chunk_size)
            .overlap_size(splitting.overlap_size)
            .separators(splitting.separators.iter().cloned())
            .threads(self.threads())
            .execution_mode(mode)
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_round_trip_through_toml() {
        let config = CliConfig::default();
        let text = config.to_toml().unwrap();
        let parsed = CliConfig::from_toml(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config = CliConfig::from_toml("[splitting]\nchunk_size = 200\n").unwrap();
        assert_eq!(config.splitting.chunk_size, 200);
        assert_eq!(config.splitting.overlap_size, 50);
        assert_eq!(config.splitting.strategy, "recursive");
        assert_eq!(config.output.default_format, "text");
        assert!(!config.performance.parallel);
    }

    #[test]
    fn test_toml_escapes_become_real_separators() {
        let config = CliConfig::from_toml(
            r#"
[splitting]
strategy = "fixed"
separators = ["\n"]
"#,
        )
        .unwrap();
        assert_eq!(config.splitting.separators, ["\n"]);

        let api = config.to_api_config().unwrap();
        assert_eq!(api.strategy(), Strategy::Fixed);
        assert_eq!(api.separators(), ["\n"]);
    }

    #[test]
    fn test_invalid_values_are_config_errors() {
        let config = CliConfig::from_toml("[splitting]\nchunk_size = 10\noverlap_size = 10\n").unwrap();
        let err = config.to_api_config().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::ConfigError(_))
        ));

        let config = CliConfig::from_toml("[splitting]\nstrategy = \"semantic\"\n").unwrap();
        assert!(config.to_api_config().is_err());
    }

    #[test]
    fn test_threads() {
        let mut config = CliConfig::default();
        assert_eq!(config.threads(), None);
        config.performance.worker_threads = 3;
        assert_eq!(config.threads(), Some(3));
        assert_eq!(config.to_api_config().unwrap().threads(), Some(3));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[output]\ndefault_format = \"json\"").unwrap();

        let config = CliConfig::from_file(file.path()).unwrap();
        assert_eq!(config.output.default_format, "json");

        let err = CliConfig::from_file(Path::new("/nonexistent/ragsplit.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_malformed_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[splitting\nchunk_size = ").unwrap();

        let err = CliConfig::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
