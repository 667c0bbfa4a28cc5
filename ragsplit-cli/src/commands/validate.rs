//! Validate command implementation

use crate::{config::CliConfig, output::OutputFormat};
use anyhow::{anyhow, Result};
use clap::Args;
use ragsplit_api::Config;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        match Self::check(&self.config) {
            Ok((cli_config, config)) => {
                println!("✓ Configuration is valid!");
                println!("  Strategy: {}", config.strategy());
                println!("  Chunk size: {}", config.chunk_size());
                println!("  Overlap: {}", config.overlap_size());
                println!("  Separators: {:?}", config.separators());
                println!("  Output format: {}", cli_config.output.default_format);
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow!("Validation failed: {e}"))
            }
        }
    }

    fn check(path: &std::path::Path) -> Result<(CliConfig, Config)> {
        let cli_config = CliConfig::from_file(path)?;
        let config = cli_config.to_api_config()?;

        let format = &cli_config.output.default_format;
        if OutputFormat::from_name(format).is_none() {
            return Err(anyhow!("unknown output format '{format}'"));
        }

        Ok((cli_config, config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_validate_args_debug() {
        let args = ValidateArgs {
            config: PathBuf::from("test.toml"),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("ValidateArgs"));
        assert!(debug_str.contains("test.toml"));
    }

    #[test]
    fn test_validate_valid_config() {
        let file = write_config(
            r#"
[splitting]
strategy = "parent-child"
chunk_size = 300
overlap_size = 30
"#,
        );

        let args = ValidateArgs {
            config: file.path().to_path_buf(),
        };
        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_overlap_too_large() {
        let file = write_config("[splitting]\nchunk_size = 100\noverlap_size = 100\n");

        let args = ValidateArgs {
            config: file.path().to_path_buf(),
        };
        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("Validation failed"));
    }

    #[test]
    fn test_validate_unknown_format() {
        let file = write_config("[output]\ndefault_format = \"yaml\"\n");

        let args = ValidateArgs {
            config: file.path().to_path_buf(),
        };
        assert!(args.execute().is_err());
    }

    #[test]
    fn test_validate_nonexistent_file() {
        let args = ValidateArgs {
            config: PathBuf::from("/nonexistent/ragsplit.toml"),
        };
        assert!(args.execute().is_err());
    }
}
