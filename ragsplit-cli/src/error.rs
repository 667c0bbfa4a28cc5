//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// No file matched the given patterns
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Splitting failed for an input
    SplitError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::SplitError(msg) => write!(f, "Split error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            CliError::FileNotFound("*.txt".to_string()).to_string(),
            "File not found: *.txt"
        );
        assert_eq!(
            CliError::InvalidPattern("[invalid".to_string()).to_string(),
            "Invalid file pattern: [invalid"
        );
        assert_eq!(
            CliError::ConfigError("overlap too large".to_string()).to_string(),
            "Configuration error: overlap too large"
        );
        assert_eq!(
            CliError::SplitError("notes.txt".to_string()).to_string(),
            "Split error: notes.txt"
        );
    }

    #[test]
    fn test_downcast_through_anyhow() {
        let result: CliResult<()> = Err(CliError::ConfigError("bad".to_string()).into());
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::ConfigError(_))
        ));
    }

    #[test]
    fn test_error_with_special_characters() {
        let error = CliError::FileNotFound("ファイル/test 文件.txt".to_string());
        assert_eq!(error.to_string(), "File not found: ファイル/test 文件.txt");
    }
}
