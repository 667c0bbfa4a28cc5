//! File pattern resolution using glob

use crate::error::CliError;
use anyhow::Result;
use glob::glob;
use std::path::PathBuf;

/// Resolve file patterns to existing files, sorted and deduplicated
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let paths = glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;

        for path in paths.flatten() {
            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        return Err(CliError::FileNotFound(patterns.join(", ")).into());
    }

    files.sort();
    files.dedup();

    Ok(files)
}
