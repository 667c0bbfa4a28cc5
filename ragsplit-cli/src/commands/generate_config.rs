//! Generate config command implementation

use crate::commands::StrategyArg;
use anyhow::{bail, Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Strategy to preset in the template
    #[arg(short, long, value_enum, default_value = "recursive")]
    pub strategy: StrategyArg,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        if self.output.exists() && !self.force {
            bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, self.generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the file to tune chunk size, overlap and separators");
        println!("2. Validate your configuration:");
        println!("   ragsplit validate -c {}", self.output.display());
        println!("3. Use it for splitting:");
        println!("   ragsplit split -i input.txt -c {}", self.output.display());

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        let (strategy, separators) = match self.strategy {
            StrategyArg::Fixed => ("fixed", r#"["\n\n"]"#),
            StrategyArg::Recursive => ("recursive", r#"["\n\n", "\n", " ", ""]"#),
            StrategyArg::ParentChild => ("parent-child", r#"["\n\n", "\n", " ", ""]"#),
        };

        format!(
            r#"# ragsplit configuration

[splitting]
# fixed, recursive or parent-child
strategy = "{strategy}"

# Maximum chunk length in characters
chunk_size = 500

# Characters repeated between consecutive chunks, below chunk_size
overlap_size = 50

# Tried in order, coarsest first. "" splits between characters.
# The fixed strategy only uses the first entry.
separators = {separators}

[output]
# text, json or markdown
default_format = "text"

# Append chunk statistics after each document
include_stats = false

pretty_json = true

[performance]
# Split files and parent blocks on a thread pool
parallel = false

# 0 = one thread per CPU
worker_threads = 0
"#
        )
    }
}
