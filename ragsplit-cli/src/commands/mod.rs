//! CLI command implementations

use crate::output::OutputFormat;
use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use ragsplit_api::Strategy;

pub mod generate_config;
pub mod split;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split text files into chunks
    Split(split::SplitArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Check a configuration file
    Validate(validate::ValidateArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List splitting strategies
    Strategies,

    /// List available output formats
    Formats,
}

/// Strategy names accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Split on one separator
    Fixed,
    /// Separator hierarchy from paragraphs to characters
    Recursive,
    /// Large parent blocks split into small children
    ParentChild,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Fixed => Strategy::Fixed,
            StrategyArg::Recursive => Strategy::Recursive,
            StrategyArg::ParentChild => Strategy::ParentChild,
        }
    }
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Split(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute();
                Ok(())
            }
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}

impl ListCommands {
    fn execute(&self) {
        match self {
            ListCommands::Strategies => {
                println!("Available strategies:");
                for strategy in Strategy::ALL {
                    println!("  {:<14} {}", strategy.as_str(), strategy.description());
                }
            }
            ListCommands::Formats => {
                println!("Available output formats:");
                for format in OutputFormat::value_variants() {
                    if let Some(value) = format.to_possible_value() {
                        let help = value.get_help().map(ToString::to_string).unwrap_or_default();
                        println!("  {:<10} {}", value.get_name(), help);
                    }
                }
            }
        }
    }
}
