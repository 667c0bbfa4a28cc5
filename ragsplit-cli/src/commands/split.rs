//! Split command implementation

use crate::{
    commands::StrategyArg,
    config::CliConfig,
    error::CliError,
    input::{resolve_patterns, FileReader},
    output::{create_formatter, OutputFormat},
    progress::ProgressReporter,
};
use anyhow::{Context, Result};
use clap::{ArgAction, Args};
use log::{debug, info, warn};
use ragsplit_api::{Config, ExecutionMode, Output, Strategy, TextSplitter};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Arguments for the split command
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Input files or glob patterns
    #[arg(short, long, value_name = "FILE/PATTERN", required = true, num_args = 1..)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: text, or the config file's)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Splitting strategy
    #[arg(short, long, value_enum)]
    pub strategy: Option<StrategyArg>,

    /// Maximum chunk length in characters
    #[arg(long, value_name = "CHARS")]
    pub chunk_size: Option<usize>,

    /// Characters shared between consecutive chunks
    #[arg(long, value_name = "CHARS")]
    pub overlap: Option<usize>,

    /// Comma-separated separators; `\n` and `\t` are unescaped
    #[arg(long, value_name = "LIST", allow_hyphen_values = true)]
    pub separators: Option<String>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "RAGSPLIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Split files and parent blocks in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Number of worker threads (default: number of CPUs)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Print statistics after each document
    #[arg(long)]
    pub stats: bool,

    /// Suppress progress and informational output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Chunks of one input file
#[derive(Debug)]
struct FileResult {
    source: String,
    output: Output,
}

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        let file_config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };

        let config = self.build_config(&file_config)?;
        let format = self.output_format(&file_config)?;
        let files = resolve_patterns(&self.input)?;
        info!(
            "Splitting {} file(s): strategy={}, chunk_size={}, overlap={}",
            files.len(),
            config.strategy(),
            config.chunk_size(),
            config.overlap_size()
        );

        let splitter =
            TextSplitter::with_config(config).map_err(|e| CliError::ConfigError(e.to_string()))?;

        let mut progress = ProgressReporter::new(self.quiet || files.len() < 2);
        progress.init_files(files.len() as u64);

        let results = if self.is_parallel(&file_config) && files.len() > 1 {
            let threads = self
                .threads
                .or_else(|| file_config.threads())
                .unwrap_or_else(num_cpus::get);
            debug!("Splitting files on {threads} threads");

            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .context("Failed to build thread pool")?;
            pool.install(|| {
                files
                    .par_iter()
                    .map(|path| split_file(&splitter, path, &progress))
                    .collect::<Result<Vec<_>>>()
            })?
        } else {
            files
                .iter()
                .map(|path| split_file(&splitter, path, &progress))
                .collect::<Result<Vec<_>>>()?
        };
        progress.finish();

        let include_stats = self.stats || file_config.output.include_stats;
        self.write_results(format, file_config.output.pretty_json, include_stats, &results)?;

        let total: usize = results.iter().map(|r| r.output.len()).sum();
        info!("Wrote {total} chunks from {} file(s)", results.len());
        Ok(())
    }

    fn is_parallel(&self, file_config: &CliConfig) -> bool {
        self.parallel || file_config.performance.parallel
    }

    /// Merge command-line overrides into the file configuration
    fn build_config(&self, file_config: &CliConfig) -> Result<Config> {
        let splitting = &file_config.splitting;

        let strategy = match self.strategy {
            Some(arg) => Strategy::from(arg),
            None => splitting
                .strategy
                .parse::<Strategy>()
                .map_err(|e| CliError::ConfigError(e.to_string()))?,
        };
        let mode = if self.is_parallel(file_config) {
            ExecutionMode::Parallel
        } else {
            ExecutionMode::Adaptive
        };

        let builder = Config::builder()
            .strategy(strategy)
            .chunk_size(self.chunk_size.unwrap_or(splitting.chunk_size))
            .overlap_size(self.overlap.unwrap_or(splitting.overlap_size))
            .threads(self.threads.or_else(|| file_config.threads()))
            .execution_mode(mode);

        let builder = match &self.separators {
            Some(list) => builder.raw_separators(list),
            None => builder.separators(splitting.separators.iter().cloned()),
        };

        let config = builder
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(config)
    }

    fn output_format(&self, file_config: &CliConfig) -> Result<OutputFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }

        let name = &file_config.output.default_format;
        OutputFormat::from_name(name).ok_or_else(|| {
            CliError::ConfigError(format!("unknown output format '{name}'")).into()
        })
    }

    fn write_results(
        &self,
        format: OutputFormat,
        pretty_json: bool,
        include_stats: bool,
        results: &[FileResult],
    ) -> Result<()> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };

        let mut formatter = create_formatter(format, writer, pretty_json);
        for result in results {
            formatter.begin_document(&result.source)?;
            for chunk in &result.output.chunks {
                formatter.format_chunk(chunk)?;
            }
            if include_stats {
                formatter.format_stats(&result.output.stats)?;
            }
        }
        formatter.finish()
    }

    fn init_logging(&self) {
        let level = if self.quiet {
            log::LevelFilter::Error
        } else {
            match self.verbose {
                0 => log::LevelFilter::Warn,
                1 => log::LevelFilter::Info,
                2 => log::LevelFilter::Debug,
                _ => log::LevelFilter::Trace,
            }
        };

        // A logger may already be installed when running in-process
        let _ = env_logger::Builder::new()
            .filter_level(level)
            .format_timestamp(None)
            .try_init();
    }
}

fn split_file(splitter: &TextSplitter, path: &Path, progress: &ProgressReporter) -> Result<FileResult> {
    let source = path.display().to_string();
    debug!("Reading {source} ({} bytes)", FileReader::file_size(path)?);

    let text = FileReader::read_text(path)?;
    let output = splitter
        .process_text(&text)
        .map_err(|e| CliError::SplitError(format!("{source}: {e}")))?;

    if output.metadata.offset_misses > 0 {
        warn!(
            "{source}: {} chunk(s) could not be located in the source",
            output.metadata.offset_misses
        );
    }
    debug!(
        "{source}: {} chunks in {:.2} ms ({})",
        output.len(),
        output.metadata.processing_time_ms,
        output.metadata.mode_used
    );

    progress.file_completed(&source, output.len());
    Ok(FileResult { source, output })
}
