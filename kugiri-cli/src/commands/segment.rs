//! Segment command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{create_formatter, OutputFormat, OutputWriter};
use crate::progress::ProgressReporter;
use crate::CliResult;
use anyhow::Context;
use clap::{Args, ValueEnum};
use kugiri_core::{CjkBreakEngine, DictionarySource, WordBreaker};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

/// Arguments for the segment command
#[derive(Debug, Args)]
pub struct SegmentArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: text, or the config file's choice)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Segment Hangul instead of Han, Katakana and Hiragana
    #[arg(short, long)]
    pub korean: bool,

    /// Dictionary file to use instead of the built-in one
    #[arg(short, long, value_name = "FILE")]
    pub dictionary: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Segment files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Settings after merging arguments over the config file
#[derive(Debug, PartialEq, Eq)]
struct Settings {
    korean: bool,
    source: DictionarySource,
    format: OutputFormat,
    pretty_json: bool,
}

/// Boundaries found in one input file
struct FileSegments {
    content: String,
    boundaries: Vec<usize>,
}

impl SegmentArgs {
    /// Execute the segment command
    pub fn execute(&self) -> CliResult<()> {
        self.init_logging();

        log::info!("Starting word segmentation");
        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };
        let settings = self.settings(&config)?;

        let engine = CjkBreakEngine::new(settings.korean, &settings.source)
            .map_err(|e| CliError::DictionaryError(e.to_string()))?;
        log::info!(
            "Using {} dictionary for {:?}",
            settings.source.display_name(),
            engine.variant()
        );
        let breaker = WordBreaker::new(engine);

        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} file(s) to segment", files.len());

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let segmented: Vec<FileSegments> = if self.parallel {
            files
                .par_iter()
                .map(|path| segment_file(&breaker, path, &progress))
                .collect::<CliResult<_>>()?
        } else {
            files
                .iter()
                .map(|path| segment_file(&breaker, path, &progress))
                .collect::<CliResult<_>>()?
        };
        progress.finish();

        let writer: OutputWriter = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };
        let mut formatter = create_formatter(settings.format, writer, settings.pretty_json);

        for file in &segmented {
            for window in file.boundaries.windows(2) {
                let word = &file.content[window[0]..window[1]];
                if word.trim().is_empty() {
                    continue;
                }
                formatter.format_word(word, window[0])?;
            }
        }
        formatter.finish()?;

        log::info!("Segmentation complete");
        Ok(())
    }

    /// Merge command-line arguments over the config file
    fn settings(&self, config: &CliConfig) -> CliResult<Settings> {
        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_str(&config.output.default_format, true).map_err(|_| {
                CliError::ConfigError(format!(
                    "unknown output format '{}'",
                    config.output.default_format
                ))
            })?,
        };

        let source = match self
            .dictionary
            .as_ref()
            .or(config.segmentation.dictionary.as_ref())
        {
            Some(path) => DictionarySource::File(path.clone()),
            None => DictionarySource::Embedded,
        };

        Ok(Settings {
            korean: self.korean || config.segmentation.korean,
            source,
            format,
            pretty_json: config.output.pretty_json,
        })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

fn segment_file(
    breaker: &WordBreaker,
    path: &Path,
    progress: &ProgressReporter,
) -> CliResult<FileSegments> {
    let content = FileReader::read_text(path)?;
    let boundaries = breaker.boundaries(&content);
    log::debug!(
        "{}: {} bytes, {} boundaries",
        path.display(),
        content.len(),
        boundaries.len()
    );
    progress.file_completed(&path.display().to_string());
    Ok(FileSegments {
        content,
        boundaries,
    })
}
