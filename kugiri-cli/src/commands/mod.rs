//! CLI command implementations

use crate::CliResult;
use clap::Subcommand;

pub mod generate_dictionary;
pub mod segment;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split text files into words
    Segment(segment::SegmentArgs),

    /// Check a dictionary file for errors
    Validate(validate::ValidateArgs),

    /// Write a template dictionary file
    GenerateDictionary(generate_dictionary::GenerateDictionaryArgs),
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> CliResult<()> {
        match self {
            Commands::Segment(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateDictionary(args) => args.execute(),
        }
    }
}
