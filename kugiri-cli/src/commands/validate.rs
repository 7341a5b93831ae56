//! Validate command implementation

use crate::error::CliError;
use crate::CliResult;
use clap::Args;
use kugiri_core::{DictionaryConfig, WordListDictionary};
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the dictionary file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub dictionary: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        println!("Validating dictionary: {}", self.dictionary.display());

        let loaded = DictionaryConfig::from_file(&self.dictionary)
            .and_then(|config| WordListDictionary::from_config(&config));

        match loaded {
            Ok(dictionary) => {
                println!("✓ Dictionary is valid!");
                println!("  Name: {}", dictionary.name());
                println!("  Entries: {}", dictionary.len());
                Ok(())
            }
            Err(e) => {
                println!("✗ Dictionary is invalid!");
                println!("  Error: {e}");
                Err(CliError::DictionaryError(e.to_string()).into())
            }
        }
    }
}
