//! Generate dictionary command implementation

use crate::CliResult;
use anyhow::Context;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-dictionary command
#[derive(Debug, Args)]
pub struct GenerateDictionaryArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Name recorded in the dictionary metadata
    #[arg(short, long, value_name = "NAME", default_value = "custom")]
    pub name: String,
}

impl GenerateDictionaryArgs {
    /// Execute the generate-dictionary command
    pub fn execute(&self) -> CliResult<()> {
        use std::fs;

        println!("Generating dictionary template...");
        println!("  Name: {}", self.name);
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, self.generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Dictionary template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Add your words and their costs");
        println!("2. Validate your dictionary:");
        println!("   kugiri validate --dictionary {}", self.output.display());
        println!("3. Use it for segmentation:");
        println!(
            "   kugiri segment -i input.txt --dictionary {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template dictionary content
    fn generate_template(&self) -> String {
        format!(
            r#"# Word dictionary for kugiri

[metadata]
name = {name:?}
description = "Custom word list"

# One entry per word. Lower costs are preferred when several
# segmentations are possible. A character with no entry of its own
# costs 255, so single-character words should stay below that.
# Words may be at most 20 characters long.

[[words]]
text = "東京"
cost = 80

[[words]]
text = "学生"
cost = 80

[[words]]
text = "は"
cost = 30

# Add more words as needed:
# [[words]]
# text = "コンピュータ"
# cost = 100
"#,
            name = self.name
        )
    }
}
