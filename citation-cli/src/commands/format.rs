use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use citation_formatter::{
    CitationStyle, OutputConfig, SourcesReader, save_bibliography, write_bibliography,
};

#[derive(Args, Debug)]
pub struct Format {
    /// Source: a directory of CSV sheets or a JSON document
    pub input: PathBuf,

    /// Citation style (gost, apa)
    #[arg(short, long, env = "CITATION_STYLE", default_value = "gost")]
    pub style: CitationStyle,

    /// Prefix every citation with its position in the list
    #[arg(short, long)]
    pub numbered: bool,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Format {
    pub fn config(&self) -> OutputConfig {
        OutputConfig::new()
            .with_style(self.style)
            .with_numbering(self.numbered)
    }

    pub fn execute(&self) -> Result<()> {
        let records = SourcesReader::open(&self.input)
            .and_then(|reader| reader.read())
            .with_context(|| format!("Failed to read sources from {}", self.input.display()))?;

        tracing::info!(
            records = records.len(),
            style = %self.style,
            "Formatting bibliography"
        );

        if records.is_empty() {
            tracing::warn!("No records found in {}", self.input.display());
        }

        let config = self.config();
        if let Some(ref output_path) = self.output {
            save_bibliography(output_path, records, &config).with_context(|| {
                format!("Failed to write bibliography to {}", output_path.display())
            })?;
        } else {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_bibliography(&mut handle, records, &config)?;
            handle.flush()?;
        }

        Ok(())
    }
}
