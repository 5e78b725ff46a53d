//! Joining and persisting rendered bibliographies

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::config::OutputConfig;
use crate::error::Result;
use crate::formatter::CitationFormatter;
use crate::models::Record;

/// Render `records` and join the sorted citations per `config`
pub fn render_bibliography(records: Vec<Record>, config: &OutputConfig) -> String {
    let citations = CitationFormatter::new(config.style, records).citations();
    join_citations(&citations, config)
}

/// Join already sorted citations per `config`
pub fn join_citations(citations: &[String], config: &OutputConfig) -> String {
    let lines: Vec<String> = if config.numbered {
        citations
            .iter()
            .enumerate()
            .map(|(i, citation)| format!("{}. {citation}", i + 1))
            .collect()
    } else {
        citations.to_vec()
    };

    let mut document = lines.join(&config.separator);
    if config.trailing_newline && !document.is_empty() {
        document.push('\n');
    }
    document
}

/// Render `records` and write the bibliography to `out`
pub fn write_bibliography<W: Write>(
    mut out: W,
    records: Vec<Record>,
    config: &OutputConfig,
) -> Result<()> {
    let document = render_bibliography(records, config);
    out.write_all(document.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Render `records` into the file at `path`, replacing any existing content
pub fn save_bibliography(
    path: impl AsRef<Path>,
    records: Vec<Record>,
    config: &OutputConfig,
) -> Result<()> {
    let path = path.as_ref();
    let count = records.len();
    let file = File::create(path)?;
    write_bibliography(BufWriter::new(file), records, config)?;

    info!(
        path = %path.display(),
        records = count,
        style = %config.style,
        "Saved bibliography"
    );
    Ok(())
}
