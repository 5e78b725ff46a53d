//! Reading bibliographic records from tabular sources
//!
//! A source is either a directory acting as a workbook, with one CSV sheet per
//! record kind (see [`RecordKind::sheet_name`]), or a JSON document holding an
//! array of records tagged by `"type"`. Every record is validated before it is
//! returned, so callers only ever see valid records.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use csv::{Reader as CsvReader, ReaderBuilder, Trim};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{CitationError, Result};
use crate::models::{
    ArticlesCollection, Book, InternetResource, JournalArticle, NewsPaper, Record, RecordKind,
};

#[derive(Debug, Clone)]
enum Source {
    Sheets(PathBuf),
    Json(PathBuf),
}

/// Reader over all sheets of a source
#[derive(Debug, Clone)]
pub struct SourcesReader {
    source: Source,
}

impl SourcesReader {
    /// Open a sheet directory or a `.json` document
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let source = if path.is_dir() {
            Source::Sheets(path.to_path_buf())
        } else if path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
        {
            Source::Json(path.to_path_buf())
        } else {
            return Err(CitationError::UnknownFormat(path.display().to_string()));
        };

        Ok(Self { source })
    }

    /// Read every record, sheet by sheet in [`RecordKind::ALL`] order
    pub fn read(&self) -> Result<Vec<Record>> {
        match &self.source {
            Source::Sheets(_) => {
                let mut records = Vec::new();
                for kind in RecordKind::ALL {
                    records.extend(self.read_sheet(kind)?);
                }
                Ok(records)
            }
            Source::Json(path) => parse_json(BufReader::new(File::open(path)?)),
        }
    }

    /// Read the records of a single kind
    ///
    /// A missing sheet yields no records.
    pub fn read_sheet(&self, kind: RecordKind) -> Result<Vec<Record>> {
        match &self.source {
            Source::Sheets(dir) => {
                let path = dir.join(kind.sheet_name());
                if !path.exists() {
                    warn!(sheet = kind.sheet_name(), "Sheet not found, skipping");
                    return Ok(Vec::new());
                }
                parse_sheet(kind, File::open(&path)?)
            }
            Source::Json(path) => Ok(parse_json(BufReader::new(File::open(path)?))?
                .into_iter()
                .filter(|record| record.kind() == kind)
                .collect()),
        }
    }
}

/// Parse one CSV sheet of `kind` records
///
/// The first row names the columns. Surrounding whitespace is trimmed and an
/// empty edition cell reads as no edition.
pub fn parse_sheet<R: Read>(kind: RecordKind, input: R) -> Result<Vec<Record>> {
    let reader = ReaderBuilder::new().trim(Trim::All).from_reader(input);

    let records = match kind {
        RecordKind::Book => parse_rows::<Book, R>(reader)?,
        RecordKind::InternetResource => parse_rows::<InternetResource, R>(reader)?,
        RecordKind::ArticlesCollection => parse_rows::<ArticlesCollection, R>(reader)?,
        RecordKind::JournalArticle => parse_rows::<JournalArticle, R>(reader)?,
        RecordKind::NewsPaper => parse_rows::<NewsPaper, R>(reader)?,
    };

    debug!(sheet = kind.sheet_name(), records = records.len(), "Read sheet");
    Ok(records)
}

fn parse_rows<T, R>(mut reader: CsvReader<R>) -> Result<Vec<Record>>
where
    T: DeserializeOwned + Into<Record>,
    R: Read,
{
    let mut records = Vec::new();
    for row in reader.deserialize::<T>() {
        let record: Record = row?.into();
        record.validate()?;
        records.push(record);
    }
    Ok(records)
}

/// Parse a JSON array of `"type"`-tagged records
pub fn parse_json<R: Read>(input: R) -> Result<Vec<Record>> {
    let records: Vec<Record> = serde_json::from_reader(input)?;
    for record in &records {
        record.validate()?;
    }

    debug!(records = records.len(), "Read JSON document");
    Ok(records)
}
