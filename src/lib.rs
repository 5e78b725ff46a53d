#![deny(
    clippy::panic,
    clippy::absolute_paths,
    clippy::print_stderr,
    clippy::print_stdout
)]

//! # Citation Formatter
//!
//! Renders bibliographic records as citation strings in a selectable style and
//! assembles them into a sorted bibliography.
//!
//! ## Features
//!
//! - **Record Types**: books, internet resources, articles from collections,
//!   journal articles and newspaper articles
//! - **Citation Styles**: GOST R 7.0.5-2008 and APA
//! - **Deterministic Ordering**: bibliographies are sorted by rendered text
//! - **Tabular Input**: records are read from CSV sheets or a JSON document
//!
//! ## Quick Start
//!
//! ```
//! use std::num::NonZeroU32;
//! use citation_formatter::{Book, CitationFormatter, CitationStyle, Record};
//!
//! let book = Book {
//!     authors: "Иванов И.М., Петров С.Н.".to_string(),
//!     title: "Наука как искусство".to_string(),
//!     edition: Some("3-е".to_string()),
//!     city: "СПб.".to_string(),
//!     publishing_house: "Просвещение".to_string(),
//!     year: NonZeroU32::new(2020).unwrap(),
//!     pages: NonZeroU32::new(999).unwrap(),
//! };
//!
//! let formatter = CitationFormatter::new(CitationStyle::Gost, vec![Record::from(book)]);
//! assert_eq!(
//!     formatter.citations(),
//!     vec!["Иванов И.М., Петров С.Н. Наука как искусство. – 3-е изд. – СПб.: Просвещение, 2020. – 999 с."]
//! );
//! ```
//!
//! ### Reading and Writing a Bibliography
//!
//! ```no_run
//! use citation_formatter::{CitationStyle, OutputConfig, SourcesReader, save_bibliography};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let records = SourcesReader::open("sources/")?.read()?;
//!     let config = OutputConfig::new().with_style(CitationStyle::Apa);
//!
//!     save_bibliography("bibliography.txt", records, &config)?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod formatter;
pub mod models;
pub mod reader;
pub mod style;
pub mod writer;

// Re-export main types for convenience
pub use config::OutputConfig;
pub use error::{CitationError, Result};
pub use formatter::{CitationFormatter, Formatter};
pub use models::{
    ArticlesCollection, Book, InternetResource, JournalArticle, NewsPaper, Record, RecordKind,
};
pub use reader::SourcesReader;
pub use style::{CitationStyle, RenderFn};
pub use writer::{render_bibliography, save_bibliography, write_bibliography};
