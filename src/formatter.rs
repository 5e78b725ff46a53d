//! Dispatch of records to style renderers and ordering of the bibliography

use std::cmp::Ordering;
use std::fmt;
use std::sync::OnceLock;

use tracing::{debug, info};

use crate::models::{Record, RecordKind};
use crate::style::{CitationStyle, RenderFn};

/// A record bound to the render function of its kind in one style
///
/// The citation text is computed on the first call to [`Formatter::rendered`]
/// and cached. The cache is a [`OnceLock`], so a shared formatter may be
/// rendered from several threads; every initializer computes the same text.
///
/// Equality and ordering compare rendered text only.
#[derive(Debug)]
pub struct Formatter {
    record: Record,
    render: RenderFn,
    rendered: OnceLock<String>,
}

impl Formatter {
    /// Bind `record` to its renderer in `style`
    ///
    /// Returns `None` when the style has no layout for the record's kind.
    pub fn for_style(record: Record, style: CitationStyle) -> Option<Self> {
        let render = style.renderer(record.kind())?;
        Some(Self {
            record,
            render,
            rendered: OnceLock::new(),
        })
    }

    /// Citation text, rendered at most once
    pub fn rendered(&self) -> &str {
        self.rendered.get_or_init(|| (self.render)(&self.record))
    }

    pub fn record(&self) -> &Record {
        &self.record
    }

    pub fn kind(&self) -> RecordKind {
        self.record.kind()
    }

    pub fn into_record(self) -> Record {
        self.record
    }
}

impl fmt::Display for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rendered())
    }
}

impl PartialEq for Formatter {
    fn eq(&self, other: &Self) -> bool {
        self.rendered() == other.rendered()
    }
}

impl Eq for Formatter {}

impl PartialOrd for Formatter {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Formatter {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rendered().cmp(other.rendered())
    }
}

/// Formats a heterogeneous list of records in one style
///
/// Records whose kind the style does not cover are dropped; this is not an
/// error. [`CitationFormatter::skipped`] reports how many were dropped.
///
/// # Example
///
/// ```
/// use std::num::NonZeroU32;
/// use citation_formatter::{CitationFormatter, CitationStyle, InternetResource, NewsPaper, Record};
///
/// let records: Vec<Record> = vec![
///     InternetResource {
///         article: "Наука как искусство".to_string(),
///         website: "Ведомости".to_string(),
///         link: "https://www.vedomosti.ru".to_string(),
///         access_date: "01.01.2021".to_string(),
///     }
///     .into(),
///     NewsPaper {
///         article: "Наука как искусство".to_string(),
///         authors: "Иванов И.М., Петров С.Н.".to_string(),
///         news: "Южный Урал".to_string(),
///         publishing_year: NonZeroU32::new(1980).unwrap(),
///         publishing_date: "01.10".to_string(),
///         news_number: NonZeroU32::new(5).unwrap(),
///     }
///     .into(),
/// ];
///
/// let formatter = CitationFormatter::new(CitationStyle::Apa, records);
/// assert_eq!(formatter.skipped(), 1);
/// assert_eq!(
///     formatter.citations(),
///     vec!["Иванов И.М., Петров С.Н. (1980, 01.10). Наука как искусство. Южный Урал."]
/// );
/// ```
#[derive(Debug)]
pub struct CitationFormatter {
    style: CitationStyle,
    formatted_items: Vec<Formatter>,
    skipped: usize,
}

impl CitationFormatter {
    /// Dispatch every record to the renderer of its kind in `style`
    pub fn new<I>(style: CitationStyle, records: I) -> Self
    where
        I: IntoIterator<Item = Record>,
    {
        let mut formatted_items = Vec::new();
        let mut skipped = 0;

        for record in records {
            let kind = record.kind();
            match Formatter::for_style(record, style) {
                Some(formatter) => formatted_items.push(formatter),
                None => {
                    debug!(%style, %kind, "Skipping record not covered by style");
                    skipped += 1;
                }
            }
        }

        info!(
            %style,
            formatted = formatted_items.len(),
            skipped,
            "Dispatched records"
        );

        Self {
            style,
            formatted_items,
            skipped,
        }
    }

    pub fn style(&self) -> CitationStyle {
        self.style
    }

    /// Number of records dropped because the style does not cover their kind
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn len(&self) -> usize {
        self.formatted_items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formatted_items.is_empty()
    }

    /// Formatters sorted by rendered text
    ///
    /// Comparison is by code point. The sort is stable, so formatters with
    /// identical text keep their input order.
    pub fn format(&self) -> Vec<&Formatter> {
        let mut items: Vec<&Formatter> = self.formatted_items.iter().collect();
        items.sort_by(|a, b| a.rendered().cmp(b.rendered()));
        items
    }

    /// Rendered citations in [`CitationFormatter::format`] order
    pub fn citations(&self) -> Vec<String> {
        self.format()
            .into_iter()
            .map(|item| item.rendered().to_string())
            .collect()
    }

    /// Consume the formatter, returning owned formatters in sorted order
    pub fn into_sorted(self) -> Vec<Formatter> {
        let mut items = self.formatted_items;
        items.sort_by(|a, b| a.rendered().cmp(b.rendered()));
        items
    }
}
