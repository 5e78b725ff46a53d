//! Bibliographic record types
//!
//! Every source kind is a plain data struct. Numeric constraints (`> 0`) are
//! carried by [`NonZeroU32`], so a zero year or page count cannot be built or
//! deserialized. Presence of required text is checked by [`Record::validate`].

use std::fmt;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::error::{CitationError, Result};

/// Book
///
/// ```
/// use std::num::NonZeroU32;
/// use citation_formatter::Book;
///
/// let book = Book {
///     authors: "Иванов И.М., Петров С.Н.".to_string(),
///     title: "Наука как искусство".to_string(),
///     edition: Some("3-е".to_string()),
///     city: "СПб.".to_string(),
///     publishing_house: "Просвещение".to_string(),
///     year: NonZeroU32::new(2020).unwrap(),
///     pages: NonZeroU32::new(999).unwrap(),
/// };
/// assert_eq!(book.year.get(), 2020);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub authors: String,
    pub title: String,
    /// Edition label such as `"3-е"`; absent for first editions
    #[serde(default)]
    pub edition: Option<String>,
    pub city: String,
    pub publishing_house: String,
    pub year: NonZeroU32,
    pub pages: NonZeroU32,
}

/// Internet resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternetResource {
    pub article: String,
    pub website: String,
    pub link: String,
    pub access_date: String,
}

/// Article published in a collection of articles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticlesCollection {
    pub authors: String,
    pub article_title: String,
    pub collection_title: String,
    pub city: String,
    pub publishing_house: String,
    pub year: NonZeroU32,
    /// Page range, e.g. `"25-30"`
    pub pages: String,
}

/// Journal article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalArticle {
    pub authors: String,
    pub article: String,
    pub journal: String,
    /// Issue number of the journal
    pub journal_id: String,
    pub publishing_year: NonZeroU32,
    /// Page range, e.g. `"25-30"`
    pub pages: String,
}

/// Newspaper article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsPaper {
    pub article: String,
    pub authors: String,
    pub news: String,
    pub publishing_year: NonZeroU32,
    /// Day and month of publication, e.g. `"01.10"`
    pub publishing_date: String,
    pub news_number: NonZeroU32,
}

/// Tag identifying the concrete variant of a [`Record`]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Book,
    InternetResource,
    ArticlesCollection,
    JournalArticle,
    NewsPaper,
}

impl RecordKind {
    /// All kinds, in the order sources are read
    pub const ALL: [RecordKind; 5] = [
        RecordKind::Book,
        RecordKind::InternetResource,
        RecordKind::ArticlesCollection,
        RecordKind::JournalArticle,
        RecordKind::NewsPaper,
    ];

    /// Field names of this kind, in declaration order
    pub fn field_names(self) -> &'static [&'static str] {
        match self {
            RecordKind::Book => &[
                "authors",
                "title",
                "edition",
                "city",
                "publishing_house",
                "year",
                "pages",
            ],
            RecordKind::InternetResource => &["article", "website", "link", "access_date"],
            RecordKind::ArticlesCollection => &[
                "authors",
                "article_title",
                "collection_title",
                "city",
                "publishing_house",
                "year",
                "pages",
            ],
            RecordKind::JournalArticle => &[
                "authors",
                "article",
                "journal",
                "journal_id",
                "publishing_year",
                "pages",
            ],
            RecordKind::NewsPaper => &[
                "article",
                "authors",
                "news",
                "publishing_year",
                "publishing_date",
                "news_number",
            ],
        }
    }

    /// File name of the CSV sheet holding records of this kind
    pub fn sheet_name(self) -> &'static str {
        match self {
            RecordKind::Book => "book.csv",
            RecordKind::InternetResource => "internet_resource.csv",
            RecordKind::ArticlesCollection => "articles_collection.csv",
            RecordKind::JournalArticle => "journal_article.csv",
            RecordKind::NewsPaper => "newspaper.csv",
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            RecordKind::Book => "book",
            RecordKind::InternetResource => "internet_resource",
            RecordKind::ArticlesCollection => "articles_collection",
            RecordKind::JournalArticle => "journal_article",
            RecordKind::NewsPaper => "news_paper",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One bibliographic record of any supported kind
///
/// In JSON the variant is selected by a `"type"` key holding the snake_case
/// kind name (`"book"`, `"news_paper"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Record {
    Book(Book),
    InternetResource(InternetResource),
    ArticlesCollection(ArticlesCollection),
    JournalArticle(JournalArticle),
    NewsPaper(NewsPaper),
}

impl Record {
    /// Variant tag of this record
    pub fn kind(&self) -> RecordKind {
        match self {
            Record::Book(_) => RecordKind::Book,
            Record::InternetResource(_) => RecordKind::InternetResource,
            Record::ArticlesCollection(_) => RecordKind::ArticlesCollection,
            Record::JournalArticle(_) => RecordKind::JournalArticle,
            Record::NewsPaper(_) => RecordKind::NewsPaper,
        }
    }

    /// Check that every required text field carries a value
    pub fn validate(&self) -> Result<()> {
        let kind = self.kind();
        for (field, value) in self.fields() {
            if field == "edition" {
                continue;
            }
            if value.trim().is_empty() {
                return Err(CitationError::InvalidRecord {
                    kind,
                    field,
                    reason: "must not be blank".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Named field values in declaration order
    ///
    /// Numbers are rendered base-10; a missing edition is an empty string.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let values = match self {
            Record::Book(b) => vec![
                b.authors.clone(),
                b.title.clone(),
                b.edition.clone().unwrap_or_default(),
                b.city.clone(),
                b.publishing_house.clone(),
                b.year.to_string(),
                b.pages.to_string(),
            ],
            Record::InternetResource(r) => vec![
                r.article.clone(),
                r.website.clone(),
                r.link.clone(),
                r.access_date.clone(),
            ],
            Record::ArticlesCollection(a) => vec![
                a.authors.clone(),
                a.article_title.clone(),
                a.collection_title.clone(),
                a.city.clone(),
                a.publishing_house.clone(),
                a.year.to_string(),
                a.pages.clone(),
            ],
            Record::JournalArticle(j) => vec![
                j.authors.clone(),
                j.article.clone(),
                j.journal.clone(),
                j.journal_id.clone(),
                j.publishing_year.to_string(),
                j.pages.clone(),
            ],
            Record::NewsPaper(n) => vec![
                n.article.clone(),
                n.authors.clone(),
                n.news.clone(),
                n.publishing_year.to_string(),
                n.publishing_date.clone(),
                n.news_number.to_string(),
            ],
        };

        self.kind()
            .field_names()
            .iter()
            .copied()
            .zip(values)
            .collect()
    }
}

impl From<Book> for Record {
    fn from(book: Book) -> Self {
        Record::Book(book)
    }
}

impl From<InternetResource> for Record {
    fn from(resource: InternetResource) -> Self {
        Record::InternetResource(resource)
    }
}

impl From<ArticlesCollection> for Record {
    fn from(article: ArticlesCollection) -> Self {
        Record::ArticlesCollection(article)
    }
}

impl From<JournalArticle> for Record {
    fn from(article: JournalArticle) -> Self {
        Record::JournalArticle(article)
    }
}

impl From<NewsPaper> for Record {
    fn from(article: NewsPaper) -> Self {
        Record::NewsPaper(article)
    }
}
