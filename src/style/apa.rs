//! American Psychological Association references
//!
//! Only books and newspaper articles have an APA layout; other kinds are left
//! out of the table and dropped when formatting in this style.

use tracing::debug;

use super::RenderFn;
use crate::models::{Book, NewsPaper, Record, RecordKind};

pub(crate) static RENDERERS: &[(RecordKind, RenderFn)] = &[
    render_entry!(Book => book),
    render_entry!(NewsPaper => news_paper),
];

/// Edition and page count have no place in the APA book layout.
pub fn book(book: &Book) -> String {
    debug!(title = %book.title, "Formatting book");

    format!(
        "{} ({}). {}. {}.",
        book.authors, book.year, book.title, book.publishing_house
    )
}

pub fn news_paper(article: &NewsPaper) -> String {
    debug!(article = %article.article, "Formatting newspaper article");

    format!(
        "{} ({}, {}). {}. {}.",
        article.authors,
        article.publishing_year,
        article.publishing_date,
        article.article,
        article.news
    )
}
