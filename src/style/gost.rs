//! GOST R 7.0.5-2008 bibliographic references

use tracing::debug;

use super::RenderFn;
use crate::models::{
    ArticlesCollection, Book, InternetResource, JournalArticle, NewsPaper, Record, RecordKind,
};

pub(crate) static RENDERERS: &[(RecordKind, RenderFn)] = &[
    render_entry!(Book => book),
    render_entry!(InternetResource => internet_resource),
    render_entry!(ArticlesCollection => articles_collection),
    render_entry!(JournalArticle => journal_article),
    render_entry!(NewsPaper => news_paper),
];

/// Edition segment; empty for books without an edition
fn edition(book: &Book) -> String {
    match book.edition.as_deref() {
        Some(edition) if !edition.is_empty() => format!("{edition} изд. – "),
        _ => String::new(),
    }
}

pub fn book(book: &Book) -> String {
    debug!(title = %book.title, "Formatting book");

    format!(
        "{} {}. – {}{}: {}, {}. – {} с.",
        book.authors,
        book.title,
        edition(book),
        book.city,
        book.publishing_house,
        book.year,
        book.pages
    )
}

pub fn internet_resource(resource: &InternetResource) -> String {
    debug!(article = %resource.article, "Formatting internet resource");

    format!(
        "{} // {} URL: {} (дата обращения: {}).",
        resource.article, resource.website, resource.link, resource.access_date
    )
}

pub fn articles_collection(article: &ArticlesCollection) -> String {
    debug!(article = %article.article_title, "Formatting collection article");

    format!(
        "{} {} // {}. – {}: {}, {}. – С. {}.",
        article.authors,
        article.article_title,
        article.collection_title,
        article.city,
        article.publishing_house,
        article.year,
        article.pages
    )
}

pub fn journal_article(article: &JournalArticle) -> String {
    debug!(article = %article.article, "Formatting journal article");

    format!(
        "{} {} // {}. {}. №{}. С. {}",
        article.authors,
        article.article,
        article.journal,
        article.publishing_year,
        article.journal_id,
        article.pages
    )
}

pub fn news_paper(article: &NewsPaper) -> String {
    debug!(article = %article.article, "Formatting newspaper article");

    format!(
        "{} {} // {}. {}. {}. Ст. {}.",
        article.authors,
        article.article,
        article.news,
        article.publishing_year,
        article.publishing_date,
        article.news_number
    )
}
