//! Reading records from sheet directories and JSON documents

use std::collections::BTreeSet;
use std::fs;

use rstest::*;
use tempfile::TempDir;
use tracing_test::traced_test;

use citation_formatter::{CitationError, Record, RecordKind, SourcesReader};

mod common;
use common::*;

#[rstest]
#[case::book(RecordKind::Book, 4)]
#[case::internet_resource(RecordKind::InternetResource, 3)]
#[case::articles_collection(RecordKind::ArticlesCollection, 1)]
#[case::journal_article(RecordKind::JournalArticle, 1)]
#[case::news_paper(RecordKind::NewsPaper, 1)]
fn test_sheet_counts(#[case] kind: RecordKind, #[case] expected: usize) {
    let reader = SourcesReader::open(sources_dir()).unwrap();
    let records = reader.read_sheet(kind).unwrap();

    assert_eq!(records.len(), expected);
    assert!(records.iter().all(|record| record.kind() == kind));
}

#[rstest]
fn test_book_sheet_matches_fixture(book_model_fixture: citation_formatter::Book) {
    let reader = SourcesReader::open(sources_dir()).unwrap();
    let records = reader.read_sheet(RecordKind::Book).unwrap();

    assert_eq!(records[0], Record::from(book_model_fixture));
    assert_eq!(records[0].fields().len(), 7);
}

#[rstest]
fn test_newspaper_sheet_matches_fixture(newspaper_model_fixture: citation_formatter::NewsPaper) {
    let reader = SourcesReader::open(sources_dir()).unwrap();
    let records = reader.read_sheet(RecordKind::NewsPaper).unwrap();

    assert_eq!(records, vec![Record::from(newspaper_model_fixture)]);
}

#[rstest]
fn test_read_all_sheets() {
    let records = SourcesReader::open(sources_dir()).unwrap().read().unwrap();
    assert_eq!(records.len(), 10);

    let kinds: BTreeSet<RecordKind> = records.iter().map(Record::kind).collect();
    assert_eq!(kinds, RecordKind::ALL.into_iter().collect());

    // Sheets are read in a fixed order, rows in file order
    assert_eq!(records[0].kind(), RecordKind::Book);
    assert_eq!(records[9].kind(), RecordKind::NewsPaper);
}

#[rstest]
fn test_read_json_document() {
    let reader = SourcesReader::open(sources_json()).unwrap();
    let records = reader.read().unwrap();

    let kinds: Vec<RecordKind> = records.iter().map(Record::kind).collect();
    assert_eq!(
        kinds,
        vec![
            RecordKind::Book,
            RecordKind::InternetResource,
            RecordKind::NewsPaper
        ]
    );

    let books = reader.read_sheet(RecordKind::Book).unwrap();
    assert_eq!(books.len(), 1);
}

#[rstest]
#[traced_test]
fn test_missing_sheet_is_skipped() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("internet_resource.csv"),
        "article,website,link,access_date\n\
         Наука как искусство,Ведомости,https://www.vedomosti.ru,01.01.2021\n",
    )
    .unwrap();

    let records = SourcesReader::open(dir.path()).unwrap().read().unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].kind(), RecordKind::InternetResource);
    assert!(logs_contain("Sheet not found, skipping"));
}

#[rstest]
fn test_invalid_row_aborts_read() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("newspaper.csv"),
        "article,authors,news,publishing_year,publishing_date,news_number\n\
         Наука как искусство,Иванов И.М.,Южный Урал,1980,01.10,0\n",
    )
    .unwrap();

    let err = SourcesReader::open(dir.path()).unwrap().read().unwrap_err();
    assert!(matches!(err, CitationError::Csv(_)));
}

#[rstest]
fn test_missing_column_is_an_error() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("journal_article.csv"),
        "authors,article,journal,publishing_year,pages\n\
         Иванов И.М.,Наука,Образование и наука,2020,25-30\n",
    )
    .unwrap();

    let err = SourcesReader::open(dir.path())
        .unwrap()
        .read_sheet(RecordKind::JournalArticle)
        .unwrap_err();
    assert!(matches!(err, CitationError::Csv(_)));
}

#[rstest]
fn test_blank_json_field_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sources.json");
    fs::write(
        &path,
        r#"[{"type": "internet_resource", "article": "Наука", "website": "Ведомости",
             "link": " ", "access_date": "01.01.2021"}]"#,
    )
    .unwrap();

    let err = SourcesReader::open(&path).unwrap().read().unwrap_err();
    assert!(matches!(
        err,
        CitationError::InvalidRecord {
            kind: RecordKind::InternetResource,
            field: "link",
            ..
        }
    ));
}

#[rstest]
fn test_unknown_source_format() {
    let err = SourcesReader::open("tests/test_data/sources.xlsx").unwrap_err();
    assert!(matches!(err, CitationError::UnknownFormat(_)));
}
