//! Integration tests for the streaming dump reader.

use std::io::Write;

use bzip2::Compression;
use bzip2::write::BzEncoder;
use chrono::{DateTime, TimeZone, Utc};
use tempfile::NamedTempFile;
use wikistem::dump::{Article, DumpReader};
use wikistem::error::WikistemError;

fn write_plain(xml: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".xml").tempfile().unwrap();
    file.write_all(xml.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn bz2_bytes(xml: &str) -> Vec<u8> {
    let mut encoder = BzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(xml.as_bytes()).unwrap();
    encoder.finish().unwrap()
}

fn write_bz2(xml: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".bz2").tempfile().unwrap();
    file.write_all(&bz2_bytes(xml)).unwrap();
    file.flush().unwrap();
    file
}

fn read_all(file: &NamedTempFile) -> Vec<Article> {
    DumpReader::open(file.path())
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap()
}

const DOG_PAGE: &str = r#"<mediawiki>
  <page>
    <title>Dog</title>
    <ns>0</ns>
    <id>481</id>
    <revision>
      <id>1089</id>
      <timestamp>2023-05-17T12:30:00Z</timestamp>
      <text>The '''dog''' is a [[mammal|furry animal]].</text>
    </revision>
  </page>
</mediawiki>"#;

#[test]
fn reads_article_from_bz2_dump() {
    let file = write_bz2(DOG_PAGE);
    let articles = read_all(&file);

    assert_eq!(articles.len(), 1);
    let article = &articles[0];
    assert_eq!(article.id, 481);
    assert_eq!(article.title, "Dog");
    assert_eq!(article.content, "The '''dog''' is a furry animal.");
    assert_eq!(
        article.last_modified,
        Utc.with_ymd_and_hms(2023, 5, 17, 12, 30, 0).unwrap()
    );
}

#[test]
fn reads_article_from_plain_xml() {
    let file = write_plain(DOG_PAGE);
    let articles = read_all(&file);

    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].title, "Dog");
}

#[test]
fn revision_id_does_not_clobber_page_id() {
    // The revision-scoped <id> comes after the page <id> in DOG_PAGE.
    let file = write_plain(DOG_PAGE);
    assert_eq!(read_all(&file)[0].id, 481);
}

#[test]
fn first_nonzero_id_wins() {
    let xml = r#"<mediawiki><page>
        <title>Cat</title>
        <id>0</id>
        <id>481</id>
        <id>777</id>
        <text>A cat.</text>
    </page></mediawiki>"#;
    let file = write_plain(xml);
    assert_eq!(read_all(&file)[0].id, 481);
}

#[test]
fn redirect_pages_are_skipped() {
    let xml = r#"<mediawiki><page>
        <title>Puppy</title>
        <redirect title="Dog"/>
        <id>9</id>
        <text>#REDIRECT [[Dog]]</text>
    </page></mediawiki>"#;
    let file = write_plain(xml);
    assert!(read_all(&file).is_empty());
}

#[test]
fn colon_titles_are_skipped() {
    let xml = r#"<mediawiki><page>
        <title>Talk:Foo</title>
        <id>12</id>
        <text>Discussion.</text>
    </page></mediawiki>"#;
    let file = write_plain(xml);
    assert!(read_all(&file).is_empty());
}

#[test]
fn whitespace_bodies_are_skipped() {
    let xml = r#"<mediawiki><page>
        <title>Empty</title>
        <id>13</id>
        <text>
        </text>
    </page></mediawiki>"#;
    let file = write_plain(xml);
    assert!(read_all(&file).is_empty());
}

#[test]
fn body_empty_after_cleansing_is_skipped() {
    // The body is pure markup; nothing survives the cleanser.
    let xml = r#"<mediawiki><page>
        <title>Templates</title>
        <id>14</id>
        <text>{{stub}} == ==</text>
    </page></mediawiki>"#;
    let file = write_plain(xml);
    assert!(read_all(&file).is_empty());
}

#[test]
fn last_seen_field_value_wins() {
    let xml = r#"<mediawiki><page>
        <title>Old</title>
        <title>New</title>
        <id>21</id>
        <text>first body</text>
        <text>second body</text>
    </page></mediawiki>"#;
    let file = write_plain(xml);
    let articles = read_all(&file);

    assert_eq!(articles[0].title, "New");
    assert_eq!(articles[0].content, "second body");
}

#[test]
fn missing_timestamp_defaults_to_minimum() {
    let xml = r#"<mediawiki><page>
        <title>Cat</title>
        <id>7</id>
        <text>A cat.</text>
    </page></mediawiki>"#;
    let file = write_plain(xml);
    assert_eq!(read_all(&file)[0].last_modified, DateTime::<Utc>::MIN_UTC);
}

#[test]
fn skipped_pages_are_invisible_in_sequence() {
    let xml = r#"<mediawiki>
      <page><title>Talk:Skip</title><id>1</id><text>x</text></page>
      <page><title>Alpha</title><id>2</id><text>alpha body</text></page>
      <page><title>Beta</title><redirect/><id>3</id><text>beta</text></page>
      <page><title>Gamma</title><id>4</id><text>gamma body</text></page>
    </mediawiki>"#;
    let file = write_plain(xml);
    let titles: Vec<_> = read_all(&file).into_iter().map(|a| a.title).collect();

    assert_eq!(titles, vec!["Alpha", "Gamma"]);
}

#[test]
fn bad_timestamp_is_fatal_and_fuses_the_iterator() {
    let xml = r#"<mediawiki>
      <page>
        <title>Bad</title>
        <id>5</id>
        <timestamp>yesterday</timestamp>
        <text>body</text>
      </page>
      <page><title>After</title><id>6</id><text>more body</text></page>
    </mediawiki>"#;
    let file = write_plain(xml);
    let mut reader = DumpReader::open(file.path()).unwrap();

    let err = reader.next().unwrap().unwrap_err();
    assert!(matches!(err, WikistemError::Format(_)));
    // No per-page recovery: the run is over.
    assert!(reader.next().is_none());
}

#[test]
fn truncated_input_inside_page_is_a_parse_error() {
    let xml = "<mediawiki><page><title>Cut</title><id>8</id>";
    let file = write_plain(xml);
    let mut reader = DumpReader::open(file.path()).unwrap();

    let err = reader.next().unwrap().unwrap_err();
    assert!(matches!(err, WikistemError::Parse(_)));
    assert!(reader.next().is_none());
}

#[test]
fn corrupt_bz2_stream_is_an_error() {
    let mut bytes = bz2_bytes(DOG_PAGE);
    bytes.truncate(bytes.len() / 2);
    let mut file = tempfile::Builder::new().suffix(".bz2").tempfile().unwrap();
    file.write_all(&bytes).unwrap();
    file.flush().unwrap();

    let result: Result<Vec<_>, _> = DumpReader::open(file.path()).unwrap().collect();
    assert!(result.is_err());
}

#[test]
fn early_abandonment_releases_the_reader() {
    let xml = r#"<mediawiki>
      <page><title>One</title><id>1</id><text>first</text></page>
      <page><title>Two</title><id>2</id><text>second</text></page>
    </mediawiki>"#;
    let file = write_plain(xml);
    let mut reader = DumpReader::open(file.path()).unwrap();

    let first = reader.next().unwrap().unwrap();
    assert_eq!(first.title, "One");
    drop(reader); // remaining pages never materialize
}
