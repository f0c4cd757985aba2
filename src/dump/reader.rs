//! Streaming reader for compressed MediaWiki XML dumps.
//!
//! Decompression and XML parsing are both streaming: memory use is bounded
//! by one page subtree, never the size of the dump. The reader is a lazy,
//! forward-only, single-pass iterator; dropping it mid-stream releases the
//! underlying file and decompression handles.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use bzip2::read::BzDecoder;
use chrono::{DateTime, Utc};
use quick_xml::Reader;
use quick_xml::events::Event;
use tracing::debug;

use super::article::Article;
use super::wikitext::WikiTextCleanser;
use crate::error::{Result, WikistemError};

/// XML event source behind the decompression layer in use.
enum XmlSource {
    /// Bzip2-compressed dump
    Bzip2(Reader<BufReader<BzDecoder<File>>>),
    /// Uncompressed XML
    Plain(Reader<BufReader<File>>),
}

impl XmlSource {
    fn read_event<'a>(
        &mut self,
        buf: &'a mut Vec<u8>,
    ) -> std::result::Result<Event<'a>, quick_xml::Error> {
        buf.clear();
        match self {
            XmlSource::Bzip2(reader) => reader.read_event_into(buf),
            XmlSource::Plain(reader) => reader.read_event_into(buf),
        }
    }
}

/// Fields accumulated while reading one `<page>` subtree.
///
/// Elements may appear in any order and more than once. Later values
/// overwrite earlier ones for title, timestamp, and text; `id` keeps the
/// first nonzero value so revision-scoped ids cannot clobber the page id.
#[derive(Debug, Default)]
struct PartialPage {
    id: u64,
    title: String,
    text: String,
    timestamp: Option<DateTime<Utc>>,
    // Parsed but not consulted when filtering; reserved for namespace-based
    // selection.
    namespace: Option<i32>,
    redirect: bool,
}

/// Outcome of consuming one page subtree (or reaching end of input).
enum Step {
    Article(Article),
    Skipped,
    Eof,
}

/// A lazy, single-pass reader over the articles of a MediaWiki dump.
///
/// # Examples
///
/// ```no_run
/// use wikistem::dump::DumpReader;
///
/// let reader = DumpReader::open("simplewiki-latest-pages-articles.xml.bz2")?;
/// for article in reader {
///     let article = article?;
///     println!("{}: {} bytes", article.title, article.content.len());
/// }
/// # Ok::<(), wikistem::error::WikistemError>(())
/// ```
pub struct DumpReader {
    path: PathBuf,
    source: XmlSource,
    cleanser: WikiTextCleanser,
    finished: bool,
}

impl DumpReader {
    /// Open a dump file. Files with a `.bz2` extension are decompressed on
    /// the fly; anything else is read as plain XML.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path)?;

        let is_bz2 = path.extension().map(|ext| ext == "bz2").unwrap_or(false);
        let source = if is_bz2 {
            let decoder = BzDecoder::new(file);
            XmlSource::Bzip2(Reader::from_reader(BufReader::with_capacity(
                1024 * 1024,
                decoder,
            )))
        } else {
            XmlSource::Plain(Reader::from_reader(BufReader::with_capacity(
                1024 * 1024,
                file,
            )))
        };

        Ok(DumpReader {
            path,
            source,
            cleanser: WikiTextCleanser::new(),
            finished: false,
        })
    }

    /// Path of the dump file being read.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Advance to the next `<page>` element and consume its subtree.
    fn advance(&mut self, buf: &mut Vec<u8>) -> Result<Step> {
        loop {
            match self.source.read_event(buf)? {
                Event::Start(ref e) if e.local_name().as_ref() == b"page" => {
                    return self.read_page(buf);
                }
                Event::Eof => return Ok(Step::Eof),
                _ => {}
            }
        }
    }

    /// Consume one page subtree and decide whether it yields an Article.
    fn read_page(&mut self, buf: &mut Vec<u8>) -> Result<Step> {
        let mut page = PartialPage::default();
        // Innermost field element whose character data we are collecting.
        let mut field: Option<Vec<u8>> = None;
        let mut text = String::new();

        loop {
            match self.source.read_event(buf)? {
                Event::Start(ref e) => match e.local_name().as_ref() {
                    b"redirect" => {
                        page.redirect = true;
                        field = None;
                    }
                    name @ (b"title" | b"ns" | b"id" | b"timestamp" | b"text") => {
                        field = Some(name.to_vec());
                        text.clear();
                    }
                    _ => field = None,
                },
                Event::Empty(ref e) => match e.local_name().as_ref() {
                    b"redirect" => page.redirect = true,
                    // An empty element still overwrites the field.
                    b"title" => page.title.clear(),
                    b"text" => page.text.clear(),
                    _ => {}
                },
                Event::Text(ref e) => {
                    if field.is_some() {
                        let unescaped = e
                            .unescape()
                            .map_err(|err| WikistemError::parse(err.to_string()))?;
                        text.push_str(&unescaped);
                    }
                }
                Event::CData(ref e) => {
                    if field.is_some() {
                        text.push_str(&String::from_utf8_lossy(e));
                    }
                }
                Event::End(ref e) => {
                    let name = e.local_name();
                    if name.as_ref() == b"page" {
                        return Ok(self.finish_page(page));
                    }
                    if field.as_deref() == Some(name.as_ref()) {
                        store_field(&mut page, name.as_ref(), &text)?;
                        field = None;
                    }
                }
                Event::Eof => {
                    return Err(WikistemError::parse(
                        "unexpected end of input inside <page> element",
                    ));
                }
                _ => {}
            }
        }
    }

    /// Apply page-level filtering once the subtree has been fully read.
    ///
    /// Exclusions are silent skip decisions, not errors: the produced
    /// sequence looks as if the page never existed.
    fn finish_page(&self, page: PartialPage) -> Step {
        if page.title.contains(':') {
            debug!(title = %page.title, "skipping page with namespace separator in title");
            return Step::Skipped;
        }
        if page.redirect {
            debug!(title = %page.title, "skipping redirect page");
            return Step::Skipped;
        }

        let content = self.cleanser.cleanse(&page.text);
        if content.trim().is_empty() {
            debug!(title = %page.title, "skipping page with empty body");
            return Step::Skipped;
        }

        debug!(title = %page.title, id = page.id, ns = ?page.namespace, "article extracted");
        Step::Article(Article {
            id: page.id,
            title: page.title,
            content,
            last_modified: page.timestamp.unwrap_or(DateTime::<Utc>::MIN_UTC),
        })
    }
}

/// Assign one completed field element's character data to the page.
fn store_field(page: &mut PartialPage, name: &[u8], text: &str) -> Result<()> {
    match name {
        b"title" => page.title = text.to_string(),
        b"text" => page.text = text.to_string(),
        b"ns" => page.namespace = text.trim().parse().ok(),
        b"id" => {
            // First nonzero id in the subtree wins.
            if page.id == 0 {
                page.id = text.trim().parse().unwrap_or(0);
            }
        }
        b"timestamp" => {
            let parsed = DateTime::parse_from_rfc3339(text.trim()).map_err(|e| {
                WikistemError::format(format!("invalid timestamp {:?}: {e}", text.trim()))
            })?;
            page.timestamp = Some(parsed.with_timezone(&Utc));
        }
        _ => {}
    }
    Ok(())
}

impl Iterator for DumpReader {
    type Item = Result<Article>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let mut buf = Vec::with_capacity(8192);
        loop {
            match self.advance(&mut buf) {
                Ok(Step::Article(article)) => return Some(Ok(article)),
                Ok(Step::Skipped) => continue,
                Ok(Step::Eof) => {
                    self.finished = true;
                    return None;
                }
                // Parse, I/O, and format errors are unrecoverable for the
                // run; the iterator fuses after reporting one.
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e));
                }
            }
        }
    }
}
