//! DOCX reader.
//!
//! DOCX files are ZIP archives; the body lives in `word/document.xml`.
//! Only body-level paragraphs are collected: paragraphs inside tables or
//! text boxes are skipped.

use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use thiserror::Error;
use zip::ZipArchive;
use zip::result::ZipError;

use super::{Document, Paragraph, Run};

const DOCUMENT_XML: &str = "word/document.xml";
const HIGHLIGHT_COLOR: &[u8] = b"yellow";

#[derive(Error, Debug)]
pub enum DocxError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("not a DOCX archive: {0}")]
    Zip(#[from] ZipError),

    #[error("archive has no word/document.xml")]
    MissingDocument,

    #[error("XML error at position {position}: {message}")]
    Xml { position: u64, message: String },
}

pub type Result<T> = std::result::Result<T, DocxError>;

/// Read a `.docx` file from disk.
pub fn read_docx<P: AsRef<Path>>(path: P) -> Result<Document> {
    let file = File::open(path)?;
    read_docx_from(BufReader::new(file))
}

/// Read a `.docx` archive from any seekable reader.
pub fn read_docx_from<R: Read + Seek>(reader: R) -> Result<Document> {
    let mut archive = ZipArchive::new(reader)?;
    let mut entry = match archive.by_name(DOCUMENT_XML) {
        Ok(entry) => entry,
        Err(ZipError::FileNotFound) => return Err(DocxError::MissingDocument),
        Err(e) => return Err(e.into()),
    };

    let mut xml = String::new();
    entry.read_to_string(&mut xml)?;
    parse_document_xml(&xml)
}

/// Parse the contents of `word/document.xml`.
pub fn parse_document_xml(xml: &str) -> Result<Document> {
    let mut reader = Reader::from_str(xml);
    let mut builder = BodyBuilder::default();

    loop {
        let event = reader.read_event().map_err(|e| DocxError::Xml {
            position: reader.buffer_position() as u64,
            message: e.to_string(),
        })?;

        match event {
            Event::Start(e) => builder.start(&e),
            Event::Empty(e) => builder.empty(&e),
            Event::End(e) => builder.end(e.name().as_ref()),
            Event::Text(e) => {
                if builder.in_text {
                    let text = e.unescape().map_err(|e| DocxError::Xml {
                        position: reader.buffer_position() as u64,
                        message: e.to_string(),
                    })?;
                    builder.push_text(&text);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(Document::new(builder.paragraphs))
}

/// Streaming state while walking the document body.
#[derive(Default)]
struct BodyBuilder {
    paragraphs: Vec<Paragraph>,
    current: Option<Paragraph>,
    run: Option<Run>,
    paragraph_depth: usize,
    table_depth: usize,
    in_run_props: bool,
    in_text: bool,
}

impl BodyBuilder {
    /// Inside a body paragraph, not inside anything nested in it.
    fn at_body_paragraph(&self) -> bool {
        self.paragraph_depth == 1 && self.current.is_some()
    }

    fn start(&mut self, e: &BytesStart) {
        match e.name().as_ref() {
            b"w:tbl" => self.table_depth += 1,
            b"w:p" => {
                self.paragraph_depth += 1;
                if self.paragraph_depth == 1 && self.table_depth == 0 {
                    self.current = Some(Paragraph::default());
                }
            }
            b"w:r" if self.at_body_paragraph() && self.run.is_none() => {
                self.run = Some(Run::default());
            }
            b"w:rPr" if self.at_body_paragraph() && self.run.is_some() => {
                self.in_run_props = true;
            }
            b"w:t" if self.at_body_paragraph() && self.run.is_some() => {
                self.in_text = true;
            }
            b"w:highlight" => self.highlight(e),
            _ => {}
        }
    }

    fn empty(&mut self, e: &BytesStart) {
        match e.name().as_ref() {
            b"w:p" if self.paragraph_depth == 0 && self.table_depth == 0 => {
                self.paragraphs.push(Paragraph::default());
            }
            b"w:highlight" => self.highlight(e),
            b"w:tab" => self.push_run_char('\t'),
            b"w:br" | b"w:cr" => self.push_run_char('\n'),
            _ => {}
        }
    }

    fn end(&mut self, name: &[u8]) {
        match name {
            b"w:tbl" => self.table_depth = self.table_depth.saturating_sub(1),
            b"w:p" => {
                if self.paragraph_depth == 1 {
                    if let Some(paragraph) = self.current.take() {
                        self.paragraphs.push(paragraph);
                    }
                }
                self.paragraph_depth = self.paragraph_depth.saturating_sub(1);
            }
            b"w:r" if self.paragraph_depth == 1 => {
                if let (Some(run), Some(paragraph)) = (self.run.take(), self.current.as_mut()) {
                    paragraph.runs.push(run);
                }
                self.in_run_props = false;
                self.in_text = false;
            }
            b"w:rPr" => self.in_run_props = false,
            b"w:t" => self.in_text = false,
            _ => {}
        }
    }

    fn highlight(&mut self, e: &BytesStart) {
        if !self.in_run_props || !self.at_body_paragraph() {
            return;
        }
        let is_yellow = matches!(
            e.try_get_attribute("w:val"),
            Ok(Some(attr)) if attr.value.as_ref() == HIGHLIGHT_COLOR
        );
        if let Some(run) = self.run.as_mut() {
            run.highlighted = is_yellow;
        }
    }

    fn push_text(&mut self, text: &str) {
        if let Some(run) = self.run.as_mut() {
            run.text.push_str(text);
        }
    }

    fn push_run_char(&mut self, c: char) {
        if self.in_run_props || !self.at_body_paragraph() {
            return;
        }
        if let Some(run) = self.run.as_mut() {
            run.text.push(c);
        }
    }
}
