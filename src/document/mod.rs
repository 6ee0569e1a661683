//! Paragraph-level view of a word-processor document.
//!
//! The question parser needs exactly two capabilities from a document:
//! the text of each paragraph and whether any run inside it is
//! highlighted. [`ParagraphSource`] is that capability; [`docx`] is the
//! reader that produces it from `.docx` files.

pub mod docx;

pub use docx::{read_docx, read_docx_from, DocxError};

/// A stretch of text with uniform formatting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Run {
    pub text: String,
    pub highlighted: bool,
}

impl Run {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            highlighted: false,
        }
    }

    pub fn highlighted(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            highlighted: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    pub runs: Vec<Run>,
}

impl Paragraph {
    pub fn new(runs: Vec<Run>) -> Self {
        Self { runs }
    }

    /// Concatenated text of all runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }

    /// True when at least one run is highlighted.
    pub fn is_highlighted(&self) -> bool {
        self.runs.iter().any(|run| run.highlighted)
    }
}

/// Anything that can hand out an ordered list of paragraphs.
pub trait ParagraphSource {
    fn paragraphs(&self) -> &[Paragraph];
}

/// An in-memory document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    paragraphs: Vec<Paragraph>,
}

impl Document {
    pub fn new(paragraphs: Vec<Paragraph>) -> Self {
        Self { paragraphs }
    }

    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }
}

impl ParagraphSource for Document {
    fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }
}

impl ParagraphSource for [Paragraph] {
    fn paragraphs(&self) -> &[Paragraph] {
        self
    }
}

impl ParagraphSource for Vec<Paragraph> {
    fn paragraphs(&self) -> &[Paragraph] {
        self
    }
}
