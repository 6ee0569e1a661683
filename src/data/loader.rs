use std::path::{Path, PathBuf};

use log::{debug, warn};
use thiserror::Error;

use crate::data::parser::{self, ParserConfig};
use crate::document::{read_docx, DocxError};
use crate::models::Question;

/// A document that could not be turned into questions.
#[derive(Error, Debug)]
#[error("failed to load {}: {source}", .path.display())]
pub struct LoadError {
    pub path: PathBuf,
    #[source]
    pub source: DocxError,
}

/// Read a `.docx` file and extract its questions.
///
/// Either every question of the document is returned or the load fails as
/// a whole.
pub fn load_questions<P: AsRef<Path>>(path: P, config: &ParserConfig) -> Result<Vec<Question>, LoadError> {
    let path = path.as_ref();
    let document = read_docx(path).map_err(|source| LoadError {
        path: path.to_path_buf(),
        source,
    })?;

    let questions = parser::parse(&document, config);
    debug!(
        "{}: {} paragraphs, {} questions",
        path.display(),
        document.len(),
        questions.len()
    );
    report_unplayable(path, &questions);

    Ok(questions)
}

fn report_unplayable(path: &Path, questions: &[Question]) {
    for (index, question) in questions.iter().enumerate() {
        let label = question
            .number
            .map(|n| n.to_string())
            .unwrap_or_else(|| format!("#{}", index + 1));

        if question.is_unusable() {
            warn!("{}: question {} has no options, skipping it", path.display(), label);
        } else if question.answers.is_empty() {
            warn!(
                "{}: question {} has no highlighted answer, skipping it",
                path.display(),
                label
            );
        } else if !question.is_playable() {
            warn!(
                "{}: question {} has both Verdadero and Falso highlighted, skipping it",
                path.display(),
                label
            );
        }
    }
}
