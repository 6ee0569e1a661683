//! Grading of a user's selection against a question's answers.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::models::{Answer, Question, QuestionKind, TrueFalse};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckError {
    #[error("select at least one option")]
    EmptySelection,
    #[error("question has no options")]
    Unusable,
    #[error("selection does not fit a {0:?} question")]
    KindMismatch(QuestionKind),
}

/// What the user picked. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Letters(BTreeSet<char>),
    Value(TrueFalse),
}

impl Selection {
    /// Build a multiple-choice selection; an empty set is rejected.
    pub fn letters<I: IntoIterator<Item = char>>(letters: I) -> Result<Self, CheckError> {
        let letters: BTreeSet<char> = letters.into_iter().collect();
        if letters.is_empty() {
            return Err(CheckError::EmptySelection);
        }
        Ok(Selection::Letters(letters))
    }

    pub fn value(value: TrueFalse) -> Self {
        Selection::Value(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub correct: bool,
    pub expected: Vec<String>,
}

impl Verdict {
    pub fn explanation(&self) -> String {
        match self.expected.len() {
            0 => "No correct answer is marked for this question".to_string(),
            1 => format!("Correct answer: {}", self.expected[0]),
            _ => format!("Correct answers: {}", self.expected.join(", ")),
        }
    }
}

/// Grade `selection` against `question`.
///
/// Multiple choice needs the exact set of marked letters; true/false needs
/// the single marked value.
pub fn check(question: &Question, selection: &Selection) -> Result<Verdict, CheckError> {
    let kind = question.kind.ok_or(CheckError::Unusable)?;

    let correct = match (kind, selection) {
        (QuestionKind::MultipleChoice, Selection::Letters(letters)) => {
            let chosen: BTreeSet<Answer> = letters.iter().map(|l| Answer::Letter(*l)).collect();
            chosen == question.answers
        }
        (QuestionKind::TrueFalse, Selection::Value(value)) => {
            question.answers.len() == 1 && question.answers.contains(&Answer::Value(*value))
        }
        (kind, _) => return Err(CheckError::KindMismatch(kind)),
    };

    Ok(Verdict {
        correct,
        expected: question.answers.iter().map(Answer::to_string).collect(),
    })
}
