use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Shape of a question, fixed by its first option line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionKind {
    MultipleChoice,
    TrueFalse,
}

/// The two literal values of a true/false question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TrueFalse {
    Verdadero,
    Falso,
}

impl TrueFalse {
    pub fn as_str(self) -> &'static str {
        match self {
            TrueFalse::Verdadero => "Verdadero",
            TrueFalse::Falso => "Falso",
        }
    }
}

impl fmt::Display for TrueFalse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrueFalse {
    type Err = ();

    /// Trimmed, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("verdadero") {
            Ok(TrueFalse::Verdadero)
        } else if s.eq_ignore_ascii_case("falso") {
            Ok(TrueFalse::Falso)
        } else {
            Err(())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuizOption {
    Lettered { letter: char, text: String },
    TrueFalse(TrueFalse),
}

impl QuizOption {
    pub fn answer(&self) -> Answer {
        match self {
            QuizOption::Lettered { letter, .. } => Answer::Letter(*letter),
            QuizOption::TrueFalse(value) => Answer::Value(*value),
        }
    }

    pub fn label(&self) -> String {
        match self {
            QuizOption::Lettered { letter, text } => format!("{}. {}", letter, text),
            QuizOption::TrueFalse(value) => value.to_string(),
        }
    }
}

/// A correct answer: an option letter or a true/false value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Answer {
    Letter(char),
    Value(TrueFalse),
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Letter(letter) => write!(f, "{}", letter),
            Answer::Value(value) => write!(f, "{}", value),
        }
    }
}

/// A question extracted from a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub number: Option<u32>,
    pub text: String,
    pub kind: Option<QuestionKind>,
    pub options: Vec<QuizOption>,
    pub answers: BTreeSet<Answer>,
}

impl Question {
    pub fn new(number: Option<u32>, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
            kind: None,
            options: Vec::new(),
            answers: BTreeSet::new(),
        }
    }

    /// A question without any recognized option line.
    pub fn is_unusable(&self) -> bool {
        self.kind.is_none()
    }

    /// Whether the question can be asked and graded: at least one marked
    /// answer, and exactly one for true/false.
    pub fn is_playable(&self) -> bool {
        match self.kind {
            None => false,
            Some(QuestionKind::MultipleChoice) => !self.answers.is_empty(),
            Some(QuestionKind::TrueFalse) => self.answers.len() == 1,
        }
    }

    /// Option letters of a multiple-choice question, in document order.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.options.iter().filter_map(|option| match option {
            QuizOption::Lettered { letter, .. } => Some(*letter),
            QuizOption::TrueFalse(_) => None,
        })
    }
}
