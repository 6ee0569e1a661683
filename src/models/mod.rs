mod question;

pub use question::{Answer, Question, QuestionKind, QuizOption, TrueFalse};

/// Screens shown before the session starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Welcome,
    Picker,
    Counts,
}
