//! Terminal presenter: shows one question at a time and grades it.

use std::collections::BTreeSet;
use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

use crate::checker::{check, CheckError, Selection, Verdict};
use crate::models::{Question, QuestionKind, QuizOption, TrueFalse};
use crate::session::{Presenter, Progress, Response};
use crate::terminal::AppTerminal;
use crate::ui;

/// What a key press did to the question screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Pending,
    Next { correct: bool },
    Exit,
}

/// Input state for the question on screen.
pub struct QuestionView<'q> {
    pub question: &'q Question,
    pub progress: Progress,
    pub cursor: usize,
    pub checked: BTreeSet<char>,
    pub value: Option<TrueFalse>,
    pub warning: Option<String>,
    pub verdict: Option<Verdict>,
}

impl<'q> QuestionView<'q> {
    pub fn new(question: &'q Question, progress: Progress) -> Self {
        Self {
            question,
            progress,
            cursor: 0,
            checked: BTreeSet::new(),
            value: None,
            warning: None,
            verdict: None,
        }
    }

    /// Whether the option at `index` is currently chosen.
    pub fn is_chosen(&self, index: usize) -> bool {
        match self.question.options.get(index) {
            Some(QuizOption::Lettered { letter, .. }) => self.checked.contains(letter),
            Some(QuizOption::TrueFalse(value)) => self.value == Some(*value),
            None => false,
        }
    }

    pub fn handle_key(&mut self, key: KeyCode) -> KeyOutcome {
        if matches!(key, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc) {
            return KeyOutcome::Exit;
        }

        if let Some(verdict) = &self.verdict {
            return match key {
                KeyCode::Enter | KeyCode::Right | KeyCode::Char('n') | KeyCode::Char('N') => {
                    KeyOutcome::Next {
                        correct: verdict.correct,
                    }
                }
                _ => KeyOutcome::Pending,
            };
        }

        match key {
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(false),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(true),
            KeyCode::Char(' ') => self.choose(self.cursor),
            KeyCode::Char(c) if c.is_ascii_digit() && c != '0' => {
                if self.question.kind == Some(QuestionKind::MultipleChoice) {
                    let index = c as usize - '1' as usize;
                    self.choose(index);
                }
            }
            KeyCode::Char('v') | KeyCode::Char('V') => self.pick_value(TrueFalse::Verdadero),
            KeyCode::Char('f') | KeyCode::Char('F') => self.pick_value(TrueFalse::Falso),
            KeyCode::Enter => self.verify(),
            _ => {}
        }

        KeyOutcome::Pending
    }

    fn move_cursor(&mut self, forward: bool) {
        let len = self.question.options.len();
        if len == 0 {
            return;
        }
        self.cursor = if forward {
            (self.cursor + 1) % len
        } else {
            (self.cursor + len - 1) % len
        };
    }

    fn choose(&mut self, index: usize) {
        match self.question.options.get(index) {
            Some(QuizOption::Lettered { letter, .. }) => {
                if !self.checked.remove(letter) {
                    self.checked.insert(*letter);
                }
                self.cursor = index;
            }
            Some(QuizOption::TrueFalse(value)) => {
                self.value = Some(*value);
                self.cursor = index;
            }
            None => {}
        }
    }

    fn pick_value(&mut self, value: TrueFalse) {
        if self.question.kind != Some(QuestionKind::TrueFalse) {
            return;
        }
        if let Some(index) = self
            .question
            .options
            .iter()
            .position(|option| *option == QuizOption::TrueFalse(value))
        {
            self.choose(index);
        }
    }

    fn selection(&self) -> Result<Selection, CheckError> {
        match self.question.kind {
            Some(QuestionKind::TrueFalse) => self
                .value
                .map(Selection::value)
                .ok_or(CheckError::EmptySelection),
            _ => Selection::letters(self.checked.iter().copied()),
        }
    }

    fn verify(&mut self) {
        let result = self
            .selection()
            .and_then(|selection| check(self.question, &selection));

        match result {
            Ok(verdict) => {
                self.warning = None;
                self.verdict = Some(verdict);
            }
            Err(CheckError::EmptySelection) => {
                let message = match self.question.kind {
                    Some(QuestionKind::TrueFalse) => "Select Verdadero or Falso",
                    _ => "Select at least one option",
                };
                self.warning = Some(message.to_string());
            }
            Err(err) => self.warning = Some(err.to_string()),
        }
    }
}

/// Presents questions on the alternate screen and blocks on key presses.
pub struct TerminalPresenter<'t> {
    terminal: &'t mut AppTerminal,
}

impl<'t> TerminalPresenter<'t> {
    pub fn new(terminal: &'t mut AppTerminal) -> Self {
        Self { terminal }
    }
}

impl Presenter for TerminalPresenter<'_> {
    type Error = io::Error;

    fn present(&mut self, question: &Question, progress: Progress) -> io::Result<Response> {
        let mut view = QuestionView::new(question, progress);

        loop {
            self.terminal.draw(|frame| ui::render_question(frame, &view))?;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match view.handle_key(key.code) {
                    KeyOutcome::Pending => {}
                    KeyOutcome::Next { correct } => return Ok(Response::Answered { correct }),
                    KeyOutcome::Exit => return Ok(Response::Exit),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Answer;
    use crate::session::Score;

    fn progress() -> Progress {
        Progress {
            index: 1,
            total: 1,
            score: Score::default(),
        }
    }

    fn multiple_choice() -> Question {
        let mut question = Question::new(Some(1), "Pick A and C");
        question.kind = Some(QuestionKind::MultipleChoice);
        for letter in ['A', 'B', 'C'] {
            question.options.push(QuizOption::Lettered {
                letter,
                text: letter.to_string(),
            });
        }
        question.answers.insert(Answer::Letter('A'));
        question.answers.insert(Answer::Letter('C'));
        question
    }

    fn true_false() -> Question {
        let mut question = Question::new(Some(2), "True?");
        question.kind = Some(QuestionKind::TrueFalse);
        question.options = vec![
            QuizOption::TrueFalse(TrueFalse::Verdadero),
            QuizOption::TrueFalse(TrueFalse::Falso),
        ];
        question.answers.insert(Answer::Value(TrueFalse::Verdadero));
        question
    }

    #[test]
    fn test_empty_selection_warns_and_reprompts() {
        let question = multiple_choice();
        let mut view = QuestionView::new(&question, progress());

        assert_eq!(view.handle_key(KeyCode::Enter), KeyOutcome::Pending);
        assert_eq!(view.warning.as_deref(), Some("Select at least one option"));
        assert!(view.verdict.is_none());
    }

    #[test]
    fn test_digit_keys_toggle_options() {
        let question = multiple_choice();
        let mut view = QuestionView::new(&question, progress());

        view.handle_key(KeyCode::Char('1'));
        view.handle_key(KeyCode::Char('2'));
        view.handle_key(KeyCode::Char('3'));
        view.handle_key(KeyCode::Char('2'));
        view.handle_key(KeyCode::Char('9'));
        assert!(view.is_chosen(0));
        assert!(!view.is_chosen(1));
        assert!(view.is_chosen(2));

        assert_eq!(view.handle_key(KeyCode::Enter), KeyOutcome::Pending);
        assert!(view.verdict.as_ref().is_some_and(|v| v.correct));
        assert_eq!(
            view.handle_key(KeyCode::Enter),
            KeyOutcome::Next { correct: true }
        );
    }

    #[test]
    fn test_cursor_and_space() {
        let question = multiple_choice();
        let mut view = QuestionView::new(&question, progress());

        view.handle_key(KeyCode::Down);
        view.handle_key(KeyCode::Char(' '));
        view.handle_key(KeyCode::Enter);

        let verdict = view.verdict.clone().unwrap();
        assert!(!verdict.correct);
        assert_eq!(verdict.explanation(), "Correct answers: A, C");
        assert_eq!(view.handle_key(KeyCode::Char('n')), KeyOutcome::Next { correct: false });
    }

    #[test]
    fn test_true_false_hotkeys() {
        let question = true_false();
        let mut view = QuestionView::new(&question, progress());

        view.handle_key(KeyCode::Enter);
        assert_eq!(view.warning.as_deref(), Some("Select Verdadero or Falso"));

        view.handle_key(KeyCode::Char('f'));
        assert!(view.is_chosen(1));
        view.handle_key(KeyCode::Char('V'));
        assert!(view.is_chosen(0));
        assert!(!view.is_chosen(1));

        view.handle_key(KeyCode::Enter);
        assert!(view.warning.is_none());
        assert_eq!(view.handle_key(KeyCode::Enter), KeyOutcome::Next { correct: true });
    }

    #[test]
    fn test_verdict_locks_selection() {
        let question = true_false();
        let mut view = QuestionView::new(&question, progress());

        view.handle_key(KeyCode::Char('f'));
        view.handle_key(KeyCode::Enter);
        view.handle_key(KeyCode::Char('v'));
        assert!(view.is_chosen(1));
        assert_eq!(view.handle_key(KeyCode::Enter), KeyOutcome::Next { correct: false });
    }

    #[test]
    fn test_exit_at_any_time() {
        let question = true_false();
        let mut view = QuestionView::new(&question, progress());
        assert_eq!(view.handle_key(KeyCode::Esc), KeyOutcome::Exit);

        view.handle_key(KeyCode::Char('v'));
        view.handle_key(KeyCode::Enter);
        assert_eq!(view.handle_key(KeyCode::Char('q')), KeyOutcome::Exit);
    }
}
