//! Turns document paragraphs into questions.
//!
//! A question starts at a line like `12. Prompt` and owns every following
//! paragraph up to the next question start. Those paragraphs are read as
//! options when they look like `A. text` / `B) text` or are one of the
//! literals `Verdadero` / `Falso`; anything else is ignored. A highlighted
//! option is a correct answer.

use std::sync::LazyLock;

use regex::Regex;

use crate::document::{Paragraph, ParagraphSource};
use crate::models::{Question, QuestionKind, QuizOption, TrueFalse};

static QUESTION_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d*)\.\s*(.+)$").expect("valid question pattern"));
static NUMBERED_QUESTION_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.\s*(.+)$").expect("valid question pattern"));
static LETTERED_OPTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z])[.)]\s*(.+)$").expect("valid option pattern"));

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserConfig {
    /// Question-start lines must begin with digits (`1. ...`), not just `.`.
    pub require_number: bool,
}

impl ParserConfig {
    fn question_start(&self) -> &'static Regex {
        if self.require_number {
            &NUMBERED_QUESTION_START
        } else {
            &QUESTION_START
        }
    }
}

/// Extract every question from `source`, in document order.
pub fn parse<S: ParagraphSource + ?Sized>(source: &S, config: &ParserConfig) -> Vec<Question> {
    let question_start = config.question_start();
    let mut questions = Vec::new();
    let mut current: Option<Question> = None;

    for paragraph in source.paragraphs() {
        let text = paragraph.text();
        let line = text.trim();

        if let Some(caps) = question_start.captures(line) {
            if let Some(question) = current.take() {
                questions.push(question);
            }
            let number = caps[1].parse().ok();
            current = Some(Question::new(number, &caps[2]));
            continue;
        }

        if let Some(question) = current.as_mut() {
            read_option(question, line, paragraph);
        }
    }

    if let Some(question) = current {
        questions.push(question);
    }

    questions
}

/// Order questions by their source number; unnumbered ones go last.
pub fn sort_by_number(questions: &mut [Question]) {
    questions.sort_by_key(|question| (question.number.is_none(), question.number));
}

fn read_option(question: &mut Question, line: &str, paragraph: &Paragraph) {
    let (kind, option) = if let Some(caps) = LETTERED_OPTION.captures(line) {
        let Some(letter) = caps[1].chars().next() else {
            return;
        };
        let option = QuizOption::Lettered {
            letter,
            text: caps[2].to_string(),
        };
        (QuestionKind::MultipleChoice, option)
    } else if let Ok(value) = line.parse::<TrueFalse>() {
        (QuestionKind::TrueFalse, QuizOption::TrueFalse(value))
    } else {
        return;
    };

    if *question.kind.get_or_insert(kind) != kind {
        return;
    }

    let answer = option.answer();
    if question.options.iter().any(|existing| existing.answer() == answer) {
        return;
    }

    question.options.push(option);
    if paragraph.is_highlighted() {
        question.answers.insert(answer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::{check, Selection};
    use crate::document::{Document, Run};
    use crate::models::Answer;

    fn line(text: &str) -> Paragraph {
        Paragraph::new(vec![Run::plain(text)])
    }

    fn marked(text: &str) -> Paragraph {
        Paragraph::new(vec![Run::highlighted(text)])
    }

    fn parse_default(paragraphs: Vec<Paragraph>) -> Vec<Question> {
        parse(&Document::new(paragraphs), &ParserConfig::default())
    }

    #[test]
    fn test_true_false_question() {
        let questions = parse_default(vec![
            line("1. Rust has a garbage collector."),
            line("Verdadero"),
            marked("Falso"),
        ]);

        assert_eq!(questions.len(), 1);
        let question = &questions[0];
        assert_eq!(question.number, Some(1));
        assert_eq!(question.text, "Rust has a garbage collector.");
        assert_eq!(question.kind, Some(QuestionKind::TrueFalse));
        assert_eq!(
            question.options,
            vec![
                QuizOption::TrueFalse(TrueFalse::Verdadero),
                QuizOption::TrueFalse(TrueFalse::Falso),
            ]
        );
        assert_eq!(
            question.answers.iter().copied().collect::<Vec<_>>(),
            vec![Answer::Value(TrueFalse::Falso)]
        );
    }

    #[test]
    fn test_multiple_choice_question() {
        let questions = parse_default(vec![
            line("7. Which are Rust keywords?"),
            marked("A. fn"),
            line("B) func"),
            line("C. def"),
            Paragraph::new(vec![Run::plain("D. "), Run::highlighted("impl")]),
        ]);

        let question = &questions[0];
        assert_eq!(question.kind, Some(QuestionKind::MultipleChoice));
        assert_eq!(question.letters().collect::<String>(), "ABCD");
        assert_eq!(
            question.options[1],
            QuizOption::Lettered {
                letter: 'B',
                text: "func".to_string()
            }
        );
        let answers: Vec<Answer> = question.answers.iter().copied().collect();
        assert_eq!(answers, vec![Answer::Letter('A'), Answer::Letter('D')]);
    }

    #[test]
    fn test_question_count_matches_start_lines() {
        let questions = parse_default(vec![
            line("Title of the exam"),
            line("1. First"),
            line("Some note"),
            line("2. Second"),
            line("3. Third"),
            line("A. only option"),
        ]);

        assert_eq!(questions.len(), 3);
        assert!(questions[0].is_unusable());
        assert!(questions[0].options.is_empty());
        assert!(questions[1].is_unusable());
        assert_eq!(questions[2].kind, Some(QuestionKind::MultipleChoice));
        assert!(questions[2].answers.is_empty());
    }

    #[test]
    fn test_option_lines_before_first_question_are_ignored() {
        let questions = parse_default(vec![marked("A. stray"), line("1. Real"), line("Verdadero")]);
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].options.len(), 1);
    }

    #[test]
    fn test_kind_is_fixed_by_first_option() {
        let questions = parse_default(vec![
            line("1. Mixed"),
            line("verdadero"),
            marked("A. not a true/false option"),
            marked("FALSO"),
        ]);

        let question = &questions[0];
        assert_eq!(question.kind, Some(QuestionKind::TrueFalse));
        assert_eq!(question.options.len(), 2);
        let answers: Vec<Answer> = question.answers.iter().copied().collect();
        assert_eq!(answers, vec![Answer::Value(TrueFalse::Falso)]);
    }

    #[test]
    fn test_duplicate_letters_are_dropped() {
        let questions = parse_default(vec![line("1. Q"), line("A. one"), marked("A. again")]);
        assert_eq!(questions[0].options.len(), 1);
        assert!(questions[0].answers.is_empty());
    }

    #[test]
    fn test_optional_and_required_number() {
        let paragraphs = vec![line(". Unnumbered"), line("Verdadero"), line("12.Numbered")];

        let optional = parse(&paragraphs, &ParserConfig::default());
        assert_eq!(optional.len(), 2);
        assert_eq!(optional[0].number, None);
        assert_eq!(optional[0].text, "Unnumbered");
        assert_eq!(optional[1].number, Some(12));

        let required = parse(
            &paragraphs,
            &ParserConfig {
                require_number: true,
            },
        );
        assert_eq!(required.len(), 1);
        assert_eq!(required[0].text, "Numbered");
    }

    #[test]
    fn test_answers_subset_of_options() {
        let questions = parse_default(vec![
            line("1. A"),
            marked("A. x"),
            marked("b. lowercase is not an option"),
            line("2. B"),
            marked("B) y"),
            marked("Some highlighted note"),
        ]);

        for question in &questions {
            let letters: Vec<char> = question.letters().collect();
            for answer in &question.answers {
                match answer {
                    Answer::Letter(letter) => assert!(letters.contains(letter)),
                    Answer::Value(_) => panic!("unexpected value answer"),
                }
            }
            assert_eq!(question.answers.len(), 1);
        }
    }

    #[test]
    fn test_true_false_with_both_values_marked_is_not_playable() {
        let questions = parse_default(vec![line("1. Q"), marked("Verdadero"), marked("Falso")]);

        let question = &questions[0];
        assert_eq!(question.answers.len(), 2);
        assert!(!question.is_playable());

        for value in [TrueFalse::Verdadero, TrueFalse::Falso] {
            let verdict = check(question, &Selection::value(value)).unwrap();
            assert!(!verdict.correct);
        }
    }

    #[test]
    fn test_true_false_with_one_value_marked_grades_it() {
        let questions = parse_default(vec![line("1. Q"), marked("Verdadero"), line("Falso")]);

        let question = &questions[0];
        assert!(question.is_playable());
        assert!(check(question, &Selection::value(TrueFalse::Verdadero)).unwrap().correct);
        assert!(!check(question, &Selection::value(TrueFalse::Falso)).unwrap().correct);
    }

    #[test]
    fn test_sort_by_number() {
        let mut questions = parse_default(vec![
            line("3. c"),
            line(". none"),
            line("1. a"),
            line("2. b"),
        ]);
        sort_by_number(&mut questions);

        let numbers: Vec<Option<u32>> = questions.iter().map(|q| q.number).collect();
        assert_eq!(numbers, vec![Some(1), Some(2), Some(3), None]);
    }
}
