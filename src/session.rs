//! Session controller: builds the question pool and walks through it once.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::models::Question;

/// Running good/bad counters. Only ever incremented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub good: usize,
    pub bad: usize,
}

impl Score {
    pub fn record(&mut self, correct: bool) {
        if correct {
            self.good += 1;
        } else {
            self.bad += 1;
        }
    }

    /// Questions answered so far.
    pub fn total(&self) -> usize {
        self.good + self.bad
    }
}

/// End-of-session report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub good: usize,
    pub bad: usize,
}

impl Summary {
    pub fn percentage(&self) -> f64 {
        if self.total > 0 {
            (self.good as f64 / self.total as f64) * 100.0
        } else {
            0.0
        }
    }
}

/// Where the presenter stands in the session when shown a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// 1-based position of the current question.
    pub index: usize,
    pub total: usize,
    pub score: Score,
}

/// What the presenter reports back for one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    Answered { correct: bool },
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed(Summary),
    Aborted,
}

/// Shows one question, collects a selection and grades it.
pub trait Presenter {
    type Error;

    fn present(&mut self, question: &Question, progress: Progress) -> Result<Response, Self::Error>;
}

/// Questions loaded from one document plus how many of them to ask.
#[derive(Debug, Clone)]
pub struct Source {
    pub label: String,
    pub questions: Vec<Question>,
    /// `None` takes every playable question.
    pub count: Option<usize>,
}

impl Source {
    pub fn new(label: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            label: label.into(),
            questions,
            count: None,
        }
    }

    pub fn playable(&self) -> usize {
        self.questions.iter().filter(|q| q.is_playable()).count()
    }
}

/// Shuffle each source, take its first `count` playable questions, then
/// shuffle the merged list.
pub fn build_pool<R: Rng + ?Sized>(sources: Vec<Source>, rng: &mut R) -> Vec<Question> {
    let mut pool = Vec::new();

    for source in sources {
        let mut questions: Vec<Question> = source
            .questions
            .into_iter()
            .filter(Question::is_playable)
            .collect();
        questions.shuffle(rng);
        if let Some(count) = source.count {
            questions.truncate(count);
        }
        pool.extend(questions);
    }

    pool.shuffle(rng);
    pool
}

/// A single pass over an ordered list of questions.
pub struct Session {
    questions: Vec<Question>,
    score: Score,
}

impl Session {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            score: Score::default(),
        }
    }

    /// Ask every question in order. Stops at once when the presenter asks
    /// to exit; the partial score is dropped.
    pub fn run<P: Presenter>(mut self, presenter: &mut P) -> Result<Outcome, P::Error> {
        let total = self.questions.len();

        for (index, question) in self.questions.iter().enumerate() {
            let progress = Progress {
                index: index + 1,
                total,
                score: self.score,
            };

            match presenter.present(question, progress)? {
                Response::Answered { correct } => self.score.record(correct),
                Response::Exit => return Ok(Outcome::Aborted),
            }
        }

        Ok(Outcome::Completed(Summary {
            total,
            good: self.score.good,
            bad: self.score.bad,
        }))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::convert::Infallible;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::models::{Answer, QuestionKind, QuizOption, TrueFalse};

    fn playable(label: &str, index: usize) -> Question {
        let mut question = Question::new(Some(index as u32 + 1), format!("{} question {}", label, index));
        question.kind = Some(QuestionKind::TrueFalse);
        question.options = vec![
            QuizOption::TrueFalse(TrueFalse::Verdadero),
            QuizOption::TrueFalse(TrueFalse::Falso),
        ];
        question.answers.insert(Answer::Value(TrueFalse::Verdadero));
        question
    }

    fn source(label: &str, size: usize, count: usize) -> Source {
        let questions = (0..size).map(|i| playable(label, i)).collect();
        Source {
            count: Some(count),
            ..Source::new(label, questions)
        }
    }

    /// Answers from a script; `None` means exit.
    struct Scripted {
        answers: Vec<Option<bool>>,
        seen: Vec<Progress>,
    }

    impl Presenter for Scripted {
        type Error = Infallible;

        fn present(&mut self, _question: &Question, progress: Progress) -> Result<Response, Infallible> {
            self.seen.push(progress);
            Ok(match self.answers[self.seen.len() - 1] {
                Some(correct) => Response::Answered { correct },
                None => Response::Exit,
            })
        }
    }

    #[test]
    fn test_build_pool_takes_requested_counts() {
        let mut rng = StdRng::seed_from_u64(7);
        let sources = vec![source("u1", 20, 5), source("u2", 8, 3), source("u3", 4, 2)];

        let pool = build_pool(sources, &mut rng);
        assert_eq!(pool.len(), 10);

        let texts: HashSet<&str> = pool.iter().map(|q| q.text.as_str()).collect();
        assert_eq!(texts.len(), 10);

        let from = |prefix: &str| pool.iter().filter(|q| q.text.starts_with(prefix)).count();
        assert_eq!(from("u1 "), 5);
        assert_eq!(from("u2 "), 3);
        assert_eq!(from("u3 "), 2);
    }

    #[test]
    fn test_build_pool_skips_unplayable_and_caps_at_available() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut src = source("doc", 2, 10);
        src.questions.push(Question::new(Some(9), "no options"));
        assert_eq!(src.playable(), 2);

        let all = Source::new("all", (0..3).map(|i| playable("all", i)).collect());

        let pool = build_pool(vec![src, all], &mut rng);
        assert_eq!(pool.len(), 5);
        assert!(pool.iter().all(Question::is_playable));
    }

    #[test]
    fn test_build_pool_skips_true_false_with_both_values_marked() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut both = playable("both", 0);
        both.answers.insert(Answer::Value(TrueFalse::Falso));

        let src = Source::new("doc", vec![both, playable("one", 1)]);
        assert_eq!(src.playable(), 1);

        let pool = build_pool(vec![src], &mut rng);
        assert_eq!(pool.len(), 1);
        assert!(pool[0].text.starts_with("one "));
    }

    #[test]
    fn test_build_pool_shuffles() {
        let sources = || vec![Source::new("s", (0..30).map(|i| playable("s", i)).collect())];
        let original: Vec<String> = sources()[0].questions.iter().map(|q| q.text.clone()).collect();

        let mut rng = StdRng::seed_from_u64(42);
        let shuffled: Vec<String> = build_pool(sources(), &mut rng)
            .into_iter()
            .map(|q| q.text)
            .collect();

        assert_ne!(shuffled, original);
        let mut sorted = shuffled.clone();
        sorted.sort();
        let mut expected = original.clone();
        expected.sort();
        assert_eq!(sorted, expected);
    }

    #[test]
    fn test_session_counts_good_and_bad() {
        let questions = (0..3).map(|i| playable("q", i)).collect();
        let mut presenter = Scripted {
            answers: vec![Some(true), Some(false), Some(true)],
            seen: Vec::new(),
        };

        let outcome = Session::new(questions).run(&mut presenter).unwrap();
        assert_eq!(
            outcome,
            Outcome::Completed(Summary {
                total: 3,
                good: 2,
                bad: 1
            })
        );

        let last = presenter.seen[2];
        assert_eq!(last.index, 3);
        assert_eq!(last.total, 3);
        assert_eq!(last.score, Score { good: 1, bad: 1 });
        assert_eq!(last.score.total(), 2);
    }

    #[test]
    fn test_session_exit_aborts() {
        let questions = (0..3).map(|i| playable("q", i)).collect();
        let mut presenter = Scripted {
            answers: vec![Some(true), None, Some(true)],
            seen: Vec::new(),
        };

        let outcome = Session::new(questions).run(&mut presenter).unwrap();
        assert_eq!(outcome, Outcome::Aborted);
        assert_eq!(presenter.seen.len(), 2);
    }

    #[test]
    fn test_summary_percentage() {
        let summary = Summary {
            total: 4,
            good: 3,
            bad: 1,
        };
        assert_eq!(summary.percentage(), 75.0);
        assert_eq!(
            Summary {
                total: 0,
                good: 0,
                bad: 0
            }
            .percentage(),
            0.0
        );
    }
}
