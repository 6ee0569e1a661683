//! # docx-quiz
//!
//! Practice exams built from Word documents. Each `.docx` holds numbered
//! questions followed by their options; the options highlighted in yellow
//! are the correct answers.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use docx_quiz::{Config, Quiz, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     let config = Config {
//!         files: vec!["Practica/unidad1.docx".into()],
//!         ..Config::default()
//!     };
//!
//!     // Load the documents and run the quiz in the terminal
//!     let quiz = Quiz::from_config(&config)?;
//!     if let Some(summary) = quiz.run()? {
//!         println!("{} of {} correct", summary.good, summary.total);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod app;
pub mod checker;
mod data;
pub mod document;
mod models;
mod presenter;
pub mod session;
pub mod terminal;
mod ui;

use std::io;
use std::path::PathBuf;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;

pub use app::{App, Flow};
pub use checker::{check, CheckError, Selection, Verdict};
pub use data::{load_questions, parse, sort_by_number, LoadError, ParserConfig};
pub use models::{Answer, AppState, Question, QuestionKind, QuizOption, TrueFalse};
pub use presenter::{KeyOutcome, QuestionView, TerminalPresenter};
pub use session::{build_pool, Outcome, Presenter, Session, Source, Summary};

pub const DEFAULT_PICKER_DIR: &str = "Practica";

/// Error type for quiz operations.
#[derive(Error, Debug)]
pub enum QuizError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("{counts} question counts given for {files} files")]
    Counts { counts: usize, files: usize },
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Everything the command line can set.
#[derive(Debug, Clone)]
pub struct Config {
    /// Documents to load up front. Empty means "use the picker".
    pub files: Vec<PathBuf>,
    /// Questions to take from each of `files`, by position.
    pub counts: Vec<usize>,
    /// Directory listed by the picker.
    pub dir: PathBuf,
    pub parser: ParserConfig,
    pub seed: Option<u64>,
    /// Order dumped questions by their number instead of document order.
    pub sort_by_number: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            counts: Vec::new(),
            dir: PathBuf::from(DEFAULT_PICKER_DIR),
            parser: ParserConfig::default(),
            seed: None,
            sort_by_number: false,
        }
    }
}

impl Config {
    /// Load every file named on the command line, pairing it with its count.
    pub fn load_sources(&self) -> Result<Vec<Source>, QuizError> {
        if self.counts.len() > self.files.len() {
            return Err(QuizError::Counts {
                counts: self.counts.len(),
                files: self.files.len(),
            });
        }

        self.files
            .iter()
            .enumerate()
            .map(|(index, path)| {
                let questions = load_questions(path, &self.parser)?;
                Ok(Source {
                    count: self.counts.get(index).copied(),
                    ..Source::new(app::label_for(path), questions)
                })
            })
            .collect()
    }

    /// Directory for the picker; the working directory when `dir` is missing.
    fn picker_dir(&self) -> PathBuf {
        if self.dir.is_dir() {
            self.dir.clone()
        } else {
            PathBuf::from(".")
        }
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Parse the configured files and render their questions as pretty JSON.
pub fn dump_json(config: &Config) -> Result<String, QuizError> {
    let mut all = Vec::new();
    for path in &config.files {
        let mut questions = load_questions(path, &config.parser)?;
        if config.sort_by_number {
            sort_by_number(&mut questions);
        }
        all.extend(questions);
    }
    Ok(serde_json::to_string_pretty(&all)?)
}

/// A quiz ready to run in the terminal.
pub struct Quiz {
    app: App,
    rng: StdRng,
}

impl Quiz {
    /// Documents named in `config` are loaded now; a failure here is
    /// returned before the terminal is touched. Without files the picker
    /// is shown instead.
    pub fn from_config(config: &Config) -> Result<Self, QuizError> {
        let app = if config.files.is_empty() {
            App::with_picker(&config.picker_dir(), config.parser)
        } else {
            App::with_sources(config.load_sources()?)
        };

        Ok(Self {
            app,
            rng: config.rng(),
        })
    }

    /// Run setup, the session and the result screen. Returns `None` when
    /// the user quits before the end.
    pub fn run(mut self) -> Result<Option<Summary>, QuizError> {
        let mut term = terminal::TerminalGuard::enter()?;

        let Some(sources) = run_setup(&mut term, &mut self.app)? else {
            return Ok(None);
        };
        let questions = build_pool(sources, &mut self.rng);

        let outcome = Session::new(questions).run(&mut TerminalPresenter::new(&mut term))?;
        let Outcome::Completed(summary) = outcome else {
            return Ok(None);
        };

        term.draw(|frame| ui::render_summary(frame, &summary))?;
        wait_for_key()?;

        Ok(Some(summary))
    }
}

fn run_setup(terminal: &mut terminal::AppTerminal, app: &mut App) -> Result<Option<Vec<Source>>, QuizError> {
    loop {
        terminal.draw(|frame| ui::render_setup(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match handle_input(app, key.code) {
                Flow::Continue => {}
                Flow::Quit => return Ok(None),
                Flow::Ready(sources) => return Ok(Some(sources)),
            }
        }
    }
}

fn wait_for_key() -> io::Result<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}

fn handle_input(app: &mut App, key: KeyCode) -> Flow {
    match app.state {
        AppState::Welcome => handle_welcome_input(app, key),
        AppState::Picker => handle_picker_input(app, key),
        AppState::Counts => handle_counts_input(app, key),
    }
}

fn handle_welcome_input(app: &mut App, key: KeyCode) -> Flow {
    match key {
        KeyCode::Enter => app.start(),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Flow::Quit,
        _ => Flow::Continue,
    }
}

fn handle_picker_input(app: &mut App, key: KeyCode) -> Flow {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_entry(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_entry(),
        KeyCode::Char(' ') => app.toggle_entry(),
        KeyCode::Enter => app.confirm_selection(),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Flow::Quit,
        _ => {}
    }
    Flow::Continue
}

fn handle_counts_input(app: &mut App, key: KeyCode) -> Flow {
    match key {
        KeyCode::Char(c) if c.is_ascii_digit() => app.push_count_digit(c),
        KeyCode::Backspace => app.pop_count_digit(),
        KeyCode::Enter => return app.confirm_count(),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Flow::Quit,
        _ => {}
    }
    Flow::Continue
}
