use std::fs;
use std::path::{Path, PathBuf};

use crate::data::{load_questions, ParserConfig};
use crate::models::AppState;
use crate::session::Source;

const MIN_COUNT: usize = 1;
const MAX_COUNT: usize = 100;
const COUNT_INPUT_LENGTH: usize = 3;

/// A `.docx` file offered by the picker; `source` is set once it loaded.
pub struct PickerEntry {
    pub path: PathBuf,
    pub source: Option<Source>,
}

impl PickerEntry {
    pub fn new(path: PathBuf) -> Self {
        Self { path, source: None }
    }

    pub fn is_selected(&self) -> bool {
        self.source.is_some()
    }

    pub fn label(&self) -> String {
        label_for(&self.path)
    }
}

/// Result of feeding one key to the setup screens.
pub enum Flow {
    Continue,
    Quit,
    Ready(Vec<Source>),
}

/// State of the screens shown before the session: welcome, file picker
/// and the per-document question count prompt.
pub struct App {
    pub state: AppState,
    parser: ParserConfig,
    entries: Vec<PickerEntry>,
    cursor: usize,
    status: Option<String>,
    pending: Vec<Source>,
    count_index: usize,
    count_input: String,
}

impl App {
    /// Start with the picker listing `dir`.
    pub fn with_picker(dir: &Path, parser: ParserConfig) -> Self {
        let mut app = Self::with_entries(scan_docx(dir), parser);
        if app.entries.is_empty() {
            app.status = Some(format!("No .docx files in {}", dir.display()));
        }
        app
    }

    pub fn with_entries(entries: Vec<PickerEntry>, parser: ParserConfig) -> Self {
        Self {
            state: AppState::Welcome,
            parser,
            entries,
            cursor: 0,
            status: None,
            pending: Vec::new(),
            count_index: 0,
            count_input: String::new(),
        }
    }

    /// Documents already loaded from the command line; no picker or prompt.
    pub fn with_sources(sources: Vec<Source>) -> Self {
        let mut app = Self::with_entries(Vec::new(), ParserConfig::default());
        app.pending = sources;
        app
    }

    pub fn entries(&self) -> &[PickerEntry] {
        &self.entries
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn count_input(&self) -> &str {
        &self.count_input
    }

    /// The source whose count is being asked for.
    pub fn counting(&self) -> Option<&Source> {
        self.pending.get(self.count_index)
    }

    /// 1-based position of the count prompt and the number of prompts.
    pub fn count_progress(&self) -> (usize, usize) {
        (self.count_index + 1, self.pending.len())
    }

    pub fn start(&mut self) -> Flow {
        if !self.pending.is_empty() {
            return Flow::Ready(std::mem::take(&mut self.pending));
        }
        self.state = AppState::Picker;
        Flow::Continue
    }

    pub fn select_next_entry(&mut self) {
        if !self.entries.is_empty() {
            self.cursor = (self.cursor + 1) % self.entries.len();
        }
    }

    pub fn select_previous_entry(&mut self) {
        if !self.entries.is_empty() {
            self.cursor = (self.cursor + self.entries.len() - 1) % self.entries.len();
        }
    }

    /// Select or unselect the entry under the cursor. Selecting loads the
    /// document; a failed load leaves it unselected.
    pub fn toggle_entry(&mut self) {
        let parser = self.parser;
        let Some(entry) = self.entries.get_mut(self.cursor) else {
            return;
        };

        if entry.source.take().is_some() {
            self.status = None;
            return;
        }

        match load_questions(&entry.path, &parser) {
            Ok(questions) => {
                let source = Source::new(entry.label(), questions);
                self.status = Some(format!(
                    "{}: {} questions ready",
                    source.label,
                    source.playable()
                ));
                entry.source = Some(source);
            }
            Err(err) => self.status = Some(err.to_string()),
        }
    }

    /// Leave the picker once at least one document is selected.
    pub fn confirm_selection(&mut self) {
        let sources: Vec<Source> = self
            .entries
            .iter()
            .filter_map(|entry| entry.source.clone())
            .collect();

        if sources.is_empty() {
            self.status = Some("Select at least one file".to_string());
            return;
        }

        self.pending = sources;
        self.count_index = 0;
        self.count_input.clear();
        self.status = None;
        self.state = AppState::Counts;
    }

    pub fn push_count_digit(&mut self, digit: char) {
        if digit.is_ascii_digit() && self.count_input.len() < COUNT_INPUT_LENGTH {
            self.count_input.push(digit);
        }
    }

    pub fn pop_count_digit(&mut self) {
        self.count_input.pop();
    }

    /// Accept the typed count for the current document. Returns the full
    /// plan once every document has one.
    pub fn confirm_count(&mut self) -> Flow {
        let count = match self.count_input.parse::<usize>() {
            Ok(count) if (MIN_COUNT..=MAX_COUNT).contains(&count) => count,
            _ => {
                self.status = Some(format!("Enter a number from {} to {}", MIN_COUNT, MAX_COUNT));
                return Flow::Continue;
            }
        };

        if let Some(source) = self.pending.get_mut(self.count_index) {
            source.count = Some(count);
        }
        self.count_index += 1;
        self.count_input.clear();
        self.status = None;

        if self.count_index >= self.pending.len() {
            Flow::Ready(std::mem::take(&mut self.pending))
        } else {
            Flow::Continue
        }
    }
}

/// File name without directories, for display.
pub fn label_for(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// `.docx` files directly inside `dir`, sorted by name. Word lock files
/// (`~$name.docx`) are left out.
pub fn scan_docx(dir: &Path) -> Vec<PickerEntry> {
    let Ok(read_dir) = fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut paths: Vec<PathBuf> = read_dir
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file())
        .filter(|path| {
            path.extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("docx"))
        })
        .filter(|path| !label_for(path).starts_with("~$"))
        .collect();
    paths.sort();

    paths.into_iter().map(PickerEntry::new).collect()
}
